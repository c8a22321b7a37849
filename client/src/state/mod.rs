//! Page behavior state and controllers.
//!
//! DESIGN
//! ======
//! Each behavior (`theme`, `counter`, `carousel`, `courses`, `contact`,
//! `chat`) is a plain controller over a small binding trait. Components
//! implement the traits with signals; tests implement them with in-memory
//! doubles. No controller knows about any other.

pub mod carousel;
pub mod chat;
pub mod contact;
pub mod counter;
pub mod courses;
pub mod form;
pub mod responder;
pub mod theme;
