//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's layout and delegates behavior to
//! `components`.

pub mod contact;
pub mod courses;
pub mod home;
