//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, storage,
//! visibility observation, document classes) from state and component logic
//! to improve reuse and testability.

pub mod dark_mode;
pub mod scheduler;
pub mod storage;
pub mod visibility;
