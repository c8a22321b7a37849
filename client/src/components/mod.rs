//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the interactive sections. Each one
//! adapts a controller from `state` to signals: the controller decides what
//! happens, the component's signals decide how it looks.

pub mod chat_widget;
pub mod contact_form;
pub mod course_list;
pub mod impact_counters;
pub mod site_header;
pub mod slider;
pub mod theme_toggle;
