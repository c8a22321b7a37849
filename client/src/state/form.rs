//! Field-level form validation.
//!
//! A [`FieldRule`] binds one field to a predicate over its trimmed value and
//! the message shown when the predicate fails. [`validate`] visits every rule,
//! so the user sees all violations at once, and reports the conjunction.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;

pub const NAME_REQUIRED: &str = "Name cannot be empty.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MESSAGE_REQUIRED: &str = "Message cannot be empty.";

/// A form control that can be read and annotated with an error.
pub trait ValidatedField {
    fn value(&self) -> String;
    fn show_error(&self, message: &str);
    fn clear_error(&self);
}

pub struct FieldRule<'a> {
    pub field: &'a dyn ValidatedField,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl<'a> FieldRule<'a> {
    pub fn new(field: &'a dyn ValidatedField, check: fn(&str) -> bool, message: &'static str) -> Self {
        Self { field, check, message }
    }

    /// Evaluate against the field's current trimmed value and update its
    /// annotation.
    pub fn apply(&self) -> bool {
        let value = self.field.value();
        let ok = (self.check)(trim_input(&value));
        if ok {
            self.field.clear_error();
        } else {
            self.field.show_error(self.message);
        }
        ok
    }
}

/// Evaluate every rule in order. No short-circuit: a failing rule does not
/// hide later failures.
pub fn validate(rules: &[FieldRule<'_>]) -> bool {
    rules.iter().fold(true, |all_ok, rule| rule.apply() & all_ok)
}

/// Strip leading and trailing whitespace as browsers do for form input,
/// which also counts the byte-order mark (U+FEFF) as whitespace.
#[must_use]
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s\x{FEFF}@"]+(\.[^<>()\[\]\\.,;:\s\x{FEFF}@"]+)*)|(".+"))"#,
        r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
    ))
    .map_err(|e| leptos::logging::warn!("email pattern failed to compile: {e}"))
    .ok()
});

/// `local@domain` check, case-insensitive.
///
/// The local part is a dot-separated run of characters outside
/// `<>()[]\.,;:@"` and whitespace (U+FEFF included), or any quoted string.
/// The domain is a bracketed IPv4 literal or `label.` segments ending in an
/// alphabetic TLD of two or more letters.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(&value.to_lowercase()))
}
