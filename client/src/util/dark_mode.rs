//! Document-level theme presentation.
//!
//! Applies the `.dark-mode` class to the `<html>` element. Requires a browser
//! environment; server rendering and native tests no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{Theme, ThemeSurface};

pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                let _ = if theme.is_dark() {
                    class_list.add_1(DARK_MODE_CLASS)
                } else {
                    class_list.remove_1(DARK_MODE_CLASS)
                };
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// [`ThemeSurface`] for the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeSurface for DocumentTheme {
    fn apply(&self, theme: Theme) {
        apply(theme);
    }
}
