//! Header switch for the light/dark theme.

use leptos::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::state::theme::{PreferenceStore, Theme, ThemeController, ThemeSurface};
use crate::util::dark_mode::DocumentTheme;
use crate::util::storage::BrowserStorage;

/// Document class plus the switch's checked state.
#[derive(Clone, Copy)]
struct ToggleSurface {
    theme: RwSignal<Theme>,
}

impl ThemeSurface for ToggleSurface {
    fn apply(&self, theme: Theme) {
        DocumentTheme.apply(theme);
        self.theme.set(theme);
    }
}

type BrowserThemeController = ThemeController<BrowserStorage, ToggleSurface>;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    let controller = StoredValue::new_local(None::<BrowserThemeController>);

    // Storage is only reachable after hydration, so the saved preference is
    // loaded here rather than during server rendering.
    Effect::new(move || {
        if controller.with_value(Option::is_none) {
            let store = PreferenceStore::new(BrowserStorage, THEME_STORAGE_KEY);
            controller.set_value(Some(ThemeController::init(store, ToggleSurface { theme })));
        }
    });

    let on_change = move |_| {
        controller.with_value(|c| {
            if let Some(c) = c {
                c.toggle();
            }
        });
    };

    view! {
        <label class="theme-switch" title="Toggle dark mode">
            <input
                id="theme-toggle"
                type="checkbox"
                prop:checked=move || theme.get().is_dark()
                on:change=on_change
            />
            <span class="theme-switch__slider"></span>
        </label>
    }
}
