//! Top navigation bar shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                "SikshaConnect"
            </A>
            <nav class="site-header__nav">
                <A href="/">"Home"</A>
                <A href="/courses">"Courses"</A>
                <A href="/contact">"Contact"</A>
            </nav>
            <ThemeToggle/>
        </header>
    }
}
