//! Root application component with routing and the site-wide chrome.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{chat_widget::ChatWidget, site_header::SiteHeader};
use crate::pages::{contact::ContactPage, courses::CoursesPage, home::HomePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The header and chat widget sit outside the routes, so the chat transcript
/// survives client-side navigation between pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/siksha-connect.css"/>
        <Title text="SikshaConnect"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <footer class="site-footer">
                <p>"© SikshaConnect. Education for everyone."</p>
            </footer>
            <ChatWidget/>
        </Router>
    }
}
