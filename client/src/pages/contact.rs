//! Contact page.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page-intro">
            <h1>"Contact Us"</h1>
            <p>"Questions about a course or volunteering? Send us a note."</p>
        </section>
        <ContactForm/>
    }
}
