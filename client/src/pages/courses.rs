//! Course catalog page.

use leptos::prelude::*;

use crate::components::course_list::CourseList;

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <section class="page-intro">
            <h1>"Courses"</h1>
            <p>"Search the catalog or narrow it by subject and level."</p>
        </section>
        <CourseList/>
    }
}
