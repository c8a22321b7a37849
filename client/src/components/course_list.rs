//! Course catalog with live search and subject/difficulty filters.

use leptos::prelude::*;

use crate::state::courses::{ALL, CourseFilter, CourseListSurface, apply_filter, catalog, distinct};

#[derive(Clone, Copy)]
struct SignalCourseList {
    visible: RwSignal<Vec<bool>>,
    empty: RwSignal<bool>,
}

impl CourseListSurface for SignalCourseList {
    fn set_item_visible(&self, index: usize, visible: bool) {
        self.visible.update(|flags| {
            if let Some(flag) = flags.get_mut(index) {
                *flag = visible;
            }
        });
    }

    fn set_empty_state(&self, empty: bool) {
        self.empty.set(empty);
    }
}

/// "web-development" -> "Web Development".
fn option_label(value: &str) -> String {
    value
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn options(values: Vec<String>, all_label: &'static str) -> impl IntoView {
    view! {
        <option value=ALL>{all_label}</option>
        {values
            .into_iter()
            .map(|v| {
                let label = option_label(&v);
                view! { <option value=v>{label}</option> }
            })
            .collect::<Vec<_>>()}
    }
}

#[component]
pub fn CourseList() -> impl IntoView {
    let items = catalog();
    let subjects: Vec<String> = distinct(&items, |c| c.subject.as_str()).into_iter().map(str::to_owned).collect();
    let levels: Vec<String> = distinct(&items, |c| c.difficulty.as_str()).into_iter().map(str::to_owned).collect();

    let query = RwSignal::new(String::new());
    let subject = RwSignal::new(ALL.to_owned());
    let difficulty = RwSignal::new(ALL.to_owned());
    let surface = SignalCourseList {
        visible: RwSignal::new(vec![true; items.len()]),
        empty: RwSignal::new(items.is_empty()),
    };
    let items = StoredValue::new(items);

    // Recomputed synchronously on every input or selection change.
    let refilter = move || {
        let criteria = CourseFilter::new(&query.get_untracked(), &subject.get_untracked(), &difficulty.get_untracked());
        items.with_value(|items| apply_filter(items, &criteria, &surface));
    };

    let cards = items.with_value(|items| {
        items
            .iter()
            .enumerate()
            .map(|(index, course)| {
                let shown = move || surface.visible.with(|flags| flags.get(index).copied().unwrap_or(true));
                view! {
                    <article
                        class="course-card"
                        data-subject=course.subject.clone()
                        data-difficulty=course.difficulty.clone()
                        style:display=move || if shown() { "flex" } else { "none" }
                    >
                        <h3>{course.title.clone()}</h3>
                        <p class="course-card__meta">
                            {option_label(&course.subject)} " · " {option_label(&course.difficulty)}
                        </p>
                        <p>{course.summary.clone()}</p>
                    </article>
                }
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="course-filters">
            <input
                id="search-bar"
                type="search"
                placeholder="Search courses..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    refilter();
                }
            />
            <select
                id="subject-filter"
                on:change=move |ev| {
                    subject.set(event_target_value(&ev));
                    refilter();
                }
            >
                {options(subjects, "All Subjects")}
            </select>
            <select
                id="difficulty-filter"
                on:change=move |ev| {
                    difficulty.set(event_target_value(&ev));
                    refilter();
                }
            >
                {options(levels, "All Levels")}
            </select>
        </div>
        <div class="course-grid">{cards}</div>
        <p
            id="no-results-message"
            class="no-results"
            style:display=move || if surface.empty.get() { "block" } else { "none" }
        >
            "No courses match your search. Try different keywords or filters."
        </p>
    }
}
