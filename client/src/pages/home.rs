//! Landing page: hero slider and impact statistics.

use leptos::prelude::*;

use crate::components::impact_counters::{ImpactSection, ImpactStat};
use crate::components::slider::{Slide, Slider};

const SLIDES: [Slide; 3] = [
    Slide {
        heading: "Learn without limits",
        body: "Free courses taught by volunteers, open to every student.",
    },
    Slide {
        heading: "Build real skills",
        body: "From your first web page to data analysis and design.",
    },
    Slide {
        heading: "Join a community",
        body: "Study with peers and mentors who want you to succeed.",
    },
];

const IMPACT: [ImpactStat; 3] = [
    ImpactStat { target: 12_000, label: "Students Reached" },
    ImpactStat { target: 150, label: "Volunteer Mentors" },
    ImpactStat { target: 45, label: "Partner Schools" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <Slider slides=SLIDES.to_vec()/>
            <a href="/courses" class="btn btn--primary hero__cta">
                "Explore Courses"
            </a>
        </section>
        <ImpactSection stats=IMPACT.to_vec()/>
    }
}
