//! Impact statistics that count up once the section is half visible.

use leptos::prelude::*;

/// A statistic and the number it counts up to.
#[derive(Clone, Copy, Debug)]
pub struct ImpactStat {
    pub target: u64,
    pub label: &'static str,
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct SignalCounter(RwSignal<u64>);

#[cfg(feature = "hydrate")]
impl crate::state::counter::CounterDisplay for SignalCounter {
    fn show(&self, value: u64) {
        self.0.set(value);
    }
}

#[component]
pub fn ImpactSection(stats: Vec<ImpactStat>) -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let values: Vec<RwSignal<u64>> = stats.iter().map(|_| RwSignal::new(0)).collect();

    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use crate::config::BehaviorConfig;
        use crate::state::counter::{CounterBinding, ImpactCounters};
        use crate::util::scheduler::BrowserScheduler;
        use crate::util::visibility::observe_visibility;

        let targets: Vec<u64> = stats.iter().map(|s| s.target).collect();
        let values = values.clone();
        let running = StoredValue::new_local(None::<Rc<ImpactCounters>>);
        Effect::new(move || {
            let Some(section) = section_ref.get() else {
                return;
            };
            let bindings = targets
                .iter()
                .zip(&values)
                .map(|(target, value)| CounterBinding { target: *target, display: Rc::new(SignalCounter(*value)) })
                .collect();
            let config = BehaviorConfig::default();
            let threshold = config.counter_visibility_threshold;
            let Some((group, disposer)) = ImpactCounters::init(Some(bindings), BrowserScheduler::shared(), config)
            else {
                return;
            };
            let watched = Rc::clone(&group);
            if let Some(watch) = observe_visibility(&section, threshold, move |ratio| watched.on_visibility(ratio)) {
                group.on_release(Box::new(move || watch.disconnect()));
            }
            running.set_value(Some(group));
            // The observer's callback holds the group; releasing it breaks the cycle.
            on_cleanup(move || {
                disposer.dispose();
                if let Some(group) = running.try_update_value(Option::take).flatten() {
                    group.release();
                }
            });
        });
    }

    view! {
        <section class="impact" node_ref=section_ref>
            <h2>"Our Impact"</h2>
            <div class="impact__grid">
                {stats
                    .into_iter()
                    .zip(values)
                    .map(|(stat, value)| {
                        view! {
                            <div class="impact__stat">
                                <h3 class="counter" data-target=stat.target.to_string()>
                                    {move || value.get()}
                                </h3>
                                <p>{stat.label}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
