use crate::components::Reveal;
use crate::data::STATS;
use crate::hooks::use_count_up;
use dioxus::prelude::*;
use std::time::Duration;

const COUNT_DURATION: Duration = Duration::from_millis(1000);

#[component]
pub fn StatCounter(value: u64, label: String, #[props(default)] suffix: String) -> Element {
    let count = use_count_up(value, COUNT_DURATION);

    rsx! {
        div { class: "stat",
            span { class: "stat-value", "{count}{suffix}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[component]
pub fn StatsBlock() -> Element {
    rsx! {
        Reveal { class: "stats",
            for stat in STATS.iter() {
                StatCounter {
                    key: "{stat.label}",
                    value: stat.value,
                    label: stat.label,
                    suffix: stat.suffix,
                }
            }
        }
    }
}
