use crate::Route;
use crate::components::{Hero, Reveal, StatsBlock};
use crate::data::REASONS;
use dioxus::prelude::*;

#[component]
pub fn WhyFynaro() -> Element {
    rsx! {
        Hero {
            eyebrow: "Why Fynaro",
            title: String::from("Design that earns its keep."),
            subtitle: "Four reasons teams keep coming back.",
            Link { to: Route::Clients {}, class: "button", "Read client stories" }
        }

        div { class: "section reasons",
            for (index , reason) in REASONS.iter().enumerate() {
                Reveal { key: "{reason.title}", class: "reason", delay_ms: index as u32 * 120,
                    span { class: "reason-number", {format!("{:02}", index + 1)} }
                    h3 { "{reason.title}" }
                    p { "{reason.body}" }
                }
            }
        }

        StatsBlock {}
    }
}
