use crate::Route;
use crate::components::{Hero, Reveal, StatsBlock};
use crate::data::{CLIENT_LOGOS, REASONS};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {
            eyebrow: "Fynaro Studio",
            title: String::from("We build brands people remember."),
            subtitle: "Identity, packaging and print for ambitious African businesses.",
            Link { to: Route::Contact {}, class: "button button-primary", "Start a project" }
            Link { to: Route::Shop {}, class: "button", "Visit the shop" }
        }

        StatsBlock {}

        Reveal { class: "section logo-strip",
            h2 { "Trusted by" }
            ul { class: "logo-row",
                for client in CLIENT_LOGOS.iter() {
                    li { key: "{client.name}",
                        img { src: "{client.logo}", alt: "{client.name}", loading: "lazy" }
                    }
                }
            }
            Link { to: Route::Clients {}, "See all clients" }
        }

        Reveal { class: "section services", delay_ms: 150,
            h2 { "What we do" }
            div { class: "card-grid",
                for reason in REASONS.iter().take(3) {
                    div { key: "{reason.title}", class: "card",
                        h3 { "{reason.title}" }
                        p { "{reason.body}" }
                    }
                }
            }
            Link { to: Route::WhyFynaro {}, "Why Fynaro" }
        }
    }
}
