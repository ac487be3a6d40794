use crate::Route;
use crate::components::{Hero, Reveal};
use crate::data::{CLIENT_LOGOS, TESTIMONIALS};
use dioxus::prelude::*;

#[component]
pub fn Clients() -> Element {
    let mut current = use_signal(|| 0usize);
    let count = TESTIMONIALS.len();
    let position = current() % count;
    let testimonial = &TESTIMONIALS[position];
    let shown = position + 1;

    rsx! {
        Hero {
            eyebrow: "Clients",
            title: String::from("Brands we have grown with."),
            subtitle: "From corner bakeries to listed banks.",
            Link { to: Route::Contact {}, class: "button button-primary", "Join them" }
        }

        Reveal { class: "section client-grid",
            for client in CLIENT_LOGOS.iter() {
                figure { key: "{client.name}", class: "client-logo",
                    img { src: "{client.logo}", alt: "{client.name}", loading: "lazy" }
                    figcaption {
                        strong { "{client.name}" }
                        span { "{client.sector}" }
                    }
                }
            }
        }

        Reveal { class: "section testimonials", delay_ms: 150,
            blockquote { class: "testimonial",
                p { "“{testimonial.quote}”" }
                footer {
                    strong { "{testimonial.author}" }
                    span { ", {testimonial.role}" }
                }
            }
            div { class: "testimonial-controls",
                button {
                    r#type: "button",
                    aria_label: "Previous testimonial",
                    onclick: move |_| current.set((current() + count - 1) % count),
                    "‹"
                }
                span { "{shown} / {count}" }
                button {
                    r#type: "button",
                    aria_label: "Next testimonial",
                    onclick: move |_| current.set((current() + 1) % count),
                    "›"
                }
            }
        }
    }
}
