use crate::hooks::use_text_reveal;
use dioxus::prelude::*;
use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(60);

#[component]
pub fn Hero(
    title: ReadOnlySignal<String>,
    subtitle: String,
    #[props(default)] eyebrow: String,
    children: Element,
) -> Element {
    let typed = use_text_reveal(title, TYPE_DELAY);
    let done = typed.read().len() == title.read().len();

    rsx! {
        section { class: "hero",
            if !eyebrow.is_empty() {
                p { class: "hero-eyebrow", "{eyebrow}" }
            }
            h1 { class: "hero-title", aria_label: "{title}",
                "{typed}"
                if !done {
                    span { class: "hero-caret", "|" }
                }
            }
            p { class: "hero-subtitle", "{subtitle}" }
            div { class: "hero-actions", {children} }
        }
    }
}
