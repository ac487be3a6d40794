use crate::utils::cn;
use dioxus::prelude::*;

/// Wraps a section so it slides in once mounted; the transition lives in `main.css`
#[component]
pub fn Reveal(
    #[props(default)] class: String,
    #[props(default = 0)] delay_ms: u32,
    children: Element,
) -> Element {
    let mut visible = use_signal(|| false);
    let state = if visible() { "is-visible" } else { "" };

    rsx! {
        div {
            class: cn(&["reveal", &class, state]),
            style: "transition-delay: {delay_ms}ms",
            onmounted: move |_| visible.set(true),
            {children}
        }
    }
}
