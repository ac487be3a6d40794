use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No page at /{}", path);

    rsx! {
        div { id: "not-found-page", class: "section",
            h1 { "Page not found" }
            p { "We could not find /{path}." }
            Link { to: Route::Home {}, class: "button button-primary", "Back home" }
        }
    }
}
