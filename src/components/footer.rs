use crate::Route;
use crate::data::nav_links;
use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn FooterNav() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "footer-nav",
            div { class: "footer-brand",
                Link { to: Route::Home {}, class: "footer-logo", "Fynaro" }
                p { "Brand, packaging and print studio. Lagos and remote." }
            }
            nav { class: "footer-links",
                for link in nav_links() {
                    Link { key: "{link.label}", to: link.route, "{link.label}" }
                }
            }
            div { class: "footer-shop",
                h4 { "Shop" }
                Link { to: Route::Credits {}, "Credits & gift cards" }
                Link { to: Route::AutoTech {}, "AutoTech" }
            }
            p { class: "footer-copy", "© {year} Fynaro Studio" }
        }
    }
}
