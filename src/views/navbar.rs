use crate::Route;
use crate::components::FooterNav;
use crate::data::nav_links;
use crate::utils::cn;
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            id: "navbar",
            class: cn(&["navbar", if menu_open() { "menu-open" } else { "" }]),
            Link { to: Route::Home {}, class: "navbar-logo", "Fynaro" }
            button {
                r#type: "button",
                class: "navbar-burger",
                aria_label: "Toggle menu",
                aria_expanded: menu_open(),
                onclick: move |_| menu_open.set(!menu_open()),
                "☰"
            }
            nav { class: "navbar-links",
                for link in nav_links() {
                    Link {
                        key: "{link.label}",
                        to: link.route,
                        active_class: "active",
                        onclick: move |_| menu_open.set(false),
                        "{link.label}"
                    }
                }
            }
        }
        main { class: "page", Outlet::<Route> {} }
        FooterNav {}
    }
}
