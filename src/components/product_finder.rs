use crate::models::Product;
use crate::utils::cn;
use crate::wallet::format_money;
use dioxus::prelude::*;

/// Which category tile is highlighted; at most one at a time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileSelection {
    active: Option<usize>,
}

impl TileSelection {
    pub fn with_active(index: usize) -> Self {
        TileSelection {
            active: Some(index),
        }
    }

    /// Makes `index` the active tile; selecting it again keeps it active
    pub fn select(&mut self, index: usize) {
        self.active = Some(index);
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active_category<'a>(&self, categories: &[&'a str]) -> Option<&'a str> {
        self.active.and_then(|i| categories.get(i).copied())
    }
}

#[component]
pub fn ProductFinderGrid(
    categories: Vec<&'static str>,
    mut selection: Signal<TileSelection>,
) -> Element {
    rsx! {
        div { class: "finder-grid", role: "tablist",
            for (index , category) in categories.iter().enumerate() {
                button {
                    key: "{category}",
                    r#type: "button",
                    role: "tab",
                    class: cn(&["finder-tile", if selection.read().is_active(index) { "active" } else { "" }]),
                    aria_selected: selection.read().is_active(index),
                    onclick: move |_| {
                        log::debug!("Category tile {} selected", index);
                        selection.write().select(index);
                    },
                    "{category}"
                }
            }
        }
    }
}

#[component]
pub fn ProductCard(product: Product, children: Element) -> Element {
    let price = format_money(product.price, "₦");

    rsx! {
        article { class: "product-card",
            img { src: "{product.image}", alt: "{product.name}", loading: "lazy" }
            div { class: "product-info",
                span { class: "product-category", "{product.category}" }
                h3 { "{product.name}" }
                p { class: "product-description", "{product.description}" }
                p { class: "product-price", "{price}" }
                if !product.in_stock {
                    p { class: "product-stock", "Out of stock" }
                }
                {children}
            }
        }
    }
}
