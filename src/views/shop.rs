use crate::Route;
use crate::components::{
    CurrencyStripe, GiftCardOfferCard, NairaWalletPanel, ProductCard, ProductFinderGrid, Reveal,
    TileSelection,
};
use crate::currency::naira;
use crate::data::{
    CATEGORIES, GIFT_CARD_OFFERS, OPENING_BALANCE_KOBO, autotech_products, order_items, products,
};
use crate::models::{CartItem, Product};
use crate::toast::{ToastManager, ToastTemplate};
use crate::wallet::{Wallet, format_money};
use dioxus::prelude::*;

/// Products in `category`; "All" (or no selection) keeps everything
pub fn filter_products(all: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category {
        None | Some("All") => all,
        Some(category) => all.into_iter().filter(|p| p.category == category).collect(),
    }
}

pub fn order_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

#[component]
pub fn Shop() -> Element {
    let selection = use_signal(|| TileSelection::with_active(0));
    let visible = use_memo(move || {
        filter_products(products(), selection.read().active_category(CATEGORIES))
    });

    rsx! {
        div { id: "shop-page", class: "section",
            h1 { "Shop" }
            p { "Studio packages, print runs and a few gadgets we like." }
            div { class: "shop-links",
                Link { to: Route::Credits {}, class: "button", "Credits & gift cards" }
                Link { to: Route::AutoTech {}, class: "button", "AutoTech" }
            }

            ProductFinderGrid { categories: CATEGORIES.to_vec(), selection: selection }

            Reveal { class: "product-grid",
                if visible.read().is_empty() {
                    p { "Nothing in this category yet." }
                }
                for product in visible.read().iter().cloned() {
                    ProductCard { key: "{product.id}", product: product.clone(),
                        Link { to: Route::Contact {}, class: "button", "Enquire" }
                    }
                }
            }
        }
    }
}

// wallet, currency selector, gift card trading and the pending order
#[component]
pub fn Credits() -> Element {
    let wallet = use_signal(|| Wallet::new(OPENING_BALANCE_KOBO));
    let currency = use_signal(naira);
    let items = order_items();
    let total = format_money(order_total(&items), "₦");

    rsx! {
        div { id: "credits-page", class: "section",
            h1 { "Credits" }

            CurrencyStripe { selected: currency }
            NairaWalletPanel { wallet: wallet, currency: currency }

            Reveal { class: "offers",
                h2 { "Trade a gift card" }
                div { class: "offer-grid",
                    for index in 0..GIFT_CARD_OFFERS.len() {
                        GiftCardOfferCard { key: "{index}", index: index, wallet: wallet }
                    }
                }
            }

            Reveal { class: "cart-summary", delay_ms: 150,
                h2 { "Your order" }
                ul { class: "order-items",
                    for item in items.iter() {
                        li { key: "{item.product.id}",
                            span { "{item.product.name} × {item.quantity}" }
                            span { {format_money(item.line_total(), "₦")} }
                        }
                    }
                }
                h3 { "Total: {total}" }
            }
        }
    }
}

// pick quantities of auto tech gadgets and place an order
#[component]
pub fn AutoTech() -> Element {
    let catalogue = use_hook(autotech_products);
    let mut toasts = use_context::<ToastManager>();
    let mut quantities = use_signal(|| vec![0u32; catalogue.len()]);

    let cart = {
        let catalogue = catalogue.clone();
        use_memo(move || {
            catalogue
                .iter()
                .zip(quantities.read().iter())
                .filter(|(_, quantity)| **quantity > 0)
                .map(|(product, quantity)| CartItem {
                    product: product.clone(),
                    quantity: *quantity,
                })
                .collect::<Vec<_>>()
        })
    };
    let total = use_memo(move || order_total(&cart.read()));
    let total_display = format_money(total(), "₦");

    let handle_order = move |_| {
        if total() > 0.0 {
            let summary = format_money(total(), "₦");
            log::info!("AutoTech order placed: {:?} for {}", &*cart.read(), summary);
            toasts.push(ToastTemplate::order_placed(&summary));
            let len = quantities.read().len();
            quantities.set(vec![0u32; len]);
        } else {
            log::warn!("Attempted to order with a total of 0.0. No action taken.");
        }
    };

    rsx! {
        div { id: "autotech-page", class: "section",
            h1 { "AutoTech" }
            p { "Gadgets for fleets and daily drivers, installed by our partners in Lagos." }

            div { class: "product-grid",
                for (index , product) in catalogue.iter().cloned().enumerate() {
                    ProductCard { key: "{product.id}", product: product.clone(),
                        label { r#for: "qty-{index}", "Quantity:" }
                        input {
                            r#type: "number",
                            id: "qty-{index}",
                            min: "0",
                            value: "{quantities.read()[index]}",
                            oninput: move |event| {
                                let value = event.value();
                                let quantity = if value.is_empty() {
                                    Some(0)
                                } else {
                                    value.parse::<u32>().ok()
                                };
                                if let Some(quantity) = quantity {
                                    if let Some(slot) = quantities.write().get_mut(index) {
                                        *slot = quantity;
                                    }
                                }
                            },
                        }
                    }
                }
            }

            div { class: "cart-summary",
                h2 { "Order Summary" }
                h3 { "Total: {total_display}" }
                button {
                    class: "button button-primary",
                    disabled: total() == 0.0,
                    onclick: handle_order,
                    "Place order"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_products_all_keeps_everything() {
        assert_eq!(filter_products(products(), Some("All")).len(), products().len());
        assert_eq!(filter_products(products(), None).len(), products().len());
    }

    #[test]
    fn test_filter_products_by_category() {
        let print = filter_products(products(), Some("Print"));
        assert!(!print.is_empty());
        assert!(print.iter().all(|p| p.category == "Print"));
        assert!(filter_products(products(), Some("Nope")).is_empty());
    }

    #[test]
    fn test_order_total() {
        assert_eq!(order_total(&[]), 0.0);
        assert_eq!(order_total(&order_items()), 200_000.0);
    }
}
