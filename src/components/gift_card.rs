use crate::data::GIFT_CARD_OFFERS;
use crate::toast::{ToastManager, ToastTemplate};
use crate::wallet::{Wallet, format_money, quote_trade};
use dioxus::prelude::*;

#[component]
pub fn GiftCardOfferCard(index: usize, mut wallet: Signal<Wallet>) -> Element {
    let mut toasts = use_context::<ToastManager>();
    let mut amount = use_signal(String::new);

    let Some(offer) = GIFT_CARD_OFFERS.get(index) else {
        return rsx! {};
    };
    let rate = format_money(offer.rate, "₦");
    let preview = match quote_trade(offer, &amount.read()) {
        Ok(kobo) => format_money(kobo as f64 / 100.0, "₦"),
        Err(_) => "-".to_string(),
    };

    let handle_trade = move |_| {
        let input = amount.read().clone();
        match quote_trade(offer, &input) {
            Ok(kobo) => {
                let payout = format_money(kobo as f64 / 100.0, "₦");
                log::info!("Gift card trade: {} {} for {}", offer.brand, input.trim(), payout);
                wallet.write().credit(kobo);
                toasts.push(ToastTemplate::offer_accepted(offer.brand, &payout));
                amount.set(String::new());
            }
            Err(e) => {
                log::warn!("Rejected gift card trade for {}: {}", offer.brand, e);
                toasts.push(ToastTemplate::error(e.to_string()));
            }
        }
    };

    rsx! {
        article { class: "offer-card",
            img { src: "{offer.image}", alt: "{offer.brand} gift card" }
            h3 { "{offer.brand}" }
            p { class: "offer-rate", "{rate} / {offer.currency}" }
            p { class: "offer-range", "{offer.min} to {offer.max} {offer.currency}" }
            label { r#for: "offer-{index}", "Card value ({offer.currency})" }
            input {
                r#type: "number",
                id: "offer-{index}",
                min: "{offer.min}",
                max: "{offer.max}",
                value: "{amount}",
                oninput: move |event| amount.set(event.value()),
            }
            p { class: "offer-payout",
                "You receive: "
                strong { "{preview}" }
            }
            button { r#type: "button", onclick: handle_trade, "Trade card" }
        }
    }
}
