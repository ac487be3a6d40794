use crate::currency::{CURRENCIES, Currency, FlagIcon, get_currency_flag};
use crate::toast::{ToastManager, ToastTemplate};
use crate::utils::cn;
use dioxus::prelude::*;

#[component]
pub fn CurrencyStripe(mut selected: Signal<Currency>) -> Element {
    let mut toasts = use_context::<ToastManager>();

    rsx! {
        div { class: "currency-stripe", role: "radiogroup", aria_label: "Display currency",
            for currency in CURRENCIES.iter().copied() {
                CurrencyButton {
                    key: "{currency.code}",
                    currency: currency,
                    active: selected.read().code == currency.code,
                    onselect: move |c: Currency| {
                        if selected.read().code != c.code {
                            log::debug!("Currency switched to {}", c.code);
                            let note = format!("Balances now shown in {}.", c.name);
                            toasts.push(ToastTemplate::info(note));
                            selected.set(c);
                        }
                    },
                }
            }
        }
    }
}

/// One selector button; the flag is looked up independently of its siblings
#[component]
fn CurrencyButton(currency: Currency, active: bool, onselect: EventHandler<Currency>) -> Element {
    let code = currency.code;
    let flag = use_resource(move || async move {
        FlagIcon::from_lookup(code, get_currency_flag(code.to_string()).await)
    });

    let swatch = currency.swatch;
    let initials = currency.initials();

    rsx! {
        button {
            r#type: "button",
            role: "radio",
            aria_checked: active,
            title: "{currency.name}",
            class: cn(&["currency-button", if active { "active" } else { "" }]),
            onclick: move |_| onselect.call(currency),
            match &*flag.read() {
                Some(FlagIcon::Image(url)) => rsx! {
                    img { class: "currency-flag", src: "{url}", alt: "{code} flag" }
                },
                _ => rsx! {
                    span {
                        class: "currency-swatch",
                        style: "background-color: {swatch}",
                        "{initials}"
                    }
                },
            }
            span { class: "currency-code", "{code}" }
        }
    }
}
