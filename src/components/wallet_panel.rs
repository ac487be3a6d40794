use crate::currency::Currency;
use crate::data::wallet_owner;
use crate::wallet::Wallet;
use dioxus::prelude::*;

#[component]
pub fn NairaWalletPanel(mut wallet: Signal<Wallet>, currency: Signal<Currency>) -> Element {
    let owner = wallet_owner();
    let balance = wallet.read().display(&currency.read());
    let hidden = wallet.read().hidden;
    let code = currency.read().code;

    rsx! {
        section { class: "wallet-panel",
            header { class: "wallet-header",
                div { class: "wallet-holder",
                    if let Some(avatar) = &owner.avatar {
                        img { class: "wallet-avatar", src: "{avatar}", alt: "{owner.name}" }
                    }
                    p { class: "wallet-label", "Wallet balance" }
                    p { class: "wallet-owner", "{owner.name} · {owner.email}" }
                }
                button {
                    r#type: "button",
                    class: "wallet-toggle",
                    aria_pressed: hidden,
                    onclick: move |_| wallet.write().toggle_hidden(),
                    if hidden {
                        "Show"
                    } else {
                        "Hide"
                    }
                }
            }
            p { class: "wallet-balance", "{balance}" }
            p { class: "wallet-note", "Shown in {code}. Balances are held in naira." }
        }
    }
}
