use crate::components::{Hero, Reveal};
use crate::models::ContactForm;
use crate::toast::{ToastManager, ToastTemplate};
use dioxus::prelude::*;

// capture name, email and message; nothing is sent anywhere, the form is logged and cleared
#[component]
pub fn Contact() -> Element {
    let mut toasts = use_context::<ToastManager>();
    let mut form = use_signal(ContactForm::default);

    let handle_submit = move |event: FormEvent| {
        event.prevent_default();
        let submitted = form.write().submit();
        match submitted {
            Some(sent) => {
                log::info!("Contact form captured: {:?}", sent);
                toasts.push(ToastTemplate::message_sent(&sent.name));
            }
            None => {
                log::warn!("Contact form submitted with empty fields. No action taken.");
                toasts.push(ToastTemplate::error("Please fill in your name, email and message."));
            }
        }
    };

    let ContactForm {
        name,
        email,
        message,
    } = form.read().clone();

    rsx! {
        Hero {
            eyebrow: "Contact",
            title: String::from("Tell us about your brand."),
            subtitle: "We reply to every message within one working day.",
            a { class: "button", href: "mailto:hello@fynaro.com", "hello@fynaro.com" }
        }

        Reveal { class: "section contact",
            form { id: "contact-form", class: "contact-form", onsubmit: handle_submit,
                label { r#for: "contact-name", "Name" }
                input {
                    r#type: "text",
                    id: "contact-name",
                    r#name: "name",
                    required: true,
                    value: "{name}",
                    oninput: move |event| form.write().name = event.value(),
                }
                label { r#for: "contact-email", "Email" }
                input {
                    r#type: "email",
                    id: "contact-email",
                    r#name: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |event| form.write().email = event.value(),
                }
                label { r#for: "contact-message", "Message" }
                textarea {
                    id: "contact-message",
                    r#name: "message",
                    rows: 6,
                    required: true,
                    value: "{message}",
                    oninput: move |event| form.write().message = event.value(),
                }
                button { id: "submit", r#type: "submit", class: "button button-primary",
                    "Send message"
                }
            }
            aside { class: "contact-details",
                h3 { "Studio" }
                p { "14 Herbert Macaulay Way, Yaba, Lagos" }
                h3 { "Hours" }
                p { "Monday to Friday, 9:00 to 18:00 WAT" }
            }
        }
    }
}
