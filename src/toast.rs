//! Branded toast notifications
//!
//! `App` provides a [`ToastManager`] context; any component can grab it with
//! `use_context::<ToastManager>()` and push one of the templates below.

use crate::utils::{cn, sleep};
use dioxus::prelude::*;
use std::time::Duration;

pub const MAX_VISIBLE: usize = 4;
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✖",
            ToastKind::Info => "ℹ",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Content of a toast before it gets an id
#[derive(Debug, Clone, PartialEq)]
pub struct ToastTemplate {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl ToastTemplate {
    pub fn error(message: impl Into<String>) -> Self {
        ToastTemplate {
            kind: ToastKind::Error,
            title: "Something went wrong".to_string(),
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        ToastTemplate {
            kind: ToastKind::Info,
            title: "Fynaro".to_string(),
            message: message.into(),
        }
    }

    pub fn offer_accepted(brand: &str, payout: &str) -> Self {
        ToastTemplate {
            kind: ToastKind::Success,
            title: "Offer accepted".to_string(),
            message: format!(
                "Your {brand} card is being verified. {payout} will land in your wallet."
            ),
        }
    }

    pub fn order_placed(total: &str) -> Self {
        ToastTemplate {
            kind: ToastKind::Success,
            title: "Order placed".to_string(),
            message: format!("We have your order of {total}. Our team will reach out shortly."),
        }
    }

    pub fn message_sent(name: &str) -> Self {
        ToastTemplate {
            kind: ToastKind::Success,
            title: "Message sent".to_string(),
            message: format!("Thanks {name}, the studio will get back to you within a day."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Adds a toast, dropping the oldest ones past [`MAX_VISIBLE`]
    pub fn push(&mut self, template: ToastTemplate) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind: template.kind,
            title: template.title,
            message: template.message,
        });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, Copy)]
pub struct ToastManager {
    queue: Signal<ToastQueue>,
}

impl ToastManager {
    pub fn new() -> Self {
        ToastManager {
            queue: Signal::new(ToastQueue::default()),
        }
    }

    pub fn push(&mut self, template: ToastTemplate) {
        log::debug!("toast: {} - {}", template.title, template.message);
        self.queue.write().push(template);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }
}

#[component]
pub fn ToastHost() -> Element {
    let manager = use_context::<ToastManager>();
    let toasts = manager.queue.read().visible().to_vec();

    rsx! {
        div { class: "toast-host", role: "status",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut manager = use_context::<ToastManager>();
    let id = toast.id;
    let icon = toast.kind.icon();

    use_future(move || async move {
        sleep(TOAST_LIFETIME).await;
        manager.dismiss(id);
    });

    rsx! {
        div {
            class: cn(&["toast", toast.kind.class()]),
            onclick: move |_| manager.dismiss(id),
            span { class: "toast-icon", "{icon}" }
            div {
                strong { "{toast.title}" }
                p { "{toast.message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drops_oldest_past_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..6 {
            queue.push(ToastTemplate::info(format!("toast {i}")));
        }
        let visible = queue.visible();
        assert_eq!(visible.len(), MAX_VISIBLE);
        assert_eq!(visible[0].message, "toast 2");
        assert_eq!(visible[3].message, "toast 5");
    }

    #[test]
    fn test_queue_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastTemplate::info("one"));
        let second = queue.push(ToastTemplate::error("two"));
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].id, second);

        // unknown ids are ignored
        queue.dismiss(99);
        assert_eq!(queue.visible().len(), 1);
    }

    #[test]
    fn test_templates() {
        let t = ToastTemplate::offer_accepted("Amazon", "₦115,000.00");
        assert_eq!(t.kind, ToastKind::Success);
        assert_eq!(t.title, "Offer accepted");
        assert!(t.message.contains("Amazon"));
        assert!(t.message.contains("₦115,000.00"));

        let t = ToastTemplate::message_sent("Ada");
        assert!(t.message.starts_with("Thanks Ada"));

        assert_eq!(ToastTemplate::error("x").kind, ToastKind::Error);
    }
}
