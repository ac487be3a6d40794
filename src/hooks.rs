//! Timer-driven animation hooks
//!
//! Both hooks run inside `use_resource`, so the running timer is dropped with
//! the component and restarted whenever a signal it reads changes.

use crate::animation::{CountUp, TextReveal};
use crate::utils::sleep;
use dioxus::prelude::*;
use std::time::Duration;

/// Typewriter effect: the returned signal holds the revealed prefix of `text`
pub fn use_text_reveal(text: ReadOnlySignal<String>, delay: Duration) -> Signal<String> {
    let mut revealed = use_signal(String::new);

    let _reveal = use_resource(move || async move {
        let mut reveal = TextReveal::new(&text());
        revealed.set(String::new());
        while !reveal.is_done() {
            sleep(delay).await;
            if let Some(prefix) = reveal.tick() {
                revealed.set(prefix.to_string());
            }
        }
    });

    revealed
}

/// Counts up to `target` over `duration`; the signal holds the current value
pub fn use_count_up(target: u64, duration: Duration) -> Signal<u64> {
    let mut current = use_signal(|| 0u64);

    let _count = use_resource(move || async move {
        let mut counter = CountUp::new(target, duration);
        current.set(0);
        while !counter.is_done() {
            sleep(counter.interval()).await;
            counter.tick();
            current.set(counter.current());
        }
    });

    current
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::RefCell;

    thread_local! {
        static FRAMES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        static TEXT: RefCell<Option<Signal<String>>> = const { RefCell::new(None) };
        static SHOWN: RefCell<Option<Signal<bool>>> = const { RefCell::new(None) };
    }

    const DELAY: Duration = Duration::from_millis(10);

    fn record(frame: String) {
        FRAMES.with(|f| {
            let mut frames = f.borrow_mut();
            if frames.last() != Some(&frame) {
                frames.push(frame);
            }
        });
    }

    fn frames() -> Vec<String> {
        FRAMES.with(|f| f.borrow().clone())
    }

    /// Polls tasks and re-renders until `done` holds or `limit` elapses
    async fn drive(dom: &mut VirtualDom, limit: Duration, done: impl Fn() -> bool) {
        let deadline = tokio::time::Instant::now() + limit;
        while !done() {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                break;
            }
            if tokio::time::timeout(remaining, dom.wait_for_work()).await.is_err() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[component]
    fn Headline() -> Element {
        let text = use_signal(|| "Hi".to_string());
        TEXT.with(|t| *t.borrow_mut() = Some(text));
        let revealed = use_text_reveal(text.into(), DELAY);
        record(revealed());
        rsx! { h1 { "{revealed}" } }
    }

    #[component]
    fn Typing() -> Element {
        let text = use_signal(|| "Hello there".to_string());
        let revealed = use_text_reveal(text.into(), DELAY);
        record(revealed());
        rsx! { span { "{revealed}" } }
    }

    #[component]
    fn Toggle() -> Element {
        let shown = use_signal(|| true);
        SHOWN.with(|s| *s.borrow_mut() = Some(shown));
        rsx! {
            if shown() {
                Typing {}
            }
        }
    }

    #[component]
    fn Counter() -> Element {
        let current = use_count_up(50, Duration::from_millis(100));
        record(current().to_string());
        rsx! { span { "{current}+" } }
    }

    #[tokio::test]
    async fn test_text_reveal_restarts_when_text_changes() {
        let mut dom = VirtualDom::new(Headline);
        dom.rebuild_in_place();
        drive(&mut dom, Duration::from_secs(2), || {
            frames().last().map(String::as_str) == Some("Hi")
        })
        .await;
        assert_eq!(frames(), vec!["", "H", "Hi"]);

        let before = frames().len();
        dom.in_runtime(|| {
            TEXT.with(|t| {
                if let Some(mut text) = *t.borrow() {
                    text.set("Yo".to_string());
                }
            })
        });
        drive(&mut dom, Duration::from_secs(2), || {
            frames().last().map(String::as_str) == Some("Yo")
        })
        .await;

        assert_eq!(frames()[before..], ["", "Y", "Yo"]);
    }

    #[tokio::test]
    async fn test_text_reveal_stops_on_unmount() {
        let mut dom = VirtualDom::new(Toggle);
        dom.rebuild_in_place();
        drive(&mut dom, Duration::from_secs(2), || frames().len() >= 3).await;
        assert_eq!(frames(), vec!["", "H", "He"]);

        dom.in_runtime(|| {
            SHOWN.with(|s| {
                if let Some(mut shown) = *s.borrow() {
                    shown.set(false);
                }
            })
        });
        dom.render_immediate(&mut NoOpMutations);

        // several reveal delays pass without another frame
        drive(&mut dom, DELAY * 10, || false).await;
        assert_eq!(frames(), vec!["", "H", "He"]);
    }

    #[tokio::test]
    async fn test_count_up_settles_on_target() {
        let mut dom = VirtualDom::new(Counter);
        dom.rebuild_in_place();
        drive(&mut dom, Duration::from_secs(2), || {
            frames().last().map(String::as_str) == Some("50")
        })
        .await;

        // keeps running a while to make sure it never moves past the target
        drive(&mut dom, Duration::from_millis(200), || false).await;

        let values: Vec<u64> = frames().iter().filter_map(|f| f.parse().ok()).collect();
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&50));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
