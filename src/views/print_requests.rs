use crate::data::{RequestStatus, count_by_status, print_requests_page, requests};
use crate::utils::cn;
use dioxus::prelude::*;

pub const PER_PAGE: usize = 5;

// list print requests as a table, filterable by status and paginated
#[component]
pub fn PrintRequests() -> Element {
    let mut filter = use_signal(|| None::<RequestStatus>);
    let mut page = use_signal(|| 1usize);

    let response = print_requests_page(filter(), page(), PER_PAGE);
    if !response.success {
        log::warn!("Print request listing failed: {:?}", response.error);
    }
    let total_count = requests().len();

    let mut select_filter = move |status: Option<RequestStatus>| {
        filter.set(status);
        page.set(1);
    };

    rsx! {
        div { id: "print-requests-page", class: "section",
            h1 { "Print requests" }

            div { class: "status-tabs", role: "tablist",
                button {
                    r#type: "button",
                    class: cn(&["status-tab", if filter().is_none() { "active" } else { "" }]),
                    onclick: move |_| select_filter(None),
                    "All ({total_count})"
                }
                for status in RequestStatus::ALL {
                    button {
                        key: "{status.label()}",
                        r#type: "button",
                        class: cn(&["status-tab", if filter() == Some(status) { "active" } else { "" }]),
                        onclick: move |_| select_filter(Some(status)),
                        "{status.label()} ({count_by_status(status)})"
                    }
                }
            }

            match response.data {
                Some(listing) if listing.items.is_empty() => rsx! {
                    p { "No print requests match this filter." }
                },
                Some(listing) => rsx! {
                    table { class: "requests-table",
                        thead {
                            tr {
                                th { "Request" }
                                th { "Client" }
                                th { "Item" }
                                th { "Quantity" }
                                th { "Submitted" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for request in listing.items.iter() {
                                tr { key: "{request.id}",
                                    td { "{request.id}" }
                                    td { "{request.client}" }
                                    td { "{request.item}" }
                                    td { "{request.quantity}" }
                                    td { {request.submitted_on.format("%d %b %Y").to_string()} }
                                    td {
                                        span { class: request.status.badge_class(), {request.status.label()} }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "pagination",
                        button {
                            r#type: "button",
                            disabled: !listing.has_previous(),
                            onclick: move |_| page.set(page().saturating_sub(1).max(1)),
                            "Previous"
                        }
                        span { "Page {listing.page} of {listing.total_pages()}" }
                        button {
                            r#type: "button",
                            disabled: !listing.has_next(),
                            onclick: move |_| page.set(page() + 1),
                            "Next"
                        }
                    }
                },
                None => rsx! {
                    p { class: "error-message",
                        "Error loading print requests: {response.error.clone().unwrap_or_default()}"
                    }
                },
            }
        }
    }
}
