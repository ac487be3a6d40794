//! View-model shapes shared by the pages
//!
//! None of these are backed by a store. They describe what a future backend
//! would hand to the site and are filled from the mock data in [`crate::data`].

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Price in naira
    pub price: f64,
    pub image: String,
    pub description: String,
    pub in_stock: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All three fields carry something other than whitespace
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Takes the captured values out of the form, leaving it empty.
    ///
    /// Returns `None` and keeps the fields untouched when the form is incomplete.
    pub fn submit(&mut self) -> Option<ContactForm> {
        if !self.is_complete() {
            return None;
        }
        let submitted = ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        *self = ContactForm::default();
        Some(submitted)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub published_on: chrono::NaiveDate,
    pub slug: String,
}

/// Envelope a backend response would arrive in
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl<T: Clone> PaginatedResponse<T> {
    /// Cuts one page out of `all`. Page numbers below 1 are read as 1 and a
    /// `per_page` of 0 as 1; a page past the end carries no items.
    pub fn paginate(all: &[T], page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let start = (page - 1).saturating_mul(per_page);
        let items = all
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();
        PaginatedResponse {
            items,
            page,
            per_page,
            total: all.len(),
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page.max(1))
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(price: f64) -> Product {
        Product {
            id: 1,
            name: "Dash cam".to_string(),
            category: "Auto".to_string(),
            price,
            image: "/images/dashcam.png".to_string(),
            description: String::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_cart_item_line_total() {
        let item = CartItem {
            product: sample_product(2500.0),
            quantity: 3,
        };
        assert_eq!(item.line_total(), 7500.0);
    }

    #[test]
    fn test_contact_form_submit_clears_fields() {
        let mut form = ContactForm {
            name: " Ada ".to_string(),
            email: "ada@fynaro.com".to_string(),
            message: "We need a new logo".to_string(),
        };
        let submitted = form.submit().unwrap();
        assert_eq!(submitted.name, "Ada");
        assert_eq!(submitted.message, "We need a new logo");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_contact_form_incomplete_is_kept() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            email: "   ".to_string(),
            message: "Hello".to_string(),
        };
        assert!(form.submit().is_none());
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn test_api_response_constructors() {
        let ok = ApiResponse::ok(3);
        assert!(ok.success);
        assert_eq!(ok.data, Some(3));

        let err: ApiResponse<u8> = ApiResponse::error("boom");
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_paginate() {
        let all: Vec<u32> = (1..=12).collect();

        let first = PaginatedResponse::paginate(&all, 1, 5);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages(), 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = PaginatedResponse::paginate(&all, 3, 5);
        assert_eq!(last.items, vec![11, 12]);
        assert!(!last.has_next());
        assert!(last.has_previous());

        let past_end = PaginatedResponse::paginate(&all, 9, 5);
        assert!(past_end.items.is_empty());
    }

    #[test]
    fn test_paginate_degenerate_inputs() {
        let empty: Vec<u32> = Vec::new();
        let page = PaginatedResponse::paginate(&empty, 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.total_pages(), 1);
        assert!(!page.has_next());
    }
}
