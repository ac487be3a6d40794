//! Wallet balance formatting and gift-card trades
//!
//! Balances are whole kobo so credits never pick up float drift; conversion to
//! other currencies only happens for display.

use crate::currency::Currency;
use crate::data::GiftCardOffer;

pub const MASK: &str = "••••••";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TradeError {
    #[error("Enter the card amount as a number")]
    NotANumber,

    #[error("{brand} cards trade between {min} and {max}")]
    OutOfRange { brand: String, min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wallet {
    pub balance_kobo: i64,
    pub hidden: bool,
}

impl Wallet {
    pub fn new(balance_kobo: i64) -> Self {
        Wallet {
            balance_kobo,
            hidden: false,
        }
    }

    pub fn credit(&mut self, kobo: i64) {
        self.balance_kobo = self.balance_kobo.saturating_add(kobo);
    }

    pub fn toggle_hidden(&mut self) {
        self.hidden = !self.hidden;
    }

    /// Balance as shown in the panel, in `currency`
    pub fn display(&self, currency: &Currency) -> String {
        if self.hidden {
            return format!("{} {}", currency.symbol, MASK);
        }
        format_money(convert_from_kobo(self.balance_kobo, currency), currency.symbol)
    }
}

pub fn convert_from_kobo(kobo: i64, currency: &Currency) -> f64 {
    let naira = kobo as f64 / 100.0;
    if currency.naira_per_unit <= 0.0 {
        return naira;
    }
    naira / currency.naira_per_unit
}

/// `1234567.891, "₦"` -> `₦1,234,567.89`
pub fn format_money(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{fraction:02}")
}

/// Payout in kobo for `face_value` units of the offer's card
pub fn payout_kobo(offer: &GiftCardOffer, face_value: f64) -> i64 {
    (face_value * offer.rate * 100.0).round() as i64
}

/// Parses what the user typed into an offer card and prices it
pub fn quote_trade(offer: &GiftCardOffer, input: &str) -> Result<i64, TradeError> {
    let face_value: f64 = input.trim().parse().map_err(|_| TradeError::NotANumber)?;
    if !face_value.is_finite() {
        return Err(TradeError::NotANumber);
    }
    if face_value < offer.min || face_value > offer.max {
        return Err(TradeError::OutOfRange {
            brand: offer.brand.to_string(),
            min: offer.min,
            max: offer.max,
        });
    }
    Ok(payout_kobo(offer, face_value))
}
