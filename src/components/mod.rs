//! Section and leaf components shared between pages

/// Fade-in wrapper for page sections
mod reveal;
pub use reveal::Reveal;

/// Page hero with the typewriter headline
mod hero;
pub use hero::Hero;

/// Count-up statistics
mod stats;
pub use stats::StatsBlock;

/// Category tiles for the shop
mod product_finder;
pub use product_finder::{ProductCard, ProductFinderGrid, TileSelection};

/// Currency selector with flag icons
mod currency_stripe;
pub use currency_stripe::CurrencyStripe;

/// Wallet balance panel
mod wallet_panel;
pub use wallet_panel::NairaWalletPanel;

/// Gift card trading card
mod gift_card;
pub use gift_card::GiftCardOfferCard;

/// Site footer
mod footer;
pub use footer::FooterNav;
