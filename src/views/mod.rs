//! Page-level components of the Fynaro site
//!
//! Each page composes section components from [`crate::components`] with the
//! mock data in [`crate::data`].

/// Navigation bar and site layout
mod navbar;
pub use navbar::Navbar;

/// Landing page
mod home;
pub use home::Home;

/// Studio story page
mod about;
pub use about::About;

/// Contact form page
mod contact;
pub use contact::Contact;

/// Client logos and testimonials
mod clients;
pub use clients::Clients;

/// Why-Fynaro page
mod why_fynaro;
pub use why_fynaro::WhyFynaro;

/// Shop, credits and AutoTech pages
mod shop;
pub use shop::{AutoTech, Credits, Shop};

/// Print request listing
mod print_requests;
pub use print_requests::PrintRequests;

/// Fallback for unknown routes
mod not_found;
pub use not_found::PageNotFound;
