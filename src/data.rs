//! Hard-coded content standing in for a future backend
//!
//! Everything here is rebuilt on each load and never written back.

use crate::models::{ApiResponse, BlogPost, CartItem, PaginatedResponse, Product, User};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub struct NavLink {
    pub label: &'static str,
    pub route: crate::Route,
}

pub fn nav_links() -> Vec<NavLink> {
    use crate::Route;
    vec![
        NavLink {
            label: "About",
            route: Route::About {},
        },
        NavLink {
            label: "Clients",
            route: Route::Clients {},
        },
        NavLink {
            label: "Why Fynaro",
            route: Route::WhyFynaro {},
        },
        NavLink {
            label: "Shop",
            route: Route::Shop {},
        },
        NavLink {
            label: "Print requests",
            route: Route::PrintRequests {},
        },
        NavLink {
            label: "Contact",
            route: Route::Contact {},
        },
    ]
}

pub struct ClientLogo {
    pub name: &'static str,
    pub logo: &'static str,
    pub sector: &'static str,
}

pub const CLIENT_LOGOS: &[ClientLogo] = &[
    ClientLogo {
        name: "Kora Foods",
        logo: "/images/clients/kora.svg",
        sector: "FMCG",
    },
    ClientLogo {
        name: "Lagos Rides",
        logo: "/images/clients/lagos-rides.svg",
        sector: "Mobility",
    },
    ClientLogo {
        name: "Ebi Bank",
        logo: "/images/clients/ebi.svg",
        sector: "Finance",
    },
    ClientLogo {
        name: "Nomad Coffee",
        logo: "/images/clients/nomad.svg",
        sector: "Hospitality",
    },
    ClientLogo {
        name: "Sahel Energy",
        logo: "/images/clients/sahel.svg",
        sector: "Energy",
    },
    ClientLogo {
        name: "Oja Market",
        logo: "/images/clients/oja.svg",
        sector: "Retail",
    },
];

pub struct Stat {
    pub label: &'static str,
    pub value: u64,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Brands launched", value: 120, suffix: "+" },
    Stat { label: "Happy clients", value: 50, suffix: "+" },
    Stat { label: "Years in studio", value: 8, suffix: "" },
    Stat { label: "Client retention", value: 94, suffix: "%" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Fynaro gave our packaging a voice. Sales doubled the quarter we relaunched.",
        author: "Amaka Obi",
        role: "Head of Marketing, Kora Foods",
    },
    Testimonial {
        quote: "They turned a messy brief into an identity our riders are proud to wear.",
        author: "Tunde Bakare",
        role: "COO, Lagos Rides",
    },
    Testimonial {
        quote: "Fast, thoughtful and obsessive about the details that matter.",
        author: "Zainab Musa",
        role: "Founder, Nomad Coffee",
    },
];

pub struct Reason {
    pub title: &'static str,
    pub body: &'static str,
}

pub const REASONS: &[Reason] = &[
    Reason {
        title: "Strategy first",
        body: "Every mark we draw starts from research into your market and your customers.",
    },
    Reason {
        title: "One studio, end to end",
        body: "Identity, packaging, print and digital handled by the same team.",
    },
    Reason {
        title: "Built for Africa",
        body: "We design for the markets, screens and print shops our clients actually use.",
    },
    Reason {
        title: "Transparent pricing",
        body: "Fixed quotes per deliverable, paid in naira or credits.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In progress",
            RequestStatus::Completed => "Completed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "badge badge-pending",
            RequestStatus::InProgress => "badge badge-progress",
            RequestStatus::Completed => "badge badge-done",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrintRequest {
    pub id: String,
    pub client: String,
    pub item: String,
    pub quantity: u32,
    pub status: RequestStatus,
    pub submitted_on: NaiveDate,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn requests() -> Vec<PrintRequest> {
    let rows: [(&str, &str, &str, u32, RequestStatus, NaiveDate); 9] = [
        ("PR-1042", "Kora Foods", "Pouch labels", 5000, RequestStatus::Pending, date(2024, 5, 2)),
        (
            "PR-1041",
            "Lagos Rides",
            "Rider vests",
            300,
            RequestStatus::InProgress,
            date(2024, 4, 28),
        ),
        (
            "PR-1040",
            "Ebi Bank",
            "Branch posters A1",
            120,
            RequestStatus::Completed,
            date(2024, 4, 21),
        ),
        (
            "PR-1039",
            "Nomad Coffee",
            "Cup sleeves",
            2000,
            RequestStatus::InProgress,
            date(2024, 4, 19),
        ),
        (
            "PR-1038",
            "Oja Market",
            "Shelf wobblers",
            800,
            RequestStatus::Completed,
            date(2024, 4, 12),
        ),
        ("PR-1037", "Sahel Energy", "Annual report", 250, RequestStatus::Pending, date(2024, 4, 9)),
        (
            "PR-1036",
            "Kora Foods",
            "Trade show banners",
            6,
            RequestStatus::Completed,
            date(2024, 3, 30),
        ),
        (
            "PR-1035",
            "Ebi Bank",
            "Business cards",
            1500,
            RequestStatus::Completed,
            date(2024, 3, 22),
        ),
        ("PR-1034", "Lagos Rides", "Car decals", 400, RequestStatus::Pending, date(2024, 3, 18)),
    ];
    rows.into_iter()
        .map(|(id, client, item, quantity, status, submitted_on)| PrintRequest {
            id: id.to_string(),
            client: client.to_string(),
            item: item.to_string(),
            quantity,
            status,
            submitted_on,
        })
        .collect()
}

/// Mock endpoint for the print request listing
pub fn print_requests_page(
    status: Option<RequestStatus>,
    page: usize,
    per_page: usize,
) -> ApiResponse<PaginatedResponse<PrintRequest>> {
    let filtered: Vec<PrintRequest> = requests()
        .into_iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .collect();
    let listing = PaginatedResponse::paginate(&filtered, page, per_page);
    if listing.page > listing.total_pages() {
        return ApiResponse::error(format!("Page {} is out of range", listing.page));
    }
    ApiResponse::ok(listing)
}

pub fn count_by_status(status: RequestStatus) -> usize {
    requests().iter().filter(|r| r.status == status).count()
}

pub const CATEGORIES: &[&str] = &[
    "All",
    "Branding",
    "Packaging",
    "Print",
    "Merch",
    "Auto tech",
];

fn product(
    id: u32,
    name: &str,
    category: &str,
    price: f64,
    image: &str,
    description: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        image: image.to_string(),
        description: description.to_string(),
        in_stock: true,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Logo starter kit",
            "Branding",
            150_000.0,
            "/images/shop/logo-kit.svg",
            "Logo, palette and type pairing.",
        ),
        product(
            2,
            "Full identity system",
            "Branding",
            650_000.0,
            "/images/shop/identity.svg",
            "Guidelines, stationery and social templates.",
        ),
        product(
            3,
            "Pouch label design",
            "Packaging",
            90_000.0,
            "/images/shop/pouch.svg",
            "Print-ready label for one SKU.",
        ),
        product(
            4,
            "Box dieline",
            "Packaging",
            120_000.0,
            "/images/shop/box.svg",
            "Structural dieline with artwork.",
        ),
        product(
            5,
            "Business cards x500",
            "Print",
            25_000.0,
            "/images/shop/cards.svg",
            "350gsm matte, double sided.",
        ),
        product(
            6,
            "A1 posters x20",
            "Print",
            60_000.0,
            "/images/shop/posters.svg",
            "Full colour on satin stock.",
        ),
        product(
            7,
            "Branded tees x10",
            "Merch",
            75_000.0,
            "/images/shop/tees.svg",
            "Screen printed cotton tees.",
        ),
        product(
            8,
            "Dash cam HD",
            "Auto tech",
            48_500.0,
            "/images/shop/dashcam.svg",
            "1080p front camera with night mode.",
        ),
        product(
            9,
            "GPS fleet tracker",
            "Auto tech",
            36_000.0,
            "/images/shop/tracker.svg",
            "Live location with 12 months data.",
        ),
        product(
            10,
            "Wireless CarPlay adapter",
            "Auto tech",
            29_900.0,
            "/images/shop/carplay.svg",
            "Plug and play for factory head units.",
        ),
    ]
}

pub fn autotech_products() -> Vec<Product> {
    products()
        .into_iter()
        .filter(|p| p.category == "Auto tech")
        .collect()
}

/// Cart the credits page opens with
pub fn order_items() -> Vec<CartItem> {
    products()
        .into_iter()
        .filter(|p| p.id == 1 || p.id == 5)
        .map(|product| CartItem {
            quantity: if product.id == 5 { 2 } else { 1 },
            product,
        })
        .collect()
}

pub struct GiftCardOffer {
    pub brand: &'static str,
    pub image: &'static str,
    pub currency: &'static str,
    /// Naira paid per unit of card face value
    pub rate: f64,
    pub min: f64,
    pub max: f64,
}

pub const GIFT_CARD_OFFERS: &[GiftCardOffer] = &[
    GiftCardOffer {
        brand: "Amazon",
        image: "/images/cards/amazon.svg",
        currency: "USD",
        rate: 1150.0,
        min: 25.0,
        max: 500.0,
    },
    GiftCardOffer {
        brand: "Apple iTunes",
        image: "/images/cards/itunes.svg",
        currency: "USD",
        rate: 1220.0,
        min: 50.0,
        max: 1000.0,
    },
    GiftCardOffer {
        brand: "Steam",
        image: "/images/cards/steam.svg",
        currency: "USD",
        rate: 1080.0,
        min: 20.0,
        max: 300.0,
    },
    GiftCardOffer {
        brand: "Google Play",
        image: "/images/cards/google-play.svg",
        currency: "GBP",
        rate: 1390.0,
        min: 10.0,
        max: 200.0,
    },
];

pub fn wallet_owner() -> User {
    User {
        id: 7,
        name: "Chidi Okafor".to_string(),
        email: "chidi@fynaro.com".to_string(),
        avatar: None,
    }
}

/// Opening wallet balance in kobo
pub const OPENING_BALANCE_KOBO: i64 = 12_500_000;

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Designing for the Lagos shelf".to_string(),
            excerpt: "What we learned relaunching three FMCG brands in one year.".to_string(),
            author: "Fynaro Studio".to_string(),
            published_on: date(2024, 4, 2),
            slug: "designing-for-the-lagos-shelf".to_string(),
        },
        BlogPost {
            id: 2,
            title: "Print that survives the harmattan".to_string(),
            excerpt: "Stocks, inks and finishes that hold up outdoors.".to_string(),
            author: "Fynaro Print".to_string(),
            published_on: date(2024, 2, 15),
            slug: "print-that-survives-the-harmattan".to_string(),
        },
    ]
}
