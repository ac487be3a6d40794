//! Currency selector data and flag lookups against restcountries
//!
//! Flags are cosmetic: every failure is swallowed and the button falls back
//! to its coloured swatch.

use dioxus::prelude::*;

const FLAG_API: &str = "https://restcountries.com/v3.1/currency";

/// Remote hosts images may be loaded from
pub const ALLOWED_IMAGE_HOSTS: &[&str] = &[
    "flagcdn.com",
    "upload.wikimedia.org",
    "images.unsplash.com",
    "res.cloudinary.com",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Mock fixed rate, naira for one unit
    pub naira_per_unit: f64,
    pub swatch: &'static str,
}

pub const CURRENCIES: &[Currency] = &[
    Currency {
        code: "NGN",
        name: "Nigerian naira",
        symbol: "₦",
        naira_per_unit: 1.0,
        swatch: "#008751",
    },
    Currency {
        code: "USD",
        name: "US dollar",
        symbol: "$",
        naira_per_unit: 1500.0,
        swatch: "#3c3b6e",
    },
    Currency {
        code: "GBP",
        name: "Pound sterling",
        symbol: "£",
        naira_per_unit: 1900.0,
        swatch: "#012169",
    },
    Currency {
        code: "EUR",
        name: "Euro",
        symbol: "€",
        naira_per_unit: 1620.0,
        swatch: "#003399",
    },
    Currency {
        code: "CAD",
        name: "Canadian dollar",
        symbol: "C$",
        naira_per_unit: 1100.0,
        swatch: "#d52b1e",
    },
    Currency {
        code: "GHS",
        name: "Ghanaian cedi",
        symbol: "₵",
        naira_per_unit: 100.0,
        swatch: "#fcd116",
    },
    Currency {
        code: "KES",
        name: "Kenyan shilling",
        symbol: "KSh",
        naira_per_unit: 11.5,
        swatch: "#006600",
    },
    Currency {
        code: "ZAR",
        name: "South African rand",
        symbol: "R",
        naira_per_unit: 80.0,
        swatch: "#007a4d",
    },
];

pub fn naira() -> Currency {
    CURRENCIES[0]
}

pub fn find(code: &str) -> Option<Currency> {
    CURRENCIES.iter().copied().find(|c| c.code == code)
}

impl Currency {
    /// First two letters of the code, shown on the fallback swatch
    pub fn initials(&self) -> &'static str {
        let code: &'static str = self.code;
        &code[..2]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FlagLookupError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: HTTP {0}")]
    Status(u16),

    #[error("No flag listed for this currency")]
    NoFlag,

    #[error("Image host not allowed: {0}")]
    HostNotAllowed(String),
}

/// What a currency button draws in its icon slot
#[derive(Debug, Clone, PartialEq)]
pub enum FlagIcon {
    Image(String),
    Fallback,
}

impl FlagIcon {
    pub fn from_lookup<E: std::fmt::Display>(code: &str, lookup: Result<String, E>) -> Self {
        match lookup {
            Ok(url) if is_allowed_image(&url) => FlagIcon::Image(url),
            Ok(url) => {
                log::debug!("Flag for {} ignored, host not allowed: {}", code, url);
                FlagIcon::Fallback
            }
            Err(e) => {
                log::debug!("Flag lookup for {} failed: {}", code, e);
                FlagIcon::Fallback
            }
        }
    }
}

/// Extracts the host of an `http(s)` URL
fn host_of(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit('@').next()?;
    let host = host.split(':').next()?;
    (!host.is_empty()).then_some(host)
}

pub fn is_allowed_image(url: &str) -> bool {
    host_of(url).is_some_and(|host| {
        ALLOWED_IMAGE_HOSTS
            .iter()
            .any(|allowed| host == *allowed || host.ends_with(&format!(".{allowed}")))
    })
}

/// Picks the first country's flag out of a restcountries response
pub fn parse_flag_url(body: &str) -> Result<String, FlagLookupError> {
    let countries: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let flags = countries
        .first()
        .and_then(|country| country.get("flags"))
        .ok_or(FlagLookupError::NoFlag)?;
    let url = ["png", "svg"]
        .iter()
        .find_map(|kind| flags.get(kind).and_then(|v| v.as_str()))
        .ok_or(FlagLookupError::NoFlag)?;
    if !is_allowed_image(url) {
        return Err(FlagLookupError::HostNotAllowed(url.to_string()));
    }
    Ok(url.to_string())
}

#[cfg(feature = "server")]
async fn lookup_flag(code: &str) -> Result<String, FlagLookupError> {
    use crate::state::FLAG_CACHE;

    if let Ok(cache) = FLAG_CACHE.lock() {
        if let Some(url) = cache.get(code) {
            return Ok(url.clone());
        }
    }

    let http = |e: reqwest::Error| FlagLookupError::Http(e.to_string());
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(http)?;
    let response = client
        .get(format!("{}/{}", FLAG_API, code.to_lowercase()))
        .send()
        .await
        .map_err(http)?;
    if !response.status().is_success() {
        return Err(FlagLookupError::Status(response.status().as_u16()));
    }
    let body = response.text().await.map_err(http)?;
    let url = parse_flag_url(&body)?;

    if let Ok(mut cache) = FLAG_CACHE.lock() {
        cache.insert(code.to_string(), url.clone());
    }
    log::debug!("Flag for {} resolved to {}", code, url);
    Ok(url)
}

#[server]
pub async fn get_currency_flag(code: String) -> Result<String, ServerFnError> {
    if find(&code).is_none() {
        return Err(ServerFnError::new(format!("Unknown currency {}", code)));
    }
    lookup_flag(&code)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_url_prefers_png() {
        let body = r#"[{"name":{"common":"Nigeria"},"flags":{"png":"https://flagcdn.com/w320/ng.png","svg":"https://flagcdn.com/ng.svg"}}]"#;
        assert_eq!(parse_flag_url(body).unwrap(), "https://flagcdn.com/w320/ng.png");
    }

    #[test]
    fn test_parse_flag_url_falls_back_to_svg() {
        let body = r#"[{"flags":{"svg":"https://upload.wikimedia.org/flag.svg"}}]"#;
        assert_eq!(parse_flag_url(body).unwrap(), "https://upload.wikimedia.org/flag.svg");
    }

    #[test]
    fn test_parse_flag_url_errors() {
        assert!(matches!(parse_flag_url("[]"), Err(FlagLookupError::NoFlag)));
        assert!(matches!(
            parse_flag_url(r#"{"status":404,"message":"Not Found"}"#),
            Err(FlagLookupError::Json(_))
        ));
        assert!(matches!(
            parse_flag_url(r#"[{"flags":{"png":"https://evil.example/x.png"}}]"#),
            Err(FlagLookupError::HostNotAllowed(_))
        ));
    }

    #[test]
    fn test_is_allowed_image() {
        assert!(is_allowed_image("https://flagcdn.com/w320/ng.png"));
        assert!(is_allowed_image("https://cdn.flagcdn.com/gh.png"));
        assert!(is_allowed_image("http://res.cloudinary.com:443/fynaro/logo.png"));
        assert!(!is_allowed_image("https://notflagcdn.com/ng.png"));
        assert!(!is_allowed_image("https://flagcdn.com.evil.io/ng.png"));
        assert!(!is_allowed_image("/images/logo.png"));
        assert!(!is_allowed_image("javascript:alert(1)"));
    }

    #[test]
    fn test_failed_lookup_keeps_fallback_swatch() {
        let failed: Result<String, FlagLookupError> = Err(FlagLookupError::Status(500));
        assert_eq!(FlagIcon::from_lookup("NGN", failed), FlagIcon::Fallback);

        let foreign: Result<String, FlagLookupError> =
            Ok("https://evil.example/ng.png".to_string());
        assert_eq!(FlagIcon::from_lookup("NGN", foreign), FlagIcon::Fallback);

        let ok: Result<String, FlagLookupError> = Ok("https://flagcdn.com/ng.png".to_string());
        assert_eq!(
            FlagIcon::from_lookup("NGN", ok),
            FlagIcon::Image("https://flagcdn.com/ng.png".to_string())
        );
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(naira().code, "NGN");
        assert_eq!(find("GBP").map(|c| c.symbol), Some("£"));
        assert!(find("XYZ").is_none());
        assert_eq!(find("KES").unwrap().initials(), "KE");
    }
}
