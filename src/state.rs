//! Process-wide server state
//!
//! Only the flag cache lives here; everything else on the site is component-local.

#![cfg(feature = "server")]

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// Singleton
lazy_static! {
    /// Currency code -> resolved flag URL
    pub static ref FLAG_CACHE: Arc<Mutex<HashMap<String, String>>> =
        Arc::new(Mutex::new(HashMap::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_cache_roundtrip() {
        {
            let mut cache = FLAG_CACHE.lock().unwrap();
            cache.insert("TST".to_string(), "https://flagcdn.com/tst.png".to_string());
        }
        let cache = FLAG_CACHE.lock().unwrap();
        assert_eq!(
            cache.get("TST").map(String::as_str),
            Some("https://flagcdn.com/tst.png")
        );
    }
}
