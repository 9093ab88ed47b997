//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Shipping and tax rules are NOT configurable; they live in
//! `storefront_core::checkout`.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the simulated payment takes by default.
pub const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (page titles, order confirmation)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Simulated payment processing time in milliseconds
    pub checkout_delay_ms: u64,

    /// Catalog JSON file loaded at startup. `None` starts with an empty catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront".to_string(),
            currency_symbol: "$".to_string(),
            checkout_delay_ms: DEFAULT_CHECKOUT_DELAY_MS,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOREFRONT_CHECKOUT_DELAY_MS`: Override simulated payment time
    /// - `STOREFRONT_CATALOG_PATH`: Catalog JSON file to load
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("STOREFRONT_NAME") {
            config.store_name = name;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(delay) = lookup("STOREFRONT_CHECKOUT_DELAY_MS") {
            match delay.trim().parse::<u64>() {
                Ok(ms) => config.checkout_delay_ms = ms,
                Err(_) => tracing::warn!(value = %delay, "ignoring invalid STOREFRONT_CHECKOUT_DELAY_MS"),
            }
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ```rust
    /// use storefront_app::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(5399), "$53.99");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(999), "$9.99");
        assert_eq!(config.format_currency(6600), "$66.00");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[]));
        assert_eq!(config.checkout_delay(), Duration::from_millis(2000));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("STOREFRONT_NAME", "Gadget Hub"),
            ("STOREFRONT_CURRENCY_SYMBOL", "€"),
            ("STOREFRONT_CHECKOUT_DELAY_MS", "50"),
            ("STOREFRONT_CATALOG_PATH", "/srv/catalog.json"),
        ]));
        assert_eq!(config.store_name, "Gadget Hub");
        assert_eq!(config.format_currency(150), "€1.50");
        assert_eq!(config.checkout_delay_ms, 50);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
    }

    #[test]
    fn test_invalid_delay_keeps_default() {
        let config = ConfigState::from_lookup(lookup(&[("STOREFRONT_CHECKOUT_DELAY_MS", "soon")]));
        assert_eq!(config.checkout_delay_ms, DEFAULT_CHECKOUT_DELAY_MS);
    }
}
