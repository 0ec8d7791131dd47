// Settings module.
// Loads tunable delays and pricing constants from a JSON file in the config dir.

pub mod paths;
pub mod store;

use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShopError};

/// User-tunable settings. Every field has a default so partial files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How long a toast stays on screen.
    pub toast_ms: u64,
    /// Busy delay for add-to-cart from product listings and the stash.
    pub listing_add_delay_ms: u64,
    /// Busy delay for add-to-cart from the product detail view.
    pub detail_add_delay_ms: u64,
    /// Simulated payment processing time.
    pub payment_delay_ms: u64,
    /// Sales tax applied to the cart subtotal at checkout.
    pub tax_rate: Decimal,
    /// Flat fee for express shipping.
    pub express_shipping: Decimal,
    /// Upper bound of the catalog price slider.
    pub max_price_ceiling: u32,
    /// Tracing filter used when `AICE_SHOP_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            toast_ms: 3000,
            listing_add_delay_ms: 600,
            detail_add_delay_ms: 800,
            payment_delay_ms: 2000,
            tax_rate: Decimal::new(7, 2),
            express_shipping: Decimal::new(1500, 2),
            max_price_ceiling: 1000,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn listing_add_delay(&self) -> Duration {
        Duration::from_millis(self.listing_add_delay_ms)
    }

    pub fn detail_add_delay(&self) -> Duration {
        Duration::from_millis(self.detail_add_delay_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    /// Reject values that would make the storefront misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.tax_rate.is_sign_negative() {
            return Err(ShopError::Settings("tax_rate must not be negative".into()));
        }
        if self.express_shipping.is_sign_negative() {
            return Err(ShopError::Settings(
                "express_shipping must not be negative".into(),
            ));
        }
        if self.max_price_ceiling == 0 {
            return Err(ShopError::Settings(
                "max_price_ceiling must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Load settings from the platform config dir.
    pub fn load() -> Result<Self> {
        let path = paths::settings_path().ok_or(ShopError::NoConfigDir)?;
        Ok(Self::load_from(&path))
    }

    /// Load settings from a file, writing defaults on first run.
    /// Unreadable or invalid files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match store::read_json::<Settings>(path) {
            Ok(Some(settings)) => match settings.validate() {
                Ok(()) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring settings file");
                    Self::default()
                }
            },
            Ok(None) => {
                let settings = Self::default();
                if let Err(e) = store::write_json(path, &settings) {
                    tracing::warn!(path = %path.display(), error = %e, "could not write default settings");
                }
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read settings, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());

        let written: Option<Settings> = store::read_json(&path).unwrap();
        assert_eq!(written, Some(Settings::default()));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "toast_ms": 500, "tax_rate": "0.10" }"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.toast_ms, 500);
        assert_eq!(settings.tax_rate, Decimal::new(10, 2));
        assert_eq!(settings.payment_delay_ms, 2000);
        assert_eq!(settings.toast_duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "max_price_ceiling": 0 }"#).unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_garbage_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
