// Catalog entity types.
// Products and the mock user identity shared across the storefront.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product in the static catalog. Never mutated after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_on_sale: bool,
}

impl Product {
    /// Short badge shown next to the product name.
    pub fn badge(&self) -> Option<&'static str> {
        if self.is_new {
            Some("NEW")
        } else if self.is_on_sale {
            Some("SALE")
        } else {
            None
        }
    }
}

/// An authenticated shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub id: String,
    pub balance: Decimal,
}

impl User {
    /// First word of the display name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Format a price for display (e.g., "$85.00").
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let user = User {
            name: "Alex Doe".to_string(),
            email: "alex@example.com".to_string(),
            id: "1".to_string(),
            balance: Decimal::ZERO,
        };
        assert_eq!(user.first_name(), "Alex");

        let mononym = User {
            name: "Prince".to_string(),
            ..user
        };
        assert_eq!(mononym.first_name(), "Prince");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(8500, 2)), "$85.00");
        assert_eq!(format_price(Decimal::new(1240, 1)), "$124.00");
        assert_eq!(format_price(Decimal::from(400)), "$400.00");
    }
}
