// Static catalog provider.
// Owns the immutable product list and the category/brand vocabularies.

pub mod products;
pub mod types;

pub use products::mock_user;
pub use types::{Product, User, format_price};

use crate::error::{Result, ShopError};

/// Sentinel meaning "no filter" for category and brand.
pub const ALL: &str = "All";

pub const CATEGORIES: [&str; 6] = [
    ALL,
    "Sneakers",
    "T-Shirts",
    "Hoodies",
    "Accessories",
    "Collectibles",
];

pub const BRANDS: [&str; 8] = [
    ALL,
    "Nike",
    "Adidas",
    "Supreme",
    "Stüssy",
    "Carhartt",
    "New Balance",
    "AICE",
];

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Catalog backed by the built-in inventory.
    pub fn builtin() -> Self {
        Self::new(products::inventory())
    }

    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if it is not in the catalog.
    pub fn get(&self, id: &str) -> Result<&Product> {
        self.find(id)
            .ok_or_else(|| ShopError::UnknownProduct(id.to_string()))
    }

    /// Products flagged as new, in catalog order.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Brand shortcuts for the home page (the `All` sentinel is excluded).
    pub fn shop_brands() -> impl Iterator<Item = &'static str> {
        BRANDS.into_iter().filter(|b| *b != ALL)
    }

    /// Category shortcuts for the home page (the `All` sentinel is excluded).
    pub fn shop_categories() -> impl Iterator<Item = &'static str> {
        CATEGORIES.into_iter().filter(|c| *c != ALL)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
