// Shopping cart state.
// One line per product id; repeat adds bump the quantity, removal drops the line.

use rust_decimal::Decimal;

use crate::catalog::Product;

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    /// Size and color pickers are cosmetic and never read by cart logic.
    pub size: Option<String>,
    pub color: Option<String>,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            size: None,
            color: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Ordered cart contents, in first-added order.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product. Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return line.quantity;
        }
        self.lines.push(CartLine::new(product.clone()));
        1
    }

    /// Delete the line for a product id. Returns true if a line was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        self.lines.len() != before
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price times quantity across all lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_repeat_add_increments_single_line() {
        let catalog = Catalog::builtin();
        let hoodie = catalog.find("1").unwrap();
        let mut cart = Cart::new();

        assert_eq!(cart.add(hoodie), 1);
        assert_eq!(cart.add(hoodie), 2);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line("1").unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        let tee = catalog.find("4").unwrap();
        cart.add(tee);
        cart.add(tee);
        cart.add(catalog.find("7").unwrap());

        assert!(cart.remove("4"));
        assert!(cart.line("4").is_none());
        assert_eq!(cart.lines().len(), 1);

        // Second removal is a no-op
        assert!(!cart.remove("4"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_totals() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.add(catalog.find("1").unwrap()); // 85
        cart.add(catalog.find("1").unwrap()); // 85
        cart.add(catalog.find("6").unwrap()); // 35

        assert_eq!(cart.total(), Decimal::from(205));
        assert_eq!(cart.count(), 3);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.add(catalog.find("9").unwrap());
        cart.add(catalog.find("2").unwrap());
        cart.add(catalog.find("9").unwrap());

        let ids: Vec<&str> = cart.lines().iter().map(CartLine::id).collect();
        assert_eq!(ids, vec!["9", "2"]);
    }
}
