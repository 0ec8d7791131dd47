// Catalog view state.
// Live filters, sort order, and search text owned by the shop listing.

use rust_decimal::Decimal;

use crate::catalog::{ALL, BRANDS, CATEGORIES, Product};

use super::list::SelectableList;

/// Price slider step.
const PRICE_STEP: u32 = 10;

/// Initial (category, brand) filter handed to the catalog by shortcuts elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilterSeed {
    pub category: String,
    pub brand: String,
}

impl CatalogFilterSeed {
    pub fn new(category: Option<&str>, brand: Option<&str>) -> Self {
        Self {
            category: category.unwrap_or(ALL).to_string(),
            brand: brand.unwrap_or(ALL).to_string(),
        }
    }
}

impl Default for CatalogFilterSeed {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Sort order for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "NEWEST DROP",
            SortOption::PriceLowHigh => "PRICE: LOW TO HIGH",
            SortOption::PriceHighLow => "PRICE: HIGH TO LOW",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortOption::Newest => SortOption::PriceLowHigh,
            SortOption::PriceLowHigh => SortOption::PriceHighLow,
            SortOption::PriceHighLow => SortOption::Newest,
        }
    }
}

/// State for the catalog view.
#[derive(Debug, Clone)]
pub struct CatalogViewState {
    pub category: String,
    pub brand: String,
    pub search: String,
    /// Whether keystrokes go to the search box.
    pub search_active: bool,
    pub max_price: u32,
    pub sort: SortOption,
    pub list: SelectableList,
    ceiling: u32,
    seed: CatalogFilterSeed,
}

impl CatalogViewState {
    pub fn new(ceiling: u32) -> Self {
        Self {
            category: ALL.to_string(),
            brand: ALL.to_string(),
            search: String::new(),
            search_active: false,
            max_price: ceiling,
            sort: SortOption::default(),
            list: SelectableList::new(),
            ceiling,
            seed: CatalogFilterSeed::default(),
        }
    }

    /// Adopt a new seed from the coordinator. Only a changed seed
    /// overrides the live category and brand filters.
    pub fn sync_seed(&mut self, seed: &CatalogFilterSeed) {
        if &self.seed == seed {
            return;
        }
        self.seed = seed.clone();
        self.category = seed.category.clone();
        self.brand = seed.brand.clone();
        self.list = SelectableList::new();
    }

    /// Force the live filters to match a seed, even if it is unchanged.
    pub fn apply_seed(&mut self, seed: &CatalogFilterSeed) {
        self.seed = seed.clone();
        self.category = seed.category.clone();
        self.brand = seed.brand.clone();
        self.list = SelectableList::new();
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Header title: the selected category or the full inventory.
    pub fn title(&self) -> &str {
        if self.category == ALL {
            "Full Inventory"
        } else {
            &self.category
        }
    }

    fn matches(&self, product: &Product) -> bool {
        let category = self.category == ALL || product.category == self.category;
        let brand = self.brand == ALL || product.brand == self.brand;
        let search = product
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let price = product.price <= Decimal::from(self.max_price);
        category && brand && search && price
    }

    /// Filtered and sorted products. Sorting is stable, so ties keep catalog order.
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut visible: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        match self.sort {
            SortOption::Newest => visible.sort_by(|a, b| b.is_new.cmp(&a.is_new)),
            SortOption::PriceLowHigh => visible.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOption::PriceHighLow => visible.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        visible
    }

    /// The product under the cursor.
    pub fn selected<'a>(&self, products: &'a [Product]) -> Option<&'a Product> {
        self.list.pick(&self.visible(products)).copied()
    }

    pub fn cycle_category(&mut self) {
        self.category = cycle(&CATEGORIES, &self.category);
        self.list = SelectableList::new();
    }

    pub fn cycle_brand(&mut self) {
        self.brand = cycle(&BRANDS, &self.brand);
        self.list = SelectableList::new();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    pub fn raise_price(&mut self) {
        self.max_price = (self.max_price + PRICE_STEP).min(self.ceiling);
    }

    pub fn lower_price(&mut self) {
        self.max_price = self.max_price.saturating_sub(PRICE_STEP);
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.list = SelectableList::new();
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.list = SelectableList::new();
    }

    /// Clear every filter back to the full inventory.
    pub fn reset(&mut self) {
        self.category = ALL.to_string();
        self.brand = ALL.to_string();
        self.max_price = self.ceiling;
        self.search.clear();
        self.search_active = false;
        self.list = SelectableList::new();
    }
}

/// Next entry in a vocabulary, wrapping around. Unknown values restart at the top.
fn cycle(vocabulary: &[&str], current: &str) -> String {
    let next = vocabulary
        .iter()
        .position(|v| *v == current)
        .map(|i| (i + 1) % vocabulary.len())
        .unwrap_or(0);
    vocabulary[next].to_string()
}
