// View routing state.
// The closed set of screens, chrome visibility rules, and breadcrumb trails.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{ALL, Product};

/// The screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewState {
    #[default]
    Home,
    Catalog,
    Product,
    Cart,
    Checkout,
    Login,
    Register,
    Profile,
    Wishlist,
    Success,
    #[serde(rename = "404")]
    NotFound,
}

/// Views reachable from the navigation bar, in display order.
pub const NAV_LINKS: [ViewState; 5] = [
    ViewState::Home,
    ViewState::Catalog,
    ViewState::Wishlist,
    ViewState::Profile,
    ViewState::Cart,
];

impl ViewState {
    /// Stable identifier for this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Catalog => "catalog",
            ViewState::Product => "product",
            ViewState::Cart => "cart",
            ViewState::Checkout => "checkout",
            ViewState::Login => "login",
            ViewState::Register => "register",
            ViewState::Profile => "profile",
            ViewState::Wishlist => "wishlist",
            ViewState::Success => "success",
            ViewState::NotFound => "404",
        }
    }

    /// Display title for this view.
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Home => "Home",
            ViewState::Catalog => "Shop",
            ViewState::Product => "Product",
            ViewState::Cart => "Cart",
            ViewState::Checkout => "Checkout",
            ViewState::Login => "Log In",
            ViewState::Register => "Create Account",
            ViewState::Profile => "Profile",
            ViewState::Wishlist => "Stash",
            ViewState::Success => "Order Confirmed",
            ViewState::NotFound => "Not Found",
        }
    }

    /// Whether the navigation bar is drawn on this view.
    pub fn shows_navbar(&self) -> bool {
        !matches!(
            self,
            ViewState::Login | ViewState::Register | ViewState::NotFound
        )
    }

    /// Whether the footer is drawn on this view.
    pub fn shows_footer(&self) -> bool {
        self.shows_navbar() && !matches!(self, ViewState::Cart | ViewState::Checkout)
    }

    /// Next navigation link after this view (wraps around).
    pub fn next_nav(&self) -> Self {
        let index = NAV_LINKS.iter().position(|v| v == self);
        match index {
            Some(i) => NAV_LINKS[(i + 1) % NAV_LINKS.len()],
            None => NAV_LINKS[0],
        }
    }

    /// Previous navigation link before this view (wraps around).
    pub fn prev_nav(&self) -> Self {
        let index = NAV_LINKS.iter().position(|v| v == self);
        match index {
            Some(0) | None => NAV_LINKS[NAV_LINKS.len() - 1],
            Some(i) => NAV_LINKS[i - 1],
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing never fails: unknown or garbled identifiers route to not-found.
impl FromStr for ViewState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let view = match s.trim().to_ascii_lowercase().as_str() {
            "home" => ViewState::Home,
            "catalog" => ViewState::Catalog,
            "product" => ViewState::Product,
            "cart" => ViewState::Cart,
            "checkout" => ViewState::Checkout,
            "login" => ViewState::Login,
            "register" => ViewState::Register,
            "profile" => ViewState::Profile,
            "wishlist" => ViewState::Wishlist,
            "success" => ViewState::Success,
            _ => ViewState::NotFound,
        };
        Ok(view)
    }
}

/// A node in the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbNode {
    /// Display label for the breadcrumb.
    pub label: String,
    /// The view this node navigates to.
    pub view: ViewState,
}

impl BreadcrumbNode {
    fn new(label: impl Into<String>, view: ViewState) -> Self {
        Self {
            label: label.into(),
            view,
        }
    }
}

/// Build the breadcrumb trail for a view.
pub fn breadcrumbs(
    view: ViewState,
    product: Option<&Product>,
    category: &str,
) -> Vec<BreadcrumbNode> {
    let mut trail = vec![BreadcrumbNode::new("Home", ViewState::Home)];
    match view {
        ViewState::Home => {}
        ViewState::Catalog => {
            trail.push(BreadcrumbNode::new("Shop", ViewState::Catalog));
            if category != ALL {
                trail.push(BreadcrumbNode::new(category, ViewState::Catalog));
            }
        }
        ViewState::Product => {
            trail.push(BreadcrumbNode::new("Shop", ViewState::Catalog));
            if let Some(product) = product {
                trail.push(BreadcrumbNode::new(
                    product.category.clone(),
                    ViewState::Catalog,
                ));
                trail.push(BreadcrumbNode::new(product.name.clone(), ViewState::Product));
            }
        }
        ViewState::Checkout | ViewState::Success => {
            trail.push(BreadcrumbNode::new("Cart", ViewState::Cart));
            trail.push(BreadcrumbNode::new(view.title(), view));
        }
        other => trail.push(BreadcrumbNode::new(other.title(), other)),
    }
    trail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!("checkout".parse::<ViewState>(), Ok(ViewState::Checkout));
        assert_eq!(" Wishlist ".parse::<ViewState>(), Ok(ViewState::Wishlist));
        assert_eq!("".parse::<ViewState>(), Ok(ViewState::NotFound));
        assert_eq!("404".parse::<ViewState>(), Ok(ViewState::NotFound));
        assert_eq!("h0me\u{0}".parse::<ViewState>(), Ok(ViewState::NotFound));
    }

    #[test]
    fn test_identifier_round_trip_for_every_view() {
        let all = [
            ViewState::Home,
            ViewState::Catalog,
            ViewState::Product,
            ViewState::Cart,
            ViewState::Checkout,
            ViewState::Login,
            ViewState::Register,
            ViewState::Profile,
            ViewState::Wishlist,
            ViewState::Success,
            ViewState::NotFound,
        ];
        for view in all {
            assert_eq!(view.as_str().parse::<ViewState>(), Ok(view));
        }
    }

    #[test]
    fn test_chrome_rules() {
        for view in [ViewState::Login, ViewState::Register, ViewState::NotFound] {
            assert!(!view.shows_navbar());
            assert!(!view.shows_footer());
        }
        for view in [ViewState::Cart, ViewState::Checkout] {
            assert!(view.shows_navbar());
            assert!(!view.shows_footer());
        }
        for view in [ViewState::Home, ViewState::Catalog, ViewState::Profile] {
            assert!(view.shows_navbar());
            assert!(view.shows_footer());
        }
    }

    #[test]
    fn test_nav_cycle() {
        assert_eq!(ViewState::Home.next_nav(), ViewState::Catalog);
        assert_eq!(ViewState::Cart.next_nav(), ViewState::Home);
        assert_eq!(ViewState::Home.prev_nav(), ViewState::Cart);
        // Views outside the navbar start from the first link
        assert_eq!(ViewState::Product.next_nav(), ViewState::Home);
    }

    #[test]
    fn test_breadcrumbs() {
        let catalog = Catalog::builtin();
        let product = catalog.find("s4");

        let trail = breadcrumbs(ViewState::Product, product, ALL);
        let labels: Vec<&str> = trail.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Shop", "Sneakers", "Jordan 1 High"]);

        let trail = breadcrumbs(ViewState::Catalog, None, "Hoodies");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2].label, "Hoodies");

        let trail = breadcrumbs(ViewState::Checkout, None, ALL);
        assert_eq!(trail[1].view, ViewState::Cart);

        assert_eq!(breadcrumbs(ViewState::Home, None, ALL).len(), 1);
    }
}
