// Session and navigation coordinator.
// Owns every piece of shared shopping state and applies all transitions.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::catalog::{Catalog, Product, User, mock_user};
use crate::config::Settings;

use super::cart::{Cart, CartLine};
use super::catalog::CatalogFilterSeed;
use super::session::Session;
use super::stash::{Stash, StashChange};
use super::toast::Toast;
use super::view::ViewState;

pub const TOAST_ADDED_TO_CART: &str = "ADDED TO CART!";
pub const TOAST_ITEM_REMOVED: &str = "ITEM REMOVED";
pub const TOAST_ADDED_TO_STASH: &str = "ADDED TO STASH!";
pub const TOAST_REMOVED_FROM_STASH: &str = "REMOVED FROM STASH";
pub const TOAST_LOGIN_TO_CHECKOUT: &str = "PLEASE LOG IN TO CHECKOUT";
pub const TOAST_ACCOUNT_CREATED: &str = "ACCOUNT CREATED! PLEASE LOG IN.";
pub const TOAST_LOGGED_OUT: &str = "LOGGED OUT";

/// The active screen together with exactly the inputs it renders from.
#[derive(Debug)]
pub enum Screen<'a> {
    Home {
        trending: Vec<&'a Product>,
    },
    Catalog {
        products: &'a [Product],
        seed: &'a CatalogFilterSeed,
    },
    Product {
        product: &'a Product,
        stashed: bool,
    },
    Cart {
        lines: &'a [CartLine],
        total: Decimal,
    },
    Checkout {
        lines: &'a [CartLine],
        subtotal: Decimal,
        user: Option<&'a User>,
    },
    Login,
    Register,
    Profile {
        user: &'a User,
    },
    Wishlist {
        products: Vec<&'a Product>,
    },
    Success,
    NotFound,
}

impl Screen<'_> {
    /// The view this screen renders, after fallbacks.
    pub fn view(&self) -> ViewState {
        match self {
            Screen::Home { .. } => ViewState::Home,
            Screen::Catalog { .. } => ViewState::Catalog,
            Screen::Product { .. } => ViewState::Product,
            Screen::Cart { .. } => ViewState::Cart,
            Screen::Checkout { .. } => ViewState::Checkout,
            Screen::Login => ViewState::Login,
            Screen::Register => ViewState::Register,
            Screen::Profile { .. } => ViewState::Profile,
            Screen::Wishlist { .. } => ViewState::Wishlist,
            Screen::Success => ViewState::Success,
            Screen::NotFound => ViewState::NotFound,
        }
    }
}

/// Application state shared by every view.
#[derive(Debug)]
pub struct Coordinator {
    catalog: Catalog,
    view: ViewState,
    cart: Cart,
    stash: Stash,
    session: Session,
    toast: Toast,
    selected: Option<Product>,
    seed: CatalogFilterSeed,
    /// Seed used when a product view has nothing selected.
    fallback_seed: CatalogFilterSeed,
}

impl Coordinator {
    pub fn new(catalog: Catalog, toast_duration: Duration) -> Self {
        Self {
            catalog,
            view: ViewState::default(),
            cart: Cart::new(),
            stash: Stash::new(),
            session: Session::new(),
            toast: Toast::new(toast_duration),
            selected: None,
            seed: CatalogFilterSeed::default(),
            fallback_seed: CatalogFilterSeed::default(),
        }
    }

    /// Builtin catalog with delays taken from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Catalog::builtin(), settings.toast_duration())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn stash(&self) -> &Stash {
        &self.stash
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn catalog_seed(&self) -> &CatalogFilterSeed {
        &self.seed
    }

    pub fn redirect(&self) -> Option<ViewState> {
        self.session.redirect()
    }

    /// Switch views directly. Used by navbar links, breadcrumbs and back keys.
    pub fn set_view(&mut self, view: ViewState) {
        if self.view != view {
            debug!(from = %self.view, to = %view, "view change");
        }
        self.view = view;
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        let quantity = self.cart.add(product);
        debug!(product = %product.id, quantity, "added to cart");
        self.trigger_toast(TOAST_ADDED_TO_CART);
    }

    /// Delete the whole line for `id`. Missing ids leave the cart untouched.
    pub fn remove_from_cart(&mut self, id: &str) {
        let removed = self.cart.remove(id);
        debug!(product = %id, removed, "removed from cart");
        self.trigger_toast(TOAST_ITEM_REMOVED);
    }

    pub fn toggle_stash(&mut self, id: &str) {
        let change = self.stash.toggle(id);
        debug!(product = %id, ?change, "stash toggled");
        let message = match change {
            StashChange::Added => TOAST_ADDED_TO_STASH,
            StashChange::Removed => TOAST_REMOVED_FROM_STASH,
        };
        self.trigger_toast(message);
    }

    pub fn view_product(&mut self, product: &Product) {
        self.selected = Some(product.clone());
        self.set_view(ViewState::Product);
    }

    /// Open the catalog with an initial filter. Missing values mean `All`.
    pub fn view_catalog(&mut self, category: Option<&str>, brand: Option<&str>) {
        self.seed = CatalogFilterSeed::new(category, brand);
        debug!(category = %self.seed.category, brand = %self.seed.brand, "catalog seeded");
        self.set_view(ViewState::Catalog);
    }

    pub fn checkout(&mut self) {
        if self.session.is_authenticated() {
            self.set_view(ViewState::Checkout);
            return;
        }
        info!("checkout requires login, redirecting");
        self.session.set_redirect(ViewState::Checkout);
        self.set_view(ViewState::Login);
        self.trigger_toast(TOAST_LOGIN_TO_CHECKOUT);
    }

    /// Sign in as the mock user. Any credentials are accepted.
    pub fn login(&mut self) {
        let user = mock_user();
        let message = format!("WELCOME BACK, {}!", user.first_name().to_uppercase());
        info!(user = %user.id, "logged in");
        self.session.sign_in(user);
        self.trigger_toast(message);

        let target = self.session.take_redirect().unwrap_or(ViewState::Profile);
        self.set_view(target);
    }

    /// Registration is cosmetic: it never creates a session.
    pub fn register(&mut self) {
        info!("account registered");
        self.trigger_toast(TOAST_ACCOUNT_CREATED);
        self.set_view(ViewState::Login);
    }

    pub fn logout(&mut self) {
        info!("logged out");
        self.session.sign_out();
        self.set_view(ViewState::Home);
        self.trigger_toast(TOAST_LOGGED_OUT);
    }

    pub fn complete_order(&mut self) {
        info!(
            lines = self.cart.lines().len(),
            total = %self.cart.total(),
            "order completed"
        );
        self.cart.clear();
        self.set_view(ViewState::Success);
    }

    /// Show a toast, replacing any live one and restarting its timer.
    pub fn trigger_toast(&mut self, message: impl Into<String>) {
        self.toast.show(message, Instant::now());
    }

    pub fn dismiss_toast(&mut self) {
        self.toast.dismiss();
    }

    /// Expire the toast once its deadline passes. Returns true if it was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.toast.tick(now)
    }

    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    pub fn is_stashed(&self, id: &str) -> bool {
        self.stash.contains(id)
    }

    /// Stashed products in catalog order.
    pub fn stashed_products(&self) -> Vec<&Product> {
        self.stash.filter(self.catalog.products())
    }

    /// Resolve the active view into the screen to draw.
    pub fn screen(&self) -> Screen<'_> {
        match self.view {
            ViewState::Home => Screen::Home {
                trending: self.catalog.new_arrivals(),
            },
            ViewState::Catalog => self.catalog_screen(&self.seed),
            ViewState::Product => match &self.selected {
                Some(product) => Screen::Product {
                    product,
                    stashed: self.is_stashed(&product.id),
                },
                None => self.catalog_screen(&self.fallback_seed),
            },
            ViewState::Cart => Screen::Cart {
                lines: self.cart.lines(),
                total: self.cart_total(),
            },
            ViewState::Checkout => Screen::Checkout {
                lines: self.cart.lines(),
                subtotal: self.cart_total(),
                user: self.session.user(),
            },
            ViewState::Login => Screen::Login,
            ViewState::Register => Screen::Register,
            ViewState::Profile => match self.session.user() {
                Some(user) => Screen::Profile { user },
                None => Screen::Login,
            },
            ViewState::Wishlist => Screen::Wishlist {
                products: self.stashed_products(),
            },
            ViewState::Success => Screen::Success,
            ViewState::NotFound => Screen::NotFound,
        }
    }

    fn catalog_screen<'a>(&'a self, seed: &'a CatalogFilterSeed) -> Screen<'a> {
        Screen::Catalog {
            products: self.catalog.products(),
            seed,
        }
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ALL;

    fn product(coordinator: &Coordinator, id: &str) -> Product {
        coordinator.catalog().find(id).unwrap().clone()
    }

    fn toast(coordinator: &Coordinator) -> Option<&str> {
        coordinator.toast().visible_message()
    }

    #[test]
    fn test_starts_at_home() {
        let coordinator = Coordinator::default();
        assert_eq!(coordinator.view(), ViewState::Home);
        assert!(coordinator.cart().is_empty());
        assert!(!coordinator.session().is_authenticated());
        assert!(coordinator.redirect().is_none());
        assert_eq!(toast(&coordinator), None);
    }

    #[test]
    fn test_add_twice_yields_single_line() {
        let mut coordinator = Coordinator::default();
        let hoodie = product(&coordinator, "1");
        coordinator.add_to_cart(&hoodie);
        coordinator.add_to_cart(&hoodie);

        let lines = coordinator.cart().lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(coordinator.cart_count(), 2);
        assert_eq!(coordinator.cart_total(), Decimal::from(170));
        assert_eq!(toast(&coordinator), Some(TOAST_ADDED_TO_CART));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut coordinator = Coordinator::default();
        let tee = product(&coordinator, "4");
        let jacket = product(&coordinator, "2");
        coordinator.add_to_cart(&tee);
        coordinator.add_to_cart(&tee);
        coordinator.add_to_cart(&jacket);

        coordinator.remove_from_cart("4");
        let after_first: Vec<CartLine> = coordinator.cart().lines().to_vec();
        assert_eq!(after_first.len(), 1);
        assert_eq!(toast(&coordinator), Some(TOAST_ITEM_REMOVED));

        coordinator.remove_from_cart("4");
        assert_eq!(coordinator.cart().lines(), after_first.as_slice());
    }

    #[test]
    fn test_toggle_stash_twice_restores_membership() {
        let mut coordinator = Coordinator::default();
        assert!(!coordinator.is_stashed("3"));

        coordinator.toggle_stash("3");
        assert!(coordinator.is_stashed("3"));
        assert_eq!(toast(&coordinator), Some(TOAST_ADDED_TO_STASH));

        coordinator.toggle_stash("3");
        assert!(!coordinator.is_stashed("3"));
        assert_eq!(toast(&coordinator), Some(TOAST_REMOVED_FROM_STASH));
    }

    #[test]
    fn test_stashed_products_in_catalog_order() {
        let mut coordinator = Coordinator::default();
        coordinator.toggle_stash("15");
        coordinator.toggle_stash("2");

        let ids: Vec<&str> = coordinator
            .stashed_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "15"]);
    }

    #[test]
    fn test_checkout_without_session_detours_through_login() {
        let mut coordinator = Coordinator::default();
        coordinator.checkout();

        assert_eq!(coordinator.view(), ViewState::Login);
        assert_eq!(coordinator.redirect(), Some(ViewState::Checkout));
        assert_eq!(toast(&coordinator), Some(TOAST_LOGIN_TO_CHECKOUT));

        coordinator.login();
        assert_eq!(coordinator.view(), ViewState::Checkout);
        assert!(coordinator.redirect().is_none());
    }

    #[test]
    fn test_checkout_with_session_goes_straight_through() {
        let mut coordinator = Coordinator::default();
        coordinator.login();
        coordinator.checkout();
        assert_eq!(coordinator.view(), ViewState::Checkout);
        assert!(coordinator.redirect().is_none());
    }

    #[test]
    fn test_login_without_redirect_lands_on_profile() {
        let mut coordinator = Coordinator::default();
        coordinator.login();

        let user = coordinator.session().user().unwrap();
        assert_eq!(user.name, "Alex Doe");
        assert_eq!(user.id, "99482");
        assert_eq!(coordinator.view(), ViewState::Profile);
        assert_eq!(toast(&coordinator), Some("WELCOME BACK, ALEX!"));
    }

    #[test]
    fn test_register_never_signs_in() {
        let mut coordinator = Coordinator::default();
        coordinator.register();
        assert!(!coordinator.session().is_authenticated());
        assert_eq!(coordinator.view(), ViewState::Login);
        assert_eq!(toast(&coordinator), Some(TOAST_ACCOUNT_CREATED));

        coordinator.checkout();
        coordinator.register();
        assert!(!coordinator.session().is_authenticated());
        assert_eq!(coordinator.redirect(), Some(ViewState::Checkout));
    }

    #[test]
    fn test_logout() {
        let mut coordinator = Coordinator::default();
        coordinator.login();
        coordinator.logout();
        assert!(!coordinator.session().is_authenticated());
        assert_eq!(coordinator.view(), ViewState::Home);
        assert_eq!(toast(&coordinator), Some(TOAST_LOGGED_OUT));
    }

    #[test]
    fn test_complete_order_always_empties_cart() {
        let mut coordinator = Coordinator::default();
        coordinator.complete_order();
        assert!(coordinator.cart().is_empty());
        assert_eq!(coordinator.view(), ViewState::Success);

        let sneaker = product(&coordinator, "s4");
        coordinator.add_to_cart(&sneaker);
        coordinator.set_view(ViewState::Checkout);
        coordinator.complete_order();
        assert!(coordinator.cart().is_empty());
        assert_eq!(coordinator.view(), ViewState::Success);
    }

    #[test]
    fn test_view_catalog_defaults_to_all() {
        let mut coordinator = Coordinator::default();
        coordinator.view_catalog(Some("Hoodies"), None);
        assert_eq!(coordinator.catalog_seed().category, "Hoodies");
        assert_eq!(coordinator.catalog_seed().brand, ALL);

        coordinator.view_catalog(None, None);
        assert_eq!(coordinator.catalog_seed(), &CatalogFilterSeed::default());
        assert_eq!(coordinator.view(), ViewState::Catalog);
    }

    #[test]
    fn test_toast_auto_dismisses_and_dismisses_manually() {
        let mut coordinator = Coordinator::new(Catalog::builtin(), Duration::from_millis(50));
        coordinator.trigger_toast("HELLO");
        let deadline = coordinator.toast().deadline().unwrap();

        assert!(!coordinator.tick(deadline - Duration::from_millis(1)));
        assert!(coordinator.tick(deadline));
        assert_eq!(toast(&coordinator), None);

        coordinator.trigger_toast("AGAIN");
        coordinator.dismiss_toast();
        assert_eq!(toast(&coordinator), None);
    }

    #[test]
    fn test_screen_fallbacks() {
        let mut coordinator = Coordinator::default();
        coordinator.view_catalog(Some("Sneakers"), Some("Nike"));

        // Product view with nothing selected shows an unfiltered catalog
        coordinator.set_view(ViewState::Product);
        match coordinator.screen() {
            Screen::Catalog { seed, .. } => assert_eq!(seed, &CatalogFilterSeed::default()),
            other => panic!("expected catalog, got {:?}", other.view()),
        }

        coordinator.set_view(ViewState::Profile);
        assert!(matches!(coordinator.screen(), Screen::Login));

        coordinator.set_view("nowhere".parse().unwrap());
        assert!(matches!(coordinator.screen(), Screen::NotFound));
    }

    #[test]
    fn test_screen_bundles() {
        let mut coordinator = Coordinator::default();
        match coordinator.screen() {
            Screen::Home { trending } => assert!(trending.iter().all(|p| p.is_new)),
            other => panic!("expected home, got {:?}", other.view()),
        }

        let hoodie = product(&coordinator, "1");
        coordinator.toggle_stash("1");
        coordinator.view_product(&hoodie);
        match coordinator.screen() {
            Screen::Product { product, stashed } => {
                assert_eq!(product.id, "1");
                assert!(stashed);
            }
            other => panic!("expected product, got {:?}", other.view()),
        }

        coordinator.add_to_cart(&hoodie);
        coordinator.set_view(ViewState::Cart);
        match coordinator.screen() {
            Screen::Cart { lines, total } => {
                assert_eq!(lines.len(), 1);
                assert_eq!(total, hoodie.price);
            }
            other => panic!("expected cart, got {:?}", other.view()),
        }
    }

    #[test]
    fn test_browse_to_checkout_scenario() {
        let mut coordinator = Coordinator::default();
        assert_eq!(coordinator.view(), ViewState::Home);

        coordinator.view_catalog(Some("Sneakers"), Some("Nike"));
        assert_eq!(coordinator.view(), ViewState::Catalog);
        assert_eq!(
            coordinator.catalog_seed(),
            &CatalogFilterSeed::new(Some("Sneakers"), Some("Nike"))
        );

        let sneaker = product(&coordinator, "s4");
        coordinator.view_product(&sneaker);
        assert_eq!(coordinator.view(), ViewState::Product);
        assert_eq!(coordinator.selected_product(), Some(&sneaker));

        coordinator.checkout();
        assert_eq!(coordinator.view(), ViewState::Login);
        assert_eq!(toast(&coordinator), Some(TOAST_LOGIN_TO_CHECKOUT));
        assert_eq!(coordinator.redirect(), Some(ViewState::Checkout));

        coordinator.login();
        assert_eq!(coordinator.session().user(), Some(&mock_user()));
        assert_eq!(coordinator.view(), ViewState::Checkout);
        assert!(coordinator.redirect().is_none());
    }
}
