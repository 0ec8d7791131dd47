// App state and main event loop.
// Owns the coordinator and per-view state, routes keys, and applies finished tasks.

use std::collections::HashSet;
use std::io;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::state::product::ReviewError;
use crate::state::{
    CatalogViewState, CheckoutState, Coordinator, HomeState, NAV_LINKS, ProductDetailState,
    ProfileState, Screen, SelectableList, TextForm, ViewState,
};
use crate::tasks::{self, TaskHandle, TaskKind, TaskReceiver, TaskSender};
use crate::ui;

/// Main application state.
pub struct App {
    pub settings: Settings,
    /// Shared shopping state.
    pub store: Coordinator,
    pub home: HomeState,
    pub catalog: CatalogViewState,
    /// Detail state for the product last viewed.
    pub product: Option<ProductDetailState>,
    pub cart: SelectableList,
    pub checkout: CheckoutState,
    pub login: TextForm,
    pub register: TextForm,
    pub profile: Option<ProfileState>,
    pub wishlist: SelectableList,
    /// Products with a listing add in flight.
    pub pending_adds: HashSet<String>,
    /// The stash page adds one product at a time.
    stash_add: Option<String>,
    /// Why the last review submission was refused.
    pub review_error: Option<ReviewError>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// View seen at the end of the previous frame.
    entered: ViewState,
    tasks: Vec<TaskHandle>,
    task_tx: TaskSender,
    task_rx: TaskReceiver,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let (task_tx, task_rx) = tasks::channel();
        let mut app = Self {
            store: Coordinator::from_settings(&settings),
            home: HomeState::new(),
            catalog: CatalogViewState::new(settings.max_price_ceiling),
            product: None,
            cart: SelectableList::new(),
            checkout: CheckoutState::new(),
            login: TextForm::login(),
            register: TextForm::register(),
            profile: None,
            wishlist: SelectableList::new(),
            pending_adds: HashSet::new(),
            stash_add: None,
            review_error: None,
            show_help: false,
            should_quit: false,
            entered: ViewState::NotFound,
            tasks: Vec::new(),
            task_tx,
            task_rx,
            settings,
        };
        app.sync_views();
        app
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        info!("storefront open");
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.drain_tasks();
            self.store.tick(Instant::now());
            self.sync_views();
        }
        self.shutdown();
        Ok(())
    }

    /// Cancel every task still in flight.
    pub fn shutdown(&mut self) {
        info!(pending = self.tasks.len(), "storefront closing");
        for task in self.tasks.drain(..) {
            task.cancel();
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// The view actually on screen, after fallbacks.
    fn screen_view(&self) -> ViewState {
        self.store.screen().view()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        let view = self.screen_view();
        if self.is_typing(view) {
            self.handle_text_key(view, key);
        } else {
            self.handle_command_key(view, key);
        }
        self.sync_views();
    }

    /// Whether printable keys go into a text field on this view.
    pub fn is_typing(&self, view: ViewState) -> bool {
        match view {
            ViewState::Catalog => self.catalog.search_active,
            ViewState::Product => self.product.as_ref().is_some_and(|p| p.writing_review),
            ViewState::Login | ViewState::Register => true,
            ViewState::Profile => self.profile.as_ref().is_some_and(|p| p.editing),
            _ => false,
        }
    }

    fn handle_text_key(&mut self, view: ViewState, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match view {
            ViewState::Catalog => match key.code {
                KeyCode::Char(c) => self.catalog.push_search(c),
                KeyCode::Backspace => self.catalog.pop_search(),
                KeyCode::Enter | KeyCode::Esc => self.catalog.search_active = false,
                _ => {}
            },
            ViewState::Product => self.handle_review_key(key),
            ViewState::Login => match key.code {
                KeyCode::Char('r') if ctrl => self.store.set_view(ViewState::Register),
                KeyCode::Char(c) => self.login.push(c),
                KeyCode::Backspace => self.login.pop(),
                KeyCode::Tab | KeyCode::Down => self.login.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.login.prev_field(),
                KeyCode::Enter => self.store.login(),
                KeyCode::Esc => self.store.set_view(ViewState::Home),
                _ => {}
            },
            ViewState::Register => match key.code {
                KeyCode::Char('l') if ctrl => self.store.set_view(ViewState::Login),
                KeyCode::Char(c) => self.register.push(c),
                KeyCode::Backspace => self.register.pop(),
                KeyCode::Tab | KeyCode::Down => self.register.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.register.prev_field(),
                KeyCode::Enter => self.store.register(),
                KeyCode::Esc => self.store.set_view(ViewState::Home),
                _ => {}
            },
            ViewState::Profile => {
                let Some(profile) = self.profile.as_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Char(c) => profile.form.push(c),
                    KeyCode::Backspace => profile.form.pop(),
                    KeyCode::Tab | KeyCode::Down => profile.form.next_field(),
                    KeyCode::BackTab | KeyCode::Up => profile.form.prev_field(),
                    // Edits stay local; there is nothing to save them to
                    KeyCode::Enter | KeyCode::Esc => profile.editing = false,
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        let Some(state) = self.product.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => state.form.push(c),
            KeyCode::Backspace => state.form.pop(),
            KeyCode::Tab => state.form.next_field(),
            KeyCode::Up => state.form.set_rating(state.form.rating.saturating_add(1)),
            KeyCode::Down => state.form.set_rating(state.form.rating.saturating_sub(1)),
            KeyCode::Esc => {
                state.writing_review = false;
                self.review_error = None;
            }
            KeyCode::Enter => {
                let product_id = state.product_id.clone();
                match state.post_review(Utc::now()) {
                    Ok(review) => {
                        debug!(product = %product_id, author = %review.author, "review posted");
                        self.review_error = None;
                    }
                    Err(e) => self.review_error = Some(e),
                }
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, view: ViewState, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Esc if self.store.toast().is_visible() => {
                self.store.dismiss_toast();
                return;
            }
            _ => {}
        }

        if self.store.view().shows_navbar() {
            match key.code {
                KeyCode::Tab => return self.store.set_view(self.store.view().next_nav()),
                KeyCode::BackTab => return self.store.set_view(self.store.view().prev_nav()),
                KeyCode::Char(c @ '1'..='5') => {
                    let index = c as usize - '1' as usize;
                    return self.store.set_view(NAV_LINKS[index]);
                }
                _ => {}
            }
        }

        match view {
            ViewState::Home => self.handle_home_key(key),
            ViewState::Catalog => self.handle_catalog_key(key),
            ViewState::Product => self.handle_product_key(key),
            ViewState::Cart => self.handle_cart_key(key),
            ViewState::Checkout => self.handle_checkout_key(key),
            ViewState::Profile => self.handle_profile_key(key),
            ViewState::Wishlist => self.handle_wishlist_key(key),
            ViewState::Success => match key.code {
                KeyCode::Enter => self.store.set_view(ViewState::Profile),
                KeyCode::Char('c') => self.store.view_catalog(None, None),
                _ => {}
            },
            ViewState::NotFound => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.store.set_view(ViewState::Home);
                }
            }
            // Forms are handled as text input
            ViewState::Login | ViewState::Register => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let trending: Vec<_> = self
            .store
            .catalog()
            .new_arrivals()
            .into_iter()
            .cloned()
            .collect();
        let picked = self.home.trending.pick(&trending).cloned();

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.home.trending.select_next(trending.len()),
            KeyCode::Up | KeyCode::Char('k') => self.home.trending.select_prev(trending.len()),
            KeyCode::Right | KeyCode::Char('l') => self.home.next_shortcut(),
            KeyCode::Left | KeyCode::Char('h') => self.home.prev_shortcut(),
            KeyCode::Char('g') => {
                if let Some(shortcut) = self.home.current_shortcut() {
                    let (category, brand) = shortcut.filter();
                    self.store.view_catalog(category, brand);
                }
            }
            KeyCode::Char('v') => self.store.view_catalog(None, None),
            KeyCode::Enter => {
                if let Some(product) = picked {
                    self.store.view_product(&product);
                }
            }
            KeyCode::Char('a') => {
                if let Some(product) = picked {
                    self.add_from_listing(product.id);
                }
            }
            KeyCode::Char('s') => {
                if let Some(product) = picked {
                    self.store.toggle_stash(&product.id);
                }
            }
            _ => {}
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        let products = self.store.catalog().products();
        let len = self.catalog.visible(products).len();
        let picked = self.catalog.selected(products).cloned();

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.catalog.list.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => self.catalog.list.select_prev(len),
            KeyCode::Char('/') => self.catalog.search_active = true,
            KeyCode::Char('c') => self.catalog.cycle_category(),
            KeyCode::Char('b') => self.catalog.cycle_brand(),
            KeyCode::Char('o') => self.catalog.cycle_sort(),
            KeyCode::Char('[') => self.catalog.lower_price(),
            KeyCode::Char(']') => self.catalog.raise_price(),
            KeyCode::Char('x') => self.catalog.reset(),
            KeyCode::Esc => self.store.set_view(ViewState::Home),
            KeyCode::Enter => {
                if let Some(product) = picked {
                    self.store.view_product(&product);
                }
            }
            KeyCode::Char('a') => {
                if let Some(product) = picked {
                    self.add_from_listing(product.id);
                }
            }
            KeyCode::Char('s') => {
                if let Some(product) = picked {
                    self.store.toggle_stash(&product.id);
                }
            }
            _ => {}
        }
    }

    fn handle_product_key(&mut self, key: KeyEvent) {
        let Some(product) = self.store.selected_product().cloned() else {
            return;
        };
        let Some(state) = self.product.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => state.increment(),
            KeyCode::Char('-') => state.decrement(),
            KeyCode::Right | KeyCode::Char('l') => state.next_image(),
            KeyCode::Left | KeyCode::Char('h') => state.prev_image(),
            KeyCode::Char('r') => {
                state.writing_review = true;
                self.review_error = None;
            }
            KeyCode::Char('s') => self.store.toggle_stash(&product.id),
            KeyCode::Char('a') => {
                if let Some(quantity) = state.begin_add() {
                    let kind = TaskKind::DetailAdd {
                        product_id: product.id,
                        quantity,
                    };
                    let delay = self.settings.detail_add_delay();
                    self.spawn_task(kind, delay);
                }
            }
            KeyCode::Esc => self.store.set_view(ViewState::Catalog),
            _ => {}
        }
    }

    fn handle_cart_key(&mut self, key: KeyEvent) {
        let len = self.store.cart().lines().len();
        let picked = self
            .cart
            .pick(self.store.cart().lines())
            .map(|line| line.id().to_string());

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.cart.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => self.cart.select_prev(len),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = picked {
                    self.store.remove_from_cart(&id);
                }
            }
            KeyCode::Enter => {
                if !self.store.cart().is_empty() {
                    self.store.checkout();
                }
            }
            KeyCode::Char('c') => self.store.view_catalog(None, None),
            KeyCode::Esc => self.store.set_view(ViewState::Catalog),
            _ => {}
        }
    }

    fn handle_checkout_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.checkout.toggle_shipping(),
            KeyCode::Enter => {
                if self.checkout.begin_payment() {
                    info!(total = %self.store.cart_total(), "payment started");
                    let delay = self.settings.payment_delay();
                    self.spawn_task(TaskKind::Payment, delay);
                }
            }
            KeyCode::Esc if !self.checkout.processing => self.store.set_view(ViewState::Cart),
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('l') {
            self.store.logout();
            return;
        }
        let Some(profile) = self.profile.as_mut() else {
            return;
        };
        let len = profile.orders.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => profile.list.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => profile.list.select_prev(len),
            KeyCode::Enter | KeyCode::Char('t') => profile.toggle_selected(),
            KeyCode::Char('e') => profile.editing = true,
            _ => {}
        }
    }

    fn handle_wishlist_key(&mut self, key: KeyEvent) {
        let stashed: Vec<_> = self
            .store
            .stashed_products()
            .into_iter()
            .cloned()
            .collect();
        let picked = self.wishlist.pick(&stashed).cloned();

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.wishlist.select_next(stashed.len()),
            KeyCode::Up | KeyCode::Char('k') => self.wishlist.select_prev(stashed.len()),
            KeyCode::Char('c') => self.store.view_catalog(None, None),
            KeyCode::Enter => {
                if let Some(product) = picked {
                    self.store.view_product(&product);
                }
            }
            KeyCode::Char('a') => {
                if let Some(product) = picked {
                    self.add_from_stash(product.id);
                }
            }
            KeyCode::Char('s') | KeyCode::Char('d') => {
                if let Some(product) = picked {
                    self.store.toggle_stash(&product.id);
                }
            }
            _ => {}
        }
    }

    /// Start a delayed single-unit add. Ignored while this product already has one pending.
    fn add_from_listing(&mut self, product_id: String) {
        if !self.pending_adds.insert(product_id.clone()) {
            return;
        }
        let delay = self.settings.listing_add_delay();
        self.spawn_task(TaskKind::ListingAdd { product_id }, delay);
    }

    fn add_from_stash(&mut self, product_id: String) {
        if self.stash_add.is_some() {
            return;
        }
        self.stash_add = Some(product_id.clone());
        self.add_from_listing(product_id);
    }

    fn spawn_task(&mut self, kind: TaskKind, delay: Duration) {
        debug!(?kind, ?delay, "task started");
        self.tasks
            .push(tasks::spawn(kind, delay, self.task_tx.clone()));
    }

    /// Apply completions delivered since the last frame.
    pub fn drain_tasks(&mut self) {
        while let Ok(kind) = self.task_rx.try_recv() {
            self.apply_task(kind);
        }
        self.tasks.retain(|task| !task.is_finished());
    }

    fn apply_task(&mut self, kind: TaskKind) {
        match kind {
            TaskKind::ListingAdd { product_id } => {
                self.pending_adds.remove(&product_id);
                if self.stash_add.as_deref() == Some(product_id.as_str()) {
                    self.stash_add = None;
                }
                self.add_product(&product_id, 1);
            }
            TaskKind::DetailAdd {
                product_id,
                quantity,
            } => {
                if let Some(state) = self.product.as_mut() {
                    if state.product_id == product_id {
                        state.finish_add();
                    }
                }
                self.add_product(&product_id, quantity);
            }
            TaskKind::Payment => {
                self.checkout.finish_payment();
                self.store.complete_order();
            }
        }
        self.sync_views();
    }

    fn add_product(&mut self, id: &str, quantity: u32) {
        match self.store.catalog().get(id) {
            Ok(product) => {
                let product = product.clone();
                for _ in 0..quantity {
                    self.store.add_to_cart(&product);
                }
            }
            Err(e) => warn!(error = %e, "dropping add"),
        }
    }

    /// Rebuild or clamp view-local state after the shared state moved.
    /// Entering a view starts it fresh; staying on it keeps local edits.
    pub fn sync_views(&mut self) {
        let view = self.store.view();
        let entered = view != self.entered;
        self.entered = view;

        match self.store.screen() {
            Screen::Home { trending } => {
                if entered {
                    self.home.trending.reset(trending.len());
                } else {
                    self.home.trending.clamp(trending.len());
                }
            }
            Screen::Catalog { products, seed } => {
                if entered {
                    self.catalog = CatalogViewState::new(self.settings.max_price_ceiling);
                    self.catalog.apply_seed(seed);
                } else {
                    self.catalog.sync_seed(seed);
                }
                let len = self.catalog.visible(products).len();
                self.catalog.list.clamp(len);
            }
            Screen::Product { product, .. } => {
                let same = self.product.as_ref().is_some_and(|s| s.is_for(product));
                if !same {
                    self.product = Some(ProductDetailState::new(&product.id));
                    self.review_error = None;
                }
            }
            Screen::Cart { lines, .. } => self.cart.clamp(lines.len()),
            Screen::Checkout { .. } => {
                if entered && !self.checkout.processing {
                    self.checkout = CheckoutState::new();
                }
            }
            Screen::Login => {
                if entered {
                    self.login = TextForm::login();
                }
            }
            Screen::Register => {
                if entered {
                    self.register = TextForm::register();
                }
            }
            Screen::Profile { user } => {
                let same = self.profile.as_ref().is_some_and(|p| p.is_for(user));
                if entered || !same {
                    self.profile = Some(ProfileState::new(user));
                }
            }
            Screen::Wishlist { products } => self.wishlist.clamp(products.len()),
            Screen::Success | Screen::NotFound => {}
        }
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fast_settings() -> Settings {
        Settings {
            listing_add_delay_ms: 5,
            detail_add_delay_ms: 5,
            payment_delay_ms: 5,
            ..Settings::default()
        }
    }

    async fn settle(app: &mut App) {
        tokio::time::sleep(Duration::from_millis(50)).await;
        app.drain_tasks();
    }

    #[test]
    fn test_number_keys_follow_nav_links() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.store.view(), ViewState::Catalog);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.store.view(), ViewState::Cart);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.store.view(), ViewState::Home);
    }

    #[test]
    fn test_home_shortcut_seeds_catalog() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.store.view(), ViewState::Catalog);
        assert_eq!(app.catalog.category, "Sneakers");
        assert_eq!(app.catalog.brand, "All");
    }

    #[test]
    fn test_catalog_entry_starts_fresh() {
        let mut app = App::new(Settings::default());
        app.store.view_catalog(Some("Hoodies"), None);
        app.sync_views();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.catalog.category, "Accessories");

        press(&mut app, KeyCode::Esc);
        app.store.view_catalog(Some("Hoodies"), None);
        app.sync_views();
        assert_eq!(app.catalog.category, "Hoodies");
    }

    #[test]
    fn test_search_captures_quit_key() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.catalog.search, "q");

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_login_form_detour() {
        let mut app = App::new(Settings::default());
        app.store.checkout();
        app.sync_views();
        type_text(&mut app, "alex@example.com");
        assert_eq!(app.login.email, "alex@example.com");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.view(), ViewState::Checkout);
    }

    #[test]
    fn test_escape_dismisses_toast_before_navigating() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('s'));
        assert!(app.store.toast().is_visible());

        press(&mut app, KeyCode::Esc);
        assert!(!app.store.toast().is_visible());
        assert_eq!(app.store.view(), ViewState::Catalog);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.view(), ViewState::Home);
    }

    #[test]
    fn test_review_error_surfaces() {
        let mut app = App::new(Settings::default());
        let product = app.store.catalog().find("7").unwrap().clone();
        app.store.view_product(&product);
        app.sync_views();

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.review_error, Some(ReviewError::MissingAuthor));

        type_text(&mut app, "ZERO");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "solid");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.review_error, None);
        assert_eq!(app.product.as_ref().unwrap().reviews.len(), 4);
    }

    #[tokio::test]
    async fn test_listing_add_is_delayed_and_single_flight() {
        let mut app = App::new(fast_settings());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.store.cart().is_empty());
        assert_eq!(app.pending_tasks(), 1);

        settle(&mut app).await;
        assert_eq!(app.store.cart_count(), 1);
        assert!(app.pending_adds.is_empty());
        assert_eq!(app.pending_tasks(), 0);
    }

    #[tokio::test]
    async fn test_listing_adds_run_per_product() {
        let mut app = App::new(fast_settings());
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.pending_adds.len(), 2);
        assert_eq!(app.pending_tasks(), 2);

        settle(&mut app).await;
        assert_eq!(app.store.cart().lines().len(), 2);
        assert!(app.pending_adds.is_empty());
    }

    #[tokio::test]
    async fn test_stash_adds_one_at_a_time() {
        let mut app = App::new(fast_settings());
        app.store.toggle_stash("1");
        app.store.toggle_stash("2");
        app.store.set_view(ViewState::Wishlist);
        app.sync_views();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.pending_tasks(), 1);

        settle(&mut app).await;
        assert_eq!(app.store.cart_count(), 1);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.pending_tasks(), 1);
    }

    #[test]
    fn test_posting_review_records_it() {
        let mut app = App::new(Settings::default());
        let product = app.store.catalog().find("3").unwrap().clone();
        app.store.view_product(&product);
        app.sync_views();
        let before = app.product.as_ref().unwrap().reviews.len();

        press(&mut app, KeyCode::Char('r'));
        type_text(&mut app, "NOVA");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "fits great");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.review_error, None);
        assert_eq!(app.product.as_ref().unwrap().reviews.len(), before + 1);
    }

    #[tokio::test]
    async fn test_detail_add_commits_quantity() {
        let mut app = App::new(fast_settings());
        let product = app.store.catalog().find("5").unwrap().clone();
        app.store.view_product(&product);
        app.sync_views();

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.product.as_ref().unwrap().adding);

        settle(&mut app).await;
        assert_eq!(app.store.cart().line("5").unwrap().quantity, 3);
        assert!(!app.product.as_ref().unwrap().adding);
    }

    #[tokio::test]
    async fn test_payment_completes_order() {
        let mut app = App::new(fast_settings());
        let product = app.store.catalog().find("1").unwrap().clone();
        app.store.add_to_cart(&product);
        app.store.login();
        app.store.checkout();
        app.sync_views();

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);
        assert!(app.checkout.processing);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.pending_tasks(), 1);

        settle(&mut app).await;
        assert_eq!(app.store.view(), ViewState::Success);
        assert!(app.store.cart().is_empty());
        assert!(!app.checkout.processing);
    }

    #[tokio::test]
    async fn test_shutdown_cancels_pending_work() {
        let mut app = App::new(Settings::default());
        let product = app.store.catalog().find("1").unwrap().clone();
        app.store.add_to_cart(&product);
        app.store.login();
        app.store.checkout();
        app.sync_views();
        press(&mut app, KeyCode::Enter);

        app.shutdown();
        assert_eq!(app.pending_tasks(), 0);
        settle(&mut app).await;
        assert_eq!(app.store.view(), ViewState::Checkout);
        assert!(!app.store.cart().is_empty());
    }
}
