// State management module.
// Shared shopping state in the coordinator plus the local state of each view.

#![allow(dead_code)]

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod coordinator;
pub mod home;
pub mod list;
pub mod product;
pub mod session;
pub mod stash;
pub mod toast;
pub mod view;

pub use account::{FormField, PasswordStrength, ProfileState, TextForm};
pub use cart::CartLine;
pub use catalog::CatalogViewState;
pub use checkout::{CheckoutState, OrderSummary, ShippingMethod};
pub use coordinator::{Coordinator, Screen};
pub use home::{HomeState, Shortcut};
pub use list::SelectableList;
pub use product::{ProductDetailState, ReviewField};
pub use view::{BreadcrumbNode, NAV_LINKS, ViewState, breadcrumbs};
