// Account view state.
// Login and register forms, password strength, and the profile page.

use rust_decimal::Decimal;

use crate::catalog::User;

use super::list::SelectableList;

/// Which field of a form receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Name,
    #[default]
    Email,
    Password,
    Address,
}

/// A simple multi-field text form.
#[derive(Debug, Clone, Default)]
pub struct TextForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub field: FormField,
    fields: Vec<FormField>,
}

impl TextForm {
    fn with_fields(fields: &[FormField]) -> Self {
        Self {
            field: fields.first().copied().unwrap_or_default(),
            fields: fields.to_vec(),
            ..Self::default()
        }
    }

    /// Email and password.
    pub fn login() -> Self {
        Self::with_fields(&[FormField::Email, FormField::Password])
    }

    /// Name, email, and password.
    pub fn register() -> Self {
        Self::with_fields(&[FormField::Name, FormField::Email, FormField::Password])
    }

    /// Name, email, and shipping address seeded from the signed-in user.
    pub fn profile(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            address: "123 Cyberpunk Avenue, Neo-Tokyo, 9991".to_string(),
            ..Self::with_fields(&[FormField::Name, FormField::Email, FormField::Address])
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn value_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::Address => &mut self.address,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::Address => &self.address,
        }
    }

    pub fn push(&mut self, c: char) {
        self.value_mut().push(c);
    }

    pub fn pop(&mut self) {
        self.value_mut().pop();
    }

    pub fn next_field(&mut self) {
        if let Some(i) = self.fields.iter().position(|f| *f == self.field) {
            self.field = self.fields[(i + 1) % self.fields.len()];
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(i) = self.fields.iter().position(|f| *f == self.field) {
            let len = self.fields.len();
            self.field = self.fields[(i + len - 1) % len];
        }
    }
}

/// Password strength meter on the register form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Empty,
    Weak,
    Fair,
    Strong,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => PasswordStrength::Empty,
            1..=4 => PasswordStrength::Weak,
            5..=7 => PasswordStrength::Fair,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "ENTER PASSWORD",
            PasswordStrength::Weak => "TOO WEAK",
            PasswordStrength::Fair => "GETTING THERE",
            PasswordStrength::Strong => "STRONG",
        }
    }

    /// Filled segments out of three.
    pub fn level(&self) -> u8 {
        *self as u8
    }
}

/// Delivery status of a past order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Delivered,
    Shipped,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Shipped => "SHIPPED",
        }
    }
}

/// A row in the profile's order history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: &'static str,
    pub date: &'static str,
    pub total: Decimal,
    pub status: OrderStatus,
}

impl OrderRecord {
    /// Shipments still moving have a live tracking timeline.
    pub fn is_active(&self) -> bool {
        self.status == OrderStatus::Shipped
    }
}

/// Static order history shown on every profile.
pub fn order_history() -> Vec<OrderRecord> {
    vec![
        OrderRecord {
            id: "AICE-8821",
            date: "2023-10-24",
            total: Decimal::new(45000, 2),
            status: OrderStatus::Delivered,
        },
        OrderRecord {
            id: "AICE-8899",
            date: "2023-10-26",
            total: Decimal::new(12000, 2),
            status: OrderStatus::Shipped,
        },
    ]
}

/// State for the profile view.
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub form: TextForm,
    pub editing: bool,
    pub orders: Vec<OrderRecord>,
    pub list: SelectableList,
    /// Order whose tracking timeline is expanded.
    pub expanded: Option<&'static str>,
    user_id: String,
}

impl ProfileState {
    pub fn new(user: &User) -> Self {
        let orders = order_history();
        let mut list = SelectableList::new();
        list.reset(orders.len());
        Self {
            form: TextForm::profile(user),
            editing: false,
            orders,
            list,
            expanded: None,
            user_id: user.id.clone(),
        }
    }

    pub fn is_for(&self, user: &User) -> bool {
        self.user_id == user.id
    }

    /// Expand the order's tracking, or collapse it if already expanded.
    pub fn toggle_track(&mut self, id: &'static str) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn toggle_selected(&mut self) {
        if let Some(order) = self.list.pick(&self.orders) {
            let id = order.id;
            self.toggle_track(id);
        }
    }
}
