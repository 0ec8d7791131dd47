// Mock authentication session.
// Holds the signed-in user and the view to resume after a login detour.

use crate::catalog::User;

use super::view::ViewState;

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    redirect: Option<ViewState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Remember a view to resume once the user logs in.
    pub fn set_redirect(&mut self, view: ViewState) {
        self.redirect = Some(view);
    }

    pub fn redirect(&self) -> Option<ViewState> {
        self.redirect
    }

    /// Consume the pending redirect. Later calls return None.
    pub fn take_redirect(&mut self) -> Option<ViewState> {
        self.redirect.take()
    }
}
