//! Local UI chrome state (modals and their tabs).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of auth state so any component can open
//! the login modal without touching the session.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs of the authentication modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub show_auth_modal: bool,
    pub auth_tab: AuthTab,
    pub show_profile_modal: bool,
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn open_auth_modal(&mut self, tab: AuthTab) {
        self.show_auth_modal = true;
        self.auth_tab = tab;
        self.mobile_menu_open = false;
    }

    pub fn close_auth_modal(&mut self) {
        self.show_auth_modal = false;
    }

    pub fn open_profile_modal(&mut self) {
        self.show_profile_modal = true;
        self.mobile_menu_open = false;
    }

    pub fn close_profile_modal(&mut self) {
        self.show_profile_modal = false;
    }
}
