use super::*;

#[test]
fn ui_state_default_has_no_modals() {
    let state = UiState::default();
    assert!(!state.show_auth_modal);
    assert!(!state.show_profile_modal);
    assert_eq!(state.auth_tab, AuthTab::Login);
}

#[test]
fn open_auth_modal_selects_tab_and_closes_menu() {
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    state.open_auth_modal(AuthTab::Register);
    assert!(state.show_auth_modal);
    assert_eq!(state.auth_tab, AuthTab::Register);
    assert!(!state.mobile_menu_open);
    state.close_auth_modal();
    assert!(!state.show_auth_modal);
}

#[test]
fn profile_modal_toggles() {
    let mut state = UiState::default();
    state.open_profile_modal();
    assert!(state.show_profile_modal);
    state.close_profile_modal();
    assert!(!state.show_profile_modal);
}
