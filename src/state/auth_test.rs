use super::*;
use crate::net::types::Role;

#[test]
fn default_state_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.display_name(), None);
}

#[test]
fn display_name_joins_first_and_last() {
    let state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            first_name: "Ali".to_owned(),
            last_name: "Vural".to_owned(),
            email: "ali@example.com".to_owned(),
            role: Role::Parent,
        }),
        loading: false,
    };
    assert_eq!(state.display_name(), Some("Ali Vural".to_owned()));
}
