use std::sync::Arc;

use super::*;
use crate::net::types::Role;

fn sample_user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        first_name: "Elif".to_owned(),
        last_name: "Yilmaz".to_owned(),
        email: "elif@example.com".to_owned(),
        role,
    }
}

fn memory_store() -> (SessionStore, Arc<MemoryStorage>) {
    let backend = Arc::new(MemoryStorage::default());
    (SessionStore::new(backend.clone()), backend)
}

#[test]
fn load_after_save_round_trips() {
    let (store, _) = memory_store();
    let session = Session {
        token: "tok-1".to_owned(),
        user: sample_user(Role::Teacher),
    };
    store.save(&session);
    assert_eq!(store.load(), Some(session));
}

#[test]
fn load_without_save_is_absent() {
    let (store, _) = memory_store();
    assert_eq!(store.load(), None);
}

#[test]
fn load_after_clear_is_absent() {
    let (store, _) = memory_store();
    store.save(&Session {
        token: "tok-2".to_owned(),
        user: sample_user(Role::Student),
    });
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn clear_is_idempotent() {
    let (store, _) = memory_store();
    store.clear();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn corrupt_user_record_loads_as_absent_and_is_removed() {
    let (store, backend) = memory_store();
    backend.set(TOKEN_KEY, "tok-3");
    backend.set(USER_KEY, "{not-json");
    assert_eq!(store.load(), None);
    assert_eq!(backend.get(TOKEN_KEY), None);
    assert_eq!(backend.get(USER_KEY), None);
}

#[test]
fn unknown_role_in_user_record_counts_as_corrupt() {
    let (store, backend) = memory_store();
    backend.set(TOKEN_KEY, "tok-4");
    backend.set(
        USER_KEY,
        r#"{"id":"u9","firstName":"X","lastName":"Y","email":"x@y.z","role":"MENTOR"}"#,
    );
    assert_eq!(store.load(), None);
    assert_eq!(backend.get(USER_KEY), None);
}

#[test]
fn token_without_user_is_absent_and_cleared() {
    let (store, backend) = memory_store();
    backend.set(TOKEN_KEY, "orphan");
    assert_eq!(store.load(), None);
    assert_eq!(backend.get(TOKEN_KEY), None);
}

#[test]
fn user_without_token_is_absent_and_cleared() {
    let (store, backend) = memory_store();
    let raw_user = serde_json::to_string(&sample_user(Role::Parent)).expect("json");
    backend.set(USER_KEY, &raw_user);
    assert_eq!(store.load(), None);
    assert_eq!(backend.get(USER_KEY), None);
}

#[test]
fn save_overwrites_previous_session_wholesale() {
    let (store, _) = memory_store();
    store.save(&Session {
        token: "tok-old".to_owned(),
        user: sample_user(Role::Student),
    });
    let replacement = Session {
        token: "tok-new".to_owned(),
        user: sample_user(Role::Admin),
    };
    store.save(&replacement);
    assert_eq!(store.load(), Some(replacement));
}
