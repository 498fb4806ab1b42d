//! Session persistence across simulated reloads using on-disk storage.

use pretty_assertions::assert_eq;
use shelf_auth::storage::{TOKEN_KEY, USER_KEY};
use shelf_auth::{AuthError, DemoVerifier, FileStorage, RestoreOutcome, SessionStore};

fn open(dir: &std::path::Path) -> SessionStore<DemoVerifier, FileStorage> {
    SessionStore::new(DemoVerifier::default(), FileStorage::new(dir))
}

#[test]
fn sign_in_survives_reload() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");

    let mut first = open(tmp.path());
    first.restore().expect("restore");
    let user = first
        .sign_in("demo@example.com", "password")
        .expect("sign in")
        .user
        .clone();
    drop(first);

    let mut second = open(tmp.path());
    assert_eq!(second.restore().expect("restore"), RestoreOutcome::Restored);
    assert_eq!(second.current_session().map(|s| &s.user), Some(&user));
}

#[test]
fn sign_out_survives_reload() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");

    let mut first = open(tmp.path());
    first.restore().expect("restore");
    first.sign_in("demo@example.com", "password").expect("sign in");
    first.sign_out().expect("sign out");
    assert!(!tmp.path().join(TOKEN_KEY).exists());
    assert!(!tmp.path().join(USER_KEY).exists());

    let mut second = open(tmp.path());
    assert_eq!(second.restore().expect("restore"), RestoreOutcome::Empty);
    assert!(!second.is_authenticated());
}

#[test]
fn failed_sign_in_writes_nothing() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");

    let mut store = open(tmp.path());
    store.restore().expect("restore");
    let err = store
        .sign_in("demo@example.com", "letmein")
        .expect_err("should fail");
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(!tmp.path().join(TOKEN_KEY).exists());
}

#[test]
fn corrupt_user_file_is_discarded_on_restore() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(tmp.path().join(TOKEN_KEY), "mock-jwt-token").expect("write");
    std::fs::write(tmp.path().join(USER_KEY), "{\"id\": 5}").expect("write");

    let mut store = open(tmp.path());
    let outcome = store.restore().expect("restore");
    assert!(matches!(outcome, RestoreOutcome::Discarded { .. }));
    assert!(!store.is_loading());
    assert!(!store.is_authenticated());
    assert!(!tmp.path().join(TOKEN_KEY).exists());
    assert!(!tmp.path().join(USER_KEY).exists());
}
