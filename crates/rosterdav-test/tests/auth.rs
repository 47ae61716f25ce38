//! Identity resolution and credential verification.

use rosterdav_backend::auth::identity::{login_handle, resolve_identity, verify_credentials};
use rosterdav_backend::auth::password::hash_password;
use rosterdav_backend::auth::Argon2Verifier;
use rosterdav_backend::error::DavError;
use rosterdav_core::config::Settings;
use rosterdav_test::fixtures;
use rosterdav_test::memory::MemoryStore;

fn store_with_ada() -> MemoryStore {
    let mut store = MemoryStore::default();
    let mut ada = fixtures::member(1, Some("ada"), "Ada", "Lovelace");
    ada.password_hash = Some(hash_password("correct horse").unwrap());
    store.members.push(ada);
    store
        .members
        .push(fixtures::member(2, Some("bob"), "Bob", "Builder"));
    store
}

#[test]
fn login_handle_accepts_paths_and_bare_handles() {
    assert_eq!(login_handle("ada", "principals"), "ada");
    assert_eq!(login_handle("principals/ada", "principals"), "ada");
    // Only the configured prefix is stripped.
    assert_eq!(login_handle("users/ada", "principals"), "users/ada");
}

#[test]
fn identity_resolution_is_case_insensitive() {
    let store = store_with_ada();
    assert_eq!(resolve_identity(&store, "ada", "principals").unwrap(), 1);
    assert_eq!(resolve_identity(&store, "ADA", "principals").unwrap(), 1);
    assert_eq!(
        resolve_identity(&store, "principals/Ada", "principals").unwrap(),
        1
    );
    assert!(matches!(
        resolve_identity(&store, "nobody", "principals"),
        Err(DavError::NotFound(_))
    ));
}

#[test]
fn verified_credentials_yield_the_request_context() {
    let store = store_with_ada();
    let ctx = verify_credentials(
        &store,
        &Argon2Verifier,
        &Settings::default(),
        "ada",
        "correct horse",
    )
    .unwrap();

    assert_eq!(ctx.member_id(), 1);
    assert_eq!(ctx.principal_uri(), "principals/ada");
}

#[test]
fn failure_does_not_reveal_whether_the_handle_exists() {
    let store = store_with_ada();
    let settings = Settings::default();

    let wrong_secret = verify_credentials(
        &store,
        &Argon2Verifier,
        &settings,
        "ada",
        "wrong battery staple",
    )
    .unwrap_err();
    let unknown_handle =
        verify_credentials(&store, &Argon2Verifier, &settings, "nobody", "whatever").unwrap_err();

    assert!(matches!(wrong_secret, DavError::NotAuthenticated));
    assert!(matches!(unknown_handle, DavError::NotAuthenticated));
    // The public signal is identical in both cases.
    assert_eq!(wrong_secret.to_string(), unknown_handle.to_string());
}

#[test]
fn member_without_a_hash_cannot_authenticate() {
    let store = store_with_ada();
    let result = verify_credentials(
        &store,
        &Argon2Verifier,
        &Settings::default(),
        "bob",
        "anything",
    );
    assert!(matches!(result, Err(DavError::NotAuthenticated)));
}
