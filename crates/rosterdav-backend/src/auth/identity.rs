//! Principal identity resolution and the credential flow.

use rosterdav_core::config::Settings;
use rosterdav_store::store::MembershipStore;

use crate::auth::context::RequestContext;
use crate::auth::password::SecretVerifier;
use crate::error::{DavError, DavResult};

/// Reduces a principal reference to its bare login handle. Accepts either a
/// bare handle or a "<prefix>/<handle>" path.
#[must_use]
pub fn login_handle<'a>(login_or_path: &'a str, principal_prefix: &str) -> &'a str {
    login_or_path
        .strip_prefix(principal_prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(login_or_path)
}

/// ## Summary
/// Resolves a principal reference to the internal numeric identity. Lookup is
/// case-insensitive on the login handle (a store obligation).
///
/// ## Errors
/// Returns `NotFound` for an unknown handle; store failures propagate.
#[tracing::instrument(skip(store))]
pub fn resolve_identity<S: MembershipStore>(
    store: &S,
    login_or_path: &str,
    principal_prefix: &str,
) -> DavResult<i64> {
    let handle = login_handle(login_or_path, principal_prefix);

    store
        .find_member_by_login(handle)?
        .map(|member| member.id)
        .ok_or_else(|| DavError::NotFound(format!("principal {handle}")))
}

/// ## Summary
/// Verifies credentials and produces the request's identity context.
///
/// The secret check is delegated to the external verifier. The verifier runs
/// on the unknown-handle path too, against no hash, so both failure modes
/// take comparable time.
///
/// ## Errors
/// Returns `NotAuthenticated` on any credential failure; the error does not
/// distinguish an unknown handle from a wrong secret.
#[tracing::instrument(skip(store, verifier, settings, secret))]
pub fn verify_credentials<S, V>(
    store: &S,
    verifier: &V,
    settings: &Settings,
    login_or_path: &str,
    secret: &str,
) -> DavResult<RequestContext>
where
    S: MembershipStore,
    V: SecretVerifier,
{
    let handle = login_handle(login_or_path, &settings.principal.prefix);
    let member = store.find_member_by_login(handle)?;

    match member {
        Some(member) if verifier.check(member.password_hash.as_deref(), secret) => {
            tracing::debug!(member_id = member.id, "Credentials verified");
            RequestContext::new(member, &settings.principal.prefix)
        }
        Some(_member) => {
            tracing::trace!("Credential verification failed");
            Err(DavError::NotAuthenticated)
        }
        None => {
            let _burned = verifier.check(None, secret);
            tracing::trace!("Credential verification failed");
            Err(DavError::NotAuthenticated)
        }
    }
}
