//! Roster-backed principal storage.

use rosterdav_core::config::Settings;
use rosterdav_store::store::MembershipStore;

use crate::error::{DavError, DavResult};
use crate::principal::PrincipalStorage;
use crate::types::PrincipalInfo;

/// ## Summary
/// Extracts the login handle from a "<prefix>/<handle>" principal path.
///
/// Splitting is strict: exactly two segments, the first equal to the
/// configured prefix, the second non-empty. Anything else is a malformed
/// request, answered with a controlled error.
///
/// ## Errors
/// Returns `ParseError` for any other path shape.
pub fn parse_principal_path<'a>(path: &'a str, prefix: &str) -> DavResult<&'a str> {
    let mut segments = path.split('/');

    match (segments.next(), segments.next(), segments.next()) {
        (Some(first), Some(handle), None) if first == prefix && !handle.is_empty() => Ok(handle),
        _ => Err(DavError::ParseError(format!(
            "principal path '{path}' does not match '{prefix}/<login>'"
        ))),
    }
}

/// Exposes members holding a login handle as principals.
pub struct RosterPrincipalBackend<S> {
    store: S,
    settings: Settings,
}

impl<S> RosterPrincipalBackend<S>
where
    S: MembershipStore,
{
    pub fn new(store: S, settings: Settings) -> Self {
        Self { store, settings }
    }
}

impl<S> PrincipalStorage for RosterPrincipalBackend<S>
where
    S: MembershipStore,
{
    #[tracing::instrument(skip(self))]
    fn list_principals(&self, prefix: &str) -> DavResult<Vec<PrincipalInfo>> {
        let members = self.store.list_members()?;

        let principals = members
            .into_iter()
            .filter_map(|member| {
                let login = member.login_name.as_deref()?;
                Some(PrincipalInfo {
                    id: member.uuid,
                    uri: format!("{prefix}/{login}"),
                    display_name: member.display_name(),
                    email: member.email.clone(),
                })
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = principals.len(), "Listed principals");
        Ok(principals)
    }

    #[tracing::instrument(skip(self))]
    fn get_principal(&self, path: &str) -> DavResult<PrincipalInfo> {
        let handle = parse_principal_path(path, &self.settings.principal.prefix)?;

        let member = self
            .store
            .find_member_by_login(handle)?
            .ok_or_else(|| DavError::NotFound(format!("principal {handle}")))?;

        // Canonical casing comes from the stored handle, not the request.
        let login = member
            .login_name
            .as_deref()
            .ok_or_else(|| DavError::NotFound(format!("principal {handle}")))?;

        Ok(PrincipalInfo {
            id: member.uuid,
            uri: format!("{}/{login}", self.settings.principal.prefix),
            display_name: member.display_name(),
            email: member.email.clone(),
        })
    }
}
