//! Request-scoped identity.
//!
//! The verified principal is an explicit value threaded through every backend
//! call. Each request gets an independent instance from credential
//! verification; nothing here is process-global, and nothing outlives the
//! request.

use rosterdav_store::model::MemberRecord;

use crate::error::{DavError, DavResult};

/// The authenticated principal of one request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    member: MemberRecord,
    principal_uri: String,
}

impl RequestContext {
    /// ## Summary
    /// Builds the context for a verified member. Called exactly once per
    /// request, by credential verification.
    ///
    /// ## Errors
    /// Returns `NotAuthenticated` if the member has no login handle; such
    /// members cannot act as principals.
    pub fn new(member: MemberRecord, principal_prefix: &str) -> DavResult<Self> {
        let login = member
            .login_name
            .as_deref()
            .ok_or(DavError::NotAuthenticated)?;
        let principal_uri = format!("{principal_prefix}/{login}");
        Ok(Self {
            member,
            principal_uri,
        })
    }

    #[must_use]
    pub fn member(&self) -> &MemberRecord {
        &self.member
    }

    /// Internal numeric identity used for visibility checks.
    #[must_use]
    pub fn member_id(&self) -> i64 {
        self.member.id
    }

    /// "<prefix>/<login>" of the authenticated principal.
    #[must_use]
    pub fn principal_uri(&self) -> &str {
        &self.principal_uri
    }
}
