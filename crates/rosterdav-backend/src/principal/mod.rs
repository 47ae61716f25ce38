//! Principal storage: the contract consumed by the protocol engine and the
//! roster-backed implementation.

pub mod backend;

pub use backend::RosterPrincipalBackend;

use crate::error::{DavError, DavResult};
use crate::types::PrincipalInfo;

/// Storage contract for principal records.
///
/// Group-delegation lookups are provided methods returning empty sets:
/// group-based ACLs are a declared non-goal of this adapter. Mutating and
/// search operations signal the capability is absent.
pub trait PrincipalStorage {
    /// Every member with a login handle, under the given URI prefix.
    fn list_principals(&self, prefix: &str) -> DavResult<Vec<PrincipalInfo>>;

    /// ## Summary
    /// Looks up one principal by its "<prefix>/<handle>" path.
    ///
    /// ## Errors
    /// `ParseError` for a malformed path, `NotFound` for an unknown handle.
    fn get_principal(&self, path: &str) -> DavResult<PrincipalInfo>;

    fn group_member_set(&self, _principal_path: &str) -> DavResult<Vec<String>> {
        Ok(Vec::new())
    }

    fn group_membership(&self, _principal_path: &str) -> DavResult<Vec<String>> {
        Ok(Vec::new())
    }

    fn set_group_member_set(
        &self,
        _principal_path: &str,
        _member_paths: &[&str],
    ) -> DavResult<()> {
        Err(DavError::NotSupported("updating group members"))
    }

    fn create_principal(&self, _path: &str) -> DavResult<()> {
        Err(DavError::NotSupported("creating principals"))
    }

    fn update_principal(&self, _path: &str) -> DavResult<()> {
        Err(DavError::NotSupported("updating principals"))
    }

    fn search_principals(
        &self,
        _prefix: &str,
        _properties: &[(String, String)],
    ) -> DavResult<Vec<String>> {
        Err(DavError::NotSupported("searching principals"))
    }

    fn find_by_uri(&self, _uri: &str, _prefix: &str) -> DavResult<Option<String>> {
        Err(DavError::NotSupported("finding principals by uri"))
    }
}
