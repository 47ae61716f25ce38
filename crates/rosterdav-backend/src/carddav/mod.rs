//! Address-book storage: the contract consumed by the protocol engine and
//! the roster-backed implementation.

pub mod backend;
pub mod vcard;

pub use backend::RosterAddressBookBackend;

use uuid::Uuid;

use crate::auth::RequestContext;
use crate::error::{DavError, DavResult};
use crate::types::{CollectionInfo, ResourceBody, ResourceSummary};

/// Storage contract for address-book collections.
///
/// Read operations are required; mutating operations are provided methods
/// that signal the capability is absent.
pub trait AddressBookStorage {
    /// Address books visible to the requesting principal.
    fn list_collections(&self, ctx: &RequestContext) -> DavResult<Vec<CollectionInfo>>;

    /// Summaries of every contact in the named address book.
    fn list_resources(
        &self,
        ctx: &RequestContext,
        addressbook_id: Uuid,
    ) -> DavResult<Vec<ResourceSummary>>;

    /// ## Summary
    /// Materializes one contact by its URI within the collection.
    ///
    /// ## Errors
    /// `NotFound` when the URI names nothing, or names a member who no
    /// longer holds the role.
    fn get_resource(
        &self,
        ctx: &RequestContext,
        addressbook_id: Uuid,
        uri: &str,
    ) -> DavResult<ResourceBody>;

    /// Batch variant of [`Self::get_resource`]; URIs that resolve to nothing
    /// are skipped rather than failing the batch.
    fn get_resources(
        &self,
        ctx: &RequestContext,
        addressbook_id: Uuid,
        uris: &[&str],
    ) -> DavResult<Vec<ResourceBody>> {
        let mut bodies = Vec::with_capacity(uris.len());
        for uri in uris {
            match self.get_resource(ctx, addressbook_id, uri) {
                Ok(body) => bodies.push(body),
                Err(DavError::NotFound(_)) => {}
                Err(other) => return Err(other),
            }
        }
        Ok(bodies)
    }

    fn create_collection(&self, _ctx: &RequestContext, _uri: &str) -> DavResult<Uuid> {
        Err(DavError::NotSupported("creating addressbooks"))
    }

    fn update_collection(&self, _ctx: &RequestContext, _addressbook_id: Uuid) -> DavResult<()> {
        Err(DavError::NotSupported("updating addressbooks"))
    }

    fn delete_collection(&self, _ctx: &RequestContext, _addressbook_id: Uuid) -> DavResult<()> {
        Err(DavError::NotSupported("deleting addressbooks"))
    }

    fn create_resource(
        &self,
        _ctx: &RequestContext,
        _addressbook_id: Uuid,
        _uri: &str,
        _data: &str,
    ) -> DavResult<Option<String>> {
        Err(DavError::NotSupported("creating cards"))
    }

    fn update_resource(
        &self,
        _ctx: &RequestContext,
        _addressbook_id: Uuid,
        _uri: &str,
        _data: &str,
    ) -> DavResult<Option<String>> {
        Err(DavError::NotSupported("updating cards"))
    }

    fn delete_resource(
        &self,
        _ctx: &RequestContext,
        _addressbook_id: Uuid,
        _uri: &str,
    ) -> DavResult<()> {
        Err(DavError::NotSupported("deleting cards"))
    }
}
