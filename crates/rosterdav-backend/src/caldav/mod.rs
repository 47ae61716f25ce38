//! Calendar storage: the contract consumed by the protocol engine and the
//! roster-backed implementation.

pub mod backend;
pub mod object;

pub use backend::RosterCalendarBackend;

use uuid::Uuid;

use crate::auth::RequestContext;
use crate::error::{DavError, DavResult};
use crate::types::{CollectionChanges, CollectionInfo, ResourceBody, ResourceSummary};

/// Storage contract for calendar collections.
///
/// Read operations are required. Mutating operations and change tracking are
/// provided methods that signal the capability is absent; an implementation
/// that supports them overrides them, this one does not.
pub trait CalendarStorage {
    /// Calendar collections visible to the requesting principal.
    fn list_collections(&self, ctx: &RequestContext) -> DavResult<Vec<CollectionInfo>>;

    /// Summaries of every event in the named calendar.
    fn list_resources(
        &self,
        ctx: &RequestContext,
        calendar_id: Uuid,
    ) -> DavResult<Vec<ResourceSummary>>;

    /// ## Summary
    /// Materializes one calendar object by its URI within the collection.
    ///
    /// ## Errors
    /// `NotFound` when the URI names nothing in this calendar.
    fn get_resource(
        &self,
        ctx: &RequestContext,
        calendar_id: Uuid,
        uri: &str,
    ) -> DavResult<ResourceBody>;

    fn create_collection(&self, _ctx: &RequestContext, _uri: &str) -> DavResult<Uuid> {
        Err(DavError::NotSupported("creating calendars"))
    }

    fn update_collection(&self, _ctx: &RequestContext, _calendar_id: Uuid) -> DavResult<()> {
        Err(DavError::NotSupported("updating calendars"))
    }

    fn delete_collection(&self, _ctx: &RequestContext, _calendar_id: Uuid) -> DavResult<()> {
        Err(DavError::NotSupported("deleting calendars"))
    }

    fn create_resource(
        &self,
        _ctx: &RequestContext,
        _calendar_id: Uuid,
        _uri: &str,
        _data: &str,
    ) -> DavResult<Option<String>> {
        Err(DavError::NotSupported("creating calendar objects"))
    }

    fn update_resource(
        &self,
        _ctx: &RequestContext,
        _calendar_id: Uuid,
        _uri: &str,
        _data: &str,
    ) -> DavResult<Option<String>> {
        Err(DavError::NotSupported("updating calendar objects"))
    }

    fn delete_resource(
        &self,
        _ctx: &RequestContext,
        _calendar_id: Uuid,
        _uri: &str,
    ) -> DavResult<()> {
        Err(DavError::NotSupported("deleting calendar objects"))
    }

    /// Incremental changes since a sync token. `Ok(None)` means no change
    /// information is available and the engine must re-enumerate; it is not
    /// an empty delta.
    fn changes_since(
        &self,
        _ctx: &RequestContext,
        _calendar_id: Uuid,
        _sync_token: Option<&str>,
    ) -> DavResult<Option<CollectionChanges>> {
        Ok(None)
    }
}
