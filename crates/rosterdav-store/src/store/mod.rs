//! Traits describing the consumed relational query and visibility services.

use uuid::Uuid;

use crate::error::StoreResult;
use crate::model::{CalendarRecord, EventRecord, MemberRecord, ParticipantRecord, RoleRecord};

/// Read-only access to the membership database.
///
/// Every call goes to live relational state; the adapter holds no cache, so
/// repeated calls within a request must be idempotent. Not-found is `Ok(None)`
/// (or an empty list), never an error.
pub trait MembershipStore {
    /// Lookup by login handle. Implementations must match case-insensitively.
    fn find_member_by_login(&self, login: &str) -> StoreResult<Option<MemberRecord>>;

    fn find_member_by_uuid(&self, uuid: Uuid) -> StoreResult<Option<MemberRecord>>;

    /// All members, with or without a login handle.
    fn list_members(&self) -> StoreResult<Vec<MemberRecord>>;

    fn find_role_by_id(&self, id: i64) -> StoreResult<Option<RoleRecord>>;

    fn find_role_by_uuid(&self, uuid: Uuid) -> StoreResult<Option<RoleRecord>>;

    /// Current members of a role.
    fn list_members_of_role(&self, role_id: i64) -> StoreResult<Vec<MemberRecord>>;

    /// Whether the member currently holds the role. Distinct from the member
    /// existing at all; both checks gate a card fetch.
    fn is_member_of_role(&self, member_id: i64, role_id: i64) -> StoreResult<bool>;

    fn find_calendar_by_id(&self, id: i64) -> StoreResult<Option<CalendarRecord>>;

    fn find_calendar_by_uuid(&self, uuid: Uuid) -> StoreResult<Option<CalendarRecord>>;

    /// Events belonging to any of the named calendars.
    fn list_events_in_calendars(&self, calendar_names: &[String])
    -> StoreResult<Vec<EventRecord>>;

    fn find_event_by_uuid(&self, uuid: Uuid) -> StoreResult<Option<EventRecord>>;

    /// Participation records of an event's role, in stored order. Order
    /// matters: the first leader-flagged record becomes the organizer.
    fn list_participants(&self, role_id: i64) -> StoreResult<Vec<ParticipantRecord>>;
}

/// External authorization service: which collections a principal may see.
pub trait Visibility {
    /// Ids of the calendars (categories) visible to the member.
    fn visible_calendars(&self, member_id: i64) -> StoreResult<Vec<i64>>;

    /// UUIDs of the roles whose membership the member may view.
    fn visible_address_books(&self, member_id: i64) -> StoreResult<Vec<Uuid>>;

    fn can_view_role(&self, member_id: i64, role_id: i64) -> StoreResult<bool>;
}
