//! In-memory implementations of the consumed services.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use rosterdav_store::error::StoreResult;
use rosterdav_store::model::{
    CalendarRecord, EventRecord, MemberRecord, ParticipantRecord, RoleRecord,
};
use rosterdav_store::store::{MembershipStore, Visibility};

/// In-memory membership database. Populate the public fields, then hand
/// clones to the backends under test.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub members: Vec<MemberRecord>,
    pub roles: Vec<RoleRecord>,
    pub calendars: Vec<CalendarRecord>,
    pub events: Vec<EventRecord>,
    /// Participation records keyed by role id, in insertion order.
    pub participants: HashMap<i64, Vec<ParticipantRecord>>,
    /// Current role memberships as (member id, role id) pairs.
    pub memberships: HashSet<(i64, i64)>,
}

impl MemoryStore {
    /// Adds a member to a role's current membership.
    pub fn join(&mut self, member_id: i64, role_id: i64) {
        self.memberships.insert((member_id, role_id));
    }
}

impl MembershipStore for MemoryStore {
    fn find_member_by_login(&self, login: &str) -> StoreResult<Option<MemberRecord>> {
        Ok(self
            .members
            .iter()
            .find(|m| {
                m.login_name
                    .as_deref()
                    .is_some_and(|l| l.eq_ignore_ascii_case(login))
            })
            .cloned())
    }

    fn find_member_by_uuid(&self, uuid: Uuid) -> StoreResult<Option<MemberRecord>> {
        Ok(self.members.iter().find(|m| m.uuid == uuid).cloned())
    }

    fn list_members(&self) -> StoreResult<Vec<MemberRecord>> {
        Ok(self.members.clone())
    }

    fn find_role_by_id(&self, id: i64) -> StoreResult<Option<RoleRecord>> {
        Ok(self.roles.iter().find(|r| r.id == id).cloned())
    }

    fn find_role_by_uuid(&self, uuid: Uuid) -> StoreResult<Option<RoleRecord>> {
        Ok(self.roles.iter().find(|r| r.uuid == uuid).cloned())
    }

    fn list_members_of_role(&self, role_id: i64) -> StoreResult<Vec<MemberRecord>> {
        Ok(self
            .members
            .iter()
            .filter(|m| self.memberships.contains(&(m.id, role_id)))
            .cloned()
            .collect())
    }

    fn is_member_of_role(&self, member_id: i64, role_id: i64) -> StoreResult<bool> {
        Ok(self.memberships.contains(&(member_id, role_id)))
    }

    fn find_calendar_by_id(&self, id: i64) -> StoreResult<Option<CalendarRecord>> {
        Ok(self.calendars.iter().find(|c| c.id == id).cloned())
    }

    fn find_calendar_by_uuid(&self, uuid: Uuid) -> StoreResult<Option<CalendarRecord>> {
        Ok(self.calendars.iter().find(|c| c.uuid == uuid).cloned())
    }

    fn list_events_in_calendars(
        &self,
        calendar_names: &[String],
    ) -> StoreResult<Vec<EventRecord>> {
        Ok(self
            .events
            .iter()
            .filter(|e| calendar_names.contains(&e.calendar_name))
            .cloned()
            .collect())
    }

    fn find_event_by_uuid(&self, uuid: Uuid) -> StoreResult<Option<EventRecord>> {
        Ok(self.events.iter().find(|e| e.uuid == uuid).cloned())
    }

    fn list_participants(&self, role_id: i64) -> StoreResult<Vec<ParticipantRecord>> {
        Ok(self.participants.get(&role_id).cloned().unwrap_or_default())
    }
}

/// In-memory visibility service.
#[derive(Debug, Default, Clone)]
pub struct MemoryVisibility {
    /// Calendar ids visible per member.
    pub calendars: HashMap<i64, Vec<i64>>,
    /// Role UUIDs whose membership each member may view as an address book.
    pub address_books: HashMap<i64, Vec<Uuid>>,
    /// (member id, role id) pairs with view rights on the role.
    pub viewable_roles: HashSet<(i64, i64)>,
}

impl MemoryVisibility {
    pub fn grant_calendar(&mut self, member_id: i64, calendar_id: i64) {
        self.calendars.entry(member_id).or_default().push(calendar_id);
    }

    pub fn grant_address_book(&mut self, member_id: i64, role_uuid: Uuid) {
        self.address_books
            .entry(member_id)
            .or_default()
            .push(role_uuid);
    }

    pub fn grant_role_view(&mut self, member_id: i64, role_id: i64) {
        self.viewable_roles.insert((member_id, role_id));
    }
}

impl Visibility for MemoryVisibility {
    fn visible_calendars(&self, member_id: i64) -> StoreResult<Vec<i64>> {
        Ok(self.calendars.get(&member_id).cloned().unwrap_or_default())
    }

    fn visible_address_books(&self, member_id: i64) -> StoreResult<Vec<Uuid>> {
        Ok(self
            .address_books
            .get(&member_id)
            .cloned()
            .unwrap_or_default())
    }

    fn can_view_role(&self, member_id: i64, role_id: i64) -> StoreResult<bool> {
        Ok(self.viewable_roles.contains(&(member_id, role_id)))
    }
}
