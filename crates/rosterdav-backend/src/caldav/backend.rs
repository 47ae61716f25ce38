//! Roster-backed calendar storage.

use uuid::Uuid;

use rosterdav_core::config::Settings;
use rosterdav_core::constants::ICS_SUFFIX;
use rosterdav_core::types::{CollectionKind, ComponentKind};
use rosterdav_store::model::EventRecord;
use rosterdav_store::store::{MembershipStore, Visibility};

use crate::auth::RequestContext;
use crate::caldav::object::build_event_body;
use crate::caldav::CalendarStorage;
use crate::changed;
use crate::error::{DavError, DavResult};
use crate::etag::generate_etag;
use crate::types::{CollectionInfo, ResourceBody, ResourceSummary};
use crate::uri;

/// Synthesizes calendar collections from event categories. Each visible
/// category becomes one read-only VEVENT collection; each event row becomes
/// one calendar object.
pub struct RosterCalendarBackend<S, V> {
    store: S,
    visibility: V,
    settings: Settings,
}

impl<S, V> RosterCalendarBackend<S, V>
where
    S: MembershipStore,
    V: Visibility,
{
    pub fn new(store: S, visibility: V, settings: Settings) -> Self {
        Self {
            store,
            visibility,
            settings,
        }
    }

    /// Effective change time of an event: its own timestamps plus, when a
    /// participation role is attached, the latest participation change.
    /// Shared by the enumeration and single-fetch paths so both report the
    /// same instant.
    fn event_change_time(&self, event: &EventRecord) -> DavResult<chrono::DateTime<chrono::Utc>> {
        let secondary = match event.participation_role_id {
            Some(role_id) => changed::participation_change(&self.store.list_participants(role_id)?),
            None => None,
        };
        Ok(changed::latest_change(
            event.created_at,
            event.updated_at,
            secondary,
        ))
    }
}

impl<S, V> CalendarStorage for RosterCalendarBackend<S, V>
where
    S: MembershipStore,
    V: Visibility,
{
    #[tracing::instrument(skip(self, ctx), fields(member_id = ctx.member_id()))]
    fn list_collections(&self, ctx: &RequestContext) -> DavResult<Vec<CollectionInfo>> {
        let calendar_ids = self.visibility.visible_calendars(ctx.member_id())?;

        let mut collections = Vec::with_capacity(calendar_ids.len());
        for calendar_id in calendar_ids {
            let Some(calendar) = self.store.find_calendar_by_id(calendar_id)? else {
                tracing::warn!(calendar_id, "Visible calendar vanished during enumeration");
                continue;
            };

            collections.push(CollectionInfo {
                id: calendar.uuid,
                uri: calendar.uuid.to_string(),
                principal_uri: ctx.principal_uri().to_string(),
                kind: CollectionKind::Calendar,
                display_name: Some(calendar.name),
                description: None,
                read_only: true,
                supported_components: vec![ComponentKind::Event],
                order: Some(calendar.id),
            });
        }

        tracing::debug!(count = collections.len(), "Listed calendars");
        Ok(collections)
    }

    #[tracing::instrument(skip(self, _ctx))]
    fn list_resources(
        &self,
        _ctx: &RequestContext,
        calendar_id: Uuid,
    ) -> DavResult<Vec<ResourceSummary>> {
        let calendar = self
            .store
            .find_calendar_by_uuid(calendar_id)?
            .ok_or_else(|| DavError::NotFound(format!("calendar {calendar_id}")))?;

        let events = self
            .store
            .list_events_in_calendars(std::slice::from_ref(&calendar.name))?;

        let mut summaries = Vec::with_capacity(events.len());
        for event in events {
            let last_modified = self.event_change_time(&event)?;
            summaries.push(ResourceSummary {
                id: event.uuid,
                uri: format!("{}{ICS_SUFFIX}", event.uuid),
                last_modified,
                etag: None,
                component: ComponentKind::Event,
            });
        }

        tracing::debug!(count = summaries.len(), "Listed calendar objects");
        Ok(summaries)
    }

    #[tracing::instrument(skip(self, ctx), fields(member_id = ctx.member_id()))]
    fn get_resource(
        &self,
        ctx: &RequestContext,
        calendar_id: Uuid,
        uri: &str,
    ) -> DavResult<ResourceBody> {
        let calendar = self
            .store
            .find_calendar_by_uuid(calendar_id)?
            .ok_or_else(|| DavError::NotFound(format!("calendar {calendar_id}")))?;

        let event_uuid = uri::resource_identity(uri, ICS_SUFFIX)?;
        let event = self
            .store
            .find_event_by_uuid(event_uuid)?
            .ok_or_else(|| DavError::NotFound(format!("event {event_uuid}")))?;

        // Fetch-by-URI and enumeration must agree: an event reachable here
        // must belong to the collection it is fetched through.
        if event.calendar_name != calendar.name {
            return Err(DavError::NotFound(format!("event {event_uuid}")));
        }

        let participants = match event.participation_role_id {
            Some(role_id) => Some(self.store.list_participants(role_id)?),
            None => None,
        };

        // Participation changes move the timestamp whether or not the
        // requester may see the attendee set.
        let last_modified = changed::latest_change(
            event.created_at,
            event.updated_at,
            participants.as_deref().and_then(changed::participation_change),
        );

        let can_view = match event.participation_role_id {
            Some(role_id) => self.visibility.can_view_role(ctx.member_id(), role_id)?,
            None => false,
        };
        let visible_participants = if can_view {
            participants.as_deref()
        } else {
            None
        };

        let data = build_event_body(
            &event,
            last_modified,
            visible_participants,
            &self.settings.calendar.fallback_attendee_email,
        )?;
        let etag = generate_etag(data.as_bytes());

        Ok(ResourceBody {
            summary: ResourceSummary {
                id: event.uuid,
                uri: format!("{}{ICS_SUFFIX}", event.uuid),
                last_modified,
                etag: Some(etag),
                component: ComponentKind::Event,
            },
            data,
        })
    }
}
