//! Roster-backed address-book storage.

use uuid::Uuid;

use rosterdav_core::constants::VCF_SUFFIX;
use rosterdav_core::types::{CollectionKind, ComponentKind};
use rosterdav_store::store::{MembershipStore, Visibility};

use crate::auth::RequestContext;
use crate::carddav::vcard::ContactCard;
use crate::carddav::AddressBookStorage;
use crate::changed;
use crate::error::{DavError, DavResult};
use crate::etag::generate_etag;
use crate::types::{CollectionInfo, ResourceBody, ResourceSummary};
use crate::uri;

/// Synthesizes address books from roles. Each visible, non-event role
/// becomes one read-only collection; each role member becomes one contact.
pub struct RosterAddressBookBackend<S, V> {
    store: S,
    visibility: V,
}

impl<S, V> RosterAddressBookBackend<S, V>
where
    S: MembershipStore,
    V: Visibility,
{
    pub fn new(store: S, visibility: V) -> Self {
        Self { store, visibility }
    }
}

impl<S, V> AddressBookStorage for RosterAddressBookBackend<S, V>
where
    S: MembershipStore,
    V: Visibility,
{
    #[tracing::instrument(skip(self, ctx), fields(member_id = ctx.member_id()))]
    fn list_collections(&self, ctx: &RequestContext) -> DavResult<Vec<CollectionInfo>> {
        let role_uuids = self.visibility.visible_address_books(ctx.member_id())?;

        let mut collections = Vec::with_capacity(role_uuids.len());
        for role_uuid in role_uuids {
            let Some(role) = self.store.find_role_by_uuid(role_uuid)? else {
                tracing::warn!(%role_uuid, "Visible role vanished during enumeration");
                continue;
            };
            // Event-attendance roles surface through the calendar backend
            // only.
            if role.event_attendance {
                continue;
            }

            collections.push(CollectionInfo {
                id: role.uuid,
                uri: role.uuid.to_string(),
                principal_uri: ctx.principal_uri().to_string(),
                kind: CollectionKind::AddressBook,
                display_name: Some(role.name),
                description: role.description,
                read_only: true,
                supported_components: vec![ComponentKind::Contact],
                order: None,
            });
        }

        tracing::debug!(count = collections.len(), "Listed addressbooks");
        Ok(collections)
    }

    #[tracing::instrument(skip(self, _ctx))]
    fn list_resources(
        &self,
        _ctx: &RequestContext,
        addressbook_id: Uuid,
    ) -> DavResult<Vec<ResourceSummary>> {
        let role = self
            .store
            .find_role_by_uuid(addressbook_id)?
            .ok_or_else(|| DavError::NotFound(format!("addressbook {addressbook_id}")))?;

        let members = self.store.list_members_of_role(role.id)?;

        let summaries = members
            .into_iter()
            .map(|member| ResourceSummary {
                id: member.uuid,
                uri: format!("{}{VCF_SUFFIX}", member.uuid),
                last_modified: changed::row_change(member.created_at, member.updated_at),
                etag: None,
                component: ComponentKind::Contact,
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = summaries.len(), "Listed cards");
        Ok(summaries)
    }

    #[tracing::instrument(skip(self, _ctx))]
    fn get_resource(
        &self,
        _ctx: &RequestContext,
        addressbook_id: Uuid,
        uri: &str,
    ) -> DavResult<ResourceBody> {
        let role = self
            .store
            .find_role_by_uuid(addressbook_id)?
            .ok_or_else(|| DavError::NotFound(format!("addressbook {addressbook_id}")))?;

        let member_uuid = uri::resource_identity(uri, VCF_SUFFIX)?;

        // Both checks are required: a dangling identity and a former member
        // must both come back NotFound, never a stale body.
        let member = self
            .store
            .find_member_by_uuid(member_uuid)?
            .ok_or_else(|| DavError::NotFound(format!("card {member_uuid}")))?;
        if !self.store.is_member_of_role(member.id, role.id)? {
            return Err(DavError::NotFound(format!("card {member_uuid}")));
        }

        let card = ContactCard::from_member(&member);
        let data = card.render();
        let etag = generate_etag(data.as_bytes());

        Ok(ResourceBody {
            summary: ResourceSummary {
                id: member.uuid,
                uri: format!("{}{VCF_SUFFIX}", member.uuid),
                last_modified: card.rev,
                etag: Some(etag),
                component: ComponentKind::Contact,
            },
            data,
        })
    }
}
