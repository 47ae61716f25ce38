//! Address-book backend behavior against the in-memory store.

use rosterdav_backend::auth::RequestContext;
use rosterdav_backend::carddav::{AddressBookStorage, RosterAddressBookBackend};
use rosterdav_backend::error::DavError;
use rosterdav_core::types::{CollectionKind, ComponentKind};
use rosterdav_store::model::MemberRecord;
use rosterdav_test::fixtures;
use rosterdav_test::memory::{MemoryStore, MemoryVisibility};

struct World {
    store: MemoryStore,
    visibility: MemoryVisibility,
    ada: MemberRecord,
}

/// Ada can view the "Choir" role (id 20); Bob and Carol are members.
fn world() -> World {
    let mut store = MemoryStore::default();
    let mut visibility = MemoryVisibility::default();

    let ada = fixtures::member(1, Some("ada"), "Ada", "Lovelace");
    let bob = fixtures::member(2, None, "Bob", "Builder");
    let carol = fixtures::member(3, None, "Carol", "Danvers");
    store.members.push(ada.clone());
    store.members.push(bob.clone());
    store.members.push(carol.clone());

    store.roles.push(fixtures::role(20, "Choir", false));
    store.join(bob.id, 20);
    store.join(carol.id, 20);

    visibility.grant_address_book(ada.id, fixtures::uuid_for("role-20"));

    World {
        store,
        visibility,
        ada,
    }
}

fn backend(world: &World) -> RosterAddressBookBackend<MemoryStore, MemoryVisibility> {
    RosterAddressBookBackend::new(world.store.clone(), world.visibility.clone())
}

fn ctx(world: &World) -> RequestContext {
    RequestContext::new(world.ada.clone(), "principals").unwrap()
}

#[test]
fn collections_carry_the_engine_facing_shape() {
    let world = world();
    let collections = backend(&world).list_collections(&ctx(&world)).unwrap();

    assert_eq!(collections.len(), 1);
    let choir = &collections[0];
    assert_eq!(choir.id, fixtures::uuid_for("role-20"));
    assert_eq!(choir.uri, choir.id.to_string());
    assert_eq!(choir.principal_uri, "principals/ada");
    assert_eq!(choir.kind, CollectionKind::AddressBook);
    assert_eq!(choir.display_name.as_deref(), Some("Choir"));
    assert_eq!(choir.description.as_deref(), Some("Choir description"));
    assert!(choir.read_only);
    assert_eq!(choir.supported_components, vec![ComponentKind::Contact]);
}

#[test]
fn event_attendance_roles_are_never_address_books() {
    let mut world = world();
    world.store.roles.push(fixtures::role(30, "Party crew", true));
    world
        .visibility
        .grant_address_book(world.ada.id, fixtures::uuid_for("role-30"));

    let collections = backend(&world).list_collections(&ctx(&world)).unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].display_name.as_deref(), Some("Choir"));
}

#[test]
fn every_listed_card_is_fetchable() {
    let world = world();
    let backend = backend(&world);
    let ctx = ctx(&world);
    let book_id = fixtures::uuid_for("role-20");

    let summaries = backend.list_resources(&ctx, book_id).unwrap();
    assert_eq!(summaries.len(), 2);

    for summary in &summaries {
        assert_eq!(summary.component, ComponentKind::Contact);
        assert!(summary.uri.ends_with(".vcf"));
        let body = backend.get_resource(&ctx, book_id, &summary.uri).unwrap();
        assert_eq!(body.summary.id, summary.id);
        assert_eq!(body.summary.uri, summary.uri);
        assert_eq!(body.summary.last_modified, summary.last_modified);
    }
}

#[test]
fn card_body_is_built_from_profile_fields() {
    let world = world();
    let uri = format!("{}.vcf", fixtures::uuid_for("member-2"));
    let body = backend(&world)
        .get_resource(&ctx(&world), fixtures::uuid_for("role-20"), &uri)
        .unwrap();

    assert!(body.data.starts_with("BEGIN:VCARD"));
    assert!(body.data.contains("FN:Bob Builder"));
    assert!(body.data.contains("N:Builder;Bob;;;"));
    assert!(body.data.contains("EMAIL:bob@example.org"));
    let etag = body.summary.etag.as_deref().unwrap();
    assert!(etag.starts_with('"') && etag.ends_with('"'));
}

#[test_log::test]
fn former_member_is_unfetchable_even_though_they_exist() {
    let mut world = world();
    // Carol exists globally but no longer holds the role.
    world.store.memberships.remove(&(3, 20));

    let backend = backend(&world);
    let ctx = ctx(&world);
    let book_id = fixtures::uuid_for("role-20");

    let uri = format!("{}.vcf", fixtures::uuid_for("member-3"));
    assert!(matches!(
        backend.get_resource(&ctx, book_id, &uri),
        Err(DavError::NotFound(_))
    ));

    // And the enumeration agrees.
    let summaries = backend.list_resources(&ctx, book_id).unwrap();
    assert!(summaries.iter().all(|s| s.id != fixtures::uuid_for("member-3")));
}

#[test]
fn dangling_identity_is_not_found() {
    let world = world();
    let uri = format!("{}.vcf", fixtures::uuid_for("member-999"));
    assert!(matches!(
        backend(&world).get_resource(&ctx(&world), fixtures::uuid_for("role-20"), &uri),
        Err(DavError::NotFound(_))
    ));
}

#[test]
fn batch_fetch_skips_missing_cards() {
    let world = world();
    let backend = backend(&world);
    let ctx = ctx(&world);
    let book_id = fixtures::uuid_for("role-20");

    let present = format!("{}.vcf", fixtures::uuid_for("member-2"));
    let absent = format!("{}.vcf", fixtures::uuid_for("member-999"));
    let bodies = backend
        .get_resources(&ctx, book_id, &[present.as_str(), absent.as_str()])
        .unwrap();

    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].summary.uri, present);
}

#[test]
fn unknown_address_book_is_not_found() {
    let world = world();
    assert!(matches!(
        backend(&world).list_resources(&ctx(&world), fixtures::uuid_for("role-99")),
        Err(DavError::NotFound(_))
    ));
}

#[test]
fn mutating_operations_are_not_supported() {
    let world = world();
    let backend = backend(&world);
    let ctx = ctx(&world);
    let book_id = fixtures::uuid_for("role-20");

    assert!(matches!(
        backend.create_collection(&ctx, "new-book"),
        Err(DavError::NotSupported(_))
    ));
    assert!(matches!(
        backend.update_collection(&ctx, book_id),
        Err(DavError::NotSupported(_))
    ));
    assert!(matches!(
        backend.delete_collection(&ctx, book_id),
        Err(DavError::NotSupported(_))
    ));
    assert!(matches!(
        backend.create_resource(&ctx, book_id, "x.vcf", "BEGIN:VCARD"),
        Err(DavError::NotSupported(_))
    ));
    assert!(matches!(
        backend.update_resource(&ctx, book_id, "x.vcf", "BEGIN:VCARD"),
        Err(DavError::NotSupported(_))
    ));
    assert!(matches!(
        backend.delete_resource(&ctx, book_id, "x.vcf"),
        Err(DavError::NotSupported(_))
    ));
}
