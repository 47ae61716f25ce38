//! Shapes handed to the protocol engine.
//!
//! These mirror what DAV property rendering needs verbatim: display name,
//! read-only flag, supported component set, ordering hint. None of them are
//! persisted; every value is derived per request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rosterdav_core::types::{CollectionKind, ComponentKind};

/// A calendar or address-book collection visible to a principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Stable identity: the underlying role or calendar UUID.
    pub id: Uuid,
    /// Base URI segment of the collection; equals the stable identity.
    pub uri: String,
    /// Principal URI of the owner ("<prefix>/<login>").
    pub principal_uri: String,
    pub kind: CollectionKind,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Always true for synthesized collections; the engine maps this to a
    /// read-only ACL.
    pub read_only: bool,
    /// Component kinds the collection may contain (calendars: exactly
    /// `VEVENT`).
    pub supported_components: Vec<ComponentKind>,
    /// Client-side ordering hint, when the source defines one.
    pub order: Option<i64>,
}

/// Metadata for one resource inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSummary {
    /// Stable identity: the underlying event or member UUID.
    pub id: Uuid,
    /// Basename within the collection: `<uuid>.ics` / `<uuid>.vcf`.
    pub uri: String,
    pub last_modified: DateTime<Utc>,
    /// Quoted content hash; only present when the body has been built.
    pub etag: Option<String>,
    pub component: ComponentKind,
}

/// A fully materialized resource: summary metadata plus the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBody {
    pub summary: ResourceSummary,
    /// iCalendar or vCard text. Recomputing it from the same rows yields the
    /// same bytes.
    pub data: String,
}

/// A principal record exposed to the protocol engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalInfo {
    pub id: Uuid,
    /// "<prefix>/<login>".
    pub uri: String,
    pub display_name: String,
    pub email: Option<String>,
}

/// Incremental changes for a collection since a sync token.
///
/// The adapter never produces one; [`Ok(None)`] from `changes_since` tells
/// the engine to fall back to full re-enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionChanges {
    pub sync_token: String,
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
}
