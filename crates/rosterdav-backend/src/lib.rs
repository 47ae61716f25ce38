//! Storage backends that synthesize CalDAV/CardDAV resources from a
//! relational membership database.
//!
//! Nothing here persists DAV-native state: collections, resource identities,
//! change timestamps, and iCalendar/vCard bodies are recomputed from live
//! rows on every call. The protocol engine consumes the [`caldav`],
//! [`carddav`], and [`principal`] storage traits; the relational side is
//! reached only through the `rosterdav-store` traits.

pub mod auth;
pub mod caldav;
pub mod carddav;
pub mod changed;
pub mod error;
pub mod etag;
pub mod principal;
pub mod status;
pub mod types;
pub mod uri;
