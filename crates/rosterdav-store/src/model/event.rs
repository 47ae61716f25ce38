use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event row.
///
/// Begin/end are stored as local wall-clock times without a zone; they are
/// rendered as floating times (timed events) or bare dates (all-day events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub uuid: Uuid,
    /// Name of the calendar (category) the event belongs to.
    pub calendar_name: String,
    pub headline: String,
    /// May contain editor markup; stripped before leaving the adapter.
    pub description: Option<String>,
    pub location: Option<String>,
    pub all_day: bool,
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Present when the event tracks participation through a role.
    pub participation_role_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
