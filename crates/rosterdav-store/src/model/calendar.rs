use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event calendar (category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
}
