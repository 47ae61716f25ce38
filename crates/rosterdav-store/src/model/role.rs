use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role (group) members can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Roles owned by the internal event category exist only to track event
    /// attendance; they surface through the calendar backend, never as
    /// address books.
    pub event_attendance: bool,
}
