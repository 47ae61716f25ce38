use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A participation record: one member's standing in an event's role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub member_id: i64,
    pub member_uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    /// Raw attendance code as stored ("attending", "declined", ...). Mapped
    /// to a protocol status by the backend; unrecognized codes are a data
    /// integrity error there, not here.
    pub approval: String,
    pub leader: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ParticipantRecord {
    /// Display name as shown to DAV clients: trimmed "first last".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
