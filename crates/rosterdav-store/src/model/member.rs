use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the organization.
///
/// `id` is the internal join key; `uuid` is the stable identity exposed in
/// resource URIs. Login handles are unique case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: i64,
    pub uuid: Uuid,
    /// Absent for members without portal access; such members never appear
    /// as principals but still appear in address books.
    pub login_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    /// Opaque hash consumed by the credential verifier.
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MemberRecord {
    /// Display name as shown to DAV clients: trimmed "first last".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
