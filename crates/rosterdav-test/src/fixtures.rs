//! Fixture builders with stable, deterministic identities.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use rosterdav_store::model::{
    CalendarRecord, EventRecord, MemberRecord, ParticipantRecord, RoleRecord,
};

/// Deterministic UUID derived from a label, so tests can name identities.
#[must_use]
pub fn uuid_for(label: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, label.as_bytes())
}

/// An instant on 2024-06-01 at the given hour.
#[must_use]
pub fn instant(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
}

#[must_use]
pub fn member(id: i64, login: Option<&str>, first: &str, last: &str) -> MemberRecord {
    MemberRecord {
        id,
        uuid: uuid_for(&format!("member-{id}")),
        login_name: login.map(str::to_string),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: Some(format!("{}@example.org", first.to_lowercase())),
        password_hash: None,
        created_at: instant(8),
        updated_at: None,
    }
}

#[must_use]
pub fn role(id: i64, name: &str, event_attendance: bool) -> RoleRecord {
    RoleRecord {
        id,
        uuid: uuid_for(&format!("role-{id}")),
        name: name.to_string(),
        description: Some(format!("{name} description")),
        event_attendance,
    }
}

#[must_use]
pub fn calendar(id: i64, name: &str) -> CalendarRecord {
    CalendarRecord {
        id,
        uuid: uuid_for(&format!("calendar-{id}")),
        name: name.to_string(),
    }
}

#[must_use]
pub fn event(id: i64, calendar_name: &str, headline: &str) -> EventRecord {
    EventRecord {
        id,
        uuid: uuid_for(&format!("event-{id}")),
        calendar_name: calendar_name.to_string(),
        headline: headline.to_string(),
        description: None,
        location: None,
        all_day: false,
        begin: NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap(),
        participation_role_id: None,
        created_at: instant(8),
        updated_at: None,
    }
}

/// All-day event spanning the given days of 2024-12.
#[must_use]
pub fn all_day_event(id: i64, calendar_name: &str, first_day: u32, last_day: u32) -> EventRecord {
    EventRecord {
        all_day: true,
        begin: NaiveDate::from_ymd_opt(2024, 12, first_day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 12, last_day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        ..event(id, calendar_name, "All day")
    }
}

#[must_use]
pub fn participant(member: &MemberRecord, approval: &str, leader: bool) -> ParticipantRecord {
    ParticipantRecord {
        member_id: member.id,
        member_uuid: member.uuid,
        first_name: member.first_name.clone(),
        last_name: member.last_name.clone(),
        email: member.email.clone(),
        approval: approval.to_string(),
        leader,
        created_at: instant(8),
        updated_at: None,
    }
}
