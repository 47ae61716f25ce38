//! Change-time estimation for composite resources.
//!
//! No `modified` column exists for a synthesized resource, so its change time
//! is derived: the maximum of the primary row's timestamps and any secondary
//! change timestamps (per-participant membership changes). The result is
//! monotonic in its inputs and identical on the enumeration and single-fetch
//! paths.

use chrono::{DateTime, Utc};

use rosterdav_store::model::ParticipantRecord;

/// Change time of a single row: the update instant when present, never
/// earlier than creation.
#[must_use]
pub fn row_change(created: DateTime<Utc>, updated: Option<DateTime<Utc>>) -> DateTime<Utc> {
    updated.map_or(created, |u| created.max(u))
}

/// Maximum of an arbitrary collection of instants, `None` when empty.
pub fn latest_of<I>(times: I) -> Option<DateTime<Utc>>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    times.into_iter().max()
}

/// ## Summary
/// Effective change time of a composite resource: the maximum of the primary
/// row's creation/update instants and all secondary change instants. Equals
/// `created` when nothing else is supplied.
pub fn latest_change<I>(
    created: DateTime<Utc>,
    updated: Option<DateTime<Utc>>,
    secondary: I,
) -> DateTime<Utc>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let primary = row_change(created, updated);
    latest_of(secondary).map_or(primary, |s| primary.max(s))
}

/// Latest membership/approval change across an event's participation records.
#[must_use]
pub fn participation_change(participants: &[ParticipantRecord]) -> Option<DateTime<Utc>> {
    latest_of(
        participants
            .iter()
            .map(|p| row_change(p.created_at, p.updated_at)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    fn participant(created: DateTime<Utc>, updated: Option<DateTime<Utc>>) -> ParticipantRecord {
        ParticipantRecord {
            member_id: 1,
            member_uuid: Uuid::nil(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: None,
            approval: "attending".to_string(),
            leader: false,
            created_at: created,
            updated_at: updated,
        }
    }

    #[test]
    fn create_only_yields_create() {
        assert_eq!(latest_change(t(0), None, []), t(0));
    }

    #[test]
    fn create_and_update_yield_max() {
        assert_eq!(latest_change(t(0), Some(t(1)), []), t(1));
        // An update instant before creation never moves the result backwards.
        assert_eq!(latest_change(t(2), Some(t(1)), []), t(2));
    }

    #[test]
    fn secondary_changes_fold_in() {
        assert_eq!(latest_change(t(0), Some(t(1)), [t(2), t(3)]), t(3));
        assert_eq!(latest_change(t(5), Some(t(1)), [t(2), t(3)]), t(5));
    }

    #[test]
    fn latest_of_empty_is_none() {
        assert_eq!(latest_of([]), None);
    }

    #[test]
    fn participation_change_takes_row_maxima() {
        let parts = vec![
            participant(t(1), None),
            participant(t(0), Some(t(4))),
            participant(t(2), Some(t(3))),
        ];
        assert_eq!(participation_change(&parts), Some(t(4)));
        assert_eq!(participation_change(&[]), None);
    }
}
