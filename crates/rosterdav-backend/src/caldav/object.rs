//! Calendar object body assembly.
//!
//! Events are built through the `icalendar` crate's structured setters; the
//! crate owns the textual encoding. Output is deterministic for a given set
//! of rows: `DTSTAMP` comes from the derived change time, never from the
//! clock.

use chrono::{DateTime, Days, Utc};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use rosterdav_core::util::text::strip_markup;
use rosterdav_store::model::{EventRecord, ParticipantRecord};

use crate::error::DavResult;
use crate::status::map_participation_status;

/// ## Summary
/// Renders a single-VEVENT iCalendar document for an event.
///
/// The occurrence shape follows the row: all-day events with equal begin/end
/// dates become a single-day occurrence (date-valued `DTSTART`, no `DTEND`),
/// all-day spans become multi-day occurrences (date-valued `DTEND` is
/// exclusive), and timed events become floating-time spans.
///
/// `participants` must be `Some` only when the requester holds view rights
/// on the participation role; each record becomes one `ATTENDEE`, and the
/// first leader-flagged record becomes the sole `ORGANIZER`.
///
/// ## Errors
/// Returns `UnmappableStatus` when a participant carries an unrecognized
/// attendance code. The resource fails as a whole; the attendee is not
/// silently dropped.
pub fn build_event_body(
    event: &EventRecord,
    last_modified: DateTime<Utc>,
    participants: Option<&[ParticipantRecord]>,
    fallback_email: &str,
) -> DavResult<String> {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uuid.to_string());
    ics_event.summary(&event.headline);

    if let Some(description) = &event.description {
        ics_event.description(&strip_markup(description));
    }
    if let Some(location) = &event.location {
        ics_event.location(location);
    }

    let stamp = last_modified.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &stamp);
    ics_event.add_property("LAST-MODIFIED", &stamp);

    add_occurrence(&mut ics_event, event);

    if let Some(participants) = participants {
        add_participants(&mut ics_event, participants, fallback_email)?;
    }

    let mut calendar = Calendar::new();
    calendar.push(ics_event.done());

    Ok(calendar.done().to_string())
}

fn add_occurrence(ics_event: &mut icalendar::Event, event: &EventRecord) {
    if event.all_day {
        let first_day = event.begin.date();
        let last_day = event.end.date();

        if first_day == last_day {
            add_date_property(ics_event, "DTSTART", first_day);
        } else {
            // Date-valued DTEND is exclusive: the day after the last day.
            let end_exclusive = last_day.checked_add_days(Days::new(1)).unwrap_or(last_day);
            add_date_property(ics_event, "DTSTART", first_day);
            add_date_property(ics_event, "DTEND", end_exclusive);
        }
    } else {
        // Floating local times, no zone designator.
        ics_event.add_property("DTSTART", event.begin.format("%Y%m%dT%H%M%S").to_string());
        ics_event.add_property("DTEND", event.end.format("%Y%m%dT%H%M%S").to_string());
    }
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: chrono::NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

fn add_participants(
    ics_event: &mut icalendar::Event,
    participants: &[ParticipantRecord],
    fallback_email: &str,
) -> DavResult<()> {
    let mut organizer_set = false;

    for participant in participants {
        let email = participant
            .email
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(fallback_email);
        let status = map_participation_status(&participant.approval)?;

        let mut attendee = Property::new("ATTENDEE", format!("mailto:{email}"));
        let display_name = participant.display_name();
        if !display_name.is_empty() {
            attendee.add_parameter("CN", &display_name);
        }
        attendee.add_parameter("PARTSTAT", status.as_str());
        ics_event.append_multi_property(attendee);

        // iCalendar permits a single organizer per event; the first leader
        // wins, later leader flags are ignored.
        if participant.leader && !organizer_set {
            ics_event.append_property(Property::new("ORGANIZER", format!("mailto:{email}")));
            organizer_set = true;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use uuid::Uuid;

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, day, hour, 0, 0).unwrap()
    }

    fn make_event(all_day: bool, begin: (u32, u32), end: (u32, u32)) -> EventRecord {
        EventRecord {
            id: 1,
            uuid: Uuid::parse_str("4fd64f9c-8cb2-4df1-a66b-7c8b3e9c2f11").unwrap(),
            calendar_name: "Holidays".to_string(),
            headline: "Winter break".to_string(),
            description: Some("<p>Office closed</p>".to_string()),
            location: Some("Clubhouse".to_string()),
            all_day,
            begin: NaiveDate::from_ymd_opt(2024, 12, begin.0)
                .unwrap()
                .and_hms_opt(begin.1, 0, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 12, end.0)
                .unwrap()
                .and_hms_opt(end.1, 0, 0)
                .unwrap(),
            participation_role_id: None,
            created_at: ts(1, 8),
            updated_at: None,
        }
    }

    fn make_participant(name: (&str, &str), approval: &str, leader: bool) -> ParticipantRecord {
        ParticipantRecord {
            member_id: 1,
            member_uuid: Uuid::new_v4(),
            first_name: name.0.to_string(),
            last_name: name.1.to_string(),
            email: Some(format!("{}@example.org", name.0.to_lowercase())),
            approval: approval.to_string(),
            leader,
            created_at: ts(1, 8),
            updated_at: None,
        }
    }

    #[test]
    fn single_day_occurrence_has_no_dtend() {
        let body =
            build_event_body(&make_event(true, (24, 0), (24, 0)), ts(1, 8), None, "x@y").unwrap();
        assert!(body.contains("DTSTART;VALUE=DATE:20241224"));
        assert!(!body.contains("DTEND"));
    }

    #[test]
    fn multi_day_occurrence_has_exclusive_dtend() {
        let body =
            build_event_body(&make_event(true, (24, 0), (26, 0)), ts(1, 8), None, "x@y").unwrap();
        assert!(body.contains("DTSTART;VALUE=DATE:20241224"));
        assert!(body.contains("DTEND;VALUE=DATE:20241227"));
    }

    #[test]
    fn timed_event_uses_floating_span() {
        let body =
            build_event_body(&make_event(false, (24, 9), (24, 11)), ts(1, 8), None, "x@y").unwrap();
        assert!(body.contains("DTSTART:20241224T090000"));
        assert!(body.contains("DTEND:20241224T110000"));
        assert!(!body.contains("DTSTART;VALUE=DATE"));
    }

    #[test]
    fn body_fields_and_determinism() {
        let event = make_event(true, (24, 0), (26, 0));
        let body = build_event_body(&event, ts(1, 8), None, "x@y").unwrap();
        assert!(body.contains("SUMMARY:Winter break"));
        assert!(body.contains("DESCRIPTION:Office closed"));
        assert!(body.contains("LOCATION:Clubhouse"));
        assert!(body.contains("UID:4fd64f9c-8cb2-4df1-a66b-7c8b3e9c2f11"));
        assert!(body.contains("DTSTAMP:20241201T080000Z"));
        assert!(body.contains("LAST-MODIFIED:20241201T080000Z"));

        let again = build_event_body(&event, ts(1, 8), None, "x@y").unwrap();
        assert_eq!(body, again);
    }

    #[test]
    fn attendees_render_with_partstat_and_fallback_email() {
        let participants = vec![
            make_participant(("Ada", "Lovelace"), "attending", false),
            ParticipantRecord {
                email: None,
                ..make_participant(("Grace", "Hopper"), "invited", false)
            },
        ];
        let body = build_event_body(
            &make_event(false, (24, 9), (24, 11)),
            ts(1, 8),
            Some(&participants),
            "unknown@example.com",
        )
        .unwrap();

        let attendee_count = body.lines().filter(|l| l.starts_with("ATTENDEE")).count();
        assert_eq!(attendee_count, 2, "body:\n{body}");
        assert!(body.contains("PARTSTAT=ACCEPTED"));
        assert!(body.contains("PARTSTAT=TENTATIVE"));
        assert!(body.contains(";CN="));
        assert!(body.contains("mailto:unknown@example.com"));
    }

    #[test]
    fn first_leader_becomes_sole_organizer() {
        let participants = vec![
            make_participant(("Ada", "Lovelace"), "attending", true),
            make_participant(("Grace", "Hopper"), "attending", true),
        ];
        let body = build_event_body(
            &make_event(false, (24, 9), (24, 11)),
            ts(1, 8),
            Some(&participants),
            "x@y",
        )
        .unwrap();

        let organizers: Vec<_> = body.lines().filter(|l| l.starts_with("ORGANIZER")).collect();
        assert_eq!(organizers.len(), 1, "body:\n{body}");
        assert!(organizers[0].contains("ada@example.org"));
    }

    #[test]
    fn no_leader_means_no_organizer() {
        let participants = vec![make_participant(("Ada", "Lovelace"), "attending", false)];
        let body = build_event_body(
            &make_event(false, (24, 9), (24, 11)),
            ts(1, 8),
            Some(&participants),
            "x@y",
        )
        .unwrap();
        assert!(!body.contains("ORGANIZER"));
    }

    #[test]
    fn unmappable_status_fails_the_whole_body() {
        let participants = vec![make_participant(("Ada", "Lovelace"), "unknown-xyz", false)];
        let result = build_event_body(
            &make_event(false, (24, 9), (24, 11)),
            ts(1, 8),
            Some(&participants),
            "x@y",
        );
        assert!(matches!(
            result,
            Err(crate::error::DavError::UnmappableStatus(_))
        ));
    }
}
