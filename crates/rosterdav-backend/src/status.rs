//! Attendance-code to participation-status mapping.

use crate::error::{DavError, DavResult};

/// Participation status of an attendee, as rendered into `PARTSTAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartStat {
    Accepted,
    Declined,
    Tentative,
}

impl PartStat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::Tentative => "TENTATIVE",
        }
    }
}

impl std::fmt::Display for PartStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Maps a stored attendance code to a participation status.
///
/// The recognized set is policy, not accident: members who have not answered
/// ("invited", "unknown") and soft answers ("tentative", "maybe") all render
/// as TENTATIVE.
///
/// ## Errors
/// Returns `UnmappableStatus` for any code outside the recognized set. A bad
/// code is a data integrity problem; it is never coerced to a guessed status.
pub fn map_participation_status(code: &str) -> DavResult<PartStat> {
    match code {
        "attending" => Ok(PartStat::Accepted),
        "declined" => Ok(PartStat::Declined),
        "invited" | "tentative" | "maybe" | "unknown" => Ok(PartStat::Tentative),
        other => Err(DavError::UnmappableStatus(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_codes_map_to_exactly_one_status() {
        assert_eq!(
            map_participation_status("attending").unwrap(),
            PartStat::Accepted
        );
        assert_eq!(
            map_participation_status("declined").unwrap(),
            PartStat::Declined
        );
        for code in ["invited", "tentative", "maybe", "unknown"] {
            assert_eq!(
                map_participation_status(code).unwrap(),
                PartStat::Tentative,
                "code {code}"
            );
        }
    }

    #[test]
    fn unrecognized_code_is_an_error() {
        let err = map_participation_status("unknown-xyz").unwrap_err();
        assert!(matches!(err, DavError::UnmappableStatus(code) if code == "unknown-xyz"));
    }

    #[test]
    fn empty_code_is_an_error() {
        assert!(map_participation_status("").is_err());
    }

    #[test]
    fn matching_is_exact() {
        assert!(map_participation_status("Attending").is_err());
        assert!(map_participation_status(" attending").is_err());
    }

    #[test]
    fn partstat_renders_upper_case() {
        assert_eq!(PartStat::Accepted.as_str(), "ACCEPTED");
        assert_eq!(PartStat::Tentative.to_string(), "TENTATIVE");
    }
}
