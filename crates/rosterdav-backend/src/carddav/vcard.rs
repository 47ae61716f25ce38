//! Contact card assembly and vCard text formatting.
//!
//! The card is a structured value; `render` owns the RFC 6350 encoding
//! (escaping, CRLF line endings, 75-octet folding).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use rosterdav_store::model::MemberRecord;

use crate::changed;

/// Maximum line length in octets (not characters) per RFC 6350.
const MAX_LINE_OCTETS: usize = 75;

/// Structured contact fields derived from a member's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub uid: Uuid,
    pub formatted_name: String,
    pub family_name: String,
    pub given_name: String,
    pub email: Option<String>,
    /// Last modification instant of the underlying row, rendered as `REV`.
    pub rev: DateTime<Utc>,
}

impl ContactCard {
    #[must_use]
    pub fn from_member(member: &MemberRecord) -> Self {
        Self {
            uid: member.uuid,
            formatted_name: member.display_name(),
            family_name: member.last_name.clone(),
            given_name: member.first_name.clone(),
            email: member.email.clone().filter(|e| !e.is_empty()),
            rev: changed::row_change(member.created_at, member.updated_at),
        }
    }

    /// Renders the card as vCard 4.0 text. Deterministic for a given card.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:4.0".to_string(),
            format!("UID:{}", self.uid),
            format!("FN:{}", escape_text(&self.formatted_name)),
            format!(
                "N:{};{};;;",
                escape_text(&self.family_name),
                escape_text(&self.given_name)
            ),
        ];
        if let Some(email) = &self.email {
            lines.push(format!("EMAIL:{}", escape_text(email)));
        }
        lines.push(format!("REV:{}", self.rev.format("%Y%m%dT%H%M%SZ")));
        lines.push("END:VCARD".to_string());

        let mut out = String::new();
        for line in &lines {
            out.push_str(&fold_line(line));
            out.push_str("\r\n");
        }
        out
    }
}

/// Escapes a TEXT value: backslash, comma, semicolon, and newlines.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Folds a line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting CRLF + space.
/// Folds at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;
    let mut first_segment = true;

    for c in line.chars() {
        let char_len = c.len_utf8();

        // Continuation lines carry a one-octet space prefix.
        let effective_max = if first_segment {
            MAX_LINE_OCTETS
        } else {
            MAX_LINE_OCTETS - 1
        };

        if current_len + char_len > effective_max {
            result.push_str("\r\n ");
            current_len = 1;
            first_segment = false;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}
