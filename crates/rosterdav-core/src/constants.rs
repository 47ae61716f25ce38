/// Resource URI suffix constants shared across crates
pub const ICS_SUFFIX: &str = ".ics";
pub const VCF_SUFFIX: &str = ".vcf";

pub const PRINCIPAL_PREFIX_COMPONENT: &str = "principals";

/// Substituted when a participant record carries no email address.
pub const FALLBACK_ATTENDEE_EMAIL: &str = "unknown@example.com";
