use std::{fmt, str::FromStr};

/// An identifier for an emergency record.
///
/// Identifiers are derived from the record's creation time as
/// `"E" + (epoch seconds mod 10000)`. They are ephemeral: a record loaded
/// from disk receives a fresh identifier rather than the persisted one.
///
/// Two records created within the same ten-thousand-second window can
/// collide. Lookups match the first record with an equal identifier,
/// compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EmergencyId(String);

impl EmergencyId {
    /// Derive an identifier from a creation timestamp (seconds since epoch).
    #[must_use]
    pub fn from_timestamp(secs: i64) -> Self {
        Self(format!("E{}", secs.rem_euclid(10000)))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmergencyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmergencyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an empty identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("emergency id must not be empty")]
pub struct Error;

impl FromStr for EmergencyId {
    type Err = Error;

    /// Identifiers on the wire are free text; any non-empty token parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for EmergencyId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(42, "E42"; "small timestamp")]
    #[test_case(10000, "E0"; "exact window boundary")]
    #[test_case(1_699_999_999, "E9999"; "large timestamp")]
    #[test_case(1_700_000_042, "E42"; "wraps within window")]
    fn from_timestamp_derives_id(secs: i64, expected: &str) {
        assert_eq!(EmergencyId::from_timestamp(secs).as_str(), expected);
    }

    #[test]
    fn ids_collide_within_window() {
        let a = EmergencyId::from_timestamp(42);
        let b = EmergencyId::from_timestamp(10042);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_accepts_free_text() {
        let id: EmergencyId = "E42".parse().unwrap();
        assert_eq!(id.as_str(), "E42");

        let id: EmergencyId = "anything".parse().unwrap();
        assert_eq!(id.as_str(), "anything");
    }

    #[test]
    fn parse_rejects_empty() {
        let result = EmergencyId::from_str("");
        assert_eq!(result, Err(Error));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let upper: EmergencyId = "E42".parse().unwrap();
        let lower: EmergencyId = "e42".parse().unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn display_round_trips() {
        let id = EmergencyId::from_timestamp(123);
        let parsed: EmergencyId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
