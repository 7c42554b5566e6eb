//! Hero representation in the superhero network

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a hero
///
/// Serializes as a plain integer, matching the `id` column of the
/// heroes CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(u64);

impl HeroId {
    /// Create a HeroId from a raw integer
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for HeroId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A hero record: one row of the heroes CSV file
///
/// `name` is not required to be unique; queries that look heroes up by
/// name resolve duplicates to the first match in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Unique identifier, immutable once assigned
    pub id: HeroId,
    /// Display name, used as a lookup key by queries
    pub name: String,
    /// Calendar date the hero was added (no time component)
    #[serde(with = "created_at_format")]
    pub created_at: NaiveDate,
}

impl Hero {
    /// Create a new hero record
    pub fn new(id: HeroId, name: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
        }
    }
}

/// Parse a `created_at` cell, normalizing datetime strings down to dates.
///
/// Accepts `YYYY-MM-DD` as well as `YYYY-MM-DDTHH:MM:SS` and
/// `YYYY-MM-DD HH:MM:SS` (with optional fractional seconds); the time
/// component is discarded.
pub(crate) fn parse_created_at(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(raw, format) {
            return Ok(datetime.date());
        }
    }
    Err(format!("invalid created_at date: '{raw}'"))
}

/// Serde adapter for the `created_at` column.
///
/// Writes `YYYY-MM-DD`; reads through [`parse_created_at`] so loads
/// tolerate datetime-formatted cells.
mod created_at_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_created_at(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_created_at("2024-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_datetime_normalizes_to_date() {
        let date = parse_created_at("2024-06-01T14:30:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let date = parse_created_at("2024-06-01 14:30:00.123").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_created_at("not-a-date").is_err());
        assert!(parse_created_at("").is_err());
    }

    #[test]
    fn test_hero_id_next() {
        assert_eq!(HeroId::new(7).next(), HeroId::new(8));
    }
}
