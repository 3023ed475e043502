use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Abierto",
            TicketStatus::InProgress => "En progreso",
            TicketStatus::Closed => "Cerrado",
        }
    }

    /// Exact, case-sensitive match against the display strings.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Abierto" => Some(TicketStatus::Open),
            "En progreso" => Some(TicketStatus::InProgress),
            "Cerrado" => Some(TicketStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TicketStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TicketStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        TicketStatus::from_str(&value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown ticket status '{value}', expected one of {}",
                TicketStatus::ALL
                    .iter()
                    .map(|status| format!("'{status}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(rename = "createdAt", with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        description: impl Into<String>,
        status: TicketStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status,
            created_at,
        }
    }

    pub fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
    }
}

/// `createdAt` as RFC 3339. Reading also accepts the shorter ISO-8601 forms
/// (no seconds, no time part); values without an offset are read as UTC.
mod timestamp {
    use chrono::NaiveDate;

    use super::*;

    const OFFSET_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%dT%H:%M%z",
    ];
    const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid createdAt timestamp '{value}'"))
        })
    }

    pub(super) fn parse(value: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Some(parsed) = OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(value, format).ok())
        {
            return Some(parsed.with_timezone(&Utc));
        }

        // A trailing `Z` carries no offset beyond UTC itself.
        let local = value
            .strip_suffix('Z')
            .or_else(|| value.strip_suffix('z'))
            .unwrap_or(value);
        if let Some(naive) = LOCAL_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
        {
            return Some(naive.and_utc());
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}
