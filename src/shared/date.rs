use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Request-side timestamp. Accepts RFC 3339 or a bare `YYYY-MM-DD`, the
/// latter read as midnight UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct InputDate(DateTime<Utc>);

impl TryFrom<String> for InputDate {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let raw = raw.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| Self(midnight.and_utc()))
            .ok_or_else(|| format!("invalid date '{}': expected RFC 3339 or YYYY-MM-DD", raw))
    }
}

impl From<InputDate> for DateTime<Utc> {
    fn from(date: InputDate) -> Self {
        date.0
    }
}
