//! Deadline parsing shared by the expiration filter and the deadline buckets.
//!
//! Deadlines are free-form strings typed by whoever posted the job, so parsing
//! never fails loudly: anything we can't read becomes [`ParsedDeadline::Unparseable`]
//! and each caller decides what that means for it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Calendar formats tried in order, after trimming.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%d %b, %Y",
    "%m/%d/%Y",
];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDeadline {
    Date(NaiveDate),
    Unparseable,
}

impl ParsedDeadline {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            ParsedDeadline::Date(date) => Some(*date),
            ParsedDeadline::Unparseable => None,
        }
    }

    /// The deadline as an instant: midnight UTC of the deadline date.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.date().map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }
}

pub fn parse_deadline(raw: &str) -> ParsedDeadline {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedDeadline::Unparseable;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return ParsedDeadline::Date(date_time.with_timezone(&Utc).date_naive());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return ParsedDeadline::Date(date_time.date());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return ParsedDeadline::Date(date);
        }
    }

    ParsedDeadline::Unparseable
}
