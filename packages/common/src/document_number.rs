//! Date-scoped sequential document numbers.
//!
//! A number is `prefix + YYMMDD + NNN`, e.g. `SJ-250114007` for the seventh
//! service job created on 14 January 2025. The three-digit tail counts up
//! from `001` each day. Past `999` the tail falls back to the last three
//! digits of the Unix millisecond timestamp, which keeps the length fixed
//! but gives up strict ordering and uniqueness.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::DocumentKind;

/// Width of the zero-padded tail.
pub const SEQUENCE_WIDTH: usize = 3;
/// Largest sequence that still fits the tail.
pub const MAX_SEQUENCE: u16 = 999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentNumberError {
    #[error("document number '{0}' is shorter than its sequence tail")]
    TooShort(String),
    #[error("document number '{0}' does not end in {SEQUENCE_WIDTH} digits")]
    NonNumericTail(String),
}

/// Tail of a document number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Suffix {
    /// Per-day counter, 1..=999.
    Sequence(u16),
    /// `unix_millis % 1000`, used once the counter is exhausted.
    Fallback(u16),
}

impl Suffix {
    pub fn value(&self) -> u16 {
        match self {
            Self::Sequence(v) | Self::Fallback(v) => *v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNumber {
    kind: DocumentKind,
    date: NaiveDate,
    suffix: Suffix,
}

impl DocumentNumber {
    pub fn new(kind: DocumentKind, date: NaiveDate, suffix: Suffix) -> Self {
        Self { kind, date, suffix }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn suffix(&self) -> Suffix {
        self.suffix
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.suffix, Suffix::Fallback(_))
    }

    /// `prefix + YYMMDD`, shared by every number of `kind` issued on `date`.
    pub fn day_prefix(kind: DocumentKind, date: NaiveDate) -> String {
        format!("{}{}", kind.prefix(), date_part(date))
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:0width$}",
            self.kind.prefix(),
            date_part(self.date),
            self.suffix.value(),
            width = SEQUENCE_WIDTH
        )
    }
}

/// Encode a date as `YYMMDD`.
pub fn date_part(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// Parse the trailing sequence of a stored number.
pub fn trailing_sequence(number: &str) -> Result<u16, DocumentNumberError> {
    let start = number
        .len()
        .checked_sub(SEQUENCE_WIDTH)
        .ok_or_else(|| DocumentNumberError::TooShort(number.to_string()))?;
    // A cut inside a multi-byte character means the tail is not all digits.
    let tail = number
        .get(start..)
        .ok_or_else(|| DocumentNumberError::NonNumericTail(number.to_string()))?;

    if !tail.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DocumentNumberError::NonNumericTail(number.to_string()));
    }
    tail.parse()
        .map_err(|_| DocumentNumberError::NonNumericTail(number.to_string()))
}

/// Compute the number that follows `latest` on the local date of `now`.
///
/// `latest` is the greatest live number of `kind` already issued that day,
/// or `None` when the day has none yet.
pub fn next_number(
    kind: DocumentKind,
    now: DateTime<FixedOffset>,
    latest: Option<&str>,
) -> DocumentNumber {
    let date = now.date_naive();
    let Some(latest) = latest else {
        return DocumentNumber::new(kind, date, Suffix::Sequence(1));
    };

    let suffix = match trailing_sequence(latest) {
        Ok(seq) if seq < MAX_SEQUENCE => Suffix::Sequence(seq + 1),
        Ok(_) => Suffix::Fallback(millis_tail(now)),
        Err(e) => {
            warn!(error = %e, %kind, "Unreadable document number, using timestamp suffix");
            Suffix::Fallback(millis_tail(now))
        }
    };

    DocumentNumber::new(kind, date, suffix)
}

fn millis_tail(now: DateTime<FixedOffset>) -> u16 {
    now.timestamp_millis().rem_euclid(1000) as u16
}
