//! `"Mon Year"` date parsing onto a linear epoch scale.
//!
//! Release dates in the catalog are month-granular strings like `"Jul 2023"`.
//! [`DateIndex`] turns them into UTC milliseconds at the start of that month,
//! which interpolates linearly and is strictly monotonic in (year, month).
//!
//! Parsing is total. A bad month token reads as January, a bad or missing year
//! reads as the fallback year, so one broken cell can never abort a layout.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use modelscape_types::{Entity, EntityId};
use strum::EnumString;

/// Three-letter month tokens as they appear in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Parse a month token (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Zero-based month index.
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// A parsed entity date. Recomputed per layout pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedTimestamp {
    pub entity_id: EntityId,
    pub epoch: i64,
    pub raw: String,
}

/// Years chrono and the renderer can both represent sensibly.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parses `"Mon Year"` strings into epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateIndex {
    fallback_year: i32,
}

impl Default for DateIndex {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FALLBACK_YEAR)
    }
}

impl DateIndex {
    pub const DEFAULT_FALLBACK_YEAR: i32 = 2020;

    pub fn new(fallback_year: i32) -> Self {
        let fallback_year = if YEAR_RANGE.contains(&fallback_year) {
            fallback_year
        } else {
            Self::DEFAULT_FALLBACK_YEAR
        };
        Self { fallback_year }
    }

    pub fn fallback_year(&self) -> i32 {
        self.fallback_year
    }

    /// Epoch used when nothing in the date is usable: January of the fallback year.
    pub fn fallback_epoch(&self) -> i64 {
        year_start(self.fallback_year)
    }

    /// Parse a raw date. Never fails.
    pub fn parse(&self, raw: &str) -> i64 {
        let (month, year) = split_date(raw);
        let month = month.unwrap_or(Month::Jan);
        let year = year.unwrap_or(self.fallback_year);
        month_start(year, month).unwrap_or_else(|| self.fallback_epoch())
    }

    /// Parse an entity's date, noting when any part of it fell back.
    pub fn timestamp(&self, entity: &Entity) -> ParsedTimestamp {
        let (month, year) = split_date(&entity.date);
        if month.is_none() || year.is_none() {
            tracing::trace!(entity = %entity.id, raw = %entity.date, "date fell back");
        }
        ParsedTimestamp {
            entity_id: entity.id.clone(),
            epoch: self.parse(&entity.date),
            raw: entity.date.clone(),
        }
    }

    /// Just the year of a raw date, if one is present.
    ///
    /// Reads the second token, or the last four characters when the date is a
    /// single token.
    pub fn year_of(raw: &str) -> Option<i32> {
        let mut tokens = raw.split_whitespace();
        let first = tokens.next()?;
        let candidate = match tokens.next() {
            Some(second) => second,
            None => {
                let start = first.char_indices().rev().nth(3).map(|(i, _)| i).unwrap_or(0);
                &first[start..]
            }
        };
        leading_year(candidate)
    }
}

/// UTC milliseconds at the first instant of `year`.
pub fn year_start(year: i32) -> i64 {
    month_start(year, Month::Jan).unwrap_or(0)
}

/// UTC milliseconds at the first instant of the given month.
pub fn month_start(year: i32, month: Month) -> Option<i64> {
    let date = NaiveDate::from_ymd_opt(year, month.index() + 1, 1)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

/// Calendar year containing an epoch.
pub fn year_of_epoch(epoch: i64) -> i32 {
    DateTime::<Utc>::from_timestamp_millis(epoch)
        .map(|dt| dt.year())
        .unwrap_or(1970)
}

/// Split a raw date into its month and year, either of which may be unusable.
fn split_date(raw: &str) -> (Option<Month>, Option<i32>) {
    let mut tokens = raw.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (None, _) => (None, None),
        (Some(only), None) if only.starts_with(|c: char| c.is_ascii_digit()) => {
            (Some(Month::Jan), leading_year(only))
        }
        (Some(only), None) => (Month::from_str(only), None),
        (Some(month), Some(year)) => (Month::from_str(month), leading_year(year)),
    }
}

/// Leading decimal digits as a year, like a lenient integer parse.
fn leading_year(token: &str) -> Option<i32> {
    let end = token
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    token[..end].parse::<i32>().ok().filter(|y| YEAR_RANGE.contains(y))
}
