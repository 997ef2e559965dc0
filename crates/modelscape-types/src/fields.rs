//! Presentation helpers for free-form catalog fields.
//!
//! Spreadsheet cells arrive as loosely formatted strings. These helpers decide
//! whether a cell says anything, pretty-print large counts, and classify data
//! availability notes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Cell values that mean "no data".
const ABSENT: &[&str] = &["", "—", "N/A", "null"];

/// Whether a cell carries a value.
pub fn has_value(val: &str) -> bool {
    !ABSENT.contains(&val.trim())
}

/// Insert thousands separators into plain integer counts of 10,000 or more.
///
/// A trailing `+` ("920000+") is preserved. Anything that is not a bare
/// integer comes back unchanged.
pub fn format_number(val: &str) -> String {
    let (digits, suffix) = match val.strip_suffix('+') {
        Some(d) => (d, "+"),
        None => (val, ""),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return val.to_string();
    }
    let Ok(n) = digits.parse::<u128>() else {
        return val.to_string();
    };
    if n < 10_000 {
        return val.to_string();
    }

    let plain = n.to_string();
    let mut grouped = String::with_capacity(plain.len() + plain.len() / 3);
    for (i, ch) in plain.chars().enumerate() {
        if i > 0 && (plain.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(suffix);
    grouped
}

/// How openly a model's training data is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum AccessLevel {
    Open,
    Partial,
    Closed,
}

impl AccessLevel {
    /// Classify a free-text availability note.
    ///
    /// "partial" anywhere wins over "open"; notes mentioning neither are closed.
    pub fn classify(availability: &str) -> Self {
        let lower = availability.to_lowercase();
        if lower.contains("partial") {
            AccessLevel::Partial
        } else if lower.contains("open") {
            AccessLevel::Open
        } else {
            AccessLevel::Closed
        }
    }

    /// Parse from string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Open => "open",
            AccessLevel::Partial => "partial",
            AccessLevel::Closed => "closed",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Availability note split for display: a short pill label plus the full text
/// as a tooltip when the note had a parenthetical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLabel {
    pub short: String,
    pub full: Option<String>,
}

/// Split `"Open (weights only)"` into `short = "Open"`, `full = <whole note>`.
pub fn access_label(availability: &str) -> Option<AccessLabel> {
    if !has_value(availability) {
        return None;
    }

    if let Some(open) = availability.find('(') {
        let head = &availability[..open];
        let rest = &availability[open + 1..];
        let closed = rest.find(')');
        if !head.is_empty() && closed.is_some_and(|c| c > 0) {
            return Some(AccessLabel {
                short: head.trim().to_string(),
                full: Some(availability.to_string()),
            });
        }
    }

    Some(AccessLabel {
        short: availability.to_string(),
        full: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_markers() {
        assert!(!has_value(""));
        assert!(!has_value("  —  "));
        assert!(!has_value("N/A"));
        assert!(!has_value("null"));
        assert!(has_value("0"));
        assert!(has_value("n/a?"));
    }

    #[test]
    fn number_grouping() {
        assert_eq!(format_number("9999"), "9999");
        assert_eq!(format_number("10000"), "10,000");
        assert_eq!(format_number("920000+"), "920,000+");
        assert_eq!(format_number("1234567"), "1,234,567");
        assert_eq!(format_number("~1M"), "~1M");
        assert_eq!(format_number("12.5"), "12.5");
        assert_eq!(format_number("+"), "+");
    }

    #[test]
    fn access_classification() {
        assert_eq!(AccessLevel::classify("Open source"), AccessLevel::Open);
        assert_eq!(AccessLevel::classify("Partially open"), AccessLevel::Partial);
        assert_eq!(AccessLevel::classify("Proprietary"), AccessLevel::Closed);
        assert_eq!(AccessLevel::from_str("PARTIAL"), Some(AccessLevel::Partial));
    }

    #[test]
    fn access_label_splits_parenthetical() {
        let label = access_label("Open (weights + data)").unwrap();
        assert_eq!(label.short, "Open");
        assert_eq!(label.full.as_deref(), Some("Open (weights + data)"));

        let label = access_label("Closed").unwrap();
        assert_eq!(label.short, "Closed");
        assert_eq!(label.full, None);

        assert_eq!(access_label("—"), None);
        assert_eq!(access_label("(odd)").unwrap().full, None);
    }
}
