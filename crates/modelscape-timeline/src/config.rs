//! RON-driven timeline configuration.
//!
//! All layout constants and the era table live here so a deployment can
//! retune the track without a rebuild. Every field has a default; a config
//! file only names what it changes:
//!
//! ```ron
//! (
//!     ceiling_year: 2027,
//!     eras: [
//!         (end: Some("Apr 2022"), color: "var(--gray-200)"),
//!         (start: Some("Apr 2022"), color: "#8b5cf6", label: Some("LLM Era")),
//!     ],
//! )
//! ```

use std::path::Path;

use modelscape_types::EraSegment;
use serde::{Deserialize, Serialize};

/// Errors loading or validating a [`TimelineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid timeline config: {0}")]
    Invalid(String),
}

/// Layout constants and era definitions. Read-only during a layout pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    /// Inset from each track edge, in percent.
    pub padding_percent: f64,
    /// Estimated label width per character, in viewport units.
    pub char_width: f64,
    /// Horizontal gap required between labels sharing a level.
    pub label_margin: f64,
    /// Levels scanned before a label overflows onto level `max_levels`.
    pub max_levels: u32,
    pub base_height: f64,
    pub level_height: f64,
    /// Extra room above the highest level.
    pub track_margin: f64,
    /// Track height when there is nothing to place.
    pub empty_track_height: f64,
    /// Stem length of a level-0 label.
    pub stem_base: f64,
    /// Distance from the track bottom to the top of the marker row.
    pub label_base: f64,
    /// The axis always starts at January 1 of this year.
    pub floor_year: i32,
    /// The axis always reaches at least January 1 of this year.
    pub ceiling_year: i32,
    /// Year substituted for unparsable dates.
    pub fallback_year: i32,
    pub eras: Vec<EraSegment>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            padding_percent: 3.0,
            char_width: 7.0,
            label_margin: 8.0,
            max_levels: 10,
            base_height: 60.0,
            level_height: 22.0,
            track_margin: 40.0,
            empty_track_height: 60.0,
            stem_base: 15.0,
            label_base: 48.0,
            floor_year: 2022,
            ceiling_year: 2026,
            fallback_year: 2020,
            eras: default_eras(),
        }
    }
}

/// The built-in robotics eras.
pub fn default_eras() -> Vec<EraSegment> {
    vec![
        EraSegment::new(None, Some("Apr 2022"), "var(--gray-200)", None),
        EraSegment::new(Some("Apr 2022"), Some("Jul 2023"), "#8b5cf6", Some("LLM Era")),
        EraSegment::new(Some("Jul 2023"), Some("Dec 2025"), "#22c55e", Some("VLA Era")),
        EraSegment::new(Some("Dec 2025"), None, "#f97316", Some("VAM Era")),
    ]
}

impl TimelineConfig {
    /// Parse and validate a RON document.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&source)?;
        tracing::debug!(path = %path.display(), eras = config.eras.len(), "loaded timeline config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..50.0).contains(&self.padding_percent) {
            return Err(ConfigError::Invalid(format!(
                "padding_percent must be in [0, 50), got {}",
                self.padding_percent
            )));
        }
        if !is_positive(self.char_width) || !is_positive(self.level_height) {
            return Err(ConfigError::Invalid(
                "char_width and level_height must be positive and finite".into(),
            ));
        }
        if !(self.label_margin.is_finite() && self.label_margin >= 0.0) {
            return Err(ConfigError::Invalid(
                "label_margin must be finite and not negative".into(),
            ));
        }
        let heights = [
            ("base_height", self.base_height),
            ("track_margin", self.track_margin),
            ("empty_track_height", self.empty_track_height),
            ("stem_base", self.stem_base),
            ("label_base", self.label_base),
        ];
        if let Some((name, value)) = heights.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")));
        }
        if !(1..=9999).contains(&self.floor_year) || !(1..=9999).contains(&self.ceiling_year) {
            return Err(ConfigError::Invalid("years must be within 1..=9999".into()));
        }
        if self.ceiling_year < self.floor_year {
            return Err(ConfigError::Invalid(format!(
                "ceiling_year {} precedes floor_year {}",
                self.ceiling_year, self.floor_year
            )));
        }
        Ok(())
    }
}

/// Finite and strictly greater than zero. NaN fails.
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
