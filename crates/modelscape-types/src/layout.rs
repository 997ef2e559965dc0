//! Layout descriptor types.
//!
//! Horizontal positions are percentages of the track width, inset by the
//! configured padding. Label footprints additionally carry their extent in
//! viewport units, the space collision resolution works in.

use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// A named date range, authored as static configuration.
///
/// `None` bounds extend to the data minimum / maximum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraSegment {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    /// Opaque paint token (CSS color, theme variable, ...).
    pub color: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl EraSegment {
    pub fn new(start: Option<&str>, end: Option<&str>, color: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            color: color.into(),
            label: label.map(str::to_string),
        }
    }
}

/// An era resolved onto the track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EraBand {
    pub start_percent: f64,
    pub end_percent: f64,
    pub color: String,
    pub label: Option<String>,
}

impl EraBand {
    pub fn width_percent(&self) -> f64 {
        self.end_percent - self.start_percent
    }
}

/// A point marker for one entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub entity_id: EntityId,
    pub percent: f64,
    /// Raw date, for the renderer's hover popup.
    pub date_label: String,
}

/// A label's rectangular footprint and its assigned level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelFootprint {
    pub entity_id: EntityId,
    pub text: String,
    pub center_percent: f64,
    /// Center in viewport units.
    pub center_units: f64,
    pub half_width_units: f64,
    /// Vertical level, 0 = nearest the axis.
    pub level: u32,
    /// Length of the stem joining marker and label.
    pub stem_height: f64,
    /// Offset of the label's bottom edge from the track bottom.
    pub label_bottom: f64,
}

impl LabelFootprint {
    pub fn left_units(&self) -> f64 {
        self.center_units - self.half_width_units
    }

    pub fn right_units(&self) -> f64 {
        self.center_units + self.half_width_units
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearTick {
    pub percent: f64,
    pub year: i32,
}

/// Everything a renderer needs to paint the timeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Markers in chronological order.
    pub markers: Vec<Marker>,
    /// Labels, parallel to `markers`.
    pub labels: Vec<LabelFootprint>,
    pub era_bands: Vec<EraBand>,
    pub year_ticks: Vec<YearTick>,
    /// Minimum track height that fits every label level.
    pub track_height: f64,
}

impl LayoutResult {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Highest level assigned to any label.
    pub fn max_level(&self) -> Option<u32> {
        self.labels.iter().map(|l| l.level).max()
    }

    /// Labels assigned to one level, in position order.
    pub fn labels_on_level(&self, level: u32) -> impl Iterator<Item = &LabelFootprint> {
        self.labels.iter().filter(move |l| l.level == level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_segment_from_ron_with_open_bounds() {
        let era: EraSegment = ron::from_str(r##"(end: Some("Apr 2022"), color: "#e5e7eb")"##).unwrap();
        assert_eq!(era.start, None);
        assert_eq!(era.end.as_deref(), Some("Apr 2022"));
        assert_eq!(era.label, None);
    }

    #[test]
    fn footprint_extent() {
        let label = LabelFootprint {
            entity_id: EntityId::new("1"),
            text: "RT-1".into(),
            center_percent: 50.0,
            center_units: 600.0,
            half_width_units: 14.0,
            level: 0,
            stem_height: 15.0,
            label_bottom: 63.0,
        };
        assert_eq!(label.left_units(), 586.0);
        assert_eq!(label.right_units(), 614.0);
    }

    #[test]
    fn empty_result_has_no_levels() {
        let result = LayoutResult::default();
        assert!(result.is_empty());
        assert_eq!(result.max_level(), None);
    }
}
