//! Epoch → track percent mapping and era band resolution.

use modelscape_types::{EraBand, EraSegment};

use crate::date::DateIndex;

/// Linear map from epoch milliseconds onto `[pad, 100 - pad]` percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackScale {
    min_epoch: i64,
    max_epoch: i64,
    pad: f64,
}

impl TrackScale {
    pub fn new(min_epoch: i64, max_epoch: i64, pad: f64) -> Self {
        Self {
            min_epoch,
            max_epoch,
            pad,
        }
    }

    pub fn min_epoch(&self) -> i64 {
        self.min_epoch
    }

    pub fn max_epoch(&self) -> i64 {
        self.max_epoch
    }

    /// Denominator of the mapping; a zero-width range maps everything to `pad`.
    fn span(&self) -> f64 {
        match self.max_epoch.saturating_sub(self.min_epoch) {
            0 => 1.0,
            _ => self.max_epoch as f64 - self.min_epoch as f64,
        }
    }

    /// Unclamped percent; epochs outside the range land outside the padding.
    pub fn percent(&self, epoch: i64) -> f64 {
        let offset = epoch as f64 - self.min_epoch as f64;
        self.pad + (offset / self.span()) * (100.0 - self.pad * 2.0)
    }

    /// Percent clamped into `[pad, 100 - pad]`.
    pub fn clamped_percent(&self, epoch: i64) -> f64 {
        self.percent(epoch).clamp(self.pad, 100.0 - self.pad)
    }

    /// Whether a percent lies inside the padded track.
    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.pad && percent <= 100.0 - self.pad
    }
}

/// Resolves configured eras into bands on the track.
#[derive(Clone, Copy, Debug, Default)]
pub struct EraSegmenter {
    dates: DateIndex,
    pad: f64,
}

impl EraSegmenter {
    pub fn new(dates: DateIndex, pad: f64) -> Self {
        Self { dates, pad }
    }

    /// Map each era onto the track. Open bounds take the range ends; bands
    /// are not clamped.
    pub fn segment(&self, eras: &[EraSegment], min_epoch: i64, max_epoch: i64) -> Vec<EraBand> {
        let scale = TrackScale::new(min_epoch, max_epoch, self.pad);
        eras.iter()
            .map(|era| {
                let start = era.start.as_deref().map_or(min_epoch, |d| self.dates.parse(d));
                let end = era.end.as_deref().map_or(max_epoch, |d| self.dates.parse(d));
                EraBand {
                    start_percent: scale.percent(start),
                    end_percent: scale.percent(end),
                    color: era.color.clone(),
                    label: era.label.clone(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::year_start;

    #[test]
    fn linear_mapping_hits_padding_edges() {
        let scale = TrackScale::new(year_start(2022), year_start(2026), 3.0);
        assert_eq!(scale.percent(year_start(2022)), 3.0);
        assert_eq!(scale.percent(year_start(2026)), 97.0);
        let mid = scale.percent(year_start(2024));
        assert!((mid - 50.0).abs() < 0.1, "{mid}");
    }

    #[test]
    fn degenerate_range_collapses_to_pad() {
        let epoch = year_start(2024);
        let scale = TrackScale::new(epoch, epoch, 3.0);
        assert_eq!(scale.percent(epoch), 3.0);
        assert!(scale.percent(epoch + 1).is_finite());
    }

    #[test]
    fn extreme_epochs_do_not_overflow() {
        let scale = TrackScale::new(i64::MIN, i64::MAX, 3.0);
        assert_eq!(scale.percent(i64::MIN), 3.0);
        assert_eq!(scale.percent(i64::MAX), 97.0);
        assert!((scale.percent(0) - 50.0).abs() < 1e-9);

        let segmenter = EraSegmenter::new(DateIndex::default(), 3.0);
        let eras = vec![EraSegment::new(None, None, "gray", None)];
        let bands = segmenter.segment(&eras, i64::MIN, i64::MAX);
        assert_eq!(bands[0].start_percent, 3.0);
        assert_eq!(bands[0].end_percent, 97.0);
    }

    #[test]
    fn clamping() {
        let scale = TrackScale::new(year_start(2022), year_start(2026), 3.0);
        assert!(scale.percent(year_start(2020)) < 3.0);
        assert_eq!(scale.clamped_percent(year_start(2020)), 3.0);
        assert!(!scale.contains(2.99));
        assert!(scale.contains(97.0));
    }

    #[test]
    fn open_bounds_extend_to_range() {
        let segmenter = EraSegmenter::new(DateIndex::default(), 3.0);
        let eras = vec![
            EraSegment::new(None, Some("Jan 2024"), "gray", None),
            EraSegment::new(Some("Jan 2024"), None, "#22c55e", Some("VLA Era")),
        ];
        let bands = segmenter.segment(&eras, year_start(2022), year_start(2026));
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].start_percent, 3.0);
        assert_eq!(bands[0].end_percent, bands[1].start_percent);
        assert_eq!(bands[1].end_percent, 97.0);
        assert_eq!(bands[1].label.as_deref(), Some("VLA Era"));
        assert!(bands[1].width_percent() > 0.0);
    }
}
