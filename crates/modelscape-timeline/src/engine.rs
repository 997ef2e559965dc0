//! The timeline layout pass.
//!
//! ```text
//! entities ──DateIndex──▶ (entity, epoch) ──stable sort──▶ chronological
//!     │                                                        │
//!     │            TrackScale(floor, max(epochs, ceiling))     │
//!     ▼                                                        ▼
//! era bands, year ticks                    markers ──▶ footprints ──LevelAllocator──▶ levels
//!                                                                         │
//!                                                              track height
//! ```

use modelscape_types::{Entity, LabelFootprint, LayoutResult, Marker, YearTick};

use crate::config::TimelineConfig;
use crate::date::{DateIndex, ParsedTimestamp, year_of_epoch, year_start};
use crate::era::{EraSegmenter, TrackScale};
use crate::levels::{Interval, LevelAllocator};

/// Computes [`LayoutResult`]s. Holds only read-only configuration, so one
/// engine can serve any number of passes.
#[derive(Clone, Debug)]
pub struct TimelineLayoutEngine {
    config: TimelineConfig,
    dates: DateIndex,
    eras: EraSegmenter,
}

impl Default for TimelineLayoutEngine {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl TimelineLayoutEngine {
    pub fn new(config: TimelineConfig) -> Self {
        let dates = DateIndex::new(config.fallback_year);
        let eras = EraSegmenter::new(dates, config.padding_percent);
        Self {
            config,
            dates,
            eras,
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn dates(&self) -> &DateIndex {
        &self.dates
    }

    /// Lay out `entities` on a track `viewport_width` units wide.
    ///
    /// Markers and labels come back in chronological order; entities sharing
    /// a date keep their input order.
    pub fn layout(&self, entities: &[Entity], viewport_width: f64) -> LayoutResult {
        let config = &self.config;
        let min_epoch = year_start(config.floor_year);
        let ceiling_epoch = year_start(config.ceiling_year);

        if entities.is_empty() {
            tracing::debug!("timeline layout with no entities");
            return LayoutResult {
                era_bands: self.eras.segment(&config.eras, min_epoch, ceiling_epoch),
                track_height: config.empty_track_height,
                ..Default::default()
            };
        }

        let mut timeline: Vec<(&Entity, ParsedTimestamp)> = entities
            .iter()
            .map(|entity| (entity, self.dates.timestamp(entity)))
            .collect();
        // Stable: same-date entities keep input order.
        timeline.sort_by_key(|(_, ts)| ts.epoch);

        let max_epoch = timeline
            .iter()
            .map(|(_, ts)| ts.epoch)
            .max()
            .map_or(ceiling_epoch, |latest| latest.max(ceiling_epoch));
        let scale = TrackScale::new(min_epoch, max_epoch, config.padding_percent);

        let mut allocator = LevelAllocator::new(config.max_levels, config.label_margin);
        let mut markers = Vec::with_capacity(timeline.len());
        let mut labels = Vec::with_capacity(timeline.len());

        for (entity, ts) in timeline {
            let percent = scale.clamped_percent(ts.epoch);
            let center_units = percent / 100.0 * viewport_width;
            let half_width_units = entity.name.chars().count() as f64 * config.char_width / 2.0;
            let level = allocator.assign(Interval::new(
                center_units - half_width_units,
                center_units + half_width_units,
            ));
            let stem_height = config.stem_base + level as f64 * config.level_height;

            markers.push(Marker {
                entity_id: ts.entity_id.clone(),
                percent,
                date_label: ts.raw,
            });
            labels.push(LabelFootprint {
                entity_id: ts.entity_id,
                text: entity.name.clone(),
                center_percent: percent,
                center_units,
                half_width_units,
                level,
                stem_height,
                label_bottom: config.label_base + stem_height,
            });
        }

        let max_level = labels.iter().map(|l| l.level).max().unwrap_or(0);
        let track_height =
            config.base_height + (max_level + 1) as f64 * config.level_height + config.track_margin;

        tracing::debug!(
            entities = markers.len(),
            levels = allocator.levels_used(),
            track_height,
            "timeline layout complete"
        );

        LayoutResult {
            markers,
            labels,
            era_bands: self.eras.segment(&config.eras, min_epoch, max_epoch),
            year_ticks: self.year_ticks(&scale),
            track_height,
        }
    }

    /// One tick per January 1 from the floor year through the year of the
    /// range end, keeping those inside the padded track.
    fn year_ticks(&self, scale: &TrackScale) -> Vec<YearTick> {
        (self.config.floor_year..=year_of_epoch(scale.max_epoch()))
            .filter_map(|year| {
                let percent = scale.percent(year_start(year));
                scale.contains(percent).then_some(YearTick { percent, year })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelscape_types::EntityId;

    fn engine() -> TimelineLayoutEngine {
        TimelineLayoutEngine::default()
    }

    fn ids(result: &LayoutResult) -> Vec<&str> {
        result.markers.iter().map(|m| m.entity_id.as_str()).collect()
    }

    #[test]
    fn empty_input() {
        let result = engine().layout(&[], 1200.0);
        assert!(result.markers.is_empty());
        assert!(result.labels.is_empty());
        assert!(result.year_ticks.is_empty());
        assert_eq!(result.track_height, 60.0);
        // Bands span the fixed floor..ceiling range.
        assert_eq!(result.era_bands.len(), 4);
        assert_eq!(result.era_bands[0].start_percent, 3.0);
        assert_eq!(result.era_bands[3].end_percent, 97.0);
    }

    #[test]
    fn single_entity_sits_on_level_zero() {
        let entities = vec![Entity::new("1", "RT-1", "Dec 2022")];
        let result = engine().layout(&entities, 1200.0);
        assert_eq!(result.markers.len(), 1);
        assert_eq!(result.labels[0].level, 0);
        let expected = TrackScale::new(year_start(2022), year_start(2026), 3.0)
            .percent(engine().dates().parse("Dec 2022"));
        assert_eq!(result.markers[0].percent, expected);
        assert_eq!(result.markers[0].date_label, "Dec 2022");
        assert_eq!(result.track_height, 60.0 + 22.0 + 40.0);
    }

    #[test]
    fn markers_follow_chronology_with_stable_ties() {
        let entities = vec![
            Entity::new("a", "Late", "Mar 2025"),
            Entity::new("b", "Tie one", "Jun 2023"),
            Entity::new("c", "Early", "Jan 2022"),
            Entity::new("d", "Tie two", "Jun 2023"),
        ];
        let result = engine().layout(&entities, 1200.0);
        assert_eq!(ids(&result), vec!["c", "b", "d", "a"]);
        let percents: Vec<f64> = result.markers.iter().map(|m| m.percent).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn crowded_month_stacks_levels() {
        let entities: Vec<Entity> = (0..4)
            .map(|i| Entity::new(EntityId::from(i as i64), format!("Model {i}"), "Oct 2024"))
            .collect();
        let result = engine().layout(&entities, 1200.0);
        let levels: Vec<u32> = result.labels.iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 3]);
        assert_eq!(result.track_height, 60.0 + 4.0 * 22.0 + 40.0);
        assert_eq!(result.labels[2].stem_height, 15.0 + 2.0 * 22.0);
        assert_eq!(result.labels[2].label_bottom, 48.0 + 15.0 + 44.0);
    }

    #[test]
    fn undated_entities_clamp_to_left_edge() {
        let entities = vec![Entity::new("x", "Mystery", "TBD")];
        let result = engine().layout(&entities, 1200.0);
        // Fallback year 2020 precedes the 2022 floor.
        assert_eq!(result.markers[0].percent, 3.0);
        assert!((result.labels[0].center_units - 36.0).abs() < 1e-9);
    }

    #[test]
    fn late_entities_stretch_the_axis() {
        let entities = vec![Entity::new("1", "Future", "Jun 2027")];
        let result = engine().layout(&entities, 1200.0);
        assert_eq!(result.markers[0].percent, 97.0);
        let years: Vec<i32> = result.year_ticks.iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2022, 2023, 2024, 2025, 2026, 2027]);
    }

    #[test]
    fn year_ticks_inside_padding() {
        let entities = vec![Entity::new("1", "RT-2", "Jul 2023")];
        let result = engine().layout(&entities, 1200.0);
        let years: Vec<i32> = result.year_ticks.iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2022, 2023, 2024, 2025, 2026]);
        assert_eq!(result.year_ticks[0].percent, 3.0);
        assert_eq!(result.year_ticks[4].percent, 97.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let entities = vec![
            Entity::new("1", "OpenVLA", "Jun 2024"),
            Entity::new("2", "Octo", "May 2024"),
            Entity::new("3", "π0", "Oct 2024"),
        ];
        let a = serde_json::to_string(&engine().layout(&entities, 900.0)).unwrap();
        let b = serde_json::to_string(&engine().layout(&entities, 900.0)).unwrap();
        assert_eq!(a, b);
    }
}
