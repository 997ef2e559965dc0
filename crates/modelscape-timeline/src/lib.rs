//! Chronological timeline layout for modelscape.
//!
//! Places one marker per entity along a horizontal track and stacks the
//! labels on vertical levels so none overlap. The output is a
//! [`LayoutResult`](modelscape_types::LayoutResult): positions and levels
//! only, painting is left to the renderer.
//!
//! # Pipeline
//!
//! - [`DateIndex`] parses `"Mon Year"` dates to epoch milliseconds, falling
//!   back instead of failing.
//! - [`TrackScale`] maps epochs linearly onto `[pad, 100 - pad]` percent;
//!   [`EraSegmenter`] uses it to resolve configured eras into bands.
//! - [`TimelineLayoutEngine`] sorts, positions, and hands label footprints to
//!   the [`LevelAllocator`] (greedy first fit).
//!
//! # Configuration
//!
//! Constants and eras come from [`TimelineConfig`], loadable from RON.
//! The defaults reproduce the shipped timeline: a 2022 floor, a 2026
//! ceiling, and the LLM / VLA / VAM eras.

pub mod config;
pub mod date;
pub mod engine;
pub mod era;
pub mod levels;
pub mod stats;

pub use config::{ConfigError, TimelineConfig, default_eras, is_positive};
pub use date::{DateIndex, Month, ParsedTimestamp};
pub use engine::TimelineLayoutEngine;
pub use era::{EraSegmenter, TrackScale};
pub use levels::{Interval, LevelAllocator};
pub use stats::{CatalogStats, distinct_categories, distinct_orgs};

/// Viewport width, in label units, the shipped renderer lays out against.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1200.0;
