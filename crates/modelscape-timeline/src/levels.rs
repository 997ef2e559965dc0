//! Greedy first-fit level assignment for label footprints.
//!
//! Labels arrive in position order. Each one takes the lowest level whose
//! occupied intervals it clears by `margin` on both sides. Only the first
//! `max_levels` levels are scanned; a label that fits none of them goes to
//! level `max_levels`, which is never checked and so always accepts.
//!
//! This is deterministic interval scheduling, not an optimal packing. It
//! can open more levels than strictly necessary; renderers depend on the
//! exact assignment staying stable.

/// A horizontal extent in viewport units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub left: f64,
    pub right: f64,
}

impl Interval {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Whether two intervals come within `margin` of each other.
    pub fn collides(&self, other: &Interval, margin: f64) -> bool {
        !(self.right < other.left - margin || self.left > other.right + margin)
    }
}

/// Occupied intervals per level for one layout pass.
#[derive(Debug)]
pub struct LevelAllocator {
    levels: Vec<Vec<Interval>>,
    max_levels: u32,
    margin: f64,
}

impl LevelAllocator {
    pub fn new(max_levels: u32, margin: f64) -> Self {
        Self {
            levels: Vec::new(),
            max_levels,
            margin,
        }
    }

    /// Assign a level to `interval` and record it there.
    pub fn assign(&mut self, interval: Interval) -> u32 {
        let level = (0..self.max_levels)
            .find(|&level| !self.collides_on(level, &interval))
            .unwrap_or(self.max_levels);

        let idx = level as usize;
        if self.levels.len() <= idx {
            self.levels.resize_with(idx + 1, Vec::new);
        }
        self.levels[idx].push(interval);
        level
    }

    fn collides_on(&self, level: u32, interval: &Interval) -> bool {
        self.levels
            .get(level as usize)
            .is_some_and(|occupied| occupied.iter().any(|o| interval.collides(o, self.margin)))
    }

    /// Number of levels holding at least one interval so far.
    pub fn levels_used(&self) -> usize {
        self.levels.iter().filter(|l| !l.is_empty()).count()
    }
}
