//! Period detection over the generation history.

use super::{GenerationBuffers, Grid};
use crate::schema::DEFAULT_MAX_PERIOD;

/// Smallest `k` in `1..=max_period` such that the `k`-th history entry has the
/// same live/dead pattern as `current`.
///
/// `history` must be newest first (entry 1 is the previous generation) and
/// contain only generations that were actually computed.
pub fn detect_period<'a, I>(current: &Grid, history: I, max_period: usize) -> Option<usize>
where
    I: IntoIterator<Item = &'a Grid>,
{
    history
        .into_iter()
        .take(max_period)
        .position(|past| current.same_pattern(past))
        .map(|i| i + 1)
}

/// Detects repeating live/dead patterns with period up to `max_period`.
///
/// Needs a buffer pool of at least `max_period + 1` slots to see every
/// lookback; with fewer slots, longer periods simply go undetected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDetector {
    max_period: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PERIOD)
    }
}

impl CycleDetector {
    pub fn new(max_period: usize) -> Self {
        Self { max_period }
    }

    #[inline]
    pub fn max_period(&self) -> usize {
        self.max_period
    }

    /// Buffer pool size required to cover every period up to the bound.
    #[inline]
    pub fn required_capacity(&self) -> usize {
        self.max_period + 1
    }

    /// Period of the current generation in `buffers`, if it repeats a
    /// retained one.
    pub fn detect(&self, buffers: &GenerationBuffers) -> Option<usize> {
        detect_period(buffers.current(), buffers.history(), self.max_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{Coordinate, Rule};

    fn grid_from(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(row, column) in live {
            grid.set_live(Coordinate::new(row, column), 0).unwrap();
        }
        grid
    }

    /// Step until a period is detected or `limit` generations have run.
    /// Returns the generation of detection and the period.
    fn first_detection(initial: Grid, max_period: usize, limit: u64) -> Option<(u64, usize)> {
        let detector = CycleDetector::new(max_period);
        let mut buffers = GenerationBuffers::new(initial, detector.required_capacity()).unwrap();
        for generation in 0..=limit {
            if let Some(period) = detector.detect(&buffers) {
                return Some((generation, period));
            }
            buffers.advance(Rule::Aging);
        }
        None
    }

    #[test]
    fn test_block_is_period_one() {
        let block = grid_from(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(first_detection(block, 4, 10), Some((1, 1)));
    }

    #[test]
    fn test_blinker_is_period_two() {
        let blinker = grid_from(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        assert_eq!(first_detection(blinker, 4, 10), Some((2, 2)));
    }

    #[test]
    fn test_beacon_is_period_two() {
        let beacon = grid_from(
            6,
            6,
            &[
                (1, 1),
                (1, 2),
                (2, 1),
                (2, 2),
                (3, 3),
                (3, 4),
                (4, 3),
                (4, 4),
            ],
        );
        assert_eq!(first_detection(beacon, 4, 10), Some((2, 2)));
    }

    #[test]
    fn test_toad_is_period_two() {
        let toad = grid_from(6, 6, &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)]);
        assert_eq!(first_detection(toad, 4, 10), Some((2, 2)));
    }

    /// Pulsar (period 3) in its 13x13 phase, offset two cells from the
    /// corner of a 17x17 board so every phase stays clear of the edges.
    fn pulsar() -> Grid {
        let mut live = Vec::new();
        for line in [0, 5, 7, 12] {
            for span in [2, 3, 4, 8, 9, 10] {
                live.push((line + 2, span + 2));
                live.push((span + 2, line + 2));
            }
        }
        grid_from(17, 17, &live)
    }

    #[test]
    fn test_pulsar_is_period_three() {
        let initial = pulsar();
        assert_eq!(initial.population(), 48);
        assert_eq!(first_detection(initial, 3, 20), Some((3, 3)));
    }

    #[test]
    fn test_pulsar_needs_bound_of_three() {
        assert_eq!(first_detection(pulsar(), 2, 20), None);
    }

    #[test]
    fn test_glider_not_detected_while_moving() {
        let glider = grid_from(20, 20, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(first_detection(glider, 4, 12), None);
    }

    #[test]
    fn test_period_above_bound_not_detected() {
        // With a bound of 1 the blinker (period 2) is never reported.
        let blinker = grid_from(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        assert_eq!(first_detection(blinker, 1, 10), None);
    }

    #[test]
    fn test_empty_history_never_matches() {
        // An all-dead grid must not match unwritten (also all-dead) slots.
        let detector = CycleDetector::default();
        let buffers = GenerationBuffers::new(Grid::new(5, 5), detector.required_capacity()).unwrap();
        assert_eq!(detector.detect(&buffers), None);
    }

    #[test]
    fn test_dead_grid_repeats_after_one_step() {
        assert_eq!(first_detection(Grid::new(5, 5), 4, 10), Some((1, 1)));
    }

    #[test]
    fn test_isolated_cell_dies_then_repeats() {
        let single = grid_from(3, 3, &[(1, 1)]);
        assert_eq!(first_detection(single, 4, 10), Some((2, 1)));
    }

    #[test]
    fn test_detect_period_reports_smallest() {
        let a = grid_from(2, 2, &[(0, 0)]);
        let b = grid_from(2, 2, &[(1, 1)]);
        let history = [b.clone(), a.clone(), b, a.clone()];
        assert_eq!(detect_period(&a, &history, 4), Some(2));
        assert_eq!(detect_period(&a, &history, 1), None);
        assert_eq!(detect_period(&a, std::iter::empty(), 4), None);
    }

    #[test]
    fn test_detect_period_matches_oldest_slot() {
        let a = grid_from(2, 2, &[(0, 0)]);
        let b = grid_from(2, 2, &[(1, 1)]);
        let c = grid_from(2, 2, &[(0, 1)]);
        let history = [b, c, a.clone()];
        assert_eq!(detect_period(&a, &history, 3), Some(3));
        assert_eq!(detect_period(&a, &history, 2), None);

        // Through the pool: capacity max_period + 1 keeps the oldest lookback.
        let detector = CycleDetector::new(3);
        assert_eq!(detector.max_period(), 3);
        let mut buffers = GenerationBuffers::new(pulsar(), detector.required_capacity()).unwrap();
        for _ in 0..3 {
            buffers.advance(Rule::Aging);
        }
        assert_eq!(buffers.history().count(), detector.max_period());
        assert_eq!(detector.detect(&buffers), Some(3));
    }

    #[test]
    fn test_detect_period_ignores_age() {
        let young = grid_from(2, 2, &[(0, 0)]);
        let mut old = Grid::new(2, 2);
        old.set_live(Coordinate::new(0, 0), 9).unwrap();
        assert_eq!(detect_period(&young, [&old], 4), Some(1));
    }
}
