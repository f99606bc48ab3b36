use glam::DVec2;
use std::collections::VecDeque;

use crate::utils::{TRAIL_CAPACITY, TRAIL_MIN_SPACING};

/// Breadcrumb trail of the aircraft's ground track.
///
/// A point is only appended once the aircraft has moved more than
/// `min_spacing` units from the last sample. With a capacity set the
/// oldest point is evicted first.
#[derive(Debug, Clone)]
pub struct FlightPathTrail {
    points: VecDeque<DVec2>,
    min_spacing: f64,
    capacity: Option<usize>,
}

impl Default for FlightPathTrail {
    fn default() -> Self {
        Self::new(TRAIL_MIN_SPACING, Some(TRAIL_CAPACITY))
    }
}

impl FlightPathTrail {
    pub fn new(min_spacing: f64, capacity: Option<usize>) -> Self {
        Self {
            points: VecDeque::new(),
            min_spacing,
            capacity,
        }
    }

    /// Records `position` if it is far enough from the last sample.
    /// Returns whether a point was appended.
    pub fn record(&mut self, position: DVec2) -> bool {
        if let Some(last) = self.points.back() {
            if last.distance(position) <= self.min_spacing {
                return false;
            }
        }

        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return false;
            }
            while self.points.len() >= capacity {
                self.points.pop_front();
            }
        }

        self.points.push_back(position);
        true
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.points.back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_filter() {
        let mut trail = FlightPathTrail::new(5.0, None);
        assert!(trail.record(DVec2::ZERO));
        assert!(!trail.record(DVec2::new(3.0, 4.0))); // exactly 5 units away
        assert!(trail.record(DVec2::new(3.0, 4.1)));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut trail = FlightPathTrail::new(1.0, Some(3));
        for i in 0..5 {
            trail.record(DVec2::new(i as f64 * 10.0, 0.0));
        }
        let xs: Vec<f64> = trail.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_clear_empties() {
        let mut trail = FlightPathTrail::default();
        trail.record(DVec2::ZERO);
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.last(), None);
    }
}
