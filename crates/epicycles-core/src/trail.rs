use crate::geometry::Point2D;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrailPoint {
    position: Point2D,
    phase: f64,
}

/// Pen history, trimmed to a window of replay phase.
///
/// Every push drops points recorded more than `window` radians of phase ago.
/// The newest point is always kept.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    window: f64,
}

impl Trail {
    pub fn new(window: f64) -> Self {
        Self {
            points: VecDeque::new(),
            window,
        }
    }

    pub fn push(&mut self, position: Point2D, phase: f64) {
        self.points.push_back(TrailPoint { position, phase });
        while self.points.len() > 1 {
            match self.points.front() {
                Some(oldest) if phase - oldest.phase > self.window => {
                    self.points.pop_front();
                }
                _ => break,
            }
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn positions(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.iter().map(|p| p.position)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn window(&self) -> f64 {
        self.window
    }

    /// Phase of the oldest retained point.
    pub fn oldest_phase(&self) -> Option<f64> {
        self.points.front().map(|p| p.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_phase_window() {
        let mut trail = Trail::new(1.0);
        for i in 0..50 {
            trail.push(Point2D::new(i as f64, 0.0), i as f64 * 0.25);
        }
        // newest is 12.25; 11.25 sits exactly one window back and is kept
        assert_eq!(trail.oldest_phase(), Some(11.25));
        assert_eq!(trail.len(), 5);
    }

    #[test]
    fn single_point_survives_large_jump() {
        let mut trail = Trail::new(1.0);
        trail.push(Point2D::ZERO, 0.0);
        trail.push(Point2D::ONE, 100.0);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.positions().next(), Some(Point2D::ONE));
    }
}
