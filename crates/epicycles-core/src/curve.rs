use crate::geometry::Point2D;

/// Ordered, append-only list of surface points.
///
/// Consecutive points are never within the insertion gate of each other; the
/// only other mutations are [`PointSequence::clear`] and
/// [`PointSequence::close_loop`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<Point2D>,
}

impl PointSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `p` unless it is within `min_squared_distance` of the last point.
    ///
    /// Returns whether the point was stored.
    pub fn add_if_far_enough(&mut self, p: Point2D, min_squared_distance: f64) -> bool {
        if let Some(last) = self.points.last() {
            if last.distance_squared(p) <= min_squared_distance {
                return false;
            }
        }
        self.points.push(p);
        true
    }

    /// Perimeter of the sequence treated as a closed loop (last wraps to first).
    pub fn total_length(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        let mut prev = self.points[n - 1];
        let mut sum = 0.0;
        for &p in &self.points {
            sum += prev.distance(p);
            prev = p;
        }
        sum
    }

    /// Append a copy of the first point so a polyline draw closes visually.
    pub fn close_loop(&mut self) {
        if let Some(&first) = self.points.first() {
            self.points.push(first);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<Point2D> for PointSequence {
    /// Collects points verbatim, bypassing the insertion gate.
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
