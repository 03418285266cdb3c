use crate::geometry::Segment;
use crate::math::Point3;

/// Result of a closest point query.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult {
    /// The closest point on the curve.
    pub point: Point3,
    /// The normalized parameter value at the closest point.
    pub parameter: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on a bounded segment to a given point.
pub struct ClosestPointOnSegment<'a> {
    segment: &'a Segment,
    point: Point3,
}

impl<'a> ClosestPointOnSegment<'a> {
    /// Creates a new `ClosestPointOnSegment` query.
    #[must_use]
    pub fn new(segment: &'a Segment, point: Point3) -> Self {
        Self { segment, point }
    }

    /// Executes the query.
    ///
    /// The projection onto the supporting line is clamped to the segment ends.
    #[must_use]
    pub fn execute(&self) -> ClosestPointResult {
        let line = self.segment.line();
        let length = self.segment.length();

        // Project point onto line: t = dot(point - origin, dir)
        let t = line.project(&self.point).clamp(0.0, length);
        let closest = line.origin() + line.direction() * t;

        ClosestPointResult {
            point: closest,
            parameter: t / length,
            distance: (self.point - closest).norm(),
        }
    }
}
