use crate::error::Result;
use crate::framing::BoundaryFrame;
use crate::geometry::Segment;
use crate::operations::query::ClosestPointOnSegment;

/// Verticals bounding the stud bays, ordered along the wall: the start
/// boundary vertical, every stud, then the end boundary vertical.
#[must_use]
pub fn bay_verticals<'a>(boundary: &'a BoundaryFrame, studs: &'a [Segment]) -> Vec<&'a Segment> {
    let mut verticals = Vec::with_capacity(studs.len() + 2);
    verticals.push(&boundary.start_vertical);
    verticals.extend(studs);
    verticals.push(&boundary.end_vertical);
    verticals
}

/// Connects consecutive bay verticals with one horizontal member per bay.
pub struct LayoutNogging<'a> {
    boundary: &'a BoundaryFrame,
    studs: &'a [Segment],
}

impl<'a> LayoutNogging<'a> {
    /// Creates a new `LayoutNogging` operation.
    #[must_use]
    pub fn new(boundary: &'a BoundaryFrame, studs: &'a [Segment]) -> Self {
        Self { boundary, studs }
    }

    /// Executes the layout.
    ///
    /// Each member starts at the midpoint of one vertical and ends at the
    /// closest point of the next vertical to that midpoint.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if two consecutive verticals touch.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        bay_verticals(self.boundary, self.studs)
            .windows(2)
            .map(|pair| {
                let from = pair[0].midpoint();
                let to = ClosestPointOnSegment::new(pair[1], from).execute().point;
                Segment::new(from, to)
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::framing::WallOutline;
    use crate::math::Point3;
    use crate::operations::generation::{ExtractBoundary, LayoutStuds};
    use approx::assert_relative_eq;

    fn wall() -> WallOutline {
        let location = Segment::new(Point3::origin(), Point3::new(10.0, 0.0, 0.0)).unwrap();
        WallOutline::new("w1".into(), location, 8.0, "L1".into()).unwrap()
    }

    #[test]
    fn one_member_per_bay() {
        let wall = wall();
        let boundary = ExtractBoundary::new(&wall).execute().unwrap();
        let studs = LayoutStuds::new(&wall, 2.0, 0.2).execute().unwrap();
        let nogging = LayoutNogging::new(&boundary, &studs).execute().unwrap();

        assert_eq!(studs.len(), 4);
        assert_eq!(nogging.len(), 5);
    }

    #[test]
    fn members_are_level_and_chain_along_the_wall() {
        let wall = wall();
        let boundary = ExtractBoundary::new(&wall).execute().unwrap();
        let studs = LayoutStuds::new(&wall, 2.0, 0.2).execute().unwrap();
        let nogging = LayoutNogging::new(&boundary, &studs).execute().unwrap();

        // Start vertical spans 0..8, so its midpoint sets the first height.
        assert_relative_eq!(nogging[0].start(), Point3::new(0.0, 0.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(nogging[0].end(), Point3::new(2.0, 0.0, 4.0), epsilon = 1e-12);
        for member in &nogging {
            assert!(member.rise() < 1e-9);
            assert_relative_eq!(member.length(), 2.0, epsilon = 1e-9);
        }
        assert_relative_eq!(nogging[4].end().x, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn short_wall_gets_a_single_member_between_boundaries() {
        let wall = wall();
        let boundary = ExtractBoundary::new(&wall).execute().unwrap();
        let nogging = LayoutNogging::new(&boundary, &[]).execute().unwrap();

        assert_eq!(nogging.len(), 1);
        assert_relative_eq!(nogging[0].length(), 10.0, epsilon = 1e-12);
    }
}
