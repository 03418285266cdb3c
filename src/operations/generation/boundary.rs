use crate::error::Result;
use crate::framing::{BoundaryFrame, WallOutline};
use crate::geometry::Segment;
use crate::math::at_z;

/// Extracts the elevation outline of a wall.
///
/// The end vertical always reaches the ground datum `Z = 0`, even when the
/// wall base sits higher; the start vertical only spans the wall itself.
pub struct ExtractBoundary<'a> {
    wall: &'a WallOutline,
}

impl<'a> ExtractBoundary<'a> {
    /// Creates a new `ExtractBoundary` operation.
    #[must_use]
    pub fn new(wall: &'a WallOutline) -> Self {
        Self { wall }
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the wall top lies on the datum.
    pub fn execute(&self) -> Result<BoundaryFrame> {
        let location = self.wall.location();
        let top_z = self.wall.top_z();
        let start = location.start();
        let end = location.end();

        let start_vertical = Segment::new(at_z(&start, self.wall.base_z()), at_z(&start, top_z))?;
        let top = Segment::new(at_z(&start, top_z), at_z(&end, top_z))?;
        let end_vertical = Segment::new(at_z(&end, top_z), at_z(&end, 0.0))?;

        Ok(BoundaryFrame {
            bottom: location.clone(),
            start_vertical,
            top,
            end_vertical,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn wall_at(base_z: f64, top_z: f64) -> WallOutline {
        let location =
            Segment::new(Point3::new(0.0, 0.0, base_z), Point3::new(12.0, 0.0, base_z)).unwrap();
        WallOutline::new("w1".into(), location, top_z, "L1".into()).unwrap()
    }

    #[test]
    fn two_horizontals_and_two_verticals() {
        let boundary = ExtractBoundary::new(&wall_at(0.0, 9.0)).execute().unwrap();

        for h in boundary.horizontals() {
            assert!(h.rise() < 1e-12);
        }
        for v in boundary.verticals() {
            assert!(v.rise() > 0.0);
            assert!(v.direction().z.abs() > 1.0 - 1e-12);
        }
        assert_relative_eq!(boundary.top.start().z, 9.0);
        assert_relative_eq!(boundary.top.length(), 12.0);
    }

    #[test]
    fn end_vertical_reaches_datum_on_raised_wall() {
        let boundary = ExtractBoundary::new(&wall_at(10.0, 19.0)).execute().unwrap();

        assert_relative_eq!(boundary.start_vertical.start().z, 10.0);
        assert_relative_eq!(boundary.start_vertical.end().z, 19.0);
        assert_relative_eq!(boundary.end_vertical.start(), Point3::new(12.0, 0.0, 19.0));
        assert_relative_eq!(boundary.end_vertical.end(), Point3::new(12.0, 0.0, 0.0));
        assert_relative_eq!(boundary.end_vertical.length(), 19.0);
    }

    #[test]
    fn bottom_is_the_location_curve() {
        let wall = wall_at(0.0, 9.0);
        let boundary = ExtractBoundary::new(&wall).execute().unwrap();
        assert_eq!(&boundary.bottom, wall.location());
    }
}
