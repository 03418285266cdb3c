use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::framing::{Opening, OpeningFraming, OpeningKind, WallOutline};
use crate::geometry::Segment;
use crate::math::{at_z, cmp_zxy, Point3, TOLERANCE};
use crate::operations::query::ClosestPointOnSegment;

/// Cutout edges sorted by their start points, lowest first.
fn sorted_edges(cutout: &[Segment]) -> Vec<&Segment> {
    let mut edges: Vec<&Segment> = cutout.iter().collect();
    edges.sort_by(|a, b| cmp_zxy(&a.start(), &b.start()));
    edges
}

/// Builds trims, heads, sills and fillers around a wall's openings.
///
/// Every opening gets two vertical trims from just below the wall top down to
/// the location curve at its two lowest corners. Windows add a sill, a head
/// and a filler above and below; doors add a head and a filler above. A
/// window head at or above the wall top gets no upper filler.
pub struct FrameOpenings<'a> {
    wall: &'a WallOutline,
    openings: &'a [Opening],
    clearance: f64,
}

impl<'a> FrameOpenings<'a> {
    /// Creates a new `FrameOpenings` operation.
    ///
    /// `clearance` is both the gap under the wall top and the offset of heads
    /// and sills from the cutout.
    #[must_use]
    pub fn new(wall: &'a WallOutline, openings: &'a [Opening], clearance: f64) -> Self {
        Self {
            wall,
            openings,
            clearance,
        }
    }

    /// Executes the framing.
    ///
    /// Openings without cutout geometry are skipped and listed in
    /// [`OpeningFraming::skipped`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if an opening collapses to a
    /// zero-length member.
    pub fn execute(&self) -> Result<OpeningFraming> {
        let mut framing = OpeningFraming::default();

        for opening in self.openings {
            let edges = match opening.cutout.as_deref() {
                Some(cutout) if cutout.len() >= 2 => sorted_edges(cutout),
                _ => {
                    warn!(
                        wall = %self.wall.id(),
                        opening = %opening.id,
                        "opening has no cutout geometry, skipping"
                    );
                    framing.skipped.push(opening.id.clone());
                    continue;
                }
            };

            let curves = match opening.kind {
                OpeningKind::Window => self.frame_window(opening, &edges)?,
                OpeningKind::Door => self.frame_door(&edges)?,
            };
            debug!(
                wall = %self.wall.id(),
                opening = %opening.id,
                kind = ?opening.kind,
                width = opening.width,
                members = curves.len(),
                "framed opening"
            );
            framing.curves.extend(curves);
        }

        Ok(framing)
    }

    /// Projects the two lowest cutout corners onto the location curve and
    /// returns them with the trims standing on them.
    fn trims(&self, edges: &[&Segment]) -> Result<([Point3; 2], [Point3; 2], [Segment; 2])> {
        let lowest = [edges[0].start(), edges[1].start()];
        let location = self.wall.location();
        let trim_top = self.wall.top_z() - self.clearance;

        let feet = lowest.map(|corner| {
            ClosestPointOnSegment::new(location, at_z(&corner, 0.0))
                .execute()
                .point
        });
        let trims = [
            Segment::new(at_z(&feet[0], trim_top), feet[0])?,
            Segment::new(at_z(&feet[1], trim_top), feet[1])?,
        ];
        Ok((lowest, feet, trims))
    }

    fn frame_window(&self, opening: &Opening, edges: &[&Segment]) -> Result<Vec<Segment>> {
        let (lowest, feet, [first, second]) = self.trims(edges)?;
        let top_z = self.wall.top_z();

        let sill = Segment::new(
            at_z(&feet[0], lowest[0].z - self.clearance),
            at_z(&feet[1], lowest[1].z - self.clearance),
        )?;
        let head = Segment::new(
            at_z(&feet[0], lowest[0].z + opening.height + self.clearance),
            at_z(&feet[1], lowest[1].z + opening.height + self.clearance),
        )?;

        let sill_mid = sill.midpoint();
        let lower_filler = Segment::new(sill_mid, at_z(&sill_mid, sill_mid.z - self.clearance))?;

        let head_mid = head.midpoint();
        let mut curves = vec![first, second, sill, head];
        if top_z - head_mid.z > TOLERANCE {
            curves.push(Segment::new(head_mid, at_z(&head_mid, top_z))?);
        } else {
            debug!(
                wall = %self.wall.id(),
                opening = %opening.id,
                "window head reaches the wall top, no upper filler"
            );
        }
        curves.push(lower_filler);
        Ok(curves)
    }

    fn frame_door(&self, edges: &[&Segment]) -> Result<Vec<Segment>> {
        let (_, _, [first, second]) = self.trims(edges)?;
        let top_z = self.wall.top_z();

        let lintel = edges
            .iter()
            .map(|edge| edge.midpoint())
            .max_by(cmp_zxy)
            .ok_or_else(|| GeometryError::Degenerate("door cutout has no edges".into()))?;
        let head = Segment::new(
            ClosestPointOnSegment::new(&first, lintel).execute().point,
            ClosestPointOnSegment::new(&second, lintel).execute().point,
        )?;

        let head_mid = head.midpoint();
        let filler = Segment::new(head_mid, at_z(&head_mid, top_z))?;

        Ok(vec![first, second, head, filler])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::framing::OpeningId;
    use crate::math::units::cm_to_feet;
    use approx::assert_relative_eq;

    fn wall() -> WallOutline {
        let location = Segment::new(Point3::origin(), Point3::new(16.0, 0.0, 0.0)).unwrap();
        WallOutline::new("w1".into(), location, 9.0, "L1".into()).unwrap()
    }

    /// Closed rectangular loop in the XZ plane, counter-clockwise from the
    /// lower-left corner.
    fn rect(x0: f64, x1: f64, z0: f64, z1: f64) -> Vec<Segment> {
        let corners = [
            Point3::new(x0, 0.3, z0),
            Point3::new(x1, 0.3, z0),
            Point3::new(x1, 0.3, z1),
            Point3::new(x0, 0.3, z1),
        ];
        (0..4)
            .map(|i| Segment::new(corners[i], corners[(i + 1) % 4]).unwrap())
            .collect()
    }

    #[test]
    fn window_gets_six_members() {
        let clearance = cm_to_feet(5.0);
        let openings = [Opening::window("win".into(), 3.0, 4.0, rect(5.0, 8.0, 3.0, 7.0))];
        let framing = FrameOpenings::new(&wall(), &openings, clearance)
            .execute()
            .unwrap();
        let c = &framing.curves;

        assert_eq!(c.len(), 6);
        assert!(framing.skipped.is_empty());

        // Trims from under the top down to the wall base at each jamb.
        assert_relative_eq!(c[0].start(), Point3::new(5.0, 0.0, 9.0 - clearance), epsilon = 1e-12);
        assert_relative_eq!(c[0].end(), Point3::new(5.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(c[1].end(), Point3::new(8.0, 0.0, 0.0), epsilon = 1e-12);

        // Sill below, head above the cutout.
        assert_relative_eq!(c[2].start().z, 3.0 - clearance, epsilon = 1e-12);
        assert_relative_eq!(c[3].start().z, 7.0 + clearance, epsilon = 1e-12);
        assert_relative_eq!(c[3].length(), 3.0, epsilon = 1e-12);

        // Fillers from the head up to the top, and under the sill.
        assert_relative_eq!(c[4].start(), Point3::new(6.5, 0.0, 7.0 + clearance), epsilon = 1e-12);
        assert_relative_eq!(c[4].end().z, 9.0, epsilon = 1e-12);
        assert_relative_eq!(c[5].start().z, 3.0 - clearance, epsilon = 1e-12);
        assert_relative_eq!(c[5].length(), clearance, epsilon = 1e-12);
    }

    #[test]
    fn door_gets_four_members() {
        let clearance = cm_to_feet(5.0);
        let openings = [Opening::door("door".into(), 3.0, 7.0, rect(5.0, 8.0, 0.0, 7.0))];
        let framing = FrameOpenings::new(&wall(), &openings, clearance)
            .execute()
            .unwrap();
        let c = &framing.curves;

        assert_eq!(c.len(), 4);
        assert_relative_eq!(c[2].start(), Point3::new(5.0, 0.0, 7.0), epsilon = 1e-12);
        assert_relative_eq!(c[2].end(), Point3::new(8.0, 0.0, 7.0), epsilon = 1e-12);
        assert_relative_eq!(c[3].start(), Point3::new(6.5, 0.0, 7.0), epsilon = 1e-12);
        assert_relative_eq!(c[3].end().z, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn window_head_at_wall_top_has_no_upper_filler() {
        let clearance = 0.5;
        let openings = [Opening::window("win".into(), 3.0, 4.0, rect(5.0, 8.0, 4.5, 8.5))];
        let framing = FrameOpenings::new(&wall(), &openings, clearance)
            .execute()
            .unwrap();
        let c = &framing.curves;

        assert_eq!(c.len(), 5);
        assert_relative_eq!(c[3].start().z, 9.0, epsilon = 1e-12);
        // The last member is the lower filler under the sill.
        assert_relative_eq!(c[4].start().z, 4.0, epsilon = 1e-12);
        assert_relative_eq!(c[4].end().z, 3.5, epsilon = 1e-12);
    }

    #[test]
    fn door_head_follows_highest_edge_of_clockwise_loop() {
        let mut edges = rect(5.0, 8.0, 0.0, 7.0);
        edges.reverse();
        let edges = edges
            .into_iter()
            .map(|e| Segment::new(e.end(), e.start()).unwrap())
            .collect();
        let openings = [Opening::door("door".into(), 3.0, 7.0, edges)];
        let framing = FrameOpenings::new(&wall(), &openings, 0.1).execute().unwrap();
        let c = &framing.curves;

        assert_eq!(c.len(), 4);
        assert_relative_eq!(c[2].start().z, 7.0, epsilon = 1e-12);
        assert_relative_eq!(c[2].end().z, 7.0, epsilon = 1e-12);
        assert_relative_eq!(c[2].length(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn lowest_corners_ignore_loop_start() {
        let mut loop_edges = rect(5.0, 8.0, 3.0, 7.0);
        loop_edges.rotate_left(2);
        let openings = [Opening::window("win".into(), 3.0, 4.0, loop_edges)];
        let framing = FrameOpenings::new(&wall(), &openings, 0.1).execute().unwrap();

        assert_relative_eq!(framing.curves[0].end().x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(framing.curves[1].end().x, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_cutout_skips_only_that_opening() {
        let openings = [
            Opening {
                id: "lost".into(),
                kind: OpeningKind::Window,
                width: 3.0,
                height: 4.0,
                cutout: None,
            },
            Opening::door("door".into(), 3.0, 7.0, rect(10.0, 13.0, 0.0, 7.0)),
        ];
        let framing = FrameOpenings::new(&wall(), &openings, 0.1).execute().unwrap();

        assert_eq!(framing.curves.len(), 4);
        assert_eq!(framing.skipped, vec![OpeningId::from("lost")]);
    }
}
