use tracing::debug;

use crate::config::FramingConfig;
use crate::error::Result;
use crate::framing::{
    AdjacencyInfo, Infill, InteriorFraming, Opening, Panel, WallEnd, WallOutline,
};

use super::{BraceCorners, ExtractBoundary, FrameOpenings, LayoutNogging, LayoutStuds};

/// Generates the complete framing of one wall.
///
/// Walls with at least one framed opening get opening framing only; all
/// other walls get studs, nogging and, at connected ends, bracing.
pub struct BuildPanel<'a> {
    wall: &'a WallOutline,
    openings: &'a [Opening],
    adjacency: &'a AdjacencyInfo,
    config: &'a FramingConfig,
}

impl<'a> BuildPanel<'a> {
    /// Creates a new `BuildPanel` operation.
    #[must_use]
    pub fn new(
        wall: &'a WallOutline,
        openings: &'a [Opening],
        adjacency: &'a AdjacencyInfo,
        config: &'a FramingConfig,
    ) -> Self {
        Self {
            wall,
            openings,
            adjacency,
            config,
        }
    }

    /// Executes the generation.
    ///
    /// # Errors
    ///
    /// Returns an error if any member of the wall degenerates.
    pub fn execute(&self) -> Result<Panel> {
        let spacing = self.config.stud_spacing();
        let clearance = self.config.head_clearance();
        let orientation = self.wall.orientation();

        let boundary = ExtractBoundary::new(self.wall).execute()?;
        let has_connections = [WallEnd::Start, WallEnd::End]
            .into_iter()
            .any(|end| self.adjacency.is_connected(end, orientation));

        let openings = FrameOpenings::new(self.wall, self.openings, clearance).execute()?;
        let infill = if openings.curves.is_empty() {
            let studs = LayoutStuds::new(self.wall, spacing, clearance).execute()?;
            let nogging = LayoutNogging::new(&boundary, &studs).execute()?;
            let braces =
                BraceCorners::new(&boundary, &studs, self.adjacency, orientation).execute()?;
            Infill::Interior(InteriorFraming {
                studs,
                nogging,
                braces,
            })
        } else {
            Infill::Openings(openings)
        };

        let panel = Panel {
            wall: self.wall.clone(),
            boundary,
            infill,
            has_connections,
            exterior_profile: self.config.exterior_profile.clone(),
            interior_profile: self.config.interior_profile.clone(),
            stud_spacing: spacing,
            segments: Vec::new(),
        };
        debug!(
            wall = %self.wall.id(),
            has_openings = panel.has_openings(),
            has_connections,
            curves = panel.curves().len(),
            "built panel"
        );
        Ok(panel)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::framing::{MemberRole, Neighbor};
    use crate::geometry::Segment;
    use crate::math::units::cm_to_feet;
    use crate::math::{Point3, Vector3};

    fn config() -> FramingConfig {
        FramingConfig::new("C140".into(), "C90".into(), 100.0)
    }

    fn wall_500cm() -> WallOutline {
        let location =
            Segment::new(Point3::origin(), Point3::new(cm_to_feet(500.0), 0.0, 0.0)).unwrap();
        WallOutline::new("w1".into(), location, 9.0, "L1".into()).unwrap()
    }

    fn window() -> Opening {
        let corners = [
            Point3::new(5.0, 0.0, 3.0),
            Point3::new(8.0, 0.0, 3.0),
            Point3::new(8.0, 0.0, 7.0),
            Point3::new(5.0, 0.0, 7.0),
        ];
        let edges = (0..4)
            .map(|i| Segment::new(corners[i], corners[(i + 1) % 4]).unwrap())
            .collect();
        Opening::window("win".into(), 3.0, 4.0, edges)
    }

    fn connected_both_ends() -> AdjacencyInfo {
        let n = Neighbor {
            wall: "n".into(),
            orientation: Vector3::x(),
        };
        AdjacencyInfo {
            start: vec![n.clone()],
            end: vec![n],
        }
    }

    fn count(panel: &Panel, role: MemberRole) -> usize {
        panel.curves().iter().filter(|(r, _)| *r == role).count()
    }

    #[test]
    fn plain_wall_gets_studs_and_nogging() {
        let panel = BuildPanel::new(&wall_500cm(), &[], &AdjacencyInfo::default(), &config())
            .execute()
            .unwrap();

        assert!(!panel.has_openings());
        assert!(!panel.has_connections());
        assert_eq!(count(&panel, MemberRole::BoundaryVertical), 2);
        assert_eq!(count(&panel, MemberRole::BoundaryHorizontal), 2);
        assert_eq!(count(&panel, MemberRole::Stud), 4);
        assert_eq!(count(&panel, MemberRole::Nogging), 5);
        assert_eq!(count(&panel, MemberRole::Brace), 0);
        assert_eq!(count(&panel, MemberRole::Opening), 0);
    }

    #[test]
    fn opening_suppresses_interior_framing_even_when_connected() {
        let panel = BuildPanel::new(&wall_500cm(), &[window()], &connected_both_ends(), &config())
            .execute()
            .unwrap();

        assert!(panel.has_openings());
        assert!(panel.has_connections());
        assert_eq!(count(&panel, MemberRole::Opening), 6);
        assert_eq!(count(&panel, MemberRole::Stud), 0);
        assert_eq!(count(&panel, MemberRole::Nogging), 0);
        assert_eq!(count(&panel, MemberRole::Brace), 0);
    }

    #[test]
    fn connected_plain_wall_is_braced() {
        let panel = BuildPanel::new(&wall_500cm(), &[], &connected_both_ends(), &config())
            .execute()
            .unwrap();

        assert!(panel.has_connections());
        assert_eq!(count(&panel, MemberRole::Brace), 8);
    }

    #[test]
    fn openings_without_cutouts_fall_back_to_interior_framing() {
        let mut lost = window();
        lost.cutout = None;
        let panel = BuildPanel::new(&wall_500cm(), &[lost], &AdjacencyInfo::default(), &config())
            .execute()
            .unwrap();

        assert!(!panel.has_openings());
        assert_eq!(count(&panel, MemberRole::Stud), 4);
    }

    #[test]
    fn profiles_follow_roles() {
        let panel = BuildPanel::new(&wall_500cm(), &[], &AdjacencyInfo::default(), &config())
            .execute()
            .unwrap();

        assert_eq!(panel.profile(MemberRole::BoundaryVertical).0, "C140");
        assert_eq!(panel.profile(MemberRole::Stud).0, "C90");
    }
}
