use crate::geometry::Segment;

use super::member::{MemberRole, ProfileId, ProfileKind, SegmentId};
use super::opening::OpeningId;
use super::wall::WallOutline;

slotmap::new_key_type! {
    /// Unique identifier for a panel in the frame store.
    pub struct PanelId;
}

/// The four curves of a wall's elevation outline.
#[derive(Debug, Clone)]
pub struct BoundaryFrame {
    /// The wall's location curve.
    pub bottom: Segment,
    /// At the start point, from the wall base up to the top.
    pub start_vertical: Segment,
    /// At the top, from the start point to the end point.
    pub top: Segment,
    /// At the end point, from the top down to the ground datum.
    pub end_vertical: Segment,
}

impl BoundaryFrame {
    #[must_use]
    pub fn verticals(&self) -> [&Segment; 2] {
        [&self.start_vertical, &self.end_vertical]
    }

    #[must_use]
    pub fn horizontals(&self) -> [&Segment; 2] {
        [&self.bottom, &self.top]
    }
}

/// Framing around the openings of a wall.
#[derive(Debug, Clone, Default)]
pub struct OpeningFraming {
    pub curves: Vec<Segment>,
    /// Openings that had no cutout geometry.
    pub skipped: Vec<OpeningId>,
}

/// Studs, nogging and corner bracing of a wall without openings.
#[derive(Debug, Clone, Default)]
pub struct InteriorFraming {
    pub studs: Vec<Segment>,
    pub nogging: Vec<Segment>,
    pub braces: Vec<Segment>,
}

/// What fills a panel inside its boundary. A wall gets one or the other,
/// never both.
#[derive(Debug, Clone)]
pub enum Infill {
    Openings(OpeningFraming),
    Interior(InteriorFraming),
}

/// All framing generated for one wall.
#[derive(Debug, Clone)]
pub struct Panel {
    pub wall: WallOutline,
    pub boundary: BoundaryFrame,
    pub infill: Infill,
    /// Whether any end meets a non-parallel wall.
    pub has_connections: bool,
    pub exterior_profile: ProfileId,
    pub interior_profile: ProfileId,
    /// Stud spacing in internal length units.
    pub stud_spacing: f64,
    pub(crate) segments: Vec<SegmentId>,
}

impl Panel {
    #[must_use]
    pub fn has_openings(&self) -> bool {
        matches!(self.infill, Infill::Openings(_))
    }

    #[must_use]
    pub fn has_connections(&self) -> bool {
        self.has_connections
    }

    /// Members placed for this panel so far.
    #[must_use]
    pub fn segments(&self) -> &[SegmentId] {
        &self.segments
    }

    #[must_use]
    pub fn profile(&self, role: MemberRole) -> &ProfileId {
        match role.profile_kind() {
            ProfileKind::Exterior => &self.exterior_profile,
            ProfileKind::Interior => &self.interior_profile,
        }
    }

    /// Every generated curve with its role, in placement order.
    #[must_use]
    pub fn curves(&self) -> Vec<(MemberRole, &Segment)> {
        let mut out: Vec<(MemberRole, &Segment)> = Vec::new();
        out.extend(
            self.boundary
                .verticals()
                .into_iter()
                .map(|s| (MemberRole::BoundaryVertical, s)),
        );
        out.extend(
            self.boundary
                .horizontals()
                .into_iter()
                .map(|s| (MemberRole::BoundaryHorizontal, s)),
        );
        match &self.infill {
            Infill::Openings(framing) => {
                out.extend(framing.curves.iter().map(|s| (MemberRole::Opening, s)));
            }
            Infill::Interior(framing) => {
                out.extend(framing.studs.iter().map(|s| (MemberRole::Stud, s)));
                out.extend(framing.nogging.iter().map(|s| (MemberRole::Nogging, s)));
                out.extend(framing.braces.iter().map(|s| (MemberRole::Brace, s)));
            }
        }
        out
    }
}
