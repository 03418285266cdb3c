use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Segment;

use super::panel::PanelId;
use super::wall::WallId;

slotmap::new_key_type! {
    /// Unique identifier for a frame segment in the frame store.
    pub struct SegmentId;
}

/// Identifier of a cross-section profile in the host's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Which profile of a panel a member is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Exterior,
    Interior,
}

/// The structural role of a framing member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    /// Side track of the wall outline.
    BoundaryVertical,
    /// Bottom or top track of the wall outline.
    BoundaryHorizontal,
    /// Trim, head, sill or filler around an opening.
    Opening,
    /// Interior vertical stud.
    Stud,
    /// Horizontal member between studs.
    Nogging,
    /// Diagonal corner brace.
    Brace,
}

impl MemberRole {
    /// Boundary and opening members use the exterior profile, all others the interior one.
    #[must_use]
    pub fn profile_kind(self) -> ProfileKind {
        match self {
            Self::BoundaryVertical | Self::BoundaryHorizontal | Self::Opening => {
                ProfileKind::Exterior
            }
            Self::Stud | Self::Nogging | Self::Brace => ProfileKind::Interior,
        }
    }

    /// Whether the member belongs to the wall outline rather than its infill.
    #[must_use]
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::BoundaryVertical | Self::BoundaryHorizontal)
    }
}

/// Handle returned by the host for a placed structural member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberHandle(pub u64);

/// One instantiated framing member.
#[derive(Debug, Clone)]
pub struct FrameSegment {
    /// Centerline of the member.
    pub curve: Segment,
    /// Role fixed at creation.
    pub role: MemberRole,
    /// Cross-section the member was placed with.
    pub profile: ProfileId,
    /// Host handle of the placed member.
    pub member: MemberHandle,
    /// Cut length used as the part-numbering key.
    pub cut_length: f64,
    /// Owning panel.
    pub panel: PanelId,
    /// Host wall the panel was generated for.
    pub host_wall: WallId,
}
