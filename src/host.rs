use serde::Serialize;

use crate::error::HostError;
use crate::framing::{
    AdjacencyInfo, LevelId, MemberHandle, MemberRole, Opening, ProfileId, WallId, WallOutline,
};
use crate::geometry::Segment;
use crate::operations::assembly::Rgb;

/// Read access to the walls to be framed, as held by the host application
/// that owns the building model.
pub trait FramingModel {
    /// Every wall of the model, in processing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot enumerate its walls.
    fn walls(&self) -> Result<Vec<WallOutline>, HostError>;

    /// Openings hosted by `wall`, with their cutout geometry when available.
    fn openings(&self, wall: &WallId) -> Vec<Opening>;

    /// Walls joined at each end of `wall`.
    fn adjacency(&self, wall: &WallId) -> AdjacencyInfo;
}

/// A structural member the host should create.
#[derive(Debug, Clone, Copy)]
pub struct MemberRequest<'a> {
    pub wall: &'a WallId,
    pub level: &'a LevelId,
    pub curve: &'a Segment,
    pub role: MemberRole,
    pub profile: &'a ProfileId,
    /// Members are placed with automatic end joining disabled at both ends.
    pub join_ends: bool,
}

/// Parameters written onto a placed member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberAnnotation {
    pub host_wall: WallId,
    pub panel_name: String,
    pub frame_number: String,
    /// Cross-section rotation in radians.
    pub rotation: f64,
}

/// A view filter that tints every member of one panel name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelFilter {
    /// Filter name in the host.
    pub name: String,
    /// Value of the panel-name parameter the filter matches.
    pub panel_name: String,
    pub color: Rgb,
    pub visible: bool,
}

/// Write access to the host model: members, their parameters and the panel
/// view filters.
pub trait FrameHost {
    /// Creates a member along `request.curve`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot create the member.
    fn place_member(&mut self, request: &MemberRequest<'_>) -> Result<MemberHandle, HostError>;

    /// Persists the annotation on a previously placed member.
    ///
    /// # Errors
    ///
    /// Returns an error if the member or one of its parameters is missing.
    fn annotate_member(
        &mut self,
        member: MemberHandle,
        annotation: &MemberAnnotation,
    ) -> Result<(), HostError>;

    /// Creates or updates the filter for one panel name.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot create the filter.
    fn apply_panel_filter(&mut self, filter: &PanelFilter) -> Result<(), HostError>;
}
