pub mod adjacency;
pub mod member;
pub mod opening;
pub mod panel;
pub mod wall;

pub use adjacency::{AdjacencyInfo, Neighbor, WallEnd};
pub use member::{FrameSegment, MemberHandle, MemberRole, ProfileId, ProfileKind, SegmentId};
pub use opening::{Opening, OpeningId, OpeningKind};
pub use panel::{BoundaryFrame, Infill, InteriorFraming, OpeningFraming, Panel, PanelId};
pub use wall::{LevelId, WallId, WallOutline};

use crate::error::ModelError;
use slotmap::SlotMap;

/// Arena that receives panels and members while walls are being generated.
///
/// It only grows, except that a panel that failed mid-way can be withdrawn
/// together with its members. Call [`FrameCollector::finish`] once every wall
/// is done to obtain the read-only [`FrameStore`].
#[derive(Debug, Default)]
pub struct FrameCollector {
    panels: SlotMap<PanelId, Panel>,
    segments: SlotMap<SegmentId, FrameSegment>,
    order: Vec<PanelId>,
}

impl FrameCollector {
    /// Creates a new, empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a panel and returns its ID.
    pub fn add_panel(&mut self, mut panel: Panel) -> PanelId {
        panel.segments.clear();
        let id = self.panels.insert(panel);
        self.order.push(id);
        id
    }

    /// Inserts a member and records it on its owning panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the owning panel is not in the collector.
    pub fn add_segment(&mut self, segment: FrameSegment) -> Result<SegmentId, ModelError> {
        let panel_id = segment.panel;
        if !self.panels.contains_key(panel_id) {
            return Err(ModelError::EntityNotFound("panel".into()));
        }
        let id = self.segments.insert(segment);
        if let Some(panel) = self.panels.get_mut(panel_id) {
            panel.segments.push(id);
        }
        Ok(id)
    }

    /// Removes a panel and every member recorded on it.
    pub fn withdraw_panel(&mut self, id: PanelId) -> Option<Panel> {
        let panel = self.panels.remove(id)?;
        for segment in &panel.segments {
            self.segments.remove(*segment);
        }
        self.order.retain(|p| *p != id);
        Some(panel)
    }

    /// Returns the number of panels collected so far.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Freezes the collection.
    #[must_use]
    pub fn finish(self) -> FrameStore {
        FrameStore {
            panels: self.panels,
            segments: self.segments,
            order: self.order,
        }
    }
}

/// Read-only set of every panel and member of a batch.
///
/// Panels iterate in the order they were added; members in the order they
/// were placed within each panel.
#[derive(Debug)]
pub struct FrameStore {
    panels: SlotMap<PanelId, Panel>,
    segments: SlotMap<SegmentId, FrameSegment>,
    order: Vec<PanelId>,
}

impl FrameStore {
    /// Returns a reference to the panel, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn panel(&self, id: PanelId) -> Result<&Panel, ModelError> {
        self.panels
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("panel".into()))
    }

    /// Returns a reference to the member, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn segment(&self, id: SegmentId) -> Result<&FrameSegment, ModelError> {
        self.segments
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("segment".into()))
    }

    /// Iterates panels in insertion order.
    pub fn panels(&self) -> impl Iterator<Item = (PanelId, &Panel)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.panels.get(*id).map(|p| (*id, p)))
    }

    /// Iterates all members, panel by panel.
    pub fn segments(&self) -> impl Iterator<Item = (SegmentId, &FrameSegment)> + '_ {
        self.panels().flat_map(move |(_, panel)| {
            panel
                .segments
                .iter()
                .filter_map(move |id| self.segments.get(*id).map(|s| (*id, s)))
        })
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
