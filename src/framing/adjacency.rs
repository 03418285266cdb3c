use serde::{Deserialize, Serialize};

use crate::math::{is_same_direction, Vector3};

use super::wall::WallId;

/// One end of a wall's location curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallEnd {
    Start,
    End,
}

/// A wall joined to one end of another wall.
#[derive(Debug, Clone)]
pub struct Neighbor {
    pub wall: WallId,
    pub orientation: Vector3,
}

/// Walls joined at each end of a wall.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyInfo {
    pub start: Vec<Neighbor>,
    pub end: Vec<Neighbor>,
}

impl AdjacencyInfo {
    /// Returns the neighbors at one end.
    #[must_use]
    pub fn at(&self, end: WallEnd) -> &[Neighbor] {
        match end {
            WallEnd::Start => &self.start,
            WallEnd::End => &self.end,
        }
    }

    /// Returns whether `end` meets at least one wall that does not face the
    /// same way as `orientation`. Opposite-facing walls count as connected.
    #[must_use]
    pub fn is_connected(&self, end: WallEnd, orientation: &Vector3) -> bool {
        self.at(end)
            .iter()
            .any(|n| !is_same_direction(&n.orientation, orientation))
    }
}
