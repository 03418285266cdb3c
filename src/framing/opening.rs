use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Segment;

/// Host identifier of a window or door.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningId(pub String);

impl fmt::Display for OpeningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OpeningId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Whether an opening has a sill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpeningKind {
    /// Has a sill below it.
    Window,
    /// Extends down to the floor.
    Door,
}

/// A rectangular cutout hosted by a wall.
///
/// `cutout` holds the edges of the cutout loop in wall elevation, as
/// reported by the host. It is `None` when the host could not compute it.
#[derive(Debug, Clone)]
pub struct Opening {
    pub id: OpeningId,
    pub kind: OpeningKind,
    pub width: f64,
    pub height: f64,
    pub cutout: Option<Vec<Segment>>,
}

impl Opening {
    #[must_use]
    pub fn window(id: OpeningId, width: f64, height: f64, cutout: Vec<Segment>) -> Self {
        Self {
            id,
            kind: OpeningKind::Window,
            width,
            height,
            cutout: Some(cutout),
        }
    }

    #[must_use]
    pub fn door(id: OpeningId, width: f64, height: f64, cutout: Vec<Segment>) -> Self {
        Self {
            id,
            kind: OpeningKind::Door,
            width,
            height,
            cutout: Some(cutout),
        }
    }
}
