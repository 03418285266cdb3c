use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, ModelError, Result};
use crate::geometry::Segment;
use crate::math::units::feet_to_cm;
use crate::math::{Vector3, TOLERANCE};

/// Host identifier of a wall.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallId(pub String);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WallId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Host identifier of the level a wall sits on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub String);

impl From<&str> for LevelId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// The elevation outline of a straight wall.
///
/// The location segment runs along the wall base; `top_z` is the absolute
/// height of the wall's top. The orientation is the wall's exterior normal.
#[derive(Debug, Clone)]
pub struct WallOutline {
    id: WallId,
    location: Segment,
    top_z: f64,
    level: LevelId,
    orientation: Vector3,
}

impl WallOutline {
    /// Creates a wall outline, deriving the orientation from the location
    /// direction rotated a quarter turn clockwise about Z.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidWall` if the top does not lie above the
    /// base or the location segment is vertical.
    pub fn new(id: WallId, location: Segment, top_z: f64, level: LevelId) -> Result<Self> {
        let base_z = location.start().z.max(location.end().z);
        if top_z - base_z < TOLERANCE {
            return Err(ModelError::InvalidWall {
                wall: id.0,
                reason: format!("top {top_z} is not above base {base_z}"),
            }
            .into());
        }

        let dir = location.direction();
        let normal = Vector3::new(dir.y, -dir.x, 0.0);
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(ModelError::InvalidWall {
                wall: id.0,
                reason: "location curve is vertical".to_owned(),
            }
            .into());
        }

        Ok(Self {
            id,
            location,
            top_z,
            level,
            orientation: normal / len,
        })
    }

    /// Replaces the derived orientation with the host-reported one.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `orientation` has no length.
    pub fn with_orientation(mut self, orientation: Vector3) -> Result<Self> {
        let len = orientation.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        self.orientation = orientation / len;
        Ok(self)
    }

    #[must_use]
    pub fn id(&self) -> &WallId {
        &self.id
    }

    #[must_use]
    pub fn location(&self) -> &Segment {
        &self.location
    }

    #[must_use]
    pub fn top_z(&self) -> f64 {
        self.top_z
    }

    /// Z of the location segment's start point.
    #[must_use]
    pub fn base_z(&self) -> f64 {
        self.location.start().z
    }

    #[must_use]
    pub fn level(&self) -> &LevelId {
        &self.level
    }

    /// Unit exterior normal.
    #[must_use]
    pub fn orientation(&self) -> &Vector3 {
        &self.orientation
    }

    /// Length of the location segment in internal units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.location.length()
    }

    /// Length rounded to whole centimeters, as used in panel names.
    #[must_use]
    pub fn length_cm(&self) -> f64 {
        feet_to_cm(self.length())
    }
}
