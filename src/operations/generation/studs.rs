use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::framing::WallOutline;
use crate::geometry::{Curve, Segment};
use crate::math::at_z;

/// Quotients this close to an integer count as that integer.
const COUNT_SNAP: f64 = 1e-9;

/// Upper bound on stud bays per wall.
pub const MAX_BAYS: usize = 10_000;

/// Number of stud bays for a wall: `ceil(length / spacing)`.
///
/// The quotient is snapped to the nearest integer first, so a wall that is an
/// exact multiple of the spacing in centimeters does not gain a bay from
/// conversion noise.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bay_count(length: f64, spacing: f64) -> usize {
    let ratio = length / spacing;
    let nearest = ratio.round();
    let bays = if (ratio - nearest).abs() < COUNT_SNAP {
        nearest
    } else {
        ratio.ceil()
    };
    bays.max(0.0) as usize
}

/// Lays out evenly spaced interior studs along a wall.
pub struct LayoutStuds<'a> {
    wall: &'a WallOutline,
    spacing: f64,
    head_clearance: f64,
}

impl<'a> LayoutStuds<'a> {
    /// Creates a new `LayoutStuds` operation. Lengths are in internal units.
    #[must_use]
    pub fn new(wall: &'a WallOutline, spacing: f64, head_clearance: f64) -> Self {
        Self {
            wall,
            spacing,
            head_clearance,
        }
    }

    /// Executes the layout, returning studs ordered from the wall start.
    ///
    /// Each stud runs from the location curve up to `top_z - head_clearance`.
    /// Walls no longer than one spacing get no studs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for a non-positive spacing or one that
    /// would need more than [`MAX_BAYS`] bays, and
    /// `GeometryError::Degenerate` if a stud would have no height.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        if self.spacing.is_nan() || self.spacing <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stud spacing must be positive, got {}",
                self.spacing
            ))
            .into());
        }

        let location = self.wall.location();
        let bays = bay_count(location.length(), self.spacing);
        if bays > MAX_BAYS {
            return Err(ConfigError::Invalid(format!(
                "stud spacing {} gives {bays} bays on wall {}, limit is {MAX_BAYS}",
                self.spacing,
                self.wall.id()
            ))
            .into());
        }
        let stud_top = self.wall.top_z() - self.head_clearance;

        let mut studs = Vec::with_capacity(bays.saturating_sub(1));
        for i in 1..bays {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / bays as f64;
            let base = location.evaluate(t)?;
            studs.push(Segment::new(base, at_z(&base, stud_top))?);
        }

        debug!(wall = %self.wall.id(), bays, studs = studs.len(), "laid out studs");
        Ok(studs)
    }
}
