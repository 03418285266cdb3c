use tracing::debug;

use crate::error::Result;
use crate::framing::{AdjacencyInfo, BoundaryFrame, WallEnd};
use crate::geometry::{Curve, Segment};
use crate::math::Vector3;

use super::nogging::bay_verticals;

/// Parameters of the five W points at the end of the wall. Points 1, 3 and 5
/// sit on the boundary vertical, points 2 and 4 on the neighboring stud.
/// Parameters run along the boundary vertical; the W descends from the top.
const W_PARAMETERS: [f64; 5] = [0.05, 0.25, 0.5, 0.75, 0.95];

/// Adds a W-shaped diagonal brace in the end bays of a wall that meet a wall
/// facing another way.
pub struct BraceCorners<'a> {
    boundary: &'a BoundaryFrame,
    studs: &'a [Segment],
    adjacency: &'a AdjacencyInfo,
    orientation: &'a Vector3,
}

impl<'a> BraceCorners<'a> {
    /// Creates a new `BraceCorners` operation.
    #[must_use]
    pub fn new(
        boundary: &'a BoundaryFrame,
        studs: &'a [Segment],
        adjacency: &'a AdjacencyInfo,
        orientation: &'a Vector3,
    ) -> Self {
        Self {
            boundary,
            studs,
            adjacency,
            orientation,
        }
    }

    /// Executes the bracing, returning four diagonals per connected end,
    /// start end first.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if a bay has no width.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        let verticals = bay_verticals(self.boundary, self.studs);
        let last = verticals.len() - 1;
        let mut braces = Vec::new();

        for end in [WallEnd::Start, WallEnd::End] {
            if !self.adjacency.is_connected(end, self.orientation) {
                continue;
            }

            let (outer, inner, params) = match end {
                WallEnd::Start => {
                    let mut reversed = W_PARAMETERS;
                    reversed.reverse();
                    (verticals[0], verticals[1], reversed)
                }
                WallEnd::End => (verticals[last], verticals[last - 1], W_PARAMETERS),
            };

            // Boundary verticals and studs may run in opposite directions;
            // the inner parameter is flipped so both sides descend together.
            let flip_inner = outer.direction().dot(inner.direction()) < 0.0;
            let mut points = Vec::with_capacity(params.len());
            for (i, t) in params.into_iter().enumerate() {
                let point = if i % 2 == 0 {
                    outer.evaluate(t)?
                } else if flip_inner {
                    inner.evaluate(1.0 - t)?
                } else {
                    inner.evaluate(t)?
                };
                points.push(point);
            }
            for pair in points.windows(2) {
                braces.push(Segment::new(pair[0], pair[1])?);
            }
            debug!(?end, "braced corner bay");
        }

        Ok(braces)
    }
}
