use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain, Line};

/// A bounded straight segment between two 3D points.
///
/// Stored as its supporting [`Line`] (origin at `start`, unit direction)
/// plus the arc-length `length`. Evaluation uses the normalized parameter
/// `t ∈ [0, 1]`, so `evaluate(0.5)` is the midpoint whatever the length.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    line: Line,
    length: f64,
}

impl Segment {
    /// Creates the segment `start -> end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the endpoints coincide.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        let delta = end - start;
        let length = delta.norm();
        if length < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "zero-length segment at ({:.4}, {:.4}, {:.4})",
                start.x, start.y, start.z
            ))
            .into());
        }
        Ok(Self {
            line: Line::new(start, delta)?,
            length,
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point3 {
        *self.line.origin()
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.line.origin() + self.line.direction() * self.length
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the supporting line.
    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the unit direction from start to end.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        self.line.direction()
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        self.line.origin() + self.line.direction() * (self.length * 0.5)
    }

    /// Returns the absolute Z difference between the endpoints.
    #[must_use]
    pub fn rise(&self) -> f64 {
        (self.end().z - self.start().z).abs()
    }
}

impl Curve for Segment {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let domain = self.domain();
        if !domain.contains(t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into());
        }
        if t >= 1.0 {
            return Ok(self.end());
        }
        self.line.evaluate(t * self.length)
    }

    fn tangent(&self, _t: f64) -> Result<Vector3> {
        Ok(*self.line.direction())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}
