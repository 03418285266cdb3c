use std::f64::consts::FRAC_PI_2;

use crate::config::FramingConfig;
use crate::geometry::Segment;
use crate::math::Vector3;

/// Chooses the cross-section rotation of a member, in radians.
#[derive(Debug, Clone, Copy)]
pub struct RotationRule {
    horizontal_tolerance: f64,
    elevated_threshold: f64,
}

impl RotationRule {
    #[must_use]
    pub fn new(horizontal_tolerance: f64, elevated_threshold: f64) -> Self {
        Self {
            horizontal_tolerance,
            elevated_threshold,
        }
    }

    #[must_use]
    pub fn from_config(config: &FramingConfig) -> Self {
        Self::new(config.horizontal_tolerance, config.elevated_threshold)
    }

    /// Horizontal members turn a quarter turn: up when both ends are above
    /// the elevated threshold, down otherwise. Every other member follows the
    /// angle between the wall orientation and the X axis.
    #[must_use]
    pub fn rotation(&self, curve: &Segment, wall_orientation: &Vector3) -> f64 {
        if curve.rise() < self.horizontal_tolerance {
            let elevated = curve.start().z > self.elevated_threshold
                && curve.end().z > self.elevated_threshold;
            if elevated {
                FRAC_PI_2
            } else {
                -FRAC_PI_2
            }
        } else {
            wall_orientation.angle(&Vector3::x())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn rule() -> RotationRule {
        RotationRule::new(1.0, 1.0)
    }

    fn seg(a: [f64; 3], b: [f64; 3]) -> Segment {
        Segment::new(Point3::from(a), Point3::from(b)).unwrap()
    }

    #[test]
    fn top_track_turns_up() {
        let top = seg([0.0, 0.0, 9.0], [10.0, 0.0, 9.0]);
        assert_relative_eq!(rule().rotation(&top, &Vector3::y()), FRAC_PI_2);
    }

    #[test]
    fn bottom_track_turns_down() {
        let bottom = seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
        assert_relative_eq!(rule().rotation(&bottom, &Vector3::y()), -FRAC_PI_2);
    }

    #[test]
    fn member_with_one_low_end_turns_down() {
        let sloped = seg([0.0, 0.0, 0.5], [10.0, 0.0, 1.2]);
        assert_relative_eq!(rule().rotation(&sloped, &Vector3::y()), -FRAC_PI_2);
    }

    #[test]
    fn stud_follows_wall_orientation() {
        let stud = seg([0.0, 0.0, 0.0], [0.0, 0.0, 9.0]);
        assert_relative_eq!(rule().rotation(&stud, &Vector3::y()), FRAC_PI_2);
        assert_relative_eq!(rule().rotation(&stud, &-Vector3::x()), PI);
        assert_relative_eq!(rule().rotation(&stud, &Vector3::x()), 0.0);
    }

    #[test]
    fn brace_follows_wall_orientation() {
        let brace = seg([0.0, 0.0, 8.0], [2.0, 0.0, 2.0]);
        let orientation = Vector3::new(1.0, 1.0, 0.0).normalize();
        assert_relative_eq!(rule().rotation(&brace, &orientation), PI / 4.0, epsilon = 1e-12);
    }
}
