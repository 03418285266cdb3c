pub mod units;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Maximum sine of the angle between two directions still treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Returns whether two directions are parallel or anti-parallel.
///
/// Zero-length inputs are never parallel to anything.
#[must_use]
pub fn is_parallel(a: &Vector3, b: &Vector3) -> bool {
    let (la, lb) = (a.norm(), b.norm());
    if la < TOLERANCE || lb < TOLERANCE {
        return false;
    }
    a.cross(b).norm() / (la * lb) < PARALLEL_TOLERANCE
}

/// Returns whether two directions are parallel and point the same way.
///
/// Anti-parallel and zero-length inputs are not the same direction.
#[must_use]
pub fn is_same_direction(a: &Vector3, b: &Vector3) -> bool {
    is_parallel(a, b) && a.dot(b) > 0.0
}

/// Returns `point` with its Z coordinate replaced.
#[must_use]
pub fn at_z(point: &Point3, z: f64) -> Point3 {
    Point3::new(point.x, point.y, z)
}

/// Lexicographic ordering of points by Z, then X, then Y.
#[must_use]
pub fn cmp_zxy(a: &Point3, b: &Point3) -> std::cmp::Ordering {
    a.z.total_cmp(&b.z)
        .then_with(|| a.x.total_cmp(&b.x))
        .then_with(|| a.y.total_cmp(&b.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn parallel_includes_opposite_directions() {
        let a = Vector3::new(0.0, 1.0, 0.0);
        assert!(is_parallel(&a, &Vector3::new(0.0, 3.0, 0.0)));
        assert!(is_parallel(&a, &Vector3::new(0.0, -1.0, 0.0)));
        assert!(!is_parallel(&a, &Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn same_direction_excludes_opposite_directions() {
        let a = Vector3::new(0.0, 1.0, 0.0);
        assert!(is_same_direction(&a, &Vector3::new(0.0, 2.0, 0.0)));
        assert!(!is_same_direction(&a, &Vector3::new(0.0, -1.0, 0.0)));
        assert!(!is_same_direction(&a, &Vector3::x()));
        assert!(!is_same_direction(&Vector3::zeros(), &a));
    }

    #[test]
    fn zero_vector_is_not_parallel() {
        assert!(!is_parallel(&Vector3::zeros(), &Vector3::x()));
    }

    #[test]
    fn zxy_order_breaks_ties_on_x_then_y() {
        let low = Point3::new(9.0, 9.0, 0.0);
        let high = Point3::new(0.0, 0.0, 1.0);
        assert_eq!(cmp_zxy(&low, &high), Ordering::Less);

        let left = Point3::new(1.0, 5.0, 2.0);
        let right = Point3::new(2.0, 0.0, 2.0);
        assert_eq!(cmp_zxy(&left, &right), Ordering::Less);

        let near = Point3::new(1.0, 0.0, 2.0);
        let far = Point3::new(1.0, 1.0, 2.0);
        assert_eq!(cmp_zxy(&far, &near), Ordering::Greater);
    }
}
