//! Ground-plane intersection.
//!
//! The world has exactly one surface: an infinite horizontal plane at y = 0,
//! with the camera above it. A normalized ray either hits the ground
//! (pointing down), escapes into the sky (pointing up), or runs exactly
//! along the horizon. Division only ever happens on the downward branch,
//! where the divisor is strictly nonzero.

use crate::fixed::{fp_div, fp_mul, Vec3};

/// Stand-in distance for upward rays. Sky has no real surface; the far
/// pseudo-hit only feeds the slow-varying cloud noise in the shader.
pub const SKY_DISTANCE: i32 = 1 << 15;

/// Where a ray ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    /// Downward ray: exact hit on the y = 0 plane.
    Ground { hit: Vec3, distance: i32 },
    /// Upward ray: pseudo-hit at [`SKY_DISTANCE`] for cloud sampling.
    Sky { hit: Vec3 },
    /// Exactly horizontal ray: no hit point exists.
    Horizon,
}

/// Walk `distance` world units along a fixed-point unit direction.
#[inline]
fn walk(camera: Vec3, direction: Vec3, distance: i32) -> Vec3 {
    camera
        + Vec3::new(
            fp_mul(distance, direction.x),
            fp_mul(distance, direction.y),
            fp_mul(distance, direction.z),
        )
}

/// Intersect a normalized ray from `camera` with the ground plane.
/// Assumes `camera.y > 0`.
pub fn intersect(camera: Vec3, direction: Vec3) -> Intersection {
    if direction.y < 0 {
        let distance = fp_div(camera.y, -direction.y);
        Intersection::Ground {
            hit: walk(camera, direction, distance),
            distance,
        }
    } else if direction.y > 0 {
        Intersection::Sky {
            hit: walk(camera, direction, SKY_DISTANCE),
        }
    } else {
        Intersection::Horizon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::UNIT;

    #[test]
    fn test_straight_down_distance_equals_height() {
        for height in [1, 50, 150, 1000] {
            let camera = Vec3::new(7, height, -13);
            let down = Vec3::new(0, -UNIT, 0);
            match intersect(camera, down) {
                Intersection::Ground { hit, distance } => {
                    assert_eq!(distance, height);
                    assert_eq!(hit, Vec3::new(7, 0, -13));
                },
                other => panic!("expected ground hit, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_ground_hit_lands_on_plane() {
        let camera = Vec3::new(0, 50, 0);
        let d = Vec3::new(100, -100, 150).normalize();
        match intersect(camera, d) {
            Intersection::Ground { hit, distance } => {
                assert!(distance > 0);
                // Fixed-point rounding keeps the hit within one unit of the plane.
                assert!(hit.y.abs() <= 1, "hit off the plane: {:?}", hit);
            },
            other => panic!("expected ground hit, got {:?}", other),
        }
    }

    #[test]
    fn test_upward_ray_is_sky() {
        let camera = Vec3::new(0, 50, 0);
        let d = Vec3::new(0, 100, 100).normalize();
        match intersect(camera, d) {
            Intersection::Sky { hit } => {
                assert!(hit.y > camera.y);
            },
            other => panic!("expected sky, got {:?}", other),
        }
    }

    #[test]
    fn test_horizontal_ray_never_divides() {
        let camera = Vec3::new(0, 50, 0);
        let level = Vec3::new(0, 0, UNIT);
        assert_eq!(intersect(camera, level), Intersection::Horizon);
    }
}
