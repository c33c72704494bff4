//! Fixed-Point Vector Math
//!
//! Integer-only vector operations under an 8-bit fixed-point scale:
//! a unit vector has magnitude [`UNIT`] (256), so the straight-down unit
//! ray is exactly (0, -256, 0). No floating point anywhere.

use std::ops::Add;

/// Fixed-point shift: fractional quantities carry 8 bits.
pub const FP_SHIFT: u32 = 8;

/// Fixed-point one. A normalized vector has magnitude ~UNIT.
pub const UNIT: i32 = 1 << FP_SHIFT;

/// Multiply a plain integer by a fixed-point factor.
#[inline]
pub fn fp_mul(value: i32, factor: i32) -> i32 {
    (value * factor) >> FP_SHIFT
}

/// Divide, promoting the numerator to fixed point first.
/// Caller must guarantee `n != 0`.
#[inline]
pub fn fp_div(value: i32, n: i32) -> i32 {
    (value << FP_SHIFT) / n
}

/// Integer square root: floor(sqrt(n)), exact for all u32 inputs.
/// Binary digit-by-digit (non-restoring) method, O(log n) iterations.
pub fn isqrt(n: u32) -> u32 {
    let mut f = 0u32;
    let mut p = 1u32 << 30;
    let mut r = n;

    while p > r {
        p >>= 2;
    }

    while p != 0 {
        if r >= f + p {
            r -= f + p;
            f += p << 1;
        }
        f >>= 1;
        p >>= 2;
    }

    f
}

/// 3D integer vector.
///
/// Doubles as a true spatial vector (camera position, plane hit points, in
/// world units) and as a fixed-point unit direction after [`Vec3::normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0, z: 0 }
    }

    /// Integer dot product. Caller must keep component magnitudes small
    /// enough that the sum of products fits in i32; this is not checked.
    #[inline]
    pub fn dot(&self, other: &Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length, rounded down.
    #[inline]
    pub fn length(&self) -> i32 {
        isqrt(self.dot(self) as u32) as i32
    }

    /// Scale to an 8-bit fixed-point unit vector (magnitude ~[`UNIT`]).
    /// The zero vector is returned unchanged; no division by zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let n = self.length();
        if n == 0 {
            return *self;
        }
        Self {
            x: fp_div(self.x, n),
            y: fp_div(self.y, n),
            z: fp_div(self.z, n),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

/// 2D integer vector (pixel coordinates, origin top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_floor_property() {
        let samples: Vec<u32> = (0..2000)
            .chain((0..32).map(|i| 1u32 << i))
            .chain([u32::MAX, u32::MAX - 1, i32::MAX as u32, 2_147_395_600])
            .collect();
        for n in samples {
            let f = isqrt(n) as u64;
            assert!(f * f <= n as u64, "isqrt({}) = {} overshoots", n, f);
            assert!((f + 1) * (f + 1) > n as u64, "isqrt({}) = {} undershoots", n, f);
        }
    }

    #[test]
    fn test_isqrt_exact_squares() {
        for k in 0..1000u32 {
            assert_eq!(isqrt(k * k), k);
        }
    }

    #[test]
    fn test_vector_addition() {
        let a = Vec3::new(1, -2, 3);
        let b = Vec3::new(10, 20, -30);
        assert_eq!(a + b, Vec3::new(11, 18, -27));
        assert_eq!(a + Vec3::zero(), a);
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1, 2, 3);
        let b = Vec3::new(4, -5, 6);
        assert_eq!(a.dot(&b), 4 - 10 + 18);
    }

    #[test]
    fn test_normalize_magnitude() {
        let vectors = [
            Vec3::new(1, 0, 0),
            Vec3::new(0, -100, 0),
            Vec3::new(3, 4, 12),
            Vec3::new(-250, 120, -37),
            Vec3::new(1000, 2000, -3000),
        ];
        for v in vectors {
            let u = v.normalize();
            let mag = u.length();
            assert!(
                (250..=257).contains(&mag),
                "normalize({:?}) has magnitude {}",
                v,
                mag
            );
        }
    }

    #[test]
    fn test_normalize_zero_vector_is_noop() {
        assert_eq!(Vec3::zero().normalize(), Vec3::zero());
    }

    #[test]
    fn test_normalize_axis_is_exact_unit() {
        assert_eq!(Vec3::new(0, -73, 0).normalize(), Vec3::new(0, -UNIT, 0));
        assert_eq!(Vec3::new(512, 0, 0).normalize(), Vec3::new(UNIT, 0, 0));
    }

    #[test]
    fn test_fp_roundtrip() {
        assert_eq!(fp_div(50, UNIT), 50);
        assert_eq!(fp_mul(50, UNIT), 50);
        assert_eq!(fp_mul(100, -UNIT), -100);
    }
}
