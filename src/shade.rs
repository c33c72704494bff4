//! Procedural scene shading.
//!
//! One pixel at a time: sky (dusk base, table-noise clouds, a glare cone
//! around the sun with an atmospheric gradient outside it), ground
//! (road/grass/water tiles bucketed on coarse world coordinates), and the
//! horizon line. Water cells are not finished here — the base pass writes
//! their flat color and the renderer resolves reflections in a second pass
//! once the mirrored rows are committed.
//!
//! All channel math is i32 and stored with a wrapping byte cast, matching
//! the renderer's fixed-point conventions.

use crate::fixed::Vec3;
use crate::params::Params;
use crate::plane::Intersection;
use crate::trig::TrigTable;

// Dusk-red sky base, kept wherever the glare cone suppresses the gradient.
const SKY_BASE: (u8, u8, u8) = (188, 0, 45);
// Flat brownish-gray road surface.
const ROAD: (u8, u8, u8) = (100, 100, 110);

// Salts for the road grain hash. Two differently-salted samples are summed
// so single-hash banding cancels out.
const GRAIN_SALT_A: u32 = 0x9e37;
const GRAIN_SALT_B: u32 = 0x85eb;

/// One shaded cell. Water carries its intersection distance so the
/// reflection pass can attenuate it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shaded {
    Opaque(u8, u8, u8),
    Water { base: (u8, u8, u8), distance: i32 },
}

/// Per-frame shading state: read-only tables, tunables, and the normalized
/// sun direction.
pub struct Shader<'a> {
    trig: &'a TrigTable,
    params: &'a Params,
    sun: Vec3,
}

impl<'a> Shader<'a> {
    pub fn new(trig: &'a TrigTable, params: &'a Params, sun: Vec3) -> Self {
        Self { trig, params, sun }
    }

    /// Shade one pixel from its ray direction and intersection.
    pub fn shade(&self, direction: Vec3, intersection: &Intersection) -> Shaded {
        match *intersection {
            Intersection::Sky { hit } => {
                let (r, g, b) = self.sky(direction, hit);
                Shaded::Opaque(r, g, b)
            },
            Intersection::Ground { hit, distance } => self.ground(hit, distance),
            Intersection::Horizon => {
                let (r, g, b) = gradient(0);
                Shaded::Opaque(r, g, b)
            },
        }
    }

    /// Sky branch: cloud noise first, then the glare cone test.
    fn sky(&self, direction: Vec3, hit: Vec3) -> (u8, u8, u8) {
        let cloud = self
            .trig
            .cos((self.trig.cos(hit.z >> 11) + (hit.x >> 8)) >> 1)
            + self.trig.cos(hit.z / 500) / 4
            + self.params.cloud_bias;

        if cloud < 0 {
            // Grayscale cloud: brightness is the magnitude, masked to a byte.
            let v = ((-cloud) & 255) as u8;
            (v, v, v)
        } else if direction.dot(&self.sun) < self.params.glare_threshold {
            gradient(direction.y)
        } else {
            SKY_BASE
        }
    }

    /// Ground branch: tile classification on coarse world buckets.
    fn ground(&self, hit: Vec3, distance: i32) -> Shaded {
        let bucket_x = (hit.x >> 13) % 7;
        let bucket_z = (hit.z >> 13) % 9;

        if bucket_x * bucket_z == 0 {
            let (mut r, mut g, mut b) = (ROAD.0 as i32, ROAD.1 as i32, ROAD.2 as i32);
            if self.params.texture_grain {
                let grain = road_grain(hit.x >> 6, hit.z >> 6);
                r = (r + grain).clamp(0, 255);
                g = (g + grain).clamp(0, 255);
                b = (b + grain).clamp(0, 255);
            }
            return Shaded::Opaque(r as u8, g as u8, b as u8);
        }

        // Grass green rides the sine table; a negative value wraps above 200
        // in the byte store and reclassifies the cell as water.
        let green = (self.trig.sin(hit.x / 20) / 2 + 55) as u8;
        if green > 200 {
            let (tr, tg, tb) = self.params.water_tint;
            return Shaded::Water {
                base: (tr, tg, tb),
                distance,
            };
        }
        Shaded::Opaque(60, green, 0)
    }

    /// Resolve a water pixel against the committed pixel on the mirrored row:
    /// 50/50 blend toward the tint, distance attenuation, brightness ceiling.
    pub fn resolve_water(&self, mirrored: (u8, u8, u8), distance: i32) -> (u8, u8, u8) {
        let (tr, tg, tb) = self.params.water_tint;
        // Distance is in world units; water starts over a thousand units out,
        // so the fade works on a 16-unit lattice to span the visible range.
        let fade = (255 - 2 * (distance >> 4)).clamp(0, 255);
        let ceiling = self.params.water_ceiling as i32;

        let channel = |m: u8, t: u8| -> u8 {
            let blended = (m as i32 + t as i32) / 2;
            (blended * fade / 255).min(ceiling) as u8
        };

        (
            channel(mirrored.0, tr),
            channel(mirrored.1, tg),
            channel(mirrored.2, tb),
        )
    }
}

/// Atmospheric gradient: pale blue at the horizon, bending toward the dusk
/// base as the ray climbs. Also used verbatim for the horizon line at y = 0.
#[inline]
fn gradient(dir_y: i32) -> (u8, u8, u8) {
    (
        (128 - 128 * dir_y / 255) as u8,
        (179 - 179 * dir_y / 255) as u8,
        (255 - 76 * dir_y / 255) as u8,
    )
}

/// Integer spatial hash for road grain, sampled on a coarse world lattice.
/// Salted twice and summed, rescaled to a small signed delta.
fn road_grain(x: i32, z: i32) -> i32 {
    let a = tile_hash(x, 0, z, GRAIN_SALT_A);
    let b = tile_hash(x, 0, z, GRAIN_SALT_B);
    ((a + b) >> 12) - 8
}

/// Hash-based pseudo-random value for integer grid coordinates, in [0, 0x7fff].
#[inline]
fn tile_hash(x: i32, y: i32, z: i32, seed: u32) -> i32 {
    let mut h = seed.wrapping_add(x as u32).wrapping_mul(374761393);
    h = h.wrapping_add(y as u32).wrapping_mul(668265263);
    h = h.wrapping_add(z as u32).wrapping_mul(2147483647);
    h = (h ^ (h >> 13)).wrapping_mul(1274126177);
    h ^= h >> 16;
    (h & 0x7fff) as i32
}

/// Per-frame darkness factor from sun elevation: 0 at or above the horizon
/// scale, saturating to 255 as the sun drops.
#[inline]
pub fn darkness(sun: Vec3) -> i32 {
    (-2 * sun.y).clamp(0, 255)
}

/// Blend one pixel toward black. Red and green fade at the full darkness
/// rate; blue at a quarter rate, which keeps the night tint blue.
#[inline]
pub fn darken(r: u8, g: u8, b: u8, darkness: i32) -> (u8, u8, u8) {
    (
        (r as i32 * (255 - darkness) / 255) as u8,
        (g as i32 * (255 - darkness) / 255) as u8,
        (b as i32 * (255 - darkness / 4) / 255) as u8,
    )
}
