//! Per-pixel ray construction.
//!
//! Maps a pixel coordinate plus the camera heading to a normalized 3D ray
//! direction. The horizontal axis goes through a yaw rotation from the trig
//! tables; the vertical axis is a plain linear map scaled by the frame
//! height, a deliberately non-physical perspective approximation.

use crate::fixed::{Vec2, Vec3};
use crate::framebuffer::{HEIGHT, WIDTH};
use crate::trig::TrigTable;

/// Build the ray direction for one pixel. Pure function; the heading wraps
/// modulo 256 inside the table lookups.
pub fn pixel_ray(pixel: Vec2, heading: i32, trig: &TrigTable) -> Vec3 {
    let w = WIDTH as i32;
    let h = HEIGHT as i32;

    // Center the view: the middle of the frame maps to offset (0, 0).
    let offset = Vec2::new(w - (pixel.x << 1), h - (pixel.y << 1));

    let heading_cos = trig.cos(heading);
    let heading_sin = trig.sin(heading);

    let direction = Vec3::new(
        offset.x * heading_cos / h - heading_sin,
        (offset.y << 7) / h,
        offset.x * heading_sin / h + heading_cos,
    );

    direction.normalize()
}
