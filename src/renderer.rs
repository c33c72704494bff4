//! Frame rendering.
//!
//! Drives the pipeline over every pixel: ray construction, ground-plane
//! intersection, shading. Runs in three explicit passes so the water
//! reflection's read-after-write dependency never hinges on scan order:
//!
//! 1. base pass — shades every pixel; water cells get their flat tint and
//!    are recorded for later,
//! 2. reflection pass — resolves recorded water cells against the now
//!    fully committed buffer,
//! 3. darkness pass — blends the whole frame toward black from the sun
//!    elevation.
//!
//! Pass 1 writes are independent of each other, so any pixel order (or a
//! future parallel split) produces the same frame.

use crate::fixed::{Vec2, Vec3};
use crate::framebuffer::FrameBuffer;
use crate::params::Params;
use crate::plane::intersect;
use crate::ray::pixel_ray;
use crate::shade::{darken, darkness, Shaded, Shader};
use crate::trig::TrigTable;

/// Camera placement: a world-unit position above the ground plane and a
/// yaw heading used as a trig-table index (wraps modulo 256).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub heading: i32,
}

/// A water cell recorded by the base pass, waiting for its reflection.
struct PendingWater {
    x: i32,
    y: i32,
    distance: i32,
}

/// Render one complete frame.
pub fn render(camera: &Camera, sun_direction: Vec3, params: &Params) -> FrameBuffer {
    let trig = TrigTable::new(params.phase);
    let sun = sun_direction.normalize();
    let shader = Shader::new(&trig, params, sun);

    let mut buffer = FrameBuffer::new();
    let pending = base_pass(&mut buffer, camera, &shader, &trig);
    if params.reflections {
        reflection_pass(&mut buffer, &shader, &pending);
    }
    darkness_pass(&mut buffer, darkness(sun));
    buffer
}

/// Pass 1: shade every pixel. Water cells are written with their flat base
/// color and returned for the reflection pass.
fn base_pass(
    buffer: &mut FrameBuffer,
    camera: &Camera,
    shader: &Shader,
    trig: &TrigTable,
) -> Vec<PendingWater> {
    let mut pending = Vec::new();
    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            let direction = pixel_ray(Vec2::new(x, y), camera.heading, trig);
            let intersection = intersect(camera.position, direction);
            match shader.shade(direction, &intersection) {
                Shaded::Opaque(r, g, b) => buffer.set_pixel(x, y, r, g, b),
                Shaded::Water { base, distance } => {
                    buffer.set_pixel(x, y, base.0, base.1, base.2);
                    pending.push(PendingWater { x, y, distance });
                },
            }
        }
    }
    pending
}

/// Pass 2: resolve water cells against the vertically mirrored row, which
/// the base pass has already committed.
fn reflection_pass(buffer: &mut FrameBuffer, shader: &Shader, pending: &[PendingWater]) {
    let height = buffer.height() as i32;
    for water in pending {
        let mirrored = buffer
            .get_pixel(water.x, height - water.y)
            .unwrap_or((0, 0, 0));
        let (r, g, b) = shader.resolve_water(mirrored, water.distance);
        buffer.set_pixel(water.x, water.y, r, g, b);
    }
}

/// Pass 3: whole-frame darkening from the sun elevation.
fn darkness_pass(buffer: &mut FrameBuffer, darkness: i32) {
    if darkness == 0 {
        return;
    }
    for chunk in buffer.as_bytes_mut().chunks_exact_mut(3) {
        let (r, g, b) = darken(chunk[0], chunk[1], chunk[2], darkness);
        chunk[0] = r;
        chunk[1] = g;
        chunk[2] = b;
    }
}
