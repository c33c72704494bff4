//! Binary PPM (P6) encoder: a text header followed by the raw RGB bytes.

use std::io::Write;

use crate::framebuffer::FrameBuffer;

/// Serialize a finished frame as P6 to any writer.
pub fn write_ppm<W: Write>(out: &mut W, buffer: &FrameBuffer) -> Result<(), String> {
    let header = format!("P6\n{} {}\n255\n", buffer.width(), buffer.height());
    out.write_all(header.as_bytes()).map_err(|e| e.to_string())?;
    out.write_all(buffer.as_bytes()).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())
}
