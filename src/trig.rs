//! Table-Based Trigonometry
//!
//! A 256-entry sine table (amplitude 127, one full turn) and a cosine table
//! derived from it by a quarter-turn phase shift. Angles are table indices,
//! not radians; every lookup wraps with `& 255`.

/// Quarter-turn phase offset used by the original calibration.
pub const PHASE_CLASSIC: u8 = 65;

/// Quarter-turn phase offset used by the reworked calibration.
///
/// The two calibrations differ by one table step. Both are preserved as
/// selectable constants; see `Params::phase`.
pub const PHASE_REWORK: u8 = 64;

/// 127 * sin(2*pi*i/256) for i in [0, 255].
const SIN: [i8; 256] = [
    0, 3, 6, 9, 12, 16, 19, 22, 25, 28, 31, 34, 37, 40, 43, 46, 49, 51, 54, 57, 60, 63, 65, 68,
    71, 73, 76, 78, 81, 83, 85, 88, 90, 92, 94, 96, 98, 100, 102, 104, 106, 107, 109, 111, 112,
    113, 115, 116, 117, 118, 120, 121, 122, 122, 123, 124, 125, 125, 126, 126, 126, 127, 127, 127,
    127, 127, 127, 127, 126, 126, 126, 125, 125, 124, 123, 122, 122, 121, 120, 118, 117, 116, 115,
    113, 112, 111, 109, 107, 106, 104, 102, 100, 98, 96, 94, 92, 90, 88, 85, 83, 81, 78, 76, 73,
    71, 68, 65, 63, 60, 57, 54, 51, 49, 46, 43, 40, 37, 34, 31, 28, 25, 22, 19, 16, 12, 9, 6, 3,
    0, -3, -6, -9, -12, -16, -19, -22, -25, -28, -31, -34, -37, -40, -43, -46, -49, -51, -54, -57,
    -60, -63, -65, -68, -71, -73, -76, -78, -81, -83, -85, -88, -90, -92, -94, -96, -98, -100,
    -102, -104, -106, -107, -109, -111, -112, -113, -115, -116, -117, -118, -120, -121, -122,
    -122, -123, -124, -125, -125, -126, -126, -126, -127, -127, -127, -127, -127, -127, -127,
    -126, -126, -126, -125, -125, -124, -123, -122, -122, -121, -120, -118, -117, -116, -115,
    -113, -112, -111, -109, -107, -106, -104, -102, -100, -98, -96, -94, -92, -90, -88, -85, -83,
    -81, -78, -76, -73, -71, -68, -65, -63, -60, -57, -54, -51, -49, -46, -43, -40, -37, -34, -31,
    -28, -25, -22, -19, -16, -12, -9, -6, -3,
];

/// Immutable sine/cosine lookup tables. Built once per render, never mutated.
pub struct TrigTable {
    sin: [i32; 256],
    cos: [i32; 256],
}

impl TrigTable {
    /// Build the tables with the given quarter-turn phase offset
    /// ([`PHASE_CLASSIC`] or [`PHASE_REWORK`]).
    pub fn new(phase: u8) -> Self {
        let mut sin = [0i32; 256];
        let mut cos = [0i32; 256];
        for i in 0..256 {
            sin[i] = SIN[i] as i32;
            cos[i] = SIN[(i + phase as usize) & 255] as i32;
        }
        Self { sin, cos }
    }

    /// Sine lookup; the index wraps modulo 256.
    #[inline]
    pub fn sin(&self, index: i32) -> i32 {
        self.sin[(index & 255) as usize]
    }

    /// Cosine lookup; the index wraps modulo 256.
    #[inline]
    pub fn cos(&self, index: i32) -> i32 {
        self.cos[(index & 255) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_within_amplitude() {
        let t = TrigTable::new(PHASE_CLASSIC);
        for i in 0..256 {
            assert!((-127..=127).contains(&t.sin(i)));
            assert!((-127..=127).contains(&t.cos(i)));
        }
    }

    #[test]
    fn test_half_turn_antisymmetry() {
        let t = TrigTable::new(PHASE_CLASSIC);
        for i in 0..256 {
            assert_eq!(t.sin((i + 128) & 255), -t.sin(i), "at index {}", i);
        }
    }

    #[test]
    fn test_cos_is_phase_shifted_sin() {
        for phase in [PHASE_CLASSIC, PHASE_REWORK] {
            let t = TrigTable::new(phase);
            for i in 0..256 {
                assert_eq!(t.cos(i), t.sin(i + phase as i32), "phase {} index {}", phase, i);
            }
        }
    }

    #[test]
    fn test_index_wraparound() {
        let t = TrigTable::new(PHASE_CLASSIC);
        assert_eq!(t.sin(256), t.sin(0));
        assert_eq!(t.sin(-1), t.sin(255));
        assert_eq!(t.cos(1000), t.cos(1000 & 255));
    }

    #[test]
    fn test_cardinal_points() {
        let t = TrigTable::new(PHASE_REWORK);
        assert_eq!(t.sin(0), 0);
        assert_eq!(t.sin(64), 127);
        assert_eq!(t.sin(192), -127);
        assert_eq!(t.cos(0), 127);
        assert_eq!(t.cos(128), -127);
    }
}
