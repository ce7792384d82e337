//! Pointer-driven parallax tilt.
//!
//! Maps a pointer offset from an element's center to rotation angles
//! (degrees). Rotation about X follows the vertical offset with the sign
//! flipped so the element leans toward the pointer.

use super::scroll::interpolate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };
}

/// Linear offset → angle mapping over a symmetric input range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltRange {
    /// Offsets beyond ±range clamp
    pub range: f32,
    /// Angle at +range
    pub max_angle: f32,
}

/// Hero backdrop: ±300 px → ±10°
pub const HERO_TILT: TiltRange = TiltRange {
    range: 300.0,
    max_angle: 10.0,
};

/// Service cards: ±150 px → ±2°
pub const CARD_TILT: TiltRange = TiltRange {
    range: 150.0,
    max_angle: 2.0,
};

impl TiltRange {
    pub fn tilt(&self, offset_x: f32, offset_y: f32) -> Tilt {
        let stops = [-self.range, self.range];
        Tilt {
            rotate_x: interpolate(offset_y, &stops, &[self.max_angle, -self.max_angle]),
            rotate_y: interpolate(offset_x, &stops, &[-self.max_angle, self.max_angle]),
        }
    }
}

/// Pointer offset from the center of `rect` (`[min_x, min_y, max_x, max_y]`).
pub fn center_offset(pointer: [f32; 2], rect: [f32; 4]) -> [f32; 2] {
    let cx = (rect[0] + rect[2]) * 0.5;
    let cy = (rect[1] + rect[3]) * 0.5;
    [pointer[0] - cx, pointer[1] - cy]
}

/// Same offset normalized by the half extents, so the edges are ±1.
pub fn normalized_offset(pointer: [f32; 2], rect: [f32; 4]) -> [f32; 2] {
    let [dx, dy] = center_offset(pointer, rect);
    let half_w = ((rect[2] - rect[0]) * 0.5).max(1.0);
    let half_h = ((rect[3] - rect[1]) * 0.5).max(1.0);
    [dx / half_w, dy / half_h]
}

/// Avatar head follow: normalized offset → (rotate_x, rotate_y).
pub fn head_follow(normalized: [f32; 2]) -> Tilt {
    Tilt {
        rotate_x: -normalized[1] * 10.0,
        rotate_y: normalized[0] * 15.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_tilt_maps_and_clamps() {
        assert_eq!(HERO_TILT.tilt(0.0, 0.0), Tilt::FLAT);
        let t = HERO_TILT.tilt(300.0, -300.0);
        assert_eq!(t.rotate_y, 10.0);
        assert_eq!(t.rotate_x, 10.0);
        let t = HERO_TILT.tilt(-900.0, 900.0);
        assert_eq!(t.rotate_y, -10.0);
        assert_eq!(t.rotate_x, -10.0);
        assert!((HERO_TILT.tilt(150.0, 0.0).rotate_y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn card_tilt_is_subtle() {
        let t = CARD_TILT.tilt(75.0, 150.0);
        assert!((t.rotate_y - 1.0).abs() < 1e-5);
        assert_eq!(t.rotate_x, -2.0);
    }

    #[test]
    fn offsets_relative_to_center() {
        let rect = [100.0, 100.0, 300.0, 200.0];
        assert_eq!(center_offset([200.0, 150.0], rect), [0.0, 0.0]);
        assert_eq!(normalized_offset([300.0, 100.0], rect), [1.0, -1.0]);
        let head = head_follow([1.0, -1.0]);
        assert_eq!(head.rotate_y, 15.0);
        assert_eq!(head.rotate_x, 10.0);
    }
}
