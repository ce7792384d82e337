//! Carousel slot layout: pure mapping from relative offset to transform.
//!
//! Nothing here is stored: the renderer asks for the layout of each visible
//! offset every frame and springs toward it.

use crate::motion::SpringConfig;

/// Slot spacing on wide viewports
pub const SLOT_WIDTH: f32 = 400.0;
/// Slot spacing below the narrow breakpoint
pub const COMPACT_SLOT_WIDTH: f32 = 280.0;
/// Card size `[w, h]` on wide viewports
pub const CARD_SIZE: [f32; 2] = [500.0, 350.0];
/// Card size below the narrow breakpoint
pub const COMPACT_CARD_SIZE: [f32; 2] = [280.0, 320.0];

/// Rotation about the vertical axis per unit offset (degrees)
pub const ROTATE_Y_STEP: f32 = 15.0;
/// Same, while hovering a side card
pub const HOVER_ROTATE_Y_STEP: f32 = 12.0;
pub const SIDE_SCALE: f32 = 0.75;
pub const SIDE_OPACITY: f32 = 0.5;
pub const CENTER_DEPTH: f32 = 100.0;

/// Slide transition spring
pub const SLIDE_SPRING: SpringConfig = SpringConfig::new(300.0, 30.0, 1.0);

/// Target transform of one carousel card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    /// Horizontal offset from the carousel center (px)
    pub x: f32,
    /// Depth toward the viewer (px)
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Degrees about the vertical axis
    pub rotate_y: f32,
    /// Paint order; higher draws on top
    pub z_index: u8,
}

pub fn is_compact(viewport_width: f32, breakpoint: f32) -> bool {
    viewport_width < breakpoint
}

pub fn slot_width(viewport_width: f32, breakpoint: f32) -> f32 {
    if is_compact(viewport_width, breakpoint) {
        COMPACT_SLOT_WIDTH
    } else {
        SLOT_WIDTH
    }
}

pub fn card_size(viewport_width: f32, breakpoint: f32) -> [f32; 2] {
    if is_compact(viewport_width, breakpoint) {
        COMPACT_CARD_SIZE
    } else {
        CARD_SIZE
    }
}

/// Resting layout for the card at `offset`.
pub fn slot_layout(offset: i32, slot_width: f32) -> SlotLayout {
    let center = offset == 0;
    SlotLayout {
        x: offset as f32 * slot_width,
        z: if center { CENTER_DEPTH } else { 0.0 },
        scale: if center { 1.0 } else { SIDE_SCALE },
        opacity: if center { 1.0 } else { SIDE_OPACITY },
        rotate_y: offset as f32 * ROTATE_Y_STEP,
        z_index: if center { 10 } else { 1 },
    }
}

/// Layout while the pointer hovers the card at `offset`.
pub fn hovered_layout(offset: i32, slot_width: f32) -> SlotLayout {
    let mut layout = slot_layout(offset, slot_width);
    if offset == 0 {
        layout.scale = 1.02;
        layout.rotate_y = 0.0;
    } else {
        layout.scale = 0.78;
        layout.rotate_y = offset as f32 * HOVER_ROTATE_Y_STEP;
    }
    layout
}

/// Horizontal squash factor for a card rotated by `rotate_y` degrees.
///
/// A flat renderer has no perspective; scaling width by cos(angle) reads
/// as a turn.
pub fn projected_width_factor(rotate_y: f32) -> f32 {
    rotate_y.to_radians().cos().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_sides() {
        let c = slot_layout(0, SLOT_WIDTH);
        assert_eq!(c.x, 0.0);
        assert_eq!(c.scale, 1.0);
        assert_eq!(c.opacity, 1.0);
        assert_eq!(c.rotate_y, 0.0);
        assert_eq!(c.z, 100.0);
        assert_eq!(c.z_index, 10);

        let l = slot_layout(-1, SLOT_WIDTH);
        assert_eq!(l.x, -400.0);
        assert_eq!(l.scale, 0.75);
        assert_eq!(l.opacity, 0.5);
        assert_eq!(l.rotate_y, -15.0);
        assert_eq!(l.z_index, 1);

        let r = slot_layout(1, COMPACT_SLOT_WIDTH);
        assert_eq!(r.x, 280.0);
        assert_eq!(r.rotate_y, 15.0);
    }

    #[test]
    fn narrow_viewports_use_compact_slots() {
        assert_eq!(slot_width(767.0, 768.0), COMPACT_SLOT_WIDTH);
        assert_eq!(slot_width(768.0, 768.0), SLOT_WIDTH);
        assert_eq!(card_size(500.0, 768.0), COMPACT_CARD_SIZE);
    }

    #[test]
    fn hover_variant() {
        let c = hovered_layout(0, SLOT_WIDTH);
        assert_eq!(c.scale, 1.02);
        assert_eq!(c.rotate_y, 0.0);
        let r = hovered_layout(1, SLOT_WIDTH);
        assert_eq!(r.scale, 0.78);
        assert_eq!(r.rotate_y, 12.0);
        assert_eq!(r.x, 400.0);
    }

    #[test]
    fn rotation_narrows_projection() {
        assert_eq!(projected_width_factor(0.0), 1.0);
        assert!(projected_width_factor(15.0) < 1.0);
        assert!((projected_width_factor(-15.0) - projected_width_factor(15.0)).abs() < 1e-6);
    }
}
