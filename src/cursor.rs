//! Custom cursor: dot, ring and trail chasing the pointer on springs.
//!
//! Each layer is a [`Spring2`] with its own stiffness so the three lag the
//! pointer by different amounts. A touch sample flips the cursor into touch
//! presentation (softer springs, dimmer layers); a mouse sample flips it back.

use crate::motion::{Spring, Spring2, SpringConfig};
use crate::signals::PointerSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorLayer {
    Dot,
    Ring,
    Trail,
}

pub const LAYERS: [CursorLayer; 3] = [CursorLayer::Trail, CursorLayer::Ring, CursorLayer::Dot];

/// Static look of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    /// Half size; the layer's top-left sits at pointer - anchor
    pub anchor: f32,
    pub hover_scale: f32,
    pub opacity_mouse: f32,
    pub opacity_touch: f32,
    pub spring_mouse: SpringConfig,
    pub spring_touch: SpringConfig,
}

pub fn layer_style(layer: CursorLayer) -> LayerStyle {
    match layer {
        CursorLayer::Dot => LayerStyle {
            anchor: 10.0,
            hover_scale: 1.5,
            opacity_mouse: 0.8,
            opacity_touch: 0.6,
            spring_mouse: SpringConfig::new(500.0, 28.0, 0.5),
            spring_touch: SpringConfig::new(300.0, 20.0, 0.5),
        },
        CursorLayer::Ring => LayerStyle {
            anchor: 20.0,
            hover_scale: 1.8,
            opacity_mouse: 1.0,
            opacity_touch: 0.5,
            spring_mouse: SpringConfig::new(150.0, 15.0, 0.8),
            spring_touch: SpringConfig::new(100.0, 12.0, 0.8),
        },
        CursorLayer::Trail => LayerStyle {
            anchor: 2.0,
            hover_scale: 1.0,
            opacity_mouse: 1.0,
            opacity_touch: 0.4,
            spring_mouse: SpringConfig::new(100.0, 20.0, 1.0),
            spring_touch: SpringConfig::new(80.0, 20.0, 1.0),
        },
    }
}

/// Where and how to draw one layer this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFrame {
    pub layer: CursorLayer,
    /// Top-left corner of the layer box
    pub origin: [f32; 2],
    /// Box size before scaling
    pub size: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl LayerFrame {
    pub fn center(&self) -> [f32; 2] {
        [self.origin[0] + self.size * 0.5, self.origin[1] + self.size * 0.5]
    }
}

struct LayerState {
    layer: CursorLayer,
    position: Spring2,
    scale: Spring,
}

pub struct CustomCursor {
    pointer: [f32; 2],
    touch_mode: bool,
    hovering: bool,
    hover_marked: bool,
    layers: Vec<LayerState>,
}

impl CustomCursor {
    pub fn new() -> Self {
        let layers = LAYERS
            .iter()
            .map(|&layer| {
                let style = layer_style(layer);
                LayerState {
                    layer,
                    position: Spring2::new([0.0, 0.0], style.spring_mouse),
                    scale: Spring::new(1.0, style.spring_mouse),
                }
            })
            .collect();
        Self {
            pointer: [0.0, 0.0],
            touch_mode: false,
            hovering: false,
            hover_marked: false,
            layers,
        }
    }

    /// Hidden until a real position is observed; (0, 0) counts as none.
    pub fn is_visible(&self) -> bool {
        self.pointer != [0.0, 0.0]
    }

    pub fn is_touch_mode(&self) -> bool {
        self.touch_mode
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, source: PointerSource) {
        let first = !self.is_visible();
        self.pointer = [x, y];
        self.set_touch_mode(source == PointerSource::Touch);

        for state in &mut self.layers {
            let anchor = layer_style(state.layer).anchor;
            let target = [x - anchor, y - anchor];
            if first {
                state.position.snap(target);
            } else {
                state.position.set_target(target);
            }
        }
    }

    fn set_touch_mode(&mut self, touch: bool) {
        if self.touch_mode == touch {
            return;
        }
        self.touch_mode = touch;
        for state in &mut self.layers {
            let style = layer_style(state.layer);
            let cfg = if touch { style.spring_touch } else { style.spring_mouse };
            state.position.set_config(cfg);
            state.scale.config = cfg;
        }
    }

    /// Reset the per-frame hover flag. Call before laying out widgets.
    pub fn begin_frame(&mut self) {
        self.hover_marked = false;
    }

    /// Something interactive is under the pointer this frame.
    pub fn mark_hover(&mut self) {
        self.hover_marked = true;
    }

    /// Latch this frame's hover state and advance the springs.
    ///
    /// Returns `true` while any layer is still moving.
    pub fn end_frame(&mut self, dt: f32) -> bool {
        self.hovering = self.hover_marked;
        let mut moving = false;
        for state in &mut self.layers {
            let style = layer_style(state.layer);
            state
                .scale
                .set_target(if self.hovering { style.hover_scale } else { 1.0 });
            moving |= state.position.step(dt);
            moving |= state.scale.step(dt);
        }
        moving
    }

    /// Layers back to front, empty while hidden.
    pub fn frames(&self) -> Vec<LayerFrame> {
        if !self.is_visible() {
            return Vec::new();
        }
        self.layers
            .iter()
            .map(|state| {
                let style = layer_style(state.layer);
                LayerFrame {
                    layer: state.layer,
                    origin: state.position.value(),
                    size: style.anchor * 2.0,
                    scale: state.scale.value,
                    opacity: if self.touch_mode {
                        style.opacity_touch
                    } else {
                        style.opacity_mouse
                    },
                }
            })
            .collect()
    }
}

impl Default for CustomCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(c: &mut CustomCursor) {
        for _ in 0..600 {
            if !c.end_frame(1.0 / 60.0) {
                break;
            }
        }
    }

    #[test]
    fn hidden_until_first_position() {
        let mut c = CustomCursor::new();
        assert!(c.frames().is_empty());
        c.on_pointer_move(0.0, 0.0, PointerSource::Mouse);
        assert!(!c.is_visible());
        c.on_pointer_move(100.0, 50.0, PointerSource::Mouse);
        assert_eq!(c.frames().len(), 3);
    }

    #[test]
    fn first_position_snaps_then_layers_follow() {
        let mut c = CustomCursor::new();
        c.on_pointer_move(100.0, 100.0, PointerSource::Mouse);
        let dot = c.frames().into_iter().find(|f| f.layer == CursorLayer::Dot).unwrap();
        assert_eq!(dot.origin, [90.0, 90.0]);
        assert_eq!(dot.center(), [100.0, 100.0]);

        c.on_pointer_move(300.0, 100.0, PointerSource::Mouse);
        c.end_frame(1.0 / 60.0);
        let frames = c.frames();
        let dot = frames.iter().find(|f| f.layer == CursorLayer::Dot).unwrap();
        let ring = frames.iter().find(|f| f.layer == CursorLayer::Ring).unwrap();
        // The stiffer dot closes more of the gap than the ring
        assert!(dot.center()[0] - 100.0 > ring.center()[0] - 100.0);

        settle(&mut c);
        for f in c.frames() {
            assert!((f.center()[0] - 300.0).abs() < 0.05);
        }
    }

    #[test]
    fn hover_scales_dot_and_ring() {
        let mut c = CustomCursor::new();
        c.on_pointer_move(10.0, 10.0, PointerSource::Mouse);
        c.begin_frame();
        c.mark_hover();
        settle(&mut c);
        assert!(c.is_hovering());
        let frames = c.frames();
        let scale = |l| frames.iter().find(|f| f.layer == l).unwrap().scale;
        assert_eq!(scale(CursorLayer::Dot), 1.5);
        assert_eq!(scale(CursorLayer::Ring), 1.8);
        assert_eq!(scale(CursorLayer::Trail), 1.0);

        c.begin_frame();
        settle(&mut c);
        assert!(!c.is_hovering());
    }

    #[test]
    fn touch_samples_dim_the_cursor() {
        let mut c = CustomCursor::new();
        c.on_pointer_move(10.0, 10.0, PointerSource::Touch);
        assert!(c.is_touch_mode());
        let dot = c.frames().into_iter().find(|f| f.layer == CursorLayer::Dot).unwrap();
        assert_eq!(dot.opacity, 0.6);

        c.on_pointer_move(12.0, 10.0, PointerSource::Mouse);
        assert!(!c.is_touch_mode());
    }
}
