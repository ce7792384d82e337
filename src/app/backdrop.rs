//! Fixed backdrop layers: glow blobs, the ambient particle field, and the
//! custom cursor drawn above everything else.

use eframe::egui;
use egui::epaint::TextShape;
use egui::{pos2, vec2, Pos2, Stroke};

use lumen_folio::content::{ACCENT, DEEP_BLUE};
use lumen_folio::cursor::CursorLayer;
use lumen_folio::field::{Displacement, Particle};

use super::ShowcaseApp;
use crate::ui;

/// Particle label size before per-particle scale (px)
const LABEL_SIZE: f32 = 12.0;

impl ShowcaseApp {
    /// Paint the page backdrop. Call before the scroll area so it stays fixed.
    pub fn draw_backdrop(&mut self, ui: &mut egui::Ui, dt: f32) {
        let rect = ui.max_rect();
        let painter = ui.painter();

        ui::glow(
            painter,
            pos2(rect.left() + rect.width() * 0.25 + 190.0, rect.top() + 190.0),
            320.0,
            DEEP_BLUE,
            0.2,
        );
        ui::glow(
            painter,
            pos2(rect.right() - rect.width() * 0.25 - 190.0, rect.bottom() - rect.height() * 0.25 - 190.0),
            320.0,
            ACCENT,
            0.15,
        );

        for (particle, d) in self.ambient.field().rendered() {
            let Some(push) = self.particle_push.get_mut(particle.id) else {
                continue;
            };
            push.set_target([d.push_x, d.push_y]);
            push.step(dt);
            let [px, py] = push.value();
            let pos = pos2(particle.position[0] + px, particle.position[1] + py);
            paint_particle(painter, particle, &d, pos);
        }
    }

    /// Paint the spring-followed cursor layers and hide the OS cursor.
    pub fn draw_cursor(&self, ctx: &egui::Context) {
        let frames = self.cursor.frames();
        if frames.is_empty() {
            return;
        }
        if !self.cursor.is_touch_mode() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("custom_cursor"),
        ));
        for frame in frames {
            let [cx, cy] = frame.center();
            let center = pos2(cx, cy);
            let radius = frame.size * 0.5 * frame.scale;
            match frame.layer {
                CursorLayer::Trail => {
                    ui::glow(&painter, center, 15.0, ACCENT, 0.8 * frame.opacity);
                    painter.circle_filled(center, radius, ui::rgba(ACCENT, frame.opacity));
                }
                CursorLayer::Ring => {
                    ui::glow(&painter, center, radius + 20.0, ACCENT, 0.25 * frame.opacity);
                    painter.circle_stroke(
                        center,
                        radius,
                        Stroke::new(2.0, ui::rgba(ACCENT, frame.opacity)),
                    );
                }
                CursorLayer::Dot => {
                    painter.circle_filled(center, radius, ui::rgba(ACCENT, frame.opacity));
                }
            }
        }
    }
}

/// One drifting label, rotated about its own center.
fn paint_particle(painter: &egui::Painter, particle: &Particle, d: &Displacement, pos: Pos2) {
    if d.glow {
        ui::glow(painter, pos, 30.0 * particle.scale, ACCENT, d.influence * 0.5);
    }

    let color = ui::rgba(ACCENT, d.opacity);
    let galley = painter.layout_no_wrap(
        particle.label.to_owned(),
        egui::FontId::monospace(LABEL_SIZE * particle.scale),
        color,
    );
    let angle = (particle.rotation % 360.0).to_radians() as f32;
    let (sin, cos) = angle.sin_cos();
    let half = galley.size() * 0.5;
    let origin = pos - vec2(half.x * cos - half.y * sin, half.x * sin + half.y * cos);

    // Unfocused labels get a faint offset copy in place of a blur
    if !d.sharp {
        painter.add(
            TextShape::new(origin + vec2(0.8, 0.8), galley.clone(), color)
                .with_override_text_color(ui::rgba(ACCENT, d.opacity * 0.5))
                .with_angle(angle),
        );
    }
    painter.add(TextShape::new(origin, galley, color).with_angle(angle));
}
