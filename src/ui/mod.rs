//! Stateless egui painting helpers shared by the showcase sections.
//!
//! Colors come in as `[u8; 3]` from `lumen_folio::content`; everything here
//! turns them into egui shapes.

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke};

// ─── Colors ──────────────────────────────────────────────────────────────────

pub fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// `c` at `alpha` in 0..=1.
pub fn rgba(c: [u8; 3], alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], a)
}

pub fn white(alpha: f32) -> Color32 {
    rgba([0xFF, 0xFF, 0xFF], alpha)
}

// ─── Shapes ──────────────────────────────────────────────────────────────────

/// Frosted card: faint fill plus a hairline border.
pub fn glass_card(painter: &egui::Painter, rect: Rect, rounding: f32, border: Color32) {
    painter.rect_filled(rect, rounding, white(0.02));
    painter.rect_stroke(rect, rounding, Stroke::new(1.0, border));
}

/// Left-to-right linear gradient over `rect`.
pub fn gradient_rect(painter: &egui::Painter, rect: Rect, from: Color32, to: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), from);
    mesh.colored_vertex(rect.right_top(), to);
    mesh.colored_vertex(rect.right_bottom(), to);
    mesh.colored_vertex(rect.left_bottom(), from);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Top-to-bottom linear gradient over `rect`.
pub fn vertical_gradient(painter: &egui::Painter, rect: Rect, top: Color32, bottom: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Soft round glow; concentric circles stand in for a blur filter.
pub fn glow(painter: &egui::Painter, center: Pos2, radius: f32, color: [u8; 3], alpha: f32) {
    const RINGS: usize = 6;
    for i in 0..RINGS {
        let t = (i + 1) as f32 / RINGS as f32;
        let ring_alpha = alpha * t / RINGS as f32 * 2.0;
        painter.circle_filled(center, radius * (1.0 - t * 0.8), rgba(color, ring_alpha));
    }
}

/// Paint `texture` filling `rect`, cropped to keep its aspect ratio.
///
/// `zoom` > 1 crops further toward the center.
pub fn cover_image(painter: &egui::Painter, rect: Rect, texture: &egui::TextureHandle, zoom: f32) {
    let [tw, th] = texture.size();
    let tex_aspect = tw as f32 / th.max(1) as f32;
    let rect_aspect = rect.width() / rect.height().max(1.0);
    let (uw, uh) = if tex_aspect > rect_aspect {
        (rect_aspect / tex_aspect, 1.0)
    } else {
        (1.0, tex_aspect / rect_aspect)
    };
    let zoom = zoom.max(1.0);
    let uv = Rect::from_center_size(egui::pos2(0.5, 0.5), egui::vec2(uw / zoom, uh / zoom));
    painter.image(texture.id(), rect, uv, Color32::WHITE);
}

/// Paint wrapped text at `pos`, returning the occupied rect.
pub fn wrapped_text(
    painter: &egui::Painter,
    pos: Pos2,
    text: &str,
    size: f32,
    color: Color32,
    width: f32,
) -> Rect {
    let galley = painter.layout(
        text.to_owned(),
        egui::FontId::proportional(size),
        color,
        width.max(1.0),
    );
    let rect = Rect::from_min_size(pos, galley.size());
    painter.galley(pos, galley, color);
    rect
}

/// Lay out `add` in a column at most `max_width` wide, centered horizontally.
pub fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let available = ui.available_width();
    let width = available.min(max_width);
    let margin = ((available - width) * 0.5).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add(ui)
        })
        .inner
    })
    .inner
}

/// Centered section heading with a subtitle underneath.
pub fn section_heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(egui::RichText::new(title).size(40.0).strong().color(Color32::WHITE));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(subtitle).size(16.0).color(white(0.6)));
        ui.add_space(32.0);
    });
}

/// Five-star rating row.
pub fn stars(painter: &egui::Painter, pos: Pos2, rating: u8) {
    for i in 0..5u8 {
        let color = if i < rating {
            Color32::from_rgb(0xFF, 0xD7, 0x00)
        } else {
            white(0.15)
        };
        painter.text(
            pos + egui::vec2(i as f32 * 18.0, 0.0),
            egui::Align2::LEFT_TOP,
            "\u{2605}",
            egui::FontId::proportional(16.0),
            color,
        );
    }
}

// ─── Text utilities ──────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

/// Up to two uppercase initials, used when a cover image is unavailable.
pub fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Stable pseudo-random value in [0, 1) for decorative placement.
pub fn hash01(seed: u32) -> f32 {
    let mut h = seed.wrapping_mul(0x9E37_79B9) ^ 0x85EB_CA6B;
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    (h & 0x00FF_FFFF) as f32 / 16_777_216.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_keeps_short_strings() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer sentence", 8), "a lon...");
    }

    #[test]
    fn initials_skip_symbols() {
        assert_eq!(initials("Premium E-commerce"), "PE");
        assert_eq!(initials("SaaS & Web App"), "SW");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn hash_is_stable_and_in_range() {
        for seed in 0..256 {
            let v = hash01(seed);
            assert!((0.0..1.0).contains(&v));
            assert_eq!(v, hash01(seed));
        }
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(rgba([10, 20, 30], 2.0).a(), 255);
        assert_eq!(rgba([10, 20, 30], -1.0).a(), 0);
    }
}
