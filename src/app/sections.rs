//! Static page sections: hero, differentials, services, about, testimonials.
//!
//! Everything is painted with the `Ui` painter over space allocated in the
//! scroll area. Motion comes from the lib's springs, scroll ranges and tilt
//! maps; hover feeds the custom cursor.

use std::f32::consts::{PI, TAU};

use eframe::egui;
use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

use lumen_folio::carousel::layout::is_compact;
use lumen_folio::content::{
    Differential, Service, Testimonial, ABOUT_PARAGRAPHS, ACCENT, BACKGROUND, DEEP_BLUE,
    DIFFERENTIALS, HIGHLIGHTS, SERVICES, SKILLS, STATS, TESTIMONIALS,
};
use lumen_folio::motion::scroll::{fade_in_out, scale_in_out, IN_OUT_STOPS};
use lumen_folio::motion::tilt::{center_offset, head_follow, normalized_offset, CARD_TILT, HERO_TILT};

use super::{ShowcaseApp, CONTENT_WIDTH};
use crate::ui;

/// Gap between grid cells (px)
const GAP: f32 = 24.0;
/// Decorative dots floating over the hero
const HERO_DOTS: u32 = 30;
/// Hero icons: glyph, x and y as fractions of the hero, depth (px)
const HERO_ICONS: &[(&str, f32, f32, f32)] = &[
    ("\u{26A1}", 0.10, 0.20, 200.0),
    ("\u{1F3A8}", 0.80, 0.30, 150.0),
    ("\u{1F4BB}", 0.20, 0.70, 100.0),
    ("\u{1F680}", 0.85, 0.60, 180.0),
    ("\u{2699}", 0.50, 0.15, 120.0),
];

fn rect4(rect: Rect) -> [f32; 4] {
    [rect.min.x, rect.min.y, rect.max.x, rect.max.y]
}

/// Allocate a grid of equal cells and sense hover on each.
fn grid_cells(
    ui: &mut egui::Ui,
    salt: &'static str,
    count: usize,
    columns: usize,
    cell_height: f32,
) -> Vec<egui::Response> {
    let columns = columns.clamp(1, count.max(1));
    let rows = count.div_ceil(columns);
    let width = ui.available_width();
    let cell_width = (width - GAP * (columns - 1) as f32) / columns as f32;
    let height = rows as f32 * cell_height + rows.saturating_sub(1) as f32 * GAP;
    let (area, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

    (0..count)
        .map(|i| {
            let (row, col) = (i / columns, i % columns);
            let min = area.min
                + vec2(
                    col as f32 * (cell_width + GAP),
                    row as f32 * (cell_height + GAP),
                );
            let rect = Rect::from_min_size(min, vec2(cell_width, cell_height));
            ui.interact(rect, ui.id().with((salt, i)), Sense::hover())
        })
        .collect()
}

impl ShowcaseApp {
    /// Grid columns for the current viewport; one below the narrow breakpoint.
    pub fn columns(&self, wide: usize) -> usize {
        if is_compact(self.viewport.x, self.config.narrow_breakpoint) {
            1
        } else if self.viewport.x < 1024.0 {
            wide.min(2)
        } else {
            wide
        }
    }

    // ── Hero ──

    pub fn draw_hero(&mut self, ui: &mut egui::Ui, time: f32, dt: f32) {
        let width = ui.available_width();
        let height = self.viewport.y.max(560.0);
        let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
        let painter = ui.painter_at(rect);

        let target = match self.last_pointer {
            Some(p) if rect.contains(p) => {
                let [dx, dy] = center_offset([p.x, p.y], rect4(rect));
                let tilt = HERO_TILT.tilt(dx, dy);
                [tilt.rotate_x, tilt.rotate_y]
            }
            _ => [0.0, 0.0],
        };
        self.hero_tilt.set_target(target);
        self.hero_tilt.step(dt);
        let [rx, ry] = self.hero_tilt.value();
        // degrees → px
        let shift = vec2(ry, -rx) * 3.0;

        for i in 0..HERO_DOTS {
            let seed = i * 4;
            let period = 10.0 + ui::hash01(seed + 3) * 10.0;
            let wave = (time / period * TAU + ui::hash01(seed + 2) * TAU).sin();
            let pos = rect.min
                + vec2(
                    ui::hash01(seed) * rect.width(),
                    ui::hash01(seed + 1) * rect.height() - wave * 30.0,
                );
            let size = 1.0 + ui::hash01(seed + 3) * 2.0;
            painter.circle_filled(
                pos + shift * 0.5,
                size * (1.25 + 0.25 * wave),
                ui::rgba(ACCENT, 0.45 + 0.15 * wave),
            );
        }

        for (i, &(glyph, x, y, depth)) in HERO_ICONS.iter().enumerate() {
            let bob = (time / 8.0 * TAU + i as f32 * 0.5).sin();
            let pos = rect.min
                + vec2(x * rect.width(), y * rect.height() - 15.0 - bob * 15.0)
                + shift * (depth / 100.0);
            painter.text(pos, Align2::CENTER_CENTER, glyph, FontId::proportional(48.0), ui::white(0.2));
        }

        // Title block drifts with the pointer and fades as the page scrolls
        let fade = (1.0 - self.scroll_offset / (height * 0.6)).clamp(0.0, 1.0);
        let drift = self
            .last_pointer
            .map(|p| (p - rect.center()) * 0.02)
            .unwrap_or_default();
        let center = rect.center() + drift - vec2(0.0, self.scroll_offset * 0.3);
        let big = (width * 0.12).clamp(48.0, 144.0);

        ui::glow(&painter, center - vec2(0.0, big * 0.6), big * 3.0, ACCENT, 0.25 * fade);
        painter.text(
            center - vec2(0.0, big * 0.9),
            Align2::CENTER_CENTER,
            "FRONTEND",
            FontId::proportional(big),
            ui::white(fade),
        );
        painter.text(
            center - vec2(0.0, big * 0.05),
            Align2::CENTER_CENTER,
            "DEVELOPER",
            FontId::proportional(big * 0.66),
            ui::rgba(ACCENT, fade),
        );
        painter.text(
            center + vec2(0.0, big * 0.55),
            Align2::CENTER_CENTER,
            "WordPress & Elementor specialist",
            FontId::proportional(22.0),
            ui::rgba(ACCENT, fade),
        );
        painter.text(
            center + vec2(0.0, big * 0.55 + 36.0),
            Align2::CENTER_CENTER,
            "High-performance digital experiences with modern design and optimized code",
            FontId::proportional(16.0),
            ui::white(0.5 * fade),
        );

        let cta = Rect::from_center_size(center + vec2(0.0, big * 0.55 + 110.0), vec2(220.0, 52.0));
        let response = ui.interact(cta, ui.id().with("hero_cta"), Sense::click());
        let hover = ui.ctx().animate_bool(response.id, response.hovered());
        if response.hovered() {
            self.cursor.mark_hover();
        }
        painter.rect_filled(cta, 26.0, ui::rgba(ACCENT, (0.15 + 0.25 * hover) * fade));
        painter.rect_stroke(cta, 26.0, Stroke::new(1.0, ui::rgba(ACCENT, 0.6 * fade)));
        painter.text(
            cta.center(),
            Align2::CENTER_CENTER,
            "Explore Portfolio",
            FontId::proportional(18.0),
            ui::white(fade),
        );
        if response.clicked() {
            self.scroll_to_projects = true;
        }

        let bob = (time * PI).sin() * 5.0;
        let tip = pos2(rect.center().x, rect.bottom() - 40.0 + bob);
        let stroke = Stroke::new(2.0, ui::rgba(ACCENT, 0.6 * fade));
        painter.line_segment([tip + vec2(-10.0, -8.0), tip], stroke);
        painter.line_segment([tip, tip + vec2(10.0, -8.0)], stroke);
    }

    // ── Differentials ──

    pub fn draw_differentials(&mut self, ui: &mut egui::Ui, progress: f32, dt: f32) {
        let alpha = fade_in_out(progress);
        let scale = scale_in_out(progress);
        let columns = self.columns(4);

        ui::centered_column(ui, CONTENT_WIDTH, |ui| {
            ui.set_opacity(alpha);
            ui::section_heading(
                ui,
                "Differentials",
                "Creativity, technology and strategy combined to deliver excellence",
            );
            let cells = grid_cells(ui, "differential", DIFFERENTIALS.len(), columns, 280.0);
            for (i, (item, cell)) in DIFFERENTIALS.iter().zip(&cells).enumerate() {
                let hovered = cell.hovered();
                if hovered {
                    self.cursor.mark_hover();
                }
                let Some(lift) = self.differential_lifts.get_mut(i) else {
                    continue;
                };
                lift.set_target(if hovered { -8.0 } else { 0.0 });
                lift.step(dt);
                let rect = Rect::from_center_size(cell.rect.center(), cell.rect.size() * scale)
                    .translate(vec2(0.0, lift.value));
                paint_feature_card(ui, rect, item, hovered, cell.hover_pos());
            }
            ui.add_space(64.0);
        });
    }

    // ── Services ──

    pub fn draw_services(&mut self, ui: &mut egui::Ui, dt: f32) {
        let columns = self.columns(3);

        ui::centered_column(ui, CONTENT_WIDTH, |ui| {
            ui::section_heading(ui, "Services", "Complete web and WordPress development solutions");
            let cells = grid_cells(ui, "service", SERVICES.len(), columns, 430.0);
            for (i, (service, cell)) in SERVICES.iter().zip(&cells).enumerate() {
                let hovered = cell.hovered();
                if hovered {
                    self.cursor.mark_hover();
                }
                let target = match cell.hover_pos() {
                    Some(p) if hovered => {
                        let [dx, dy] = center_offset([p.x, p.y], rect4(cell.rect));
                        let tilt = CARD_TILT.tilt(dx, dy);
                        [tilt.rotate_x, tilt.rotate_y]
                    }
                    _ => [0.0, 0.0],
                };
                let Some(tilt) = self.service_tilts.get_mut(i) else {
                    continue;
                };
                tilt.set_target(target);
                tilt.step(dt);
                let tilt = tilt.value();

                let zoom = 1.0 + 0.1 * ui.ctx().animate_bool_with_time(cell.id, hovered, 0.6);
                let texture = self.image_textures.get(service.image);
                paint_service_card(ui, cell.rect, service, texture, tilt, zoom, hovered);
            }
            ui.add_space(64.0);
        });
    }

    // ── About ──

    pub fn draw_about(&mut self, ui: &mut egui::Ui, progress: f32, time: f32, dt: f32) {
        let alpha = fade_in_out(progress);
        // Skill bars fill while the section enters
        let reveal = (progress / IN_OUT_STOPS[1]).clamp(0.0, 1.0);
        let stacked = self.columns(2) == 1;
        let stat_columns = if stacked { 2 } else { 4 };
        let highlight_columns = self.columns(3);

        ui::centered_column(ui, CONTENT_WIDTH, |ui| {
            ui.set_opacity(alpha);
            ui::section_heading(
                ui,
                "About Me",
                "A developer who loves crafting unique digital experiences",
            );

            let width = ui.available_width();
            let origin = ui.cursor().min;
            let avatar_size = if stacked { width.min(360.0) } else { 400.0 };
            let avatar = if stacked {
                Rect::from_min_size(
                    pos2(origin.x + (width - avatar_size) * 0.5, origin.y),
                    vec2(avatar_size, avatar_size),
                )
            } else {
                Rect::from_min_size(origin, vec2(avatar_size, avatar_size))
            };
            self.paint_avatar(ui, avatar, time, dt);

            let (text_min, text_width) = if stacked {
                (pos2(origin.x, avatar.bottom() + 40.0), width)
            } else {
                (pos2(avatar.right() + 64.0, origin.y), width - avatar_size - 64.0)
            };
            let bottom = paint_about_text(ui.painter(), text_min, text_width, reveal);
            ui.allocate_exact_size(
                vec2(width, bottom.max(avatar.bottom()) - origin.y + 48.0),
                Sense::hover(),
            );

            let cells = grid_cells(ui, "stat", STATS.len(), stat_columns, 130.0);
            for (stat, cell) in STATS.iter().zip(&cells) {
                let painter = ui.painter_at(cell.rect);
                ui::glass_card(&painter, cell.rect, 20.0, ui::white(0.05));
                painter.text(
                    cell.rect.center() - vec2(0.0, 14.0),
                    Align2::CENTER_CENTER,
                    stat.value,
                    FontId::proportional(36.0),
                    ui::rgb(stat.color),
                );
                painter.text(
                    cell.rect.center() + vec2(0.0, 26.0),
                    Align2::CENTER_CENTER,
                    stat.label,
                    FontId::proportional(14.0),
                    ui::white(0.6),
                );
            }
            ui.add_space(GAP);

            let cells = grid_cells(ui, "highlight", HIGHLIGHTS.len(), highlight_columns, 230.0);
            for (item, cell) in HIGHLIGHTS.iter().zip(&cells) {
                let hovered = cell.hovered();
                if hovered {
                    self.cursor.mark_hover();
                }
                let lift = ui.ctx().animate_bool_with_time(cell.id, hovered, 0.2) * -5.0;
                paint_feature_card(ui, cell.rect.translate(vec2(0.0, lift)), item, hovered, cell.hover_pos());
            }
            ui.add_space(64.0);
        });
    }

    /// Avatar whose face turns toward the pointer.
    fn paint_avatar(&mut self, ui: &egui::Ui, rect: Rect, time: f32, dt: f32) {
        let target = match self.last_pointer {
            Some(p) => {
                let [nx, ny] = normalized_offset([p.x, p.y], rect4(rect));
                let tilt = head_follow([nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0)]);
                [tilt.rotate_x, tilt.rotate_y]
            }
            None => [0.0, 0.0],
        };
        self.avatar_tilt.set_target(target);
        self.avatar_tilt.step(dt);
        let [rx, ry] = self.avatar_tilt.value();

        let painter = ui.painter_at(rect.expand(40.0));
        let center = rect.center();
        let radius = rect.width() * 0.5;

        ui::glow(&painter, center, radius, ACCENT, 0.25);
        painter.circle_stroke(center, radius * 0.92, Stroke::new(1.0, ui::rgba(ACCENT, 0.2)));
        for k in 0..3 {
            let a = time * 0.6 + k as f32 * TAU / 3.0;
            painter.circle_filled(center + vec2(a.cos(), a.sin()) * radius * 0.92, 4.0, ui::rgb(ACCENT));
        }

        let head = radius * 0.55;
        painter.circle_filled(center, head, ui::rgb(DEEP_BLUE));
        painter.circle_stroke(center, head, Stroke::new(2.0, ui::rgba(ACCENT, 0.5)));

        let face = center + vec2(ry, -rx) * (head / 30.0);
        for side in [-1.0, 1.0] {
            let eye = face + vec2(side * head * 0.32, -head * 0.12);
            painter.circle_filled(eye, head * 0.11, Color32::WHITE);
            painter.circle_filled(eye + vec2(ry, -rx) * 0.15, head * 0.05, ui::rgb(BACKGROUND));
        }
        let smile: Vec<Pos2> = (0..=16)
            .map(|s| {
                let a = PI * (0.15 + 0.7 * s as f32 / 16.0);
                face + vec2(a.cos() * head * 0.35, head * 0.18 + a.sin() * head * 0.15)
            })
            .collect();
        painter.add(egui::Shape::line(smile, Stroke::new(3.0, ui::rgb(ACCENT))));
    }

    // ── Testimonials ──

    pub fn draw_testimonials(&mut self, ui: &mut egui::Ui, dt: f32) {
        let columns = self.columns(3);

        ui::centered_column(ui, CONTENT_WIDTH, |ui| {
            ui::section_heading(ui, "Testimonials", "What clients say about the work");
            let cells = grid_cells(ui, "testimonial", TESTIMONIALS.len(), columns, 300.0);
            for (i, (item, cell)) in TESTIMONIALS.iter().zip(&cells).enumerate() {
                let hovered = cell.hovered();
                if hovered {
                    self.cursor.mark_hover();
                }
                let Some(lift) = self.testimonial_lifts.get_mut(i) else {
                    continue;
                };
                lift.set_target(if hovered { -10.0 } else { 0.0 });
                lift.step(dt);
                let overlay = ui.ctx().animate_bool_with_time(cell.id, hovered, 0.4);
                paint_testimonial(ui, cell.rect.translate(vec2(0.0, lift.value)), item, overlay);
            }
            ui.add_space(64.0);
        });
    }
}

/// Animated wave band between sections.
pub fn draw_divider(ui: &mut egui::Ui, time: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 128.0), Sense::hover());
    let painter = ui.painter_at(rect);

    let mid = rect.center().y;
    let clear = ui::rgba(ACCENT, 0.0);
    ui::vertical_gradient(&painter, Rect::from_min_max(rect.min, pos2(rect.max.x, mid)), clear, ui::rgba(ACCENT, 0.1));
    ui::vertical_gradient(&painter, Rect::from_min_max(pos2(rect.min.x, mid), rect.max), ui::rgba(ACCENT, 0.1), clear);

    for (period, amplitude, color, alpha) in [(8.0, 25.0, ACCENT, 0.3), (10.0, 20.0, DEEP_BLUE, 0.2)] {
        let swing = (time / period * TAU).cos() * amplitude;
        let points: Vec<Pos2> = (0..=64)
            .map(|s| {
                let t = s as f32 / 64.0;
                pos2(rect.left() + t * rect.width(), mid + (t * TAU).sin() * swing)
            })
            .collect();
        painter.add(egui::Shape::line(points, Stroke::new(2.0, ui::rgba(color, alpha))));
    }
}

/// Icon, title and description card used by differentials and highlights.
fn paint_feature_card(
    ui: &egui::Ui,
    rect: Rect,
    item: &Differential,
    hovered: bool,
    pointer: Option<Pos2>,
) {
    let painter = ui.painter_at(rect.expand(2.0));
    let border = if hovered {
        ui::rgba(item.color, 0.19)
    } else {
        ui::white(0.05)
    };
    ui::glass_card(&painter, rect, 24.0, border);
    if let (true, Some(p)) = (hovered, pointer) {
        ui::glow(&painter, p, 220.0, item.color, 0.15);
    }

    let icon = Rect::from_min_size(rect.min + vec2(32.0, 32.0), vec2(64.0, 64.0));
    painter.rect_filled(icon, 16.0, ui::rgba(item.color, 0.08));
    painter.rect_stroke(icon, 16.0, Stroke::new(1.0, ui::rgba(item.color, 0.12)));
    painter.text(icon.center(), Align2::CENTER_CENTER, item.glyph, FontId::proportional(28.0), ui::rgb(item.color));

    painter.text(
        rect.min + vec2(32.0, 120.0),
        Align2::LEFT_TOP,
        item.title,
        FontId::proportional(20.0),
        Color32::WHITE,
    );
    ui::wrapped_text(
        &painter,
        rect.min + vec2(32.0, 154.0),
        item.description,
        14.0,
        ui::white(0.6),
        rect.width() - 64.0,
    );
}

fn paint_service_card(
    ui: &egui::Ui,
    rect: Rect,
    service: &Service,
    texture: Option<&egui::TextureHandle>,
    tilt: [f32; 2],
    zoom: f32,
    hovered: bool,
) {
    let painter = ui.painter_at(rect);
    // A flat renderer shows tilt as content sliding against the frame
    let shift = vec2(tilt[1], -tilt[0]) * 4.0;
    let border = if hovered {
        ui::rgba(ACCENT, 0.2)
    } else {
        ui::white(0.05)
    };
    ui::glass_card(&painter, rect, 24.0, border);

    let image = Rect::from_min_size(rect.min, vec2(rect.width(), 224.0));
    let (from, to) = service.gradient;
    if let Some(texture) = texture {
        ui::cover_image(&painter.with_clip_rect(image), image.expand(8.0).translate(shift), texture, zoom);
    }
    ui::gradient_rect(&painter, image, ui::rgba(from, 0.6), ui::rgba(to, 0.6));

    let text_min = rect.min + vec2(24.0, 248.0) + shift * 0.5;
    painter.text(text_min, Align2::LEFT_TOP, service.title, FontId::proportional(22.0), Color32::WHITE);
    ui::wrapped_text(
        &painter,
        text_min + vec2(0.0, 38.0),
        service.description,
        14.0,
        ui::white(0.6),
        rect.width() - 48.0,
    );
    painter.text(
        rect.left_bottom() + vec2(24.0, -28.0),
        Align2::LEFT_CENTER,
        "Learn more \u{2192}",
        FontId::proportional(15.0),
        ui::rgba(ACCENT, if hovered { 1.0 } else { 0.7 }),
    );
}

/// Heading, paragraphs and skill bars; returns the bottom edge.
fn paint_about_text(painter: &egui::Painter, min: Pos2, width: f32, reveal: f32) -> f32 {
    let mut y = min.y;
    painter.text(
        pos2(min.x, y),
        Align2::LEFT_TOP,
        "Building the Digital Future",
        FontId::proportional(28.0),
        Color32::WHITE,
    );
    y += 48.0;
    for paragraph in ABOUT_PARAGRAPHS {
        let rect = ui::wrapped_text(painter, pos2(min.x, y), paragraph, 15.0, ui::white(0.65), width);
        y = rect.bottom() + 14.0;
    }

    y += 16.0;
    painter.text(pos2(min.x, y), Align2::LEFT_TOP, "Specialties", FontId::proportional(20.0), Color32::WHITE);
    y += 36.0;
    for (i, skill) in SKILLS.iter().enumerate() {
        painter.text(pos2(min.x, y), Align2::LEFT_TOP, skill.name, FontId::proportional(14.0), ui::white(0.8));
        painter.text(
            pos2(min.x + width, y),
            Align2::RIGHT_TOP,
            format!("{}%", skill.level),
            FontId::proportional(14.0),
            ui::rgb(skill.color),
        );
        let track = Rect::from_min_size(pos2(min.x, y + 22.0), vec2(width, 6.0));
        painter.rect_filled(track, 3.0, ui::white(0.05));
        let stagger = (reveal * 1.5 - i as f32 * 0.1).clamp(0.0, 1.0);
        let filled = width * skill.level as f32 / 100.0 * stagger;
        if filled > 0.0 {
            let bar = Rect::from_min_size(track.min, vec2(filled, track.height()));
            ui::gradient_rect(painter, bar, ui::rgba(skill.color, 0.6), ui::rgb(skill.color));
        }
        y += 44.0;
    }
    y
}

fn paint_testimonial(ui: &egui::Ui, rect: Rect, item: &Testimonial, overlay: f32) {
    let painter = ui.painter_at(rect.expand(1.0));
    let (from, to) = item.gradient;
    let border = if overlay > 0.5 {
        ui::rgba(from, 0.25)
    } else {
        ui::white(0.05)
    };
    ui::glass_card(&painter, rect, 24.0, border);
    if overlay > 0.0 {
        ui::gradient_rect(
            &painter,
            rect.shrink(2.0),
            ui::rgba(from, 0.1 * overlay),
            ui::rgba(to, 0.1 * overlay),
        );
    }

    painter.text(
        rect.right_top() + vec2(-28.0, 8.0),
        Align2::RIGHT_TOP,
        "\u{201C}",
        FontId::proportional(64.0),
        ui::rgba(from, 0.25),
    );
    ui::stars(&painter, rect.min + vec2(28.0, 28.0), item.rating);
    ui::wrapped_text(
        &painter,
        rect.min + vec2(28.0, 64.0),
        item.content,
        15.0,
        ui::white(0.75),
        rect.width() - 56.0,
    );

    let avatar = rect.left_bottom() + vec2(52.0, -48.0);
    painter.circle_filled(avatar, 24.0, ui::rgb(from));
    painter.circle_stroke(avatar, 24.0, Stroke::new(2.0, ui::rgba(to, 0.8)));
    painter.text(avatar, Align2::CENTER_CENTER, ui::initials(item.name), FontId::proportional(16.0), Color32::WHITE);
    painter.text(
        avatar + vec2(36.0, -10.0),
        Align2::LEFT_CENTER,
        item.name,
        FontId::proportional(16.0),
        Color32::WHITE,
    );
    painter.text(
        avatar + vec2(36.0, 12.0),
        Align2::LEFT_CENTER,
        item.role,
        FontId::proportional(13.0),
        ui::white(0.5),
    );
}
