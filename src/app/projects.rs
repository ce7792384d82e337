//! Projects section: the 3-card carousel and the project detail overlay.
//!
//! Navigation state lives in `lumen_folio::carousel::Carousel`; this module
//! only springs each visible card toward its slot layout and routes drags,
//! clicks and indicator presses back into the carousel.

use eframe::egui;
use egui::{pos2, vec2, Align2, Color32, FontId, Rect, Sense, Stroke};

use lumen_folio::carousel::layout::{
    card_size, hovered_layout, is_compact, projected_width_factor, slot_layout, slot_width,
    SlotLayout, ROTATE_Y_STEP, SLIDE_SPRING,
};
use lumen_folio::content::{Project, ACCENT, BACKGROUND, DEEP_BLUE};
use lumen_folio::motion::Spring;

use super::ShowcaseApp;
use crate::ui;

/// Fraction of the live drag distance the cards follow
const DRAG_ELASTIC: f32 = 0.2;

/// Springs carrying one visible card toward its slot.
pub struct SlideMotion {
    x: Spring,
    scale: Spring,
    opacity: Spring,
    rotate_y: Spring,
}

impl SlideMotion {
    fn new(layout: &SlotLayout) -> Self {
        Self {
            x: Spring::new(layout.x, SLIDE_SPRING),
            scale: Spring::new(layout.scale, SLIDE_SPRING),
            opacity: Spring::new(layout.opacity, SLIDE_SPRING),
            rotate_y: Spring::new(layout.rotate_y, SLIDE_SPRING),
        }
    }

    fn set_target(&mut self, layout: &SlotLayout) {
        self.x.set_target(layout.x);
        self.scale.set_target(layout.scale);
        self.opacity.set_target(layout.opacity);
        self.rotate_y.set_target(layout.rotate_y);
    }

    fn step(&mut self, dt: f32) -> bool {
        let mut moving = false;
        for spring in [&mut self.x, &mut self.scale, &mut self.opacity, &mut self.rotate_y] {
            moving |= spring.step(dt);
        }
        moving
    }
}

/// Springs follow an item as it changes slot. A carousel shorter than the
/// window shows an item more than once, so those copies key by slot.
fn slide_key(index: usize, offset: i32, len: usize) -> usize {
    if len >= 3 {
        index
    } else {
        len + (offset + 1) as usize
    }
}

impl ShowcaseApp {
    pub fn draw_projects(&mut self, ui: &mut egui::Ui, dt: f32) {
        let width_px = self.viewport.x;
        let breakpoint = self.config.narrow_breakpoint;
        let compact = is_compact(width_px, breakpoint);
        let slot = slot_width(width_px, breakpoint);
        let [card_w, card_h] = card_size(width_px, breakpoint);

        let top = ui.cursor().min;
        ui::section_heading(ui, "Projects", "Recent work that shows quality and innovation");

        let width = ui.available_width();
        let (stage, response) =
            ui.allocate_exact_size(vec2(width, card_h + 80.0), Sense::click_and_drag());
        if self.scroll_to_projects {
            ui.scroll_to_rect(Rect::from_min_max(top, stage.max), Some(egui::Align::TOP));
            self.scroll_to_projects = false;
        }

        if response.dragged() {
            self.drag_offset += response.drag_delta().x;
        }
        if response.drag_stopped() {
            self.carousel.on_drag_end(self.drag_offset);
            self.drag_offset = 0.0;
        }

        // Targets for this frame; hover comes from last frame's hit test
        let len = self.carousel.len();
        let mut visible: Vec<(usize, &'static Project, i32, SlotLayout)> = Vec::with_capacity(3);
        for (project, offset) in self.carousel.visible_window() {
            let Some(index) = self.carousel.index_at(offset) else {
                continue;
            };
            let layout = if self.hovered_slide == Some(offset) && self.drag_offset == 0.0 {
                hovered_layout(offset, slot)
            } else {
                slot_layout(offset, slot)
            };
            visible.push((slide_key(index, offset, len), *project, offset, layout));
        }

        self.slides
            .retain(|key, _| visible.iter().any(|(k, ..)| k == key));
        for (key, _, _, layout) in &visible {
            self.slides
                .entry(*key)
                .and_modify(|motion| motion.set_target(layout))
                .or_insert_with(|| SlideMotion::new(layout));
        }
        visible.sort_by_key(|(.., layout)| layout.z_index);

        let center = stage.center();
        let elastic = self.drag_offset * DRAG_ELASTIC;
        let mut drawn: Vec<(i32, Rect)> = Vec::with_capacity(visible.len());
        for (key, project, offset, _) in &visible {
            let Some(motion) = self.slides.get_mut(key) else {
                continue;
            };
            motion.step(dt);
            let squash = projected_width_factor(motion.rotate_y.value);
            let size = vec2(card_w * squash, card_h) * motion.scale.value;
            let rect = Rect::from_center_size(center + vec2(motion.x.value + elastic, 0.0), size);
            let texture = self.image_textures.get(project.image);
            paint_slide(
                ui,
                rect,
                project,
                texture,
                motion.opacity.value,
                motion.rotate_y.value,
                *offset == 0 && !compact,
            );
            drawn.push((*offset, rect));
        }

        // Topmost card under the pointer
        let hit = response
            .hover_pos()
            .and_then(|p| drawn.iter().rev().find(|(_, r)| r.contains(p)))
            .map(|(offset, _)| *offset);
        self.hovered_slide = hit;
        if hit.is_some() {
            self.cursor.mark_hover();
        }
        if response.clicked() {
            if let Some(offset) = hit {
                self.carousel.on_item_click(offset);
            }
        }

        self.draw_carousel_controls(ui);
        ui.add_space(64.0);
    }

    /// Previous / next buttons, indicator dots and the position counter.
    fn draw_carousel_controls(&mut self, ui: &mut egui::Ui) {
        let len = self.carousel.len();
        let (row, _) = ui.allocate_exact_size(vec2(ui.available_width(), 72.0), Sense::hover());
        let dots_w = len as f32 * 20.0;
        let mid = row.center();

        let prev = Rect::from_center_size(pos2(mid.x - dots_w * 0.5 - 44.0, mid.y), vec2(48.0, 48.0));
        if self.round_button(ui, prev, "\u{2190}", "carousel_prev").clicked() {
            self.carousel.previous();
        }
        let next = Rect::from_center_size(pos2(mid.x + dots_w * 0.5 + 44.0, mid.y), vec2(48.0, 48.0));
        if self.round_button(ui, next, "\u{2192}", "carousel_next").clicked() {
            self.carousel.next();
        }

        let current = self.carousel.current_index();
        for i in 0..len {
            let dot = pos2(mid.x - dots_w * 0.5 + i as f32 * 20.0 + 10.0, mid.y);
            let hit = Rect::from_center_size(dot, vec2(18.0, 18.0));
            let response = ui.interact(hit, ui.id().with(("carousel_dot", i)), Sense::click());
            if response.hovered() {
                self.cursor.mark_hover();
            }
            let (radius, color) = if i == current {
                (6.0, ui::rgb(ACCENT))
            } else {
                (4.0, ui::white(if response.hovered() { 0.5 } else { 0.25 }))
            };
            ui.painter().circle_filled(dot, radius, color);
            if response.clicked() {
                if let Err(e) = self.carousel.jump_to(i) {
                    log::debug!("indicator press ignored: {}", e);
                }
            }
        }

        ui.painter().text(
            pos2(mid.x, row.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            format!("{:02} / {:02}", current + 1, len),
            FontId::monospace(13.0),
            ui::white(0.4),
        );
    }

    fn round_button(
        &mut self,
        ui: &egui::Ui,
        rect: Rect,
        label: &str,
        salt: &'static str,
    ) -> egui::Response {
        let response = ui.interact(rect, ui.id().with(salt), Sense::click());
        let hover = ui.ctx().animate_bool(response.id, response.hovered());
        if response.hovered() {
            self.cursor.mark_hover();
        }
        let painter = ui.painter();
        painter.circle_filled(rect.center(), rect.width() * 0.5, ui::rgba(ACCENT, 0.05 + 0.15 * hover));
        painter.circle_stroke(
            rect.center(),
            rect.width() * 0.5,
            Stroke::new(1.0, ui::rgba(ACCENT, 0.3 + 0.4 * hover)),
        );
        painter.text(rect.center(), Align2::CENTER_CENTER, label, FontId::proportional(20.0), Color32::WHITE);
        response
    }

    /// Full-screen overlay for the selected project. Backdrop click, the
    /// close button or Escape dismiss it.
    pub fn draw_project_detail(&mut self, ctx: &egui::Context) {
        let Some(project) = self.carousel.selected().copied() else {
            return;
        };
        let screen = ctx.screen_rect();
        let mut close = false;

        egui::Area::new(egui::Id::new("project_detail"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (backdrop, response) = ui.allocate_exact_size(screen.size(), Sense::click());
                ui.painter()
                    .rect_filled(backdrop, 0.0, Color32::from_black_alpha(204));

                let modal = Rect::from_center_size(
                    screen.center(),
                    vec2((screen.width() - 48.0).min(880.0), (screen.height() - 48.0).min(640.0)),
                );
                if response.clicked() {
                    if let Some(p) = response.interact_pointer_pos() {
                        close |= !modal.contains(p);
                    }
                }

                let texture = self.image_textures.get(project.image);
                paint_detail(ui, modal, project, texture);

                let close_rect = Rect::from_center_size(modal.right_top() + vec2(-36.0, 36.0), vec2(40.0, 40.0));
                close |= self.round_button(ui, close_rect, "\u{2715}", "detail_close").clicked();

                let cta = Rect::from_min_size(
                    pos2(modal.left() + 32.0, modal.bottom() - 76.0),
                    vec2(modal.width() - 64.0, 48.0),
                );
                let cta_response = ui.interact(cta, ui.id().with("detail_cta"), Sense::click());
                if cta_response.hovered() {
                    self.cursor.mark_hover();
                }
                ui::gradient_rect(ui.painter(), cta, ui::rgb(ACCENT), ui::rgb(DEEP_BLUE));
                ui.painter().text(
                    cta.center(),
                    Align2::CENTER_CENTER,
                    "View Full Project \u{2197}",
                    FontId::proportional(17.0),
                    Color32::WHITE,
                );
                if cta_response.clicked() {
                    log::info!("full project requested: {}", project.title);
                }

                close |= ui.input(|i| i.key_pressed(egui::Key::Escape));
            });

        if close {
            self.carousel.close_detail();
        }
    }
}

fn paint_slide(
    ui: &egui::Ui,
    rect: Rect,
    project: &Project,
    texture: Option<&egui::TextureHandle>,
    opacity: f32,
    rotate_y: f32,
    show_description: bool,
) {
    let mut painter = ui.painter_at(rect.expand(32.0));
    painter.set_opacity(opacity);
    let is_center = rotate_y.abs() < 1.0;

    if is_center {
        ui::glow(&painter, rect.center(), rect.width() * 0.6, ACCENT, 0.2);
    }
    painter.rect_filled(rect, 24.0, ui::rgb(BACKGROUND));
    paint_cover(&painter, rect, project, texture);
    let lower = Rect::from_min_max(pos2(rect.left(), rect.center().y), rect.max);
    ui::vertical_gradient(&painter, lower, ui::rgba(BACKGROUND, 0.0), ui::rgba(BACKGROUND, 0.95));

    // The far edge of a turned card darkens
    let shade = (rotate_y.abs() / ROTATE_Y_STEP).min(1.0) * 0.35;
    if shade > 0.0 {
        let dark = Color32::from_black_alpha((shade * 255.0) as u8);
        let (from, to) = if rotate_y > 0.0 {
            (Color32::TRANSPARENT, dark)
        } else {
            (dark, Color32::TRANSPARENT)
        };
        ui::gradient_rect(&painter, rect, from, to);
    }

    let pill_galley = painter.layout_no_wrap(
        project.category.to_owned(),
        FontId::proportional(12.0),
        ui::rgb(ACCENT),
    );
    let pill = Rect::from_min_size(rect.min + vec2(20.0, 20.0), pill_galley.size() + vec2(20.0, 10.0));
    painter.rect_filled(pill, 12.0, ui::rgba(BACKGROUND, 0.7));
    painter.rect_stroke(pill, 12.0, Stroke::new(1.0, ui::rgba(ACCENT, 0.4)));
    painter.galley(pill.min + vec2(10.0, 5.0), pill_galley, ui::rgb(ACCENT));

    let title_pos = rect.left_bottom() + vec2(24.0, if show_description { -84.0 } else { -52.0 });
    painter.text(title_pos, Align2::LEFT_TOP, project.title, FontId::proportional(24.0), Color32::WHITE);
    if show_description {
        painter.text(
            title_pos + vec2(0.0, 36.0),
            Align2::LEFT_TOP,
            ui::truncate_str(project.description, 64),
            FontId::proportional(14.0),
            ui::white(0.7),
        );
    }

    let border = if is_center {
        ui::rgba(ACCENT, 0.4)
    } else {
        ui::white(0.1)
    };
    painter.rect_stroke(rect, 24.0, Stroke::new(1.0, border));
}

/// Cover texture, or a gradient with initials while it is missing.
fn paint_cover(painter: &egui::Painter, rect: Rect, project: &Project, texture: Option<&egui::TextureHandle>) {
    match texture {
        Some(texture) => ui::cover_image(&painter.with_clip_rect(rect.shrink(1.0)), rect, texture, 1.0),
        None => {
            ui::gradient_rect(painter, rect.shrink(1.0), ui::rgb(DEEP_BLUE), ui::rgba(ACCENT, 0.6));
            painter.text(
                rect.center() - vec2(0.0, rect.height() * 0.12),
                Align2::CENTER_CENTER,
                ui::initials(project.title),
                FontId::proportional(rect.height() * 0.25),
                ui::white(0.25),
            );
        }
    }
}

fn paint_detail(ui: &egui::Ui, modal: Rect, project: &Project, texture: Option<&egui::TextureHandle>) {
    let painter = ui.painter_at(modal);
    painter.rect_filled(modal, 24.0, ui::rgb(BACKGROUND));

    let cover = Rect::from_min_size(modal.min, vec2(modal.width(), (modal.height() * 0.38).min(260.0)));
    paint_cover(&painter, cover, project, texture);
    ui::vertical_gradient(&painter, cover, ui::rgba(BACKGROUND, 0.0), ui::rgba(BACKGROUND, 0.9));

    let x = modal.left() + 32.0;
    let inner_w = modal.width() - 64.0;
    let mut y = cover.bottom() + 16.0;
    painter.text(pos2(x, y), Align2::LEFT_TOP, project.category, FontId::proportional(13.0), ui::rgb(ACCENT));
    y += 24.0;
    painter.text(pos2(x, y), Align2::LEFT_TOP, project.title, FontId::proportional(30.0), Color32::WHITE);
    y += 44.0;
    y = ui::wrapped_text(&painter, pos2(x, y), project.description, 15.0, ui::white(0.7), inner_w).bottom() + 20.0;

    let metrics = [
        ("Performance", project.metrics.performance),
        ("Conversion", project.metrics.conversion),
        ("Load time", project.metrics.loading),
    ];
    let cell_w = (inner_w - 32.0) / 3.0;
    for (i, (label, value)) in metrics.iter().enumerate() {
        let cell = Rect::from_min_size(pos2(x + i as f32 * (cell_w + 16.0), y), vec2(cell_w, 72.0));
        ui::glass_card(&painter, cell, 16.0, ui::rgba(ACCENT, 0.15));
        painter.text(cell.center() - vec2(0.0, 10.0), Align2::CENTER_CENTER, *value, FontId::proportional(22.0), ui::rgb(ACCENT));
        painter.text(cell.center() + vec2(0.0, 16.0), Align2::CENTER_CENTER, *label, FontId::proportional(12.0), ui::white(0.5));
    }
    y += 92.0;

    painter.text(pos2(x, y), Align2::LEFT_TOP, "Technologies", FontId::proportional(14.0), ui::white(0.8));
    y += 26.0;
    let mut tag_x = x;
    for tech in project.tech {
        let galley = painter.layout_no_wrap((*tech).to_owned(), FontId::proportional(13.0), Color32::WHITE);
        let tag_w = galley.size().x + 24.0;
        if tag_x + tag_w > x + inner_w {
            tag_x = x;
            y += 36.0;
        }
        let tag = Rect::from_min_size(pos2(tag_x, y), vec2(tag_w, 28.0));
        painter.rect_filled(tag, 14.0, ui::rgba(ACCENT, 0.1));
        painter.rect_stroke(tag, 14.0, Stroke::new(1.0, ui::rgba(ACCENT, 0.3)));
        painter.galley(tag.min + vec2(12.0, (28.0 - galley.size().y) * 0.5), galley, Color32::WHITE);
        tag_x += tag_w + 8.0;
    }

    painter.rect_stroke(modal, 24.0, Stroke::new(1.0, ui::rgba(ACCENT, 0.2)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_keys_follow_items_on_full_carousels() {
        assert_eq!(slide_key(4, -1, 6), 4);
        assert_eq!(slide_key(4, 1, 6), 4);
    }

    #[test]
    fn short_carousels_key_by_slot() {
        let keys: Vec<usize> = (-1..=1).map(|o| slide_key(0, o, 1)).collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn slide_motion_settles_on_new_slot() {
        let mut motion = SlideMotion::new(&slot_layout(1, 400.0));
        motion.set_target(&slot_layout(0, 400.0));
        for _ in 0..600 {
            if !motion.step(1.0 / 60.0) {
                break;
            }
        }
        assert_eq!(motion.x.value, 0.0);
        assert_eq!(motion.scale.value, 1.0);
        assert_eq!(motion.opacity.value, 1.0);
    }
}
