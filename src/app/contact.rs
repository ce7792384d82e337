//! Contact section and the toast stack.

use std::time::Instant;

use eframe::egui;
use egui::{vec2, Align2, Color32, FontId, RichText, Sense, Stroke};

use lumen_folio::content::{ACCENT, BACKGROUND, CONTACT_CHANNELS, SOCIAL_LINKS};
use lumen_folio::notify::{Toast, ToastKind};

use super::{ShowcaseApp, CONTENT_WIDTH};
use crate::ui;

const SUCCESS: [u8; 3] = [0x10, 0xB9, 0x81];
const FAILURE: [u8; 3] = [0xEF, 0x44, 0x44];

impl ShowcaseApp {
    pub fn draw_contact(&mut self, ui: &mut egui::Ui, now: Instant, time: f32) {
        let stacked = self.columns(2) == 1;

        ui::centered_column(ui, CONTENT_WIDTH, |ui| {
            ui::section_heading(
                ui,
                "Let's Talk",
                "Turn your idea into reality. Get in touch and let's build something great together.",
            );

            if stacked {
                self.draw_contact_info(ui, time);
                ui.add_space(32.0);
                self.draw_contact_form(ui, now);
            } else {
                ui.columns(2, |cols| {
                    self.draw_contact_info(&mut cols[0], time);
                    self.draw_contact_form(&mut cols[1], now);
                });
            }

            ui.add_space(64.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("\u{A9} 2025 Built with \u{2665} and plenty of coffee | All rights reserved")
                        .size(13.0)
                        .color(ui::white(0.35)),
                );
            });
        });
    }

    /// Channel cards, social buttons and the availability badge.
    fn draw_contact_info(&mut self, ui: &mut egui::Ui, time: f32) {
        let width = ui.available_width();
        for channel in CONTACT_CHANNELS {
            let (cell, response) = ui.allocate_exact_size(vec2(width, 84.0), Sense::click());
            let link = channel.link();
            if response.hovered() {
                self.cursor.mark_hover();
            }
            let slide = ui.ctx().animate_bool(response.id, response.hovered()) * 10.0;
            let rect = cell.shrink2(vec2(0.0, 6.0)).translate(vec2(slide, 0.0));

            let painter = ui.painter_at(rect.expand(2.0));
            let border = if response.hovered() {
                ui::rgba(channel.color, 0.3)
            } else {
                ui::white(0.05)
            };
            ui::glass_card(&painter, rect, 18.0, border);
            let icon = rect.left_center() + vec2(36.0, 0.0);
            painter.circle_filled(icon, 22.0, ui::rgba(channel.color, 0.12));
            painter.text(icon, Align2::CENTER_CENTER, channel.glyph, FontId::proportional(20.0), ui::rgb(channel.color));
            painter.text(
                icon + vec2(40.0, -10.0),
                Align2::LEFT_CENTER,
                channel.label,
                FontId::proportional(13.0),
                ui::white(0.5),
            );
            painter.text(
                icon + vec2(40.0, 12.0),
                Align2::LEFT_CENTER,
                channel.value,
                FontId::proportional(16.0),
                Color32::WHITE,
            );

            if response.clicked() {
                if let Some(url) = link {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(url.as_str()));
                }
            }
        }

        ui.add_space(24.0);
        ui.label(RichText::new("Social").size(18.0).color(Color32::WHITE));
        ui.add_space(12.0);
        let (row, _) = ui.allocate_exact_size(vec2(width, 56.0), Sense::hover());
        for (i, social) in SOCIAL_LINKS.iter().enumerate() {
            let center = row.left_center() + vec2(28.0 + i as f32 * 68.0, 0.0);
            let rect = egui::Rect::from_center_size(center, vec2(56.0, 56.0));
            let response = ui.interact(rect, ui.id().with(("social", i)), Sense::click());
            let hover = ui.ctx().animate_bool(response.id, response.hovered());
            if response.hovered() {
                self.cursor.mark_hover();
            }
            let painter = ui.painter();
            painter.rect_filled(rect, 16.0, ui::rgba(social.color, 0.05 + 0.15 * hover));
            painter.rect_stroke(rect, 16.0, Stroke::new(1.0, ui::rgba(social.color, 0.2 + 0.4 * hover)));
            painter.text(
                center,
                Align2::CENTER_CENTER,
                ui::initials(social.label),
                FontId::proportional(18.0),
                Color32::WHITE,
            );
            if response.clicked() {
                if let Ok(url) = url::Url::parse(social.href) {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(url.as_str()));
                }
            }
        }

        ui.add_space(24.0);
        let (badge, _) = ui.allocate_exact_size(vec2(width, 72.0), Sense::hover());
        let painter = ui.painter_at(badge);
        ui::glass_card(&painter, badge, 18.0, ui::rgba(SUCCESS, 0.25));
        let dot = badge.left_center() + vec2(28.0, 0.0);
        let pulse = (time * std::f32::consts::PI).sin() * 0.5 + 0.5;
        painter.circle_filled(dot, 6.0 + pulse * 6.0, ui::rgba(SUCCESS, 0.3 * (1.0 - pulse)));
        painter.circle_filled(dot, 6.0, ui::rgb(SUCCESS));
        painter.text(
            dot + vec2(22.0, 0.0),
            Align2::LEFT_CENTER,
            "Available for new projects",
            FontId::proportional(16.0),
            Color32::WHITE,
        );
    }

    fn draw_contact_form(&mut self, ui: &mut egui::Ui, now: Instant) {
        let sending = self.contact.is_submitting();

        egui::Frame::none()
            .fill(ui::white(0.02))
            .stroke(Stroke::new(1.0, ui::white(0.05)))
            .rounding(24.0)
            .inner_margin(32.0)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                let field_label = |ui: &mut egui::Ui, text: &str| {
                    ui.label(RichText::new(text).size(14.0).color(ui::white(0.7)));
                };

                field_label(ui, "Name");
                ui.add_enabled(
                    !sending,
                    egui::TextEdit::singleline(&mut self.contact.name)
                        .hint_text("Your name")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                field_label(ui, "Email");
                ui.add_enabled(
                    !sending,
                    egui::TextEdit::singleline(&mut self.contact.email)
                        .hint_text("you@example.com")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                field_label(ui, "Message");
                ui.add_enabled(
                    !sending,
                    egui::TextEdit::multiline(&mut self.contact.message)
                        .hint_text("Tell me about your project...")
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );

                if let Some(err) = &self.form_error {
                    ui.colored_label(ui::rgb(FAILURE), err.as_str());
                }
                ui.add_space(12.0);

                let label = match self.contact.remaining(now) {
                    Some(left) => format!("Sending... {:.1}s", left.as_secs_f32()),
                    None => "Send Message".to_owned(),
                };
                let button = ui.add_enabled(
                    !sending,
                    egui::Button::new(RichText::new(label).size(16.0).color(Color32::WHITE))
                        .fill(ui::rgba(ACCENT, 0.8))
                        .rounding(12.0)
                        .min_size(vec2(ui.available_width(), 48.0)),
                );
                if button.hovered() {
                    self.cursor.mark_hover();
                }
                if button.clicked() {
                    match self.contact.submit(now) {
                        Ok(()) => self.form_error = None,
                        Err(e) => {
                            self.form_error = Some(e.to_string());
                            self.toasts
                                .push(Toast::error(e.to_string(), now, self.config.toast_duration));
                        }
                    }
                }
            });
    }

    /// Toast stack in the top-right corner.
    pub fn draw_toasts(&self, ctx: &egui::Context, now: Instant) {
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Tooltip)
            .anchor(Align2::RIGHT_TOP, vec2(-24.0, 24.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in self.toasts.active() {
                    let alpha = toast.alpha(now);
                    let (color, glyph) = match toast.kind {
                        ToastKind::Success => (SUCCESS, "\u{2714}"),
                        ToastKind::Error => (FAILURE, "\u{2716}"),
                    };
                    egui::Frame::none()
                        .fill(ui::rgba(BACKGROUND, 0.95 * alpha))
                        .stroke(Stroke::new(1.0, ui::rgba(color, 0.6 * alpha)))
                        .rounding(12.0)
                        .inner_margin(egui::Margin::symmetric(16.0, 12.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(glyph).color(ui::rgba(color, alpha)));
                                ui.label(RichText::new(&toast.message).color(ui::white(alpha)));
                            });
                        });
                    ui.add_space(8.0);
                }
            });
    }
}
