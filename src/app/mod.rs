//! `ShowcaseApp`, the top-level egui application state.
//!
//! This module declares the `ShowcaseApp` struct, its constructor and the
//! per-frame `update`. Drawing is split across the sibling sub-modules:
//!
//! - `input`    — egui input to `Signal`s, arrow keys, page-level signals
//! - `backdrop` — ambient particle field, glow blobs, custom cursor
//! - `sections` — hero, differentials, services, about, testimonials
//! - `projects` — carousel and project detail overlay
//! - `contact`  — contact form and toasts

pub mod input;
pub mod backdrop;
pub mod sections;
pub mod projects;
pub mod contact;

use std::collections::HashMap;
use std::time::Instant;

use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lumen_folio::carousel::Carousel;
use lumen_folio::config::ShowcaseConfig;
use lumen_folio::contact::ContactForm;
use lumen_folio::content::{Project, BACKGROUND, DIFFERENTIALS, PROJECTS, SERVICES, TESTIMONIALS};
use lumen_folio::cursor::CustomCursor;
use lumen_folio::field::ambient::AmbientField;
use lumen_folio::field::ParticleField;
use lumen_folio::motion::scroll::section_progress;
use lumen_folio::motion::{Spring, Spring2, SpringConfig};
use lumen_folio::net::image::ImageLoader;
use lumen_folio::notify::Toasts;
use lumen_folio::signals::{Signal, SignalHub, Subscription};

use crate::ui;
use projects::SlideMotion;

/// Largest frame delta fed to the springs (s)
const MAX_FRAME_DT: f32 = 0.1;
/// Page content column width
pub const CONTENT_WIDTH: f32 = 1120.0;

/// Particle push follows its target on this spring.
const PUSH_SPRING: SpringConfig = SpringConfig::new(200.0, 25.0, 1.0);
const HERO_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0, 1.0);
const CARD_TILT_SPRING: SpringConfig = SpringConfig::new(400.0, 35.0, 1.0);
const LIFT_SPRING: SpringConfig = SpringConfig::new(300.0, 20.0, 1.0);

// ─── Application state ───────────────────────────────────────────────────────

pub struct ShowcaseApp {
    pub config: ShowcaseConfig,
    pub hub: SignalHub,
    pub ambient: AmbientField<StdRng>,
    /// Page-level listener feeding the cursor and scroll offset
    pub page_signals: Subscription,
    pub cursor: CustomCursor,
    /// Springed pointer push, one per particle id
    pub particle_push: Vec<Spring2>,
    // Input bookkeeping
    pub viewport: egui::Vec2,
    pub last_pointer: Option<egui::Pos2>,
    pub published_scroll: f32,
    pub scroll_offset: f32,
    pub scroll_to_projects: bool,
    /// Section heights measured on the previous frame
    pub section_heights: HashMap<&'static str, f32>,
    // Section motion
    pub hero_tilt: Spring2,
    pub avatar_tilt: Spring2,
    pub service_tilts: Vec<Spring2>,
    pub differential_lifts: Vec<Spring>,
    pub testimonial_lifts: Vec<Spring>,
    // Projects carousel
    pub carousel: Carousel<&'static Project>,
    pub slides: HashMap<usize, SlideMotion>,
    pub drag_offset: f32,
    pub hovered_slide: Option<i32>,
    // Contact
    pub contact: ContactForm,
    pub form_error: Option<String>,
    pub toasts: Toasts,
    // Cover images
    pub image_loader: ImageLoader,
    pub image_textures: HashMap<String, egui::TextureHandle>,
    pub app_start: Instant,
    pub last_frame_time: Instant,
}

impl ShowcaseApp {
    pub fn new(config: ShowcaseConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "showcase: {} particles, tick {} ms, seed {}",
            config.particle_count,
            config.tick_period.as_millis(),
            seed
        );

        let field = ParticleField::new(
            config.particle_count,
            config.band_count,
            StdRng::seed_from_u64(seed),
        );
        let mut hub = SignalHub::new();
        let now = Instant::now();
        let mut ambient = AmbientField::new(field, config.tick_period);
        ambient.mount(&mut hub, now);
        let page_signals = hub.subscribe();

        let mut image_loader = if config.load_images {
            ImageLoader::new()
        } else {
            ImageLoader::disabled()
        };
        let covers = PROJECTS.iter().map(|p| p.image);
        for url in covers.chain(SERVICES.iter().map(|s| s.image)) {
            image_loader.request(url);
        }

        Self {
            hub,
            ambient,
            page_signals,
            cursor: CustomCursor::new(),
            particle_push: (0..config.particle_count)
                .map(|_| Spring2::new([0.0, 0.0], PUSH_SPRING))
                .collect(),
            viewport: egui::Vec2::ZERO,
            last_pointer: None,
            published_scroll: 0.0,
            scroll_offset: 0.0,
            scroll_to_projects: false,
            section_heights: HashMap::new(),
            hero_tilt: Spring2::new([0.0, 0.0], HERO_SPRING),
            avatar_tilt: Spring2::new([0.0, 0.0], HERO_SPRING),
            service_tilts: SERVICES
                .iter()
                .map(|_| Spring2::new([0.0, 0.0], CARD_TILT_SPRING))
                .collect(),
            differential_lifts: DIFFERENTIALS
                .iter()
                .map(|_| Spring::new(0.0, LIFT_SPRING))
                .collect(),
            testimonial_lifts: TESTIMONIALS
                .iter()
                .map(|_| Spring::new(0.0, LIFT_SPRING))
                .collect(),
            carousel: Carousel::new(PROJECTS.iter().collect()),
            slides: HashMap::new(),
            drag_offset: 0.0,
            hovered_slide: None,
            contact: ContactForm::new(config.submit_delay, config.toast_duration),
            form_error: None,
            toasts: Toasts::new(),
            image_loader,
            image_textures: HashMap::new(),
            app_start: now,
            last_frame_time: now,
            config,
        }
    }

    /// Upload freshly decoded covers as textures.
    fn poll_images(&mut self, ctx: &egui::Context) {
        for url in self.image_loader.poll() {
            if self.image_textures.contains_key(&url) {
                continue;
            }
            if let Some(data) = self.image_loader.get(&url) {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                let tex = ctx.load_texture(
                    format!("cover_{}", url),
                    image,
                    egui::TextureOptions::LINEAR,
                );
                self.image_textures.insert(url, tex);
            }
        }
    }

    /// Run `draw` as one page section, handing it its scroll progress.
    ///
    /// Progress uses the height measured on the previous frame; the first
    /// frame assumes a viewport-tall section.
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        key: &'static str,
        draw: impl FnOnce(&mut Self, &mut egui::Ui, f32),
    ) {
        let viewport = ui.clip_rect();
        let top = ui.cursor().top() - viewport.top();
        let height = self
            .section_heights
            .get(key)
            .copied()
            .unwrap_or(viewport.height());
        let progress = section_progress(top, height, viewport.height());
        let response = ui.scope(|ui| draw(self, ui, progress)).response;
        self.section_heights.insert(key, response.rect.height());
    }

    fn draw_page(&mut self, ui: &mut egui::Ui, now: Instant, dt: f32) {
        let time = now.duration_since(self.app_start).as_secs_f32();
        ui.spacing_mut().item_spacing.y = 0.0;

        self.section(ui, "hero", |app, ui, _| app.draw_hero(ui, time, dt));
        sections::draw_divider(ui, time);
        self.section(ui, "differentials", |app, ui, p| app.draw_differentials(ui, p, dt));
        self.section(ui, "services", |app, ui, _| app.draw_services(ui, dt));
        sections::draw_divider(ui, time);
        self.section(ui, "projects", |app, ui, _| app.draw_projects(ui, dt));
        self.section(ui, "about", |app, ui, p| app.draw_about(ui, p, time, dt));
        sections::draw_divider(ui, time);
        self.section(ui, "testimonials", |app, ui, _| app.draw_testimonials(ui, dt));
        self.section(ui, "contact", |app, ui, _| app.draw_contact(ui, now, time));
        ui.add_space(48.0);
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now
            .duration_since(self.last_frame_time)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last_frame_time = now;

        self.publish_input(ctx);
        self.handle_keys(ctx);
        self.apply_page_signals();
        self.ambient.update(now);

        if let Some(toast) = self.contact.poll(now) {
            self.form_error = None;
            self.toasts.push(toast);
        }
        self.toasts.prune(now);
        self.poll_images(ctx);

        self.cursor.begin_frame();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ui::rgb(BACKGROUND)))
            .show(ctx, |ui| {
                self.draw_backdrop(ui, dt);
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.draw_page(ui, now, dt));
                let offset = output.state.offset.y;
                if offset != self.published_scroll {
                    self.published_scroll = offset;
                    self.hub.publish(Signal::Scrolled { offset });
                }
            });

        self.draw_project_detail(ctx);
        self.draw_toasts(ctx, now);

        self.cursor.end_frame(dt);
        self.draw_cursor(ctx);

        // Particles drift and the hero bobs continuously
        ctx.request_repaint();
    }
}
