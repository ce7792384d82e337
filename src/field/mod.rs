//! Ambient particle field: drifting code labels repelled by the pointer.
//!
//! A fixed pool of text sprites falls slowly down the viewport. Sprites that
//! pass the bottom edge are recycled to the top with fresh cosmetics; the
//! pool never grows or shrinks once initialized.
//!
//! Pointer repulsion is NOT stored on the particles. [`displacement`] is a
//! pure projection of (particle, pointer) recomputed every frame.

pub mod ambient;
pub mod ticker;

use rand::Rng;

use crate::content::CODE_SNIPPETS;

// ── Constants ──

/// Distance past either vertical edge before a particle is recycled
pub const RECYCLE_MARGIN: f32 = 100.0;
/// Degrees of rotation added per tick
pub const ROTATION_STEP: f64 = 0.05;
/// Pointer influence radius (px)
pub const MAX_DISTANCE: f32 = 250.0;
/// Push multiplier applied to the pointer delta
pub const PUSH_FACTOR: f32 = -0.8;
/// Extra opacity at full influence
pub const INFLUENCE_OPACITY: f32 = 0.2;
/// Influence above which a glow is drawn
pub const GLOW_THRESHOLD: f32 = 0.2;
/// Influence above which the blur is dropped
pub const SHARP_THRESHOLD: f32 = 0.3;

const DRIFT_MIN: f32 = 0.15;
const DRIFT_MAX: f32 = 0.45;
const OPACITY_MIN: f32 = 0.05;
const OPACITY_MAX: f32 = 0.20;
const SCALE_MIN: f32 = 0.7;
const SCALE_MAX: f32 = 1.0;

// ── Particle ──

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub label: &'static str,
    /// Viewport-space position `[x, y]`
    pub position: [f32; 2],
    /// Pixels per tick, fixed for the particle's lifetime
    pub drift_speed: f32,
    pub opacity_base: f32,
    /// Degrees, unbounded. `f64` keeps the 0.05 step resolvable on long runs.
    pub rotation: f64,
    pub scale: f32,
}

/// Per-frame pointer reaction of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    /// 0 (out of range) ..= 1 (pointer on top of the particle)
    pub influence: f32,
    pub push_x: f32,
    pub push_y: f32,
    pub opacity: f32,
    pub glow: bool,
    /// Draw without blur
    pub sharp: bool,
}

/// Normalized inverse-distance proximity of `pointer` to `position`.
pub fn influence(pointer: [f32; 2], position: [f32; 2]) -> f32 {
    let dx = pointer[0] - position[0];
    let dy = pointer[1] - position[1];
    let distance = (dx * dx + dy * dy).sqrt();
    (1.0 - distance / MAX_DISTANCE).max(0.0)
}

/// Pointer displacement for `particle`. No pointer yet → no influence.
pub fn displacement(particle: &Particle, pointer: Option<[f32; 2]>) -> Displacement {
    let Some(pointer) = pointer else {
        return Displacement {
            influence: 0.0,
            push_x: 0.0,
            push_y: 0.0,
            opacity: particle.opacity_base,
            glow: false,
            sharp: false,
        };
    };

    let dx = pointer[0] - particle.position[0];
    let dy = pointer[1] - particle.position[1];
    let inf = influence(pointer, particle.position);

    Displacement {
        influence: inf,
        push_x: inf * dx * PUSH_FACTOR,
        push_y: inf * dy * PUSH_FACTOR,
        opacity: particle.opacity_base + inf * INFLUENCE_OPACITY,
        glow: inf > GLOW_THRESHOLD,
        sharp: inf > SHARP_THRESHOLD,
    }
}

// ── ParticleField ──

/// Fixed-size recycling pool of drifting labels.
///
/// Randomness is injected so recycling is reproducible under a seeded `R`.
pub struct ParticleField<R> {
    particles: Vec<Particle>,
    viewport: [f32; 2],
    pointer: Option<[f32; 2]>,
    target_count: usize,
    band_count: usize,
    labels: &'static [&'static str],
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// An empty, not-yet-initialized field.
    pub fn new(count: usize, band_count: usize, rng: R) -> Self {
        Self {
            particles: Vec::new(),
            viewport: [0.0, 0.0],
            pointer: None,
            target_count: count,
            band_count: band_count.max(1),
            labels: CODE_SNIPPETS,
            rng,
        }
    }

    pub fn with_labels(mut self, labels: &'static [&'static str]) -> Self {
        self.labels = labels;
        self
    }

    /// Populate `count` particles spread across horizontal bands.
    ///
    /// Returns `false` (and creates nothing) while the viewport is unmeasured.
    pub fn initialize(&mut self, width: f32, height: f32, count: usize) -> bool {
        self.target_count = count;
        if !(width > 0.0 && height > 0.0) {
            log::debug!("particle field deferred: viewport {}x{}", width, height);
            return false;
        }
        self.viewport = [width, height];

        let band_width = width / self.band_count as f32;
        let mut particles = Vec::with_capacity(count);
        for id in 0..count {
            let band = (id % self.band_count) as f32;
            let x = band * band_width + self.rng.random_range(0.0..band_width);
            let y = self.rng.random_range(0.0..height);
            particles.push(Particle {
                id,
                label: self.sample_label(),
                position: [x, y],
                drift_speed: self.rng.random_range(DRIFT_MIN..DRIFT_MAX),
                opacity_base: self.rng.random_range(OPACITY_MIN..OPACITY_MAX),
                rotation: self.rng.random_range(0.0..360.0f64),
                scale: self.rng.random_range(SCALE_MIN..SCALE_MAX),
            });
        }
        self.particles = particles;

        log::debug!(
            "particle field initialized: {} particles over {}x{}",
            count,
            width,
            height
        );
        true
    }

    /// Advance every particle one step and recycle those past the bottom.
    pub fn tick(&mut self) {
        let [width, height] = self.viewport;
        let limit = height + RECYCLE_MARGIN;

        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            p.position[1] += p.drift_speed;
            p.rotation += ROTATION_STEP;
            if p.position[1] > limit {
                self.recycle(i, width);
            }
        }
    }

    fn recycle(&mut self, index: usize, width: f32) {
        let label = self.sample_label();
        let x = self.rng.random_range(0.0..width);
        let opacity_base = self.rng.random_range(OPACITY_MIN..OPACITY_MAX);
        let scale = self.rng.random_range(SCALE_MIN..SCALE_MAX);

        let p = &mut self.particles[index];
        p.position = [x, -RECYCLE_MARGIN];
        p.label = label;
        p.opacity_base = opacity_base;
        p.scale = scale;
    }

    fn sample_label(&mut self) -> &'static str {
        if self.labels.is_empty() {
            return "";
        }
        self.labels[self.rng.random_range(0..self.labels.len())]
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some([x, y]);
    }

    /// Record a new viewport size. Existing particles stay where they are and
    /// pick up the new bounds when they next recycle; a deferred field
    /// initializes on the first valid size.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            // Minimized window; keep the last usable bounds for recycling.
            return;
        }
        if self.particles.is_empty() {
            self.initialize(width, height, self.target_count);
        } else {
            self.viewport = [width, height];
        }
    }

    pub fn is_initialized(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Option<[f32; 2]> {
        self.pointer
    }

    pub fn viewport(&self) -> [f32; 2] {
        self.viewport
    }

    /// Particles paired with their current pointer displacement.
    pub fn rendered(&self) -> impl Iterator<Item = (&Particle, Displacement)> + '_ {
        let pointer = self.pointer;
        self.particles.iter().map(move |p| (p, displacement(p, pointer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(seed: u64) -> ParticleField<StdRng> {
        ParticleField::new(30, 6, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn zero_viewport_defers_initialization() {
        let mut f = field(1);
        assert!(!f.initialize(0.0, 600.0, 30));
        assert!(!f.initialize(800.0, 0.0, 30));
        assert!(!f.is_initialized());

        f.tick();
        assert!(f.particles().is_empty());

        f.on_viewport_resize(800.0, 600.0);
        assert_eq!(f.particles().len(), 30);
    }

    #[test]
    fn initialization_spreads_particles_across_bands() {
        let mut f = field(2);
        assert!(f.initialize(600.0, 400.0, 30));
        for p in f.particles() {
            let band = (p.id % 6) as f32;
            assert!(p.position[0] >= band * 100.0 && p.position[0] < (band + 1.0) * 100.0);
            assert!(p.position[1] >= 0.0 && p.position[1] < 400.0);
            assert!(p.opacity_base >= 0.05 && p.opacity_base < 0.20);
            assert!(p.scale >= 0.7 && p.scale < 1.0);
            assert!(p.drift_speed >= 0.15 && p.drift_speed < 0.45);
        }
    }

    #[test]
    fn pool_size_and_vertical_bounds_hold_across_ticks() {
        let mut f = field(3);
        f.initialize(500.0, 300.0, 30);
        for _ in 0..5_000 {
            f.tick();
            assert_eq!(f.particles().len(), 30);
            for p in f.particles() {
                assert!(p.position[1] >= -RECYCLE_MARGIN);
                assert!(p.position[1] <= 300.0 + RECYCLE_MARGIN);
            }
        }
    }

    #[test]
    fn recycled_particles_restart_at_top_margin() {
        let mut f = field(4);
        f.initialize(500.0, 300.0, 30);
        let ids: Vec<usize> = f.particles().iter().map(|p| p.id).collect();

        let mut recycled = 0;
        for _ in 0..5_000 {
            let before: Vec<f32> = f.particles().iter().map(|p| p.position[1]).collect();
            f.tick();
            for (p, y0) in f.particles().iter().zip(before) {
                if y0 + p.drift_speed > 300.0 + RECYCLE_MARGIN {
                    recycled += 1;
                    assert_eq!(p.position[1], -RECYCLE_MARGIN);
                    assert!(p.position[0] >= 0.0 && p.position[0] < 500.0);
                }
            }
        }
        assert!(recycled > 0);
        let after: Vec<usize> = f.particles().iter().map(|p| p.id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn rotation_advances_every_tick() {
        let mut f = field(5);
        f.initialize(500.0, 300.0, 4);
        let r0 = f.particles()[0].rotation;
        f.tick();
        f.tick();
        assert!((f.particles()[0].rotation - (r0 + 2.0 * ROTATION_STEP)).abs() < 1e-9);
    }

    #[test]
    fn rotation_keeps_advancing_after_long_uptime() {
        let mut f = field(5);
        f.initialize(500.0, 300.0, 4);
        // Roughly two weeks of 50 ms ticks
        f.particles[0].rotation = 1.1e6;
        for _ in 0..100 {
            let before = f.particles()[0].rotation;
            f.tick();
            assert!(f.particles()[0].rotation > before);
        }
        assert!((f.particles()[0].rotation - (1.1e6 + 100.0 * ROTATION_STEP)).abs() < 1e-6);
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let mut a = field(9);
        let mut b = field(9);
        a.initialize(640.0, 480.0, 30);
        b.initialize(640.0, 480.0, 30);
        for _ in 0..3_000 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn resize_does_not_move_existing_particles() {
        let mut f = field(6);
        f.initialize(500.0, 300.0, 10);
        let before = f.particles().to_vec();
        f.on_viewport_resize(1000.0, 900.0);
        assert_eq!(f.particles(), &before[..]);
        assert_eq!(f.viewport(), [1000.0, 900.0]);

        f.on_viewport_resize(0.0, 0.0);
        assert_eq!(f.viewport(), [1000.0, 900.0]);
    }

    #[test]
    fn recycling_after_shrink_uses_new_bounds() {
        let mut f = field(8);
        f.initialize(1000.0, 800.0, 30);
        f.on_viewport_resize(200.0, 100.0);

        let mut recycled = vec![false; 30];
        for _ in 0..20_000 {
            let before: Vec<f32> = f.particles().iter().map(|p| p.position[1]).collect();
            f.tick();
            for (p, y0) in f.particles().iter().zip(before) {
                if p.position[1] < y0 {
                    recycled[p.id] = true;
                }
                if recycled[p.id] {
                    assert!(p.position[0] >= 0.0 && p.position[0] < 200.0);
                    assert!(p.position[1] >= -RECYCLE_MARGIN && p.position[1] <= 100.0 + RECYCLE_MARGIN);
                }
            }
        }
        assert!(recycled.iter().all(|r| *r));
    }

    #[test]
    fn recycled_labels_come_from_the_configured_set() {
        const LABELS: &[&str] = &["fn", "impl"];
        let mut f = ParticleField::new(12, 3, StdRng::seed_from_u64(11)).with_labels(LABELS);
        f.initialize(300.0, 50.0, 12);
        for _ in 0..2_000 {
            f.tick();
        }
        assert!(f.particles().iter().all(|p| LABELS.contains(&p.label)));
    }

    #[test]
    fn pointer_move_leaves_particles_untouched() {
        let mut f = field(7);
        f.initialize(500.0, 300.0, 10);
        let before = f.particles().to_vec();
        f.on_pointer_move(250.0, 150.0);
        assert_eq!(f.particles(), &before[..]);
        assert_eq!(f.pointer(), Some([250.0, 150.0]));
    }

    #[test]
    fn influence_is_bounded_and_zero_out_of_range() {
        let origin = [0.0, 0.0];
        assert_eq!(influence(origin, origin), 1.0);
        assert_eq!(influence([250.0, 0.0], origin), 0.0);
        assert_eq!(influence([300.0, 400.0], origin), 0.0);
        assert_eq!(influence([-1.0e6, 1.0e6], origin), 0.0);

        for step in 0..100 {
            let d = step as f32 * 5.0;
            let v = influence([0.0, d], origin);
            assert!((0.0..=1.0).contains(&v));
            if d >= MAX_DISTANCE {
                assert_eq!(v, 0.0);
            }
            let diag = influence([d * 0.6, d * 0.8], origin);
            assert!((0.0..=1.0).contains(&diag));
        }
    }

    #[test]
    fn displacement_pushes_away_from_pointer() {
        let p = Particle {
            id: 0,
            label: "x",
            position: [100.0, 100.0],
            drift_speed: 0.2,
            opacity_base: 0.1,
            rotation: 0.0,
            scale: 1.0,
        };

        // Pointer 50px to the right: influence 0.8
        let d = displacement(&p, Some([150.0, 100.0]));
        assert!((d.influence - 0.8).abs() < 1e-6);
        assert!((d.push_x - (0.8 * 50.0 * -0.8)).abs() < 1e-4);
        assert_eq!(d.push_y, 0.0);
        assert!((d.opacity - (0.1 + 0.16)).abs() < 1e-6);
        assert!(d.glow && d.sharp);

        // Influence 0.25: glows but stays blurred
        let d = displacement(&p, Some([100.0, 100.0 + 187.5]));
        assert!((d.influence - 0.25).abs() < 1e-5);
        assert!(d.glow);
        assert!(!d.sharp);

        let none = displacement(&p, None);
        assert_eq!(none.influence, 0.0);
        assert_eq!(none.opacity, 0.1);
    }
}
