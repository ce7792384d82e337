//! Showcase configuration.
//!
//! Defaults cover everything; a handful of `LUMEN_*` environment variables
//! override them at startup. Log verbosity stays with `RUST_LOG`.

use std::time::Duration;

/// Runtime knobs for the showcase.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    /// Size of the ambient particle pool
    pub particle_count: usize,
    /// Horizontal bands used to spread particles at initialization
    pub band_count: usize,
    /// Ambient field tick period
    pub tick_period: Duration,
    /// Fixed RNG seed; `None` draws one at startup
    pub seed: Option<u64>,
    /// Viewports narrower than this use compact carousel slots
    pub narrow_breakpoint: f32,
    /// Initial window size
    pub window_size: [f32; 2],
    /// Simulated contact submission latency
    pub submit_delay: Duration,
    /// How long the success toast stays up
    pub toast_duration: Duration,
    /// Fetch project cover images in the background
    pub load_images: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            particle_count: 30,
            band_count: 6,
            tick_period: Duration::from_millis(50),
            seed: None,
            narrow_breakpoint: 768.0,
            window_size: [1280.0, 800.0],
            submit_delay: Duration::from_secs(2),
            toast_duration: Duration::from_secs(5),
            load_images: true,
        }
    }
}

/// An environment override that could not be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={:?}: {}", self.key, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

pub const ENV_PARTICLES: &str = "LUMEN_PARTICLES";
pub const ENV_SEED: &str = "LUMEN_SEED";
pub const ENV_TICK_MS: &str = "LUMEN_TICK_MS";
pub const ENV_NO_IMAGES: &str = "LUMEN_NO_IMAGES";

impl ShowcaseConfig {
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn with_images(mut self, enabled: bool) -> Self {
        self.load_images = enabled;
        self
    }

    /// Defaults overlaid with `LUMEN_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ENV_PARTICLES) {
            let count: usize = parse(ENV_PARTICLES, &v)?;
            if count == 0 {
                return Err(ConfigError {
                    key: ENV_PARTICLES,
                    value: v,
                    reason: "particle count must be at least 1",
                });
            }
            cfg.particle_count = count;
        }

        if let Some(v) = lookup(ENV_SEED) {
            cfg.seed = Some(parse(ENV_SEED, &v)?);
        }

        if let Some(v) = lookup(ENV_TICK_MS) {
            let ms: u64 = parse(ENV_TICK_MS, &v)?;
            if ms == 0 {
                return Err(ConfigError {
                    key: ENV_TICK_MS,
                    value: v,
                    reason: "tick period must be non-zero",
                });
            }
            cfg.tick_period = Duration::from_millis(ms);
        }

        if lookup(ENV_NO_IMAGES).is_some() {
            cfg.load_images = false;
        }

        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        key,
        value: value.to_string(),
        reason: "not a non-negative integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = ShowcaseConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ShowcaseConfig::default());
        assert_eq!(cfg.particle_count, 30);
        assert_eq!(cfg.tick_period, Duration::from_millis(50));
    }

    #[test]
    fn overrides_apply() {
        let cfg = ShowcaseConfig::from_lookup(lookup_from(&[
            (ENV_PARTICLES, "12"),
            (ENV_SEED, " 42 "),
            (ENV_TICK_MS, "16"),
            (ENV_NO_IMAGES, ""),
        ]))
        .unwrap();
        assert_eq!(cfg.particle_count, 12);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.tick_period, Duration::from_millis(16));
        assert!(!cfg.load_images);
    }

    #[test]
    fn builders_override_single_fields() {
        let cfg = ShowcaseConfig::default()
            .with_particle_count(8)
            .with_seed(7)
            .with_tick_period(Duration::from_millis(20))
            .with_images(false);
        assert_eq!(cfg.particle_count, 8);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.tick_period, Duration::from_millis(20));
        assert!(!cfg.load_images);
        assert_eq!(cfg.band_count, ShowcaseConfig::default().band_count);
    }

    #[test]
    fn bad_values_are_reported() {
        let err = ShowcaseConfig::from_lookup(lookup_from(&[(ENV_SEED, "abc")])).unwrap_err();
        assert_eq!(err.key, ENV_SEED);

        let err = ShowcaseConfig::from_lookup(lookup_from(&[(ENV_PARTICLES, "0")])).unwrap_err();
        assert_eq!(err.key, ENV_PARTICLES);
        assert!(err.to_string().starts_with("LUMEN_PARTICLES"));
    }
}
