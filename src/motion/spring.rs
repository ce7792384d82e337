//! Damped spring follower.
//!
//! Targets snap instantly; the displayed value chases them with a
//! mass-spring-damper integrated by semi-implicit Euler. Once position and
//! velocity are both under the rest thresholds the value snaps onto the
//! target and stops requesting frames.

/// Largest step fed to the integrator; longer frames are subdivided.
const MAX_STEP: f32 = 1.0 / 120.0;
const REST_DELTA: f32 = 0.01;
const REST_SPEED: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        // framer-style default
        Self::new(100.0, 10.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    pub config: SpringConfig,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with no animation.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Returns `true` while still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_at_rest() {
            return false;
        }

        let mass = self.config.mass.max(1e-3);
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let spring_force = self.config.stiffness * (self.target - self.value);
            let damping_force = -self.config.damping * self.velocity;
            self.velocity += (spring_force + damping_force) / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.value).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Two springs sharing a config, for 2-D positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(value: [f32; 2], config: SpringConfig) -> Self {
        Self {
            x: Spring::new(value[0], config),
            y: Spring::new(value[1], config),
        }
    }

    pub fn set_target(&mut self, target: [f32; 2]) {
        self.x.set_target(target[0]);
        self.y.set_target(target[1]);
    }

    pub fn snap(&mut self, value: [f32; 2]) {
        self.x.snap(value[0]);
        self.y.snap(value[1]);
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.x.config = config;
        self.y.config = config;
    }

    pub fn value(&self) -> [f32; 2] {
        [self.x.value, self.y.value]
    }

    pub fn step(&mut self, dt: f32) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_spring_does_not_move() {
        let mut s = Spring::new(3.0, SpringConfig::default());
        assert!(!s.step(0.016));
        assert_eq!(s.value, 3.0);
    }

    #[test]
    fn settles_on_target() {
        let mut s = Spring::new(0.0, SpringConfig::new(300.0, 30.0, 1.0));
        s.set_target(400.0);
        let mut frames = 0;
        while s.step(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        assert_eq!(s.value, 400.0);
        assert!(s.is_at_rest());
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let mut s = Spring::new(0.0, SpringConfig::new(500.0, 5.0, 1.0));
        s.set_target(1.0);
        let mut peak: f32 = 0.0;
        for _ in 0..120 {
            s.step(1.0 / 60.0);
            peak = peak.max(s.value);
        }
        assert!(peak > 1.0);
    }

    #[test]
    fn large_dt_is_subdivided() {
        let mut a = Spring::new(0.0, SpringConfig::new(200.0, 25.0, 1.0));
        a.set_target(100.0);
        a.step(0.5);
        assert!(a.value.is_finite());
        assert!(a.value > 50.0 && a.value < 150.0);
    }

    #[test]
    fn snap_skips_animation() {
        let mut s = Spring2::new([0.0, 0.0], SpringConfig::default());
        s.set_target([5.0, 5.0]);
        s.snap([7.0, 8.0]);
        assert_eq!(s.value(), [7.0, 8.0]);
        assert!(!s.step(0.1));
    }
}
