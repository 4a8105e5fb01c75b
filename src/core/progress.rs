//! Document scroll progress and the spring that smooths it for display.
//!
//! The raw ratio is exact; the spring only exists so the rendered bar does
//! not jitter on fast wheel bursts.

use super::scroll::{Derived, ScrollSampler, Subscription};

/// Fraction of the scrollable height already traversed, in `[0, 1]`.
///
/// A single-screen document (`total == 0`) reports `0`.
pub fn progress(offset_y: u32, total_scrollable_height: u32) -> f64 {
    if total_scrollable_height == 0 {
        return 0.0;
    }
    (f64::from(offset_y) / f64::from(total_scrollable_height)).clamp(0.0, 1.0)
}

// ───────────────────────────────────────── binding ───────────

/// Mounted raw progress ratio.
#[derive(Debug)]
pub struct ProgressMapper {
    ratio: Derived<f64>,
    _subscription: Subscription,
}

impl ProgressMapper {
    pub fn mount(sampler: &ScrollSampler) -> Self {
        let ratio = Derived::new(progress(sampler.offset_y(), sampler.max_scrollable()));
        let out = ratio.clone();
        let subscription = sampler.subscribe(move |sample| {
            out.set(progress(sample.offset_y, sample.max_scrollable));
        });
        Self {
            ratio,
            _subscription: subscription,
        }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio.get()
    }

    pub fn derived(&self) -> Derived<f64> {
        self.ratio.clone()
    }
}

// ───────────────────────────────────────── spring ────────────

/// Spring parameters.  Mass is fixed at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    /// Distance and speed below which the spring snaps to its target.
    pub rest_delta: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            rest_delta: 0.001,
        }
    }
}

/// Damped spring following the raw progress ratio.
#[derive(Debug, Clone)]
pub struct ProgressSpring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl ProgressSpring {
    /// Integration step cap; larger frame gaps are split up.
    const MAX_STEP_SECS: f64 = 1.0 / 120.0;

    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target.clamp(0.0, 1.0);
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Displayed value, always within `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.position.clamp(0.0, 1.0)
    }

    pub fn is_resting(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Jump straight to the target (used on resize).
    pub fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }

    /// Advance by `dt_secs` using semi-implicit Euler.  Returns `true` while
    /// still moving.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if self.is_resting() {
            return false;
        }
        // Sub-steps shrink with stiffness and damping to keep the integrator stable.
        let rate = self.config.stiffness.max(0.0).sqrt() + self.config.damping.max(0.0);
        let max_step = if rate > 0.0 {
            Self::MAX_STEP_SECS.min(1.0 / rate)
        } else {
            Self::MAX_STEP_SECS
        };
        let mut remaining = dt_secs.max(0.0);
        while remaining > 0.0 {
            let dt = remaining.min(max_step);
            remaining -= dt;
            let force = -self.config.stiffness * (self.position - self.target)
                - self.config.damping * self.velocity;
            self.velocity += force * dt;
            self.position += self.velocity * dt;
        }

        if !(self.position.is_finite() && self.velocity.is_finite()) {
            self.snap();
            return false;
        }
        let distance = (self.target - self.position).abs();
        if distance < self.config.rest_delta && self.velocity.abs() < self.config.rest_delta {
            self.snap();
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_document_reports_zero() {
        for y in [0, 1, 50, 10_000] {
            assert_eq!(progress(y, 0), 0.0);
        }
    }

    #[test]
    fn ratio_is_bounded() {
        for y in (0..3_000).step_by(37) {
            let r = progress(y, 1_200);
            assert!((0.0..=1.0).contains(&r), "offset {y} → {r}");
        }
    }

    #[test]
    fn ratio_is_monotonic_in_offset() {
        let mut prev = 0.0;
        for y in 0..2_000 {
            let r = progress(y, 1_500);
            assert!(r >= prev);
            prev = r;
        }
    }

    #[test]
    fn exact_values() {
        assert_eq!(progress(0, 800), 0.0);
        assert_eq!(progress(400, 800), 0.5);
        assert_eq!(progress(800, 800), 1.0);
    }

    #[test]
    fn mounted_ratio_tracks_resize() {
        let mut sampler = ScrollSampler::new();
        sampler.resize(1_100, 100);
        let mapper = ProgressMapper::mount(&sampler);
        sampler.sample(500);
        assert_eq!(mapper.ratio(), 0.5);

        // Document grows: same offset is now a smaller fraction.
        sampler.resize(2_100, 100);
        assert_eq!(mapper.ratio(), 0.25);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = ProgressSpring::new(SpringConfig::default());
        spring.set_target(0.8);
        let mut frames = 0;
        while spring.step(1.0 / 30.0) {
            frames += 1;
            assert!(frames < 1_000, "spring never settled");
        }
        assert_eq!(spring.value(), 0.8);
        assert!(spring.is_resting());
    }

    #[test]
    fn spring_lags_behind_target() {
        let mut spring = ProgressSpring::new(SpringConfig::default());
        spring.set_target(1.0);
        spring.step(1.0 / 60.0);
        assert!(spring.value() > 0.0);
        assert!(spring.value() < 1.0);
    }

    #[test]
    fn spring_output_is_clamped() {
        let mut spring = ProgressSpring::new(SpringConfig {
            stiffness: 900.0,
            damping: 1.0,
            rest_delta: 0.001,
        });
        spring.set_target(1.0);
        for _ in 0..200 {
            spring.step(1.0 / 60.0);
            assert!((0.0..=1.0).contains(&spring.value()));
        }
    }

    #[test]
    fn stiff_spring_stays_finite_and_settles() {
        let mut spring = ProgressSpring::new(SpringConfig {
            stiffness: 1_000_000.0,
            damping: 30.0,
            rest_delta: 0.001,
        });
        spring.set_target(0.6);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.value().is_finite());
        }
        assert!(spring.is_resting());
        assert_eq!(spring.value(), 0.6);
    }

    #[test]
    fn resting_spring_does_not_move() {
        let mut spring = ProgressSpring::new(SpringConfig::default());
        assert!(!spring.step(1.0));
        assert_eq!(spring.value(), 0.0);
    }
}
