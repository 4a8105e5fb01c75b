//! Hero background parallax: scroll offset → (translate, opacity).
//!
//! Both outputs are affine in the offset over `[0, domain]` and clamp to
//! the boundary values outside it, so long pages never push the background
//! off-screen or invert its opacity.

use super::scroll::{Derived, ScrollSampler, Subscription};

/// Translation and opacity applied to the hero background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Downward shift in pixels.
    pub translate_y: f64,
    /// `1.0` = fully opaque.
    pub opacity: f64,
}

impl Parallax {
    pub const REST: Parallax = Parallax {
        translate_y: 0.0,
        opacity: 1.0,
    };

    /// Reference mapping: `[0, 500] px → translate [0, 200], opacity [1, 0.5]`.
    pub fn at(offset_y: f64) -> Self {
        ParallaxMapper::default().map(offset_y)
    }
}

/// Configurable affine mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxMapper {
    /// Input domain upper bound in pixels (lower bound is 0).
    pub domain: f64,
    /// Output translate range `(at 0, at domain)`.
    pub translate_range: (f64, f64),
    /// Output opacity range `(at 0, at domain)`.
    pub opacity_range: (f64, f64),
}

impl Default for ParallaxMapper {
    fn default() -> Self {
        Self {
            domain: 500.0,
            translate_range: (0.0, 200.0),
            opacity_range: (1.0, 0.5),
        }
    }
}

impl ParallaxMapper {
    /// Normalised position within the domain.
    fn t(&self, offset_y: f64) -> f64 {
        if self.domain.is_nan() || self.domain <= 0.0 || offset_y.is_nan() {
            return 0.0;
        }
        (offset_y / self.domain).clamp(0.0, 1.0)
    }

    pub fn map(&self, offset_y: f64) -> Parallax {
        let t = self.t(offset_y);
        let lerp = |(a, b): (f64, f64)| a + (b - a) * t;
        Parallax {
            translate_y: lerp(self.translate_range),
            opacity: lerp(self.opacity_range),
        }
    }

    /// Bind to a sampler for as long as the hero is mounted.
    pub fn mount(self, sampler: &ScrollSampler) -> ParallaxBinding {
        let value = Derived::new(self.map(f64::from(sampler.offset_y())));
        let out = value.clone();
        let subscription = sampler.subscribe(move |sample| {
            out.set(self.map(f64::from(sample.offset_y)));
        });
        ParallaxBinding {
            value,
            _subscription: subscription,
        }
    }
}

/// Mounted parallax pair; dropping it discards the derivation.
#[derive(Debug)]
pub struct ParallaxBinding {
    value: Derived<Parallax>,
    _subscription: Subscription,
}

impl ParallaxBinding {
    pub fn get(&self) -> Parallax {
        self.value.get()
    }

    pub fn derived(&self) -> Derived<Parallax> {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_at_and_below_zero() {
        assert_eq!(Parallax::at(0.0), Parallax::REST);
        assert_eq!(Parallax::at(-1.0), Parallax::REST);
        assert_eq!(Parallax::at(-10_000.0), Parallax::REST);
    }

    #[test]
    fn saturates_at_and_beyond_domain() {
        let end = Parallax {
            translate_y: 200.0,
            opacity: 0.5,
        };
        assert_eq!(Parallax::at(500.0), end);
        assert_eq!(Parallax::at(501.0), end);
        assert_eq!(Parallax::at(90_000.0), end);
    }

    #[test]
    fn midpoint_is_exact() {
        assert_eq!(
            Parallax::at(250.0),
            Parallax {
                translate_y: 100.0,
                opacity: 0.75,
            }
        );
    }

    #[test]
    fn outputs_stay_in_range() {
        for y in (0..1_000).step_by(7) {
            let p = Parallax::at(f64::from(y));
            assert!((0.0..=200.0).contains(&p.translate_y));
            assert!((0.5..=1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn degenerate_domain_stays_at_rest() {
        let mapper = ParallaxMapper {
            domain: 0.0,
            ..ParallaxMapper::default()
        };
        assert_eq!(mapper.map(300.0), Parallax::REST);
    }

    #[test]
    fn custom_ranges() {
        let mapper = ParallaxMapper {
            domain: 100.0,
            translate_range: (10.0, 30.0),
            opacity_range: (0.9, 0.3),
        };
        let p = mapper.map(50.0);
        assert!((p.translate_y - 20.0).abs() < 1e-9);
        assert!((p.opacity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn binding_recomputes_per_sample_and_freezes_on_unmount() {
        let mut sampler = ScrollSampler::new();
        sampler.resize(3_000, 600);
        let hero = ParallaxMapper::default().mount(&sampler);

        sampler.sample(250);
        assert_eq!(hero.get().translate_y, 100.0);

        let handle = hero.derived();
        drop(hero);
        sampler.sample(500);
        assert_eq!(handle.get().translate_y, 100.0);
        assert_eq!(sampler.subscriber_count(), 0);
    }
}
