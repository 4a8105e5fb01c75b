//! Past-threshold flag that switches the navbar from transparent to solid.

use super::scroll::{Derived, ScrollSampler, Subscription};

/// Offset (px) beyond which the navbar turns solid.
pub const DEFAULT_THRESHOLD_PX: u32 = 50;

/// `true` strictly past the threshold; exactly at it is still "not past".
pub fn is_past(offset_y: u32, threshold: u32) -> bool {
    offset_y > threshold
}

/// A mounted threshold flag, recomputed on every scroll sample.
#[derive(Debug)]
pub struct ThresholdState {
    flag: Derived<bool>,
    _subscription: Subscription,
}

impl ThresholdState {
    pub fn mount(sampler: &ScrollSampler, threshold: u32) -> Self {
        let flag = Derived::new(is_past(sampler.offset_y(), threshold));
        let out = flag.clone();
        let subscription = sampler.subscribe(move |sample| {
            out.set(is_past(sample.offset_y, threshold));
        });
        Self {
            flag,
            _subscription: subscription,
        }
    }

    pub fn is_past(&self) -> bool {
        self.flag.get()
    }

    /// Shared read handle; stops updating once `self` is dropped.
    pub fn derived(&self) -> Derived<bool> {
        self.flag.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_comparison_at_boundary() {
        assert!(!is_past(0, DEFAULT_THRESHOLD_PX));
        assert!(!is_past(50, DEFAULT_THRESHOLD_PX));
        assert!(is_past(51, DEFAULT_THRESHOLD_PX));
    }

    #[test]
    fn matches_reference_predicate() {
        for y in 0..=200 {
            assert_eq!(is_past(y, 50), y > 50, "offset {y}");
        }
    }

    #[test]
    fn idempotent_on_identical_input() {
        assert_eq!(is_past(73, 50), is_past(73, 50));
    }

    #[test]
    fn mounted_flag_follows_samples() {
        let mut sampler = ScrollSampler::new();
        sampler.resize(2_000, 500);
        let state = ThresholdState::mount(&sampler, DEFAULT_THRESHOLD_PX);
        assert!(!state.is_past());

        sampler.sample(51);
        assert!(state.is_past());
        sampler.sample(50);
        assert!(!state.is_past());
    }

    #[test]
    fn mount_reads_current_offset() {
        let mut sampler = ScrollSampler::new();
        sampler.resize(2_000, 500);
        sampler.sample(300);
        let state = ThresholdState::mount(&sampler, 50);
        assert!(state.is_past());
    }

    #[test]
    fn unmounted_flag_is_frozen() {
        let mut sampler = ScrollSampler::new();
        sampler.resize(2_000, 500);
        let state = ThresholdState::mount(&sampler, 50);
        let handle = state.derived();
        drop(state);

        sampler.sample(400);
        assert!(!handle.get());
        assert_eq!(sampler.subscriber_count(), 0);
    }
}
