//! Entrance animations: timed reveals and scroll-triggered "in view" latches.
//!
//! Both are cosmetic.  A reveal is a pure function of elapsed time and
//! never gates anything else; a latch flips once and then unsubscribes.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::scroll::{Derived, ScrollSample, ScrollSampler, Subscription};

// ───────────────────────────────────────── timed reveal ──────

/// Delayed linear fade-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub delay: Duration,
    pub duration: Duration,
}

impl Reveal {
    pub const fn new(delay: Duration, duration: Duration) -> Self {
        Self { delay, duration }
    }

    /// Staggered reveal for the `index`-th item of a grid.
    pub fn staggered(base: Reveal, step: Duration, index: usize) -> Self {
        let extra = step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
        Self {
            delay: base.delay.saturating_add(extra),
            duration: base.duration,
        }
    }

    /// `0.0` before the delay, `1.0` once finished.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }
}

// ───────────────────────────────────────── in-view latch ─────

/// Vertical extent of a document section in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: u32,
    pub height: u32,
}

/// `true` when `span` overlaps the viewport shrunk by `margin` on each edge.
pub fn in_view(span: Span, sample: ScrollSample, margin: u32) -> bool {
    if sample.viewport_height == 0 || span.height == 0 {
        return false;
    }
    let view_top = sample.offset_y.saturating_add(margin);
    let view_bottom = sample
        .offset_y
        .saturating_add(sample.viewport_height)
        .saturating_sub(margin);
    if view_bottom <= view_top {
        return false;
    }
    span.top < view_bottom && span.top.saturating_add(span.height) > view_top
}

/// Flips to `true` the first time its section scrolls into view and then
/// stays revealed.  The sampler subscription is released at that moment.
#[derive(Debug)]
pub struct InViewLatch {
    revealed: Derived<bool>,
    subscription: Rc<RefCell<Option<Subscription>>>,
}

impl InViewLatch {
    pub fn mount(sampler: &ScrollSampler, span: Span, margin: u32) -> Self {
        let revealed = Derived::new(in_view(span, sampler.current(), margin));
        let subscription: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        if revealed.get() {
            return Self {
                revealed,
                subscription,
            };
        }

        let out = revealed.clone();
        // Weak: dropping the latch must still tear the subscription down.
        let slot = Rc::downgrade(&subscription);
        let sub = sampler.subscribe(move |sample| {
            if out.get() || !in_view(span, sample, margin) {
                return;
            }
            out.set(true);
            if let Some(slot) = slot.upgrade() {
                let done = slot.borrow_mut().take();
                drop(done);
            }
        });
        *subscription.borrow_mut() = Some(sub);
        Self {
            revealed,
            subscription,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    /// `true` while still waiting for the section to appear.
    pub fn is_listening(&self) -> bool {
        self.subscription.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn reveal_waits_for_delay() {
        let r = Reveal::new(secs(2.2), secs(0.8));
        assert_eq!(r.progress(secs(1.0)), 0.0);
        assert_eq!(r.progress(secs(2.2)), 0.0);
        assert!((r.progress(secs(2.6)) - 0.5).abs() < 1e-9);
        assert!(r.is_done(secs(3.0)));
    }

    #[test]
    fn zero_duration_is_instant_after_delay() {
        let r = Reveal::new(secs(0.3), Duration::ZERO);
        assert_eq!(r.progress(secs(0.2)), 0.0);
        assert_eq!(r.progress(secs(0.3)), 1.0);
    }

    #[test]
    fn stagger_adds_per_index() {
        let base = Reveal::new(Duration::ZERO, secs(0.5));
        let third = Reveal::staggered(base, Duration::from_millis(100), 2);
        assert_eq!(third.delay, Duration::from_millis(200));
        assert_eq!(third.duration, base.duration);
    }

    #[test]
    fn in_view_respects_margin() {
        let sample = ScrollSample {
            offset_y: 0,
            max_scrollable: 2_000,
            viewport_height: 600,
        };
        let span = Span {
            top: 550,
            height: 200,
        };
        assert!(in_view(span, sample, 0));
        assert!(!in_view(span, sample, 100));
    }

    #[test]
    fn no_viewport_means_nothing_in_view() {
        let span = Span { top: 0, height: 100 };
        assert!(!in_view(span, ScrollSample::default(), 0));
    }

    #[test]
    fn latch_reveals_once_and_unsubscribes() {
        let mut sampler = ScrollSampler::new();
        sampler.resize(3_000, 500);
        let latch = InViewLatch::mount(
            &sampler,
            Span {
                top: 1_200,
                height: 300,
            },
            0,
        );
        assert!(!latch.is_revealed());
        assert!(latch.is_listening());

        sampler.sample(900);
        assert!(latch.is_revealed());
        assert!(!latch.is_listening());
        assert_eq!(sampler.subscriber_count(), 0);

        sampler.sample(0);
        assert!(latch.is_revealed());
    }

    #[test]
    fn latch_visible_at_mount_never_subscribes() {
        let mut sampler = ScrollSampler::new();
        sampler.resize(3_000, 500);
        let latch = InViewLatch::mount(&sampler, Span { top: 0, height: 100 }, 0);
        assert!(latch.is_revealed());
        assert_eq!(sampler.subscriber_count(), 0);
    }

    #[test]
    fn dropping_unrevealed_latch_deregisters() {
        let mut sampler = ScrollSampler::new();
        sampler.resize(3_000, 500);
        let latch = InViewLatch::mount(
            &sampler,
            Span {
                top: 2_000,
                height: 100,
            },
            0,
        );
        assert_eq!(sampler.subscriber_count(), 1);
        drop(latch);
        assert_eq!(sampler.subscriber_count(), 0);
        sampler.sample(2_000);
    }
}
