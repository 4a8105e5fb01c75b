//! Eased scrolling toward an anchor target with exponential ease-out.
//!
//! Each frame closes a fixed fraction of the remaining distance, so long
//! jumps start fast and decelerate.  Every intermediate offset goes through
//! the sampler, so derived state follows the glide.  Direct scroll input
//! cancels it.

/// Offset animator driven once per frame.
#[derive(Debug, Clone)]
pub struct ScrollGlide {
    target: Option<u32>,
    /// Fraction of the remaining distance covered per 60 Hz frame.
    /// `0` disables gliding; navigation jumps instead.
    speed: f64,
}

impl ScrollGlide {
    const FRAME_SECS: f64 = 1.0 / 60.0;
    /// Snap once closer than this many pixels.
    const SNAP_PX: f64 = 2.0;

    pub fn new(speed: f64) -> Self {
        Self {
            target: None,
            speed: if speed.is_nan() { 0.0 } else { speed.clamp(0.0, 1.0) },
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.speed > 0.0
    }

    pub fn start(&mut self, target: u32) {
        self.target = Some(target);
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    /// Next offset `dt_secs` after `current`, or `None` while idle.  The
    /// final step lands exactly on the target and ends the glide.
    pub fn step(&mut self, current: u32, dt_secs: f64) -> Option<u32> {
        let target = self.target?;
        let frames = (dt_secs / Self::FRAME_SECS).max(0.0);
        let keep = (1.0 - self.speed).powf(frames);
        let remaining = (f64::from(target) - f64::from(current)) * keep;
        if remaining.abs() < Self::SNAP_PX {
            self.target = None;
            return Some(target);
        }
        Some((f64::from(target) - remaining).round().max(0.0) as u32)
    }
}
