//! # Fill Animation
//!
//! This module contains the easing curves and the one-shot clock that drives
//! the ring fill animation. The chart arms the clock on the first frame it is
//! actually visible; every ring interpolates from zero to its target under the
//! same curve, and the clock never re-fires on later renders.

/// Easing curves for time-based interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map a linear time fraction in [0, 1] onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Phase of the one-shot fill animation
#[derive(Debug, Clone, Copy, PartialEq)]
enum FillPhase {
    /// Constructed, not yet visible
    Pending,
    /// First visible frame seen, interpolating
    Running { started_at: f64 },
    /// Target values reached
    Settled,
}

/// One-shot clock driving every ring's fill from zero to its target
#[derive(Debug, Clone)]
pub struct FillAnimation {
    delay: f32,
    duration: f32,
    easing: Easing,
    phase: FillPhase,
}

impl FillAnimation {
    pub fn new(delay: f32, duration: f32, easing: Easing) -> Self {
        Self {
            delay,
            duration,
            easing,
            phase: FillPhase::Pending,
        }
    }

    /// Arm the clock; calls after the first are ignored
    pub fn start(&mut self, now: f64) {
        if let FillPhase::Pending = self.phase {
            self.phase = FillPhase::Running { started_at: now };
        }
    }

    /// Eased progress in [0, 1] at `now`, advancing to settled when done
    pub fn progress(&mut self, now: f64) -> f32 {
        match self.phase {
            FillPhase::Pending => 0.0,
            FillPhase::Settled => 1.0,
            FillPhase::Running { started_at } => {
                let elapsed = (now - started_at) as f32 - self.delay;
                if elapsed <= 0.0 {
                    0.0
                } else if elapsed >= self.duration {
                    self.phase = FillPhase::Settled;
                    1.0
                } else {
                    self.easing.apply(elapsed / self.duration)
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, FillPhase::Running { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, FillPhase::Settled)
    }

    pub fn has_started(&self) -> bool {
        !matches!(self.phase, FillPhase::Pending)
    }
}
