//! The click-triggered turtle dance: spin, jump, wiggle.
//!
//! Each channel is its own keyframe track with normalized times in `[0, 1]`;
//! segments between keyframes are eased with CSS `ease-in-out`.

use crate::constants::DANCE_DURATION;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub t: f32,
    pub value: f32,
}

const fn kf(t: f32, value: f32) -> Keyframe {
    Keyframe { t, value }
}

/// Sampled dance output layered on top of the actor's resting transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DancePose {
    pub rotation_deg: f32,
    pub scale: f32,
    pub y_offset: f32,
}

impl DancePose {
    pub const REST: Self = Self {
        rotation_deg: 0.0,
        scale: 1.0,
        y_offset: 0.0,
    };
}

#[derive(Clone, Copy, Debug)]
pub struct DanceSequence {
    pub duration: Duration,
    pub rotation_deg: &'static [Keyframe],
    pub scale: &'static [Keyframe],
    pub y_offset: &'static [Keyframe],
}

const THIRD: f32 = 1.0 / 3.0;

pub static DANCE: DanceSequence = DanceSequence {
    duration: DANCE_DURATION,
    rotation_deg: &[kf(0.0, 0.0), kf(THIRD, 360.0), kf(2.0 * THIRD, -360.0), kf(1.0, 0.0)],
    scale: &[
        kf(0.0, 1.0),
        kf(0.25, 1.4),
        kf(0.5, 0.8),
        kf(0.75, 1.3),
        kf(1.0, 1.0),
    ],
    y_offset: &[
        kf(0.0, 0.0),
        kf(0.2, -60.0),
        kf(0.4, -30.0),
        kf(0.6, -70.0),
        kf(0.8, -20.0),
        kf(1.0, 0.0),
    ],
};

impl DanceSequence {
    /// Pose after `elapsed` of the choreography; clamps past the end.
    pub fn pose_at(&self, elapsed: Duration) -> DancePose {
        let total = self.duration.as_secs_f32();
        let progress = if total > 0.0 {
            (elapsed.as_secs_f32() / total).clamp(0.0, 1.0)
        } else {
            1.0
        };
        DancePose {
            rotation_deg: sample_track(self.rotation_deg, progress),
            scale: sample_track(self.scale, progress),
            y_offset: sample_track(self.y_offset, progress),
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

fn sample_track(track: &[Keyframe], progress: f32) -> f32 {
    let (first, last) = match (track.first(), track.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return 0.0,
    };
    if progress <= first.t {
        return first.value;
    }
    if progress >= last.t {
        return last.value;
    }
    for pair in track.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if progress <= b.t {
            let span = b.t - a.t;
            let local = if span > 0.0 {
                (progress - a.t) / span
            } else {
                1.0
            };
            return a.value + (b.value - a.value) * ease_in_out(local);
        }
    }
    last.value
}

// cubic-bezier(0.42, 0, 0.58, 1)
const EASE_X1: f32 = 0.42;
const EASE_X2: f32 = 0.58;

#[inline]
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// CSS `ease-in-out` timing function.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let mut s = t;
    for _ in 0..8 {
        let err = bezier(EASE_X1, EASE_X2, s) - t;
        if err.abs() < 1e-6 {
            break;
        }
        let slope = bezier_slope(EASE_X1, EASE_X2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }
    bezier(0.0, 1.0, s)
}
