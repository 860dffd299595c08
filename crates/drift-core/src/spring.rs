//! Damped harmonic interpolation for pointer-driven decorations.
//!
//! A [`Spring`] chases a target that may change every frame. Each step
//! integrates `a = (k * (target - x) - c * v) / m` with semi-implicit Euler,
//! splitting long frames into fixed-size substeps so the same parameters stay
//! stable on 30 Hz and 144 Hz displays alike.

use crate::constants::{
    LOOSE_SPRING, MAX_FRAME_DT, PARALLAX_SPRING, SPRING_MAX_SUBSTEP_SEC, TIGHT_SPRING,
};
use crate::error::ConfigError;
use glam::Vec2;
use std::time::Duration;

/// Immutable spring coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Result<Self, ConfigError> {
        if !stiffness.is_finite() || stiffness < 0.0 {
            return Err(ConfigError::Stiffness(stiffness));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(ConfigError::Damping(damping));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ConfigError::Mass(mass));
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }

    const fn preset(p: [f32; 3]) -> Self {
        Self {
            stiffness: p[0],
            damping: p[1],
            mass: p[2],
        }
    }

    /// Fast, barely lagging response used by the inner follower ring.
    pub const fn tight() -> Self {
        Self::preset(TIGHT_SPRING)
    }

    /// Slower, heavier response used by the outer follower ring.
    pub const fn loose() -> Self {
        Self::preset(LOOSE_SPRING)
    }

    /// Response shared by the parallax shapes.
    pub const fn parallax() -> Self {
        Self::preset(PARALLAX_SPRING)
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// `c / (2 * sqrt(k * m))`; 1 is critical, above 1 is overdamped.
    pub fn damping_ratio(&self) -> f32 {
        let denom = 2.0 * (self.stiffness * self.mass).sqrt();
        if denom > 0.0 {
            self.damping / denom
        } else {
            f32::INFINITY
        }
    }

    /// Undamped angular frequency `sqrt(k / m)` in rad/s.
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }
}

/// One scalar channel animated toward a moving target.
#[derive(Clone, Debug)]
pub struct Spring {
    params: SpringParams,
    current: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Creates a spring at rest on `initial`.
    pub fn new(params: SpringParams, initial: f32) -> Self {
        Self {
            params,
            current: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retargets without touching position or velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps to `value` and stops. The only discontinuous operation.
    pub fn reset(&mut self, value: f32) {
        self.current = value;
        self.velocity = 0.0;
        self.target = value;
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.current).abs() < epsilon && self.velocity.abs() < epsilon
    }

    pub fn step(&mut self, dt: Duration) {
        let dt_sec = dt.min(MAX_FRAME_DT).as_secs_f32();
        if dt_sec <= 0.0 {
            return;
        }
        let substeps = (dt_sec / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / substeps as f32;
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        for _ in 0..substeps {
            let accel =
                (stiffness * (self.target - self.current) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.current += self.velocity * h;
        }
    }
}

/// Two independent springs driving an x/y offset.
#[derive(Clone, Debug)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(params: SpringParams, initial: Vec2) -> Self {
        Self {
            x: Spring::new(params, initial.x),
            y: Spring::new(params, initial.y),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn step(&mut self, dt: Duration) {
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn current(&self) -> Vec2 {
        Vec2::new(self.x.current(), self.y.current())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }
}
