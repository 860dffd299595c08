//! Pointer-reactive decorations that drift at different depths.
//!
//! Every shape owns a spring pair chasing `multiplier * base`, where `base` is
//! the pointer offset from the hero center scaled down by
//! [`PARALLAX_DIVISOR`](crate::constants::PARALLAX_DIVISOR). Opposite signs
//! make shapes appear in front of or behind the content.

use crate::actor::ColorScheme;
use crate::dance::ease_in_out;
use crate::render::Transform2D;
use crate::spring::{Spring2, SpringParams};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

/// Endless `from -> to -> from` rotation with a one-off start delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wobble {
    pub from_deg: f32,
    pub to_deg: f32,
    pub period: Duration,
    pub delay: Duration,
}

impl Wobble {
    pub fn angle_at(&self, t: Duration) -> f32 {
        let period = self.period.as_secs_f32();
        if t <= self.delay || period <= 0.0 {
            return self.from_deg;
        }
        let cycle = ((t - self.delay).as_secs_f32() % period) / period;
        let (a, b, local) = if cycle < 0.5 {
            (self.from_deg, self.to_deg, cycle * 2.0)
        } else {
            (self.to_deg, self.from_deg, (cycle - 0.5) * 2.0)
        };
        a + (b - a) * ease_in_out(local)
    }
}

/// Resting place of a shape inside the hero container, as insets from its
/// edges. Unset sides are left to the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl Anchor {
    pub const fn top_left(top: f32, left: f32) -> Self {
        Self {
            top: Some(top),
            right: None,
            bottom: None,
            left: Some(left),
        }
    }

    pub const fn top_right(top: f32, right: f32) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            bottom: None,
            left: None,
        }
    }

    pub const fn bottom_left(bottom: f32, left: f32) -> Self {
        Self {
            top: None,
            right: None,
            bottom: Some(bottom),
            left: Some(left),
        }
    }

    /// `(side, inset)` pairs for the sides that are set.
    pub fn insets(&self) -> impl Iterator<Item = (&'static str, f32)> {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
        .into_iter()
        .filter_map(|(side, v)| v.map(|v| (side, v)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    pub multiplier: f32,
    pub size: f32,
    pub color: ColorScheme,
    pub opacity: f32,
    pub anchor: Anchor,
    pub wobble: Wobble,
}

pub struct ParallaxShape {
    id: ShapeId,
    spec: ShapeSpec,
    spring: Spring2,
}

impl ParallaxShape {
    pub fn new(id: ShapeId, spec: ShapeSpec, params: SpringParams) -> Self {
        Self {
            id,
            spec,
            spring: Spring2::new(params, Vec2::ZERO),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn spec(&self) -> &ShapeSpec {
        &self.spec
    }

    pub fn spring(&self) -> &Spring2 {
        &self.spring
    }

    pub fn retarget(&mut self, base: Vec2) {
        self.spring.set_target(base * self.spec.multiplier);
    }

    pub fn step(&mut self, dt: Duration) {
        self.spring.step(dt);
    }

    pub fn transform(&self, clock: Duration) -> Transform2D {
        let offset = self.spring.current();
        Transform2D {
            x: offset.x,
            y: offset.y,
            rotation_deg: self.spec.wobble.angle_at(clock),
            scale: 1.0,
            opacity: self.spec.opacity,
        }
    }
}
