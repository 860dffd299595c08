//! Boundary to whatever draws the scene.
//!
//! The core never touches a DOM or GPU; it hands a [`RenderSurface`] one
//! [`Sprite`] per actor, follower ring and parallax shape each frame.

use crate::actor::{ActorId, ColorScheme};
use crate::follower::FollowerRing;
use crate::parallax::{Anchor, ShapeId};

/// Stable address of a drawable across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Actor(ActorId),
    Follower(FollowerRing),
    Shape(ShapeId),
}

/// Positioned, rotatable, fadeable placement in surface units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub key: SpriteKey,
    pub transform: Transform2D,
    pub size: f32,
    pub color: ColorScheme,
    /// Set for sprites that sit at a fixed spot in the container and are
    /// offset from it by `transform`; `None` means `transform` is absolute.
    pub anchor: Option<Anchor>,
}

pub trait RenderSurface {
    fn draw(&mut self, sprite: &Sprite);
}

impl<F: FnMut(&Sprite)> RenderSurface for F {
    fn draw(&mut self, sprite: &Sprite) {
        self(sprite)
    }
}
