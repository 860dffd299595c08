use std::time::Duration;

// Shared motion tuning constants for the hero scene.

// Traversal
pub const DEFAULT_BOUND: f32 = 300.0; // off-screen margin on both sides of the viewport
pub const RESPAWN_COOLDOWN: Duration = Duration::from_millis(5000);
pub const REFERENCE_TICK_HZ: f32 = 60.0;

// Spawn height range: y = TOP_MARGIN + rand * (min(height, HERO_MAX_HEIGHT) - VERTICAL_RESERVE)
pub const HERO_MAX_HEIGHT: f32 = 800.0;
pub const TOP_MARGIN: f32 = 150.0;
pub const VERTICAL_RESERVE: f32 = 300.0;

// Interaction
pub const DANCE_DURATION: Duration = Duration::from_millis(2500);
pub const HOVER_SCALE: f32 = 1.1;

// Pointer -> parallax base offset divisor
pub const PARALLAX_DIVISOR: f32 = 20.0;
pub const PARALLAX_MULTIPLIERS: [f32; 3] = [1.0, -0.5, 0.8];

// Spring presets: (stiffness, damping, mass)
pub const TIGHT_SPRING: [f32; 3] = [200.0, 30.0, 0.5]; // inner follower ring
pub const LOOSE_SPRING: [f32; 3] = [100.0, 20.0, 0.8]; // outer follower ring
pub const PARALLAX_SPRING: [f32; 3] = [150.0, 25.0, 1.0]; // parallax shapes

// Spring integration: substep size and per-frame clamp
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100);

// Follower rings (size in units; the ring is centered on the pointer)
pub const INNER_RING_SIZE: f32 = 16.0;
pub const OUTER_RING_SIZE: f32 = 32.0;

// Layout
pub const COMPACT_BREAKPOINT: f32 = 768.0; // narrower viewports get a single small actor
