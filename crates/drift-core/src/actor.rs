//! One robo turtle: delayed spawn, left-to-right traversal, cooldown and
//! respawn, plus the click-triggered dance that overrides all of it.

use crate::constants::{HOVER_SCALE, RESPAWN_COOLDOWN};
use crate::dance::{DancePose, DANCE};
use crate::error::ConfigError;
use crate::field::Field;
use crate::render::Transform2D;
use rand::prelude::*;
use smallvec::SmallVec;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Cyan,
    Purple,
    Green,
    Pink,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

const fn hsl(h: f32, s: f32, l: f32) -> Hsl {
    Hsl { h, s, l }
}

const NEON_CYAN: Hsl = hsl(180.0, 100.0, 50.0);
const NEON_PURPLE: Hsl = hsl(280.0, 100.0, 70.0);
const NEON_GREEN: Hsl = hsl(120.0, 100.0, 50.0);
const NEON_PINK: Hsl = hsl(320.0, 100.0, 70.0);
const NEON_RED: Hsl = hsl(0.0, 100.0, 50.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent: Hsl,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [Self::Cyan, Self::Purple, Self::Green, Self::Pink];

    pub fn palette(self) -> Palette {
        let (primary, secondary, accent) = match self {
            Self::Cyan => (NEON_CYAN, NEON_PURPLE, NEON_GREEN),
            Self::Purple => (NEON_PURPLE, NEON_PINK, NEON_CYAN),
            Self::Green => (NEON_GREEN, NEON_CYAN, NEON_PURPLE),
            Self::Pink => (NEON_PINK, NEON_RED, NEON_PURPLE),
        };
        Palette {
            primary,
            secondary,
            accent,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Pink => "pink",
        }
    }
}

/// Per-actor constants, validated once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorConfig {
    speed: f32,
    size: f32,
    color_scheme: ColorScheme,
    spawn_delay: Duration,
}

impl ActorConfig {
    pub fn new(
        speed: f32,
        size: f32,
        color_scheme: ColorScheme,
        spawn_delay: Duration,
    ) -> Result<Self, ConfigError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::Speed(speed));
        }
        if !size.is_finite() || size <= 0.0 {
            return Err(ConfigError::Size(size));
        }
        Ok(Self {
            speed,
            size,
            color_scheme,
            spawn_delay,
        })
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn spawn_delay(&self) -> Duration {
        self.spawn_delay
    }
}

/// How `speed` maps to horizontal motion per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpeedMode {
    /// `x += speed` on every tick, whatever the tick length. Apparent velocity
    /// follows the host's frame rate.
    PerTick,
    /// `x += speed * dt * reference_hz`: the `PerTick` velocity at
    /// `reference_hz`, independent of the actual frame rate.
    DeltaScaled { reference_hz: f32 },
}

impl Default for SpeedMode {
    fn default() -> Self {
        Self::PerTick
    }
}

/// Scheduler phase. A cooldown that was running when the dance started keeps
/// counting down inside `Dancing`; the respawn fires on time, mid-dance if
/// need be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Spawning { remaining: Duration },
    Traveling,
    Resting { remaining: Duration },
    Dancing {
        elapsed: Duration,
        cooldown: Option<Duration>,
    },
}

/// Transitions taken in one tick. A dance can end on the same frame its
/// cooldown runs out, hence room for two.
pub type ActorEvents = SmallVec<[ActorEvent; 2]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorEvent {
    Spawned,
    Rested,
    Respawned,
    DanceStarted,
    DanceFinished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    DanceStarted,
    AlreadyDancing,
    NotSpawned,
    Ignored,
}

pub struct Actor {
    id: ActorId,
    config: ActorConfig,
    x: f32,
    y: f32,
    phase: Phase,
    hovered: bool,
    rng: StdRng,
}

impl Actor {
    pub fn new(id: ActorId, config: ActorConfig, field: &Field, rng: StdRng) -> Self {
        let (min_y, _) = field.spawn_y_range();
        Self {
            id,
            config,
            x: field.left_edge(),
            y: min_y,
            phase: Phase::Spawning {
                remaining: config.spawn_delay,
            },
            hovered: false,
            rng,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, Phase::Spawning { .. })
    }

    pub fn is_dancing(&self) -> bool {
        matches!(self.phase, Phase::Dancing { .. })
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Starts the dance unless one is already running. Never preempts.
    pub fn click(&mut self) -> ClickOutcome {
        let cooldown = match self.phase {
            Phase::Dancing { .. } => return ClickOutcome::AlreadyDancing,
            Phase::Spawning { .. } => return ClickOutcome::NotSpawned,
            Phase::Traveling => None,
            Phase::Resting { remaining } => Some(remaining),
        };
        self.phase = Phase::Dancing {
            elapsed: Duration::ZERO,
            cooldown,
        };
        log::debug!("[actor] {} dance started", self.id);
        ClickOutcome::DanceStarted
    }

    /// Advances one frame and returns the transitions taken, in order.
    pub fn tick(&mut self, dt: Duration, field: &Field, mode: SpeedMode) -> ActorEvents {
        let mut events = ActorEvents::new();
        match self.phase {
            Phase::Spawning { remaining } => {
                let remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    self.enter_field(field);
                    log::debug!("[actor] {} spawned at y={:.1}", self.id, self.y);
                    events.push(ActorEvent::Spawned);
                } else {
                    self.phase = Phase::Spawning { remaining };
                }
            }
            Phase::Traveling => {
                let step = match mode {
                    SpeedMode::PerTick => self.config.speed,
                    SpeedMode::DeltaScaled { reference_hz } => {
                        self.config.speed * dt.as_secs_f32() * reference_hz
                    }
                };
                let next_x = self.x + step;
                if next_x > field.right_edge() {
                    self.phase = Phase::Resting {
                        remaining: RESPAWN_COOLDOWN,
                    };
                    log::debug!("[actor] {} resting at x={:.1}", self.id, self.x);
                    events.push(ActorEvent::Rested);
                } else {
                    self.x = next_x;
                }
            }
            Phase::Resting { remaining } => {
                let remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    self.enter_field(field);
                    log::debug!("[actor] {} respawned at y={:.1}", self.id, self.y);
                    events.push(ActorEvent::Respawned);
                } else {
                    self.phase = Phase::Resting { remaining };
                }
            }
            Phase::Dancing { elapsed, cooldown } => {
                let elapsed = elapsed + dt;
                let cooldown = match cooldown.map(|c| c.saturating_sub(dt)) {
                    Some(left) if left.is_zero() => {
                        // Respawn on schedule; the dance carries on from the left edge
                        self.reposition(field);
                        log::debug!("[actor] {} respawned mid-dance at y={:.1}", self.id, self.y);
                        events.push(ActorEvent::Respawned);
                        None
                    }
                    other => other,
                };
                if DANCE.is_finished(elapsed) {
                    self.phase = match cooldown {
                        Some(remaining) => Phase::Resting { remaining },
                        None => Phase::Traveling,
                    };
                    log::debug!("[actor] {} dance finished", self.id);
                    events.push(ActorEvent::DanceFinished);
                } else {
                    self.phase = Phase::Dancing { elapsed, cooldown };
                }
            }
        }
        events
    }

    fn enter_field(&mut self, field: &Field) {
        self.reposition(field);
        self.phase = Phase::Traveling;
    }

    /// Back to the left edge at a fresh random height.
    fn reposition(&mut self, field: &Field) {
        let (min_y, max_y) = field.spawn_y_range();
        self.x = field.left_edge();
        self.y = min_y + self.rng.gen::<f32>() * (max_y - min_y);
    }

    pub fn dance_pose(&self) -> DancePose {
        match self.phase {
            Phase::Dancing { elapsed, .. } => DANCE.pose_at(elapsed),
            _ => DancePose::REST,
        }
    }

    pub fn transform(&self) -> Transform2D {
        let pose = self.dance_pose();
        let hover = if self.hovered { HOVER_SCALE } else { 1.0 };
        Transform2D {
            x: self.x,
            y: self.y + pose.y_offset,
            rotation_deg: pose.rotation_deg,
            scale: pose.scale * hover,
            opacity: if self.is_visible() { 1.0 } else { 0.0 },
        }
    }
}
