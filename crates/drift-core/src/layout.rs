//! The fixed cast of the hero section.

use crate::actor::{ActorConfig, ColorScheme};
use crate::constants::{COMPACT_BREAKPOINT, PARALLAX_MULTIPLIERS};
use crate::error::ConfigError;
use crate::field::Viewport;
use crate::parallax::{Anchor, ShapeSpec, Wobble};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// Four turtles with staggered entrances.
    Wide,
    /// One small turtle; narrow screens cannot afford more.
    Compact,
}

impl LayoutKind {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        if viewport.width < COMPACT_BREAKPOINT {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}

// (speed, size, color, spawn delay ms)
const WIDE_CAST: [(f32, f32, ColorScheme, u64); 4] = [
    (2.0, 180.0, ColorScheme::Cyan, 0),
    (1.5, 150.0, ColorScheme::Purple, 3000),
    (2.5, 120.0, ColorScheme::Green, 6000),
    (1.8, 160.0, ColorScheme::Pink, 9000),
];

const COMPACT_CAST: [(f32, f32, ColorScheme, u64); 1] = [(2.0, 120.0, ColorScheme::Cyan, 0)];

pub fn actor_configs(kind: LayoutKind) -> Result<SmallVec<[ActorConfig; 4]>, ConfigError> {
    let cast: &[(f32, f32, ColorScheme, u64)] = match kind {
        LayoutKind::Wide => &WIDE_CAST,
        LayoutKind::Compact => &COMPACT_CAST,
    };
    cast.iter()
        .map(|&(speed, size, color, delay_ms)| {
            ActorConfig::new(speed, size, color, Duration::from_millis(delay_ms))
        })
        .collect()
}

pub fn parallax_shapes() -> [ShapeSpec; 3] {
    let [near, back, front] = PARALLAX_MULTIPLIERS;
    [
        ShapeSpec {
            multiplier: near,
            size: 64.0,
            color: ColorScheme::Cyan,
            opacity: 0.3,
            anchor: Anchor::top_left(80.0, 80.0),
            wobble: Wobble {
                from_deg: 45.0,
                to_deg: 225.0,
                period: Duration::from_secs(8),
                delay: Duration::ZERO,
            },
        },
        ShapeSpec {
            multiplier: back,
            size: 48.0,
            color: ColorScheme::Purple,
            opacity: 0.4,
            anchor: Anchor::top_right(160.0, 128.0),
            wobble: Wobble {
                from_deg: 12.0,
                to_deg: 192.0,
                period: Duration::from_secs(10),
                delay: Duration::from_secs(1),
            },
        },
        ShapeSpec {
            multiplier: front,
            size: 80.0,
            color: ColorScheme::Green,
            opacity: 0.35,
            anchor: Anchor::bottom_left(128.0, 160.0),
            wobble: Wobble {
                from_deg: 90.0,
                to_deg: 450.0,
                period: Duration::from_secs(12),
                delay: Duration::from_secs(2),
            },
        },
    ]
}
