use crate::actor::ColorScheme;
use crate::constants::{INNER_RING_SIZE, OUTER_RING_SIZE};
use crate::spring::SpringParams;

/// The two cursor rings. The inner one hugs the pointer, the outer one trails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FollowerRing {
    Inner,
    Outer,
}

impl FollowerRing {
    pub const ALL: [FollowerRing; 2] = [Self::Inner, Self::Outer];

    pub fn size(self) -> f32 {
        match self {
            Self::Inner => INNER_RING_SIZE,
            Self::Outer => OUTER_RING_SIZE,
        }
    }

    pub fn spring(self) -> SpringParams {
        match self {
            Self::Inner => SpringParams::tight(),
            Self::Outer => SpringParams::loose(),
        }
    }

    pub fn color(self) -> ColorScheme {
        match self {
            Self::Inner => ColorScheme::Cyan,
            Self::Outer => ColorScheme::Purple,
        }
    }

    /// Ring origin is its top-left corner, so the target is offset by half
    /// its size to center it on the pointer.
    pub fn center_offset(self) -> f32 {
        -self.size() * 0.5
    }
}
