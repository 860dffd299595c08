use crate::constants::{HERO_MAX_HEIGHT, TOP_MARGIN, VERTICAL_RESERVE};
use crate::error::ConfigError;

/// Size of the visible area the actors cross.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ConfigError::Viewport { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Horizontal traversal bounds and vertical spawn band derived from a viewport.
///
/// Actors enter at `-bound`, leave past `width + bound`, and spawn with
/// `y` in `[TOP_MARGIN, TOP_MARGIN + max(0, min(height, 800) - 300)]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    bound: f32,
    width: f32,
    min_y: f32,
    max_y: f32,
}

impl Field {
    pub fn new(viewport: Viewport, bound: f32) -> Result<Self, ConfigError> {
        if !bound.is_finite() || bound < 0.0 {
            return Err(ConfigError::Bound(bound));
        }
        let Viewport { width, height } = viewport;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ConfigError::Viewport { width, height });
        }
        let hero_height = viewport.height.min(HERO_MAX_HEIGHT);
        let span = (hero_height - VERTICAL_RESERVE).max(0.0);
        Ok(Self {
            bound,
            width: viewport.width,
            min_y: TOP_MARGIN,
            max_y: TOP_MARGIN + span,
        })
    }

    pub fn bound(&self) -> f32 {
        self.bound
    }

    /// Where every traversal starts.
    pub fn left_edge(&self) -> f32 {
        -self.bound
    }

    /// Crossing this ends a traversal.
    pub fn right_edge(&self) -> f32 {
        self.width + self.bound
    }

    pub fn spawn_y_range(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }
}
