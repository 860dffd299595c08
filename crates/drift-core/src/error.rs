use thiserror::Error;

/// Rejected constructor-time configuration.
///
/// Every value is checked once when the actor or spring is built so that a
/// bad preset fails loudly instead of stalling or dividing by zero mid-frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("actor speed must be positive and finite, got {0}")]
    Speed(f32),

    #[error("actor size must be positive and finite, got {0}")]
    Size(f32),

    #[error("spring mass must be positive and finite, got {0}")]
    Mass(f32),

    #[error("spring stiffness must be non-negative and finite, got {0}")]
    Stiffness(f32),

    #[error("spring damping must be non-negative and finite, got {0}")]
    Damping(f32),

    #[error("traversal bound must be non-negative and finite, got {0}")]
    Bound(f32),

    #[error("reference tick rate must be positive and finite, got {0}")]
    ReferenceHz(f32),

    #[error("viewport must have finite, non-negative size, got {width}x{height}")]
    Viewport { width: f32, height: f32 },
}
