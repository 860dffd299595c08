use crate::constants::SPEED_MODE_DELTA;
use drift_core::constants::REFERENCE_TICK_HZ;
use drift_core::{SceneConfig, SpeedMode};

/// Reads the container's speed attribute. Anything other than `delta`
/// keeps the per-frame step.
pub fn speed_mode_from_attr(value: Option<&str>) -> SpeedMode {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case(SPEED_MODE_DELTA) => SpeedMode::DeltaScaled {
            reference_hz: REFERENCE_TICK_HZ,
        },
        _ => SpeedMode::PerTick,
    }
}

pub fn scene_config(speed_attr: Option<&str>, seed: u64) -> SceneConfig {
    SceneConfig {
        speed_mode: speed_mode_from_attr(speed_attr),
        seed,
        ..SceneConfig::default()
    }
}
