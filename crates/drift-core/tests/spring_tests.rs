// Host-side tests for the spring interpolator.

use drift_core::{ConfigError, Spring, Spring2, SpringParams};
use glam::Vec2;
use std::time::Duration;

const FRAME_60HZ: Duration = Duration::from_micros(16_667);

fn step_response(params: SpringParams, target: f32, ticks: usize) -> Vec<f32> {
    let mut spring = Spring::new(params, 0.0);
    spring.set_target(target);
    (0..ticks)
        .map(|_| {
            spring.step(FRAME_60HZ);
            spring.current()
        })
        .collect()
}

#[test]
fn presets_are_not_underdamped() {
    for params in [
        SpringParams::tight(),
        SpringParams::loose(),
        SpringParams::parallax(),
    ] {
        assert!(
            params.damping_ratio() >= 1.0,
            "preset {:?} has damping ratio {}",
            params,
            params.damping_ratio()
        );
    }
}

#[test]
fn tight_step_settles_without_overshoot() {
    // stiffness 200, damping 30, mass 0.5: damping ratio 1.5
    let params = SpringParams::new(200.0, 30.0, 0.5).unwrap();
    assert!((params.damping_ratio() - 1.5).abs() < 1e-5);
    let trace = step_response(params, 100.0, 60);
    for v in &trace {
        assert!(*v <= 100.0 + 1e-3, "overshoot to {v}");
    }
    let settled_at = trace
        .iter()
        .position(|v| (100.0 - v).abs() < 1.0)
        .expect("never settled");
    assert!(settled_at < 50, "settled only after {settled_at} ticks");
}

#[test]
fn error_decreases_monotonically_when_overdamped_or_critical() {
    let cases = [
        SpringParams::tight(),
        SpringParams::loose(),
        SpringParams::parallax(),
        SpringParams::new(100.0, 20.0, 1.0).unwrap(), // critical
    ];
    for params in cases {
        let trace = step_response(params, -250.0, 120);
        let mut prev = 250.0_f32;
        for (i, v) in trace.iter().enumerate() {
            let err = (-250.0 - v).abs();
            assert!(
                err <= prev + 1e-3,
                "{params:?}: error grew at tick {i}: {prev} -> {err}"
            );
            prev = err;
        }
        assert!(prev < 1.0, "{params:?}: still {prev} away after 2s");
    }
}

#[test]
fn underdamped_spring_overshoots() {
    let params = SpringParams::new(300.0, 5.0, 1.0).unwrap();
    let trace = step_response(params, 100.0, 120);
    assert!(trace.iter().any(|v| *v > 100.0));
}

#[test]
fn loose_lags_behind_tight() {
    let tight = step_response(SpringParams::tight(), 100.0, 10);
    let loose = step_response(SpringParams::loose(), 100.0, 10);
    assert!(tight[9] > loose[9], "tight {} loose {}", tight[9], loose[9]);
}

#[test]
fn retarget_keeps_position_and_velocity() {
    let mut spring = Spring::new(SpringParams::tight(), 0.0);
    spring.set_target(100.0);
    for _ in 0..5 {
        spring.step(FRAME_60HZ);
    }
    let (pos, vel) = (spring.current(), spring.velocity());
    spring.set_target(-40.0);
    assert_eq!(spring.current(), pos);
    assert_eq!(spring.velocity(), vel);
    assert!(vel > 0.0);
}

#[test]
fn reset_jumps_and_stops() {
    let mut spring = Spring::new(SpringParams::loose(), 0.0);
    spring.set_target(50.0);
    spring.step(FRAME_60HZ);
    spring.reset(12.0);
    assert_eq!(spring.current(), 12.0);
    assert_eq!(spring.velocity(), 0.0);
    assert!(spring.is_settled(1e-6));
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut spring = Spring::new(SpringParams::tight(), 3.0);
    spring.set_target(10.0);
    spring.step(Duration::ZERO);
    assert_eq!(spring.current(), 3.0);
}

#[test]
fn long_frame_stays_stable() {
    let mut spring = Spring::new(SpringParams::tight(), 0.0);
    spring.set_target(100.0);
    spring.step(Duration::from_secs(5));
    assert!(spring.current().is_finite());
    assert!(spring.current() <= 100.0 + 1e-3);
}

#[test]
fn invalid_params_are_rejected() {
    assert_eq!(
        SpringParams::new(100.0, 10.0, 0.0),
        Err(ConfigError::Mass(0.0))
    );
    assert!(matches!(
        SpringParams::new(100.0, 10.0, -1.0),
        Err(ConfigError::Mass(_))
    ));
    assert!(matches!(
        SpringParams::new(-1.0, 10.0, 1.0),
        Err(ConfigError::Stiffness(_))
    ));
    assert!(matches!(
        SpringParams::new(100.0, f32::NAN, 1.0),
        Err(ConfigError::Damping(_))
    ));
}

#[test]
fn spring_pair_moves_both_axes() {
    let mut pair = Spring2::new(SpringParams::parallax(), Vec2::ZERO);
    pair.set_target(Vec2::new(10.0, -10.0));
    for _ in 0..180 {
        pair.step(FRAME_60HZ);
    }
    let cur = pair.current();
    assert!((cur.x - 10.0).abs() < 0.1);
    assert!((cur.y + 10.0).abs() < 0.1);
}
