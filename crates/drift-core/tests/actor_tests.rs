// Host-side tests for the actor scheduler and its dance override.

use drift_core::{
    Actor, ActorConfig, ActorEvent, ActorId, ClickOutcome, ColorScheme, ConfigError, Field, Phase,
    SpeedMode, Viewport,
};
use rand::prelude::*;
use std::time::Duration;

const MS10: Duration = Duration::from_millis(10);

fn field(width: f32, height: f32) -> Field {
    Field::new(Viewport::new(width, height).unwrap(), 300.0).unwrap()
}

fn actor(speed: f32, delay_ms: u64, field: &Field) -> Actor {
    let config = ActorConfig::new(
        speed,
        180.0,
        ColorScheme::Cyan,
        Duration::from_millis(delay_ms),
    )
    .unwrap();
    Actor::new(ActorId(0), config, field, StdRng::seed_from_u64(7))
}

fn run(actor: &mut Actor, field: &Field, ticks: usize) -> Vec<ActorEvent> {
    (0..ticks)
        .flat_map(|_| actor.tick(MS10, field, SpeedMode::PerTick))
        .collect()
}

/// Ticks until the actor leaves the field and starts resting.
fn run_until_resting(actor: &mut Actor, field: &Field) {
    for _ in 0..10_000 {
        if actor.tick(MS10, field, SpeedMode::PerTick).contains(&ActorEvent::Rested) {
            return;
        }
    }
    panic!("actor never reached the far edge");
}

#[test]
fn stays_hidden_until_spawn_delay_elapses() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 3000, &f);
    assert!(!a.is_visible());
    assert_eq!(a.transform().opacity, 0.0);

    assert!(run(&mut a, &f, 299).is_empty());
    assert!(!a.is_visible());

    assert_eq!(a.tick(MS10, &f, SpeedMode::PerTick).as_slice(), [ActorEvent::Spawned]);
    assert!(a.is_visible());
    assert_eq!(a.phase(), Phase::Traveling);
    assert_eq!(a.x(), -300.0);
    assert_eq!(a.transform().opacity, 1.0);
}

#[test]
fn spawn_height_respects_capped_band() {
    let f = field(1000.0, 1200.0);
    assert_eq!(f.spawn_y_range(), (150.0, 650.0));
    for seed in 0..50 {
        let config = ActorConfig::new(2.0, 100.0, ColorScheme::Pink, Duration::ZERO).unwrap();
        let mut a = Actor::new(ActorId(seed), config, &f, StdRng::seed_from_u64(seed as u64));
        a.tick(MS10, &f, SpeedMode::PerTick);
        assert!((150.0..=650.0).contains(&a.y()), "y={} out of band", a.y());
    }
}

#[test]
fn short_viewport_collapses_spawn_band() {
    let f = field(1000.0, 200.0);
    assert_eq!(f.spawn_y_range(), (150.0, 150.0));
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    assert_eq!(a.y(), 150.0);
}

#[test]
fn travels_exactly_speed_per_tick_and_reaches_boundary_after_800_ticks() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 0, &f);
    assert_eq!(a.tick(MS10, &f, SpeedMode::PerTick).as_slice(), [ActorEvent::Spawned]);

    let mut prev = a.x();
    for i in 0..800 {
        assert!(a.tick(MS10, &f, SpeedMode::PerTick).is_empty(), "tick {i}");
        assert_eq!(a.x() - prev, 2.0);
        prev = a.x();
    }
    assert_eq!(a.x(), 1300.0);
    assert_eq!(a.phase(), Phase::Traveling);

    assert_eq!(a.tick(MS10, &f, SpeedMode::PerTick).as_slice(), [ActorEvent::Rested]);
    assert_eq!(a.x(), 1300.0, "resting holds its last position");
}

#[test]
fn respawns_after_exactly_the_cooldown() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    run_until_resting(&mut a, &f);

    assert!(run(&mut a, &f, 499).is_empty());
    assert_eq!(
        a.phase(),
        Phase::Resting {
            remaining: Duration::from_millis(10)
        }
    );

    assert_eq!(a.tick(MS10, &f, SpeedMode::PerTick).as_slice(), [ActorEvent::Respawned]);
    assert_eq!(a.phase(), Phase::Traveling);
    assert_eq!(a.x(), -300.0);
    let (min_y, max_y) = f.spawn_y_range();
    assert!(a.y() >= min_y && a.y() <= max_y);
}

#[test]
fn respawn_rerolls_height() {
    let f = field(1000.0, 900.0);
    let mut a = actor(50.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    let mut heights = vec![a.y()];
    for _ in 0..4 {
        run_until_resting(&mut a, &f);
        run(&mut a, &f, 500);
        heights.push(a.y());
    }
    heights.dedup();
    assert!(heights.len() > 1, "every respawn landed on {heights:?}");
}

#[test]
fn dance_lasts_exactly_its_duration_and_ignores_repeat_clicks() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    run(&mut a, &f, 10);
    let x_before = a.x();

    assert_eq!(a.click(), ClickOutcome::DanceStarted);
    for i in 0..249 {
        assert!(a.is_dancing(), "stopped dancing early at tick {i}");
        assert_eq!(a.click(), ClickOutcome::AlreadyDancing);
        assert!(a.tick(MS10, &f, SpeedMode::PerTick).is_empty());
        assert_eq!(a.x(), x_before, "traversal must pause while dancing");
    }
    assert!(a.is_dancing());
    assert_eq!(a.tick(MS10, &f, SpeedMode::PerTick).as_slice(), [ActorEvent::DanceFinished]);
    assert!(!a.is_dancing());
    assert_eq!(a.phase(), Phase::Traveling);

    a.tick(MS10, &f, SpeedMode::PerTick);
    assert_eq!(a.x(), x_before + 2.0);
}

/// Ticks until `event` fires; returns how many ticks that took.
fn ticks_until(actor: &mut Actor, field: &Field, event: ActorEvent) -> usize {
    for n in 1..=10_000 {
        if actor.tick(MS10, field, SpeedMode::PerTick).contains(&event) {
            return n;
        }
    }
    panic!("{event:?} never fired");
}

#[test]
fn cooldown_keeps_running_through_a_dance() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    run_until_resting(&mut a, &f);
    run(&mut a, &f, 100);

    assert_eq!(a.click(), ClickOutcome::DanceStarted);
    let events = run(&mut a, &f, 250);
    assert_eq!(events, vec![ActorEvent::DanceFinished]);
    assert_eq!(
        a.phase(),
        Phase::Resting {
            remaining: Duration::from_millis(1500)
        }
    );
    let after_dance = ticks_until(&mut a, &f, ActorEvent::Respawned);
    let since_rest = Duration::from_millis(10) * (100 + 250 + after_dance) as u32;
    assert_eq!(since_rest, Duration::from_millis(5000));
    assert_eq!(a.x(), -300.0);
}

#[test]
fn cooldown_expiring_mid_dance_respawns_on_time() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    run_until_resting(&mut a, &f);
    run(&mut a, &f, 400);

    assert_eq!(a.click(), ClickOutcome::DanceStarted);
    let n = ticks_until(&mut a, &f, ActorEvent::Respawned);
    assert_eq!(n, 100, "respawn must land 5000 ms after resting");
    assert!(a.is_dancing(), "the dance keeps going after the respawn");
    assert_eq!(a.x(), -300.0);

    let events = run(&mut a, &f, 150);
    assert_eq!(events, vec![ActorEvent::DanceFinished]);
    assert_eq!(a.phase(), Phase::Traveling);
    a.tick(MS10, &f, SpeedMode::PerTick);
    assert_eq!(a.x(), -298.0);
}

#[test]
fn click_before_spawn_is_ignored() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 1000, &f);
    assert_eq!(a.click(), ClickOutcome::NotSpawned);
    assert!(!a.is_dancing());
}

#[test]
fn dance_drives_the_transform() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    let rest = a.transform();
    assert_eq!(rest.rotation_deg, 0.0);
    assert_eq!(rest.scale, 1.0);

    a.click();
    run(&mut a, &f, 50); // 0.5 s: first vertical keyframe
    let t = a.transform();
    assert!((t.y - (a.y() - 60.0)).abs() < 1e-3, "y={} base={}", t.y, a.y());
    assert!(t.rotation_deg > 0.0);
    assert!(t.scale > 1.0);
}

#[test]
fn hover_enlarges() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    a.set_hovered(true);
    assert!((a.transform().scale - 1.1).abs() < 1e-6);
    a.set_hovered(false);
    assert_eq!(a.transform().scale, 1.0);
}

#[test]
fn delta_scaled_mode_follows_elapsed_time() {
    let f = field(1000.0, 900.0);
    let mode = SpeedMode::DeltaScaled { reference_hz: 60.0 };
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, mode);
    let start = a.x();
    a.tick(Duration::from_millis(50), &f, mode);
    assert!((a.x() - start - 6.0).abs() < 1e-3);
    a.tick(Duration::from_millis(100), &f, mode);
    assert!((a.x() - start - 18.0).abs() < 1e-3);
}

#[test]
fn per_tick_mode_ignores_frame_length() {
    let f = field(1000.0, 900.0);
    let mut a = actor(2.0, 0, &f);
    a.tick(MS10, &f, SpeedMode::PerTick);
    let start = a.x();
    a.tick(Duration::from_millis(100), &f, SpeedMode::PerTick);
    assert_eq!(a.x() - start, 2.0);
}

#[test]
fn invalid_actor_config_fails_fast() {
    let d = Duration::ZERO;
    assert_eq!(
        ActorConfig::new(0.0, 10.0, ColorScheme::Cyan, d),
        Err(ConfigError::Speed(0.0))
    );
    assert!(matches!(
        ActorConfig::new(-2.0, 10.0, ColorScheme::Cyan, d),
        Err(ConfigError::Speed(_))
    ));
    assert!(matches!(
        ActorConfig::new(f32::NAN, 10.0, ColorScheme::Cyan, d),
        Err(ConfigError::Speed(_))
    ));
    assert!(matches!(
        ActorConfig::new(1.0, 0.0, ColorScheme::Cyan, d),
        Err(ConfigError::Size(_))
    ));
}

#[test]
fn palettes_are_distinct() {
    let primaries: Vec<_> = ColorScheme::ALL
        .iter()
        .map(|c| c.palette().primary.h)
        .collect();
    for (i, a) in primaries.iter().enumerate() {
        for b in &primaries[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
