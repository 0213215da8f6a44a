mod common;

use std::time::{Duration, Instant};

use common::{ManualScheduler, RecordingSurface};
use space_invaders::compute::{Action, Direction, RestartReason, SimulationState, StepOutcome};
use space_invaders::config::GameConfig;
use space_invaders::entities::{Entity, Projectile};
use space_invaders::game::{Game, Lifecycle};
use space_invaders::scheduler::{IntervalScheduler, Scheduler, TimerHandle};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_game() -> Game<ManualScheduler, StdRng> {
    Game::new(
        GameConfig::default(),
        ManualScheduler::default(),
        StdRng::seed_from_u64(7),
    )
}

fn fresh_state() -> SimulationState {
    SimulationState::new(&GameConfig::default())
}

fn tick(game: &mut Game<ManualScheduler, StdRng>) -> Option<StepOutcome> {
    let handle = game.timer()?;
    game.tick(handle, &mut RecordingSurface::default())
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[test]
fn new_game_is_stopped() {
    let game = make_game();
    assert_eq!(game.lifecycle(), Lifecycle::Stopped);
    assert!(game.state().is_none());
    assert!(game.scheduler().active.is_empty());
}

#[test]
fn init_builds_layout_and_starts_one_timer() {
    let mut game = make_game();
    game.init();
    assert_eq!(game.lifecycle(), Lifecycle::Running);
    assert_eq!(game.state(), Some(&fresh_state()));
    assert_eq!(game.scheduler().active.len(), 1);
    assert_eq!(game.scheduler().active[0], game.timer().unwrap());
}

#[test]
fn stop_twice_is_harmless() {
    let mut game = make_game();
    game.init();
    game.stop();
    game.stop();
    assert_eq!(game.lifecycle(), Lifecycle::Stopped);
    assert!(game.scheduler().active.is_empty());
    assert_eq!(game.scheduler().cancelled, 1);

    game.init();
    assert_eq!(game.scheduler().active.len(), 1);
}

#[test]
fn stop_before_init_is_harmless() {
    let mut game = make_game();
    game.stop();
    assert_eq!(game.lifecycle(), Lifecycle::Stopped);
    assert_eq!(game.scheduler().cancelled, 0);
}

#[test]
fn init_while_running_replaces_the_timer() {
    let mut game = make_game();
    game.init();
    let first = game.timer().unwrap();
    game.init();
    assert_eq!(game.scheduler().active.len(), 1);
    assert_ne!(game.timer(), Some(first));
}

#[test]
fn restart_rebuilds_state_with_a_single_timer() {
    let mut game = make_game();
    game.init();
    for _ in 0..10 {
        tick(&mut game);
    }
    game.handle_action(Action::MoveLeft);
    assert_ne!(game.state(), Some(&fresh_state()));

    game.restart();
    assert_eq!(game.state(), Some(&fresh_state()));
    assert_eq!(game.scheduler().active.len(), 1);
    assert_eq!(game.scheduler().started, 2);
}

// ── Ticks ─────────────────────────────────────────────────────────────────────

#[test]
fn tick_advances_the_simulation() {
    let mut game = make_game();
    game.init();
    assert_eq!(tick(&mut game), Some(StepOutcome::Continue));
    let state = game.state().unwrap();
    assert_eq!(state.enemies[0].body.x, 31.0);
}

#[test]
fn tick_from_cancelled_timer_is_ignored() {
    let mut game = make_game();
    game.init();
    let stale = game.timer().unwrap();
    game.restart();
    let before = game.state().cloned();
    let outcome = game.tick(stale, &mut RecordingSurface::default());
    assert_eq!(outcome, None);
    assert_eq!(game.state().cloned(), before);
}

#[test]
fn tick_after_stop_is_ignored() {
    let mut game = make_game();
    game.init();
    let handle = game.timer().unwrap();
    game.stop();
    assert_eq!(game.tick(handle, &mut RecordingSurface::default()), None);
}

#[test]
fn cleared_wave_restarts_on_next_tick() {
    let mut game = make_game();
    game.init();
    for _ in 0..20 {
        tick(&mut game);
    }
    let old_timer = game.timer();
    if let Some(state) = game.state_mut() {
        state.enemies.clear();
        state.direction = Direction::Left;
        state.fire_timer = 500.0;
    }

    assert_eq!(
        tick(&mut game),
        Some(StepOutcome::Restart(RestartReason::AllEnemiesDestroyed))
    );
    let state = game.state().unwrap();
    assert_eq!(state, &fresh_state());
    assert_eq!(state.fire_timer, 0.0);
    assert_eq!(state.direction, Direction::Right);
    assert_eq!(game.lifecycle(), Lifecycle::Running);
    assert_ne!(game.timer(), old_timer);
    assert_eq!(game.scheduler().active.len(), 1);
}

#[test]
fn player_hit_restarts() {
    let mut game = make_game();
    game.init();
    if let Some(state) = game.state_mut() {
        let color = state.config.projectile_color;
        state.enemies[0]
            .projectiles_mut()
            .push(Projectile::new(Entity::new(355.0, 540.0, 4.0, 8.0, color), 5.0));
    }
    assert_eq!(
        tick(&mut game),
        Some(StepOutcome::Restart(RestartReason::PlayerHit))
    );
    assert_eq!(game.state(), Some(&fresh_state()));
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[test]
fn actions_apply_immediately_and_independently() {
    let mut game = make_game();
    game.init();
    game.handle_action(Action::MoveRight);
    game.handle_action(Action::MoveRight);
    game.handle_action(Action::Fire);
    let state = game.state().unwrap();
    assert_eq!(state.player.body().x, 360.0);
    assert_eq!(state.player.ship.projectiles().len(), 1);
}

#[test]
fn actions_are_ignored_while_stopped() {
    let mut game = make_game();
    game.handle_action(Action::Fire);
    assert!(game.state().is_none());

    game.init();
    game.stop();
    game.handle_action(Action::MoveLeft);
    assert_eq!(game.state().unwrap().player.body().x, 350.0);
}

// ── IntervalScheduler ─────────────────────────────────────────────────────────

#[test]
fn interval_scheduler_fires_after_interval() {
    let interval = Duration::from_secs(3600);
    let mut scheduler = IntervalScheduler::new();
    let handle = scheduler.start(interval);
    assert!(scheduler.is_active(handle));
    assert!(scheduler.poll(Instant::now()).is_empty());

    let later = Instant::now() + interval;
    assert_eq!(scheduler.poll(later), vec![handle]);
    assert!(scheduler.next_deadline().unwrap() > later);
}

#[test]
fn interval_scheduler_skips_missed_ticks() {
    let interval = Duration::from_secs(60);
    let mut scheduler = IntervalScheduler::new();
    let handle = scheduler.start(interval);

    let much_later = Instant::now() + interval * 10;
    assert_eq!(scheduler.poll(much_later), vec![handle]);
    assert!(scheduler.poll(much_later).is_empty());
    assert_eq!(scheduler.next_deadline(), Some(much_later + interval));
}

#[test]
fn interval_scheduler_cancel_stops_ticks() {
    let interval = Duration::from_secs(60);
    let mut scheduler = IntervalScheduler::new();
    let handle = scheduler.start(interval);
    scheduler.cancel(handle);
    scheduler.cancel(handle);
    assert_eq!(scheduler.active_count(), 0);
    assert_eq!(scheduler.next_deadline(), None);
    assert!(scheduler.poll(Instant::now() + interval * 2).is_empty());
    assert!(!scheduler.is_active(handle));
}

#[test]
fn interval_scheduler_handles_are_unique() {
    let mut scheduler = IntervalScheduler::new();
    let a = scheduler.start(Duration::from_secs(1));
    scheduler.cancel(a);
    let b = scheduler.start(Duration::from_secs(1));
    assert_ne!(a, b);
    assert_ne!(b, TimerHandle::new(0));
}

#[test]
fn game_restart_on_interval_scheduler_keeps_one_timer() {
    let mut game = Game::new(
        GameConfig::default(),
        IntervalScheduler::new(),
        StdRng::seed_from_u64(1),
    );
    game.init();
    game.restart();
    game.stop();
    game.stop();
    assert_eq!(game.scheduler().active_count(), 0);
    game.init();
    assert_eq!(game.scheduler().active_count(), 1);
}
