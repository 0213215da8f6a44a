//! Session lifecycle: `init` builds a fresh simulation and starts the tick
//! timer, `stop` cancels it, `restart` does both back to back.

use rand::Rng;

use crate::compute::{self, Action, SimulationState, StepOutcome};
use crate::config::GameConfig;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Stopped,
    Running,
}

pub struct Game<S: Scheduler, R: Rng> {
    config: GameConfig,
    scheduler: S,
    rng: R,
    timer: Option<TimerHandle>,
    state: Option<SimulationState>,
}

impl<S: Scheduler, R: Rng> Game<S, R> {
    /// A stopped game; call [`Game::init`] to start playing.
    pub fn new(config: GameConfig, scheduler: S, rng: R) -> Self {
        Game {
            config,
            scheduler,
            rng,
            timer: None,
            state: None,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.timer.is_some() {
            Lifecycle::Running
        } else {
            Lifecycle::Stopped
        }
    }

    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut SimulationState> {
        self.state.as_mut()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh session and start exactly one tick timer.
    pub fn init(&mut self) {
        // Never run two timers at once.
        self.stop();

        let state = SimulationState::new(&self.config);
        tracing::info!(
            enemies = state.enemies.len(),
            asteroids = state.obstacles.len(),
            "session initialised"
        );
        self.state = Some(state);
        self.timer = Some(self.scheduler.start(self.config.tick_interval()));
    }

    /// Cancel the tick timer. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            tracing::info!(timer = handle.id(), "session stopped");
        }
    }

    pub fn restart(&mut self) {
        self.stop();
        self.init();
    }

    /// Run one step for a tick delivered on `handle`. Ticks from anything but
    /// the current timer are dropped.
    pub fn tick(&mut self, handle: TimerHandle, surface: &mut impl Surface) -> Option<StepOutcome> {
        if self.timer != Some(handle) {
            tracing::warn!(timer = handle.id(), "ignoring tick from inactive timer");
            return None;
        }
        let state = self.state.as_mut()?;
        let outcome = compute::step(state, surface, &mut self.rng);
        if let StepOutcome::Restart(reason) = outcome {
            tracing::info!(?reason, "restarting session");
            self.restart();
        }
        Some(outcome)
    }

    /// Apply one player action immediately. Ignored while stopped.
    pub fn handle_action(&mut self, action: Action) {
        if self.lifecycle() != Lifecycle::Running {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            compute::apply_action(state, action);
        }
    }
}
