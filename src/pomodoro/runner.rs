use std::{sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::utils::clock::Clock;

use super::{Phase, PomodoroTimer, TickOutcome};

const TICK: Duration = Duration::from_secs(1);

/// Why [PomodoroRunner::run_phase] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The countdown reached zero and the timer now waits at the start of `next`.
    PhaseFinished { next: Phase },
    /// Shutdown was requested. The timer is paused with its remaining time kept.
    Cancelled,
    /// The timer was paused when the run started.
    NotActive,
}

/// Drives a [PomodoroTimer] in real time.
pub struct PomodoroRunner {
    timer: PomodoroTimer,
    clock: Arc<dyn Clock>,
    shutdown: CancellationToken,
}

impl PomodoroRunner {
    pub fn new(timer: PomodoroTimer, clock: Arc<dyn Clock>, shutdown: CancellationToken) -> Self {
        Self {
            timer,
            clock,
            shutdown,
        }
    }

    pub fn timer(&self) -> &PomodoroTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut PomodoroTimer {
        &mut self.timer
    }

    /// Ticks once per second while the timer is active and reports every new state to
    /// `observer`.
    ///
    /// Each tick waits a fresh second after the previous one, so small delays accumulate over a
    /// phase. That is fine for a human-facing timer.
    pub async fn run_phase(&mut self, mut observer: impl FnMut(&PomodoroTimer)) -> RunOutcome {
        if !self.timer.is_active() {
            return RunOutcome::NotActive;
        }
        info!("Running {} from {}", self.timer.phase(), self.timer.display());

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    if self.timer.is_active() {
                        self.timer.toggle();
                    }
                    info!("Pomodoro cancelled at {}", self.timer.display());
                    return RunOutcome::Cancelled;
                }
                _ = self.clock.sleep(TICK) => ()
            }

            let outcome = self.timer.tick();
            observer(&self.timer);
            match outcome {
                TickOutcome::PhaseFinished { next } => {
                    info!("Phase finished, next is {next}");
                    return RunOutcome::PhaseFinished { next };
                }
                TickOutcome::Counted => debug!("Tick {}", self.timer.display()),
                TickOutcome::Idle => return RunOutcome::NotActive,
            }
        }
    }
}
