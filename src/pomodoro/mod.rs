//! Work/break countdown. [PomodoroTimer] is the pure state machine, [runner::PomodoroRunner]
//! feeds it one tick per second.

pub mod runner;

use std::fmt::Display;

use crate::utils::time::format_countdown;

const WORK_MINUTES: u32 = 25;
const BREAK_MINUTES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    fn minutes(self) -> u32 {
        match self {
            Phase::Work => WORK_MINUTES,
            Phase::Break => BREAK_MINUTES,
        }
    }

    fn next(self) -> Phase {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Work => write!(f, "Work Time"),
            Phase::Break => write!(f, "Break Time"),
        }
    }
}

/// What a single tick did to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused, nothing changed.
    Idle,
    Counted,
    /// Countdown hit 00:00. The timer paused itself and now holds the full duration of `next`.
    PhaseFinished { next: Phase },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroTimer {
    phase: Phase,
    minutes: u32,
    seconds: u32,
    active: bool,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::paused_at(Phase::Work)
    }
}

impl PomodoroTimer {
    fn paused_at(phase: Phase) -> Self {
        Self {
            phase,
            minutes: phase.minutes(),
            seconds: 0,
            active: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining `(minutes, seconds)`.
    pub fn remaining(&self) -> (u32, u32) {
        (self.minutes, self.seconds)
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_countdown(self.minutes, self.seconds)
    }

    /// Starts or pauses the countdown, keeping the remaining time.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn reset(&mut self) {
        *self = Self::paused_at(Phase::Work);
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Idle;
        }

        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else {
            let next = self.phase.next();
            *self = Self::paused_at(next);
            return TickOutcome::PhaseFinished { next };
        }
        TickOutcome::Counted
    }
}
