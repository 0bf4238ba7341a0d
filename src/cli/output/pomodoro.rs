use std::io::{self, Write};

use crate::pomodoro::PomodoroTimer;

use super::heading;

pub fn render_pomodoro(timer: &PomodoroTimer, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", heading("Pomodoro Timer"))?;
    writeln!(out)?;
    writeln!(out, "{}", status_line(timer))?;
    writeln!(out, "Start it with `pomodoro`.")
}

/// Single line redrawn on every tick while the countdown runs.
pub fn status_line(timer: &PomodoroTimer) -> String {
    let state = if timer.is_active() { "running" } else { "paused" };
    format!("{}  {}  ({state})", timer.display(), timer.phase())
}
