use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::{
    pomodoro::{
        runner::{PomodoroRunner, RunOutcome},
        PomodoroTimer,
    },
    utils::{clock::Clock, shutdown::detect_shutdown},
};

use super::output::pomodoro::status_line;

/// Runs the countdown in the terminal. Each phase is started the way the play button would
/// start it, and the command ends after `phases` phases or on Ctrl-C.
pub async fn process_pomodoro_command(phases: u32, clock: Arc<dyn Clock>) -> Result<()> {
    let shutdown = CancellationToken::new();
    let watcher = tokio::spawn(detect_shutdown(shutdown.clone()));

    let mut runner = PomodoroRunner::new(PomodoroTimer::default(), clock, shutdown.clone());
    let result = run_phases(&mut runner, phases).await;

    shutdown.cancel();
    if let Err(e) = watcher.await {
        error!("Shutdown watcher failed {e:?}");
    }
    result
}

async fn run_phases(runner: &mut PomodoroRunner, phases: u32) -> Result<()> {
    let mut stdout = io::stdout();

    for _ in 0..phases {
        runner.timer_mut().toggle();
        write!(stdout, "\r{}", status_line(runner.timer()))?;
        stdout.flush()?;

        let mut write_result = Ok(());
        let outcome = runner
            .run_phase(|timer| {
                if write_result.is_ok() {
                    write_result = write!(io::stdout(), "\r{}", status_line(timer))
                        .and_then(|_| io::stdout().flush());
                }
            })
            .await;
        write_result?;

        match outcome {
            RunOutcome::PhaseFinished { next } => {
                writeln!(stdout)?;
                writeln!(stdout, "Phase over, up next: {next}\x07")?;
            }
            RunOutcome::Cancelled | RunOutcome::NotActive => {
                writeln!(stdout)?;
                writeln!(stdout, "Stopped at {}", runner.timer().display())?;
                break;
            }
        }
    }
    Ok(())
}
