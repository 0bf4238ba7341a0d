use std::io::{self, Write};

use ansi_term::{Colour, Style};

use crate::{storage::entities::Task, utils::percentage::Percentage};

use super::{checkbox, heading};

pub fn render_tasks(tasks: &[Task], progress: Percentage, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", heading("Today's Tasks"))?;
    let completed = tasks.iter().filter(|task| task.completed).count();
    writeln!(
        out,
        "{} {completed}/{} completed",
        Colour::Purple.bold().paint(progress.to_string()),
        tasks.len()
    )?;
    writeln!(out)?;

    if tasks.is_empty() {
        writeln!(out, "No tasks yet. Add your first task with `task add`!")?;
        return Ok(());
    }

    for task in tasks {
        let title = if task.completed {
            Style::new().strikethrough().dimmed().paint(task.title.as_str())
        } else {
            Style::new().paint(task.title.as_str())
        };
        writeln!(out, "{}\t{title}\t{}", checkbox(task.completed), task.id)?;
    }
    Ok(())
}
