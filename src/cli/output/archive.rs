use std::io::{self, Write};

use ansi_term::Colour;

use crate::{tasks::archive::ArchiveView, utils::time::long_date};

use super::{checkbox, heading};

pub fn render_archive(view: &ArchiveView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", heading("Task Archive"))?;
    writeln!(out)?;

    if view.is_empty() {
        writeln!(
            out,
            "No archived tasks yet. Tasks from previous days will appear here automatically."
        )?;
        return Ok(());
    }

    for group in view.groups() {
        writeln!(out, "{}", Colour::Cyan.bold().paint(long_date(group.date)))?;
        for task in &group.tasks {
            writeln!(out, "  {} {}", checkbox(task.completed), task.title)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
