use std::io::{self, Write};

use ansi_term::Style;

use crate::storage::entities::Note;

use super::heading;

/// Lists notes in creation order. The selected note, if any, is printed in full below the list.
pub fn render_notes(notes: &[Note], active: Option<&Note>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", heading("Notes"))?;
    writeln!(out)?;

    if notes.is_empty() {
        writeln!(out, "No notes yet. Create one with `note new`.")?;
        return Ok(());
    }

    for note in notes {
        let marker = if active.is_some_and(|active| active.id == note.id) {
            ">"
        } else {
            " "
        };
        writeln!(
            out,
            "{marker} {}\t{}\t{}",
            note.title,
            note.timestamp.format("%Y-%m-%d %H:%M"),
            note.id
        )?;
    }

    if let Some(note) = active {
        writeln!(out)?;
        writeln!(out, "{}", Style::new().bold().paint(note.title.as_str()))?;
        writeln!(out, "{}", note.content)?;
    }
    Ok(())
}
