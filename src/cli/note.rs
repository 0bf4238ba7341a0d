use std::io::Write;

use anyhow::Result;
use clap::Subcommand;
use tracing::{info, warn};

use crate::{
    dashboard::Dashboard, storage::entities::EntityId, storage::key_value::KeyValueStore,
};

use super::output::notes::render_notes;

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    #[command(about = "Create an empty note")]
    New,
    #[command(about = "Overwrite title and content of a note. Omitted fields keep their value")]
    Save {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    #[command(about = "Delete a note")]
    Delete { id: String },
    #[command(about = "List notes")]
    List,
    #[command(about = "Print a note")]
    Show { id: String },
}

pub fn process_note_command<S: KeyValueStore + Clone>(
    command: NoteCommand,
    dashboard: &Dashboard<S>,
    out: &mut impl Write,
) -> Result<()> {
    let mut notes = dashboard.notes()?;

    match command {
        NoteCommand::New => {
            let id = notes.create()?;
            info!("Created note {id}");
        }
        NoteCommand::Save { id, title, content } => {
            if notes.select(&EntityId::from(id.as_str())) {
                let draft = notes.draft().clone();
                notes.save(
                    title.unwrap_or(draft.title),
                    content.unwrap_or(draft.content),
                )?;
            } else {
                warn!("Note {id} doesn't exist, nothing saved");
            }
        }
        NoteCommand::Delete { id } => notes.delete(&EntityId::from(id))?,
        NoteCommand::List => {}
        NoteCommand::Show { id } => {
            notes.select(&EntityId::from(id));
        }
    }

    render_notes(notes.notes(), notes.active(), out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use chrono::NaiveDate;

    use crate::{
        dashboard::Dashboard, storage::key_value::MemoryStore, utils::clock::FixedClock,
    };

    use super::{process_note_command, NoteCommand};

    #[test]
    fn test_new_then_save_by_id() -> Result<()> {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let dashboard = Dashboard::new(Arc::new(MemoryStore::default()), Arc::new(clock));

        process_note_command(NoteCommand::New, &dashboard, &mut Vec::<u8>::new())?;
        let id = dashboard.notes()?.notes()[0].id.to_string();

        let mut out = Vec::new();
        process_note_command(
            NoteCommand::Save {
                id,
                title: Some("Plan".into()),
                content: Some("1. wake up".into()),
            },
            &dashboard,
            &mut out,
        )?;

        let notes = dashboard.notes()?;
        assert_eq!(notes.notes()[0].title, "Plan");
        assert_eq!(notes.notes()[0].content, "1. wake up");
        assert!(String::from_utf8(out)?.contains("1. wake up"));
        Ok(())
    }

    #[test]
    fn test_save_unknown_id_changes_nothing() -> Result<()> {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let dashboard = Dashboard::new(Arc::new(MemoryStore::default()), Arc::new(clock));
        process_note_command(NoteCommand::New, &dashboard, &mut Vec::<u8>::new())?;

        process_note_command(
            NoteCommand::Save {
                id: "missing".into(),
                title: Some("Lost".into()),
                content: None,
            },
            &dashboard,
            &mut Vec::<u8>::new(),
        )?;

        assert_eq!(dashboard.notes()?.notes()[0].title, "Untitled Note");
        Ok(())
    }
}
