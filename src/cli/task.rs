use std::io::Write;

use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use crate::{
    dashboard::Dashboard, storage::entities::EntityId, storage::key_value::KeyValueStore,
};

use super::output::tasks::render_tasks;

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    #[command(about = "Add a task for today")]
    Add {
        #[arg(required = true, num_args = 1.., help = "Title of the task")]
        title: Vec<String>,
    },
    #[command(about = "Mark a task as done, or as not done if it already is")]
    Toggle { id: String },
    #[command(about = "Rename a task")]
    Edit {
        id: String,
        #[arg(required = true, num_args = 1.., help = "New title of the task")]
        title: Vec<String>,
    },
    #[command(about = "Delete a task")]
    Delete { id: String },
}

/// Applies a single change to today's list and prints the list afterwards.
pub fn process_task_command<S: KeyValueStore + Clone>(
    command: TaskCommand,
    dashboard: &Dashboard<S>,
    out: &mut impl Write,
) -> Result<()> {
    let mut tasks = dashboard.tasks()?;

    match command {
        TaskCommand::Add { title } => {
            if let Some(id) = tasks.create(title.join(" "))? {
                info!("Created task {id}");
            }
        }
        TaskCommand::Toggle { id } => tasks.toggle_complete(&EntityId::from(id))?,
        TaskCommand::Edit { id, title } => tasks.edit(&EntityId::from(id), title.join(" "))?,
        TaskCommand::Delete { id } => tasks.delete(&EntityId::from(id))?,
    }

    render_tasks(tasks.tasks(), tasks.progress(), out)?;
    Ok(())
}
