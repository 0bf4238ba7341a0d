use std::{fmt::Display, io::Write};

use anyhow::Result;
use clap::ValueEnum;

use crate::{
    dashboard::Dashboard, pomodoro::PomodoroTimer, storage::key_value::KeyValueStore,
};

use super::output::{
    archive::render_archive, calendar::render_calendar, notes::render_notes,
    pomodoro::render_pomodoro, tasks::render_tasks,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Section {
    #[default]
    Tasks,
    Archive,
    Pomodoro,
    Notes,
    Calendar,
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Tasks => write!(f, "tasks"),
            Section::Archive => write!(f, "archive"),
            Section::Pomodoro => write!(f, "pomodoro"),
            Section::Notes => write!(f, "notes"),
            Section::Calendar => write!(f, "calendar"),
        }
    }
}

/// Navigation. Knows which section is visible and hands rendering to it.
#[derive(Debug, Default)]
pub struct Shell {
    selected: Section,
}

impl Shell {
    pub fn new(selected: Section) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Section {
        self.selected
    }

    pub fn select(&mut self, section: Section) {
        self.selected = section;
    }

    pub fn render<S: KeyValueStore + Clone>(
        &self,
        dashboard: &Dashboard<S>,
        out: &mut impl Write,
    ) -> Result<()> {
        match self.selected {
            Section::Tasks => {
                let tasks = dashboard.tasks()?;
                render_tasks(tasks.tasks(), tasks.progress(), out)?;
            }
            Section::Archive => render_archive(&dashboard.archive()?, out)?,
            // Timer state isn't kept between runs, so the idle timer is all there is to show.
            Section::Pomodoro => render_pomodoro(&PomodoroTimer::default(), out)?,
            Section::Notes => {
                let notes = dashboard.notes()?;
                render_notes(notes.notes(), notes.active(), out)?;
            }
            Section::Calendar => render_calendar(&dashboard.calendar(), out)?,
        }
        Ok(())
    }
}
