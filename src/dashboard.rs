use std::sync::Arc;

use anyhow::Result;

use crate::{
    calendar::MonthView,
    notes::NotesManager,
    storage::key_value::KeyValueStore,
    tasks::{archive::ArchiveView, TaskEngine},
    utils::clock::Clock,
};

/// Wires components to a shared store and clock. Components are loaded on demand, the same way
/// each section of the dashboard loads its data when it is opened.
pub struct Dashboard<S> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: KeyValueStore + Clone> Dashboard<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    /// Loads the task list. This is where tasks from previous days get archived.
    pub fn tasks(&self) -> Result<TaskEngine<S>> {
        TaskEngine::load(self.store.clone(), self.clock.clone())
    }

    pub fn archive(&self) -> Result<ArchiveView> {
        ArchiveView::load(&self.store)
    }

    pub fn notes(&self) -> Result<NotesManager<S>> {
        NotesManager::load(self.store.clone(), self.clock.clone())
    }

    pub fn calendar(&self) -> MonthView {
        MonthView::for_date(self.clock.today())
    }
}
