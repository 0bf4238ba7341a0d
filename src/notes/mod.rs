use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::{
    storage::{
        collection::{load_collection_for_update, save_collection, NOTES_KEY},
        entities::{EntityId, Note},
        key_value::KeyValueStore,
    },
    utils::clock::Clock,
};

pub const UNTITLED_NOTE: &str = "Untitled Note";

/// Editor contents for the selected note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

/// Ordered list of notes plus the current selection. The selection lives only in memory.
pub struct NotesManager<S: KeyValueStore> {
    store: S,
    clock: Arc<dyn Clock>,
    notes: Vec<Note>,
    active: Option<EntityId>,
    draft: NoteDraft,
}

impl<S: KeyValueStore> NotesManager<S> {
    pub fn load(store: S, clock: Arc<dyn Clock>) -> Result<Self> {
        let notes = load_collection_for_update::<Note>(&store, NOTES_KEY)?;
        Ok(Self {
            store,
            clock,
            notes,
            active: None,
            draft: NoteDraft::default(),
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn active(&self) -> Option<&Note> {
        let id = self.active.as_ref()?;
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    /// Appends an empty note and selects it.
    pub fn create(&mut self) -> Result<EntityId> {
        let note = Note {
            id: EntityId::generate(),
            title: UNTITLED_NOTE.into(),
            content: String::new(),
            timestamp: self.clock.time(),
        };
        let id = note.id.clone();
        self.draft = NoteDraft::from(&note);
        self.active = Some(id.clone());
        self.notes.push(note);
        self.persist()?;
        Ok(id)
    }

    /// Selects an existing note. Returns `false` if there is no such note.
    pub fn select(&mut self, id: &EntityId) -> bool {
        match self.notes.iter().find(|note| &note.id == id) {
            Some(note) => {
                self.draft = NoteDraft::from(note);
                self.active = Some(id.clone());
                true
            }
            None => {
                debug!("Select of unknown note {id}");
                false
            }
        }
    }

    /// Overwrites the selected note. Nothing happens without a selection.
    pub fn save(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<()> {
        let Some(id) = self.active.clone() else {
            debug!("Save without a selected note");
            return Ok(());
        };

        self.draft = NoteDraft {
            title: title.into(),
            content: content.into(),
        };
        let timestamp = self.clock.time();
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
            note.title = self.draft.title.clone();
            note.content = self.draft.content.clone();
            note.timestamp = timestamp;
        }
        self.persist()
    }

    /// Removes the note. Deleting the selected note clears the selection and the editor.
    pub fn delete(&mut self, id: &EntityId) -> Result<()> {
        self.notes.retain(|note| &note.id != id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
            self.draft = NoteDraft::default();
        }
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        save_collection(&self.store, NOTES_KEY, &self.notes)
    }
}
