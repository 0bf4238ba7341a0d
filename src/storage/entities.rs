use std::{fmt::Display, sync::Arc};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a task or a note. New ids are random, but any string read from the
/// store is accepted, including the millisecond timestamps older exports used.
#[derive(PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct EntityId(Arc<str>);

impl EntityId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

/// A task of the daily list. `date` is the local day the task was created on and never
/// changes afterwards.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub completed: bool,
    pub date: NaiveDate,
}

impl Task {
    pub fn new(title: String, date: NaiveDate) -> Self {
        Self {
            id: EntityId::generate(),
            title,
            completed: false,
            date,
        }
    }
}

/// Archived tasks keep the exact shape they had in the active list.
pub type ArchivedTask = Task;

#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    /// Last time the note was saved.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}
