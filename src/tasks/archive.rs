use anyhow::Result;
use chrono::NaiveDate;

use crate::storage::{
    collection::{load_collection, ARCHIVED_TASKS_KEY},
    entities::ArchivedTask,
    key_value::KeyValueStore,
};

/// Archived tasks sharing one creation day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveGroup {
    pub date: NaiveDate,
    pub tasks: Vec<ArchivedTask>,
}

/// Read-only view of the archive. Nothing here writes to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveView {
    groups: Vec<ArchiveGroup>,
}

impl ArchiveView {
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        let archived = load_collection::<ArchivedTask>(store, ARCHIVED_TASKS_KEY)?;
        Ok(Self::from_tasks(archived))
    }

    pub fn from_tasks(archived: impl IntoIterator<Item = ArchivedTask>) -> Self {
        Self {
            groups: group_by_date(archived),
        }
    }

    /// Groups with the most recent day first.
    pub fn groups(&self) -> &[ArchiveGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups tasks by their date. Inside a group tasks keep archive order, groups are sorted newest
/// first.
fn group_by_date(archived: impl IntoIterator<Item = ArchivedTask>) -> Vec<ArchiveGroup> {
    let mut groups = Vec::<ArchiveGroup>::new();

    for task in archived {
        match groups.iter_mut().find(|group| group.date == task.date) {
            Some(group) => group.tasks.push(task),
            None => groups.push(ArchiveGroup {
                date: task.date,
                tasks: vec![task],
            }),
        }
    }

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}
