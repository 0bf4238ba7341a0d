//! Daily task list. The list only ever holds tasks of the current day: older tasks are moved to
//! the archive when the list is loaded, see [TaskEngine::load].

pub mod archive;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::{
    storage::{
        collection::{
            load_collection_for_update, save_collection, ARCHIVED_TASKS_KEY, TASKS_KEY,
        },
        entities::{ArchivedTask, EntityId, Task},
        key_value::KeyValueStore,
    },
    utils::{
        clock::Clock,
        percentage::{ratio_percentage, Percentage},
    },
};

/// Owns the active task list and mirrors it into the store after every change.
pub struct TaskEngine<S: KeyValueStore> {
    store: S,
    clock: Arc<dyn Clock>,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TaskEngine<S> {
    /// Reads the active list and performs the day rollover.
    ///
    /// Tasks dated other than today are appended to the archive as one batch and removed from the
    /// active list. This happens here only: a list kept open past midnight is not rolled over
    /// until it is loaded again.
    #[instrument(skip_all)]
    pub fn load(store: S, clock: Arc<dyn Clock>) -> Result<Self> {
        let today = clock.today();
        let stored = load_collection_for_update::<Task>(&store, TASKS_KEY)?;

        let (current, stale): (Vec<_>, Vec<_>) =
            stored.into_iter().partition(|task| task.date == today);

        if !stale.is_empty() {
            let mut archive =
                load_collection_for_update::<ArchivedTask>(&store, ARCHIVED_TASKS_KEY)?;
            info!(
                "Archiving {} tasks from previous days, archive had {}",
                stale.len(),
                archive.len()
            );
            archive.extend(stale);
            save_collection(&store, ARCHIVED_TASKS_KEY, &archive)?;
            save_collection(&store, TASKS_KEY, &current)?;
        }

        Ok(Self {
            store,
            clock,
            tasks: current,
        })
    }

    /// Tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &EntityId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Appends a task for today. Blank titles are ignored and `None` is returned.
    pub fn create(&mut self, title: impl Into<String>) -> Result<Option<EntityId>> {
        let title = title.into();
        if title.trim().is_empty() {
            debug!("Ignoring task with a blank title");
            return Ok(None);
        }

        let task = Task::new(title, self.clock.today());
        let id = task.id.clone();
        self.tasks.push(task);
        self.persist()?;
        Ok(Some(id))
    }

    pub fn toggle_complete(&mut self, id: &EntityId) -> Result<()> {
        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => task.completed = !task.completed,
            None => debug!("Toggle of unknown task {id}"),
        }
        self.persist()
    }

    /// Replaces the title. Date and completion stay as they were.
    pub fn edit(&mut self, id: &EntityId, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        if title.trim().is_empty() {
            debug!("Ignoring blank title for task {id}");
            return Ok(());
        }

        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => task.title = title,
            None => debug!("Edit of unknown task {id}"),
        }
        self.persist()
    }

    pub fn delete(&mut self, id: &EntityId) -> Result<()> {
        self.tasks.retain(|task| &task.id != id);
        self.persist()
    }

    /// Share of completed tasks. 0% for an empty list.
    pub fn progress(&self) -> Percentage {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        ratio_percentage(completed, self.tasks.len())
    }

    fn persist(&self) -> Result<()> {
        save_collection(&self.store, TASKS_KEY, &self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use chrono::NaiveDate;

    use crate::{
        storage::{
            collection::{
                backup_key, load_collection, save_collection, ARCHIVED_TASKS_KEY, TASKS_KEY,
            },
            entities::{EntityId, Task},
            key_value::{KeyValueStore, MemoryStore},
        },
        utils::{
            clock::{FixedClock, MovingClock},
            logging::TEST_LOGGING,
            percentage::Percentage,
        },
    };

    use super::TaskEngine;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn task(id: &str, title: &str, date: NaiveDate) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            completed: false,
            date,
        }
    }

    fn engine_on(store: &Arc<MemoryStore>, date: NaiveDate) -> TaskEngine<Arc<MemoryStore>> {
        TaskEngine::load(store.clone(), Arc::new(FixedClock::on(date))).unwrap()
    }

    fn stored_tasks(store: &impl KeyValueStore) -> Vec<Task> {
        load_collection(store, TASKS_KEY).unwrap()
    }

    #[test]
    fn test_load_empty_store() {
        let store = Arc::new(MemoryStore::default());
        let engine = engine_on(&store, day(2));

        assert!(engine.tasks().is_empty());
        assert_eq!(store.load(ARCHIVED_TASKS_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_archives_previous_days() -> Result<()> {
        *TEST_LOGGING;
        let store = Arc::new(MemoryStore::default());
        save_collection(
            &store,
            ARCHIVED_TASKS_KEY,
            &[task("old", "Older archive entry", day(1))],
        )?;
        save_collection(
            &store,
            TASKS_KEY,
            &[
                task("a", "Yesterday", day(1)),
                task("b", "Today", day(2)),
            ],
        )?;

        let engine = engine_on(&store, day(2));

        assert_eq!(engine.tasks(), &[task("b", "Today", day(2))]);
        let archive: Vec<Task> = load_collection(&store, ARCHIVED_TASKS_KEY)?;
        assert_eq!(
            archive,
            vec![
                task("old", "Older archive entry", day(1)),
                task("a", "Yesterday", day(1)),
            ]
        );
        assert_eq!(stored_tasks(&store), engine.tasks());
        Ok(())
    }

    #[test]
    fn test_rollover_happens_once() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        save_collection(&store, TASKS_KEY, &[task("a", "Yesterday", day(1))])?;

        engine_on(&store, day(2));
        engine_on(&store, day(2));

        let archive: Vec<Task> = load_collection(&store, ARCHIVED_TASKS_KEY)?;
        assert_eq!(archive.len(), 1);
        Ok(())
    }

    #[test]
    fn test_rollover_only_on_load() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let clock = Arc::new(MovingClock::on(day(1)));
        let mut engine = TaskEngine::load(store.clone(), clock.clone())?;
        engine.create("Late evening task")?;

        clock.set_today(day(2));

        // The loaded engine keeps yesterday's task after midnight.
        assert_eq!(engine.tasks().len(), 1);
        assert_eq!(engine.tasks()[0].date, day(1));
        assert_eq!(store.load(ARCHIVED_TASKS_KEY)?, None);

        let early = engine.create("Early morning task")?.unwrap();
        assert_eq!(engine.get(&early).unwrap().date, day(2));
        assert_eq!(store.load(ARCHIVED_TASKS_KEY)?, None);

        let next_load = TaskEngine::load(store.clone(), clock.clone())?;
        let titles = next_load
            .tasks()
            .iter()
            .map(|task| task.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Early morning task"]);
        let archive: Vec<Task> = load_collection(&store, ARCHIVED_TASKS_KEY)?;
        assert_eq!(archive.len(), 1);
        assert_eq!(archive[0].title, "Late evening task");
        assert_eq!(archive[0].date, day(1));
        Ok(())
    }

    #[test]
    fn test_corrupted_tasks_recovered_as_empty() -> Result<()> {
        let store = Arc::new(
            MemoryStore::default()
                .with_entry(TASKS_KEY, "[{\"id\":\"1\"}")
                .with_entry(ARCHIVED_TASKS_KEY, "[]"),
        );

        let mut engine = engine_on(&store, day(2));
        assert!(engine.tasks().is_empty());
        assert_eq!(store.load(ARCHIVED_TASKS_KEY)?, Some(b"[]".to_vec()));

        engine.create("Works anyway")?;
        assert_eq!(stored_tasks(&store).len(), 1);
        assert_eq!(
            store.load(&backup_key(TASKS_KEY))?,
            Some(b"[{\"id\":\"1\"}".to_vec())
        );
        Ok(())
    }

    #[test]
    fn test_create_uses_today() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let mut engine = engine_on(&store, day(5));

        let id = engine.create("Buy milk")?.unwrap();

        let created = engine.get(&id).unwrap();
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.date, day(5));
        assert!(!created.completed);
        Ok(())
    }

    #[test]
    fn test_create_blank_is_ignored() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let mut engine = engine_on(&store, day(2));
        engine.create("Keep")?;

        assert_eq!(engine.create("")?, None);
        assert_eq!(engine.create("   \t\n")?, None);

        assert_eq!(engine.tasks().len(), 1);
        assert_eq!(stored_tasks(&store).len(), 1);
        Ok(())
    }

    #[test]
    fn test_toggle_twice_restores() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let mut engine = engine_on(&store, day(2));
        let id = engine.create("Stretch")?.unwrap();

        engine.toggle_complete(&id)?;
        assert!(engine.get(&id).unwrap().completed);
        assert!(stored_tasks(&store)[0].completed);

        engine.toggle_complete(&id)?;
        assert!(!engine.get(&id).unwrap().completed);
        Ok(())
    }

    #[test]
    fn test_edit_keeps_date_and_completion() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let mut engine = engine_on(&store, day(2));
        let id = engine.create("Draft")?.unwrap();
        engine.toggle_complete(&id)?;

        engine.edit(&id, "Final")?;

        let edited = engine.get(&id).unwrap();
        assert_eq!(edited.title, "Final");
        assert!(edited.completed);
        assert_eq!(edited.date, day(2));
        Ok(())
    }

    #[test]
    fn test_edit_blank_keeps_title() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let mut engine = engine_on(&store, day(2));
        let id = engine.create("Original")?.unwrap();

        engine.edit(&id, "  ")?;

        assert_eq!(engine.get(&id).unwrap().title, "Original");
        assert_eq!(stored_tasks(&store)[0].title, "Original");
        Ok(())
    }

    #[test]
    fn test_delete_unknown_is_noop() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let mut engine = engine_on(&store, day(2));
        engine.create("One")?;
        engine.create("Two")?;
        let before = engine.tasks().to_vec();

        engine.delete(&EntityId::from("missing"))?;
        engine.toggle_complete(&EntityId::from("missing"))?;
        engine.edit(&EntityId::from("missing"), "Three")?;

        assert_eq!(engine.tasks(), before.as_slice());
        Ok(())
    }

    #[test]
    fn test_store_mirrors_memory() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let mut engine = engine_on(&store, day(2));

        let first = engine.create("First")?.unwrap();
        assert_eq!(stored_tasks(&store), engine.tasks());
        let second = engine.create("Second")?.unwrap();
        engine.toggle_complete(&second)?;
        assert_eq!(stored_tasks(&store), engine.tasks());
        engine.edit(&first, "First, renamed")?;
        assert_eq!(stored_tasks(&store), engine.tasks());
        engine.delete(&first)?;
        assert_eq!(stored_tasks(&store), engine.tasks());
        engine.delete(&first)?;
        assert_eq!(stored_tasks(&store), engine.tasks());

        let reloaded = engine_on(&store, day(2));
        assert_eq!(reloaded.tasks(), engine.tasks());
        Ok(())
    }

    #[test]
    fn test_progress() -> Result<()> {
        let store = Arc::new(MemoryStore::default());
        let mut engine = engine_on(&store, day(2));
        assert_eq!(engine.progress(), Percentage::ZERO);

        let ids = ["a", "b", "c", "d"]
            .into_iter()
            .map(|title| engine.create(title).map(Option::unwrap))
            .collect::<Result<Vec<_>>>()?;
        engine.toggle_complete(&ids[0])?;
        assert_eq!(*engine.progress(), 25.);

        for id in &ids[1..] {
            engine.toggle_complete(id)?;
        }
        assert_eq!(*engine.progress(), 100.);
        Ok(())
    }
}
