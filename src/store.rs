// In-memory task store: the collection plus the active filter

use crate::filter::Filter;
use crate::task::{Task, TaskId};
use eyre::{Result, eyre};
use std::collections::HashSet;
use tracing::{debug, info};

/// Single source of truth for the task list and the active filter
///
/// All mutation goes through `add`, `toggle`, `edit`, `delete` and
/// `set_filter`. Lookups by an unknown id are silent no-ops; the mutating
/// methods return `false` in that case and leave the collection untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    /// Every id ever held by this store, including deleted ones
    issued: HashSet<TaskId>,
}

impl TaskStore {
    /// Create a store from an initial list of tasks
    ///
    /// Fails if two tasks in `initial` share an id.
    pub fn new(initial: Vec<Task>) -> Result<Self> {
        let mut issued = HashSet::with_capacity(initial.len());
        for task in &initial {
            if !issued.insert(task.id.clone()) {
                return Err(eyre!("Duplicate task id in initial list: {}", task.id));
            }
        }

        info!(count = initial.len(), "Task store initialized");

        Ok(Self {
            tasks: initial,
            filter: Filter::default(),
            issued,
        })
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new, not yet completed task and return its id
    pub fn add(&mut self, name: impl Into<String>) -> TaskId {
        let id = self.fresh_id();
        let task = Task::new(id.clone(), name, false);
        debug!(id = %task.id, name = %task.name, "Adding task");

        self.tasks = self.tasks.iter().cloned().chain(std::iter::once(task)).collect();
        id
    }

    /// Flip the `completed` flag of the task with `id`
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        self.replace(id, Task::toggled)
    }

    /// Rename the task with `id`
    pub fn edit(&mut self, id: &TaskId, new_name: impl Into<String>) -> bool {
        let new_name = new_name.into();
        self.replace(id, |task| task.renamed(new_name.clone()))
    }

    /// Remove the task with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks = self.tasks.iter().filter(|task| &task.id != id).cloned().collect();

        let removed = self.tasks.len() != before;
        if removed {
            debug!(id = %id, "Deleted task");
        } else {
            debug!(id = %id, "Delete ignored, no such task");
        }
        removed
    }

    /// Change the active filter; the collection is not touched
    pub fn set_filter(&mut self, filter: Filter) {
        debug!(filter = %filter, "Filter changed");
        self.filter = filter;
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Tasks matching the active filter, in collection order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| self.filter.matches(task)).collect()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The whole collection regardless of filter
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Map the collection, swapping the task with `id` for `f(task)`
    fn replace<F>(&mut self, id: &TaskId, f: F) -> bool
    where
        F: Fn(&Task) -> Task,
    {
        let mut matched = false;
        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if &task.id == id {
                    matched = true;
                    f(task)
                } else {
                    task.clone()
                }
            })
            .collect();

        match self.get(id) {
            Some(task) if matched => {
                debug!(id = %task.id, name = %task.name, completed = task.completed, "Updated task");
            }
            _ => debug!(id = %id, "Update ignored, no such task"),
        }
        matched
    }

    /// Generate an id this store has never issued
    fn fresh_id(&mut self) -> TaskId {
        self.fresh_id_from(TaskId::random)
    }

    /// First candidate not yet issued by this store
    fn fresh_id_from(&mut self, mut candidates: impl FnMut() -> TaskId) -> TaskId {
        loop {
            let candidate = candidates();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
            debug!(id = %candidate, "Generated id already issued, retrying");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    fn sample_store() -> TaskStore {
        TaskStore::new(vec![
            Task::new("t0", "Code", true),
            Task::new("t1", "Eat", false),
            Task::new("t2", "Sleep", false),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_starts_with_all_filter() {
        let store = sample_store();
        assert_eq!(store.filter(), Filter::All);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = TaskStore::new(vec![Task::new("t0", "Code", true), Task::new("t0", "Eat", false)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_empty() {
        let store = TaskStore::default();
        assert!(store.is_empty());
        assert!(store.visible_tasks().is_empty());
    }

    #[test]
    fn test_add_appends_incomplete_task() {
        let mut store = sample_store();
        let id = store.add("X");

        let visible = store.visible_tasks();
        assert_eq!(visible.len(), 4);
        let last = visible.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.name, "X");
        assert!(!last.completed);
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut store = sample_store();
        let a = store.add("a");
        let b = store.add("b");
        store.toggle(&a);
        store.edit(&b, "bb");
        store.delete(&TaskId::from("t1"));
        let c = store.add("c");

        let all: HashSet<_> = store.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(all.len(), store.len());
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_generated_ids_are_never_reused() {
        let mut store = TaskStore::default();
        let mut seen = HashSet::new();
        for i in 0..200 {
            let id = store.add(format!("task {}", i));
            assert!(seen.insert(id.clone()));
            store.delete(&id);
        }
        assert!(store.is_empty());
    }

    fn candidates(ids: &[&str]) -> impl FnMut() -> TaskId {
        let mut ids: Vec<TaskId> = ids.iter().map(|&id| TaskId::from(id)).collect();
        ids.reverse();
        move || ids.pop().unwrap()
    }

    #[test]
    fn test_fresh_id_skips_initial_ids() {
        let mut store = TaskStore::new(vec![Task::new("todo-00000000", "Code", false)]).unwrap();

        let id = store.fresh_id_from(candidates(&["todo-00000000", "todo-00000001"]));
        assert_eq!(id, TaskId::from("todo-00000001"));
    }

    #[test]
    fn test_fresh_id_skips_deleted_ids() {
        let mut store = TaskStore::default();
        let first = store.fresh_id_from(candidates(&["todo-0000000a"]));
        store.tasks.push(Task::new(first.clone(), "Eat", false));
        assert!(store.delete(&first));

        let id = store.fresh_id_from(candidates(&["todo-0000000a", "todo-0000000b"]));
        assert_eq!(id, TaskId::from("todo-0000000b"));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut store = sample_store();
        let id = TaskId::from("t1");

        assert!(store.toggle(&id));
        assert!(store.get(&id).unwrap().completed);
        assert!(store.toggle(&id));
        assert!(!store.get(&id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = sample_store();
        let before = store.tasks().to_vec();

        assert!(!store.toggle(&TaskId::from("missing")));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_edit_changes_only_name() {
        let mut store = sample_store();
        let id = TaskId::from("t0");

        assert!(store.edit(&id, "Write code"));
        let task = store.get(&id).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.name, "Write code");
        assert!(task.completed);
        assert_eq!(store.tasks()[0].id, id);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut store = sample_store();
        let before = store.tasks().to_vec();

        assert!(!store.edit(&TaskId::from("missing"), "nope"));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = sample_store();
        let id = TaskId::from("t1");

        assert!(store.delete(&id));
        assert_eq!(store.len(), 2);
        assert_eq!(ids(&store.visible_tasks()), vec!["t0", "t2"]);

        // Second delete of the same id does nothing
        assert!(!store.delete(&id));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_visible_tasks_per_filter() {
        let mut store = sample_store();

        store.set_filter(Filter::Active);
        assert_eq!(ids(&store.visible_tasks()), vec!["t1", "t2"]);

        store.set_filter(Filter::Completed);
        assert_eq!(ids(&store.visible_tasks()), vec!["t0"]);

        store.set_filter(Filter::All);
        assert_eq!(ids(&store.visible_tasks()), vec!["t0", "t1", "t2"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_set_filter_leaves_collection_alone() {
        let mut store = sample_store();
        let before = store.tasks().to_vec();

        store.set_filter(Filter::Completed);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_visible_tasks_follow_mutations() {
        let mut store = sample_store();
        store.set_filter(Filter::Active);

        store.toggle(&TaskId::from("t1"));
        assert_eq!(ids(&store.visible_tasks()), vec!["t2"]);

        let id = store.add("New");
        assert_eq!(ids(&store.visible_tasks()), vec!["t2".to_string(), id.to_string()]);
    }

    #[test]
    fn test_add_toggle_delete_scenario() {
        let mut store = TaskStore::new(vec![Task::new("t0", "Code", true), Task::new("t1", "Eat", false)]).unwrap();

        let new_id = store.add("New");
        assert_eq!(store.len(), 3);

        store.toggle(&TaskId::from("t1"));
        assert!(store.get(&TaskId::from("t1")).unwrap().completed);

        store.delete(&TaskId::from("t0"));
        assert_eq!(store.len(), 2);
        assert_eq!(ids(&store.visible_tasks()), vec!["t1".to_string(), new_id.to_string()]);
    }
}
