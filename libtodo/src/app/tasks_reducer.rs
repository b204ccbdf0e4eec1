//! Pure reducer for the per-list task sequences
//!
//! `(TaskStore, &Action) -> TaskStore`. Only the entry named by the action
//! is rebuilt; every other key keeps its sequence untouched.

use super::actions::Action;
use crate::types::{Identifier, Task, TaskStore};

/// Apply an action to the task store
///
/// Task actions naming a list that has no entry are no-ops, so stale
/// references (a task removed from an already deleted list) never fail.
/// List title/filter changes are not this reducer's concern.
pub fn reduce_tasks(store: TaskStore, action: &Action) -> TaskStore {
    match action {
        Action::AddTodoList { id, .. } => {
            // Ids come from the generator, so a repeat means the same
            // AddTodoList was dispatched twice.
            debug_assert!(
                !store.contains_key(id),
                "task store already has an entry for list {}",
                id
            );
            if store.contains_key(id) {
                tracing::error!(todo_list_id = %id, "duplicate AddTodoList dispatch ignored");
                return store;
            }
            let mut store = store;
            store.insert(id.clone(), Vec::new());
            store
        }

        Action::RemoveTodoList { id } => {
            let mut store = store;
            store.remove(id);
            store
        }

        Action::AddTask {
            todo_list_id,
            task_id,
            title,
        } => update_list(store, todo_list_id, |mut tasks| {
            tasks.push(Task::new(task_id.clone(), title.clone()));
            tasks
        }),

        Action::RemoveTask {
            todo_list_id,
            task_id,
        } => update_list(store, todo_list_id, |tasks| {
            tasks.into_iter().filter(|task| &task.id != task_id).collect()
        }),

        Action::ChangeTaskStatus {
            todo_list_id,
            task_id,
            is_done,
        } => update_list(store, todo_list_id, |tasks| {
            update_task(tasks, task_id, |task| Task {
                is_done: *is_done,
                ..task
            })
        }),

        Action::ChangeTaskTitle {
            todo_list_id,
            task_id,
            title,
        } => update_list(store, todo_list_id, |tasks| {
            update_task(tasks, task_id, |task| Task {
                title: title.clone(),
                ..task
            })
        }),

        Action::ChangeTodoListTitle { .. } | Action::ChangeTodoListFilter { .. } => store,
    }
}

/// Replace one list's sequence with `f(sequence)`; absent key is a no-op
fn update_list<F>(mut store: TaskStore, todo_list_id: &Identifier, f: F) -> TaskStore
where
    F: FnOnce(Vec<Task>) -> Vec<Task>,
{
    if let Some(tasks) = store.remove(todo_list_id) {
        store.insert(todo_list_id.clone(), f(tasks));
    }
    store
}

fn update_task<F>(tasks: Vec<Task>, task_id: &Identifier, f: F) -> Vec<Task>
where
    F: Fn(Task) -> Task,
{
    tasks
        .into_iter()
        .map(|task| if &task.id == task_id { f(task) } else { task })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::{
        add_task, add_todo_list, change_task_status, change_task_title, change_todo_list_filter,
        change_todo_list_title, remove_task, remove_todo_list,
    };
    use crate::types::FilterMode;

    fn task(id: &str, title: &str, is_done: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            is_done,
        }
    }

    fn sample() -> TaskStore {
        let mut store = TaskStore::new();
        store.insert(
            "L1".to_string(),
            vec![
                task("t1", "HTML & CSS", true),
                task("t2", "ES6/TS", false),
                task("t3", "REDUX", false),
            ],
        );
        store.insert(
            "L2".to_string(),
            vec![task("t4", "Water", true), task("t5", "Milk", false)],
        );
        store
    }

    #[test]
    fn test_add_todo_list_creates_empty_entry() {
        let action = add_todo_list("New");
        let id = action.todo_list_id().to_string();

        let store = reduce_tasks(sample(), &action);

        assert_eq!(store.len(), 3);
        assert_eq!(store[&id], Vec::<Task>::new());
        assert_eq!(store["L1"], sample()["L1"]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already has an entry")]
    fn test_duplicate_add_todo_list_must_not_happen() {
        let action = Action::AddTodoList {
            id: "L1".to_string(),
            title: "Again".to_string(),
        };
        let _ = reduce_tasks(sample(), &action);
    }

    #[test]
    fn test_remove_todo_list_drops_entry() {
        let store = reduce_tasks(sample(), &remove_todo_list("L1"));

        assert!(!store.contains_key("L1"));
        assert_eq!(store["L2"], sample()["L2"]);
    }

    #[test]
    fn test_add_task_appends_not_done_task() {
        let action = add_task("L2", "Bread");
        let task_id = match &action {
            Action::AddTask { task_id, .. } => task_id.clone(),
            other => panic!("Expected AddTask, got {:?}", other),
        };

        let store = reduce_tasks(sample(), &action);

        assert_eq!(store["L2"].len(), 3);
        assert_eq!(store["L2"][2], task(&task_id, "Bread", false));
        // Other lists untouched
        assert_eq!(store["L1"], sample()["L1"]);
    }

    #[test]
    fn test_remove_task() {
        let store = reduce_tasks(sample(), &remove_task("L1", "t2"));

        let ids: Vec<&str> = store["L1"].iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
        assert_eq!(store["L2"], sample()["L2"]);
    }

    #[test]
    fn test_remove_unknown_task_is_noop() {
        let store = reduce_tasks(sample(), &remove_task("L1", "missing"));
        assert_eq!(store, sample());
    }

    #[test]
    fn test_change_task_status() {
        let store = reduce_tasks(sample(), &change_task_status("L1", "t2", true));

        assert!(store["L1"][1].is_done);
        assert_eq!(store["L1"][1].title, "ES6/TS");
        assert_eq!(store["L1"][0], sample()["L1"][0]);
        assert_eq!(store["L1"][2], sample()["L1"][2]);
    }

    #[test]
    fn test_change_task_title() {
        let store = reduce_tasks(sample(), &change_task_title("L2", "t4", "Sparkling water"));

        assert_eq!(store["L2"][0].title, "Sparkling water");
        assert!(store["L2"][0].is_done);
    }

    #[test]
    fn test_stale_list_id_is_noop_for_every_task_action() {
        let actions = vec![
            add_task("gone", "x"),
            remove_task("gone", "t1"),
            change_task_status("gone", "t1", true),
            change_task_title("gone", "t1", "x"),
        ];

        for action in actions {
            let store = reduce_tasks(sample(), &action);
            assert_eq!(store, sample(), "{:?} should be a no-op", action.kind());
        }
    }

    #[test]
    fn test_list_field_actions_return_input_unchanged() {
        let store = reduce_tasks(sample(), &change_todo_list_title("L1", "x"));
        let store = reduce_tasks(store, &change_todo_list_filter("L1", FilterMode::Active));
        assert_eq!(store, sample());
    }

    #[test]
    fn test_other_entries_keep_their_allocation() {
        let store = sample();
        let l2_ptr = store["L2"].as_ptr();

        let store = reduce_tasks(store, &change_task_status("L1", "t1", false));

        assert_eq!(store["L2"].as_ptr(), l2_ptr);
    }
}
