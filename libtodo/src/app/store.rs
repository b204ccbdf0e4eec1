//! Orchestration context owning both state trees
//!
//! `TodoApp` is the single owner of the list collection and the task store.
//! Each dispatch hands the current value to a pure reducer and replaces it
//! wholesale with the result. The fan-out of list-lifecycle actions to both
//! reducers lives here, so neither reducer knows about the other.

use serde::Serialize;
use std::collections::BTreeSet;

use super::actions::{self, Action, Target};
use super::filter::select;
use super::lists_reducer::reduce_lists;
use super::tasks_reducer::reduce_tasks;
use crate::config::SeedList;
use crate::id::new_id;
use crate::types::{FilterMode, Identifier, Task, TaskStore, TodoList};

/// Root application state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoApp {
    lists: Vec<TodoList>,
    tasks: TaskStore,
}

/// One list prepared for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    #[serde(flatten)]
    pub list: TodoList,
    /// Tasks matching the list's filter, in display order
    pub tasks: Vec<Task>,
    /// 1-based position of each entry of `tasks` within the whole list
    pub positions: Vec<usize>,
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// At least one of the visible `tasks` is done
    pub has_completed: bool,
}

impl TodoApp {
    /// Wrap collaborator-supplied initial state
    ///
    /// The caller is responsible for handing in consistent trees; see
    /// [`TodoApp::is_consistent`].
    pub fn new(lists: Vec<TodoList>, tasks: TaskStore) -> Self {
        Self { lists, tasks }
    }

    /// Build initial state from seed entries, generating all ids
    pub fn from_seed(seed: &[SeedList]) -> Self {
        let mut lists = Vec::with_capacity(seed.len());
        let mut tasks = TaskStore::new();

        for entry in seed {
            let id = new_id();
            lists.push(TodoList {
                id: id.clone(),
                title: entry.title.clone(),
                filter: entry.filter,
            });
            let seeded = entry
                .tasks
                .iter()
                .map(|t| Task {
                    id: new_id(),
                    title: t.title.clone(),
                    is_done: t.done,
                })
                .collect();
            tasks.insert(id, seeded);
        }

        tracing::debug!(lists = lists.len(), "initial state built from seed");
        Self { lists, tasks }
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    /// Apply an action to whichever tree(s) it targets
    ///
    /// `AddTodoList` and `RemoveTodoList` go to both reducers with the same
    /// action value; both applications finish before this returns.
    pub fn dispatch(&mut self, action: Action) {
        let target = action.target();
        tracing::debug!(kind = %action.kind(), ?target, "dispatch");

        if self.is_stale(&action) {
            tracing::warn!(
                kind = %action.kind(),
                todo_list_id = action.todo_list_id(),
                "action refers to an unknown list, ignoring"
            );
        }

        match target {
            Target::Lists => {
                self.dispatch_to_lists(action);
            }
            Target::Tasks => {
                self.dispatch_to_tasks(action);
            }
            Target::Both => {
                self.dispatch_to_lists(action.clone());
                self.dispatch_to_tasks(action);
            }
        }
    }

    /// The action names a list that no longer exists in the tree it targets
    fn is_stale(&self, action: &Action) -> bool {
        let id = action.todo_list_id();
        match action.target() {
            Target::Lists => self.list(id).is_none(),
            Target::Tasks => !self.tasks.contains_key(id),
            Target::Both => {
                matches!(action, Action::RemoveTodoList { .. }) && self.list(id).is_none()
            }
        }
    }

    /// Run only the list reducer
    pub fn dispatch_to_lists(&mut self, action: Action) -> &[TodoList] {
        let lists = std::mem::take(&mut self.lists);
        self.lists = reduce_lists(lists, &action);
        &self.lists
    }

    /// Run only the task reducer
    pub fn dispatch_to_tasks(&mut self, action: Action) -> &TaskStore {
        let tasks = std::mem::take(&mut self.tasks);
        self.tasks = reduce_tasks(tasks, &action);
        &self.tasks
    }

    /// Create a list and return its id
    pub fn add_todo_list(&mut self, title: impl Into<String>) -> Identifier {
        let action = actions::add_todo_list(title);
        let id = action.todo_list_id().to_string();
        self.dispatch(action);
        id
    }

    /// Append a task to a list and return the new task's id
    ///
    /// The id is returned even when the list does not exist, in which case
    /// nothing was added.
    pub fn add_task(
        &mut self,
        todo_list_id: impl Into<Identifier>,
        title: impl Into<String>,
    ) -> Identifier {
        let action = actions::add_task(todo_list_id, title);
        let task_id = action.task_id().unwrap_or_default().to_string();
        self.dispatch(action);
        task_id
    }

    pub fn list(&self, id: &str) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Filtered tasks for one list
    pub fn view(&self, todo_list_id: &str, mode: FilterMode) -> Vec<Task> {
        derive_view(&self.tasks, todo_list_id, mode)
    }

    /// Every list, in list order, with its own filter applied
    pub fn views(&self) -> Vec<ListView> {
        self.lists
            .iter()
            .map(|list| {
                let all = self.tasks.get(&list.id).map(Vec::as_slice).unwrap_or(&[]);
                let completed = all.iter().filter(|t| t.is_done).count();
                let tasks = select(all, list.filter);
                let positions = tasks
                    .iter()
                    .filter_map(|t| all.iter().position(|a| a.id == t.id))
                    .map(|i| i + 1)
                    .collect();
                let has_completed = tasks.iter().any(|t| t.is_done);
                ListView {
                    list: list.clone(),
                    tasks,
                    positions,
                    total: all.len(),
                    active: all.len() - completed,
                    completed,
                    has_completed,
                }
            })
            .collect()
    }

    /// Task store keys and list ids are the same set
    pub fn is_consistent(&self) -> bool {
        let list_ids: BTreeSet<&str> = self.lists.iter().map(|l| l.id.as_str()).collect();
        let store_ids: BTreeSet<&str> = self.tasks.keys().map(String::as_str).collect();
        list_ids.len() == self.lists.len() && list_ids == store_ids
    }
}

/// Apply the view filter to one list of `store`
///
/// An unknown list id yields an empty view.
pub fn derive_view(store: &TaskStore, todo_list_id: &str, mode: FilterMode) -> Vec<Task> {
    store
        .get(todo_list_id)
        .map(|tasks| select(tasks, mode))
        .unwrap_or_default()
}
