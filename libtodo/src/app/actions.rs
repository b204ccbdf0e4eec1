//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! every supported mutation and the constructors that build them.

use serde::{Deserialize, Serialize};

use crate::id::new_id;
use crate::types::{FilterMode, Identifier};

/// Actions that trigger state transitions
///
/// Actions are immutable values describing what should happen. The list
/// reducer and the task reducer each react to the kinds they care about and
/// return their state unchanged for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    // === List lifecycle (both reducers) ===
    /// Create a list and its empty task sequence
    AddTodoList { id: Identifier, title: String },

    /// Delete a list and its task sequence
    RemoveTodoList { id: Identifier },

    // === List fields ===
    ChangeTodoListTitle { id: Identifier, title: String },

    ChangeTodoListFilter { id: Identifier, filter: FilterMode },

    // === Tasks ===
    /// Append a not-done task; `task_id` is generated by [`add_task`]
    AddTask {
        todo_list_id: Identifier,
        task_id: Identifier,
        title: String,
    },

    RemoveTask {
        todo_list_id: Identifier,
        task_id: Identifier,
    },

    ChangeTaskStatus {
        todo_list_id: Identifier,
        task_id: Identifier,
        is_done: bool,
    },

    ChangeTaskTitle {
        todo_list_id: Identifier,
        task_id: Identifier,
        title: String,
    },
}

/// Which state tree(s) an action must be dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Lists,
    Tasks,
    Both,
}

/// Fieldless tag of an [`Action`], for logging and matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    AddTodoList,
    RemoveTodoList,
    ChangeTodoListTitle,
    ChangeTodoListFilter,
    AddTask,
    RemoveTask,
    ChangeTaskStatus,
    ChangeTaskTitle,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::AddTodoList => "add-todo-list",
            ActionKind::RemoveTodoList => "remove-todo-list",
            ActionKind::ChangeTodoListTitle => "change-todo-list-title",
            ActionKind::ChangeTodoListFilter => "change-todo-list-filter",
            ActionKind::AddTask => "add-task",
            ActionKind::RemoveTask => "remove-task",
            ActionKind::ChangeTaskStatus => "change-task-status",
            ActionKind::ChangeTaskTitle => "change-task-title",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::AddTodoList { .. } => ActionKind::AddTodoList,
            Action::RemoveTodoList { .. } => ActionKind::RemoveTodoList,
            Action::ChangeTodoListTitle { .. } => ActionKind::ChangeTodoListTitle,
            Action::ChangeTodoListFilter { .. } => ActionKind::ChangeTodoListFilter,
            Action::AddTask { .. } => ActionKind::AddTask,
            Action::RemoveTask { .. } => ActionKind::RemoveTask,
            Action::ChangeTaskStatus { .. } => ActionKind::ChangeTaskStatus,
            Action::ChangeTaskTitle { .. } => ActionKind::ChangeTaskTitle,
        }
    }

    /// Routing rule used by the orchestration layer
    ///
    /// List creation and removal must reach both reducers with the same
    /// action value; everything else belongs to exactly one tree.
    pub fn target(&self) -> Target {
        match self {
            Action::AddTodoList { .. } | Action::RemoveTodoList { .. } => Target::Both,
            Action::ChangeTodoListTitle { .. } | Action::ChangeTodoListFilter { .. } => {
                Target::Lists
            }
            Action::AddTask { .. }
            | Action::RemoveTask { .. }
            | Action::ChangeTaskStatus { .. }
            | Action::ChangeTaskTitle { .. } => Target::Tasks,
        }
    }

    /// List id this action refers to
    pub fn todo_list_id(&self) -> &str {
        match self {
            Action::AddTodoList { id, .. }
            | Action::RemoveTodoList { id }
            | Action::ChangeTodoListTitle { id, .. }
            | Action::ChangeTodoListFilter { id, .. } => id,
            Action::AddTask { todo_list_id, .. }
            | Action::RemoveTask { todo_list_id, .. }
            | Action::ChangeTaskStatus { todo_list_id, .. }
            | Action::ChangeTaskTitle { todo_list_id, .. } => todo_list_id,
        }
    }

    /// The task an action refers to; `None` for list actions
    pub fn task_id(&self) -> Option<&str> {
        match self {
            Action::AddTask { task_id, .. }
            | Action::RemoveTask { task_id, .. }
            | Action::ChangeTaskStatus { task_id, .. }
            | Action::ChangeTaskTitle { task_id, .. } => Some(task_id),
            _ => None,
        }
    }
}

// === Constructors ===

/// Build an `AddTodoList` action with a freshly generated list id
///
/// The id is generated once here. The same action value must be
/// dispatched to both reducers, otherwise the two trees disagree on the key.
pub fn add_todo_list(title: impl Into<String>) -> Action {
    Action::AddTodoList {
        id: new_id(),
        title: title.into(),
    }
}

pub fn remove_todo_list(id: impl Into<Identifier>) -> Action {
    Action::RemoveTodoList { id: id.into() }
}

pub fn change_todo_list_title(id: impl Into<Identifier>, title: impl Into<String>) -> Action {
    Action::ChangeTodoListTitle {
        id: id.into(),
        title: title.into(),
    }
}

pub fn change_todo_list_filter(id: impl Into<Identifier>, filter: FilterMode) -> Action {
    Action::ChangeTodoListFilter {
        id: id.into(),
        filter,
    }
}

/// Build an `AddTask` action; the new task's id is generated here
pub fn add_task(todo_list_id: impl Into<Identifier>, title: impl Into<String>) -> Action {
    Action::AddTask {
        todo_list_id: todo_list_id.into(),
        task_id: new_id(),
        title: title.into(),
    }
}

pub fn remove_task(todo_list_id: impl Into<Identifier>, task_id: impl Into<Identifier>) -> Action {
    Action::RemoveTask {
        todo_list_id: todo_list_id.into(),
        task_id: task_id.into(),
    }
}

pub fn change_task_status(
    todo_list_id: impl Into<Identifier>,
    task_id: impl Into<Identifier>,
    is_done: bool,
) -> Action {
    Action::ChangeTaskStatus {
        todo_list_id: todo_list_id.into(),
        task_id: task_id.into(),
        is_done,
    }
}

pub fn change_task_title(
    todo_list_id: impl Into<Identifier>,
    task_id: impl Into<Identifier>,
    title: impl Into<String>,
) -> Action {
    Action::ChangeTaskTitle {
        todo_list_id: todo_list_id.into(),
        task_id: task_id.into(),
        title: title.into(),
    }
}
