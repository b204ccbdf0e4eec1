//! Core types for to-do lists and tasks

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Opaque, globally unique key for a list or a task
pub type Identifier = String;

/// Mapping from list id to that list's tasks, in display order
///
/// Key order carries no meaning; a `BTreeMap` only keeps rendering and
/// serialization deterministic.
pub type TaskStore = BTreeMap<Identifier, Vec<Task>>;

/// Which tasks of a list are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            _ => Err(format!(
                "Invalid filter: '{}'. Valid options: all, active, completed",
                s
            )),
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named list of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: Identifier,
    pub title: String,
    pub filter: FilterMode,
}

impl TodoList {
    /// New list with the default `All` filter
    pub fn new(id: Identifier, title: String) -> Self {
        Self {
            id,
            title,
            filter: FilterMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Identifier,
    pub title: String,
    #[serde(rename = "isDone")]
    pub is_done: bool,
}

impl Task {
    /// New, not-yet-done task
    pub fn new(id: Identifier, title: String) -> Self {
        Self {
            id,
            title,
            is_done: false,
        }
    }
}
