//! libtodo - state engine for multi-list to-do managers
//!
//! Lists and their tasks live in two independent state trees. Every change
//! is described by an [`Action`] and applied by a pure reducer; the
//! [`TodoApp`] orchestration context owns both trees and fans the
//! list-lifecycle actions out to both reducers.

pub mod app;
pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use app::{derive_view, reduce_lists, reduce_tasks, select, Action, ListView, Target, TodoApp};
pub use config::Config;
pub use error::{ConfigError, Result, TodoError};
pub use id::new_id;
pub use types::{FilterMode, Identifier, Task, TaskStore, TodoList};
