//! Application state engine
//!
//! - Actions: what can happen
//! - Reducers: pure functions `(State, &Action) -> State`, one per tree
//! - Filter: which tasks a list shows
//! - Store: the orchestration context that owns both trees

pub mod actions;
pub mod filter;
pub mod lists_reducer;
pub mod store;
pub mod tasks_reducer;

// Re-export commonly used types
pub use actions::{Action, ActionKind, Target};
pub use filter::select;
pub use lists_reducer::reduce_lists;
pub use store::{derive_view, ListView, TodoApp};
pub use tasks_reducer::reduce_tasks;
