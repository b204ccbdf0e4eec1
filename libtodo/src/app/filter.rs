//! View filter used when rendering a list

use crate::types::{FilterMode, Task};

/// Select the tasks shown for `mode`, preserving their relative order
pub fn select(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    match mode {
        FilterMode::All => tasks.to_vec(),
        FilterMode::Active => tasks.iter().filter(|t| !t.is_done).cloned().collect(),
        FilterMode::Completed => tasks.iter().filter(|t| t.is_done).cloned().collect(),
    }
}
