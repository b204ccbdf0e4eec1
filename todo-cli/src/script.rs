//! Script commands
//!
//! One command per line, split into words with shell quoting rules so a
//! multi-word title can be named as one reference (`done "What to buy" 1`).
//! Each line is parsed with clap, its list/task
//! references are resolved against the current state, and the resulting
//! action is dispatched through [`TodoApp`]. The script never touches
//! state directly.

use clap::Parser;
use libtodo::app::actions;
use libtodo::config::ValidationConfig;
use libtodo::validation::validate_title;
use libtodo::{Action, FilterMode, Identifier, ListView, TodoApp, TodoError};

#[derive(Parser, Debug, PartialEq)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
pub enum ScriptCommand {
    /// Create a list
    AddList {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },
    RemoveList {
        list: String,
    },
    RenameList {
        list: String,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },
    /// Set a list's filter (all, active, completed)
    Filter {
        list: String,
        mode: FilterMode,
    },
    AddTask {
        list: String,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },
    RemoveTask {
        list: String,
        task: String,
    },
    /// Mark a task done
    Done {
        list: String,
        task: String,
    },
    /// Mark a task not done
    Undo {
        list: String,
        task: String,
    },
    RenameTask {
        list: String,
        task: String,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },
    /// Print the current views
    Show,
}

/// Parse one script line; `None` for blank lines and comments
pub fn parse_line(line: &str) -> Option<std::result::Result<ScriptCommand, String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let Some(words) = shlex::split(line) else {
        return Some(Err("unbalanced quotes".to_string()));
    };

    Some(ScriptCommand::try_parse_from(words).map_err(|e| {
        let rendered = e.render().to_string();
        rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string()
    }))
}

/// Run a whole script against `app`
///
/// Returns one snapshot of the views per `show` command. Stops at the
/// first line that does not parse or carries an invalid title.
pub fn run(
    app: &mut TodoApp,
    limits: &ValidationConfig,
    source: &str,
) -> libtodo::Result<Vec<Vec<ListView>>> {
    let mut snapshots = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let command = match parse_line(line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(message)) => {
                return Err(TodoError::Script {
                    line: line_no,
                    message,
                })
            }
        };

        tracing::debug!(line = line_no, ?command, "script command");
        let action = to_action(app, limits, command).map_err(|message| TodoError::Script {
            line: line_no,
            message,
        })?;
        match action {
            Some(action) => app.dispatch(action),
            None => snapshots.push(app.views()),
        }
    }

    Ok(snapshots)
}

/// Translate a command into an action against the current state
///
/// `show` has no action and yields `None`.
fn to_action(
    app: &TodoApp,
    limits: &ValidationConfig,
    command: ScriptCommand,
) -> std::result::Result<Option<Action>, String> {
    let action = match command {
        ScriptCommand::AddList { title } => actions::add_todo_list(checked_title(&title, limits)?),
        ScriptCommand::RemoveList { list } => actions::remove_todo_list(resolve_list(app, &list)),
        ScriptCommand::RenameList { list, title } => {
            actions::change_todo_list_title(resolve_list(app, &list), checked_title(&title, limits)?)
        }
        ScriptCommand::Filter { list, mode } => {
            actions::change_todo_list_filter(resolve_list(app, &list), mode)
        }
        ScriptCommand::AddTask { list, title } => {
            actions::add_task(resolve_list(app, &list), checked_title(&title, limits)?)
        }
        ScriptCommand::RemoveTask { list, task } => {
            let list_id = resolve_list(app, &list);
            let task_id = resolve_task(app, &list_id, &task);
            actions::remove_task(list_id, task_id)
        }
        ScriptCommand::Done { list, task } => {
            let list_id = resolve_list(app, &list);
            let task_id = resolve_task(app, &list_id, &task);
            actions::change_task_status(list_id, task_id, true)
        }
        ScriptCommand::Undo { list, task } => {
            let list_id = resolve_list(app, &list);
            let task_id = resolve_task(app, &list_id, &task);
            actions::change_task_status(list_id, task_id, false)
        }
        ScriptCommand::RenameTask { list, task, title } => {
            let list_id = resolve_list(app, &list);
            let task_id = resolve_task(app, &list_id, &task);
            actions::change_task_title(list_id, task_id, checked_title(&title, limits)?)
        }
        ScriptCommand::Show => return Ok(None),
    };
    Ok(Some(action))
}

fn checked_title(words: &[String], limits: &ValidationConfig) -> std::result::Result<String, String> {
    let result = validate_title(&words.join(" "), limits);
    if !result.valid {
        return Err(format!("'{}': {}", result.title, result.errors.join(", ")));
    }
    for warning in &result.warnings {
        tracing::warn!(title = %result.title, "{}", warning);
    }
    Ok(result.title)
}

/// Resolve a list reference: 1-based position, id, or exact title
///
/// Unresolved references are passed through unchanged and end up as
/// no-op dispatches.
pub fn resolve_list(app: &TodoApp, reference: &str) -> Identifier {
    let lists = app.lists();
    if let Some(list) = position(reference, lists.len()).map(|i| &lists[i]) {
        return list.id.clone();
    }
    lists
        .iter()
        .find(|l| l.id == reference)
        .or_else(|| lists.iter().find(|l| l.title == reference))
        .map(|l| l.id.clone())
        .unwrap_or_else(|| reference.to_string())
}

/// Resolve a task reference within one list, same rules as lists
pub fn resolve_task(app: &TodoApp, todo_list_id: &str, reference: &str) -> Identifier {
    let tasks = app.tasks().get(todo_list_id).map(Vec::as_slice).unwrap_or(&[]);
    if let Some(task) = position(reference, tasks.len()).map(|i| &tasks[i]) {
        return task.id.clone();
    }
    tasks
        .iter()
        .find(|t| t.id == reference)
        .or_else(|| tasks.iter().find(|t| t.title == reference))
        .map(|t| t.id.clone())
        .unwrap_or_else(|| reference.to_string())
}

fn position(reference: &str, len: usize) -> Option<usize> {
    reference
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
