//! Output rendering for list views

use libtodo::ListView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render one snapshot of views
///
/// Text numbers tasks by their position in the whole list (the same
/// numbers script commands accept), even when a filter hides some.
pub fn render(views: &[ListView], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(views),
        OutputFormat::Text => Ok(render_text(views)),
    }
}

fn render_text(views: &[ListView]) -> String {
    let mut out = String::new();

    for (index, view) in views.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} [{}] ({}/{} done)\n",
            index + 1,
            view.list.title,
            view.list.filter,
            view.completed,
            view.total
        ));

        if view.tasks.is_empty() {
            out.push_str("   (no tasks)\n");
        }
        for (task, position) in view.tasks.iter().zip(&view.positions) {
            let mark = if task.is_done { "x" } else { " " };
            out.push_str(&format!("   {}. [{}] {}\n", position, mark, task.title));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use libtodo::app::actions::{change_task_status, change_todo_list_filter};
    use libtodo::{FilterMode, TodoApp};

    fn app() -> TodoApp {
        let mut app = TodoApp::default();
        let list = app.add_todo_list("Work");
        let report = app.add_task(list.clone(), "Report");
        app.add_task(list.clone(), "Email");
        app.dispatch(change_task_status(list, report, true));
        app
    }

    #[test]
    fn test_render_text() {
        let text = render(&app().views(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "1. Work [all] (1/2 done)\n   1. [x] Report\n   2. [ ] Email\n"
        );
    }

    #[test]
    fn test_render_text_keeps_full_list_positions() {
        let mut app = app();
        let list = app.lists()[0].id.clone();
        app.dispatch(change_todo_list_filter(list, FilterMode::Active));

        let text = render(&app.views(), OutputFormat::Text).unwrap();
        assert_eq!(text, "1. Work [active] (1/2 done)\n   2. [ ] Email\n");
    }

    #[test]
    fn test_render_text_empty_view() {
        let mut app = TodoApp::default();
        app.add_todo_list("Empty");

        let text = render(&app.views(), OutputFormat::Text).unwrap();
        assert!(text.contains("(no tasks)"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&app().views(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["title"], "Work");
        assert_eq!(value[0]["filter"], "all");
        assert_eq!(value[0]["tasks"][0]["isDone"], true);
        assert_eq!(value[0]["completed"], 1);
        assert_eq!(value[0]["has_completed"], true);
    }
}
