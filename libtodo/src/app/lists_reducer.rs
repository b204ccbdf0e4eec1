//! Pure reducer for the list collection
//!
//! `(Vec<TodoList>, &Action) -> Vec<TodoList>`. No I/O, no logging, no
//! id generation. Lists the action does not touch are moved through as-is.

use super::actions::Action;
use crate::types::TodoList;

/// Apply an action to the list collection
///
/// Task-level actions are not this reducer's concern and return the input
/// unchanged. Changes to an id that is not present are no-ops.
pub fn reduce_lists(lists: Vec<TodoList>, action: &Action) -> Vec<TodoList> {
    match action {
        Action::AddTodoList { id, title } => {
            let mut lists = lists;
            lists.push(TodoList::new(id.clone(), title.clone()));
            lists
        }

        Action::RemoveTodoList { id } => lists.into_iter().filter(|list| &list.id != id).collect(),

        Action::ChangeTodoListTitle { id, title } => lists
            .into_iter()
            .map(|list| {
                if &list.id == id {
                    TodoList {
                        title: title.clone(),
                        ..list
                    }
                } else {
                    list
                }
            })
            .collect(),

        Action::ChangeTodoListFilter { id, filter } => lists
            .into_iter()
            .map(|list| {
                if &list.id == id {
                    TodoList {
                        filter: *filter,
                        ..list
                    }
                } else {
                    list
                }
            })
            .collect(),

        Action::AddTask { .. }
        | Action::RemoveTask { .. }
        | Action::ChangeTaskStatus { .. }
        | Action::ChangeTaskTitle { .. } => lists,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::{
        add_task, add_todo_list, change_task_status, change_todo_list_filter,
        change_todo_list_title, remove_todo_list,
    };
    use crate::types::FilterMode;

    fn sample() -> Vec<TodoList> {
        vec![
            TodoList::new("L1".to_string(), "What to learn".to_string()),
            TodoList::new("L2".to_string(), "What to buy".to_string()),
        ]
    }

    #[test]
    fn test_add_todo_list_appends_with_default_filter() {
        let action = add_todo_list("New list");
        let new_id = action.todo_list_id().to_string();

        let lists = reduce_lists(sample(), &action);

        assert_eq!(lists.len(), 3);
        assert_eq!(lists[2].id, new_id);
        assert_eq!(lists[2].title, "New list");
        assert_eq!(lists[2].filter, FilterMode::All);
        // Existing order preserved
        assert_eq!(lists[0].id, "L1");
        assert_eq!(lists[1].id, "L2");
    }

    #[test]
    fn test_remove_todo_list() {
        let lists = reduce_lists(sample(), &remove_todo_list("L1"));

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, "L2");
    }

    #[test]
    fn test_remove_unknown_list_is_noop() {
        let lists = reduce_lists(sample(), &remove_todo_list("missing"));
        assert_eq!(lists, sample());
    }

    #[test]
    fn test_change_title_only_touches_matching_list() {
        let lists = reduce_lists(sample(), &change_todo_list_title("L2", "Groceries"));

        assert_eq!(lists[0], sample()[0]);
        assert_eq!(lists[1].title, "Groceries");
        assert_eq!(lists[1].filter, FilterMode::All);
    }

    #[test]
    fn test_change_filter() {
        let lists = reduce_lists(
            sample(),
            &change_todo_list_filter("L2", FilterMode::Completed),
        );

        assert_eq!(lists[0].filter, FilterMode::All);
        assert_eq!(lists[1].filter, FilterMode::Completed);
        assert_eq!(lists[1].title, "What to buy");
    }

    #[test]
    fn test_change_unknown_id_is_noop() {
        let lists = reduce_lists(sample(), &change_todo_list_title("missing", "x"));
        assert_eq!(lists, sample());

        let lists = reduce_lists(
            sample(),
            &change_todo_list_filter("missing", FilterMode::Active),
        );
        assert_eq!(lists, sample());
    }

    #[test]
    fn test_task_actions_return_input_unchanged() {
        let lists = sample();
        let ptr = lists.as_ptr();

        let lists = reduce_lists(lists, &add_task("L1", "Milk"));
        let lists = reduce_lists(lists, &change_task_status("L1", "t1", true));

        // Same allocation handed back, not a copy
        assert_eq!(lists.as_ptr(), ptr);
        assert_eq!(lists, sample());
    }

    #[test]
    fn test_empty_title_is_accepted() {
        let lists = reduce_lists(sample(), &change_todo_list_title("L1", ""));
        assert_eq!(lists[0].title, "");
    }
}
