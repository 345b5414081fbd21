//! Filter View
//!
//! Route-driven completion filter over the todo list.

use crate::models::Todo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    All,
    Active,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::All, Status::Active, Status::Completed];

    /// Map a route path to a selector. Unknown paths show everything.
    pub fn from_path(path: &str) -> Self {
        match path.trim_matches('/') {
            "active" => Status::Active,
            "completed" => Status::Completed,
            _ => Status::All,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Status::All => "/",
            Status::Active => "/active",
            Status::Completed => "/completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::All => "All",
            Status::Active => "Active",
            Status::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Status::All => true,
            Status::Active => !todo.completed,
            Status::Completed => todo.completed,
        }
    }
}

/// Items matching `status`, in their original order
pub fn filter_todos(todos: &[Todo], status: Status) -> Vec<Todo> {
    todos.iter().filter(|t| status.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::todo;

    fn sample() -> Vec<Todo> {
        vec![
            todo(1, "a", false),
            todo(2, "b", true),
            todo(3, "c", false),
            todo(4, "d", true),
            todo(5, "e", false),
        ]
    }

    fn ids(todos: &[Todo]) -> Vec<u32> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Status::from_path("/"), Status::All);
        assert_eq!(Status::from_path(""), Status::All);
        assert_eq!(Status::from_path("/active"), Status::Active);
        assert_eq!(Status::from_path("/completed/"), Status::Completed);
        assert_eq!(Status::from_path("/nope"), Status::All);

        for status in Status::ALL {
            assert_eq!(Status::from_path(status.path()), status);
        }
    }

    #[test]
    fn test_all_is_identity() {
        let todos = sample();
        assert_eq!(filter_todos(&todos, Status::All), todos);
    }

    #[test]
    fn test_active_and_completed_partition_in_order() {
        let todos = sample();
        let active = filter_todos(&todos, Status::Active);
        let completed = filter_todos(&todos, Status::Completed);

        assert_eq!(ids(&active), vec![1, 3, 5]);
        assert_eq!(ids(&completed), vec![2, 4]);
        assert_eq!(active.len() + completed.len(), todos.len());
        assert!(active.iter().all(|a| !completed.iter().any(|c| c.id == a.id)));
    }

    #[test]
    fn test_empty_list() {
        assert!(filter_todos(&[], Status::Active).is_empty());
    }
}
