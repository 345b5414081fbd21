//! Frontend Models
//!
//! Data structures matching the remote todo service.

use serde::{Deserialize, Serialize};

pub type TodoId = u32;
pub type UserId = u32;

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// A todo that has not been persisted yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    pub user_id: UserId,
    pub title: String,
    completed: bool,
}

impl TodoDraft {
    /// New todos always start active.
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            completed: false,
        }
    }

    #[cfg(test)]
    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// Partial update body; only the fields that are set go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    /// Apply this patch to a local copy.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// User data structure (read-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_from_server_json() {
        let json = r#"{
            "id": 7,
            "userId": 3,
            "title": "Buy milk",
            "completed": true,
            "createdAt": "2022-01-01T00:00:00.000Z"
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.user_id, 3);
        assert_eq!(todo.title, "Buy milk");
        assert!(todo.completed);
        assert!(!todo.is_active());
    }

    #[test]
    fn test_draft_is_never_completed() {
        let draft = TodoDraft::new(3, "Write docs");
        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(value["userId"], 3);
        assert_eq!(value["title"], "Write docs");
        assert_eq!(value["completed"], false);
        assert!(!draft.completed());
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let value = serde_json::to_value(TodoPatch::completed(true)).unwrap();
        assert_eq!(value, serde_json::json!({ "completed": true }));

        let value = serde_json::to_value(TodoPatch::title("New")).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "New" }));
    }

    #[test]
    fn test_patch_apply_to() {
        let mut todo = Todo { id: 1, user_id: 1, title: "Old".into(), completed: false };

        TodoPatch::completed(true).apply_to(&mut todo);
        assert!(todo.completed);
        assert_eq!(todo.title, "Old");

        TodoPatch::title("New").apply_to(&mut todo);
        assert_eq!(todo.title, "New");
        assert!(todo.completed);
    }

    #[test]
    fn test_user_with_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{ "id": 1, "name": "Leanne" }"#).unwrap();
        assert_eq!(user.name, "Leanne");
        assert_eq!(user.email, None);
    }
}
