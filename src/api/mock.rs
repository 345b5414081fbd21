//! In-memory gateway for tests
//!
//! Keeps a server-side list, records every request and can be told to
//! reject particular calls.

use std::cell::RefCell;
use std::collections::HashSet;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::{ApiError, TodoGateway};
use crate::models::{Todo, TodoDraft, TodoId, TodoPatch, User, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(UserId),
    Create(String),
    Update(TodoId, TodoPatch),
    Delete(TodoId),
    GetUser(UserId),
}

#[derive(Default)]
pub struct MockGateway {
    todos: RefCell<Vec<Todo>>,
    next_id: RefCell<TodoId>,
    calls: RefCell<Vec<Call>>,
    fail_all: RefCell<bool>,
    fail_ids: RefCell<HashSet<TodoId>>,
    fail_list: RefCell<bool>,
    fail_user: RefCell<bool>,
    held_read: RefCell<Option<oneshot::Receiver<()>>>,
}

fn rejected(url: impl Into<String>) -> ApiError {
    ApiError::Status {
        status: 500,
        url: url.into(),
    }
}

impl MockGateway {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            todos: RefCell::new(todos),
            next_id: RefCell::new(next_id),
            ..Default::default()
        }
    }

    /// Reject every write
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_all.borrow_mut() = fail;
    }

    /// Reject writes that target this id
    pub fn fail_id(&self, id: TodoId) {
        self.fail_ids.borrow_mut().insert(id);
    }

    /// Reject list and user reads
    pub fn fail_reads(&self, fail: bool) {
        self.fail_list_reads(fail);
        self.fail_user_read(fail);
    }

    pub fn fail_list_reads(&self, fail: bool) {
        *self.fail_list.borrow_mut() = fail;
    }

    pub fn fail_user_read(&self, fail: bool) {
        *self.fail_user.borrow_mut() = fail;
    }

    /// The next list read snapshots the server list, then waits for `release`
    /// before answering with that snapshot.
    pub fn hold_next_read(&self, release: oneshot::Receiver<()>) {
        *self.held_read.borrow_mut() = Some(release);
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::List(_) | Call::GetUser(_)))
            .collect()
    }

    fn rejects(&self, id: Option<TodoId>) -> bool {
        *self.fail_all.borrow() || id.is_some_and(|id| self.fail_ids.borrow().contains(&id))
    }
}

pub fn todo(id: TodoId, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        user_id: 1,
        title: title.to_string(),
        completed,
    }
}

#[async_trait(?Send)]
impl TodoGateway for MockGateway {
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Todo>, ApiError> {
        self.calls.borrow_mut().push(Call::List(user_id));
        if *self.fail_list.borrow() {
            return Err(rejected("/todos"));
        }
        let snapshot: Vec<Todo> = self
            .todos
            .borrow()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();

        let held = self.held_read.borrow_mut().take();
        if let Some(release) = held {
            let _ = release.await;
        }
        Ok(snapshot)
    }

    async fn create(&self, draft: &TodoDraft) -> Result<Todo, ApiError> {
        self.calls.borrow_mut().push(Call::Create(draft.title.clone()));
        if self.rejects(None) {
            return Err(rejected("/todos"));
        }
        let id = {
            let mut next = self.next_id.borrow_mut();
            let id = *next;
            *next += 1;
            id
        };
        let created = Todo {
            id,
            user_id: draft.user_id,
            title: draft.title.clone(),
            completed: draft.completed(),
        };
        self.todos.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, ApiError> {
        self.calls.borrow_mut().push(Call::Update(id, patch.clone()));
        if self.rejects(Some(id)) {
            return Err(rejected(format!("/todos/{}", id)));
        }
        let mut todos = self.todos.borrow_mut();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::Status { status: 404, url: format!("/todos/{}", id) })?;
        patch.apply_to(todo);
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Delete(id));
        if self.rejects(Some(id)) {
            return Err(rejected(format!("/todos/{}", id)));
        }
        self.todos.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, ApiError> {
        self.calls.borrow_mut().push(Call::GetUser(user_id));
        if *self.fail_user.borrow() {
            return Err(rejected(format!("/users/{}", user_id)));
        }
        Ok(User {
            id: user_id,
            name: "Leanne Graham".to_string(),
            username: Some("Bret".to_string()),
            email: None,
            phone: None,
        })
    }
}
