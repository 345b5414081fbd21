//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list is a
//! cache of the server: every mutation ends with a full read that replaces
//! it wholesale.

use std::sync::Arc;

use futures::future::join_all;
use leptos::prelude::*;
use log::{info, warn};
use reactive_stores::Store;

use crate::api::{ApiError, TodoGateway};
use crate::config::Session;
use crate::editor::Commit;
use crate::filter::{filter_todos, Status};
use crate::models::{Todo, TodoDraft, TodoId, TodoPatch, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Client state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Server order, never sorted locally
    pub todos: Vec<Todo>,
    /// New-todo input text
    pub input: String,
    pub load: LoadState,
    pub user: Option<User>,
    /// Ticket of the newest list read or local write; older reads are dropped
    pub latest_read: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Blank input, nothing sent
    Skipped,
    Added(TodoId),
}

/// Result of a toggle-all or clear-completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Ids whose request was rejected
    pub failed: Vec<TodoId>,
    /// Whether the follow-up read succeeded
    pub reconciled: bool,
}

impl BulkOutcome {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.reconciled
    }
}

// ========================
// Pure helpers
// ========================

pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| t.is_active()).count()
}

pub fn all_completed(todos: &[Todo]) -> bool {
    !todos.is_empty() && active_count(todos) == 0
}

pub fn header_text(user: Option<&User>, load: LoadState) -> String {
    match (user, load) {
        (Some(user), _) => format!("{} todos", user.name),
        (None, LoadState::Loading) => "Loading...".to_string(),
        (None, _) => "Couldn't connect to server".to_string(),
    }
}

/// Toggle-all policy: when the list is uniform (all active or all done) every
/// item flips; when it is mixed only the active items get completed.
///
/// Returns the optimistic list and one patch per affected item.
pub fn plan_toggle_all(todos: &[Todo]) -> (Vec<Todo>, Vec<(TodoId, TodoPatch)>) {
    let active = active_count(todos);
    let flip_all = active == 0 || active == todos.len();

    let mut next = Vec::with_capacity(todos.len());
    let mut patches = Vec::new();
    for todo in todos {
        let mut todo = todo.clone();
        if flip_all || todo.is_active() {
            let patch = TodoPatch::completed(!todo.completed);
            patch.apply_to(&mut todo);
            patches.push((todo.id, patch));
        }
        next.push(todo);
    }
    (next, patches)
}

/// Keeps the active items in order and lists the completed ids to delete.
pub fn plan_clear_completed(todos: &[Todo]) -> (Vec<Todo>, Vec<TodoId>) {
    let (done, kept): (Vec<&Todo>, Vec<&Todo>) = todos.iter().partition(|t| t.completed);
    (
        kept.into_iter().cloned().collect(),
        done.into_iter().map(|t| t.id).collect(),
    )
}

// ========================
// Store
// ========================

/// The state store bound to a gateway and the current session.
pub struct TodoStore<G> {
    state: Store<TodoState>,
    gateway: Arc<G>,
    session: Session,
}

impl<G> Clone for TodoStore<G> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            gateway: Arc::clone(&self.gateway),
            session: self.session,
        }
    }
}

impl<G: TodoGateway> TodoStore<G> {
    pub fn new(gateway: G, session: Session) -> Self {
        Self {
            state: Store::new(TodoState::default()),
            gateway: Arc::new(gateway),
            session,
        }
    }

    pub fn state(&self) -> Store<TodoState> {
        self.state
    }

    pub fn session(&self) -> Session {
        self.session
    }

    #[cfg(test)]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.state.todos().get_untracked()
    }

    /// Items for the current filter (tracked)
    pub fn visible(&self, status: Status) -> Vec<Todo> {
        self.state.todos().with(|todos| filter_todos(todos, status))
    }

    pub fn set_input(&self, text: impl Into<String>) {
        *self.state.input().write() = text.into();
    }

    fn next_ticket(&self) -> u64 {
        let field = self.state.latest_read();
        let mut latest = field.write();
        *latest += 1;
        *latest
    }

    /// Replace the list locally; pending reads become stale.
    fn write_local(&self, todos: Vec<Todo>) {
        self.next_ticket();
        *self.state.todos().write() = todos;
    }

    fn apply_read(&self, ticket: u64, todos: Vec<Todo>) -> bool {
        if self.state.latest_read().get_untracked() != ticket {
            info!("[STORE] Dropping stale read #{}", ticket);
            return false;
        }
        *self.state.todos().write() = todos;
        true
    }

    /// Initial load of the list and the user.
    pub async fn load(&self) -> LoadState {
        let user_id = self.session.user_id;
        *self.state.load().write() = LoadState::Loading;

        let ticket = self.next_ticket();
        let (todos, user) = futures::join!(
            self.gateway.list_by_user(user_id),
            self.gateway.get_user(user_id)
        );

        let mut load = LoadState::Ready;
        match todos {
            Ok(todos) => {
                info!("[STORE] Loaded {} todos for user {}", todos.len(), user_id);
                self.apply_read(ticket, todos);
            }
            Err(e) => {
                warn!("[STORE] Loading todos failed: {}", e);
                load = LoadState::Failed;
            }
        }
        match user {
            Ok(user) => *self.state.user().write() = Some(user),
            Err(e) => {
                warn!("[STORE] Loading user {} failed: {}", user_id, e);
                load = LoadState::Failed;
            }
        }

        *self.state.load().write() = load;
        load
    }

    /// Re-read the full list from the server.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let ticket = self.next_ticket();
        let todos = self.gateway.list_by_user(self.session.user_id).await?;
        self.apply_read(ticket, todos);
        Ok(())
    }

    /// Create a todo from the input text, then reload.
    pub async fn add(&self) -> Result<AddOutcome, ApiError> {
        let title = self.state.input().get_untracked().trim().to_string();
        if title.is_empty() {
            return Ok(AddOutcome::Skipped);
        }

        let draft = TodoDraft::new(self.session.user_id, title);
        let created = self.gateway.create(&draft).await.map_err(|e| {
            warn!("[STORE] Creating todo failed: {}", e);
            e
        })?;

        self.set_input(String::new());
        // The server already has the todo; a failed reload must not read as a failed add.
        if let Err(e) = self.refresh().await {
            warn!("[STORE] Reload after creating todo {} failed: {}", created.id, e);
        }
        Ok(AddOutcome::Added(created.id))
    }

    /// Optimistic toggle of every affected item, one update each, then reload.
    pub async fn toggle_all(&self) -> BulkOutcome {
        let (next, patches) = plan_toggle_all(&self.todos());
        if patches.is_empty() {
            return BulkOutcome { failed: Vec::new(), reconciled: true };
        }
        self.write_local(next);

        let gateway = &*self.gateway;
        let results = join_all(
            patches
                .iter()
                .map(|(id, patch)| async move { (*id, gateway.update(*id, patch).await) }),
        )
        .await;

        self.finish_bulk("toggle", results).await
    }

    /// Drop completed items locally, one delete each, then reload.
    pub async fn clear_completed(&self) -> BulkOutcome {
        let (kept, doomed) = plan_clear_completed(&self.todos());
        if doomed.is_empty() {
            return BulkOutcome { failed: Vec::new(), reconciled: true };
        }
        self.write_local(kept);

        let gateway = &*self.gateway;
        let results = join_all(
            doomed
                .iter()
                .map(|id| async move { (*id, gateway.delete(*id).await) }),
        )
        .await;

        self.finish_bulk("delete", results).await
    }

    async fn finish_bulk<T>(
        &self,
        action: &str,
        results: Vec<(TodoId, Result<T, ApiError>)>,
    ) -> BulkOutcome {
        let failed: Vec<TodoId> = results
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(_) => None,
                Err(e) => {
                    warn!("[STORE] Bulk {} of todo {} failed: {}", action, id, e);
                    Some(id)
                }
            })
            .collect();

        let reconciled = match self.refresh().await {
            Ok(()) => true,
            Err(e) => {
                warn!("[STORE] Reload after bulk {} failed: {}", action, e);
                false
            }
        };

        BulkOutcome { failed, reconciled }
    }

    // ========================
    // Row operations
    // ========================

    pub async fn toggle(&self, id: TodoId, completed: bool) -> Result<(), ApiError> {
        self.gateway.update(id, &TodoPatch::completed(completed)).await?;
        self.refresh().await
    }

    pub async fn rename(&self, id: TodoId, title: &str) -> Result<(), ApiError> {
        self.gateway.update(id, &TodoPatch::title(title)).await?;
        self.refresh().await
    }

    pub async fn remove(&self, id: TodoId) -> Result<(), ApiError> {
        self.gateway.delete(id).await?;
        self.refresh().await
    }

    /// Carry out what the row editor decided.
    pub async fn apply_commit(&self, id: TodoId, commit: &Commit) -> Result<(), ApiError> {
        match commit {
            Commit::Delete => self.remove(id).await,
            Commit::Rename(title) => self.rename(id, title).await,
            Commit::Unchanged => Ok(()),
        }
    }
}
