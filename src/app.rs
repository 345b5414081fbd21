//! Todo Client App
//!
//! Root component: header with the new-todo form, the filtered list and the footer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::{NewTodoForm, TodoFooter, TodoList};
use crate::config::ClientConfig;
use crate::context::{use_app_context, AppContext};
use crate::filter::Status;
use crate::store::{header_text, TodoStateStoreFields};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    let store = ctx.store.clone();

    // Provide context to all children
    provide_context(ctx);

    // Load list and user on mount
    Effect::new(move |_| {
        let store = store.clone();
        log::info!("[APP] Loading todos for user {}", store.session().user_id);
        spawn_local(async move {
            store.load().await;
        });
    });

    view! {
        <Router>
            <TodoApp />
        </Router>
    }
}

/// Everything under the router, so the current path drives the filter
#[component]
fn TodoApp() -> impl IntoView {
    let state = use_app_context().store.state();
    let location = use_location();
    let status = Memo::new(move |_| Status::from_path(&location.pathname.get()));

    view! {
        <section class="todoapp">
            <header class="header">
                <h1>{move || header_text(state.user().get().as_ref(), state.load().get())}</h1>
                <NewTodoForm />
            </header>

            <TodoList status=status />
            <TodoFooter status=status />
        </section>
    }
}
