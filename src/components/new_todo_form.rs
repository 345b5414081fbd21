//! New Todo Form Component
//!
//! Header input that creates a todo on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::components::{ErrorFlash, ErrorNotice};
use crate::context::use_app_context;
use crate::store::{AddOutcome, TodoStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let flash = ErrorFlash::new(ctx.error_display_ms());
    let state = ctx.store.state();
    let store = StoredValue::new(ctx.store);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let store = store.get_value();
        spawn_local(async move {
            match store.add().await {
                Ok(AddOutcome::Added(id)) => log::debug!("[FORM] Created todo {}", id),
                Ok(AddOutcome::Skipped) => {}
                Err(e) => {
                    warn!("[FORM] Add failed: {}", e);
                    flash.trigger();
                }
            }
        });
    };

    view! {
        <form on:submit=create_todo>
            <input
                type="text"
                class="new-todo"
                placeholder="What needs to be done?"
                prop:value=move || state.input().get()
                on:input=move |ev| store.with_value(|s| s.set_input(event_target_value(&ev)))
            />
        </form>
        <ErrorNotice flash=flash message="Unable to add a todo" />
    }
}
