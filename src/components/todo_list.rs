//! Todo List Component
//!
//! Toggle-all checkbox and the rows matching the current filter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorFlash, ErrorNotice, TodoItem};
use crate::context::use_app_context;
use crate::filter::Status;
use crate::store::{all_completed, TodoStateStoreFields};

#[component]
pub fn TodoList(status: Memo<Status>) -> impl IntoView {
    let ctx = use_app_context();
    let flash = ErrorFlash::new(ctx.error_display_ms());
    let state = ctx.store.state();
    let store = StoredValue::new(ctx.store);

    let visible_ids = move || {
        store.with_value(|s| s.visible(status.get()))
            .into_iter()
            .map(|todo| todo.id)
            .collect::<Vec<_>>()
    };

    let toggle_all = move |_| {
        let store = store.get_value();
        spawn_local(async move {
            let outcome = store.toggle_all().await;
            if !outcome.is_clean() {
                flash.trigger();
            }
        });
    };

    view! {
        <section class="main">
            <input
                type="checkbox"
                id="toggle-all"
                class="toggle-all"
                prop:checked=move || state.todos().with(|todos| all_completed(todos))
                on:change=toggle_all
            />
            <label for="toggle-all">"Mark all as complete"</label>

            <Show when=move || state.todos().with(|todos| !todos.is_empty())>
                <ul class="todo-list">
                    <For
                        each=visible_ids
                        key=|id| *id
                        children=move |id| view! { <TodoItem id=id /> }
                    />
                </ul>
            </Show>
            <ErrorNotice flash=flash message="Some todos could not be updated" />
        </section>
    }
}
