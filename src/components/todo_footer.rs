//! Todo Footer Component
//!
//! Remaining count, filter links and the clear-completed button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorFlash, ErrorNotice};
use crate::context::use_app_context;
use crate::filter::Status;
use crate::store::{active_count, TodoStateStoreFields};

#[component]
pub fn TodoFooter(status: Memo<Status>) -> impl IntoView {
    let ctx = use_app_context();
    let flash = ErrorFlash::new(ctx.error_display_ms());
    let state = ctx.store.state();
    let store = StoredValue::new(ctx.store);

    let clear_completed = move |_| {
        let store = store.get_value();
        spawn_local(async move {
            let outcome = store.clear_completed().await;
            if !outcome.is_clean() {
                flash.trigger();
            }
        });
    };

    view! {
        <Show when=move || state.todos().with(|todos| !todos.is_empty())>
            <footer class="footer">
                <span class="todo-count">
                    {move || format!("{} items left", state.todos().with(|todos| active_count(todos)))}
                </span>

                <ul class="filters">
                    {Status::ALL.into_iter().map(|filter| view! {
                        <li>
                            <a
                                href=filter.path()
                                class=move || if status.get() == filter { "selected" } else { "" }
                            >
                                {filter.label()}
                            </a>
                        </li>
                    }).collect_view()}
                </ul>

                <Show when=move || state.todos().with(|todos| todos.iter().any(|t| t.completed))>
                    <button type="button" class="clear-completed" on:click=clear_completed>
                        "Clear completed"
                    </button>
                </Show>
            </footer>
        </Show>
        <ErrorNotice flash=flash message="Some completed todos could not be deleted" />
    }
}
