//! Todo Item Component
//!
//! One row: checkbox, double-click-to-edit label, destroy button.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::components::{ErrorFlash, ErrorNotice};
use crate::context::use_app_context;
use crate::editor::{EditMode, ItemEditor};
use crate::models::TodoId;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoItem(id: TodoId) -> impl IntoView {
    let ctx = use_app_context();
    let flash = ErrorFlash::new(ctx.error_display_ms());
    let state = ctx.store.state();
    let store = StoredValue::new(ctx.store);

    let todo = Memo::new(move |_| {
        state.todos().with(|todos| todos.iter().find(|t| t.id == id).cloned())
    });
    let title = move || todo.get().map(|t| t.title).unwrap_or_default();
    let completed = move || todo.get().is_some_and(|t| t.completed);

    let editor = RwSignal::new(ItemEditor::new(
        todo.get_untracked().map(|t| t.title).unwrap_or_default(),
    ));
    let edit_ref = NodeRef::<html::Input>::new();

    // Follow server copy of the title
    Effect::new(move |_| {
        let server_title = title();
        editor.update(|e| e.sync_title(&server_title));
    });

    // Focus the edit field once it is shown
    Effect::new(move |_| {
        if editor.with(|e| e.mode() == EditMode::Editing) {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let toggle = move |_| {
        let next = !todo.get_untracked().is_some_and(|t| t.completed);
        let store = store.get_value();
        spawn_local(async move {
            if let Err(e) = store.toggle(id, next).await {
                warn!("[ITEM] Toggle of {} failed: {}", id, e);
                flash.trigger();
            }
        });
    };

    let destroy = move |_| {
        let store = store.get_value();
        spawn_local(async move {
            if let Err(e) = store.remove(id).await {
                warn!("[ITEM] Delete of {} failed: {}", id, e);
                flash.trigger();
            }
        });
    };

    // Blur and Enter both land here; the editor ignores the second one
    let apply = move || {
        let mut commit = None;
        editor.update(|e| commit = e.commit());
        let Some(commit) = commit else { return };

        let store = store.get_value();
        spawn_local(async move {
            match store.apply_commit(id, &commit).await {
                Ok(()) => {
                    editor.try_update(|e| e.commit_succeeded());
                }
                Err(e) => {
                    warn!("[ITEM] Saving {} ({:?}) failed: {}", id, commit, e);
                    editor.try_update(|e| e.commit_failed());
                    flash.trigger();
                }
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            apply();
        }
        "Escape" => editor.update(|e| e.cancel()),
        _ => {}
    };

    let row_class = move || {
        let mut c = String::new();
        if completed() {
            c.push_str("completed");
        }
        if editor.with(|e| e.is_editing()) {
            c.push_str(" editing");
        }
        c
    };

    view! {
        <li class=row_class>
            <div class="view">
                <input
                    type="checkbox"
                    class="toggle"
                    prop:checked=completed
                    on:change=toggle
                />
                <label on:dblclick=move |_| editor.update(|e| e.begin_edit())>{title}</label>
                <button type="button" class="destroy" on:click=destroy></button>
            </div>
            <input
                type="text"
                class="edit"
                node_ref=edit_ref
                prop:value=move || editor.with(|e| e.draft().to_string())
                on:input=move |ev| editor.update(|e| e.set_draft(event_target_value(&ev)))
                on:blur=move |_| apply()
                on:keydown=on_keydown
            />
        </li>
        <ErrorNotice flash=flash message="Server error: try again later" />
    }
}
