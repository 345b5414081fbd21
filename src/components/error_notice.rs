//! Error Notice Component
//!
//! Transient error message with a single cancellable timer per owner.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::notice::TransientError;

/// Error flag plus the one-shot timer that clears it.
///
/// Re-triggering replaces the stored `Timeout`, and dropping a `Timeout`
/// cancels it. When the owning component goes away the stored timer is
/// disposed with it.
#[derive(Clone, Copy)]
pub struct ErrorFlash {
    state: RwSignal<TransientError>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    duration_ms: u32,
}

impl ErrorFlash {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            state: RwSignal::new(TransientError::default()),
            timer: StoredValue::new_local(None),
            duration_ms,
        }
    }

    pub fn trigger(&self) {
        // Owner already disposed
        let Some(generation) = self.state.try_update(|s| s.trigger()) else {
            return;
        };
        let state = self.state;
        let timeout = Timeout::new(self.duration_ms, move || {
            state.try_update(|s| s.dismiss(generation));
        });
        self.timer.set_value(Some(timeout));
    }

    pub fn is_shown(&self) -> bool {
        self.state.with(|s| s.is_shown())
    }
}

#[component]
pub fn ErrorNotice(
    flash: ErrorFlash,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <Show when=move || flash.is_shown()>
            <div class="notification is-danger">{message.clone()}</div>
        </Show>
    }
}
