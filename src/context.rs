//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpGateway;
use crate::config::ClientConfig;
use crate::store::TodoStore;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Todo list store bound to the REST gateway and the session user
    pub store: TodoStore<HttpGateway>,
    pub config: ClientConfig,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let gateway = HttpGateway::new(config.api_base_url.clone());
        log::debug!("[APP] Todo service at {}", gateway.base_url());
        let store = TodoStore::new(gateway, config.session());
        Self { store, config }
    }

    pub fn error_display_ms(&self) -> u32 {
        self.config.error_display_ms
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
