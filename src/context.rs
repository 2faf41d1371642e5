//! Application Context
//!
//! Services shared with every view via the Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::{LocalStorageTokenStore, Session};

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Current login; set at login, cleared at logout
    pub session: Session,
    /// Backend client carrying the same session
    pub api: ApiClient,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let session = Session::new(LocalStorageTokenStore::new(config.token_key.clone()));
        Self::with_session(config, session)
    }

    pub fn with_session(config: AppConfig, session: Session) -> Self {
        let api = ApiClient::new(config, session.clone());
        Self { session, api }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
