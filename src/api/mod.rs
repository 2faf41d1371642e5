//! Backend API Bindings
//!
//! HTTP client for the SeeCar backend, organized by domain. Every call that
//! needs a session reads the token from the injected [`Session`] and fails
//! with [`ApiError::NotAuthenticated`] before sending anything if it is absent.

mod auth;
mod car;

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::session::Session;

// Re-export all public items
pub use auth::*;
pub use car::*;

/// Header carrying the session token
pub const AUTH_HEADER: &str = "auth-token";

/// Backend client, cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<AppConfig>,
    session: Session,
}

impl ApiClient {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
            session,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path))
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.session.token().ok_or(ApiError::NotAuthenticated)?;
        Ok(self.request(method, path).header(AUTH_HEADER, token))
    }
}

/// Message for a failed response: the body's `error` field when it is a
/// string, otherwise `fallback`
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Read the body, mapping non-2xx statuses to [`ApiError::Status`]
async fn check(response: Response, fallback: &str) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        log::warn!("[API] {} {}: {}", status.as_u16(), fallback, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body, fallback),
        })
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
