//! Auth Endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{check, parse_json, ApiClient};
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(alias = "authToken", alias = "token")]
    authtoken: Option<String>,
}

/// Pull the session token out of a login response
pub fn parse_login_token(body: &str) -> Result<String, ApiError> {
    let response: LoginResponse = parse_json(body)?;
    response
        .authtoken
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Decode("login response carried no token".to_string()))
}

impl ApiClient {
    /// Exchange credentials for a token. Does not touch the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .request(Method::POST, LOGIN_PATH)
            .json(&LoginArgs { email, password })
            .send()
            .await?;
        let body = check(response, "Invalid credentials").await?;
        parse_login_token(&body)
    }
}
