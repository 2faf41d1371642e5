//! Routes
//!
//! Client-side route table and the auth guard in front of protected views.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Home,
    About,
    Search { keyword: String },
    AddCar,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => "/login".to_string(),
            AppRoute::Home => "/".to_string(),
            AppRoute::About => "/about".to_string(),
            AppRoute::Search { keyword } => {
                format!("/search?keyword={}", utf8_percent_encode(keyword, NON_ALPHANUMERIC))
            }
            AppRoute::AddCar => "/addcar".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, AppRoute::Login | AppRoute::About)
    }

    /// Search route for a typed keyword, `None` when blank
    pub fn search(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            None
        } else {
            Some(AppRoute::Search { keyword: keyword.to_string() })
        }
    }
}

/// Where to go instead of `route`, if the session may not see it
pub fn guard(route: &AppRoute, session: &Session) -> Option<AppRoute> {
    if route.requires_auth() && !session.is_authenticated() {
        log::info!("[ROUTE] {} requires login, redirecting", route.path());
        Some(AppRoute::Login)
    } else {
        None
    }
}
