//! Protected Route Wrapper
//!
//! Runs the auth guard before any child is built, so no fetch starts
//! without a session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_app_context;
use crate::routes::{guard, AppRoute};

#[component]
pub fn Protected(route: AppRoute, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    match guard(&route, &ctx.session) {
        Some(redirect) => view! { <Redirect path=redirect.path() /> }.into_any(),
        None => children().into_any(),
    }
}
