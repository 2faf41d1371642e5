//! SeeCar Frontend App
//!
//! Root component: provides context and maps paths to views.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{AboutView, AddCarView, HomeView, LoginView, SearchView};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] Backend at {}", config.api_base);
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/login") view=LoginView />
                <Route path=path!("/") view=HomeView />
                <Route path=path!("/about") view=AboutView />
                <Route path=path!("/search") view=SearchView />
                <Route path=path!("/addcar") view=AddCarView />
            </Routes>
        </Router>
    }
}
