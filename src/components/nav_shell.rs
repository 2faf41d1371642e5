//! Navigation Shell
//!
//! Header (logo, links, search box, logout) and footer around a page.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::use_app_context;
use crate::routes::AppRoute;

#[component]
pub fn NavShell(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let (keyword, set_keyword) = signal(String::new());

    let link_class = move |path: &'static str| {
        if pathname.get() == path { "nav-link active" } else { "nav-link" }
    };

    let search = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if let Some(route) = AppRoute::search(&keyword.get()) {
                navigate(&route.path(), Default::default());
            }
        }
    };

    let logout = move |_| {
        ctx.session.logout();
        navigate(&AppRoute::Login.path(), Default::default());
    };

    view! {
        <div class="shell">
            <nav class="navbar">
                <a href="/" class="logo">"SeeCar"</a>

                <div class="nav-links">
                    <a href="/" class=move || link_class("/")>"Home"</a>
                    <a href="/about" class=move || link_class("/about")>"About Us"</a>
                </div>

                <div class="nav-actions">
                    <form class="search-box" on:submit=search>
                        <input
                            type="text"
                            placeholder="Search..."
                            prop:value=move || keyword.get()
                            on:input=move |ev| set_keyword.set(event_target_value(&ev))
                        />
                        <button type="submit">"Search"</button>
                    </form>
                    <button class="logout-btn" on:click=logout>"Logout"</button>
                </div>
            </nav>

            <main class="page">{children()}</main>

            <footer class="footer">"© 2024 SeeCar. All rights reserved."</footer>
        </div>
    }
}
