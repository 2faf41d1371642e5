//! Login View

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::routes::AppRoute;

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_app_context();
    if ctx.session.is_authenticated() {
        return view! { <Redirect path=AppRoute::Home.path() /> }.into_any();
    }
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            let result = ctx.api.login(&email, &password).await;
            if set_busy.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(token) => {
                    ctx.session.login(&token);
                    navigate(&AppRoute::Home.path(), Default::default());
                }
                Err(e) => {
                    log::warn!("[LOGIN] {:?}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="login">
            <h1>"SeeCar"</h1>
            <form on:submit=submit>
                <label>"Email"</label>
                <input
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label>"Password"</label>
                <input
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
    .into_any()
}
