//! About View

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;

const FEATURES: &[(&str, &str)] = &[
    (
        "Comprehensive Listings",
        "Create detailed car listings with up to 10 images, titles, descriptions, and customizable tags.",
    ),
    (
        "Easy Management",
        "Update, delete, and search for your cars effortlessly, ensuring complete control over your inventory.",
    ),
    (
        "User-Friendly Interface",
        "A sleek, responsive design for seamless navigation on any device.",
    ),
];

/// Recent log lines from the in-memory buffer, read when the panel opens
#[component]
fn DiagnosticsPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move |_| set_lines.set(console_logger::recent());

    view! {
        <details class="diagnostics">
            <summary on:click=refresh>"Diagnostics"</summary>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}

#[component]
pub fn AboutView() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="about">
            <button class="back-btn" on:click=move |_| navigate(&AppRoute::Home.path(), Default::default())>
                "← Back"
            </button>

            <h1>"About SeeCar"</h1>
            <p class="lead">"Your one-stop platform for managing car listings."</p>

            <p>
                "SeeCar makes car management simple for dealers and individual users. From creating \
                 detailed car listings with images and tags to searching and managing cars efficiently, \
                 we provide all the tools you need in one place."
            </p>

            <div class="features">
                {FEATURES.iter().map(|(title, description)| view! {
                    <div class="feature">
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }).collect_view()}
            </div>

            <DiagnosticsPanel />
        </div>
    }
}
