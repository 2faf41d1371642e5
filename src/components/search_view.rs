//! Search View
//!
//! Listings matching the `keyword` query parameter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::components::{CarDetailModal, CarGrid, NavShell, Protected};
use crate::context::use_app_context;
use crate::listing::ListingState;
use crate::models::CarRecord;
use crate::routes::AppRoute;

const NO_RESULTS: &str = "No products found with the given keyword";

#[component]
pub fn SearchView() -> impl IntoView {
    let query = use_query_map();
    let keyword = query.with_untracked(|q| q.get("keyword")).unwrap_or_default();
    let route = AppRoute::Search { keyword };
    view! {
        <Protected route=route>
            <NavShell>
                <SearchResults />
            </NavShell>
        </Protected>
    }
}

#[component]
fn SearchResults() -> impl IntoView {
    let ctx = use_app_context();
    let query = use_query_map();
    let keyword = Memo::new(move |_| query.with(|q| q.get("keyword")).unwrap_or_default());

    let results = RwSignal::new(ListingState::new());
    let selected = RwSignal::new(None::<CarRecord>);
    // bumps on every search so a slow earlier response cannot land late
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let kw = keyword.get();
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        if kw.trim().is_empty() {
            results.update(|s| s.loaded(Vec::new()));
            return;
        }
        results.update(ListingState::start_loading);
        let api = ctx.api.clone();
        spawn_local(async move {
            let outcome = api.search_cars(&kw).await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            match outcome {
                Ok(cars) => {
                    log::info!("[SEARCH] {} result(s) for {:?}", cars.len(), kw);
                    results.try_update(|s| s.loaded(cars));
                }
                Err(e) => {
                    log::error!("[SEARCH] {:?} failed: {:?}", kw, e);
                    results.try_update(|s| s.failed(NO_RESULTS.to_string()));
                }
            }
        });
    });

    let open_details = Callback::new(move |car: CarRecord| selected.set(Some(car)));

    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    };

    view! {
        <div class="search-results">
            <div class="listing-header">
                <h1>"Search Results for \"" {move || keyword.get()} "\""</h1>
                <button class="back-btn" on:click=go_back>"Back"</button>
            </div>

            <CarGrid
                state=results
                empty=|| view! { <h2 class="no-cars">"No cars found"</h2> }
                on_open=open_details
            />

            {move || selected.get().map(|car| view! {
                <CarDetailModal car=car on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </div>
    }
}
