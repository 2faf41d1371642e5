//! Car Card Component
//!
//! One tile of the listing grid.

use leptos::prelude::*;

use crate::models::CarRecord;

/// Grid tile. Edit/delete buttons appear only when their callbacks are given.
#[component]
pub fn CarCard(
    car: CarRecord,
    /// Opens the detail viewer
    on_open: Callback<CarRecord>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<CarRecord>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<CarRecord>>,
    /// Disables edit/delete while a write is in flight
    #[prop(optional_no_strip)] busy: Option<Signal<bool>>,
) -> impl IntoView {
    let busy = move || busy.map(|b| b.get()).unwrap_or(false);
    let cover = car.cover();
    let open_car = car.clone();
    let open = move |_| on_open.run(open_car.clone());

    let actions = (on_edit.is_some() || on_delete.is_some()).then(|| {
        let edit_car = car.clone();
        let delete_car = car.clone();
        view! {
            <div class="card-actions">
                {on_edit.map(|cb| view! {
                    <button class="edit-btn" disabled=busy on:click=move |_| cb.run(edit_car.clone())>
                        "Update"
                    </button>
                })}
                {on_delete.map(|cb| view! {
                    <button class="delete-btn" disabled=busy on:click=move |_| cb.run(delete_car.clone())>
                        "Delete"
                    </button>
                })}
            </div>
        }
    });

    view! {
        <div class="car-card">
            {match cover {
                Some(src) => view! {
                    <img class="car-cover" src=src alt=car.title.clone() on:click=open />
                }.into_any(),
                None => view! {
                    <div class="car-cover placeholder" on:click=open>"No image"</div>
                }.into_any(),
            }}
            <div class="car-body">
                <h3 class="car-title">{car.title.clone()}</h3>
                <p class="car-desc">{car.desc.clone()}</p>
                <TagChips tags=car.tags.clone() />
                {actions}
            </div>
        </div>
    }
}

/// Tag labels, in stored order
#[component]
pub fn TagChips(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="tag-chips">
            {tags.into_iter().map(|tag| view! { <span class="tag-chip">{tag}</span> }).collect_view()}
        </div>
    }
}

/// Shown when the backend has no listings yet
#[component]
pub fn SampleCard() -> impl IntoView {
    view! {
        <div class="no-cars">
            <h2>"No cars available"</h2>
            <div class="car-card sample">
                <div class="car-cover placeholder">"No image"</div>
                <div class="car-body">
                    <h3 class="car-title">"Sample Car"</h3>
                    <p class="car-desc">"Description: This is a sample description for a car."</p>
                    <TagChips tags=vec!["sample".to_string()] />
                </div>
            </div>
        </div>
    }
}
