//! Car Grid Component
//!
//! Loading, failure, empty and populated states of a car list. Shared by the
//! home and search views.

use leptos::prelude::*;

use crate::components::CarCard;
use crate::listing::{ListingPhase, ListingState};
use crate::models::CarRecord;

#[component]
pub fn CarGrid(
    #[prop(into)] state: Signal<ListingState>,
    /// Rendered when the list loaded with no cars
    #[prop(into)] empty: ViewFn,
    on_open: Callback<CarRecord>,
    #[prop(optional)] on_edit: Option<Callback<CarRecord>>,
    #[prop(optional)] on_delete: Option<Callback<CarRecord>>,
    #[prop(optional)] busy: Option<Signal<bool>>,
) -> impl IntoView {
    move || state.with(|s| match s.phase() {
        ListingPhase::Loading => view! { <p class="loading">"Loading cars..."</p> }.into_any(),
        ListingPhase::Failed(msg) => view! { <p class="error">{msg.to_string()}</p> }.into_any(),
        ListingPhase::Empty => empty.run(),
        ListingPhase::Cars(cars) => view! {
            <div class="car-grid">
                {cars.iter().cloned().map(|car| view! {
                    <CarCard
                        car=car
                        on_open=on_open
                        on_edit=on_edit
                        on_delete=on_delete
                        busy=busy
                    />
                }).collect_view()}
            </div>
        }.into_any(),
    })
}
