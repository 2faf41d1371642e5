//! Home View
//!
//! Grid of every listing with detail, update and delete flows.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::components::{CarDetailModal, CarGrid, DeleteConfirmDialog, EditCarModal, NavShell, Protected, SampleCard};
use crate::context::use_app_context;
use crate::forms::EditForm;
use crate::listing::ListingState;
use crate::models::{CarRecord, CarUpdate};
use crate::routes::AppRoute;

/// Fetch every listing into `listing`
fn load_all(api: ApiClient, listing: RwSignal<ListingState>) {
    listing.update(ListingState::start_loading);
    spawn_local(async move {
        match api.list_cars().await {
            Ok(cars) => {
                log::info!("[HOME] Loaded {} cars", cars.len());
                listing.try_update(|s| s.loaded(cars));
            }
            Err(e) => {
                log::error!("[HOME] Error loading cars: {:?}", e);
                listing.try_update(|s| s.failed(e.to_string()));
            }
        }
    });
}

#[component]
pub fn HomeView() -> impl IntoView {
    view! {
        <Protected route=AppRoute::Home>
            <NavShell>
                <CarListing />
            </NavShell>
        </Protected>
    }
}

#[component]
fn CarListing() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let listing = RwSignal::new(ListingState::new());
    let selected = RwSignal::new(None::<CarRecord>);
    let editing = RwSignal::new(None::<EditForm>);
    let busy = Signal::derive(move || listing.with(|s| s.is_busy()));

    load_all(ctx.api.clone(), listing);

    let open_details = Callback::new(move |car: CarRecord| selected.set(Some(car)));
    let begin_edit = Callback::new(move |car: CarRecord| editing.set(Some(EditForm::from_record(&car))));
    let confirm_delete = Callback::new(move |car: CarRecord| listing.update(|s| s.confirm_delete(car)));

    let save_edit = {
        let api = ctx.api.clone();
        Callback::new(move |(id, update): (String, CarUpdate)| {
            let rollback = match listing.try_update(|s| s.begin_update(&id, &update)) {
                Some(Ok(rollback)) => rollback,
                Some(Err(e)) => {
                    log::warn!("[HOME] Update {} rejected: {}", id, e);
                    return Err(e);
                }
                None => return Ok(()),
            };
            editing.set(None);
            let api = api.clone();
            spawn_local(async move {
                let result = api.update_car(&id, &update).await.map_err(|e| {
                    log::error!("[HOME] Update {} failed: {:?}", id, e);
                    e.to_string()
                });
                listing.try_update(|s| s.finish_write(rollback, result));
            });
            Ok(())
        })
    };

    let delete_confirmed = {
        let api = ctx.api.clone();
        Callback::new(move |_: ()| {
            let Some((id, rollback)) = listing.try_update(|s| s.begin_delete()).flatten() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api.delete_car(&id).await.map_err(|e| {
                    log::error!("[HOME] Delete {} failed: {:?}", id, e);
                    e.to_string()
                });
                listing.try_update(|s| s.finish_write(rollback, result));
            });
        })
    };

    view! {
        <div class="listing">
            <div class="listing-header">
                <h1>"Car Listings"</h1>
                <button class="add-btn" on:click=move |_| navigate(&AppRoute::AddCar.path(), Default::default())>
                    "Add Listing"
                </button>
            </div>

            {move || listing.with(|s| s.error.clone()).map(|e| view! { <div class="error-banner">{e}</div> })}

            <CarGrid
                state=listing
                empty=|| view! { <SampleCard /> }
                on_open=open_details
                on_edit=begin_edit
                on_delete=confirm_delete
                busy=busy
            />

            {move || selected.get().map(|car| view! {
                <CarDetailModal car=car on_close=Callback::new(move |_| selected.set(None)) />
            })}

            {move || editing.get().map(|form| view! {
                <EditCarModal
                    form=form
                    on_save=save_edit
                    on_cancel=Callback::new(move |_| editing.set(None))
                    busy=busy
                />
            })}

            {move || listing.with(|s| s.pending_delete().cloned()).map(|car| view! {
                <DeleteConfirmDialog
                    title=car.title
                    on_confirm=delete_confirmed
                    on_cancel=Callback::new(move |_| listing.update(|s| s.cancel_delete()))
                    busy=busy
                />
            })}
        </div>
    }
}
