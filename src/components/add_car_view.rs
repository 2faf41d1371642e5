//! Add Car View
//!
//! Form for creating a listing with up to ten images.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::codec::{self, ObjectUrl};
use crate::components::{alert, Protected};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::forms::{AddCarForm, SelectedImage, MAX_IMAGES};
use crate::routes::AppRoute;

/// How long the success notice stays up
const NOTICE_MS: u32 = 3_000;

#[component]
pub fn AddCarView() -> impl IntoView {
    view! {
        <Protected route=AppRoute::AddCar>
            <NewCarForm />
        </Protected>
    }
}

#[component]
fn NewCarForm() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let form = RwSignal::new(AddCarForm::<ObjectUrl>::default());
    let (notice, set_notice) = signal(None::<&'static str>);

    let select_images = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let files = codec::files_from_list(input.files());
        // allow picking the same file again after removing it
        input.set_value("");
        if files.is_empty() {
            return;
        }
        if let Err(e) = form.with(|f| f.can_accept(files.len())) {
            alert(&e.to_string());
            return;
        }
        spawn_local(async move {
            let encoded = match codec::encode_files(files.clone()).await {
                Ok(encoded) => encoded,
                Err(e) => {
                    log::error!("[ADDCAR] Error converting images: {:?}", e);
                    alert(&e.to_string());
                    return;
                }
            };
            let batch: Result<Vec<_>, FormError> = files
                .iter()
                .zip(encoded)
                .map(|(file, data_url)| {
                    ObjectUrl::for_file(file).map(|preview| SelectedImage { data_url, preview })
                })
                .collect();
            let committed = match batch {
                Ok(batch) => form.try_update(|f| f.append(batch)),
                Err(e) => Some(Err(e)),
            };
            if let Some(Err(e)) = committed {
                alert(&e.to_string());
            }
        });
    };

    let submit = {
        let api = ctx.api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let payload = match form.try_update(|f| f.begin_submit()) {
                Some(Ok(payload)) => payload,
                Some(Err(FormError::Busy)) | None => return,
                Some(Err(e)) => {
                    alert(&e.to_string());
                    return;
                }
            };
            let api = api.clone();
            spawn_local(async move {
                log::info!("[ADDCAR] Submitting {:?} with {} image(s)", payload.title, payload.images.len());
                let result = api.add_car(&payload).await;
                if form.try_update(|f| f.finish_submit(result.is_ok())).is_none() {
                    return;
                }
                match result {
                    Ok(()) => {
                        set_notice.set(Some("Car added successfully!"));
                        TimeoutFuture::new(NOTICE_MS).await;
                        set_notice.try_set(None);
                    }
                    Err(e) => {
                        log::error!("[ADDCAR] {:?}", e);
                        alert(&e.to_string());
                    }
                }
            });
        }
    };

    let previews = move || {
        form.with(|f| {
            f.images()
                .iter()
                .map(|img| img.preview.as_ref().to_string())
                .collect::<Vec<_>>()
        })
        .into_iter()
        .enumerate()
        .map(|(i, url)| view! {
            <div class="preview">
                <img src=url alt=format!("Preview {}", i + 1) />
                <button type="button" class="remove-btn" on:click=move |_| form.update(|f| { f.remove_image(i); })>
                    "×"
                </button>
            </div>
        })
        .collect_view()
    };

    view! {
        <div class="add-car">
            <button class="back-btn" on:click=move |_| navigate(&AppRoute::Home.path(), Default::default())>
                "← Back"
            </button>
            <h1>"Add New Car"</h1>

            {move || notice.get().map(|msg| view! { <div class="notice">{msg}</div> })}

            <form on:submit=submit>
                <label>"Title"</label>
                <input
                    type="text"
                    required
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />

                <label>"Tags"</label>
                <input
                    type="text"
                    placeholder="luxury, sports, sedan"
                    prop:value=move || form.with(|f| f.tags.clone())
                    on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev))
                />

                <label>"Description"</label>
                <textarea
                    rows=4
                    required
                    prop:value=move || form.with(|f| f.desc.clone())
                    on:input=move |ev| form.update(|f| f.desc = event_target_value(&ev))
                ></textarea>

                <label>"Images"</label>
                <input type="file" multiple accept="image/*" on:change=select_images />
                <p class="hint">
                    {move || format!("{}/{} images selected", form.with(|f| f.image_count()), MAX_IMAGES)}
                </p>

                <div class="previews">{previews}</div>

                <button type="submit" disabled=move || form.with(|f| f.is_uploading())>
                    {move || if form.with(|f| f.is_uploading()) { "Uploading..." } else { "Add Car" }}
                </button>
            </form>
        </div>
    }
}
