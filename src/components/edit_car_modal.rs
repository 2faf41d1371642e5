//! Edit Car Modal
//!
//! Floating form for updating a listing. Replacement images are fully
//! encoded before the update is handed to `on_save`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::codec;
use crate::error::FormError;
use crate::forms::EditForm;
use crate::models::{CarUpdate, Image};

#[component]
pub fn EditCarModal(
    form: EditForm,
    /// Receives the record id and the finished update; an error keeps the
    /// modal open and is shown inline
    on_save: Callback<(String, CarUpdate), Result<(), FormError>>,
    on_cancel: Callback<()>,
    /// True while the parent has a write in flight
    busy: Signal<bool>,
) -> impl IntoView {
    let current_src = form.current_image.as_ref().and_then(Image::src);
    let draft = RwSignal::new(form);
    let files = RwSignal::new_local(Vec::<File>::new());
    let (encoding, set_encoding) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if encoding.get_untracked() || busy.get_untracked() {
            return;
        }
        let form = draft.get_untracked();
        if let Err(e) = form.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        let id = form.id.clone();
        let selected = files.get_untracked();
        set_error.set(None);
        set_encoding.set(true);
        spawn_local(async move {
            let result = match codec::encode_files(selected).await {
                Ok(images) => form.into_update(images),
                Err(e) => Err(e),
            };
            // modal closed while encoding
            if set_encoding.try_set(false).is_some() {
                return;
            }
            if let Err(e) = result.and_then(|update| on_save.run((id, update))) {
                log::warn!("[EDIT] {:?}", e);
                set_error.set(Some(e.to_string()));
            }
        });
    };

    let pick_files = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        files.set(codec::files_from_list(input.files()));
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal edit-form">
                <button class="close-btn" on:click=move |_| on_cancel.run(())>"Close"</button>
                <h2>"Update Car"</h2>
                <form on:submit=save>
                    <label>"Title"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|f| f.title.clone())
                        on:input=move |ev| draft.update(|f| f.title = event_target_value(&ev))
                    />

                    <label>"Description"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|f| f.desc.clone())
                        on:input=move |ev| draft.update(|f| f.desc = event_target_value(&ev))
                    />

                    <label>"Tags"</label>
                    <input
                        type="text"
                        placeholder="luxury, sports, sedan"
                        prop:value=move || draft.with(|f| f.tags.clone())
                        on:input=move |ev| draft.update(|f| f.tags = event_target_value(&ev))
                    />

                    <label>"Images"</label>
                    {current_src.map(|src| view! { <img class="current-image" src=src alt="Current" /> })}
                    <input type="file" multiple accept="image/*" on:change=pick_files />
                    <p class="hint">
                        {move || match files.with(|f| f.len()) {
                            0 => "Keeping current images".to_string(),
                            n => format!("{} replacement image(s) selected", n),
                        }}
                    </p>

                    {move || error.get().map(|e| view! { <p class="error">{e}</p> })}

                    <button type="submit" disabled=move || encoding.get() || busy.get()>
                        {move || if encoding.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
