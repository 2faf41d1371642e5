//! Delete Confirm Dialog
//!
//! Modal asking the user to confirm removing a listing.

use leptos::prelude::*;

/// # Arguments
/// * `title` - Title of the listing about to be removed
/// * `on_confirm` - Runs the delete
/// * `on_cancel` - Closes the dialog without deleting
#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] title: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal confirm-dialog">
                <h2>"Delete listing?"</h2>
                <p>"Are you sure you want to delete \"" {title} "\"? This cannot be undone."</p>
                <div class="dialog-actions">
                    <button
                        class="confirm-btn"
                        disabled=move || busy.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        "Delete"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_cancel.run(());
                        }
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
