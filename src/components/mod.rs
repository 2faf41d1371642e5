//! UI Components
//!
//! Route views and the reusable Leptos components they are built from.

mod about_view;
mod add_car_view;
mod car_card;
mod car_detail_modal;
mod car_grid;
mod delete_confirm_dialog;
mod edit_car_modal;
mod home_view;
mod login_view;
mod nav_shell;
mod protected;
mod search_view;

pub use about_view::AboutView;
pub use add_car_view::AddCarView;
pub use car_card::{CarCard, SampleCard, TagChips};
pub use car_detail_modal::CarDetailModal;
pub use car_grid::CarGrid;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use edit_car_modal::EditCarModal;
pub use home_view::HomeView;
pub use login_view::LoginView;
pub use nav_shell::NavShell;
pub use protected::Protected;
pub use search_view::SearchView;

/// Blocking browser alert, used for rejected input and failed submits
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
