//! SeeCar Frontend Entry Point

mod api;
mod app;
mod carousel;
mod codec;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod listing;
mod models;
mod routes;
mod session;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
