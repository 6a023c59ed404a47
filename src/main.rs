//! Todo App Frontend Entry Point

mod models;
mod todos;
mod config;
mod store;
mod style;
mod logging;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
