use leptos::*;
use web_sys::console;

mod app;
mod components;
pub mod config;
mod state;
#[cfg(test)]
mod test_support;

pub use app::App;
pub use components::error_list::{error_lines, error_list_view, ErrorLine, ErrorListView};
pub use components::error_messages::ErrorMessages;
pub use state::errors::{provide_errors, use_errors, ErrorsState};

fn init_logging() {
    let level = match config::load().and_then(|cfg| cfg.log_level()) {
        Ok(level) => level,
        Err(err) => {
            console::warn_1(&format!("{err}; falling back to info logging").into());
            log::Level::Info
        }
    };
    if let Err(err) = console_log::init_with_level(level) {
        console::error_1(&format!("logger already initialised: {err}").into());
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting Unleash frontend (wasm)");

    mount_to_body(|| view! { <App/> });
}
