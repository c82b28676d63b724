#![allow(warnings)]
//! Far Away Frontend Entry Point

mod app;
mod collate;
mod components;
mod config;
mod context;
mod prompt;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Err(err) = console_logger::init_logger(&config.logger()) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {err}").into());
    }
    if let Some(err) = config_error {
        tracing::warn!(%err, "using default config");
    }
    tracing::info!(max_quantity = config.max_quantity, locale = ?config.locale, "mounting app");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
