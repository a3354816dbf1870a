//! kb-search web front end
//!
//! Search-as-you-type box for a knowledge-base documentation site.

mod app;
mod components;
mod error;
mod search_config;
mod services;
mod state;

fn main() {
    init_logging();

    tracing::info!("Starting kb-search...");

    dioxus::launch(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "kb_search=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    // Browser console
    dioxus::logger::init(tracing::Level::DEBUG).ok();
}
