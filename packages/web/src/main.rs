//! Flowt landing page
//!
//! A single-page Dioxus app: product sections plus the pre-registration form
//! backed by `flowt-registration`.
//!
//! ## Running
//!
//! Browser build:
//! ```bash
//! dx serve --features web
//! ```
//!
//! Desktop window (reads `FLOWT_REGISTRATION_*` from the environment / `.env`):
//! ```bash
//! dx serve --features desktop
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;

fn main() {
    // In the browser `dioxus::launch` installs its own logger.
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    dioxus::launch(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowt_web=info,flowt_registration=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
