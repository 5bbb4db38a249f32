//! Harvest Calendar Desktop: Dioxus-powered crop calendar browser.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod calendar_view;
mod form;
mod notifications;
mod search;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage: built before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("harvest_core=info".parse().unwrap())
                .add_directive("harvest_api=info".parse().unwrap())
                .add_directive("harvest_desktop=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load configuration before Dioxus launches; store in Mutex, NOT in the signal
    let initial_state = AppState::from_cwd();
    *INITIAL_STATE.lock().unwrap() = Some(initial_state);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 250, 247, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Harvest Calendar")
                            .with_inner_size(LogicalSize::new(1100.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 520.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
