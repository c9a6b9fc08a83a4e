//! MoviesWithFriends browser client.
//!
//! ARCHITECTURE
//! ============
//! `app` wires context and the route table; `pages` own route-scoped
//! orchestration; `components` render shared chrome; `state` holds the auth
//! flag and the form submission machine; `net` is the HTTP gateway to the
//! backend; `util` isolates browser storage and input validation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up console logging and panic reporting, then mount
/// the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(crate::app::App);
    log::info!("client mounted");
}
