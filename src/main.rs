#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::{auth_store, nostr_client};

// Modules
mod components;
mod routes;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting keyview");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize stores on mount
    use_effect(move || {
        auth_store::init_auth();

        // Initialize Nostr client
        spawn(async move {
            match nostr_client::initialize_client().await {
                Ok(_) => {
                    log::info!("Nostr client initialized");
                }
                Err(e) => {
                    log::error!("Failed to initialize client: {}", e);
                    // Still mark as initialized to prevent infinite loading
                    *nostr_client::CLIENT_INITIALIZED.write() = true;
                }
            }
        });
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
