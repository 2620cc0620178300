use dioxus::prelude::*;
use nostr_sdk::prelude::*;
use nostr_sdk::Client;
use std::sync::Arc;

/// Global Nostr client instance
pub static NOSTR_CLIENT: GlobalSignal<Option<Arc<Client>>> = Signal::global(|| None);

/// Whether the client has finished initializing
pub static CLIENT_INITIALIZED: GlobalSignal<bool> = Signal::global(|| false);

/// Relays queried for profile metadata
const DEFAULT_RELAYS: &[&str] = &[
    "wss://relay.nostromo.social",
    "wss://relay.damus.io",
    "wss://relay.primal.net",
];

/// Initialize the Nostr client and open connections to the fixed relay set
pub async fn initialize_client() -> std::result::Result<Arc<Client>, String> {
    log::info!("Initializing Nostr client...");

    let client = Arc::new(Client::builder().build());

    // Relay failures are logged and ignored; the profile fetch proceeds
    // against whichever relays did come up
    for relay_url in DEFAULT_RELAYS {
        if let Err(e) = client.add_relay(*relay_url).await {
            log::error!("Failed to add relay {}: {}", relay_url, e);
        }
    }

    // Store client and mark initialized BEFORE connecting
    // This allows the UI to start loading while relays connect in background
    *NOSTR_CLIENT.write() = Some(client.clone());
    *CLIENT_INITIALIZED.write() = true;

    // Connect to relays in background - spawn the future so it gets polled
    // to completion. In WASM, simply dropping the Future won't reliably
    // execute it
    #[cfg(target_arch = "wasm32")]
    {
        let client_for_connect = client.clone();
        wasm_bindgen_futures::spawn_local(async move {
            client_for_connect.connect().await;
            log::info!("Background relay connections completed");
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let client_for_connect = client.clone();
        tokio::spawn(async move {
            client_for_connect.connect().await;
            log::info!("Background relay connections completed (non-WASM)");
        });
    }

    log::info!("Nostr client initialized (relays connecting in background)");
    Ok(client)
}

/// Get the current client instance
pub fn get_client() -> Option<Arc<Client>> {
    NOSTR_CLIENT.read().clone()
}

/// Ensure at least one relay is connected before fetching
/// This is needed because connect() is non-blocking and spawns background tasks
/// Call this before any direct client.fetch_events() calls
pub async fn ensure_relays_ready(client: &Client) {
    // First, check if any relay is already connected
    let relays = client.relays().await;
    let any_connected = relays.values().any(|r| r.status() == RelayStatus::Connected);

    if any_connected {
        log::debug!("At least one relay is already connected, proceeding with fetch");
        return;
    }

    // No relays connected yet - call connect().await to actually establish
    // connections. In WASM, polling doesn't yield control to background
    // tasks, but connect().await drives the connection futures to completion
    log::info!("No relays connected, calling connect().await to establish connections...");
    client.connect().await;

    let relays_after = client.relays().await;
    let connected_count = relays_after
        .values()
        .filter(|r| r.status() == RelayStatus::Connected)
        .count();
    if connected_count == 0 {
        log::warn!("connect().await completed but no relays are connected - fetches may fail");
    } else {
        log::info!("connect().await completed, {} relay(s) connected", connected_count);
    }
}
