use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use nostr::{Keys, PublicKey};
use nostr_sdk::ToBech32;
use serde::{Deserialize, Serialize};

/// Authentication state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub pubkey: Option<String>,
    pub is_authenticated: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            pubkey: None,
            is_authenticated: false,
        }
    }
}

/// Global authentication state
pub static AUTH_STATE: GlobalSignal<AuthState> = Signal::global(AuthState::default);

/// LocalStorage slot holding the bech32 (npub) public identifier
pub const STORAGE_KEY_PUBLIC: &str = "publicKey";
/// LocalStorage slot holding the bech32 (nsec) private identifier
pub const STORAGE_KEY_PRIVATE: &str = "privateKey";

/// Initialize authentication from stored credentials
pub fn init_auth() {
    log::info!("Initializing authentication...");

    if let Ok(npub) = LocalStorage::get::<String>(STORAGE_KEY_PUBLIC) {
        let has_private_key = LocalStorage::get::<String>(STORAGE_KEY_PRIVATE).is_ok();
        log::info!("Found stored session for {}", npub);
        *AUTH_STATE.write() = AuthState {
            pubkey: Some(npub),
            is_authenticated: has_private_key,
        };
    }
}

/// Read the stored public identifier, if any
pub fn get_public_key() -> Option<String> {
    LocalStorage::get::<String>(STORAGE_KEY_PUBLIC).ok()
}

/// Read the stored private identifier, if any
/// The value is never validated; it is displayed as stored
pub fn get_private_key() -> Option<String> {
    LocalStorage::get::<String>(STORAGE_KEY_PRIVATE).ok()
}

/// Login with private key (nsec)
pub fn login_with_nsec(nsec: &str) -> std::result::Result<String, String> {
    log::info!("Logging in with private key...");

    let keys = Keys::parse(nsec).map_err(|e| format!("Invalid private key: {}", e))?;
    login_with_keys(&keys)
}

/// Login with a parsed keypair, storing both identifiers in bech32 form
pub fn login_with_keys(keys: &Keys) -> std::result::Result<String, String> {
    let npub = keys
        .public_key()
        .to_bech32()
        .map_err(|e| format!("Failed to encode public key: {}", e))?;
    let nsec = keys
        .secret_key()
        .to_bech32()
        .map_err(|e| format!("Failed to encode private key: {}", e))?;

    LocalStorage::set(STORAGE_KEY_PUBLIC, &npub).ok();
    LocalStorage::set(STORAGE_KEY_PRIVATE, &nsec).ok();

    *AUTH_STATE.write() = AuthState {
        pubkey: Some(npub.clone()),
        is_authenticated: true,
    };

    log::info!("Successfully logged in with pubkey: {}", npub);
    Ok(npub)
}

/// Login with public key only (read-only mode)
pub fn login_with_npub(npub: &str) -> std::result::Result<String, String> {
    log::info!("Logging in with public key (read-only)...");

    let pubkey = PublicKey::parse(npub).map_err(|e| format!("Invalid public key: {}", e))?;
    let npub = pubkey
        .to_bech32()
        .map_err(|e| format!("Failed to encode public key: {}", e))?;

    LocalStorage::set(STORAGE_KEY_PUBLIC, &npub).ok();

    *AUTH_STATE.write() = AuthState {
        pubkey: Some(npub.clone()),
        // Not authenticated for write operations
        is_authenticated: false,
    };

    log::info!("Loaded read-only mode with pubkey: {}", npub);
    Ok(npub)
}

/// Generate new keypair
pub fn generate_keys() -> Keys {
    let keys = Keys::generate();
    log::info!("Generated new keypair: {}", keys.public_key());
    keys
}

/// Logout: wipe ALL local storage unconditionally and reset auth state
/// Not reversible, no confirmation step
pub fn logout() {
    log::info!("Logging out...");

    *AUTH_STATE.write() = AuthState::default();
    LocalStorage::clear();
}
