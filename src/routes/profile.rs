use dioxus::prelude::*;

use crate::components::{KeyField, ProfileSkeleton};
use crate::routes::Route;
use crate::stores::profiles::{self, UserProfile};
use crate::stores::{auth_store, nostr_client};
use crate::utils::LookupState;

#[component]
pub fn Profile() -> Element {
    let mut lookup = use_signal(LookupState::<UserProfile>::default);
    let navigator = navigator();

    // Fetch profile metadata once the client is up
    use_effect(move || {
        let client_initialized = *nostr_client::CLIENT_INITIALIZED.read();
        if !client_initialized {
            return;
        }

        let stored_key = match auth_store::get_public_key() {
            Some(key) => key,
            None => {
                log::error!("No public key found in local storage");
                lookup.set(LookupState::Missing);
                return;
            }
        };

        // The task is owned by this scope: if the page unmounts before the
        // fetch resolves, it is dropped and never touches defunct state
        spawn(async move {
            let state: LookupState<UserProfile> =
                profiles::fetch_user_profile(&stored_key).await.into();
            if let Some(profile) = state.found() {
                log::info!("Loaded profile for {}", profile.display_name());
            }
            lookup.set(state);
        });
    });

    let state = lookup.read().clone();

    match state {
        LookupState::Loading => rsx! {
            ProfileSkeleton {}
        },
        LookupState::Missing => rsx! {
            p {
                class: "text-center mt-12 text-lg font-semibold",
                "User profile not found."
            }
        },
        LookupState::Failed(msg) => rsx! {
            p {
                class: "text-center mt-12 text-lg font-semibold text-red-500",
                "Failed to load profile: {msg}"
            }
        },
        LookupState::Found(user) => {
            let display_name = user.display_name();
            let about = user.about_or_placeholder();
            let initial = user.avatar_initial();

            rsx! {
                div {
                    class: "max-w-md mx-auto mt-8 p-6 border border-border rounded-lg flex flex-col items-center text-center",

                    if let Some(picture) = user.picture.as_ref() {
                        img {
                            class: "w-28 h-28 rounded-full object-cover border-4 border-background mb-4",
                            src: "{picture}",
                            alt: "Avatar"
                        }
                    } else {
                        div {
                            class: "w-28 h-28 rounded-full bg-blue-600 flex items-center justify-center text-white text-4xl font-bold mb-4",
                            "{initial}"
                        }
                    }

                    h1 {
                        class: "text-2xl font-bold mb-1",
                        "{display_name}"
                    }
                    p {
                        class: "text-muted-foreground whitespace-pre-wrap mb-6",
                        "{about}"
                    }

                    hr { class: "w-full border-border mb-6" }

                    KeyField {
                        label: "Public Key",
                        value: user.public_key.clone()
                    }
                    if let Some(private_key) = user.private_key.as_ref() {
                        KeyField {
                            label: "Private Key",
                            value: private_key.clone()
                        }
                    }

                    hr { class: "w-full border-border my-6" }

                    button {
                        class: "w-full py-3 bg-foreground text-background rounded-full font-semibold hover:opacity-90 transition",
                        onclick: move |_| {
                            auth_store::logout();
                            navigator.push(Route::Login {});
                        },
                        "Log out"
                    }
                }
            }
        }
    }
}
