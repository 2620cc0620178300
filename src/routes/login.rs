use dioxus::prelude::*;

use crate::routes::Route;
use crate::stores::auth_store;

#[component]
pub fn Login() -> Element {
    let mut key_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let navigator = navigator();

    let mut submit = move || {
        let input = key_input.read().trim().to_string();
        if input.is_empty() {
            error.set(Some("Enter an nsec or npub to log in".to_string()));
            return;
        }

        let result = if input.starts_with("nsec") {
            auth_store::login_with_nsec(&input)
        } else {
            auth_store::login_with_npub(&input)
        };

        match result {
            Ok(_) => {
                navigator.push(Route::Profile {});
            }
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        div {
            class: "max-w-md mx-auto mt-12 p-6 border border-border rounded-lg",

            h1 {
                class: "text-2xl font-bold mb-2",
                "Log in"
            }
            p {
                class: "text-sm text-muted-foreground mb-6",
                "Paste an nsec for a full session, or an npub for read-only browsing."
            }

            input {
                class: "w-full px-3 py-2 border border-border rounded-lg bg-background mb-2",
                r#type: "password",
                placeholder: "nsec1... or npub1...",
                value: "{key_input}",
                oninput: move |e| key_input.set(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        submit();
                    }
                }
            }

            if let Some(msg) = error.read().as_ref() {
                p {
                    class: "text-sm text-red-500 mb-2",
                    "{msg}"
                }
            }

            button {
                class: "w-full py-2 bg-foreground text-background rounded-full font-semibold hover:opacity-90 transition mb-4",
                onclick: move |_| submit(),
                "Log in"
            }

            div {
                class: "flex items-center gap-2 mb-4",
                hr { class: "flex-1 border-border" }
                span {
                    class: "text-xs text-muted-foreground",
                    "or"
                }
                hr { class: "flex-1 border-border" }
            }

            button {
                class: "w-full py-2 border border-border rounded-full font-semibold hover:bg-accent transition",
                onclick: move |_| {
                    let keys = auth_store::generate_keys();
                    match auth_store::login_with_keys(&keys) {
                        Ok(_) => {
                            navigator.push(Route::Profile {});
                        }
                        Err(e) => error.set(Some(e)),
                    }
                },
                "Generate new keys"
            }
        }
    }
}
