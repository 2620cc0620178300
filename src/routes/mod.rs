use dioxus::prelude::*;

pub mod login;
pub mod profile;

use login::Login;
use profile::Profile;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Profile {},

        #[route("/login")]
        Login {},
}

#[component]
fn Layout() -> Element {
    use crate::stores::auth_store;
    use crate::utils::format::masked_preview;

    let auth = auth_store::AUTH_STATE.read();

    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",
            header {
                class: "border-b border-border",
                div {
                    class: "max-w-2xl mx-auto px-4 py-3 flex items-center justify-between",
                    Link {
                        to: Route::Profile {},
                        class: "text-lg font-bold",
                        "keyview"
                    }
                    if let Some(pubkey) = auth.pubkey.as_ref() {
                        span {
                            class: "text-sm text-muted-foreground",
                            "{masked_preview(pubkey)}"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "text-sm text-blue-500 hover:underline",
                            "Log in"
                        }
                    }
                }
            }
            main {
                class: "max-w-2xl mx-auto px-4",
                Outlet::<Route> {}
            }
        }
    }
}
