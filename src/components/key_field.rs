use dioxus::prelude::*;

use crate::utils::format::masked_preview;

/// A masked credential row with its own show/hide toggle
///
/// Each instance keeps an independent reveal flag, so the public and
/// private fields toggle separately.
#[component]
pub fn KeyField(label: &'static str, value: String) -> Element {
    let mut revealed = use_signal(|| false);

    let shown = if *revealed.read() {
        value.clone()
    } else {
        masked_preview(&value)
    };

    rsx! {
        div {
            class: "w-full mb-4 text-left",
            p {
                class: "text-sm font-semibold mb-1",
                "{label}"
            }
            div {
                class: "flex items-center justify-between gap-2",
                p {
                    class: "text-sm text-muted-foreground break-all flex-1",
                    "{shown}"
                }
                button {
                    class: "px-4 py-1 border border-border rounded-full text-sm font-semibold hover:bg-accent transition shrink-0",
                    onclick: move |_| {
                        let current = *revealed.read();
                        revealed.set(!current);
                    },
                    if *revealed.read() { "Hide" } else { "Show" }
                }
            }
        }
    }
}
