use dioxus::prelude::*;

/// A skeleton placeholder shown while the profile lookup is in flight
/// Mimics the profile card layout for a smoother perceived loading experience
#[component]
pub fn ProfileSkeleton() -> Element {
    rsx! {
        div {
            class: "animate-pulse max-w-md mx-auto mt-8 p-6 border border-border rounded-lg",
            role: "status",
            aria_live: "polite",
            aria_busy: "true",

            // Screen reader announcement
            span {
                class: "sr-only",
                "Loading profile..."
            }

            // Avatar placeholder
            div {
                class: "w-28 h-28 rounded-full bg-muted mx-auto mb-4"
            }

            // Name and bio placeholders
            div {
                class: "h-6 w-40 bg-muted rounded mx-auto mb-3"
            }
            div {
                class: "h-4 w-64 bg-muted rounded mx-auto mb-8"
            }

            // Key field placeholders
            for _ in 0..2 {
                div {
                    class: "mb-4",
                    div {
                        class: "h-4 w-24 bg-muted rounded mb-2"
                    }
                    div {
                        class: "h-8 bg-muted rounded w-full"
                    }
                }
            }
        }
    }
}
