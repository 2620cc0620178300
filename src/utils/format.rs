/// Shorten a key for masked display: first 10 characters plus ellipsis
///
/// Values of 10 characters or fewer are already fully visible, so they are
/// returned unchanged rather than padded with a misleading ellipsis. Real
/// bech32 identifiers are always longer than this cutoff.
pub fn masked_preview(value: &str) -> String {
    if value.chars().count() <= 10 {
        return value.to_string();
    }
    let prefix: String = value.chars().take(10).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_preview_truncates_long_values() {
        let npub = "npub1sn0wdenkukak0d9dfczzeacvhkrgz92ak56egt7vdgzn8pv2wfqqhrjdv9";
        assert_eq!(masked_preview(npub), "npub1sn0wd...");
    }

    #[test]
    fn test_masked_preview_keeps_short_values() {
        assert_eq!(masked_preview("short"), "short");
        assert_eq!(masked_preview("exactly10!"), "exactly10!");
        // The ellipsis only appears once there is something to hide
        assert_eq!(masked_preview("elevenchars"), "elevenchar...");
    }

    #[test]
    fn test_masked_preview_is_stable() {
        // Toggling show/hide re-derives the preview; it must not drift
        let full = "nsec1vl029mgpspedva04g90vltkh6fvh240zqtv9k0t9af8935ke9laqsnlfe5";
        let once = masked_preview(full);
        assert_eq!(masked_preview(full), once);
        assert_eq!(once, "nsec1vl029...");
    }
}
