use nostr_sdk::prelude::*;

/// Decode an npub-style public identifier to a raw key
///
/// Only the bech32 npub form is accepted. Anything else is rejected up
/// front so the caller never builds a query filter from an unusable
/// identifier.
pub fn decode_npub(identifier: &str) -> std::result::Result<PublicKey, String> {
    if !identifier.starts_with("npub") {
        return Err("Unrecognized public identifier format (expected npub prefix)".to_string());
    }

    PublicKey::from_bech32(identifier).map_err(|e| format!("Failed to parse npub: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    // NIP-19 test vector
    const NPUB: &str = "npub1sn0wdenkukak0d9dfczzeacvhkrgz92ak56egt7vdgzn8pv2wfqqhrjdv9";
    const HEX: &str = "84dee6e676e5bb67b4ad4e042cf70cbd8681155db535942fcc6a0533858a7240";

    #[test]
    fn test_decode_valid_npub() {
        let pubkey = decode_npub(NPUB).unwrap();
        assert_eq!(pubkey.to_hex(), HEX);
    }

    #[test]
    fn test_rejects_hex_identifier() {
        // Raw hex is a valid key encoding elsewhere, but not accepted here
        assert!(decode_npub(HEX).is_err());
    }

    #[test]
    fn test_rejects_other_bech32_prefixes() {
        assert!(decode_npub("nsec1vl029mgpspedva04g90vltkh6fvh240zqtv9k0t9af8935ke9laqsnlfe5").is_err());
        assert!(decode_npub("").is_err());
    }

    #[test]
    fn test_rejects_corrupt_npub() {
        // npub prefix but broken checksum
        assert!(decode_npub("npub1sn0wdenkukak0d9dfczzeacvhkrgz92ak56egt7vdgzn8pv2wfqqaaaaaa").is_err());
    }
}
