use nostr_sdk::{Filter, Kind};
use std::time::Duration;

use crate::stores::{auth_store, nostr_client};
use crate::utils::format::masked_preview;
use crate::utils::nip19;

/// User profile assembled from a kind 0 metadata event
///
/// The private key never comes from the network; it is read from local
/// storage alongside the fetched fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub name: Option<String>,
    pub public_key: String,
    pub private_key: Option<String>,
    pub about: Option<String>,
    pub picture: Option<String>,
}

impl UserProfile {
    /// Display name, falling back to a shortened public identifier
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            if !name.trim().is_empty() {
                return name.clone();
            }
        }
        masked_preview(&self.public_key)
    }

    /// Biography text, with a placeholder when absent
    pub fn about_or_placeholder(&self) -> String {
        match &self.about {
            Some(about) if !about.trim().is_empty() => about.clone(),
            _ => "No description available.".to_string(),
        }
    }

    /// Letter shown in the avatar placeholder when no picture is set
    pub fn avatar_initial(&self) -> String {
        self.name
            .as_deref()
            .and_then(|name| name.trim().chars().next())
            .unwrap_or('U')
            .to_uppercase()
            .to_string()
    }
}

/// Fields of interest inside a kind 0 event's JSON content
struct ProfileFields {
    name: Option<String>,
    about: Option<String>,
    picture: Option<String>,
}

/// Parse the content of a kind 0 event
/// Missing or non-string fields become None; malformed JSON is an error
fn parse_profile_content(content: &str) -> std::result::Result<ProfileFields, String> {
    let metadata: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| format!("Failed to parse metadata JSON: {}", e))?;

    Ok(ProfileFields {
        name: metadata.get("name").and_then(|v| v.as_str()).map(String::from),
        about: metadata.get("about").and_then(|v| v.as_str()).map(String::from),
        picture: metadata.get("picture").and_then(|v| v.as_str()).map(String::from),
    })
}

/// Resolve the stored public identifier to a UserProfile
///
/// Issues a single "latest metadata event by this author" query against the
/// fixed relay set. Returns Ok(None) when no relay has a matching event.
pub async fn fetch_user_profile(
    stored_key: &str,
) -> std::result::Result<Option<UserProfile>, String> {
    let public_key = nip19::decode_npub(stored_key)?;

    let client = nostr_client::get_client().ok_or("Client not initialized")?;
    nostr_client::ensure_relays_ready(&client).await;

    let filter = Filter::new().kind(Kind::Metadata).author(public_key).limit(1);

    let events = client
        .fetch_events(filter, Duration::from_secs(10))
        .await
        .map_err(|e| format!("Failed to fetch profile event: {}", e))?;

    let event = match events.into_iter().next() {
        Some(event) => event,
        None => {
            log::info!("No metadata event found for {}", stored_key);
            return Ok(None);
        }
    };

    let fields = parse_profile_content(&event.content)?;

    Ok(Some(UserProfile {
        name: fields.name,
        public_key: stored_key.to_string(),
        private_key: auth_store::get_private_key(),
        about: fields.about,
        picture: fields.picture,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_fields() {
        let content = r#"{"name":"alice","about":"hello nostr","picture":"https://example.com/a.png","nip05":"alice@example.com"}"#;
        let fields = parse_profile_content(content).unwrap();
        assert_eq!(fields.name.as_deref(), Some("alice"));
        assert_eq!(fields.about.as_deref(), Some("hello nostr"));
        assert_eq!(fields.picture.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let fields = parse_profile_content("{}").unwrap();
        assert!(fields.name.is_none());
        assert!(fields.about.is_none());
        assert!(fields.picture.is_none());
    }

    #[test]
    fn test_parse_ignores_non_string_fields() {
        let fields = parse_profile_content(r#"{"name":42,"about":null,"picture":["x"]}"#).unwrap();
        assert!(fields.name.is_none());
        assert!(fields.about.is_none());
        assert!(fields.picture.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_content() {
        assert!(parse_profile_content("not json at all").is_err());
        assert!(parse_profile_content("").is_err());
    }

    fn profile_with(name: Option<&str>, about: Option<&str>) -> UserProfile {
        UserProfile {
            name: name.map(String::from),
            public_key: "npub1sn0wdenkukak0d9dfczzeacvhkrgz92ak56egt7vdgzn8pv2wfqqhrjdv9"
                .to_string(),
            private_key: None,
            about: about.map(String::from),
            picture: None,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_preview() {
        assert_eq!(profile_with(Some("alice"), None).display_name(), "alice");
        assert_eq!(profile_with(None, None).display_name(), "npub1sn0wd...");
        assert_eq!(profile_with(Some("   "), None).display_name(), "npub1sn0wd...");
    }

    #[test]
    fn test_about_placeholder() {
        assert_eq!(
            profile_with(None, Some("bio")).about_or_placeholder(),
            "bio"
        );
        assert_eq!(
            profile_with(None, None).about_or_placeholder(),
            "No description available."
        );
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(profile_with(Some("alice"), None).avatar_initial(), "A");
        assert_eq!(profile_with(None, None).avatar_initial(), "U");
    }
}
