/// State machine for the profile lookup
///
/// Replaces separate loading/data/error flags with a single enum so the
/// page can only ever be in one state. The lookup starts in Loading on
/// mount and settles into exactly one terminal state; there is no re-fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState<T> {
    /// Fetch in flight (initial state on mount)
    Loading,

    /// Lookup resolved to a record
    Found(T),

    /// No stored identifier, or no matching event on any relay
    Missing,

    /// The identifier or the event content could not be used
    Failed(String),
}

impl<T> LookupState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, LookupState::Missing)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LookupState::Failed(_))
    }

    /// Returns the record if found, None otherwise
    pub fn found(&self) -> Option<&T> {
        match self {
            LookupState::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the error message if the lookup failed, None otherwise
    pub fn error(&self) -> Option<&str> {
        match self {
            LookupState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for LookupState<T> {
    fn default() -> Self {
        LookupState::Loading
    }
}

/// A lookup result maps directly onto the terminal states:
/// Ok(Some) is Found, Ok(None) is Missing, Err is Failed
impl<T, E: std::fmt::Display> From<Result<Option<T>, E>> for LookupState<T> {
    fn from(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(record)) => LookupState::Found(record),
            Ok(None) => LookupState::Missing,
            Err(err) => LookupState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let state: LookupState<i32> = LookupState::default();
        assert!(state.is_loading());

        let state = LookupState::Found(42);
        assert_eq!(state.found(), Some(&42));
        assert!(!state.is_missing());

        let state: LookupState<i32> = LookupState::Missing;
        assert!(state.is_missing());
        assert!(state.found().is_none());

        let state: LookupState<i32> = LookupState::Failed("bad identifier".to_string());
        assert!(state.is_failed());
        assert_eq!(state.error(), Some("bad identifier"));
    }

    #[test]
    fn test_from_lookup_result() {
        let result: Result<Option<i32>, String> = Ok(Some(7));
        let state: LookupState<i32> = result.into();
        assert_eq!(state.found(), Some(&7));

        let result: Result<Option<i32>, String> = Ok(None);
        let state: LookupState<i32> = result.into();
        assert!(state.is_missing());

        let result: Result<Option<i32>, String> = Err("no filter".to_string());
        let state: LookupState<i32> = result.into();
        assert_eq!(state.error(), Some("no filter"));
    }
}
