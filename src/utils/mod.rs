// Utility functions
// Helper functions for common operations

pub mod format;
pub mod lookup_state;
pub mod nip19;

pub use lookup_state::LookupState;
