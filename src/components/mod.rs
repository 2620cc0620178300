// UI Components
// This module contains all reusable UI components

pub mod key_field;
pub mod loading;

pub use key_field::KeyField;
pub use loading::ProfileSkeleton;
