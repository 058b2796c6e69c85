//! Input rules for profile names and tags.
//!
//! - Names and tags must be non-empty.
//! - A tag list holds at most [`MAX_TAGS`] entries when grown through `add_tag`.
//! - Tags compare by exact bytes, so `"Chess"` and `"chess"` are distinct.

use soroban_sdk::{String, Vec};

use crate::RegistryError;

/// Maximum number of tags a profile may hold.
pub const MAX_TAGS: u32 = 5;

/// Validate a profile name.
pub fn validate_name(name: &String) -> Result<(), RegistryError> {
    if is_empty_text(name) {
        return Err(RegistryError::InvalidInput);
    }
    Ok(())
}

/// Validate a tag against the list it is about to join.
///
/// # Errors
/// - `InvalidInput` if the tag is empty
/// - `CapacityExceeded` if the list already holds [`MAX_TAGS`] or more
/// - `DuplicateTag` if an identical tag is already present
pub fn validate_new_tag(tags: &Vec<String>, tag: &String) -> Result<(), RegistryError> {
    if is_empty_text(tag) {
        return Err(RegistryError::InvalidInput);
    }
    if tags.len() >= MAX_TAGS {
        return Err(RegistryError::CapacityExceeded);
    }
    if tags.contains(tag) {
        return Err(RegistryError::DuplicateTag);
    }
    Ok(())
}

#[inline]
pub(crate) fn is_empty_text(text: &String) -> bool {
    text.len() == 0
}
