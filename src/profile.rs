//! Profile struct and related types.

use soroban_sdk::{contracttype, Env, String, Vec};

use crate::validation::{self, is_empty_text};
use crate::RegistryError;

/// Attendance-like flag carried by every profile.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Status {
    /// Default for new registrations.
    Absent = 0,
    Present = 1,
}

/// Per-identity registry record.
///
/// A record counts as registered only while its name is non-empty; see
/// [`Profile::exists`]. The bulk `register` entrypoint may store a record
/// with an empty name, which stays invisible to every checked read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Display name. Empty means "not registered".
    pub name: String,

    /// Current status flag.
    pub status: Status,

    /// Interest tags, insertion-ordered until a removal swaps the last one in.
    pub tags: Vec<String>,
}

impl Profile {
    /// Create a record with the given name, `Absent` status and no tags.
    pub fn new(env: &Env, name: String) -> Self {
        Self {
            name,
            status: Status::Absent,
            tags: Vec::new(env),
        }
    }

    /// The zero record an identity has before anything is written for it.
    pub fn empty(env: &Env) -> Self {
        Self::new(env, String::from_str(env, ""))
    }

    /// Check if this profile is registered (has a non-empty name).
    pub fn exists(&self) -> bool {
        !is_empty_text(&self.name)
    }

    /// Append a tag after checking emptiness, capacity and uniqueness.
    pub fn add_tag(&mut self, tag: String) -> Result<(), RegistryError> {
        validation::validate_new_tag(&self.tags, &tag)?;
        self.tags.push_back(tag);
        Ok(())
    }

    /// Remove a tag by overwriting its slot with the last entry and
    /// truncating. The order of the remaining tags is not preserved.
    pub fn remove_tag(&mut self, tag: &String) -> Result<(), RegistryError> {
        let index = self
            .tags
            .first_index_of(tag)
            .ok_or(RegistryError::TagNotFound)?;
        let last = self.tags.len() - 1;
        if index != last {
            let moved = self.tags.get_unchecked(last);
            self.tags.set(index, moved);
        }
        self.tags.pop_back();
        Ok(())
    }
}
