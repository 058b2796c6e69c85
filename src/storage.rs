//! Storage key definitions and record access for the registry contract.

use soroban_sdk::{contracttype, Address, Env};

use crate::profile::Profile;

/// Storage keys for the registry contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Registry administrator address (instance storage).
    Admin,

    /// Maps Address to Profile struct (persistent storage).
    Profile(Address),
}

/// Time-to-live for profile data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Time-to-live for contract instance data (admin).
pub const INSTANCE_TTL_THRESHOLD: u32 = 518400;
pub const INSTANCE_TTL_EXTEND: u32 = 2592000;

/// Load the raw stored record for `identity`, whether or not it counts as registered.
pub fn load_profile(env: &Env, identity: &Address) -> Option<Profile> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Profile(identity.clone()))
}

/// Write a profile record and extend its TTL.
pub fn save_profile(env: &Env, identity: &Address, profile: &Profile) {
    let key = RegistryKey::Profile(identity.clone());
    env.storage().persistent().set(&key, profile);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

/// Keep the instance entry (and with it the admin) alive.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
