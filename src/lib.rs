//! # Soroban Member Registry
//!
//! Admin-owned registry mapping member addresses to a small profile record.
//!
//! Each profile holds:
//!
//! - A display name (a profile exists once its name is non-empty)
//! - A `Present`/`Absent` status flag
//! - Up to five unique interest tags
//!
//! A single administrator, set when the contract is deployed, can hand off
//! control or upgrade the contract.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Deploy with an administrator
//! let id = env.register(MemberRegistryContract, (&admin,));
//!
//! // Register and maintain a profile
//! client.register_new(&name, &caller);
//! client.add_tag(&caller, &String::from_str(&env, "Chess"));
//! client.mark_status(&caller, &Status::Present);
//!
//! // Query
//! let tags = client.get_tags(&caller);
//! ```

#![no_std]

mod events;
mod profile;
mod storage;
mod validation;

pub use profile::{Profile, Status};
pub use storage::RegistryKey;
pub use validation::MAX_TAGS;

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, Address, BytesN, Env, String,
    Vec,
};

use crate::events::*;
use crate::storage::{bump_instance, load_profile, save_profile};

/// Error codes for the member registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Caller is not the administrator.
    Unauthorized = 1,
    /// Caller already has a registered profile.
    AlreadyExists = 2,
    /// Name or tag is empty.
    InvalidInput = 3,
    /// Target identity has no registered profile.
    NotFound = 4,
    /// Tag list is already full.
    CapacityExceeded = 5,
    /// Tag is already in the list.
    DuplicateTag = 6,
    /// Tag is not in the list.
    TagNotFound = 7,
    /// Admin entry is missing from instance storage.
    NotInitialized = 8,
}

#[contract]
pub struct MemberRegistryContract;

#[contractimpl]
impl MemberRegistryContract {
    // ========== Initialization ==========

    /// Record the deploying creator as administrator.
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&RegistryKey::Admin, &admin);
        bump_instance(&env);
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Address {
        Self::current_admin(&env)
    }

    // ========== Registration ==========

    /// Write the caller's whole profile in one step.
    ///
    /// This is a bulk overwrite: the name may be empty and the tag list is
    /// stored as given, without the capacity or duplicate checks that
    /// `add_tag` applies.
    pub fn register(env: Env, name: String, status: Status, tags: Vec<String>, caller: Address) {
        caller.require_auth();

        let profile = Profile { name, status, tags };
        save_profile(&env, &caller, &profile);
        bump_instance(&env);

        log!(&env, "profile written", caller, profile.tags.len());
        emit_profile_created(&env, &caller, &profile.name);
    }

    /// Register the caller with a name and `Absent` status.
    ///
    /// Only the name and status are written; a tag list left behind by an
    /// earlier `register` with an empty name is kept.
    ///
    /// # Errors
    /// - `AlreadyExists` if the caller already has a non-empty name
    /// - `InvalidInput` if `name` is empty
    pub fn register_new(env: Env, name: String, caller: Address) -> Result<(), RegistryError> {
        caller.require_auth();

        let mut profile = load_profile(&env, &caller).unwrap_or_else(|| Profile::empty(&env));
        if profile.exists() {
            return Err(RegistryError::AlreadyExists);
        }
        validation::validate_name(&name)?;

        profile.name = name;
        profile.status = Status::Absent;
        save_profile(&env, &caller, &profile);
        bump_instance(&env);

        log!(&env, "profile registered", caller);
        emit_profile_created(&env, &caller, &profile.name);
        Ok(())
    }

    // ========== Profile Updates ==========

    /// Overwrite the status of a registered profile.
    pub fn mark_status(env: Env, identity: Address, status: Status) -> Result<(), RegistryError> {
        let mut profile = Self::registered_profile(&env, &identity)?;

        profile.status = status;
        save_profile(&env, &identity, &profile);

        log!(&env, "status changed", identity, status);
        emit_status_changed(&env, &identity, status);
        Ok(())
    }

    /// Append a tag to a registered profile.
    ///
    /// # Errors
    /// - `NotFound` if the profile is not registered
    /// - `InvalidInput` if `tag` is empty
    /// - `CapacityExceeded` if the profile already has [`MAX_TAGS`] tags
    /// - `DuplicateTag` if `tag` is already present
    pub fn add_tag(env: Env, identity: Address, tag: String) -> Result<(), RegistryError> {
        let mut profile = Self::registered_profile(&env, &identity)?;

        profile.add_tag(tag.clone())?;
        save_profile(&env, &identity, &profile);

        log!(&env, "tag added", identity, profile.tags.len());
        emit_tag_added(&env, &identity, &tag);
        Ok(())
    }

    /// Remove a tag from a registered profile.
    ///
    /// The last tag is moved into the freed slot, so the remaining order may
    /// change.
    pub fn remove_tag(env: Env, identity: Address, tag: String) -> Result<(), RegistryError> {
        let mut profile = Self::registered_profile(&env, &identity)?;

        profile.remove_tag(&tag)?;
        save_profile(&env, &identity, &profile);

        log!(&env, "tag removed", identity, profile.tags.len());
        emit_tag_removed(&env, &identity, &tag);
        Ok(())
    }

    // ========== Profile Queries ==========

    /// Get the name of a registered profile.
    pub fn get_name(env: Env, identity: Address) -> Result<String, RegistryError> {
        Ok(Self::registered_profile(&env, &identity)?.name)
    }

    /// Get the status of a registered profile.
    pub fn get_status(env: Env, identity: Address) -> Result<Status, RegistryError> {
        Ok(Self::registered_profile(&env, &identity)?.status)
    }

    /// Get the current tag list of a registered profile.
    pub fn get_tags(env: Env, identity: Address) -> Result<Vec<String>, RegistryError> {
        Ok(Self::registered_profile(&env, &identity)?.tags)
    }

    /// Get the raw stored record, including one whose name is empty.
    pub fn profile(env: Env, identity: Address) -> Option<Profile> {
        load_profile(&env, &identity)
    }

    /// Check whether `identity` has a registered profile.
    pub fn has_profile(env: Env, identity: Address) -> bool {
        load_profile(&env, &identity).is_some_and(|p| p.exists())
    }

    // ========== Admin Functions ==========

    /// Hand administrative control to `new_admin` (admin only).
    ///
    /// `new_admin` is not checked; passing the current admin is a no-op handoff.
    pub fn transfer_ownership(
        env: Env,
        new_admin: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        let previous = Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&RegistryKey::Admin, &new_admin);
        bump_instance(&env);

        log!(&env, "ownership transferred", previous, new_admin);
        emit_ownership_transferred(&env, &previous, &new_admin);
        Ok(())
    }

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = Self::current_admin(&env);
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // ========== Internal Helpers ==========

    fn current_admin(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&RegistryKey::Admin)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized))
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<Address, RegistryError> {
        let admin = Self::current_admin(env);
        if *caller != admin {
            return Err(RegistryError::Unauthorized);
        }

        caller.require_auth();
        Ok(admin)
    }

    fn registered_profile(env: &Env, identity: &Address) -> Result<Profile, RegistryError> {
        load_profile(env, identity)
            .filter(Profile::exists)
            .ok_or(RegistryError::NotFound)
    }
}
