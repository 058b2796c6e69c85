//! Event emission helpers for the registry contract.

use soroban_sdk::{Address, Env, String, Symbol};

use crate::profile::Status;

/// Emit an event when a profile is written through either registration entrypoint.
pub fn emit_profile_created(env: &Env, identity: &Address, name: &String) {
    let topics = (Symbol::new(env, "profile_created"),);
    env.events().publish(topics, (identity.clone(), name.clone()));
}

/// Emit an event when a profile's status is overwritten.
pub fn emit_status_changed(env: &Env, identity: &Address, status: Status) {
    let topics = (Symbol::new(env, "status_changed"),);
    env.events().publish(topics, (identity.clone(), status));
}

/// Emit an event when a tag is appended.
pub fn emit_tag_added(env: &Env, identity: &Address, tag: &String) {
    let topics = (Symbol::new(env, "tag_added"),);
    env.events().publish(topics, (identity.clone(), tag.clone()));
}

/// Emit an event when a tag is removed.
pub fn emit_tag_removed(env: &Env, identity: &Address, tag: &String) {
    let topics = (Symbol::new(env, "tag_removed"),);
    env.events().publish(topics, (identity.clone(), tag.clone()));
}

/// Emit an event when the administrator hands off control.
pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_admin: &Address) {
    let topics = (Symbol::new(env, "ownership_transferred"),);
    env.events()
        .publish(topics, (previous.clone(), new_admin.clone()));
}
