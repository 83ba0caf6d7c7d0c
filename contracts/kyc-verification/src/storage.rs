//! Storage layout. Instance storage holds the admin record, persistent
//! storage holds one flag per account ever verified.

use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    TokenAuthority,
    Paused,
    Verified(Address),
}

pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_verified(env: &Env, user: &Address) -> bool {
    let key = DataKey::Verified(user.clone());
    match env.storage().persistent().get::<DataKey, bool>(&key) {
        Some(verified) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            verified
        }
        None => false,
    }
}

/// Entries are flipped, never removed.
pub fn set_verified(env: &Env, user: &Address, verified: bool) {
    let key = DataKey::Verified(user.clone());
    env.storage().persistent().set(&key, &verified);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn token_authority(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::TokenAuthority)
}

pub fn set_token_authority(env: &Env, authority: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::TokenAuthority, authority);
}
