//! AssetBit - Common Admin
//! Owner and pause guards shared by AssetBit contracts. Callers supply their
//! own storage keys so each contract keeps its own layout.

#![no_std]
use soroban_sdk::{Address, Env, IntoVal, String, TryFromVal, Val};

/// All-zero ed25519 account. Stands in for the "no account" address.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
/// All-zero contract id.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessError {
    NotInitialized,
    Unauthorized,
    Paused,
    AlreadyPaused,
    NotPaused,
    InvalidAddress,
}

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

/// Both zero sentinels, parsed once. Neither can ever sign, so they are
/// never valid targets for ownership, authority, or verification. Build one
/// per call and reuse it across loops.
#[derive(Clone)]
pub struct ZeroAddresses {
    account: Address,
    contract: Address,
}

impl ZeroAddresses {
    pub fn new(env: &Env) -> Self {
        Self {
            account: zero_address(env),
            contract: Address::from_string(&String::from_str(env, ZERO_CONTRACT)),
        }
    }

    pub fn contains(&self, address: &Address) -> bool {
        *address == self.account || *address == self.contract
    }
}

/// One-off check. Loops should hold a `ZeroAddresses` instead.
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    ZeroAddresses::new(env).contains(address)
}

pub fn owner<K>(env: &Env, owner_key: &K) -> Result<Address, AccessError>
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    env.storage()
        .instance()
        .get(owner_key)
        .ok_or(AccessError::NotInitialized)
}

/// Authenticates `caller` and checks it against the stored owner. Runs on
/// every gated call; nothing about the result is cached.
pub fn require_owner<K>(env: &Env, owner_key: &K, caller: &Address) -> Result<(), AccessError>
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    caller.require_auth();
    let stored = owner(env, owner_key)?;
    if *caller != stored {
        return Err(AccessError::Unauthorized);
    }
    Ok(())
}

/// Single-step handover. The previous owner loses access in the same call
/// the new owner gains it. Returns the previous owner.
pub fn transfer_ownership<K>(
    env: &Env,
    owner_key: &K,
    current_owner: &Address,
    new_owner: &Address,
) -> Result<Address, AccessError>
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    require_owner(env, owner_key, current_owner)?;
    if is_zero_address(env, new_owner) {
        return Err(AccessError::InvalidAddress);
    }
    let previous = owner(env, owner_key)?;
    env.storage().instance().set(owner_key, new_owner);
    Ok(previous)
}

pub fn is_paused<K>(env: &Env, paused_key: &K) -> bool
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    env.storage().instance().get(paused_key).unwrap_or(false)
}

pub fn require_not_paused<K>(env: &Env, paused_key: &K) -> Result<(), AccessError>
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    if is_paused(env, paused_key) {
        return Err(AccessError::Paused);
    }
    Ok(())
}

/// Flips the pause flag to `paused`. Asking for the state already in force
/// is an error rather than a no-op.
pub fn set_paused<K>(env: &Env, paused_key: &K, paused: bool) -> Result<(), AccessError>
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    match (is_paused(env, paused_key), paused) {
        (true, true) => Err(AccessError::AlreadyPaused),
        (false, false) => Err(AccessError::NotPaused),
        _ => {
            env.storage().instance().set(paused_key, &paused);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test;
