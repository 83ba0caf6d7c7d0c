//! AssetBit - KYC Verification (Soroban)
//! Owner-managed registry of KYC-verified accounts. Commodity token
//! authorities consult it before letting tokens move.

#![no_std]
use assetbit_common_admin::{self as admin, is_zero_address, ZeroAddresses};
use soroban_sdk::{
    contract, contractclient, contractimpl, contractmeta, contracttype, log, Address, BytesN, Env,
    Vec,
};

mod errors;
mod events;
mod storage;

pub use errors::KycError;
use storage::DataKey;

contractmeta!(key = "Description", val = "AssetBit KYC Verification");

/// Bumped with every logic change shipped through `upgrade`.
pub const CONTRACT_VERSION: u32 = 1;
pub const MAX_BATCH_SIZE: u32 = 100;

/// Per-entry result of `verify_batch`, reported in input order.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BatchOutcome {
    Applied,
    SkippedZero,
    SkippedAlreadyVerified,
}

/// Read surface for peer contracts (token authorities, asset registry).
#[contractclient(name = "KycCheckClient")]
pub trait KycCheck {
    fn is_kyc_verified(env: Env, user: Address) -> bool;
    fn token_authority(env: Env) -> Address;
}

/// Decides what `verify_batch` does with one entry. Reads state only, so an
/// earlier entry in the same batch is already visible here.
pub(crate) fn classify(env: &Env, zero: &ZeroAddresses, user: &Address) -> BatchOutcome {
    if zero.contains(user) {
        BatchOutcome::SkippedZero
    } else if storage::is_verified(env, user) {
        BatchOutcome::SkippedAlreadyVerified
    } else {
        BatchOutcome::Applied
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), KycError> {
    admin::require_owner(env, &DataKey::Owner, caller)?;
    Ok(())
}

// Owner first, then pause: a stranger learns about permissions before
// learning the contract is halted.
fn require_mutable(env: &Env, caller: &Address) -> Result<(), KycError> {
    require_owner(env, caller)?;
    admin::require_not_paused(env, &DataKey::Paused)?;
    Ok(())
}

#[contract]
pub struct KycVerificationContract;

#[contractimpl]
impl KycVerificationContract {
    pub fn initialize(env: Env, owner: Address, token_authority: Address) -> Result<(), KycError> {
        storage::extend_instance(&env);
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(KycError::AlreadyInitialized);
        }
        owner.require_auth();
        let zero = ZeroAddresses::new(&env);
        if zero.contains(&owner) || zero.contains(&token_authority) {
            return Err(KycError::InvalidAddress);
        }

        env.storage().instance().set(&DataKey::Owner, &owner);
        storage::set_token_authority(&env, &token_authority);
        env.storage().instance().set(&DataKey::Paused, &false);

        events::initialized(&env, &owner, &token_authority);
        log!(&env, "kyc registry initialized", owner, token_authority);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, KycError> {
        storage::extend_instance(&env);
        Ok(admin::owner(&env, &DataKey::Owner)?)
    }

    pub fn token_authority(env: Env) -> Result<Address, KycError> {
        storage::extend_instance(&env);
        storage::token_authority(&env).ok_or(KycError::NotInitialized)
    }

    pub fn paused(env: Env) -> bool {
        storage::extend_instance(&env);
        admin::is_paused(&env, &DataKey::Paused)
    }

    pub fn version(_env: Env) -> u32 {
        CONTRACT_VERSION
    }

    /// Open to anyone, never gated by pause.
    pub fn is_kyc_verified(env: Env, user: Address) -> bool {
        storage::extend_instance(&env);
        storage::is_verified(&env, &user)
    }

    /// Marks `user` verified.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - `caller` is not the owner.
    /// * `ContractPaused` - the registry is paused.
    /// * `InvalidAddress` - `user` is the zero address.
    /// * `AlreadyVerified` - `user` is already verified.
    ///
    /// # Events
    ///
    /// * topics - `["kyc", "verified", user: Address]`
    /// * data - `actor: Address`
    pub fn verify_user(env: Env, caller: Address, user: Address) -> Result<(), KycError> {
        storage::extend_instance(&env);
        require_mutable(&env, &caller)?;
        if is_zero_address(&env, &user) {
            return Err(KycError::InvalidAddress);
        }
        if storage::is_verified(&env, &user) {
            return Err(KycError::AlreadyVerified);
        }

        storage::set_verified(&env, &user, true);
        events::verified(&env, &user, &caller);
        Ok(())
    }

    /// Verifies every eligible entry of `users` in order. Zero addresses and
    /// accounts already verified (including earlier duplicates in the same
    /// batch) are skipped without an event. Only the owner and pause guards,
    /// or an oversized batch, fail the whole call.
    pub fn verify_batch(
        env: Env,
        caller: Address,
        users: Vec<Address>,
    ) -> Result<Vec<BatchOutcome>, KycError> {
        storage::extend_instance(&env);
        require_mutable(&env, &caller)?;
        if users.len() > MAX_BATCH_SIZE {
            return Err(KycError::BatchTooLarge);
        }

        let zero = ZeroAddresses::new(&env);
        let mut outcomes = Vec::new(&env);
        let mut applied: u32 = 0;
        for user in users.iter() {
            let outcome = classify(&env, &zero, &user);
            if outcome == BatchOutcome::Applied {
                storage::set_verified(&env, &user, true);
                events::verified(&env, &user, &caller);
                applied += 1;
            }
            outcomes.push_back(outcome);
        }

        log!(&env, "kyc batch applied", applied, users.len());
        Ok(outcomes)
    }

    /// Clears `user`'s verification. The zero address is never verified, so
    /// it falls through to `NotVerified`.
    ///
    /// # Events
    ///
    /// * topics - `["kyc", "revoked", user: Address]`
    /// * data - `actor: Address`
    pub fn revoke_verification(env: Env, caller: Address, user: Address) -> Result<(), KycError> {
        storage::extend_instance(&env);
        require_mutable(&env, &caller)?;
        if !storage::is_verified(&env, &user) {
            return Err(KycError::NotVerified);
        }

        storage::set_verified(&env, &user, false);
        events::revoked(&env, &user, &caller);
        Ok(())
    }

    /// Administrative, so it stays available while paused.
    pub fn set_token_authority(
        env: Env,
        caller: Address,
        new_authority: Address,
    ) -> Result<(), KycError> {
        storage::extend_instance(&env);
        require_owner(&env, &caller)?;
        if is_zero_address(&env, &new_authority) {
            return Err(KycError::InvalidAddress);
        }

        let old = storage::token_authority(&env).ok_or(KycError::NotInitialized)?;
        storage::set_token_authority(&env, &new_authority);
        events::authority_updated(&env, &old, &new_authority);
        log!(&env, "token authority updated", old, new_authority);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), KycError> {
        storage::extend_instance(&env);
        require_owner(&env, &caller)?;
        admin::set_paused(&env, &DataKey::Paused, true)?;
        events::paused(&env, &caller);
        log!(&env, "kyc registry paused", caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), KycError> {
        storage::extend_instance(&env);
        require_owner(&env, &caller)?;
        admin::set_paused(&env, &DataKey::Paused, false)?;
        events::unpaused(&env, &caller);
        log!(&env, "kyc registry unpaused", caller);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), KycError> {
        storage::extend_instance(&env);
        let previous = admin::transfer_ownership(&env, &DataKey::Owner, &caller, &new_owner)?;
        events::ownership_transferred(&env, &previous, &new_owner);
        log!(&env, "ownership transferred", previous, new_owner);
        Ok(())
    }

    /// Swaps the contract's executable for `new_wasm_hash`. Storage and the
    /// contract address are untouched. The owner check runs on every call and
    /// ignores the pause flag.
    ///
    /// # Events
    ///
    /// * topics - `["kyc", "upgraded"]`
    /// * data - `[actor: Address, wasm_hash: BytesN<32>]`
    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), KycError> {
        storage::extend_instance(&env);
        require_owner(&env, &caller)?;

        events::upgraded(&env, &caller, &new_wasm_hash);
        log!(&env, "upgrading kyc registry", CONTRACT_VERSION, new_wasm_hash);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
