#![cfg(test)]
use super::*;
use soroban_sdk::{contract, contractimpl, contracttype, testutils::Address as _, Address, Env};

#[contracttype]
#[derive(Clone)]
enum Key {
    Owner,
    Paused,
}

fn code(result: Result<(), AccessError>) -> u32 {
    match result {
        Ok(()) => 0,
        Err(AccessError::NotInitialized) => 1,
        Err(AccessError::Unauthorized) => 2,
        Err(AccessError::Paused) => 3,
        Err(AccessError::AlreadyPaused) => 4,
        Err(AccessError::NotPaused) => 5,
        Err(AccessError::InvalidAddress) => 6,
    }
}

#[contract]
pub struct Harness;

#[contractimpl]
impl Harness {
    pub fn set_owner(env: Env, owner: Address) {
        env.storage().instance().set(&Key::Owner, &owner);
    }

    pub fn owned(env: Env, caller: Address) -> u32 {
        code(require_owner(&env, &Key::Owner, &caller))
    }

    pub fn handover(env: Env, caller: Address, new_owner: Address) -> u32 {
        code(transfer_ownership(&env, &Key::Owner, &caller, &new_owner).map(|_| ()))
    }

    pub fn current(env: Env) -> Option<Address> {
        owner(&env, &Key::Owner).ok()
    }

    pub fn toggle(env: Env, paused: bool) -> u32 {
        code(set_paused(&env, &Key::Paused, paused))
    }

    pub fn open(env: Env) -> u32 {
        code(require_not_paused(&env, &Key::Paused))
    }

    pub fn is_zero(env: Env, address: Address) -> bool {
        is_zero_address(&env, &address)
    }

    pub fn count_zero(env: Env, addresses: soroban_sdk::Vec<Address>) -> u32 {
        let zero = ZeroAddresses::new(&env);
        addresses.iter().filter(|a| zero.contains(a)).count() as u32
    }
}

fn setup(env: &Env) -> (HarnessClient<'_>, Address) {
    let owner = Address::generate(env);
    let id = env.register(Harness, ());
    let c = HarnessClient::new(env, &id);
    c.set_owner(&owner);
    (c, owner)
}

#[test]
fn test_require_owner() {
    let env = Env::default();
    env.mock_all_auths();
    let (c, owner) = setup(&env);
    assert_eq!(c.owned(&owner), 0);
    assert_eq!(c.owned(&Address::generate(&env)), 2);
}

#[test]
fn test_require_owner_uninitialized() {
    let env = Env::default();
    env.mock_all_auths();
    let id = env.register(Harness, ());
    let c = HarnessClient::new(&env, &id);
    assert_eq!(c.owned(&Address::generate(&env)), 1);
    assert!(c.current().is_none());
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn test_require_owner_without_auth() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let id = env.register(Harness, ());
    let c = HarnessClient::new(&env, &id);
    c.set_owner(&owner);
    c.owned(&owner);
}

#[test]
fn test_transfer_ownership() {
    let env = Env::default();
    env.mock_all_auths();
    let (c, owner) = setup(&env);
    let next = Address::generate(&env);
    assert_eq!(c.handover(&next, &next), 2);
    assert_eq!(c.handover(&owner, &zero_address(&env)), 6);
    assert_eq!(c.handover(&owner, &next), 0);
    assert_eq!(c.current(), Some(next.clone()));
    assert_eq!(c.owned(&owner), 2);
    assert_eq!(c.owned(&next), 0);
}

#[test]
fn test_pause_toggle() {
    let env = Env::default();
    env.mock_all_auths();
    let (c, _) = setup(&env);
    assert_eq!(c.open(), 0);
    assert_eq!(c.toggle(&false), 5);
    assert_eq!(c.toggle(&true), 0);
    assert_eq!(c.open(), 3);
    assert_eq!(c.toggle(&true), 4);
    assert_eq!(c.toggle(&false), 0);
    assert_eq!(c.open(), 0);
}

#[test]
fn test_zero_address() {
    let env = Env::default();
    let (c, owner) = setup(&env);
    assert!(c.is_zero(&zero_address(&env)));
    assert!(c.is_zero(&Address::from_string(&String::from_str(&env, ZERO_CONTRACT))));
    assert!(!c.is_zero(&owner));
}

#[test]
fn test_zero_addresses_reused_across_entries() {
    let env = Env::default();
    let (c, owner) = setup(&env);
    let zero_contract = Address::from_string(&String::from_str(&env, ZERO_CONTRACT));
    let entries = soroban_sdk::vec![
        &env,
        zero_address(&env),
        owner.clone(),
        zero_contract,
        Address::generate(&env),
        zero_address(&env),
    ];
    assert_eq!(c.count_zero(&entries), 3);
}
