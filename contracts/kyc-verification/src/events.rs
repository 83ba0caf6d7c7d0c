use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub fn initialized(env: &Env, owner: &Address, token_authority: &Address) {
    env.events().publish(
        (symbol_short!("kyc"), symbol_short!("init")),
        (owner.clone(), token_authority.clone()),
    );
}

pub fn verified(env: &Env, user: &Address, actor: &Address) {
    env.events().publish(
        (symbol_short!("kyc"), symbol_short!("verified"), user.clone()),
        actor.clone(),
    );
}

pub fn revoked(env: &Env, user: &Address, actor: &Address) {
    env.events().publish(
        (symbol_short!("kyc"), symbol_short!("revoked"), user.clone()),
        actor.clone(),
    );
}

pub fn authority_updated(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (symbol_short!("kyc"), symbol_short!("auth_upd")),
        (old.clone(), new.clone()),
    );
}

pub fn ownership_transferred(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (symbol_short!("kyc"), symbol_short!("owner_upd")),
        (old.clone(), new.clone()),
    );
}

pub fn paused(env: &Env, actor: &Address) {
    env.events()
        .publish((symbol_short!("kyc"), symbol_short!("paused")), actor.clone());
}

pub fn unpaused(env: &Env, actor: &Address) {
    env.events()
        .publish((symbol_short!("kyc"), symbol_short!("unpaused")), actor.clone());
}

pub fn upgraded(env: &Env, actor: &Address, wasm_hash: &BytesN<32>) {
    env.events().publish(
        (symbol_short!("kyc"), symbol_short!("upgraded")),
        (actor.clone(), wasm_hash.clone()),
    );
}
