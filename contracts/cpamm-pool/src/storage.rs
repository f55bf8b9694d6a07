use cpamm_types::{PoolConfig, PoolError, PoolState};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// Storage design:
// - Config and State live in Instance storage: every operation touches both
// - Each share balance is a separate Persistent entry keyed by owner
// - A zero balance removes its entry
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Reserves and share supply (Instance storage)
    State,
    /// Share balance: owner -> u128 (Persistent storage)
    Shares(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, PoolError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

/// Current reserves and supply; all zero before the first deposit
pub fn get_state(env: &Env) -> PoolState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Shares ===

pub fn get_share_balance(env: &Env, owner: &Address) -> u128 {
    let key = DataKey::Shares(owner.clone());
    env.storage().persistent().get(&key).unwrap_or(0u128)
}

pub fn set_share_balance(env: &Env, owner: &Address, balance: u128) {
    let key = DataKey::Shares(owner.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstantProductPool;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};

    #[test]
    fn test_config_missing() {
        let env = Env::default();
        let contract_id = env.register(ConstantProductPool, ());

        env.as_contract(&contract_id, || {
            assert!(!has_config(&env));
            assert_eq!(get_config(&env), Err(PoolError::NotInitialized));
        });
    }

    #[test]
    fn test_state_defaults_to_zero() {
        let env = Env::default();
        let contract_id = env.register(ConstantProductPool, ());

        env.as_contract(&contract_id, || {
            assert_eq!(get_state(&env), PoolState::default());
        });
    }

    #[test]
    fn test_share_balance_roundtrip() {
        let env = Env::default();
        let contract_id = env.register(ConstantProductPool, ());
        let owner = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(get_share_balance(&env, &owner), 0);

            set_share_balance(&env, &owner, 707);
            assert_eq!(get_share_balance(&env, &owner), 707);

            // Zero balance removes the entry
            set_share_balance(&env, &owner, 0);
            assert_eq!(get_share_balance(&env, &owner), 0);
            assert!(!env
                .storage()
                .persistent()
                .has(&DataKey::Shares(owner.clone())));
        });
    }
}
