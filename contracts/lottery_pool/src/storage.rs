use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

use crate::error::Error;
use crate::types::{Contribution, DataKey, Round, SupportedAsset};

/// Persistent entry TTL in ledgers (~30 days at 5s/ledger), extended on
/// every write so live round data never expires mid-round.
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

pub struct Store;

impl Store {
    fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
    where
        V: IntoVal<Env, Val>,
    {
        env.storage().persistent().set(key, value);
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
    }

    // Initialization
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    // Roles
    pub fn admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }

    pub fn keeper(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Keeper)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_keeper(env: &Env, keeper: &Address) {
        env.storage().instance().set(&DataKey::Keeper, keeper);
    }

    pub fn fee_recipient(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::FeeRecipient)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_fee_recipient(env: &Env, recipient: &Address) {
        env.storage()
            .instance()
            .set(&DataKey::FeeRecipient, recipient);
    }

    // Parameters
    pub fn fee_bps(env: &Env) -> Result<i128, Error> {
        env.storage()
            .instance()
            .get(&DataKey::FeeBps)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_fee_bps(env: &Env, bps: i128) {
        env.storage().instance().set(&DataKey::FeeBps, &bps);
    }

    pub fn value_per_entry(env: &Env) -> Result<i128, Error> {
        env.storage()
            .instance()
            .get(&DataKey::ValuePerEntry)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_value_per_entry(env: &Env, value: i128) {
        env.storage().instance().set(&DataKey::ValuePerEntry, &value);
    }

    pub fn round_duration(env: &Env) -> Result<u64, Error> {
        env.storage()
            .instance()
            .get(&DataKey::RoundDuration)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_round_duration(env: &Env, duration: u64) {
        env.storage()
            .instance()
            .set(&DataKey::RoundDuration, &duration);
    }

    pub fn capacity(env: &Env) -> Result<u32, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Capacity)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_capacity(env: &Env, capacity: u32) {
        env.storage().instance().set(&DataKey::Capacity, &capacity);
    }

    // Toggles
    pub fn outflow_allowed(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::OutflowAllowed)
            .unwrap_or(true)
    }

    pub fn set_outflow_allowed(env: &Env, allowed: bool) {
        env.storage()
            .instance()
            .set(&DataKey::OutflowAllowed, &allowed);
    }

    pub fn paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
    }

    // Registry
    pub fn asset(env: &Env, asset: &Address) -> Option<SupportedAsset> {
        env.storage().instance().get(&DataKey::Asset(asset.clone()))
    }

    pub fn set_asset(env: &Env, asset: &Address, entry: &SupportedAsset) {
        env.storage()
            .instance()
            .set(&DataKey::Asset(asset.clone()), entry);
    }

    pub fn remove_asset(env: &Env, asset: &Address) {
        env.storage()
            .instance()
            .remove(&DataKey::Asset(asset.clone()));
    }

    pub fn asset_list(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::AssetList)
            .unwrap_or(Vec::new(env))
    }

    pub fn set_asset_list(env: &Env, list: &Vec<Address>) {
        env.storage().instance().set(&DataKey::AssetList, list);
    }

    // Round pointer
    pub fn current_round(env: &Env) -> Result<u64, Error> {
        env.storage()
            .instance()
            .get(&DataKey::CurrentRound)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_current_round(env: &Env, round_id: u64) {
        env.storage()
            .instance()
            .set(&DataKey::CurrentRound, &round_id);
    }

    // Per-round state
    pub fn round(env: &Env, round_id: u64) -> Option<Round> {
        env.storage().persistent().get(&DataKey::Round(round_id))
    }

    pub fn set_round(env: &Env, round: &Round) {
        Self::set_persistent(env, &DataKey::Round(round.id), round);
    }

    pub fn contributions(env: &Env, round_id: u64) -> Vec<Contribution> {
        env.storage()
            .persistent()
            .get(&DataKey::Contributions(round_id))
            .unwrap_or(Vec::new(env))
    }

    pub fn set_contributions(env: &Env, round_id: u64, contributions: &Vec<Contribution>) {
        Self::set_persistent(env, &DataKey::Contributions(round_id), contributions);
    }

    pub fn pool_assets(env: &Env, round_id: u64) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::PoolAssets(round_id))
            .unwrap_or(Vec::new(env))
    }

    pub fn set_pool_assets(env: &Env, round_id: u64, assets: &Vec<Address>) {
        Self::set_persistent(env, &DataKey::PoolAssets(round_id), assets);
    }

    pub fn pool_balance(env: &Env, round_id: u64, asset: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::PoolBalance(round_id, asset.clone()))
            .unwrap_or(0)
    }

    pub fn set_pool_balance(env: &Env, round_id: u64, asset: &Address, balance: i128) {
        Self::set_persistent(env, &DataKey::PoolBalance(round_id, asset.clone()), &balance);
    }

    pub fn has_participated(env: &Env, round_id: u64, account: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Participated(round_id, account.clone()))
            .unwrap_or(false)
    }

    pub fn set_participated(env: &Env, round_id: u64, account: &Address) {
        Self::set_persistent(env, &DataKey::Participated(round_id, account.clone()), &true);
    }

    pub fn contributor_indices(env: &Env, round_id: u64, account: &Address) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::ContributorIndices(round_id, account.clone()))
            .unwrap_or(Vec::new(env))
    }

    pub fn set_contributor_indices(env: &Env, round_id: u64, account: &Address, indices: &Vec<u32>) {
        Self::set_persistent(
            env,
            &DataKey::ContributorIndices(round_id, account.clone()),
            indices,
        );
    }
}
