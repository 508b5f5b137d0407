use soroban_sdk::{Address, Env, Map, Vec};

use crate::error::Error;
use crate::storage::Store;
use crate::types::{Contribution, ParticipantTotals, Round};

pub struct Ledger;

impl Ledger {
    /// Append a contribution to the round and update every derived record:
    /// round totals, the per-asset pool balance, the first-seen asset list,
    /// the contributor's participation flag (idempotent) and index list.
    ///
    /// The caller has already normalized the amount and verified the entry
    /// count is nonzero. Returns the contribution's index.
    pub fn record(
        env: &Env,
        round: &mut Round,
        contributor: &Address,
        asset: &Address,
        raw_amount: i128,
        normalized_value: i128,
        entry_count: i128,
    ) -> Result<u32, Error> {
        let mut contributions = Store::contributions(env, round.id);
        let index = contributions.len();
        contributions.push_back(Contribution {
            round_id: round.id,
            contributor: contributor.clone(),
            asset: asset.clone(),
            raw_amount,
            normalized_value,
            entry_count,
            claimed: false,
        });
        Store::set_contributions(env, round.id, &contributions);

        let balance = Store::pool_balance(env, round.id, asset);
        if balance == 0 {
            let mut assets = Store::pool_assets(env, round.id);
            if assets.first_index_of(asset.clone()).is_none() {
                assets.push_back(asset.clone());
                Store::set_pool_assets(env, round.id, &assets);
            }
        }
        let new_balance = balance.checked_add(raw_amount).ok_or(Error::Overflow)?;
        Store::set_pool_balance(env, round.id, asset, new_balance);

        // Participation is counted once per contributor per round.
        if !Store::has_participated(env, round.id, contributor) {
            Store::set_participated(env, round.id, contributor);
            round.participant_count += 1;
        }

        let mut indices = Store::contributor_indices(env, round.id, contributor);
        indices.push_back(index);
        Store::set_contributor_indices(env, round.id, contributor, &indices);

        round.total_normalized_value = round
            .total_normalized_value
            .checked_add(normalized_value)
            .ok_or(Error::Overflow)?;
        round.total_entries = round
            .total_entries
            .checked_add(entry_count)
            .ok_or(Error::Overflow)?;
        round.contribution_count += 1;

        Ok(index)
    }

    /// Assets with nonzero balance and their amounts, read from the stored
    /// per-asset balances.
    pub fn asset_balances(env: &Env, round_id: u64) -> Map<Address, i128> {
        let mut balances = Map::new(env);
        for asset in Store::pool_assets(env, round_id).iter() {
            let balance = Store::pool_balance(env, round_id, &asset);
            if balance > 0 {
                balances.set(asset, balance);
            }
        }
        balances
    }

    /// Indices of a contributor's contributions, in insertion order.
    pub fn contributions_of(env: &Env, round_id: u64, contributor: &Address) -> Vec<u32> {
        Store::contributor_indices(env, round_id, contributor)
    }

    /// Aggregate of a contributor's stake across the round.
    pub fn participant_totals(
        env: &Env,
        round_id: u64,
        contributor: &Address,
    ) -> ParticipantTotals {
        let contributions = Store::contributions(env, round_id);
        let indices = Store::contributor_indices(env, round_id, contributor);

        let mut totals = ParticipantTotals {
            contribution_count: indices.len(),
            total_normalized_value: 0,
            total_entries: 0,
        };
        for index in indices.iter() {
            if let Some(contribution) = contributions.get(index) {
                totals.total_normalized_value += contribution.normalized_value;
                totals.total_entries += contribution.entry_count;
            }
        }
        totals
    }
}
