use soroban_sdk::{Address, Env, Map, Vec};

use crate::error::Error;
use crate::storage::Store;
use crate::types::{RoundStatus, BASIS_POINTS};

pub struct Settlement;

impl Settlement {
    /// Validate a prize claim and durably record its effects: the round's
    /// claim flag, the bookkeeping marks on the given contribution indices,
    /// and the zeroed per-asset balances. No tokens move here; the caller
    /// pays out the returned `(asset, fee, prize)` plan only after every
    /// flag is written.
    ///
    /// Payment is computed from per-asset balances with the current fee
    /// basis points; the round's `fee_owed` stays the draw-time snapshot in
    /// common units and is intentionally not reconciled against it.
    pub fn prepare_claim(
        env: &Env,
        caller: &Address,
        round_id: u64,
        indices: &Vec<u32>,
    ) -> Result<Vec<(Address, i128, i128)>, Error> {
        let mut round = Store::round(env, round_id).ok_or(Error::RoundNotFound)?;
        if round.status != RoundStatus::Drawn {
            return Err(Error::RoundNotDrawn);
        }
        let winner = round.winner.clone().ok_or(Error::RoundNotDrawn)?;
        if caller != &winner {
            return Err(Error::NotWinner);
        }
        if round.prize_claimed {
            return Err(Error::AlreadyClaimed);
        }

        round.prize_claimed = true;

        // Bookkeeping marks; payment is balance-based, not gated by these.
        if !indices.is_empty() {
            let mut contributions = Store::contributions(env, round_id);
            for index in indices.iter() {
                let mut contribution = contributions.get(index).ok_or(Error::InvalidIndex)?;
                if !contribution.claimed {
                    contribution.claimed = true;
                    contributions.set(index, contribution);
                }
            }
            Store::set_contributions(env, round_id, &contributions);
        }

        let fee_bps = Store::fee_bps(env)?;
        let mut payouts = Vec::new(env);
        for asset in Store::pool_assets(env, round_id).iter() {
            let balance = Store::pool_balance(env, round_id, &asset);
            if balance == 0 {
                continue;
            }
            let fee = balance
                .checked_mul(fee_bps)
                .ok_or(Error::Overflow)?
                .checked_div(BASIS_POINTS)
                .ok_or(Error::Overflow)?;
            let prize = balance.checked_sub(fee).ok_or(Error::Overflow)?;
            Store::set_pool_balance(env, round_id, &asset, 0);
            payouts.push_back((asset, fee, prize));
        }

        Store::set_round(env, &round);
        Ok(payouts)
    }

    /// Validate a refund withdrawal and durably record it: every index is
    /// range-checked, ownership-checked and marked claimed exactly once,
    /// and the per-asset balances are decremented. Returns the aggregated
    /// per-asset refund amounts for the caller to pay out afterwards.
    pub fn prepare_withdraw(
        env: &Env,
        caller: &Address,
        round_id: u64,
        indices: &Vec<u32>,
    ) -> Result<Map<Address, i128>, Error> {
        let round = Store::round(env, round_id).ok_or(Error::RoundNotFound)?;
        if round.status != RoundStatus::Cancelled {
            return Err(Error::RoundNotCancelled);
        }

        let mut contributions = Store::contributions(env, round_id);
        let mut refunds: Map<Address, i128> = Map::new(env);
        for index in indices.iter() {
            let mut contribution = contributions.get(index).ok_or(Error::InvalidIndex)?;
            if &contribution.contributor != caller {
                return Err(Error::NotOwner);
            }
            if contribution.claimed {
                return Err(Error::AlreadyWithdrawn);
            }
            contribution.claimed = true;
            let asset = contribution.asset.clone();
            let amount = contribution.raw_amount;
            contributions.set(index, contribution);

            let total = refunds
                .get(asset.clone())
                .unwrap_or(0)
                .checked_add(amount)
                .ok_or(Error::Overflow)?;
            refunds.set(asset, total);
        }
        Store::set_contributions(env, round_id, &contributions);

        for (asset, amount) in refunds.iter() {
            let balance = Store::pool_balance(env, round_id, &asset);
            let remaining = balance.checked_sub(amount).ok_or(Error::Overflow)?;
            Store::set_pool_balance(env, round_id, &asset, remaining);
        }

        Ok(refunds)
    }
}
