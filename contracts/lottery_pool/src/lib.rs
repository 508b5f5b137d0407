#![no_std]

mod error;
mod events;
mod ledger;
mod normalize;
mod registry;
mod rounds;
mod settle;
mod storage;
mod types;
mod winner;


use error::Error;
use events::*;
use ledger::Ledger;
use registry::Registry;
use rounds::Rounds;
use settle::Settlement;
use storage::Store;
use types::{
    Contribution, ParticipantTotals, PoolParams, PoolSnapshot, Round, RoundStatus, SupportedAsset,
    BASIS_POINTS,
};
use winner::Selector;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Map, Symbol, Vec};

#[contract]
pub struct LotteryPool;

#[contractimpl]
impl LotteryPool {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the pool and open round 1.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidConfig`: Zero duration/value-per-entry, fee over 100%, or
    ///   capacity below 2
    pub fn initialize(
        env: Env,
        admin: Address,
        keeper: Address,
        fee_recipient: Address,
        round_duration: u64,
        value_per_entry: i128,
        fee_bps: i128,
        capacity: u32,
    ) -> Result<(), Error> {
        if Store::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        if round_duration == 0
            || value_per_entry <= 0
            || fee_bps < 0
            || fee_bps > BASIS_POINTS
            || capacity < 2
        {
            return Err(Error::InvalidConfig);
        }

        Store::set_initialized(&env);
        Store::set_admin(&env, &admin);
        Store::set_keeper(&env, &keeper);
        Store::set_fee_recipient(&env, &fee_recipient);
        Store::set_round_duration(&env, round_duration);
        Store::set_value_per_entry(&env, value_per_entry);
        Store::set_fee_bps(&env, fee_bps);
        Store::set_capacity(&env, capacity);
        Store::set_outflow_allowed(&env, true);
        Store::set_paused(&env, false);

        let round = Rounds::open_next(&env, 1);
        Self::publish_status(&env, &round);

        Ok(())
    }

    /// Pause new contributions (emergency). Settlement stays available.
    pub fn pause(env: Env) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Store::set_paused(&env, true);
        Self::publish_param(&env, "paused", 1);
        Ok(())
    }

    /// Resume contributions.
    pub fn unpause(env: Env) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Store::set_paused(&env, false);
        Self::publish_param(&env, "paused", 0);
        Ok(())
    }

    // ============================================
    // PARTICIPATION
    // ============================================

    /// Contribute a whitelisted asset to the current round.
    ///
    /// The first contribution of a round fixes its close deadline. Reaching
    /// participant capacity immediately closes the round for drawing.
    /// Returns the contribution's index within the round.
    ///
    /// # Errors
    /// - `ContractPaused`: Contributions are paused
    /// - `InvalidAmount`: amount must be positive
    /// - `UnknownAsset`: Asset not registered
    /// - `AssetInactive`: Asset deactivated
    /// - `BelowMinimum`: Amount under the asset's minimum
    /// - `RoundNotOpen`: Current round no longer accepts contributions
    /// - `RoundExpired`: Round deadline has passed
    /// - `RoundFull`: Participant capacity reached
    /// - `BelowEntryThreshold`: Normalized value buys zero entries
    pub fn contribute(
        env: Env,
        contributor: Address,
        asset: Address,
        amount: i128,
    ) -> Result<u32, Error> {
        Self::check_not_paused(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        contributor.require_auth();

        let entry = Store::asset(&env, &asset).ok_or(Error::UnknownAsset)?;
        if !entry.active {
            return Err(Error::AssetInactive);
        }
        if amount < entry.min_contribution {
            return Err(Error::BelowMinimum);
        }

        let round_id = Store::current_round(&env)?;
        let mut round = Store::round(&env, round_id).ok_or(Error::RoundNotFound)?;

        let now = env.ledger().timestamp();
        let capacity = Store::capacity(&env)?;
        Rounds::ensure_accepting(&round, now, capacity)?;

        let normalized =
            normalize::normalized_value(amount, entry.precision, entry.relative_worth_bp)
                .ok_or(Error::Overflow)?;
        let value_per_entry = Store::value_per_entry(&env)?;
        let entries =
            normalize::entry_count(normalized, value_per_entry).ok_or(Error::Overflow)?;
        if entries == 0 {
            return Err(Error::BelowEntryThreshold);
        }

        // Pull the stake before recording it
        token::Client::new(&env, &asset).transfer(
            &contributor,
            &env.current_contract_address(),
            &amount,
        );

        Rounds::fix_deadline(&mut round, now, Store::round_duration(&env)?);
        let index = Ledger::record(
            &env,
            &mut round,
            &contributor,
            &asset,
            amount,
            normalized,
            entries,
        )?;
        let filled = Rounds::fill_if_at_capacity(&mut round, capacity);
        Store::set_round(&env, &round);

        env.events().publish(
            (Symbol::new(&env, "contributed"), round_id, contributor.clone()),
            ContributedEvent {
                round_id,
                contributor,
                asset,
                raw_amount: amount,
                normalized_value: normalized,
                entry_count: entries,
                index,
            },
        );
        if filled {
            Self::publish_status(&env, &round);
        }

        Ok(index)
    }

    // ============================================
    // ROUND LIFECYCLE (KEEPER)
    // ============================================

    /// Resolve the current round. A round past its deadline (or filled to
    /// capacity) moves to Drawing; with enough participants a winner is
    /// drawn, otherwise the round cancels. Either way the next round opens.
    ///
    /// # Errors
    /// - `NotDrawable`: Round cannot reach Drawing status
    /// - `AlreadyDrawn`: Winner already recorded for this round
    /// - `NoEligibleEntries`: Zero total entries at draw time
    pub fn request_draw(env: Env) -> Result<(), Error> {
        let keeper = Store::keeper(&env)?;
        keeper.require_auth();

        let round_id = Store::current_round(&env)?;
        let mut round = Store::round(&env, round_id).ok_or(Error::RoundNotFound)?;

        let now = env.ledger().timestamp();
        Rounds::ensure_drawing(&mut round, now)?;

        if Rounds::below_participation_floor(&round) {
            round.status = RoundStatus::Cancelled;
            Store::set_round(&env, &round);
            Self::publish_status(&env, &round);

            let next = Rounds::open_next(&env, round_id + 1);
            Self::publish_status(&env, &next);
            return Ok(());
        }

        let (winner, winning_entry) = Selector::select(&env, round_id, round.total_entries)?;

        let fee_bps = Store::fee_bps(&env)?;
        round.winner = Some(winner.clone());
        round.drawn_at = now;
        round.fee_owed = round
            .total_normalized_value
            .checked_mul(fee_bps)
            .ok_or(Error::Overflow)?
            .checked_div(BASIS_POINTS)
            .ok_or(Error::Overflow)?;
        round.status = RoundStatus::Drawn;
        Store::set_round(&env, &round);

        env.events().publish(
            (Symbol::new(&env, "winner_drawn"), round_id),
            WinnerDrawnEvent {
                round_id,
                winner,
                winning_entry,
                total_entries: round.total_entries,
                fee_owed: round.fee_owed,
            },
        );
        Self::publish_status(&env, &round);

        let next = Rounds::open_next(&env, round_id + 1);
        Self::publish_status(&env, &next);

        Ok(())
    }

    /// Cancel an expired round that never reached the participation floor,
    /// and open the next one.
    ///
    /// # Errors
    /// - `RoundNotOpen`: Current round is not Open
    /// - `DeadlineNotReached`: Round deadline unset or not yet passed
    /// - `TooManyParticipants`: Enough participants to draw instead
    pub fn request_cancel(env: Env) -> Result<(), Error> {
        let keeper = Store::keeper(&env)?;
        keeper.require_auth();

        let round_id = Store::current_round(&env)?;
        let mut round = Store::round(&env, round_id).ok_or(Error::RoundNotFound)?;

        let now = env.ledger().timestamp();
        Rounds::ensure_cancellable(&round, now)?;

        round.status = RoundStatus::Cancelled;
        Store::set_round(&env, &round);
        Self::publish_status(&env, &round);

        let next = Rounds::open_next(&env, round_id + 1);
        Self::publish_status(&env, &next);

        Ok(())
    }

    // ============================================
    // SETTLEMENT
    // ============================================

    /// Pay out a drawn round: per asset, fee to the fee recipient and the
    /// remainder to the winner. The given contribution indices are marked
    /// claimed for bookkeeping; payment itself is computed from per-asset
    /// balances. Claim flags are durably set before any token moves.
    ///
    /// # Errors
    /// - `OutflowDisabled`: Outbound payments are halted
    /// - `RoundNotDrawn`: Round has no recorded winner yet
    /// - `NotWinner`: Caller is not the winner
    /// - `AlreadyClaimed`: Prize already paid
    /// - `InvalidIndex`: A bookkeeping index is out of range
    pub fn claim_prize(
        env: Env,
        caller: Address,
        round_id: u64,
        indices: Vec<u32>,
    ) -> Result<(), Error> {
        Self::check_outflow_allowed(&env)?;

        caller.require_auth();

        let payouts = Settlement::prepare_claim(&env, &caller, round_id, &indices)?;

        let fee_recipient = Store::fee_recipient(&env)?;
        let contract = env.current_contract_address();
        for (asset, fee, prize) in payouts.iter() {
            let client = token::Client::new(&env, &asset);
            if fee > 0 {
                client.transfer(&contract, &fee_recipient, &fee);
            }
            if prize > 0 {
                client.transfer(&contract, &caller, &prize);
            }
        }

        env.events().publish(
            (Symbol::new(&env, "prize_claimed"), round_id, caller.clone()),
            PrizeClaimedEvent {
                round_id,
                winner: caller,
                assets_paid: payouts.len(),
            },
        );

        Ok(())
    }

    /// Refund the caller's contributions from a cancelled round. Each index
    /// is marked withdrawn before any token moves; refunds aggregate per
    /// asset into one transfer each.
    ///
    /// # Errors
    /// - `OutflowDisabled`: Outbound payments are halted
    /// - `RoundNotCancelled`: Round is not cancelled
    /// - `InvalidIndex`: Index out of range
    /// - `NotOwner`: A contribution belongs to someone else
    /// - `AlreadyWithdrawn`: A contribution was already refunded
    pub fn withdraw(
        env: Env,
        caller: Address,
        round_id: u64,
        indices: Vec<u32>,
    ) -> Result<(), Error> {
        Self::check_outflow_allowed(&env)?;

        caller.require_auth();

        let refunds = Settlement::prepare_withdraw(&env, &caller, round_id, &indices)?;

        let contract = env.current_contract_address();
        for (asset, amount) in refunds.iter() {
            if amount > 0 {
                token::Client::new(&env, &asset).transfer(&contract, &caller, &amount);
            }
        }

        env.events().publish(
            (Symbol::new(&env, "refund_withdrawn"), round_id, caller.clone()),
            RefundWithdrawnEvent {
                round_id,
                contributor: caller,
                contribution_count: indices.len(),
            },
        );

        Ok(())
    }

    // ============================================
    // ASSET REGISTRY (OWNER)
    // ============================================

    /// Whitelist an asset for contributions.
    ///
    /// # Errors
    /// - `AlreadyWhitelisted`: Asset already registered
    /// - `InvalidWorth`: relative_worth_bp zero or above the cap
    pub fn add_asset(
        env: Env,
        asset: Address,
        precision: u32,
        min_contribution: i128,
        relative_worth_bp: i128,
    ) -> Result<(), Error> {
        Registry::add(&env, &asset, precision, min_contribution, relative_worth_bp)?;

        env.events().publish(
            (Symbol::new(&env, "asset_added"), asset.clone()),
            AssetAddedEvent {
                asset,
                precision,
                min_contribution,
                relative_worth_bp,
            },
        );

        Ok(())
    }

    /// Update a whitelisted asset, including its `active` flag.
    ///
    /// # Errors
    /// - `NotWhitelisted`: Asset not registered
    /// - `InvalidWorth`: relative_worth_bp zero or above the cap
    pub fn edit_asset(
        env: Env,
        asset: Address,
        precision: u32,
        min_contribution: i128,
        relative_worth_bp: i128,
        active: bool,
    ) -> Result<(), Error> {
        Registry::edit(
            &env,
            &asset,
            precision,
            min_contribution,
            relative_worth_bp,
            active,
        )?;

        env.events().publish(
            (Symbol::new(&env, "asset_edited"), asset.clone()),
            AssetEditedEvent {
                asset,
                precision,
                min_contribution,
                relative_worth_bp,
                active,
            },
        );

        Ok(())
    }

    /// Remove an asset from the whitelist. Recorded contributions keep
    /// settling; only new contributions are refused.
    ///
    /// # Errors
    /// - `NotWhitelisted`: Asset not registered
    pub fn remove_asset(env: Env, asset: Address) -> Result<(), Error> {
        Registry::remove(&env, &asset)?;

        env.events().publish(
            (Symbol::new(&env, "asset_removed"), asset.clone()),
            AssetRemovedEvent { asset },
        );

        Ok(())
    }

    /// All registered asset addresses, active or not.
    pub fn list_assets(env: Env) -> Vec<Address> {
        Registry::list(&env)
    }

    // ============================================
    // PARAMETER ADMIN (OWNER)
    // ============================================

    pub fn set_value_per_entry(env: Env, value: i128) -> Result<(), Error> {
        Self::require_admin(&env)?;
        if value <= 0 {
            return Err(Error::InvalidConfig);
        }
        Store::set_value_per_entry(&env, value);
        Self::publish_param(&env, "value_per_entry", value);
        Ok(())
    }

    pub fn set_round_duration(env: Env, duration: u64) -> Result<(), Error> {
        Self::require_admin(&env)?;
        if duration == 0 {
            return Err(Error::InvalidConfig);
        }
        Store::set_round_duration(&env, duration);
        Self::publish_param(&env, "round_duration", duration as i128);
        Ok(())
    }

    pub fn set_fee_bps(env: Env, fee_bps: i128) -> Result<(), Error> {
        Self::require_admin(&env)?;
        if fee_bps < 0 || fee_bps > BASIS_POINTS {
            return Err(Error::InvalidConfig);
        }
        Store::set_fee_bps(&env, fee_bps);
        Self::publish_param(&env, "fee_bps", fee_bps);
        Ok(())
    }

    pub fn set_capacity(env: Env, capacity: u32) -> Result<(), Error> {
        Self::require_admin(&env)?;
        if capacity < 2 {
            return Err(Error::InvalidConfig);
        }
        Store::set_capacity(&env, capacity);
        Self::publish_param(&env, "capacity", capacity as i128);
        Ok(())
    }

    pub fn set_fee_recipient(env: Env, fee_recipient: Address) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Store::set_fee_recipient(&env, &fee_recipient);
        env.events().publish(
            (Symbol::new(&env, "fee_recipient_changed"),),
            FeeRecipientChangedEvent { fee_recipient },
        );
        Ok(())
    }

    pub fn set_keeper(env: Env, keeper: Address) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Store::set_keeper(&env, &keeper);
        env.events().publish(
            (Symbol::new(&env, "keeper_changed"),),
            KeeperChangedEvent { keeper },
        );
        Ok(())
    }

    /// Halt or resume all outbound payments. Deposits are unaffected.
    pub fn set_outflow_allowed(env: Env, allowed: bool) -> Result<(), Error> {
        Self::require_admin(&env)?;
        Store::set_outflow_allowed(&env, allowed);
        Self::publish_param(&env, "outflow_allowed", allowed as i128);
        Ok(())
    }

    // ============================================
    // EMERGENCY
    // ============================================

    /// Move stranded balance of a registered asset to an arbitrary
    /// recipient. Bypasses round accounting.
    ///
    /// # Errors
    /// - `NotWhitelisted`: Asset not registered
    /// - `InvalidAmount`: amount must be positive
    pub fn rescue_funds(
        env: Env,
        asset: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_admin(&env)?;

        if Store::asset(&env, &asset).is_none() {
            return Err(Error::NotWhitelisted);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount,
        );

        env.events().publish(
            (Symbol::new(&env, "funds_rescued"), asset.clone()),
            FundsRescuedEvent {
                asset,
                recipient,
                amount,
            },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Round record, or None for an unknown id.
    pub fn get_round(env: Env, round_id: u64) -> Option<Round> {
        Store::round(&env, round_id)
    }

    /// A single contribution by index.
    ///
    /// # Errors
    /// - `InvalidIndex`: Index out of range for the round
    pub fn get_contribution(env: Env, round_id: u64, index: u32) -> Result<Contribution, Error> {
        Store::contributions(&env, round_id)
            .get(index)
            .ok_or(Error::InvalidIndex)
    }

    /// Assets with nonzero balance in the round and their amounts.
    pub fn get_asset_balances(env: Env, round_id: u64) -> Map<Address, i128> {
        Ledger::asset_balances(&env, round_id)
    }

    /// Indices of a contributor's contributions, in insertion order.
    pub fn get_contribution_indices(env: Env, round_id: u64, contributor: Address) -> Vec<u32> {
        Ledger::contributions_of(&env, round_id, &contributor)
    }

    /// Aggregate stake of one contributor in one round.
    pub fn get_participant_totals(
        env: Env,
        round_id: u64,
        contributor: Address,
    ) -> ParticipantTotals {
        Ledger::participant_totals(&env, round_id, &contributor)
    }

    /// Registered asset metadata.
    pub fn get_asset(env: Env, asset: Address) -> Option<SupportedAsset> {
        Store::asset(&env, &asset)
    }

    /// Current operating parameters.
    pub fn get_params(env: Env) -> Result<PoolParams, Error> {
        Ok(PoolParams {
            keeper: Store::keeper(&env)?,
            fee_recipient: Store::fee_recipient(&env)?,
            fee_bps: Store::fee_bps(&env)?,
            value_per_entry: Store::value_per_entry(&env)?,
            round_duration: Store::round_duration(&env)?,
            capacity: Store::capacity(&env)?,
            outflow_allowed: Store::outflow_allowed(&env),
            paused: Store::paused(&env),
        })
    }

    pub fn current_round_id(env: Env) -> Result<u64, Error> {
        Store::current_round(&env)
    }

    /// Round, participant aggregate and parameters in one call.
    pub fn get_snapshot(env: Env, round_id: u64, contributor: Address) -> Result<PoolSnapshot, Error> {
        Ok(PoolSnapshot {
            current_round_id: Store::current_round(&env)?,
            round: Store::round(&env, round_id),
            participant: Ledger::participant_totals(&env, round_id, &contributor),
            params: Self::get_params(env.clone())?,
        })
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_admin(env: &Env) -> Result<(), Error> {
        let admin = Store::admin(env)?;
        admin.require_auth();
        Ok(())
    }

    fn check_not_paused(env: &Env) -> Result<(), Error> {
        if Store::paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    fn check_outflow_allowed(env: &Env) -> Result<(), Error> {
        if !Store::outflow_allowed(env) {
            return Err(Error::OutflowDisabled);
        }
        Ok(())
    }

    fn publish_status(env: &Env, round: &Round) {
        env.events().publish(
            (Symbol::new(env, "round_status"), round.id),
            RoundStatusEvent {
                round_id: round.id,
                status: round.status.clone(),
                participant_count: round.participant_count,
            },
        );
    }

    fn publish_param(env: &Env, param: &str, value: i128) {
        env.events().publish(
            (Symbol::new(env, "param_updated"),),
            ParamUpdatedEvent {
                param: Symbol::new(env, param),
                value,
            },
        );
    }
}
