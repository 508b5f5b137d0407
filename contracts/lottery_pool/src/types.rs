use soroban_sdk::{contracttype, Address};

// Constants
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points
pub const MAX_RELATIVE_WORTH_BP: i128 = 50_000; // 5x parity cap
pub const REFERENCE_PRECISION: u32 = 7; // common unit of account uses 7 decimals
pub const MAX_ASSET_PRECISION: u32 = 18;
pub const MIN_PARTICIPANTS: u32 = 2; // below this a round can only cancel

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoundStatus {
    /// Accepting contributions
    Open = 0,
    /// Closed to contributions, awaiting the draw
    Drawing = 1,
    /// Winner recorded, prize claimable
    Drawn = 2,
    /// Terminated without a winner, refunds claimable
    Cancelled = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupportedAsset {
    /// On the whitelist (always true while stored)
    pub accepted: bool,
    /// Decimal places of the asset's raw amounts
    pub precision: u32,
    /// Deactivated assets stay enumerable but reject new contributions
    pub active: bool,
    /// Smallest raw amount accepted per contribution
    pub min_contribution: i128,
    /// Worth relative to parity, in basis points (10,000 = parity)
    pub relative_worth_bp: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub round_id: u64,
    pub contributor: Address,
    pub asset: Address,
    /// Amount in the asset's own units
    pub raw_amount: i128,
    /// Amount in the common unit of account
    pub normalized_value: i128,
    /// floor(normalized_value / value_per_entry); never zero once stored
    pub entry_count: i128,
    /// Set exactly once, by claim_prize bookkeeping or withdraw
    pub claimed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    pub id: u64,
    pub status: RoundStatus,
    /// Timestamp of the first contribution; 0 until then
    pub opened_at: u64,
    /// opened_at + round duration; 0 while the deadline is unset
    pub closes_at: u64,
    pub drawn_at: u64,
    /// Distinct contributors
    pub participant_count: u32,
    pub winner: Option<Address>,
    pub total_normalized_value: i128,
    pub total_entries: i128,
    /// Frozen at draw time from total_normalized_value (common units)
    pub fee_owed: i128,
    pub prize_claimed: bool,
    pub contribution_count: u32,
}

/// Aggregate view of one contributor's stake in a round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantTotals {
    pub contribution_count: u32,
    pub total_normalized_value: i128,
    pub total_entries: i128,
}

/// Current operating parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolParams {
    pub keeper: Address,
    pub fee_recipient: Address,
    pub fee_bps: i128,
    pub value_per_entry: i128,
    pub round_duration: u64,
    pub capacity: u32,
    pub outflow_allowed: bool,
    pub paused: bool,
}

/// One-call read model: round, caller's stake, and parameters together.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolSnapshot {
    pub current_round_id: u64,
    pub round: Option<Round>,
    pub participant: ParticipantTotals,
    pub params: PoolParams,
}

#[contracttype]
pub enum DataKey {
    // --- instance: contract-level config ---
    Admin,
    Keeper,
    FeeRecipient,
    FeeBps,
    ValuePerEntry,
    RoundDuration,
    Capacity,
    OutflowAllowed,
    Paused,
    Initialized,
    CurrentRound,
    AssetList,            // Vec<Address>, enumeration order non-semantic
    Asset(Address),       // asset -> SupportedAsset
    // --- persistent: per-round state ---
    Round(u64),                      // round_id -> Round
    Contributions(u64),              // round_id -> Vec<Contribution>, insertion order
    PoolAssets(u64),                 // round_id -> Vec<Address>, first-seen order
    PoolBalance(u64, Address),       // (round_id, asset) -> i128 raw units
    Participated(u64, Address),      // (round_id, account) -> bool
    ContributorIndices(u64, Address), // (round_id, account) -> Vec<u32>
}
