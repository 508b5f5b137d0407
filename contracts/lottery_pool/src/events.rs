use soroban_sdk::{contracttype, Address, Symbol};

use crate::types::RoundStatus;

#[contracttype]
#[derive(Clone, Debug)]
pub struct ContributedEvent {
    pub round_id: u64,
    pub contributor: Address,
    pub asset: Address,
    pub raw_amount: i128,
    pub normalized_value: i128,
    pub entry_count: i128,
    pub index: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoundStatusEvent {
    pub round_id: u64,
    pub status: RoundStatus,
    pub participant_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct WinnerDrawnEvent {
    pub round_id: u64,
    pub winner: Address,
    pub winning_entry: i128,
    pub total_entries: i128,
    pub fee_owed: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PrizeClaimedEvent {
    pub round_id: u64,
    pub winner: Address,
    pub assets_paid: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RefundWithdrawnEvent {
    pub round_id: u64,
    pub contributor: Address,
    pub contribution_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetAddedEvent {
    pub asset: Address,
    pub precision: u32,
    pub min_contribution: i128,
    pub relative_worth_bp: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetEditedEvent {
    pub asset: Address,
    pub precision: u32,
    pub min_contribution: i128,
    pub relative_worth_bp: i128,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetRemovedEvent {
    pub asset: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ParamUpdatedEvent {
    pub param: Symbol,
    pub value: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct KeeperChangedEvent {
    pub keeper: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FeeRecipientChangedEvent {
    pub fee_recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FundsRescuedEvent {
    pub asset: Address,
    pub recipient: Address,
    pub amount: i128,
}
