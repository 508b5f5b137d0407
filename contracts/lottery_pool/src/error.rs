use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,
    /// Construction/admin parameter out of range
    InvalidConfig = 3,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller is not the recorded winner of the round
    NotWinner = 10,
    /// Caller is not the contributor who made the contribution
    NotOwner = 11,

    // ============================================
    // REGISTRY ERRORS (20-29)
    // ============================================
    /// Asset already on the whitelist
    AlreadyWhitelisted = 20,
    /// Asset not on the whitelist
    NotWhitelisted = 21,
    /// relative_worth_bp is zero or exceeds the cap
    InvalidWorth = 22,
    /// Asset not registered (normalization path)
    UnknownAsset = 23,
    /// Asset is whitelisted but deactivated
    AssetInactive = 24,
    /// Contribution below the asset's minimum
    BelowMinimum = 25,

    // ============================================
    // ROUND STATE ERRORS (30-39)
    // ============================================
    /// No round stored under this id
    RoundNotFound = 30,
    /// Round is not in Open status
    RoundNotOpen = 31,
    /// Round deadline has passed
    RoundExpired = 32,
    /// Round already at participant capacity
    RoundFull = 33,
    /// Round cannot reach Drawing status
    NotDrawable = 34,
    /// Winner already recorded for this round
    AlreadyDrawn = 35,
    /// Round deadline not yet reached
    DeadlineNotReached = 36,
    /// Too many participants to cancel
    TooManyParticipants = 37,
    /// Round is not in Drawn status
    RoundNotDrawn = 38,
    /// Round is not in Cancelled status
    RoundNotCancelled = 39,

    // ============================================
    // AMOUNT ERRORS (40-49)
    // ============================================
    /// Amount must be positive
    InvalidAmount = 40,
    /// Normalized value too small for a single entry
    BelowEntryThreshold = 41,
    /// Arithmetic overflow
    Overflow = 42,

    // ============================================
    // SETTLEMENT ERRORS (50-59)
    // ============================================
    /// Prize already claimed for this round
    AlreadyClaimed = 50,
    /// Contribution already withdrawn
    AlreadyWithdrawn = 51,
    /// Contribution index out of range
    InvalidIndex = 52,
    /// Round has zero total entries at draw time
    NoEligibleEntries = 53,

    // ============================================
    // OPERATIONAL ERRORS (60-69)
    // ============================================
    /// Contract is paused
    ContractPaused = 60,
    /// Outbound payments are disabled
    OutflowDisabled = 61,
}
