use anchor_lang::prelude::*;

/// Event emitted when a profile is created
#[event]
pub struct ProfileCreatedEvent {
    /// The authority of the new profile
    pub authority: Pubkey,

    /// The referral code issued to this profile
    pub referral_code: String,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when a mining session starts
#[event]
pub struct SessionStartedEvent {
    /// The authority of the session
    pub authority: Pubkey,

    /// The reward that will be paid when the session is claimed
    pub reward: u64,

    /// The session duration in seconds
    pub duration_seconds: i64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when a mining session reward is claimed
#[event]
pub struct SessionClaimedEvent {
    /// The authority of the session
    pub authority: Pubkey,

    /// The amount of EKH credited
    pub reward: u64,

    /// The streak after this claim
    pub current_streak: u32,

    /// The total balance after this claim
    pub total_coins: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when an ad bonus is claimed
#[event]
pub struct AdBonusClaimedEvent {
    /// The authority that claimed the bonus
    pub authority: Pubkey,

    /// The amount of EKH credited
    pub reward: u64,

    /// The total balance after this claim
    pub total_coins: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when auto-mining accrual settles on a profile
#[event]
pub struct AutoMiningAccruedEvent {
    /// The authority of the settled profile
    pub authority: Pubkey,

    /// The amount of EKH credited for the elapsed interval
    pub credited: u64,

    /// The total balance after settlement
    pub total_coins: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when a presale purchase is submitted
#[event]
pub struct PurchaseSubmittedEvent {
    /// The purchaser
    pub authority: Pubkey,

    /// The purchase index within the purchaser's profile
    pub index: u64,

    /// The purchase amount in USD cents
    pub amount_usd_cents: u64,

    /// The token price snapshot in USD cents
    pub token_price_usd_cents: u64,

    /// The amount of tokens this purchase buys
    pub tokens_amount: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when the payment gateway confirms a purchase
#[event]
pub struct PurchaseCompletedEvent {
    /// The purchaser
    pub authority: Pubkey,

    /// The purchase index within the purchaser's profile
    pub index: u64,

    /// The amount of tokens credited to the purchase total
    pub tokens_amount: u64,

    /// The auto-mining rate after recomputation, in EKH units per second
    pub coins_per_second: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when the payment gateway reports a failed purchase
#[event]
pub struct PurchaseFailedEvent {
    /// The purchaser
    pub authority: Pubkey,

    /// The purchase index within the purchaser's profile
    pub index: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when a referral is claimed
#[event]
pub struct ReferralClaimedEvent {
    /// The referred user who claimed the code
    pub referred: Pubkey,

    /// The owner of the claimed code
    pub referrer: Pubkey,

    /// The bonus credited to the referred user
    pub referred_bonus: u64,

    /// The bonus credited to the referrer
    pub referrer_bonus: u64,

    /// The referrer's referral count after this claim
    pub total_referrals: u32,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}

/// Event emitted when a social task is verified and its reward credited
#[event]
pub struct TaskVerifiedEvent {
    /// The user the task was verified for
    pub authority: Pubkey,

    /// The task id from the external catalog
    pub task_id: String,

    /// The amount of EKH credited
    pub reward: u64,

    /// Unix timestamp when event occurred
    pub timestamp: i64,
}
