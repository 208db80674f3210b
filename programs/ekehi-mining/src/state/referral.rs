use anchor_lang::prelude::*;

/// Referral account - one per referred user, seeded by the referred key, so
/// the address itself enforces that a user can be referred at most once.
#[account]
#[derive(Default)]
pub struct Referral {
    /// The user who claimed a referral code.
    pub referred: Pubkey,

    /// The owner of the claimed code.
    pub referrer: Pubkey,

    /// Whether both bonuses were credited. Always set on creation; kept for
    /// auditability of the record.
    pub reward_claimed: bool,

    /// The timestamp the referral was claimed.
    pub created_at: i64,
}

impl Referral {
    pub const LEN: usize = 8 + // discriminator
        32 + // referred
        32 + // referrer
        1 + // reward_claimed
        8; // created_at
}
