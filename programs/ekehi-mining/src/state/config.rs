use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct Config {
    /// The address that can update the config.
    pub admin: Pubkey,

    /// The address with authority to finalize presale purchases.
    pub payment_authority: Pubkey,

    /// The address with authority to verify social tasks.
    pub verifier: Pubkey,

    /// The presale token price in USD cents, snapshotted onto each purchase.
    pub token_price_usd_cents: u64,

    /// The minimum presale purchase in USD cents.
    pub min_purchase_usd_cents: u64,
}

impl Config {
    pub const LEN: usize = 8 + // discriminator
        32 + // admin
        32 + // payment_authority
        32 + // verifier
        8 + // token_price_usd_cents
        8; // min_purchase_usd_cents
}
