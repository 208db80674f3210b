use anchor_lang::prelude::*;

/// The settlement state of a presale purchase. Immutable once finalized.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurchaseStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

/// How the purchaser pays the external gateway.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Card,
    Crypto,
    BankTransfer,
}

#[account]
#[derive(Default)]
pub struct Purchase {
    /// The purchaser.
    pub authority: Pubkey,

    /// The index of this purchase within the purchaser's profile.
    pub index: u64,

    /// The purchase amount in USD cents.
    pub amount_usd_cents: u64,

    /// The token price in USD cents at submission time.
    pub token_price_usd_cents: u64,

    /// The amount of tokens this purchase buys: amount / price.
    pub tokens_amount: u64,

    /// The settlement state reported by the payment gateway.
    pub status: PurchaseStatus,

    /// The payment method chosen at submission.
    pub payment_method: PaymentMethod,

    /// The timestamp this purchase was submitted.
    pub created_at: i64,
}

impl Purchase {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        8 + // index
        8 + // amount_usd_cents
        8 + // token_price_usd_cents
        8 + // tokens_amount
        1 + // status
        1 + // payment_method
        8; // created_at
}
