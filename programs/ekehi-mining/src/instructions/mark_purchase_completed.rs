use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::PurchaseCompletedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct MarkPurchaseCompleted<'info> {
    pub payment_authority: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump,
        has_one = payment_authority @ AppError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [PURCHASE, purchase.authority.as_ref(), &purchase.index.to_le_bytes()],
        bump,
    )]
    pub purchase: Account<'info, Purchase>,

    #[account(
        mut,
        seeds = [PROFILE, purchase.authority.as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,
}

/// Handler for mark_purchase_completed instruction
///
/// Idempotent callback for the payment gateway: a repeat call fails on the
/// Pending check instead of crediting twice. The new rate only applies to
/// time after this transaction because accrual settles first.
pub fn handler(ctx: Context<MarkPurchaseCompleted>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let purchase = &mut ctx.accounts.purchase;
    let profile = &mut ctx.accounts.profile;

    require!(
        purchase.status == PurchaseStatus::Pending,
        AppError::AlreadyFinalized
    );

    purchase.status = PurchaseStatus::Completed;

    // Settle the elapsed interval at the old rate before raising it.
    profile.accrue(now)?;
    profile.total_tokens_purchased = profile
        .total_tokens_purchased
        .checked_add(purchase.tokens_amount)
        .ok_or(AppError::Overflow)?;
    profile.recompute_rate();

    emit!(PurchaseCompletedEvent {
        authority: purchase.authority,
        index: purchase.index,
        tokens_amount: purchase.tokens_amount,
        coins_per_second: profile.coins_per_second,
        timestamp: now,
    });

    msg!(
        "Purchase {} completed, rate now {} units/s",
        purchase.index,
        profile.coins_per_second
    );

    Ok(())
}
