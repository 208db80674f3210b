use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::PurchaseFailedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct MarkPurchaseFailed<'info> {
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
}

/// Handler for mark_purchase_failed instruction
///
/// A failed purchase never touches the purchase total, so the auto-mining
/// rate is unaffected.
pub fn handler(ctx: Context<MarkPurchaseFailed>) -> Result<()> {
    let clock = Clock::get()?;
    let purchase = &mut ctx.accounts.purchase;

    require!(
        purchase.status == PurchaseStatus::Pending,
        AppError::AlreadyFinalized
    );

    purchase.status = PurchaseStatus::Failed;

    emit!(PurchaseFailedEvent {
        authority: purchase.authority,
        index: purchase.index,
        timestamp: clock.unix_timestamp,
    });

    msg!("Purchase {} failed", purchase.index);

    Ok(())
}
