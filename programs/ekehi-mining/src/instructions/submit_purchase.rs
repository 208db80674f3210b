use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::PurchaseSubmittedEvent;
use crate::state::*;
use crate::utils::tokens_for_usd;

#[derive(Accounts)]
pub struct SubmitPurchase<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [PROFILE, authority.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,

    #[account(
        init,
        payer = authority,
        space = Purchase::LEN,
        seeds = [PURCHASE, authority.key().as_ref(), &profile.purchase_count.to_le_bytes()],
        bump,
    )]
    pub purchase: Account<'info, Purchase>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SubmitPurchaseArgs {
    pub amount_usd_cents: u64,
    pub payment_method: PaymentMethod,
}

pub fn handler(ctx: Context<SubmitPurchase>, args: SubmitPurchaseArgs) -> Result<()> {
    let clock = Clock::get()?;
    let config = &ctx.accounts.config;
    let profile = &mut ctx.accounts.profile;
    let purchase = &mut ctx.accounts.purchase;

    require!(
        args.amount_usd_cents >= config.min_purchase_usd_cents,
        AppError::BelowMinimum
    );

    let tokens_amount = tokens_for_usd(args.amount_usd_cents, config.token_price_usd_cents)
        .ok_or(AppError::Overflow)?;

    purchase.authority = ctx.accounts.authority.key();
    purchase.index = profile.purchase_count;
    purchase.amount_usd_cents = args.amount_usd_cents;
    purchase.token_price_usd_cents = config.token_price_usd_cents;
    purchase.tokens_amount = tokens_amount;
    purchase.status = PurchaseStatus::Pending;
    purchase.payment_method = args.payment_method;
    purchase.created_at = clock.unix_timestamp;

    profile.purchase_count = profile
        .purchase_count
        .checked_add(1)
        .ok_or(AppError::Overflow)?;
    profile.last_login_at = clock.unix_timestamp;

    emit!(PurchaseSubmittedEvent {
        authority: purchase.authority,
        index: purchase.index,
        amount_usd_cents: purchase.amount_usd_cents,
        token_price_usd_cents: purchase.token_price_usd_cents,
        tokens_amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Purchase {} submitted: {} cents for {} token units",
        purchase.index,
        purchase.amount_usd_cents,
        tokens_amount
    );

    Ok(())
}
