use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::state::*;

#[derive(Accounts)]
pub struct UpdateTokenPrice<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG],
        bump,
        has_one = admin @ AppError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,
}

/// Handler for update_token_price instruction
///
/// Only affects purchases submitted afterwards; the price is snapshotted
/// onto each purchase.
pub fn handler(ctx: Context<UpdateTokenPrice>, new_price_usd_cents: u64) -> Result<()> {
    require!(new_price_usd_cents > 0, AppError::InvalidPrice);

    ctx.accounts.config.token_price_usd_cents = new_price_usd_cents;
    msg!("Token price updated to {} cents", new_price_usd_cents);
    Ok(())
}
