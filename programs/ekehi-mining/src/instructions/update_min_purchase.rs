use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::state::*;

#[derive(Accounts)]
pub struct UpdateMinPurchase<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG],
        bump,
        has_one = admin @ AppError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,
}

pub fn handler(ctx: Context<UpdateMinPurchase>, min_usd_cents: u64) -> Result<()> {
    ctx.accounts.config.min_purchase_usd_cents = min_usd_cents;
    msg!("Min purchase updated to {} cents", min_usd_cents);
    Ok(())
}
