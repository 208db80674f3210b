use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = Config::LEN,
        seeds = [CONFIG],
        bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = signer,
        space = Leaderboard::LEN,
        seeds = [LEADERBOARD],
        bump,
    )]
    pub leaderboard: Account<'info, Leaderboard>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.signer.key();
    config.payment_authority = ctx.accounts.signer.key();
    config.verifier = ctx.accounts.signer.key();
    config.token_price_usd_cents = TOKEN_PRICE_USD_CENTS;
    config.min_purchase_usd_cents = MIN_PURCHASE_USD_CENTS;

    ctx.accounts.leaderboard.entries = Vec::new();

    Ok(())
}
