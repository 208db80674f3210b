use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::state::*;

#[derive(Accounts)]
pub struct SetPaymentAuthority<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG],
        bump,
        has_one = admin @ AppError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetPaymentAuthorityArgs {
    pub new_payment_authority: Pubkey,
}

pub fn handler(ctx: Context<SetPaymentAuthority>, args: SetPaymentAuthorityArgs) -> Result<()> {
    ctx.accounts.config.payment_authority = args.new_payment_authority;
    Ok(())
}
