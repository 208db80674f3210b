use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::state::*;

#[derive(Accounts)]
pub struct SetVerifier<'info> {
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
pub struct SetVerifierArgs {
    pub new_verifier: Pubkey,
}

pub fn handler(ctx: Context<SetVerifier>, args: SetVerifierArgs) -> Result<()> {
    ctx.accounts.config.verifier = args.new_verifier;
    Ok(())
}
