use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::AutoMiningAccruedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct AccrueAutoMining<'info> {
    pub signer: Signer<'info>,

    /// Profile account - auto-resolved from profile.authority, so any signer
    /// can settle any profile.
    #[account(
        mut,
        seeds = [PROFILE, profile.authority.as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,
}

/// Handler for accrue_auto_mining instruction
///
/// Permissionless crank. Accrual is a pure function of stored state and the
/// clock, so anyone may settle it; claiming instructions also settle before
/// crediting, this just keeps idle balances fresh.
pub fn handler(ctx: Context<AccrueAutoMining>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let profile = &mut ctx.accounts.profile;

    let credited = profile.accrue(now)?;

    if credited > 0 {
        emit!(AutoMiningAccruedEvent {
            authority: profile.authority,
            credited,
            total_coins: profile.total_coins,
            timestamp: now,
        });
        msg!("Accrued {} EKH units for {}", credited, profile.authority);
    }

    Ok(())
}
