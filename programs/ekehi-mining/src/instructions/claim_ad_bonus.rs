use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::AdBonusClaimedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct ClaimAdBonus<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PROFILE, authority.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,
}

/// Handler for claim_ad_bonus instruction
///
/// Independent of the mining session: the bonus can be claimed whether or
/// not a session is running, gated only by the cooldown.
pub fn handler(ctx: Context<ClaimAdBonus>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let profile = &mut ctx.accounts.profile;

    require!(profile.ad_bonus_ready(now), AppError::CooldownActive);

    profile.accrue(now)?;
    profile.credit(AD_BONUS_REWARD)?;
    profile.last_ad_bonus_at = now;
    profile.last_login_at = now;

    emit!(AdBonusClaimedEvent {
        authority: ctx.accounts.authority.key(),
        reward: AD_BONUS_REWARD,
        total_coins: profile.total_coins,
        timestamp: now,
    });

    msg!("Ad bonus claimed: {} EKH units", AD_BONUS_REWARD);

    Ok(())
}
