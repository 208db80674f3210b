use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::SessionClaimedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct ClaimSession<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PROFILE, authority.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,

    #[account(
        mut,
        seeds = [SESSION, authority.key().as_ref()],
        bump,
    )]
    pub session: Account<'info, Session>,
}

pub fn handler(ctx: Context<ClaimSession>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let profile = &mut ctx.accounts.profile;
    let session = &mut ctx.accounts.session;

    // A claimed session is back at Idle, so a duplicate claim lands here.
    require!(
        session.status(now) == SessionStatus::Claimable,
        AppError::NotClaimable
    );

    profile.accrue(now)?;

    let reward = session.claim();
    profile.credit(reward)?;
    let streak = profile.register_session_claim(now);
    profile.last_login_at = now;

    emit!(SessionClaimedEvent {
        authority: ctx.accounts.authority.key(),
        reward,
        current_streak: streak,
        total_coins: profile.total_coins,
        timestamp: now,
    });

    msg!("Claimed {} EKH units, streak {}", reward, streak);

    Ok(())
}
