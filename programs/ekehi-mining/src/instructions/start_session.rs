use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::SessionStartedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct StartSession<'info> {
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

pub fn handler(ctx: Context<StartSession>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let profile = &mut ctx.accounts.profile;
    let session = &mut ctx.accounts.session;

    // A running or unclaimed-elapsed session blocks a new one.
    require!(
        session.status(now) == SessionStatus::Idle,
        AppError::SessionAlreadyActive
    );

    profile.accrue(now)?;
    profile.last_login_at = now;
    session.start(now);

    emit!(SessionStartedEvent {
        authority: ctx.accounts.authority.key(),
        reward: session.reward,
        duration_seconds: session.duration_seconds,
        timestamp: now,
    });

    msg!("Mining session started, claimable in {}s", session.duration_seconds);

    Ok(())
}
