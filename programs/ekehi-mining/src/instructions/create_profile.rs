use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::ProfileCreatedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct CreateProfile<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Profile::LEN,
        seeds = [PROFILE, authority.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,

    #[account(
        init,
        payer = authority,
        space = Session::LEN,
        seeds = [SESSION, authority.key().as_ref()],
        bump,
    )]
    pub session: Account<'info, Session>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateProfile>, username: String) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    require!(
        !username.is_empty() && username.len() <= MAX_USERNAME_LEN,
        AppError::InvalidUsername
    );

    let profile = &mut ctx.accounts.profile;
    profile.authority = authority;
    profile.username = username;
    profile.referral_code = Profile::derive_referral_code(&authority);
    profile.created_at = clock.unix_timestamp;
    profile.last_login_at = clock.unix_timestamp;
    profile.last_accrual_at = clock.unix_timestamp;

    // The session starts out idle; start_session stamps it.
    let session = &mut ctx.accounts.session;
    session.authority = authority;
    session.created_at = clock.unix_timestamp;

    emit!(ProfileCreatedEvent {
        authority,
        referral_code: profile.referral_code.clone(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Profile created for {} with code {}", authority, profile.referral_code);

    Ok(())
}
