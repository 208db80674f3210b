use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::ReferralClaimedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct ClaimReferral<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PROFILE, authority.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,

    /// The profile owning the presented code - auto-resolved from its own
    /// authority field.
    #[account(
        mut,
        seeds = [PROFILE, referrer_profile.authority.as_ref()],
        bump,
    )]
    pub referrer_profile: Account<'info, Profile>,

    /// Seeded by the claimant, so a second claim from any device collides on
    /// the same address and fails to init.
    #[account(
        init,
        payer = authority,
        space = Referral::LEN,
        seeds = [REFERRAL, authority.key().as_ref()],
        bump,
    )]
    pub referral: Account<'info, Referral>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimReferral>, code: String) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let profile = &mut ctx.accounts.profile;
    let referrer_profile = &mut ctx.accounts.referrer_profile;

    require!(
        referrer_profile.referral_code == code,
        AppError::InvalidCode
    );
    require!(
        referrer_profile.authority != authority,
        AppError::SelfReferral
    );
    require!(
        profile.referred_by == Pubkey::default(),
        AppError::AlreadyReferred
    );
    require!(
        referrer_profile.total_referrals < MAX_REFERRALS,
        AppError::MaxReferralsReached
    );

    profile.accrue(now)?;
    referrer_profile.accrue(now)?;

    profile.referred_by = referrer_profile.authority;
    profile.credit(REFERRED_BONUS)?;
    profile.last_login_at = now;

    referrer_profile.credit(REFERRER_BONUS)?;
    referrer_profile.total_referrals = referrer_profile
        .total_referrals
        .checked_add(1)
        .ok_or(AppError::Overflow)?;

    let referral = &mut ctx.accounts.referral;
    referral.referred = authority;
    referral.referrer = referrer_profile.authority;
    referral.reward_claimed = true;
    referral.created_at = now;

    emit!(ReferralClaimedEvent {
        referred: authority,
        referrer: referrer_profile.authority,
        referred_bonus: REFERRED_BONUS,
        referrer_bonus: REFERRER_BONUS,
        total_referrals: referrer_profile.total_referrals,
        timestamp: now,
    });

    msg!(
        "Referral claimed: {} referred by {}",
        authority,
        referrer_profile.authority
    );

    Ok(())
}
