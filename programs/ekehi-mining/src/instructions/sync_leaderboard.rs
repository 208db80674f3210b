use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
pub struct SyncLeaderboard<'info> {
    pub signer: Signer<'info>,

    /// Profile account - auto-resolved from profile.authority, so any signer
    /// can push any profile onto the board.
    #[account(
        mut,
        seeds = [PROFILE, profile.authority.as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,

    #[account(
        mut,
        seeds = [LEADERBOARD],
        bump,
    )]
    pub leaderboard: Account<'info, Leaderboard>,
}

/// Handler for sync_leaderboard instruction
///
/// Permissionless crank: settles the profile's accrual so the board ranks a
/// fresh balance, then upserts and re-sorts.
pub fn handler(ctx: Context<SyncLeaderboard>) -> Result<()> {
    let clock = Clock::get()?;
    let profile = &mut ctx.accounts.profile;
    let leaderboard = &mut ctx.accounts.leaderboard;

    profile.accrue(clock.unix_timestamp)?;

    leaderboard.upsert(LeaderboardEntry {
        authority: profile.authority,
        total_coins: profile.total_coins,
        coins_per_second: profile.coins_per_second,
        current_streak: profile.current_streak,
        total_referrals: profile.total_referrals,
        joined_at: profile.created_at,
    });

    msg!("Leaderboard synced for {}", profile.authority);

    Ok(())
}
