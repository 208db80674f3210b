use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::events::TaskVerifiedEvent;
use crate::state::*;

#[derive(Accounts)]
pub struct VerifyTask<'info> {
    pub verifier: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump,
        has_one = verifier @ AppError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,

    /// Completion account - auto-resolved from its own authority and task id.
    #[account(
        mut,
        seeds = [TASK_COMPLETION, completion.authority.as_ref(), completion.task_id.as_bytes()],
        bump,
    )]
    pub completion: Account<'info, TaskCompletion>,

    #[account(
        mut,
        seeds = [PROFILE, completion.authority.as_ref()],
        bump,
    )]
    pub profile: Account<'info, Profile>,
}

/// Handler for verify_task instruction
///
/// Credits the task reward exactly once: the status check and the credit are
/// one atomic write, and a Verified pair short-circuits to a no-op so flaky
/// clients can retry freely. Verifying straight from Pending is the merged
/// Complete+Verify path for auto-verified tasks.
pub fn handler(ctx: Context<VerifyTask>, reward: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let completion = &mut ctx.accounts.completion;
    let profile = &mut ctx.accounts.profile;

    require!(reward > 0, AppError::InvalidAmount);

    match completion.status {
        TaskStatus::NotStarted => return Err(AppError::TaskNotStarted.into()),
        TaskStatus::Verified => {
            msg!("Task {} already verified", completion.task_id);
            return Ok(());
        }
        TaskStatus::Pending | TaskStatus::Completed => {}
    }

    if completion.completed_at == 0 {
        completion.completed_at = now;
    }
    completion.status = TaskStatus::Verified;
    completion.verified_at = now;
    completion.reward_paid = reward;

    profile.accrue(now)?;
    profile.credit(reward)?;

    emit!(TaskVerifiedEvent {
        authority: completion.authority,
        task_id: completion.task_id.clone(),
        reward,
        timestamp: now,
    });

    msg!("Task {} verified, {} EKH units credited", completion.task_id, reward);

    Ok(())
}
