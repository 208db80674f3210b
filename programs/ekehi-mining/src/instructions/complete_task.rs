use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::state::*;

#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct CompleteTask<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TASK_COMPLETION, authority.key().as_ref(), task_id.as_bytes()],
        bump,
    )]
    pub completion: Account<'info, TaskCompletion>,
}

/// Handler for complete_task instruction
///
/// Records the user's self-report. No reward is paid here; for manually
/// verified tasks the credit happens at verify_task.
pub fn handler(ctx: Context<CompleteTask>, _task_id: String) -> Result<()> {
    let clock = Clock::get()?;
    let completion = &mut ctx.accounts.completion;

    match completion.status {
        TaskStatus::NotStarted => return Err(AppError::TaskNotStarted.into()),
        TaskStatus::Pending => {
            completion.status = TaskStatus::Completed;
            completion.completed_at = clock.unix_timestamp;
            msg!("Task {} completed, awaiting verification", completion.task_id);
        }
        // Already past this transition; retries are no-ops.
        TaskStatus::Completed | TaskStatus::Verified => {}
    }

    Ok(())
}
