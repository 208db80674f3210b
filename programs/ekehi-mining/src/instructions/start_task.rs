use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::AppError;
use crate::state::*;

#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct StartTask<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = TaskCompletion::LEN,
        seeds = [TASK_COMPLETION, authority.key().as_ref(), task_id.as_bytes()],
        bump,
    )]
    pub completion: Account<'info, TaskCompletion>,

    pub system_program: Program<'info, System>,
}

/// Handler for start_task instruction
///
/// Records the intent to perform an externally defined task. Idempotent:
/// re-starting a task that already moved on is a no-op, not an error.
pub fn handler(ctx: Context<StartTask>, task_id: String) -> Result<()> {
    require!(
        !task_id.is_empty() && task_id.len() <= MAX_TASK_ID_LEN,
        AppError::InvalidTaskId
    );

    let completion = &mut ctx.accounts.completion;

    if completion.authority == Pubkey::default() {
        completion.authority = ctx.accounts.authority.key();
        completion.task_id = task_id;
    }

    if completion.status == TaskStatus::NotStarted {
        completion.status = TaskStatus::Pending;
        msg!("Task {} started", completion.task_id);
    }

    Ok(())
}
