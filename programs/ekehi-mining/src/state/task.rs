use crate::constants::*;
use anchor_lang::prelude::*;

/// The per-user position in a social task's lifecycle. Manually verified
/// tasks walk NotStarted → Pending → Completed → Verified; auto-verified
/// tasks may jump from Pending straight to Verified.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    NotStarted,
    Pending,
    Completed,
    Verified,
}

#[account]
#[derive(Default)]
pub struct TaskCompletion {
    /// The user this completion belongs to.
    pub authority: Pubkey,

    /// The task id from the external catalog. The program does not define
    /// tasks, it only tracks completion state against their ids.
    pub task_id: String,

    /// The lifecycle position of this (user, task) pair.
    pub status: TaskStatus,

    /// When the user self-reported completion. Zero until then.
    pub completed_at: i64,

    /// When the task was verified. Zero until then.
    pub verified_at: i64,

    /// The reward credited at verification. Zero until verified.
    pub reward_paid: u64,
}

impl TaskCompletion {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        (4 + MAX_TASK_ID_LEN) + // task_id
        1 + // status
        8 + // completed_at
        8 + // verified_at
        8; // reward_paid
}
