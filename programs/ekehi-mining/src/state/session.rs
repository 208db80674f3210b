use crate::constants::*;
use anchor_lang::prelude::*;

/// The lifecycle position of a mining session. Computed from `started_at`
/// and the clock, never stored, so the countdown cannot drift across devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Active,
    Claimable,
}

#[account]
#[derive(Default)]
pub struct Session {
    /// The authority of this session account.
    pub authority: Pubkey,

    /// When the running session started. Zero while idle.
    pub started_at: i64,

    /// The session length in seconds, snapshotted at start.
    pub duration_seconds: i64,

    /// The reward paid on claim, snapshotted at start.
    pub reward: u64,

    /// The number of sessions this user has claimed.
    pub sessions_completed: u64,

    /// The timestamp this account was created.
    pub created_at: i64,
}

impl Session {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        8 + // started_at
        8 + // duration_seconds
        8 + // reward
        8 + // sessions_completed
        8; // created_at

    pub fn status(&self, now: i64) -> SessionStatus {
        if self.started_at == 0 {
            SessionStatus::Idle
        } else if self.remaining(now) > 0 {
            SessionStatus::Active
        } else {
            SessionStatus::Claimable
        }
    }

    /// Seconds until the running session can be claimed. Zero while idle.
    pub fn remaining(&self, now: i64) -> i64 {
        if self.started_at == 0 {
            return 0;
        }
        (self.started_at + self.duration_seconds - now).max(0)
    }

    /// Starts a session, snapshotting the current product parameters.
    pub fn start(&mut self, now: i64) {
        self.started_at = now;
        self.duration_seconds = SESSION_DURATION_SECONDS;
        self.reward = SESSION_REWARD;
    }

    /// Consumes the elapsed session and returns its reward. Resetting
    /// `started_at` in the same write is what makes a retried claim observe
    /// Idle and fail instead of crediting twice.
    pub fn claim(&mut self) -> u64 {
        let reward = self.reward;
        self.started_at = 0;
        self.sessions_completed = self.sessions_completed.saturating_add(1);
        reward
    }
}
