use anchor_lang::prelude::*;

#[error_code]
pub enum AppError {
    #[msg("Not authorized")]
    NotAuthorized,

    #[msg("Username must be 1-32 bytes")]
    InvalidUsername,

    #[msg("Task id must be 1-32 bytes")]
    InvalidTaskId,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Invalid token price")]
    InvalidPrice,

    #[msg("A mining session is already running")]
    SessionAlreadyActive,

    #[msg("Mining session is not ready to claim")]
    NotClaimable,

    #[msg("Ad bonus cooldown is still active")]
    CooldownActive,

    #[msg("Purchase amount is below the minimum")]
    BelowMinimum,

    #[msg("Purchase has already been finalized")]
    AlreadyFinalized,

    #[msg("Referral code does not match the referrer")]
    InvalidCode,

    #[msg("Cannot refer yourself")]
    SelfReferral,

    #[msg("User has already been referred")]
    AlreadyReferred,

    #[msg("Referrer has reached the maximum number of referrals")]
    MaxReferralsReached,

    #[msg("Task has not been started")]
    TaskNotStarted,

    #[msg("Arithmetic overflow")]
    Overflow,
}
