use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod tests;

use instructions::*;

declare_id!("So11111111111111111111111111111111111111112");

#[program]
pub mod ekehi_mining {
    use super::*;

    // ===== INITIALIZATION =====

    /// Initialize the program config and leaderboard
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Create a user profile and its idle mining session
    pub fn create_profile(ctx: Context<CreateProfile>, username: String) -> Result<()> {
        instructions::create_profile::handler(ctx, username)
    }

    // ===== MINING INSTRUCTIONS =====

    /// Start a 24-hour mining session
    pub fn start_session(ctx: Context<StartSession>) -> Result<()> {
        instructions::start_session::handler(ctx)
    }

    /// Claim the reward of an elapsed mining session
    pub fn claim_session(ctx: Context<ClaimSession>) -> Result<()> {
        instructions::claim_session::handler(ctx)
    }

    /// Claim the cooldown-gated ad bonus
    pub fn claim_ad_bonus(ctx: Context<ClaimAdBonus>) -> Result<()> {
        instructions::claim_ad_bonus::handler(ctx)
    }

    /// Settle auto-mining accrual on a profile
    /// Permissionless crank - claiming instructions also settle on their own
    pub fn accrue_auto_mining(ctx: Context<AccrueAutoMining>) -> Result<()> {
        instructions::accrue_auto_mining::handler(ctx)
    }

    // ===== PRESALE INSTRUCTIONS =====

    /// Submit a presale purchase at the current token price
    pub fn submit_purchase(ctx: Context<SubmitPurchase>, args: SubmitPurchaseArgs) -> Result<()> {
        instructions::submit_purchase::handler(ctx, args)
    }

    /// Payment gateway callback: confirm a purchase and raise the auto-mining rate
    pub fn mark_purchase_completed(ctx: Context<MarkPurchaseCompleted>) -> Result<()> {
        instructions::mark_purchase_completed::handler(ctx)
    }

    /// Payment gateway callback: record a failed purchase
    pub fn mark_purchase_failed(ctx: Context<MarkPurchaseFailed>) -> Result<()> {
        instructions::mark_purchase_failed::handler(ctx)
    }

    // ===== REFERRAL =====

    /// Claim a referral code, crediting both parties
    pub fn claim_referral(ctx: Context<ClaimReferral>, code: String) -> Result<()> {
        instructions::claim_referral::handler(ctx, code)
    }

    // ===== SOCIAL TASKS =====

    /// Record intent to perform a social task
    pub fn start_task(ctx: Context<StartTask>, task_id: String) -> Result<()> {
        instructions::start_task::handler(ctx, task_id)
    }

    /// Record the user's self-report of a performed task
    pub fn complete_task(ctx: Context<CompleteTask>, task_id: String) -> Result<()> {
        instructions::complete_task::handler(ctx, task_id)
    }

    /// Verify a task and credit its reward exactly once
    pub fn verify_task(ctx: Context<VerifyTask>, reward: u64) -> Result<()> {
        instructions::verify_task::handler(ctx, reward)
    }

    // ===== LEADERBOARD =====

    /// Refresh a profile's entry on the top-25 board
    pub fn sync_leaderboard(ctx: Context<SyncLeaderboard>) -> Result<()> {
        instructions::sync_leaderboard::handler(ctx)
    }

    // ===== ADMIN INSTRUCTIONS =====

    /// Set admin address
    pub fn set_admin(ctx: Context<SetAdmin>, args: SetAdminArgs) -> Result<()> {
        instructions::set_admin::handler(ctx, args)
    }

    /// Set the payment gateway authority
    pub fn set_payment_authority(
        ctx: Context<SetPaymentAuthority>,
        args: SetPaymentAuthorityArgs,
    ) -> Result<()> {
        instructions::set_payment_authority::handler(ctx, args)
    }

    /// Set the social task verifier authority
    pub fn set_verifier(ctx: Context<SetVerifier>, args: SetVerifierArgs) -> Result<()> {
        instructions::set_verifier::handler(ctx, args)
    }

    /// Update the presale token price
    pub fn update_token_price(ctx: Context<UpdateTokenPrice>, new_price_usd_cents: u64) -> Result<()> {
        instructions::update_token_price::handler(ctx, new_price_usd_cents)
    }

    /// Update the minimum presale purchase
    pub fn update_min_purchase(ctx: Context<UpdateMinPurchase>, min_usd_cents: u64) -> Result<()> {
        instructions::update_min_purchase::handler(ctx, min_usd_cents)
    }
}
