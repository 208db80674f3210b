use crate::constants::*;
use crate::errors::AppError;
use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct Profile {
    /// The authority of this profile.
    pub authority: Pubkey,

    /// Display name shown on the leaderboard.
    pub username: String,

    /// The referral code issued at profile creation. Immutable.
    pub referral_code: String,

    /// The user that referred this profile. Default pubkey if never referred.
    pub referred_by: Pubkey,

    /// The EKH balance of this profile. Only increases through crediting.
    pub total_coins: u64,

    /// Auto-mining rate in EKH units per second, derived from completed purchases.
    pub coins_per_second: u64,

    /// The total amount of presale tokens from completed purchases.
    pub total_tokens_purchased: u64,

    /// The number of purchases submitted by this profile. Seeds the next purchase PDA.
    pub purchase_count: u64,

    /// The current run of consecutive session claims.
    pub current_streak: u32,

    /// The longest streak this profile has reached.
    pub longest_streak: u32,

    /// The number of users this profile has referred.
    pub total_referrals: u32,

    /// The timestamp this profile was created.
    pub created_at: i64,

    /// The last time this user acted on their own profile.
    pub last_login_at: i64,

    /// The last time auto-mining accrual was settled.
    pub last_accrual_at: i64,

    /// The last time an ad bonus was claimed. Zero if never.
    pub last_ad_bonus_at: i64,

    /// The last time a session reward was claimed. Zero if never.
    pub last_session_claimed_at: i64,
}

impl Profile {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        (4 + MAX_USERNAME_LEN) + // username
        (4 + REFERRAL_CODE_LEN) + // referral_code
        32 + // referred_by
        8 + // total_coins
        8 + // coins_per_second
        8 + // total_tokens_purchased
        8 + // purchase_count
        4 + // current_streak
        4 + // longest_streak
        4 + // total_referrals
        8 + // created_at
        8 + // last_login_at
        8 + // last_accrual_at
        8 + // last_ad_bonus_at
        8; // last_session_claimed_at

    /// Derives the referral code for an authority. Pure function of the key,
    /// so the code can be re-derived off-chain without a lookup.
    pub fn derive_referral_code(authority: &Pubkey) -> String {
        let bytes = authority.to_bytes();
        let code: Vec<u8> = bytes[..REFERRAL_CODE_LEN]
            .iter()
            .map(|b| CODE_ALPHABET[(*b as usize) % CODE_ALPHABET.len()])
            .collect();
        // The alphabet is ASCII, so this cannot fail.
        String::from_utf8(code).unwrap_or_default()
    }

    /// Credits EKH to the balance.
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.total_coins = self
            .total_coins
            .checked_add(amount)
            .ok_or(AppError::Overflow)?;
        Ok(())
    }

    /// Settles auto-mining accrual up to `now` and returns the credited
    /// amount. The interval guard and the credit land in the same write, so
    /// the same elapsed seconds can never be credited twice.
    pub fn accrue(&mut self, now: i64) -> Result<u64> {
        let elapsed = now.saturating_sub(self.last_accrual_at);
        if elapsed <= 0 {
            return Ok(0);
        }
        self.last_accrual_at = now;

        if self.coins_per_second == 0 {
            return Ok(0);
        }
        let credited = (self.coins_per_second as u128)
            .checked_mul(elapsed as u128)
            .and_then(|v| u64::try_from(v).ok())
            .ok_or(AppError::Overflow)?;
        self.credit(credited)?;
        Ok(credited)
    }

    /// Recomputes the auto-mining rate from the completed purchase total:
    /// 1 EKH/second per 10,000 tokens. In base units the division is exact
    /// down to 10^-4 EKH/second.
    pub fn recompute_rate(&mut self) {
        self.coins_per_second = self.total_tokens_purchased / AUTO_MINING_UNIT_TOKENS;
    }

    /// Records a session claim against the streak. A claim within the streak
    /// window of the previous one extends the run; otherwise it starts over.
    pub fn register_session_claim(&mut self, now: i64) -> u32 {
        let continues = self.last_session_claimed_at > 0
            && now.saturating_sub(self.last_session_claimed_at) <= STREAK_WINDOW_SECONDS;
        self.current_streak = if continues {
            self.current_streak.saturating_add(1)
        } else {
            1
        };
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_session_claimed_at = now;
        self.current_streak
    }

    /// Whether the ad bonus cooldown has elapsed.
    pub fn ad_bonus_ready(&self, now: i64) -> bool {
        self.last_ad_bonus_at == 0
            || now.saturating_sub(self.last_ad_bonus_at) >= AD_BONUS_COOLDOWN_SECONDS
    }
}
