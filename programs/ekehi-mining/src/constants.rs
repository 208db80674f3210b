/// One EKH, denominated in indivisible units (1 billion units = 1 EKH with 9 decimals).
pub const ONE_EKH: u64 = 1_000_000_000;

/// The length of a mining session: 24 hours.
pub const SESSION_DURATION_SECONDS: i64 = 86_400;

/// The fixed reward for a completed mining session: 2 EKH.
pub const SESSION_REWARD: u64 = ONE_EKH * 2;

/// A session claim within this window of the previous claim continues the
/// streak; outside it the streak resets to 1. 24h of mining plus 24h of grace.
pub const STREAK_WINDOW_SECONDS: i64 = 172_800;

/// The reward for watching a rewarded ad: 0.5 EKH.
pub const AD_BONUS_REWARD: u64 = ONE_EKH / 2;

/// The minimum time between ad bonus claims: 1 hour.
pub const AD_BONUS_COOLDOWN_SECONDS: i64 = 3_600;

/// The welcome bonus credited to a newly referred user: 2 EKH.
pub const REFERRED_BONUS: u64 = ONE_EKH * 2;

/// The bonus credited to the referrer per successful referral: 1 EKH.
pub const REFERRER_BONUS: u64 = ONE_EKH;

/// A referrer is credited for at most this many referrals.
pub const MAX_REFERRALS: u32 = 50;

/// Auto-mining unlock ratio: 1 EKH/second per 10,000 presale tokens.
pub const AUTO_MINING_UNIT_TOKENS: u64 = 10_000;

/// The default presale token price: $0.10 per token.
pub const TOKEN_PRICE_USD_CENTS: u64 = 10;

/// The default minimum presale purchase: $10.00.
pub const MIN_PURCHASE_USD_CENTS: u64 = 1_000;

/// The maximum length of a profile username in bytes.
pub const MAX_USERNAME_LEN: usize = 32;

/// The maximum length of a social task id in bytes. Task ids seed the
/// completion PDA, so they must fit in a single 32-byte seed.
pub const MAX_TASK_ID_LEN: usize = 32;

/// The length of an issued referral code.
pub const REFERRAL_CODE_LEN: usize = 8;

/// The referral code alphabet (Crockford base32, no I/L/O/U lookalikes).
pub const CODE_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// The number of entries kept on the leaderboard.
pub const MAX_LEADERBOARD_ENTRIES: usize = 25;

/// The seed of the config account PDA.
pub const CONFIG: &[u8] = b"config";

/// The seed of the profile account PDA.
pub const PROFILE: &[u8] = b"profile";

/// The seed of the mining session account PDA.
pub const SESSION: &[u8] = b"session";

/// The seed of the presale purchase account PDA.
pub const PURCHASE: &[u8] = b"purchase";

/// The seed of the referral account PDA.
pub const REFERRAL: &[u8] = b"referral";

/// The seed of the task completion account PDA.
pub const TASK_COMPLETION: &[u8] = b"task_completion";

/// The seed of the leaderboard account PDA.
pub const LEADERBOARD: &[u8] = b"leaderboard";
