use crate::constants::*;
use anchor_lang::prelude::*;
use std::cmp::Ordering;

/// One ranked row. Usernames are resolved client-side from the profile to
/// keep the entry fixed-size.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// The profile authority.
    pub authority: Pubkey,

    /// The EKH balance at the last sync.
    pub total_coins: u64,

    /// The auto-mining rate at the last sync.
    pub coins_per_second: u64,

    /// The streak at the last sync.
    pub current_streak: u32,

    /// The referral count at the last sync.
    pub total_referrals: u32,

    /// When the profile was created. First tie-break key.
    pub joined_at: i64,
}

impl LeaderboardEntry {
    pub const LEN: usize = 32 + // authority
        8 + // total_coins
        8 + // coins_per_second
        4 + // current_streak
        4 + // total_referrals
        8; // joined_at
}

#[account]
#[derive(Default)]
pub struct Leaderboard {
    /// The top entries, kept sorted best-first.
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub const LEN: usize = 8 + // discriminator
        4 + (MAX_LEADERBOARD_ENTRIES * LeaderboardEntry::LEN); // entries

    /// Total order over entries: balance descending, then account age
    /// ascending (the older profile wins the tie), then authority bytes so
    /// equal-balance same-age entries still rank deterministically.
    fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
        b.total_coins
            .cmp(&a.total_coins)
            .then(a.joined_at.cmp(&b.joined_at))
            .then(a.authority.to_bytes().cmp(&b.authority.to_bytes()))
    }

    /// Inserts or refreshes an entry, re-sorts, and drops everything below
    /// the cut.
    pub fn upsert(&mut self, entry: LeaderboardEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.authority == entry.authority)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self.entries.sort_by(Self::compare);
        self.entries.truncate(MAX_LEADERBOARD_ENTRIES);
    }

    /// The top `limit` entries with their 1-based ranks.
    pub fn ranked(&self, limit: usize) -> Vec<(u32, &LeaderboardEntry)> {
        self.entries
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, e)| (i as u32 + 1, e))
            .collect()
    }
}

/// The display tier for a rank. Pure lookup, not stateful.
pub fn tier_for_rank(rank: u32) -> &'static str {
    match rank {
        1 => "LEGENDARY",
        2..=3 => "ELITE",
        4..=10 => "MASTER",
        11..=25 => "EXPERT",
        _ => "MINER",
    }
}
