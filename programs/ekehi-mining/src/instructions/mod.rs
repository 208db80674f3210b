// Mining instructions
pub mod start_session;
pub mod claim_session;
pub mod claim_ad_bonus;
pub mod accrue_auto_mining;

// Presale instructions
pub mod submit_purchase;
pub mod mark_purchase_completed;
pub mod mark_purchase_failed;

// Referral instructions
pub mod claim_referral;

// Social task instructions
pub mod start_task;
pub mod complete_task;
pub mod verify_task;

// Leaderboard
pub mod sync_leaderboard;

// Profile
pub mod create_profile;

// Admin instructions
pub mod initialize;
pub mod set_admin;
pub mod set_payment_authority;
pub mod set_verifier;
pub mod update_token_price;
pub mod update_min_purchase;

// Glob re-exports are needed for Anchor macro to generate client accounts
// The ambiguous `handler` name is intentional - each module has its own handler
#[allow(ambiguous_glob_reexports)]
pub use start_session::*;
#[allow(ambiguous_glob_reexports)]
pub use claim_session::*;
#[allow(ambiguous_glob_reexports)]
pub use claim_ad_bonus::*;
#[allow(ambiguous_glob_reexports)]
pub use accrue_auto_mining::*;
#[allow(ambiguous_glob_reexports)]
pub use submit_purchase::*;
#[allow(ambiguous_glob_reexports)]
pub use mark_purchase_completed::*;
#[allow(ambiguous_glob_reexports)]
pub use mark_purchase_failed::*;
#[allow(ambiguous_glob_reexports)]
pub use claim_referral::*;
#[allow(ambiguous_glob_reexports)]
pub use start_task::*;
#[allow(ambiguous_glob_reexports)]
pub use complete_task::*;
#[allow(ambiguous_glob_reexports)]
pub use verify_task::*;
#[allow(ambiguous_glob_reexports)]
pub use sync_leaderboard::*;
#[allow(ambiguous_glob_reexports)]
pub use create_profile::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize::*;
#[allow(ambiguous_glob_reexports)]
pub use set_admin::*;
#[allow(ambiguous_glob_reexports)]
pub use set_payment_authority::*;
#[allow(ambiguous_glob_reexports)]
pub use set_verifier::*;
#[allow(ambiguous_glob_reexports)]
pub use update_token_price::*;
#[allow(ambiguous_glob_reexports)]
pub use update_min_purchase::*;
