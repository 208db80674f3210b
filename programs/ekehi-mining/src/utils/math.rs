/// Computes `a * b / denominator` through a u128 intermediate. Returns None
/// on a zero denominator or if the result does not fit in a u64.
pub fn mul_div(a: u64, b: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    let result = (a as u128).checked_mul(b as u128)? / (denominator as u128);
    u64::try_from(result).ok()
}

/// The amount of presale tokens, in base units, that `amount_usd_cents` buys
/// at `token_price_usd_cents` per token.
pub fn tokens_for_usd(amount_usd_cents: u64, token_price_usd_cents: u64) -> Option<u64> {
    mul_div(
        amount_usd_cents,
        crate::constants::ONE_EKH,
        token_price_usd_cents,
    )
}
