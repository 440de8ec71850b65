use storesearch::SearchResultItem;

/// Percentage off the initial price, truncated toward zero.
///
/// Any price data that can't produce a number yields `0`: no price block, a
/// missing or non-numeric `initial`/`final`, an `initial` of zero or less, a
/// negative `final`, or a value large enough to overflow. A price increase
/// gives a negative discount.
pub fn discount_percent(item: &SearchResultItem) -> i64 {
    item.price
        .as_ref()
        .and_then(|price| discount_from_cents(price.initial_cents?, price.final_cents?))
        .unwrap_or(0)
}

fn discount_from_cents(initial: i64, final_price: i64) -> Option<i64> {
    if initial <= 0 || final_price < 0 {
        return None;
    }
    // integer division truncates toward zero, same as dropping the fraction of 100 * (1 - final / initial)
    initial
        .checked_sub(final_price)?
        .checked_mul(100)?
        .checked_div(initial)
}
