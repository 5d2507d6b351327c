/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted average over `(value, weight)` pairs, rounded to two
/// decimals. A zero weight total yields 0.0 rather than an error; callers
/// rely on that for empty or all-zero-credit inputs.
pub fn weighted_average<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut total_points = 0.0;
    let mut total_weight = 0.0;

    for (value, weight) in pairs {
        total_points += value * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        round2(total_points / total_weight)
    } else {
        0.0
    }
}
