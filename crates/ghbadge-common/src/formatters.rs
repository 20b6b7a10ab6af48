//! Text formatters for badge messages.

/// Metric prefixes paired with the power of 1000 they stand for.
const METRIC_SCALES: [(&str, u64); 6] = [
    ("k", 1_000),
    ("M", 1_000_000),
    ("G", 1_000_000_000),
    ("T", 1_000_000_000_000),
    ("P", 1_000_000_000_000_000),
    ("E", 1_000_000_000_000_000_000),
];

/// Format a count the way badges usually display it.
///
/// Values below 1000 are printed verbatim. Larger values are scaled to the
/// biggest metric prefix they reach; scaled values under 10 keep one decimal
/// (dropped when it is `0`), everything else is rounded to a whole number.
/// Rounding is half-up on exact integer arithmetic.
///
/// ```
/// use ghbadge_common::formatters::metric;
///
/// assert_eq!(metric(42), "42");
/// assert_eq!(metric(1_500), "1.5k");
/// assert_eq!(metric(12_345), "12k");
/// assert_eq!(metric(999_999), "1M");
/// ```
#[allow(clippy::arithmetic_side_effects)] // u128 cannot overflow for u64 inputs
pub fn metric(n: u64) -> String {
    let value = u128::from(n);

    for (index, (prefix, limit)) in METRIC_SCALES.iter().enumerate().rev() {
        let limit = u128::from(*limit);
        if value < limit {
            continue;
        }

        let half = limit / 2;

        if value < limit * 10 {
            let tenths = (value * 10 + half) / limit;
            if tenths % 10 != 0 {
                return format!("{}.{}{prefix}", tenths / 10, tenths % 10);
            }
        }

        let whole = (value + half) / limit;
        if whole < 1000 {
            return format!("{whole}{prefix}");
        }

        // Rounded up into the next prefix (e.g. 999_999 -> 1M)
        return METRIC_SCALES
            .get(index + 1)
            .map_or_else(|| format!("{whole}{prefix}"), |(next, _)| format!("1{next}"));
    }

    n.to_string()
}
