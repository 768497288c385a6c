//! Numeric reductions used to summarise a region.

const P95: f64 = 0.95;

/// 95th percentile of `values` using linear interpolation between the two
/// closest ranks. Returns `0.0` for an empty slice.
///
/// The input is copied and sorted, so the result does not depend on the
/// order of `values`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn compute_percentile_95(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let idx = P95 * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;

    if lo == hi {
        return sorted[lo];
    }

    let frac = idx - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}

/// Arithmetic mean, summed left to right. Returns `0.0` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimal places.
///
/// Rounding is done on the exact binary value, with exact ties going to the
/// even digit: `0.125` becomes `0.12` and `0.375` becomes `0.38`, while
/// `2.675` (stored just below the tie) becomes `2.67`.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Float formatting is correctly rounded (ties to even), unlike scaling by 100.
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_empty() {
        assert_eq!(compute_percentile_95(&[]), 0.0);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(compute_percentile_95(&[42.5]), 42.5);
        assert_eq!(compute_percentile_95(&[-3.0]), -3.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        // idx = 0.95 * 1 = 0.95
        let p95 = compute_percentile_95(&[10.0, 20.0]);
        assert!((p95 - 19.5).abs() < 1e-9);

        // idx = 0.95 * 20 = 19 lands on a rank
        let values: Vec<f64> = (0..=20).map(f64::from).collect();
        assert!((compute_percentile_95(&values) - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_ignores_input_order() {
        let ascending = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let shuffled = [5.0, 1.0, 7.0, 3.0, 6.0, 2.0, 4.0];
        let descending = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

        let expected = compute_percentile_95(&ascending);
        assert_eq!(compute_percentile_95(&shuffled), expected);
        assert_eq!(compute_percentile_95(&descending), expected);
    }

    #[test]
    fn test_percentile_does_not_mutate_input() {
        let values = [3.0, 1.0, 2.0];
        let _ = compute_percentile_95(&values);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0, 9.0]), 5.0);
    }

    #[test]
    fn test_round_to_cents_ties_to_even() {
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(-0.125), -0.12);
    }

    #[test]
    fn test_round_to_cents_uses_binary_value() {
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(1.005), 1.0);
    }

    #[test]
    fn test_round_to_cents_plain() {
        assert_eq!(round_to_cents(176.739_166_666_666_65), 176.74);
        assert_eq!(round_to_cents(98.101_416_666_666_68), 98.1);
        assert_eq!(round_to_cents(12.0), 12.0);
    }

    #[test]
    fn test_round_to_cents_non_finite() {
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
    }
}
