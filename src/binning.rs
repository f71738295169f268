//! Fixed-count binning.
//!
//! [`bin`] partitions the closed interval `[min, max]` into `bins` equal-width
//! intervals and reduces the samples in each to one number. The result always
//! has exactly `bins` elements. The default reduction is a count, i.e. a
//! frequency histogram.

use crate::range;
use tracing::trace;

/// How the samples that fall into one bin are reduced to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Aggregation {
    /// Number of samples in the bin.
    #[default]
    Count,
    /// Sum of the samples in the bin.
    Sum,
    /// Arithmetic mean of the samples in the bin (`0` when empty).
    Mean,
}

/// Domain bounds and reduction for [`bin`].
///
/// Unset bounds default to the extrema of the data being binned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BinOptions {
    /// Lower domain bound.
    pub min: Option<f32>,
    /// Upper domain bound.
    pub max: Option<f32>,
    /// Reduction applied per bin.
    pub aggregation: Aggregation,
}

impl BinOptions {
    /// Options with an explicit shared domain.
    #[must_use]
    pub fn domain(min: f32, max: f32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// Set the reduction.
    #[must_use]
    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }
}

/// Bin `data` into exactly `bins` aggregated values.
///
/// - A value equal to the domain maximum lands in the last bin.
/// - Values outside the domain and non-finite values (NaN, `±inf`) are ignored.
/// - Unset bounds come from the finite samples only.
/// - When the domain is a single point (`min == max`) every in-domain value lands
///   in the last bin.
/// - Bins without samples aggregate to `0`.
///
/// Bin indices are computed in `f64`, so a domain wider than `f32::MAX` still
/// spreads samples across all bins.
///
/// ```
/// use trueno_hist::binning::{bin, BinOptions};
///
/// let data: Vec<f32> = (1..=10).map(|v| v as f32).collect();
/// assert_eq!(bin(&data, 5, BinOptions::default()), vec![2.0; 5]);
/// ```
#[must_use]
pub fn bin(data: &[f32], bins: usize, opts: BinOptions) -> Vec<f32> {
    let mut sums = vec![0.0f32; bins];
    let mut counts = vec![0usize; bins];

    let lo = opts.min.unwrap_or_else(|| range::finite_min(data));
    let hi = opts.max.unwrap_or_else(|| range::finite_max(data));

    if bins == 0 || data.is_empty() || !lo.is_finite() || !hi.is_finite() || lo > hi {
        return sums;
    }

    let last = bins - 1;
    let span = f64::from(hi) - f64::from(lo);

    for &value in data {
        if !value.is_finite() || value < lo || value > hi {
            continue;
        }
        let idx = if span > 0.0 {
            let offset = (f64::from(value) - f64::from(lo)) / span * bins as f64;
            (offset.floor() as usize).min(last)
        } else {
            last
        };
        sums[idx] += value;
        counts[idx] += 1;
    }

    trace!(bins, samples = data.len(), lo, hi, "binned dataset");

    match opts.aggregation {
        Aggregation::Count => counts.iter().map(|&c| c as f32).collect(),
        Aggregation::Sum => sums,
        Aggregation::Mean => sums
            .iter()
            .zip(&counts)
            .map(|(&s, &c)| if c == 0 { 0.0 } else { s / c as f32 })
            .collect(),
    }
}

/// The `bins + 1` boundaries of the bins [`bin`] uses for the domain `[min, max]`.
///
/// Returns an empty vector when `bins == 0`.
#[must_use]
pub fn bin_edges(bins: usize, min: f32, max: f32) -> Vec<f32> {
    if bins == 0 {
        return Vec::new();
    }
    let span = f64::from(max) - f64::from(min);
    (0..=bins)
        .map(|i| {
            if i == bins {
                max
            } else {
                (f64::from(min) + span * i as f64 / bins as f64) as f32
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one_to_ten() -> Vec<f32> {
        (1..=10).map(|v| v as f32).collect()
    }

    #[test]
    fn test_count_uniform() {
        assert_eq!(bin(&one_to_ten(), 5, BinOptions::default()), vec![2.0; 5]);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let counts = bin(&[0.0, 10.0], 10, BinOptions::default());
        assert_eq!(counts.len(), 10);
        assert_eq!(counts[0], 1.0);
        assert_eq!(counts[9], 1.0);
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(bin(&[], 4, BinOptions::default()), vec![0.0; 4]);
    }

    #[test]
    fn test_zero_bins() {
        assert!(bin(&one_to_ten(), 0, BinOptions::default()).is_empty());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(bin(&[5.0], 3, BinOptions::default()), vec![0.0, 0.0, 1.0]);
        assert_eq!(bin(&[5.0, 5.0], 1, BinOptions::default()), vec![2.0]);
    }

    #[test]
    fn test_shared_domain_ignores_outside() {
        let counts = bin(&[-5.0, 0.0, 5.0, 10.0, 15.0], 2, BinOptions::domain(0.0, 10.0));
        assert_eq!(counts, vec![1.0, 2.0]);
    }

    #[test]
    fn test_shared_domain_wider_than_data() {
        // data only covers the upper half
        let counts = bin(&[6.0, 7.0, 8.0], 2, BinOptions::domain(0.0, 10.0));
        assert_eq!(counts, vec![0.0, 3.0]);
    }

    #[test]
    fn test_nan_ignored() {
        let counts = bin(&[1.0, f32::NAN, 2.0], 2, BinOptions::default());
        assert_eq!(counts, vec![1.0, 1.0]);
    }

    #[test]
    fn test_sum_and_mean() {
        let data = one_to_ten();
        let sums = bin(&data, 5, BinOptions::default().aggregation(Aggregation::Sum));
        // bins of width 1.8 over [1, 10]: {1,2} {3,4} {5,6} {7,8} {9,10}
        assert_eq!(sums, vec![3.0, 7.0, 11.0, 15.0, 19.0]);

        let means = bin(&data, 5, BinOptions::default().aggregation(Aggregation::Mean));
        assert_eq!(means, vec![1.5, 3.5, 5.5, 7.5, 9.5]);
    }

    #[test]
    fn test_mean_empty_bin_is_zero() {
        let means = bin(&[0.0, 10.0], 3, BinOptions::default().aggregation(Aggregation::Mean));
        assert_eq!(means, vec![0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_inverted_domain() {
        assert_eq!(bin(&[1.0], 2, BinOptions::domain(5.0, 1.0)), vec![0.0, 0.0]);
    }

    #[test]
    fn test_bin_edges() {
        let edges = bin_edges(5, 1.0, 10.0);
        assert_eq!(edges.len(), 6);
        assert_relative_eq!(edges[1], 2.8, epsilon = 1e-5);
        assert_eq!(edges[5], 10.0);
        assert!(bin_edges(0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_domain_wider_than_f32_max() {
        // hi - lo overflows f32 but not f64
        let counts = bin(&[-3e38, 0.0, 3e38], 4, BinOptions::default());
        assert_eq!(counts, vec![1.0, 0.0, 1.0, 1.0]);

        let edges = bin_edges(2, -3e38, 3e38);
        assert!(edges.iter().all(|e| e.is_finite()));
        assert_eq!(edges[1], 0.0);
    }

    #[test]
    fn test_infinities_ignored() {
        let counts = bin(&[1.0, 2.0, f32::INFINITY], 2, BinOptions::default());
        assert_eq!(counts, vec![1.0, 1.0]);

        let counts = bin(&[f32::NEG_INFINITY, 0.0, 4.0, 8.0], 2, BinOptions::default());
        assert_eq!(counts, vec![1.0, 2.0]);
    }

    #[test]
    fn test_only_non_finite_is_all_zero() {
        let counts = bin(&[f32::INFINITY, f32::NAN, f32::NEG_INFINITY], 3, BinOptions::default());
        assert_eq!(counts, vec![0.0; 3]);
    }

    #[test]
    fn test_aggregation_default() {
        assert_eq!(Aggregation::default(), Aggregation::Count);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Output length is always the requested bin count.
        #[test]
        fn prop_len_is_bins(
            data in prop::collection::vec(-1e6f32..1e6, 0..200),
            bins in 0usize..64
        ) {
            prop_assert_eq!(bin(&data, bins, BinOptions::default()).len(), bins);
        }

        /// With the data's own domain every sample is counted exactly once.
        #[test]
        fn prop_counts_sum_to_len(
            data in prop::collection::vec(-1e3f32..1e3, 1..200),
            bins in 1usize..64
        ) {
            let counts = bin(&data, bins, BinOptions::default());
            let total: f32 = counts.iter().sum();
            prop_assert_eq!(total as usize, data.len());
        }

        /// The maximum sample is always counted in the last bin.
        #[test]
        fn prop_max_in_last_bin(
            data in prop::collection::vec(-1e3f32..1e3, 1..200),
            bins in 1usize..64
        ) {
            let counts = bin(&data, bins, BinOptions::default());
            prop_assert!(counts[bins - 1] >= 1.0);
        }

        /// The last-bin rule holds across the whole finite `f32` range.
        #[test]
        fn prop_max_in_last_bin_extreme_range(
            data in prop::collection::vec(prop::num::f32::NORMAL, 1..100),
            bins in 1usize..64
        ) {
            let counts = bin(&data, bins, BinOptions::default());
            let total: f32 = counts.iter().sum();
            prop_assert!(counts[bins - 1] >= 1.0);
            prop_assert_eq!(total as usize, data.len());
        }
    }
}
