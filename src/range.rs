//! Extrema over sample collections.
//!
//! Empty input never panics: [`max`] yields `f32::NEG_INFINITY` and [`min`]
//! yields `f32::INFINITY`, the identities of the respective reductions, so
//! nested reductions (max of per-dataset maxima) compose without special cases.
//! NaN samples are skipped. The `finite_*` variants also skip `±inf`, for
//! callers that need a domain they can subtract from.
//!
//! Reductions dispatch to trueno's SIMD backends.

use trueno::Vector;

/// Largest non-NaN value in `values`.
///
/// Returns `f32::NEG_INFINITY` if `values` has no non-NaN element.
#[must_use]
pub fn max(values: &[f32]) -> f32 {
    retained(values, |v| !v.is_nan()).map_or(f32::NEG_INFINITY, |v| {
        Vector::from_vec(v).max().unwrap_or(f32::NEG_INFINITY)
    })
}

/// Smallest non-NaN value in `values`.
///
/// Returns `f32::INFINITY` if `values` has no non-NaN element.
#[must_use]
pub fn min(values: &[f32]) -> f32 {
    retained(values, |v| !v.is_nan()).map_or(f32::INFINITY, |v| {
        Vector::from_vec(v).min().unwrap_or(f32::INFINITY)
    })
}

/// Largest finite value in `values`.
///
/// Returns `f32::NEG_INFINITY` if `values` has no finite element.
#[must_use]
pub fn finite_max(values: &[f32]) -> f32 {
    retained(values, f32::is_finite).map_or(f32::NEG_INFINITY, |v| {
        Vector::from_vec(v).max().unwrap_or(f32::NEG_INFINITY)
    })
}

/// Smallest finite value in `values`.
///
/// Returns `f32::INFINITY` if `values` has no finite element.
#[must_use]
pub fn finite_min(values: &[f32]) -> f32 {
    retained(values, f32::is_finite).map_or(f32::INFINITY, |v| {
        Vector::from_vec(v).min().unwrap_or(f32::INFINITY)
    })
}

/// Maximum of `accessor(item)` over a collection.
///
/// ```
/// use trueno_hist::range;
///
/// let sets = [vec![1.0, 9.0], vec![4.0]];
/// assert_eq!(range::max_by(&sets, |s| range::max(s)), 9.0);
/// ```
#[must_use]
pub fn max_by<I, F>(items: I, accessor: F) -> f32
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f32,
{
    let values: Vec<f32> = items.into_iter().map(accessor).collect();
    max(&values)
}

/// Minimum of `accessor(item)` over a collection.
#[must_use]
pub fn min_by<I, F>(items: I, accessor: F) -> f32
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f32,
{
    let values: Vec<f32> = items.into_iter().map(accessor).collect();
    min(&values)
}

/// The samples passing `keep`, or `None` when nothing is left.
fn retained(values: &[f32], keep: impl Fn(f32) -> bool) -> Option<Vec<f32>> {
    let clean: Vec<f32> = values.iter().copied().filter(|&v| keep(v)).collect();
    (!clean.is_empty()).then_some(clean)
}
