//! Series utilities shared by every indicator.
//!
//! All derived series in this crate are end-aligned: the last element of an
//! output corresponds to the last element of its input. Two series of
//! different lengths are therefore compared by trimming the longer one from
//! the front until both cover the same trailing suffix.

/// Trim two series to their common end-suffix.
pub fn align_suffix<'a, 'b, A, B>(a: &'a [A], b: &'b [B]) -> (&'a [A], &'b [B]) {
    let len = a.len().min(b.len());
    (&a[a.len() - len..], &b[b.len() - len..])
}

/// Trim three series to their common end-suffix.
pub fn align_suffix3<'a, 'b, 'c, A, B, C>(
    a: &'a [A],
    b: &'b [B],
    c: &'c [C],
) -> (&'a [A], &'b [B], &'c [C]) {
    let len = a.len().min(b.len()).min(c.len());
    (
        &a[a.len() - len..],
        &b[b.len() - len..],
        &c[c.len() - len..],
    )
}

/// Keep only the last `len` values (or everything if the series is shorter).
pub fn tail<T>(values: &[T], len: usize) -> &[T] {
    &values[values.len().saturating_sub(len)..]
}

/// Highest value of each trailing window of length `window`.
///
/// Output length is `n - window + 1`; empty when `window == 0 || window > n`.
pub fn rolling_max(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |w| w.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Lowest value of each trailing window of length `window`.
pub fn rolling_min(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |w| w.iter().copied().fold(f64::INFINITY, f64::min))
}

fn rolling(values: &[f64], window: usize, f: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    if window == 0 || window > values.len() {
        return Vec::new();
    }
    values.windows(window).map(f).collect()
}

/// Signed offset of the highest value in `window`: 0 for the most recent
/// element, negative for older ones. Ties resolve to the most recent element.
///
/// Returns `None` for an empty window.
pub fn argmax_offset(window: &[f64]) -> Option<isize> {
    extreme_offset(window, |candidate, best| candidate >= best)
}

/// Signed offset of the lowest value in `window` (see [`argmax_offset`]).
pub fn argmin_offset(window: &[f64]) -> Option<isize> {
    extreme_offset(window, |candidate, best| candidate <= best)
}

fn extreme_offset(window: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<isize> {
    let last = window.len().checked_sub(1)?;
    let mut best_idx = 0;
    for (j, &v) in window.iter().enumerate().skip(1) {
        if better(v, window[best_idx]) {
            best_idx = j;
        }
    }
    Some(best_idx as isize - last as isize)
}
