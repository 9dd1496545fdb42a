//! Crossover detection between two end-aligned lines.
//!
//! Inputs of unequal length are trimmed to their common end-suffix first.
//! Index 0 of the aligned pair has no predecessor and is never a cross.

use crate::series::align_suffix;

/// `a` crosses above `b` at each aligned index.
pub fn cross_up(a: &[f64], b: &[f64]) -> Vec<bool> {
    crosses(a, b, |pa, pb, ca, cb| pa <= pb && ca > cb)
}

/// `a` crosses below `b` at each aligned index.
pub fn cross_down(a: &[f64], b: &[f64]) -> Vec<bool> {
    crosses(a, b, |pa, pb, ca, cb| pa >= pb && ca < cb)
}

/// Whether `a` crossed above `b` on the final aligned index.
pub fn crossed_up(a: &[f64], b: &[f64]) -> bool {
    last_cross(a, b, |pa, pb, ca, cb| pa <= pb && ca > cb)
}

/// Whether `a` crossed below `b` on the final aligned index.
pub fn crossed_down(a: &[f64], b: &[f64]) -> bool {
    last_cross(a, b, |pa, pb, ca, cb| pa >= pb && ca < cb)
}

fn crosses(a: &[f64], b: &[f64], rule: impl Fn(f64, f64, f64, f64) -> bool) -> Vec<bool> {
    let (a, b) = align_suffix(a, b);
    if a.is_empty() {
        return Vec::new();
    }
    std::iter::once(false)
        .chain((1..a.len()).map(|i| rule(a[i - 1], b[i - 1], a[i], b[i])))
        .collect()
}

fn last_cross(a: &[f64], b: &[f64], rule: impl Fn(f64, f64, f64, f64) -> bool) -> bool {
    let (a, b) = align_suffix(a, b);
    match (a, b) {
        ([.., pa, ca], [.., pb, cb]) => rule(*pa, *pb, *ca, *cb),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_cross_above() {
        let a = [1.0, 2.0, 3.0];
        let b = [2.0, 2.0, 2.0];
        assert_eq!(cross_up(&a, &b), vec![false, false, true]);
        assert!(crossed_up(&a, &b));
        assert!(!crossed_down(&a, &b));
    }

    #[test]
    fn touching_then_rising_counts() {
        // Previous bar equal, current above.
        assert!(crossed_up(&[2.0, 2.5], &[2.0, 2.0]));
        // Staying equal is not a cross either way.
        assert!(!crossed_up(&[2.0, 2.0], &[2.0, 2.0]));
        assert!(!crossed_down(&[2.0, 2.0], &[2.0, 2.0]));
    }

    #[test]
    fn unequal_lengths_use_common_suffix() {
        let long = [9.0, 9.0, 9.0, 1.0, 3.0];
        let short = [2.0, 2.0];
        assert_eq!(cross_up(&long, &short), vec![false, true]);
        assert!(crossed_up(&long, &short));
    }

    #[test]
    fn cross_down_mirrors_cross_up() {
        let a = [3.0, 1.0, 4.0, 1.0, 5.0];
        let b = [2.0, 2.0, 2.0, 2.0, 2.0];
        assert_eq!(cross_down(&a, &b), cross_up(&b, &a));
        assert_eq!(cross_down(&a, &b), vec![false, true, false, true, false]);
    }

    #[test]
    fn fewer_than_two_points_never_cross() {
        assert!(!crossed_up(&[5.0], &[1.0]));
        assert!(!crossed_down(&[], &[]));
        assert_eq!(cross_up(&[5.0], &[1.0]), vec![false]);
        assert!(cross_up(&[], &[1.0]).is_empty());
    }
}
