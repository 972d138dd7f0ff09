//! Evenly spaced sequences

use num_traits::Float;
use ubique_core::utils::{count_as, pow10};

/// `n` linearly spaced points from `a` to `b` inclusive
///
/// `n == 1` yields `[b]` and `n == 0` an empty vector.
///
/// ```rust
/// use ubique_matarrs::linspace;
///
/// assert_eq!(linspace(1.0, 10.0, 4), vec![1.0, 4.0, 7.0, 10.0]);
/// ```
pub fn linspace<T: Float>(a: T, b: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![b],
        _ => {
            let step = (b - a) / count_as::<T>(n - 1);
            let mut out: Vec<T> = (0..n - 1).map(|i| a + count_as::<T>(i) * step).collect();
            out.push(b);
            out
        }
    }
}

/// `n` logarithmically spaced points from `10^a` to `10^b` (default 10 points)
///
/// ```rust
/// use ubique_matarrs::logspace;
///
/// assert_eq!(logspace(-1.0, 1.0, 3), vec![0.1, 1.0, 10.0]);
/// ```
pub fn logspace<T: Float>(a: T, b: T, n: impl Into<Option<usize>>) -> Vec<T> {
    let ten = pow10::<T>(1);
    linspace(a, b, n.into().unwrap_or(10))
        .into_iter()
        .map(|e| ten.powf(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_edges() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(3.0, 5.0, 1), vec![5.0]);
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_logspace_values() {
        let v = logspace(0.0, 1.0, 5);
        let expected = [1.0, 1.7782794100389228, 3.1622776601683795, 5.623413251903491, 10.0];
        for (a, b) in v.iter().zip(expected) {
            assert_relative_eq!(*a, b, max_relative = 1e-12);
        }

        let v = logspace(0.0, 2.0, None);
        assert_eq!(v.len(), 10);
        assert_relative_eq!(v[1], 1.6681005372000588, max_relative = 1e-12);
        assert_relative_eq!(v[9], 100.0, max_relative = 1e-12);

        assert_eq!(logspace(1.0, 1.0, 1), vec![10.0]);
    }

    #[test]
    fn test_logspace_thousands() {
        let v = logspace(3.0, 4.0, 4);
        assert_relative_eq!(v[1], 2154.4346900318847, max_relative = 1e-12);
        assert_relative_eq!(v[2], 4641.588833612777, max_relative = 1e-12);
    }
}
