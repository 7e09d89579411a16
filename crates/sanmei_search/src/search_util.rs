//! Bracketed root refinement shared by the solar-term searches.

use crate::error::SearchError;

/// Bisect to find the zero crossing of `f_at` between `t_a` and `t_b`.
///
/// `f_a` and `f_b` must have opposite signs (or one of them be zero).
/// Stops after `max_iter` halvings or once the bracket is narrower than
/// `convergence_days`, and returns the midpoint of the final bracket.
pub(crate) fn bisect_zero<F>(
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    f_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: &F,
) -> Result<f64, SearchError>
where
    F: Fn(f64) -> f64,
{
    if f_a * f_b > 0.0 {
        return Err(SearchError::NoConvergence("root is not bracketed"));
    }
    for _ in 0..max_iter {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid);

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < convergence_days {
            break;
        }
    }

    Ok(0.5 * (t_a + t_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_linear_root() {
        let f = |t: f64| t - 3.25;
        let root = bisect_zero(0.0, f(0.0), 10.0, f(10.0), 80, 1e-10, &f).unwrap();
        assert!((root - 3.25).abs() < 1e-9);
    }

    #[test]
    fn iteration_cap_bounds_work() {
        let f = |t: f64| t - 3.25;
        let root = bisect_zero(0.0, f(0.0), 10.0, f(10.0), 1, 1e-12, &f).unwrap();
        // one halving: [0, 10] -> [0, 5]
        assert!((root - 2.5).abs() < 1e-12);
    }

    #[test]
    fn unbracketed_is_an_error() {
        let f = |t: f64| t + 1.0;
        assert!(bisect_zero(0.0, f(0.0), 1.0, f(1.0), 10, 1e-6, &f).is_err());
    }
}
