//! Uniform sampling utilities.

/// `count` evenly spaced values from `start` to `end`, inclusive of both
/// endpoints.
///
/// `count == 1` yields `[start]`; `count == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(1.0, 3.0, 5);
        assert_eq!(v.len(), 5);
        assert_relative_eq!(v[0], 1.0);
        assert_relative_eq!(v[4], 3.0);
        assert_relative_eq!(v[2], 2.0);
    }

    #[test]
    fn test_linspace_descending() {
        let v = linspace(1.0, 0.0, 3);
        assert_relative_eq!(v[0], 1.0);
        assert_relative_eq!(v[1], 0.5);
        assert_relative_eq!(v[2], 0.0);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.25, 1.0, 1), vec![0.25]);
    }

    #[test]
    fn test_linspace_spacing_uniform() {
        let tol = twine_core::Tolerance::default_precision();
        let v = linspace(0.0, 1.0, 11);
        for w in v.windows(2) {
            assert!(tol.linear_eq(w[1] - w[0], 0.1), "uneven spacing: {:?}", w);
        }
    }

    #[test]
    fn test_linspace_constant_span() {
        let v = linspace(0.5, 0.5, 4);
        assert!(v.iter().all(|&x| x == 0.5));
    }
}
