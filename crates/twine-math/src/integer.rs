//! Integer helpers for periodic structures.

/// Greatest common divisor, iterative Euclidean algorithm.
///
/// `gcd(a, 0) == a` and `gcd(0, b) == b`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple.
///
/// `lcm(a, b) == 0` when either argument is zero.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(9, 9), 9);
    }

    #[test]
    fn test_gcd_zero() {
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_lcm_basic() {
        assert_eq!(lcm(2, 3), 6);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(1, 1), 1);
        assert_eq!(lcm(5, 10), 10);
    }

    #[test]
    fn test_lcm_zero() {
        assert_eq!(lcm(0, 7), 0);
        assert_eq!(lcm(7, 0), 0);
    }

    #[test]
    fn test_lcm_no_intermediate_overflow() {
        // a / gcd * b keeps the intermediate within range
        assert_eq!(lcm(1 << 40, 1 << 40), 1 << 40);
    }
}
