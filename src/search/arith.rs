//! Exact integer helpers used by the derivation steps.
//!
//! All checks are done in integer arithmetic. A derivation that is not
//! exact yields `None` and the branch is pruned.

/// Floor square root by integer Newton iteration.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // (n + 1) / 2 is never below the root, so the iteration descends.
    let mut x = n / 2 + 1;
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Returns `r >= 0` with `r * r == n`, or `None` if `n` is negative or not
/// a perfect square.
pub fn exact_sqrt(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    let root = isqrt(n as u64) as i64;
    (root * root == n).then_some(root)
}

/// Returns `num / den` when the division is exact.
///
/// A zero denominator, a nonzero remainder or an overflowing quotient all
/// give `None`.
pub fn exact_div(num: i64, den: i64) -> Option<i64> {
    if den == 0 || num.checked_rem(den)? != 0 {
        return None;
    }
    num.checked_div(den)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_isqrt_small() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, &root) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u64), root, "isqrt({n})");
        }
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(exact_sqrt(0), Some(0));
        assert_eq!(exact_sqrt(121), Some(11));
        // (G + I)^3 - 4 at G + I = 5, the value behind H = A +- 11
        assert_eq!(exact_sqrt(5 * 5 * 5 - 4), Some(11));
        assert_eq!(exact_sqrt(2 * 2 * 2 - 4), Some(2));
        assert_eq!(exact_sqrt(3 * 3 * 3 - 4), None);
        assert_eq!(exact_sqrt(-4), None);
    }

    #[test]
    fn test_exact_sqrt_near_float_precision() {
        // Just above 2^53, where f64 stops representing every integer.
        let r: i64 = 94_906_267;
        let n = r * r;
        assert_eq!(exact_sqrt(n), Some(r));
        assert_eq!(exact_sqrt(n + 1), None);
        assert_eq!(exact_sqrt(n - 1), None);
    }

    #[test]
    fn test_exact_div() {
        assert_eq!(exact_div(412, 16), None);
        assert_eq!(exact_div(400, 16), Some(25));
        assert_eq!(exact_div(1000, 100), Some(10));
        assert_eq!(exact_div(-27, 3), Some(-9));
        assert_eq!(exact_div(27, -3), Some(-9));
        assert_eq!(exact_div(7, 0), None);
        assert_eq!(exact_div(i64::MIN, -1), None);
    }

    proptest! {
        #[test]
        fn prop_isqrt_brackets_root(n in any::<u64>()) {
            let r = isqrt(n) as u128;
            let n = n as u128;
            prop_assert!(r * r <= n);
            prop_assert!((r + 1) * (r + 1) > n);
        }

        #[test]
        fn prop_exact_sqrt_of_squares(r in 0i64..3_000_000_000) {
            prop_assert_eq!(exact_sqrt(r * r), Some(r));
            if r > 0 {
                prop_assert_eq!(exact_sqrt(r * r + 1), None);
                prop_assert_eq!(exact_sqrt(r * r - 1), None);
            }
        }

        #[test]
        fn prop_exact_div_matches_product(q in -100_000i64..100_000, d in 1i64..10_000, off in 1i64..10_000) {
            prop_assert_eq!(exact_div(q * d, d), Some(q));
            prop_assert_eq!(exact_div(q * d, -d), Some(-q));
            if off % d != 0 {
                prop_assert_eq!(exact_div(q * d + off, d), None);
            }
        }
    }
}
