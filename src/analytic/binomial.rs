//! Binomial coefficients over the full integer plane.
//!
//! C(n, k) is zero outside its natural domain (n < 0, k < 0 or k > n)
//! and exact everywhere inside it. Small coefficients are built in `u128`
//! with checked steps; once a step would overflow the computation carries
//! on in `BigUint`.

use num_bigint::BigUint;
use num_traits::One;

/// C(n, k), or 0 when (n, k) lies outside 0 ≤ k ≤ n.
pub fn binomial(n: i64, k: i64) -> BigUint {
    if n < 0 || k < 0 || k > n {
        return BigUint::default();
    }

    // C(n, k) = C(n, n-k)
    let k = k.min(n - k) as u64;
    let n = n as u64;

    let mut small: u128 = 1;
    for i in 0..k {
        // Exact at every step: c·(n-i) is divisible by (i+1)
        match small.checked_mul((n - i) as u128) {
            Some(prod) => small = prod / (i + 1) as u128,
            None => {
                let mut big = BigUint::from(small);
                for j in i..k {
                    big = big * (n - j) / (j + 1);
                }
                return big;
            }
        }
    }
    BigUint::from(small)
}

/// Row n of Pascal's triangle, C(n, 0) ..= C(n, n). Empty for n < 0.
///
/// Zipping two rows stops at the shorter one, which drops exactly the
/// terms whose coefficient is out of domain.
pub fn binomial_row(n: i64) -> BinomialRow {
    BinomialRow {
        n,
        k: 0,
        current: BigUint::one(),
    }
}

pub struct BinomialRow {
    n: i64,
    k: i64,
    current: BigUint,
}

impl Iterator for BinomialRow {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.k > self.n {
            return None;
        }
        let next = &self.current * (self.n - self.k) as u64 / (self.k + 1) as u64;
        self.k += 1;
        Some(std::mem::replace(&mut self.current, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigUint {
        s.parse().unwrap()
    }

    #[test]
    fn test_small_values() {
        assert_eq!(binomial(5, 2), BigUint::from(10u32));
        assert_eq!(binomial(6, 3), BigUint::from(20u32));
        assert_eq!(binomial(10, 7), BigUint::from(120u32));
    }

    #[test]
    fn test_edges_are_one() {
        for n in 0..=300 {
            assert_eq!(binomial(n, 0), BigUint::one());
            assert_eq!(binomial(n, n), BigUint::one());
        }
    }

    #[test]
    fn test_out_of_domain_is_zero() {
        let zero = BigUint::default();
        assert_eq!(binomial(3, -1), zero);
        assert_eq!(binomial(3, 4), zero);
        assert_eq!(binomial(-1, 0), zero);
        assert_eq!(binomial(-1, -1), zero);
        assert_eq!(binomial(-5, 2), zero);
        assert_eq!(binomial(500, 501), zero);
    }

    #[test]
    fn test_pascal_rule() {
        for n in 1..=140 {
            for k in 1..n {
                assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
            }
        }
    }

    #[test]
    fn test_beyond_u128() {
        assert_eq!(binomial(130, 65), big("95067625827960698145584333020095113100"));
        assert_eq!(
            binomial(200, 100),
            big("90548514656103281165404177077484163874504589675413336841320")
        );
    }

    #[test]
    fn test_row_sum_is_power_of_two() {
        for n in [0i64, 1, 124, 125, 300] {
            let total: BigUint = binomial_row(n).sum();
            assert_eq!(total, BigUint::one() << n as usize);
        }
    }

    #[test]
    fn test_row_matches_binomial() {
        let row: Vec<BigUint> = binomial_row(150).collect();
        assert_eq!(row.len(), 151);
        for (k, c) in row.iter().enumerate() {
            assert_eq!(*c, binomial(150, k as i64));
        }
        assert_eq!(binomial_row(-1).count(), 0);
    }
}
