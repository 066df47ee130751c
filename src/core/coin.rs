/// Coin operators for the walker's internal two-level degree of freedom.
///
/// A coin is a 2×2 unitary acting on the (coin 0, coin 1) amplitude pair
/// held at every lattice site. The Hadamard coin is balanced: it sends
/// |0⟩ and |1⟩ to equal-weight superpositions with a relative sign.
use super::amplitude::Amplitude;
use std::f64::consts::FRAC_1_SQRT_2;

/// Row-major: matrix[row][col]
pub type Matrix2x2 = [[Amplitude; 2]; 2];

/// H = (1/√2) * [[1, 1], [1, -1]]
pub fn hadamard() -> Matrix2x2 {
    let h = Amplitude::new(FRAC_1_SQRT_2, 0.0);
    let neg_h = Amplitude::new(-FRAC_1_SQRT_2, 0.0);
    [
        [h, h],
        [h, neg_h],
    ]
}

/// Multiply the coin pair at one site by `coin`.
#[inline(always)]
pub fn apply_coin(coin: &Matrix2x2, pair: [Amplitude; 2]) -> [Amplitude; 2] {
    let [a0, a1] = pair;
    [
        coin[0][0] * a0 + coin[0][1] * a1,
        coin[1][0] * a0 + coin[1][1] * a1,
    ]
}
