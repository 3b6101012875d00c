/// Windows produced by the classic (score V1) client, Perfect first.
///
/// Every value is `floor(base * k) + 0.5`, which reproduces the old
/// integer-millisecond comparisons exactly.
pub(crate) fn classic_windows(difficulty: f64, k: f64, converted: bool) -> [f64; 6] {
    if converted {
        // Ties round to even, matching the old client.
        let od_rounded = difficulty.round_ties_even();
        let (great, good) = if od_rounded > 4.0 { (34.0, 67.0) } else { (47.0, 77.0) };
        [16.0, great, good, 97.0, 121.0, 158.0].map(|base| legacy_round(base * k))
    } else {
        let inverse = (10.0 - difficulty).clamp(0.0, 10.0);
        [
            16.0,
            34.0 + 3.0 * inverse,
            67.0 + 3.0 * inverse,
            97.0 + 3.0 * inverse,
            121.0 + 3.0 * inverse,
            158.0 + 3.0 * inverse,
        ]
        .map(|base| legacy_round(base * k))
    }
}

/// `floor(value) + 0.5`
pub(crate) fn legacy_round(value: f64) -> f64 {
    value.floor() + 0.5
}
