use crate::judgement::Judgement;
use crate::windows::HitWindowSet;

/// Classify an absolute timing offset (ms) against the given windows.
///
/// Windows are checked from Perfect to Miss and the first one that still
/// covers the offset wins. Offsets beyond the Miss window are also Miss.
pub fn classify(abs_offset: f64, windows: &HitWindowSet) -> Judgement {
    Judgement::ALL
        .into_iter()
        .find(|&judgement| windows.window_for(judgement) >= abs_offset)
        .unwrap_or(Judgement::Miss)
}

/// Classify a signed offset (positive = late).
pub fn classify_offset(offset_ms: f64, windows: &HitWindowSet) -> Judgement {
    classify(offset_ms.abs(), windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::DifficultyRange;

    fn flat_windows(values: [f64; 6]) -> HitWindowSet {
        let mut windows = HitWindowSet::new();
        windows.set_special_override(Some(values.map(DifficultyRange::flat)));
        windows
    }

    #[test]
    fn test_classify_boundaries_inclusive() {
        let windows = flat_windows([16.0, 40.0, 70.0, 100.0, 120.0, 160.0]);
        assert_eq!(classify(0.0, &windows), Judgement::Perfect);
        assert_eq!(classify(16.0, &windows), Judgement::Perfect);
        assert_eq!(classify(16.5, &windows), Judgement::Great);
        assert_eq!(classify(70.0, &windows), Judgement::Good);
        assert_eq!(classify(100.0, &windows), Judgement::Ok);
        assert_eq!(classify(119.9, &windows), Judgement::Meh);
        assert_eq!(classify(160.0, &windows), Judgement::Miss);
    }

    #[test]
    fn test_classify_beyond_miss_falls_back() {
        let windows = flat_windows([16.0, 40.0, 70.0, 100.0, 120.0, 160.0]);
        assert_eq!(classify(500.0, &windows), Judgement::Miss);
        assert_eq!(classify(f64::MAX, &windows), Judgement::Miss);
    }

    #[test]
    fn test_classify_unordered_windows_takes_first_match() {
        // Perfect wider than Great: the Perfect check runs first.
        let windows = flat_windows([50.0, 30.0, 70.0, 100.0, 120.0, 160.0]);
        assert_eq!(classify(45.0, &windows), Judgement::Perfect);
    }

    #[test]
    fn test_classify_offset_signed() {
        let windows = flat_windows([16.0, 40.0, 70.0, 100.0, 120.0, 160.0]);
        assert_eq!(classify_offset(-30.0, &windows), Judgement::Great);
        assert_eq!(classify_offset(30.0, &windows), Judgement::Great);
    }

    #[test]
    fn test_classify_totality_over_range() {
        let windows = HitWindowSet::new();
        let mut offset = 0.0;
        while offset < 400.0 {
            let judgement = classify(offset, &windows);
            assert!(Judgement::ALL.contains(&judgement));
            offset += 0.25;
        }
    }
}
