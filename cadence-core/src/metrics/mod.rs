//! Summary fluency metrics reduced from the pause-run durations.

use serde::{Deserialize, Serialize};

/// Pauses longer than this many milliseconds count as "long" — a
/// fluency-risk indicator.
pub const DEFAULT_LONG_PAUSE_MS: u32 = 700;

/// Fixed advisory attached to every result.
pub const FLUENCY_HINT: &str =
    "Aim for shorter and more even pauses; practice with 1-2 short sentences and gradually extend.";

/// Fixed non-diagnostic disclaimer attached to every result.
pub const DISCLAIMER: &str = "For educational purposes only, not for medical diagnosis.";

/// Summary statistics for one analyzed clip.
///
/// Computed once, immutable, returned to the caller — never persisted.
/// Field names are the engine's output contract; serde's defaults keep
/// them as-is on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Clip duration in seconds, one decimal place.
    pub duration_s: f64,
    /// Pauses per minute, one decimal place.
    pub pause_density_per_min: f64,
    /// Mean pause length in milliseconds; 0 when no pauses occurred.
    pub mean_pause_ms: u32,
    /// Percentage of pauses longer than the long-pause cutoff, in [0, 100].
    pub long_pause_pct: u8,
    /// Fixed advisory text.
    pub fluency_hint: String,
    /// Fixed non-diagnostic disclaimer.
    pub disclaimer: String,
}

/// Reduce frame count + pause durations into an [`AnalysisResult`].
///
/// Every division is guarded, so degenerate inputs (zero frames, zero
/// pauses) produce a zeroed result rather than NaN:
/// - `mean_pause_ms` is 0 without pauses, else the truncated average.
/// - `long_pause_pct` divides by `max(1, len)`, so it is 0 without pauses.
/// - `pause_density_per_min` is 0 for a zero-length clip.
pub fn aggregate(
    frame_count: usize,
    frame_ms: u32,
    pauses: &[u32],
    long_pause_ms: u32,
) -> AnalysisResult {
    let total_ms = frame_count as u64 * u64::from(frame_ms);

    let mean_pause_ms = if pauses.is_empty() {
        0
    } else {
        let sum: u64 = pauses.iter().map(|&p| u64::from(p)).sum();
        (sum as f64 / pauses.len() as f64) as u32
    };

    let long_count = pauses.iter().filter(|&&p| p > long_pause_ms).count();
    let long_pause_pct = (100.0 * long_count as f64 / pauses.len().max(1) as f64).round() as u8;

    let pause_density_per_min = if total_ms > 0 {
        round1(60_000.0 * pauses.len() as f64 / total_ms as f64)
    } else {
        0.0
    };

    AnalysisResult {
        duration_s: round1(total_ms as f64 / 1000.0),
        pause_density_per_min,
        mean_pause_ms,
        long_pause_pct,
        fluency_hint: FLUENCY_HINT.to_string(),
        disclaimer: DISCLAIMER.to_string(),
    }
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_frames_produce_a_zeroed_result() {
        let result = aggregate(0, 30, &[], DEFAULT_LONG_PAUSE_MS);
        assert_relative_eq!(result.duration_s, 0.0);
        assert_relative_eq!(result.pause_density_per_min, 0.0);
        assert_eq!(result.mean_pause_ms, 0);
        assert_eq!(result.long_pause_pct, 0);
    }

    #[test]
    fn no_pauses_still_report_duration() {
        let result = aggregate(100, 30, &[], DEFAULT_LONG_PAUSE_MS);
        assert_relative_eq!(result.duration_s, 3.0);
        assert_relative_eq!(result.pause_density_per_min, 0.0);
        assert_eq!(result.mean_pause_ms, 0);
        assert_eq!(result.long_pause_pct, 0);
    }

    #[test]
    fn mean_pause_is_truncated_to_whole_milliseconds() {
        // (100 + 101) / 2 = 100.5 → 100
        let result = aggregate(100, 30, &[100, 101], DEFAULT_LONG_PAUSE_MS);
        assert_eq!(result.mean_pause_ms, 100);
    }

    #[test]
    fn long_pause_percentage_is_rounded() {
        // 1 of 3 long → 33.33 → 33; 2 of 3 → 66.67 → 67
        let one_third = aggregate(1_000, 30, &[800, 100, 100], DEFAULT_LONG_PAUSE_MS);
        assert_eq!(one_third.long_pause_pct, 33);

        let two_thirds = aggregate(1_000, 30, &[800, 900, 100], DEFAULT_LONG_PAUSE_MS);
        assert_eq!(two_thirds.long_pause_pct, 67);
    }

    #[test]
    fn pause_exactly_at_cutoff_is_not_long() {
        let result = aggregate(1_000, 30, &[700], DEFAULT_LONG_PAUSE_MS);
        assert_eq!(result.long_pause_pct, 0);

        let result = aggregate(1_000, 30, &[701], DEFAULT_LONG_PAUSE_MS);
        assert_eq!(result.long_pause_pct, 100);
    }

    #[test]
    fn pause_density_is_per_minute() {
        // 2000 frames × 30 ms = 60 s; 3 pauses → 3.0/min
        let result = aggregate(2_000, 30, &[100, 200, 300], DEFAULT_LONG_PAUSE_MS);
        assert_relative_eq!(result.pause_density_per_min, 3.0);
    }

    #[test]
    fn reported_values_are_rounded_to_one_decimal() {
        // 33 frames × 30 ms = 990 ms → 1.0 s; one pause → 60.6/min
        let result = aggregate(33, 30, &[990], DEFAULT_LONG_PAUSE_MS);
        assert_relative_eq!(result.duration_s, 1.0);
        assert_relative_eq!(result.pause_density_per_min, 60.6);
    }

    #[test]
    fn long_pause_pct_stays_within_bounds() {
        for pauses in [&[][..], &[100][..], &[800][..], &[800, 800, 800][..]] {
            let result = aggregate(1_000, 30, pauses, DEFAULT_LONG_PAUSE_MS);
            assert!(result.long_pause_pct <= 100);
        }
    }

    #[test]
    fn result_serializes_with_contract_field_names() {
        let result = aggregate(33, 30, &[990], DEFAULT_LONG_PAUSE_MS);
        let json = serde_json::to_value(&result).expect("serialize result");

        assert_relative_eq!(json["duration_s"].as_f64().unwrap(), 1.0);
        assert_relative_eq!(json["pause_density_per_min"].as_f64().unwrap(), 60.6);
        assert_eq!(json["mean_pause_ms"], 990);
        assert_eq!(json["long_pause_pct"], 100);
        assert_eq!(json["fluency_hint"], FLUENCY_HINT);
        assert_eq!(json["disclaimer"], DISCLAIMER);

        let round_trip: AnalysisResult =
            serde_json::from_value(json).expect("deserialize result");
        assert_eq!(round_trip, result);
    }
}
