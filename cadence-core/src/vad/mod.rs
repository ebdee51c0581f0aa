//! Speech/silence classification via a clip-global adaptive threshold.
//!
//! ## Algorithm
//!
//! 1. Median of all frame energies, over a sorted copy; even-length
//!    sequences use the average of the two middle elements.
//! 2. `threshold = max(MIN_THRESHOLD, median * scale)`.
//! 3. A frame is speech iff `energy > threshold` — strict, so a frame
//!    exactly at threshold is silence.
//!
//! The threshold is derived once from the whole clip's energy distribution
//! and never recomputed per frame. Deriving it from the clip's own median
//! keeps classification robust to differing recording volumes, and it is
//! also why the engine consumes complete clips rather than streams: no
//! frame can be labeled before every frame's energy is known.

use crate::framing::FrameEnergy;

/// Default scale applied to the median energy.
pub const DEFAULT_THRESHOLD_SCALE: f32 = 0.6;

/// Floor for the adaptive threshold. Keeps a digitally-silent clip from
/// producing a zero threshold that would label the noise floor as speech.
pub const MIN_THRESHOLD: f32 = 1e-12;

/// Derive the clip-global speech threshold for an energy sequence.
///
/// Returns `MIN_THRESHOLD` for an empty sequence.
pub fn adaptive_threshold(energies: &[FrameEnergy], scale: f32) -> f32 {
    if energies.is_empty() {
        return MIN_THRESHOLD;
    }
    (median(energies) * scale).max(MIN_THRESHOLD)
}

/// Label every frame speech (`true`) or silence (`false`).
///
/// Output order and length match the input exactly; an empty input yields
/// an empty label sequence without touching the median.
pub fn classify(energies: &[FrameEnergy], scale: f32) -> Vec<bool> {
    if energies.is_empty() {
        return Vec::new();
    }
    let threshold = adaptive_threshold(energies, scale);
    tracing::debug!(frames = energies.len(), threshold, "classifying frames");
    energies.iter().map(|f| f.energy > threshold).collect()
}

/// Median over a sorted copy of the energy values.
fn median(energies: &[FrameEnergy]) -> f32 {
    let mut sorted: Vec<f32> = energies.iter().map(|f| f.energy).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) * 0.5
    }
}
