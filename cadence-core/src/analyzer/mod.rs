//! `PauseAnalyzer` — one-shot orchestration of the four pipeline stages.
//!
//! ## Pipeline (per `analyze` call)
//!
//! ```text
//! 1. Validate clip (non-empty samples, non-zero sample rate)
//! 2. framing::frame_energies    → Vec<FrameEnergy>
//! 3. vad::classify              → Vec<bool>
//! 4. pauses::pause_durations_ms → Vec<u32>
//! 5. metrics::aggregate         → AnalysisResult
//! ```
//!
//! The whole engine is a pure reduction over an immutable input. No stage
//! suspends, blocks, or mutates shared state, and the analyzer holds only
//! its configuration, so one instance may serve any number of threads
//! concurrently without locks. Failures are not retried — the computation
//! is deterministic, so retrying changes nothing.

use crate::audio::clip::AudioClip;
use crate::error::{CadenceError, Result};
use crate::framing::{self, DEFAULT_FRAME_MS};
use crate::metrics::{self, AnalysisResult, DEFAULT_LONG_PAUSE_MS};
use crate::pauses;
use crate::vad::{self, DEFAULT_THRESHOLD_SCALE};

/// Configuration for `PauseAnalyzer`.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Frame duration in milliseconds. Default: 30.
    pub frame_ms: u32,
    /// Scale applied to the median frame energy to derive the speech
    /// threshold. Default: 0.6.
    pub threshold_scale: f32,
    /// Pauses longer than this count as "long". Default: 700 ms.
    pub long_pause_ms: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            threshold_scale: DEFAULT_THRESHOLD_SCALE,
            long_pause_ms: DEFAULT_LONG_PAUSE_MS,
        }
    }
}

/// The top-level analysis handle.
///
/// Holds only configuration, so it is freely `Send + Sync` and cheap to
/// clone per worker.
#[derive(Debug, Clone)]
pub struct PauseAnalyzer {
    config: AnalyzerConfig,
}

impl PauseAnalyzer {
    /// Create an analyzer after validating the configuration.
    ///
    /// # Errors
    /// `CadenceError::InvalidConfig` when `frame_ms` is zero or
    /// `threshold_scale` is not a positive finite number.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        if config.frame_ms == 0 {
            return Err(CadenceError::InvalidConfig(
                "frame_ms must be positive".into(),
            ));
        }
        if !(config.threshold_scale.is_finite() && config.threshold_scale > 0.0) {
            return Err(CadenceError::InvalidConfig(
                "threshold_scale must be a positive finite number".into(),
            ));
        }
        Ok(Self { config })
    }

    /// Current configuration (snapshot).
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one complete clip.
    ///
    /// Degenerate-but-valid inputs (clip shorter than one frame, all-speech,
    /// all-silence) are not errors; they return a well-defined zeroed or
    /// extreme-valued result.
    ///
    /// # Errors
    /// - `CadenceError::EmptyClip` when the sample buffer is empty.
    /// - `CadenceError::InvalidSampleRate` when the sample rate is zero.
    pub fn analyze(&self, clip: &AudioClip) -> Result<AnalysisResult> {
        if clip.is_empty() {
            return Err(CadenceError::EmptyClip);
        }
        if clip.sample_rate == 0 {
            return Err(CadenceError::InvalidSampleRate(clip.sample_rate));
        }

        let energies =
            framing::frame_energies(&clip.samples, clip.sample_rate, self.config.frame_ms);
        let labels = vad::classify(&energies, self.config.threshold_scale);
        let pause_runs = pauses::pause_durations_ms(&labels, self.config.frame_ms);

        tracing::debug!(
            samples = clip.samples.len(),
            sample_rate = clip.sample_rate,
            frames = energies.len(),
            pauses = pause_runs.len(),
            "clip analyzed"
        );

        Ok(metrics::aggregate(
            energies.len(),
            self.config.frame_ms,
            &pause_runs,
            self.config.long_pause_ms,
        ))
    }
}

impl Default for PauseAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }
}
