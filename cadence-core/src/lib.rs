//! # cadence-core
//!
//! Reusable voice-activity & pause-analysis engine SDK.
//!
//! ## Architecture
//!
//! ```text
//! WAV bytes → audio::decode → AudioClip
//!                                 │
//!                       framing (RMS per fixed frame)
//!                                 │
//!                       vad (clip-global adaptive threshold)
//!                                 │
//!                       pauses (silence run-lengths)
//!                                 │
//!                       metrics → AnalysisResult
//! ```
//!
//! Every stage is a pure function over the previous stage's output. One
//! [`PauseAnalyzer::analyze`] call makes a single bounded pass per stage and
//! touches no shared state, so independent clips may be analyzed on
//! independent threads with zero coordination.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod audio;
pub mod error;
pub mod framing;
pub mod metrics;
pub mod pauses;
pub mod vad;

// Convenience re-exports for downstream crates
pub use analyzer::{AnalyzerConfig, PauseAnalyzer};
pub use audio::{clip::AudioClip, decode::decode_wav};
pub use error::CadenceError;
pub use metrics::AnalysisResult;
