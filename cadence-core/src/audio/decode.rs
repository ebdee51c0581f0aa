//! In-memory WAV decoding.
//!
//! ## Design
//!
//! The payload is decoded straight from the caller's byte buffer — no
//! temporary file is ever written, so there is nothing to release on any
//! exit path, including decode failure. Multi-channel input keeps the
//! FIRST channel of each interleaved frame; the remaining channels are
//! discarded before analysis.

use std::io::Cursor;

use crate::audio::clip::AudioClip;
use crate::error::{CadenceError, Result};

/// Decode a WAV payload into an [`AudioClip`] at its original sample rate.
///
/// Float WAVs pass through unscaled. Integer WAVs are normalised into
/// [-1.0, 1.0]: up to 16 bits per sample by `i16::MAX`, wider formats by
/// `2^(bits-1) - 1`.
///
/// # Errors
/// Returns `CadenceError::UnsupportedFormat` when the payload is not a
/// readable WAV stream.
pub fn decode_wav(bytes: &[u8]) -> Result<AudioClip> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))
        .map_err(|e| CadenceError::UnsupportedFormat(e.to_string()))?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map_err(|e| CadenceError::UnsupportedFormat(e.to_string())))
            .collect::<Result<Vec<_>>>()?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample <= 16 {
                reader
                    .samples::<i16>()
                    .map(|s| {
                        s.map(|v| (v as f32) / (i16::MAX as f32))
                            .map_err(|e| CadenceError::UnsupportedFormat(e.to_string()))
                    })
                    .collect::<Result<Vec<_>>>()?
            } else {
                let max = ((1_i64 << (spec.bits_per_sample - 1)) - 1) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| {
                        s.map(|v| (v as f32) / max)
                            .map_err(|e| CadenceError::UnsupportedFormat(e.to_string()))
                    })
                    .collect::<Result<Vec<_>>>()?
            }
        }
    };

    tracing::debug!(
        channels,
        sample_rate = spec.sample_rate,
        interleaved = interleaved.len(),
        "decoded wav payload"
    );

    if channels == 1 {
        return Ok(AudioClip::new(interleaved, spec.sample_rate));
    }

    // Channel reduction: first channel only.
    let samples: Vec<f32> = interleaved.iter().copied().step_by(channels).collect();
    Ok(AudioClip::new(samples, spec.sample_rate))
}
