//! Sine tone sample generation.
//!
//! Sample `i` of a tone is
//!
//! ```text
//! angle     = 2 * frequency * π / sample_rate
//! sample[i] = floor(32767 * sin(angle * i))
//! ```
//!
//! computed in `f64`. Every channel carries the same value, so the stream has
//! one entry per sample index regardless of the channel count.

use std::f64::consts::PI;

use sinewav_spec::AudioSpec;

/// Peak amplitude of the tone.
pub const AMPLITUDE: f64 = 32767.0;

/// Phase advance per sample, in radians.
pub fn angle_step(spec: &AudioSpec) -> f64 {
    2.0 * spec.frequency as f64 * PI / spec.sample_rate as f64
}

/// Amplitude at `index` for a given phase step.
#[inline]
fn amplitude_at(angle: f64, index: u64) -> i32 {
    (AMPLITUDE * (angle * index as f64).sin()).floor() as i32
}

/// Amplitude of sample `index` of the tone described by `spec`.
pub fn sample_at(spec: &AudioSpec, index: u64) -> i32 {
    amplitude_at(angle_step(spec), index)
}

/// Lazy sequence of tone samples.
///
/// Yields exactly `spec.total_sample_count()` values in index order and is
/// not restartable; build a new one to replay the tone.
///
/// The count is a `u64`, so `ExactSizeIterator` is only implemented where
/// `usize` is 64 bits wide. Use [`remaining`](Self::remaining) elsewhere.
#[derive(Debug, Clone)]
pub struct ToneSamples {
    angle: f64,
    index: u64,
    total: u64,
}

impl ToneSamples {
    /// Creates the sample sequence for `spec`.
    pub fn new(spec: &AudioSpec) -> Self {
        Self {
            angle: angle_step(spec),
            index: 0,
            total: spec.total_sample_count(),
        }
    }

    /// Number of samples not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.total - self.index
    }
}

impl Iterator for ToneSamples {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let sample = amplitude_at(self.angle, self.index);
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for ToneSamples {}

impl std::iter::FusedIterator for ToneSamples {}
