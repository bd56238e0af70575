//! Oversampled magnitude spectra.
//!
//! Zero-padding a sequence before the transform interpolates its spectrum at
//! finer frequency resolution, which is what makes window sidelobes readable
//! on a figure. Levels are in dB, normalised to 0 dB at DC.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

use crate::error::AnalysisError;

/// Default spectral oversampling factor.
pub const DEFAULT_OVERSAMPLE: usize = 64;

/// Guards `log10(0)` for exactly-zero bins.
const DB_EPSILON: f64 = 1e-30;

/// An oversampled magnitude spectrum.
///
/// `bins` are fractional bin numbers aligned to the original (non-padded)
/// resolution, so bin 1.0 is the first bin the unpadded transform would have.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Fractional bin axis, `i / oversample`.
    pub bins: Vec<f64>,
    /// Magnitude per bin in dB, exactly 0 at DC.
    pub magnitude_db: Vec<f64>,
}

/// Estimate the magnitude spectrum of `samples`, zero-padded `oversample` times.
///
/// The padded sequence has length `samples.len() * oversample`; a real-input
/// transform of it yields `padded / 2 + 1` bins. Magnitudes are converted with
/// `20 log10(|X| + 1e-30)` and shifted so the DC bin reads exactly 0 dB.
pub fn estimate_spectrum(samples: &[f64], oversample: usize) -> Result<Spectrum, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let oversample = oversample.max(1);
    let padded_len = samples.len() * oversample;

    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(padded_len);
    buffer.extend(samples.iter().map(|&x| Complex::new(x, 0.0)));
    buffer.resize(padded_len, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(padded_len);
    fft.process(&mut buffer);

    // Real input: keep the non-redundant half.
    let half = padded_len / 2 + 1;
    let mut magnitude_db: Vec<f64> = buffer[..half]
        .iter()
        .map(|x| 20.0 * (x.norm() + DB_EPSILON).log10())
        .collect();
    let reference = magnitude_db[0];
    for db in &mut magnitude_db {
        *db -= reference;
    }

    let bins = (0..half).map(|i| i as f64 / oversample as f64).collect();
    Ok(Spectrum { bins, magnitude_db })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            estimate_spectrum(&[], DEFAULT_OVERSAMPLE),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn dc_bin_is_exactly_zero() {
        let samples = [0.3, 0.9, -0.2, 0.5];
        let spectrum = estimate_spectrum(&samples, 16).unwrap();
        assert_eq!(spectrum.magnitude_db[0], 0.0);
    }

    #[test]
    fn bin_count_matches_padded_half_spectrum() {
        for (len, oversample) in [(4usize, 16usize), (7, 64), (1, 8), (5, 1)] {
            let samples = vec![1.0; len];
            let spectrum = estimate_spectrum(&samples, oversample).unwrap();
            assert_eq!(spectrum.bins.len(), len * oversample / 2 + 1);
            assert_eq!(spectrum.magnitude_db.len(), spectrum.bins.len());
        }
    }

    #[test]
    fn bin_axis_is_fractional_at_original_resolution() {
        let spectrum = estimate_spectrum(&[1.0, 0.0], 4).unwrap();
        assert_eq!(spectrum.bins, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn unit_impulse_has_flat_spectrum() {
        let spectrum = estimate_spectrum(&[1.0], 8).unwrap();
        for &db in &spectrum.magnitude_db {
            assert!(db.abs() < 1e-9, "impulse bin deviates from 0 dB: {db}");
        }
    }

    #[test]
    fn rectangular_pulse_nulls_are_deep() {
        // [1, 1] padded 4x has a transform null at the Nyquist bin.
        let spectrum = estimate_spectrum(&[1.0, 1.0], 4).unwrap();
        let nyquist = *spectrum.magnitude_db.last().unwrap();
        assert!(nyquist < -100.0, "expected deep null, got {nyquist} dB");
    }

    #[test]
    fn zero_oversample_is_clamped_to_identity_padding() {
        let spectrum = estimate_spectrum(&[1.0, -1.0], 0).unwrap();
        assert_eq!(spectrum.bins.len(), 2);
    }
}
