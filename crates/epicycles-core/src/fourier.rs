//! Discrete Fourier decomposition of a closed stroke.
//!
//! Each sample `x + i·y` is one step of a periodic signal. The transform is
//! evaluated by direct summation over a centered frequency window
//! `-⌊n/2⌋ ..= -⌊n/2⌋ + n - 1`, which yields `n - 1` rotating terms plus the
//! constant (DC) term. Strokes are at most a few hundred samples, so the
//! quadratic cost is fine.

use crate::constants::MIN_DFT_SAMPLES;
use crate::curve::PointSequence;
use crate::geometry::{complex_mul, phasor, Complex};
use std::f64::consts::TAU;
use thiserror::Error;

/// Why a stroke produced no spectrum.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SpectrumError {
    #[error("too few samples for a spectrum: got {got}, need at least {min}")]
    TooFewSamples { got: usize, min: usize },

    #[error("stroke contains non-finite coordinates")]
    NonFinite,
}

/// One rotating vector of the epicycle system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourierTerm {
    pub frequency: i32,
    pub amplitude: Complex,
    pub magnitude: f64,
}

impl FourierTerm {
    /// The term's vector after `phase` radians of base rotation.
    #[inline]
    pub fn rotated(&self, phase: f64) -> Complex {
        complex_mul(self.amplitude, phasor(phase * self.frequency as f64))
    }
}

/// Ranked terms plus the centroid, fixed for the lifetime of one stroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    pub dc: Complex,
    /// Sorted by magnitude, largest first. Never re-sorted.
    pub terms: Vec<FourierTerm>,
}

impl Spectrum {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Largest magnitude, or 0 for an empty spectrum.
    pub fn max_magnitude(&self) -> f64 {
        self.terms.first().map_or(0.0, |t| t.magnitude)
    }
}

/// Transform a closed curve into a ranked spectrum.
pub fn decompose(curve: &PointSequence) -> Result<Spectrum, SpectrumError> {
    decompose_points(curve.points())
}

pub fn decompose_points(points: &[Complex]) -> Result<Spectrum, SpectrumError> {
    let n = points.len();
    if n < MIN_DFT_SAMPLES {
        return Err(SpectrumError::TooFewSamples {
            got: n,
            min: MIN_DFT_SAMPLES,
        });
    }
    if points.iter().any(|p| !p.is_finite()) {
        return Err(SpectrumError::NonFinite);
    }

    let half = (n / 2) as i32;
    let inv_n = 1.0 / n as f64;
    let mut dc = Complex::ZERO;
    let mut terms = Vec::with_capacity(n - 1);
    for k in -half..(-half + n as i32) {
        let step = -TAU * k as f64 * inv_n;
        let mut sum = Complex::ZERO;
        for (j, &p) in points.iter().enumerate() {
            sum += complex_mul(p, phasor(step * j as f64));
        }
        let coeff = sum * inv_n;
        if k == 0 {
            dc = coeff;
        } else {
            terms.push(FourierTerm {
                frequency: k,
                amplitude: coeff,
                magnitude: coeff.length(),
            });
        }
    }
    terms.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    Ok(Spectrum { dc, terms })
}
