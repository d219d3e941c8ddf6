//! Grid configuration (tolerances and numerics).
//!
//! Defaults reproduce the reference channel run: corner tolerance 1e-5, uniform
//! ξ, tanh(3) clustering in η, and the reference blending formula.

use crate::cluster::Clustering;
use crate::error::DomainError;

/// Absolute tolerance for the corner-consistency checks.
pub const CORNER_TOL: f64 = 1e-5;

/// Corner-correction variant used by transfinite interpolation.
///
/// `Reference` keeps the historical correction terms: x uses the bottom/right
/// start points, y uses the left/top start points. It reproduces the boundary
/// exactly only for channel-like domains (vertical sides, level endpoints).
/// `Standard` is the textbook bilinear form with the four true corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    #[default]
    Reference,
    Standard,
}

/// Grid configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCfg {
    pub corner_tol: f64,
    /// Clustering along bottom/top (ξ).
    pub xi: Clustering,
    /// Clustering along left/right (η).
    pub eta: Clustering,
    pub blend: Blend,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            corner_tol: CORNER_TOL,
            xi: Clustering::Uniform,
            eta: Clustering::default(),
            blend: Blend::Reference,
        }
    }
}

impl GridCfg {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.corner_tol.is_finite() || self.corner_tol < 0.0 {
            return Err(DomainError::invalid_config(format!(
                "corner tolerance must be finite and >= 0, got {}",
                self.corner_tol
            )));
        }
        if let Some(reason) = self.xi.invalid_reason() {
            return Err(DomainError::invalid_config(format!("xi: {reason}")));
        }
        if let Some(reason) = self.eta.invalid_reason() {
            return Err(DomainError::invalid_config(format!("eta: {reason}")));
        }
        Ok(())
    }
}
