//! Parameter clustering along one grid direction.
//!
//! `Tanh { strength: k }` maps `s ↦ 1 + tanh(k (s − 1)) / tanh(k)`: fixes 0 and 1,
//! monotone, and steepest at `s = 1`, so uniform inputs land densely near 0 and
//! sparsely near 1. The grid default is `k = 3`.

/// Reparameterization of `[0,1]` applied before sampling a curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Clustering {
    Uniform,
    Tanh { strength: f64 },
}

impl Default for Clustering {
    fn default() -> Self {
        Clustering::Tanh { strength: 3.0 }
    }
}

impl Clustering {
    /// Clustered parameter for a uniform input `s ∈ [0,1]`.
    #[inline]
    pub fn map(&self, s: f64) -> f64 {
        match *self {
            Clustering::Uniform => s,
            Clustering::Tanh { strength } => 1.0 + (strength * (s - 1.0)).tanh() / strength.tanh(),
        }
    }

    /// The `n + 1` clustered values for `s = k / n`, `k = 0..=n`.
    pub fn samples(&self, n: usize) -> Vec<f64> {
        let h = 1.0 / n as f64;
        (0..=n).map(|k| self.map(h * k as f64)).collect()
    }

    /// `Some(reason)` when the transform is not a valid monotone map.
    pub(crate) fn invalid_reason(&self) -> Option<String> {
        match *self {
            Clustering::Uniform => None,
            Clustering::Tanh { strength } if !strength.is_finite() || strength <= 0.0 => {
                Some(format!("tanh clustering strength must be finite and > 0, got {strength}"))
            }
            Clustering::Tanh { .. } => None,
        }
    }
}
