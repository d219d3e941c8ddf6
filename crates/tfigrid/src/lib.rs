//! Structured 2D grids from four boundary curves (transfinite interpolation).
//!
//! Layout
//! - `curve`: the boundary-curve capability plus the concrete shapes used by the
//!   reference channel (horizontal/vertical segments, the sigmoid bump).
//! - `cluster`: parameter clustering (uniform, tanh stretching).
//! - `cfg`: tolerances and numerics knobs bundled into `GridCfg`.
//! - `domain`: corner validation, grid generation, storage.
//! - `export`: CSV writer/reader for generated grids.
//!
//! Lifecycle: build four curves, wrap them in a `Domain` (corners checked),
//! call `generate`, then `export`.

pub mod cfg;
pub mod cluster;
pub mod curve;
pub mod domain;
pub mod error;
pub mod export;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{Blend, GridCfg};
pub use cluster::Clustering;
pub use curve::{Bump, Curve, HLine, Parametric, VLine};
pub use domain::{BoundarySamples, Domain, Grid};
pub use error::{Corner, DomainError};
pub use export::read_csv;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{Blend, GridCfg};
    pub use crate::cluster::Clustering;
    pub use crate::curve::{Bump, Curve, HLine, Parametric, VLine};
    pub use crate::domain::{Domain, Grid};
    pub use crate::error::{Corner, DomainError};
    pub use nalgebra::Vector2 as Vec2;
}
