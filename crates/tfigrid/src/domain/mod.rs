//! Quadrilateral domain bounded by four curves, gridded by transfinite interpolation.
//!
//! Roles and orientation
//! - `bottom` and `top` run with ξ (grid index `i`), `left` and `right` with η
//!   (grid index `j`); all four are evaluated at `t = 0` on the ξ=0 / η=0 side.
//! - Corners must meet within `GridCfg::corner_tol`:
//!   `left(0)=bottom(0)`, `bottom(1)=right(0)`, `right(1)=top(1)`, `top(0)=left(1)`.
//!
//! Generation
//! - Bottom/top are sampled at ξ_i, left/right at the clustered η_j.
//! - Interior points blend the four sampled sides minus bilinear corner
//!   corrections (`Blend` picks which corner terms).
//! - A domain starts without a grid; each `generate` replaces the previous one.

mod grid;

pub use grid::Grid;

use std::fmt;

use nalgebra::Vector2;

use crate::cfg::{Blend, GridCfg};
use crate::curve::Curve;
use crate::error::{Corner, DomainError};

const BOTTOM: usize = 0;
const RIGHT: usize = 1;
const TOP: usize = 2;
const LEFT: usize = 3;

/// Curve samples feeding one grid generation.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundarySamples {
    /// ξ_i, `i = 0..=nx`.
    pub xi: Vec<f64>,
    /// η_j, `j = 0..=ny`.
    pub eta: Vec<f64>,
    pub bottom: Vec<Vector2<f64>>,
    pub top: Vec<Vector2<f64>>,
    pub left: Vec<Vector2<f64>>,
    pub right: Vec<Vector2<f64>>,
}

/// Four borrowed boundary curves plus the (optional) generated grid.
///
/// `Clone` copies the curve references and deep-copies the grid.
#[derive(Clone)]
pub struct Domain<'a> {
    sides: [&'a dyn Curve; 4],
    cfg: GridCfg,
    grid: Option<Grid>,
}

impl<'a> Domain<'a> {
    /// Domain with default configuration. Fails if any corner is open.
    pub fn new(
        bottom: &'a dyn Curve,
        right: &'a dyn Curve,
        top: &'a dyn Curve,
        left: &'a dyn Curve,
    ) -> Result<Self, DomainError> {
        Self::with_cfg(bottom, right, top, left, GridCfg::default())
    }

    pub fn with_cfg(
        bottom: &'a dyn Curve,
        right: &'a dyn Curve,
        top: &'a dyn Curve,
        left: &'a dyn Curve,
        cfg: GridCfg,
    ) -> Result<Self, DomainError> {
        cfg.validate()?;
        let domain = Self {
            sides: [bottom, right, top, left],
            cfg,
            grid: None,
        };
        if let Err(e) = domain.check_consistency() {
            tracing::error!(error = %e, "rejecting boundary curves");
            return Err(e);
        }
        Ok(domain)
    }

    #[inline]
    pub fn cfg(&self) -> &GridCfg {
        &self.cfg
    }

    /// Check the four corners in table order; the first open corner is reported.
    pub fn check_consistency(&self) -> Result<(), DomainError> {
        let s = &self.sides;
        let pairs = [
            (Corner::LowerLeft, s[LEFT].point(0.0), s[BOTTOM].point(0.0)),
            (Corner::LowerRight, s[BOTTOM].point(1.0), s[RIGHT].point(0.0)),
            (Corner::UpperRight, s[RIGHT].point(1.0), s[TOP].point(1.0)),
            (Corner::UpperLeft, s[TOP].point(0.0), s[LEFT].point(1.0)),
        ];
        let tol = self.cfg.corner_tol;
        for (corner, a, b) in pairs {
            let d = a - b;
            // NaN gaps fail too.
            if !(d.x.abs() < tol && d.y.abs() < tol) {
                return Err(DomainError::InconsistentBoundary {
                    corner,
                    gap: (d.x, d.y),
                });
            }
        }
        Ok(())
    }

    /// Sample the four sides for an `nx × ny` grid without touching stored state.
    pub fn boundary_samples(&self, nx: usize, ny: usize) -> Result<BoundarySamples, DomainError> {
        if nx == 0 || ny == 0 {
            return Err(DomainError::InvalidGridSize { nx, ny });
        }
        let xi = self.cfg.xi.samples(nx);
        let eta = self.cfg.eta.samples(ny);
        let along = |side: usize, ts: &[f64]| -> Vec<Vector2<f64>> {
            ts.iter().map(|&t| self.sides[side].point(t)).collect()
        };
        Ok(BoundarySamples {
            bottom: along(BOTTOM, &xi),
            top: along(TOP, &xi),
            left: along(LEFT, &eta),
            right: along(RIGHT, &eta),
            xi,
            eta,
        })
    }

    /// Generate an `nx × ny` grid (`(nx+1)(ny+1)` points), replacing any previous one.
    ///
    /// Zero sizes are rejected before the stored grid is touched.
    pub fn generate(&mut self, nx: usize, ny: usize) -> Result<&Grid, DomainError> {
        let b = self.boundary_samples(nx, ny)?;
        let mut grid = Grid::zeros(nx, ny);
        for (j, &eta) in b.eta.iter().enumerate() {
            for (i, &xi) in b.xi.iter().enumerate() {
                let p = match self.cfg.blend {
                    Blend::Reference => reference_blend(&b, i, j, xi, eta),
                    Blend::Standard => standard_blend(&b, i, j, xi, eta),
                };
                let k = grid.idx(i, j);
                grid.x[k] = p.x;
                grid.y[k] = p.y;
            }
        }
        tracing::debug!(nx, ny, blend = ?self.cfg.blend, points = grid.len(), "generated grid");
        let grid: &Grid = self.grid.insert(grid);
        Ok(grid)
    }

    #[inline]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    #[inline]
    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Divisions along ξ of the current grid (0 when none).
    #[inline]
    pub fn nx(&self) -> usize {
        self.grid.as_ref().map_or(0, |g| g.nx)
    }

    /// Divisions along η of the current grid (0 when none).
    #[inline]
    pub fn ny(&self) -> usize {
        self.grid.as_ref().map_or(0, |g| g.ny)
    }

    /// Drop the stored grid (back to the ungenerated state).
    pub fn clear(&mut self) {
        self.grid = None;
    }
}

impl fmt::Debug for Domain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Domain")
            .field("cfg", &self.cfg)
            .field("nx", &self.nx())
            .field("ny", &self.ny())
            .finish_non_exhaustive()
    }
}

#[inline]
fn phi0(s: f64) -> f64 {
    1.0 - s
}

#[inline]
fn phi1(s: f64) -> f64 {
    s
}

/// Historical corner terms: x corrects with bottom(0)/right(0), y with left(0)/top(0).
fn reference_blend(b: &BoundarySamples, i: usize, j: usize, xi: f64, eta: f64) -> Vector2<f64> {
    let (l, r, bo, t) = (b.left[j], b.right[j], b.bottom[i], b.top[i]);
    let (bo0, r0, l0, t0) = (b.bottom[0], b.right[0], b.left[0], b.top[0]);
    let x = phi0(xi) * l.x + phi1(xi) * r.x + phi0(eta) * bo.x + phi1(eta) * t.x
        - phi0(xi) * phi0(eta) * bo0.x
        - phi1(xi) * phi0(eta) * r0.x
        - phi0(xi) * phi1(eta) * bo0.x
        - phi1(xi) * phi1(eta) * r0.x;
    let y = phi0(xi) * l.y + phi1(xi) * r.y + phi0(eta) * bo.y + phi1(eta) * t.y
        - phi0(xi) * phi0(eta) * l0.y
        - phi1(xi) * phi0(eta) * l0.y
        - phi0(xi) * phi1(eta) * t0.y
        - phi1(xi) * phi1(eta) * t0.y;
    Vector2::new(x, y)
}

/// Bilinear TFI with the true corners `bottom(0)`, `bottom(1)`, `top(0)`, `top(1)`.
fn standard_blend(b: &BoundarySamples, i: usize, j: usize, xi: f64, eta: f64) -> Vector2<f64> {
    let p00 = b.bottom[0];
    let p10 = b.bottom[b.bottom.len() - 1];
    let p01 = b.top[0];
    let p11 = b.top[b.top.len() - 1];
    b.left[j] * phi0(xi) + b.right[j] * phi1(xi) + b.bottom[i] * phi0(eta) + b.top[i] * phi1(eta)
        - p00 * (phi0(xi) * phi0(eta))
        - p10 * (phi1(xi) * phi0(eta))
        - p01 * (phi0(xi) * phi1(eta))
        - p11 * (phi1(xi) * phi1(eta))
}
