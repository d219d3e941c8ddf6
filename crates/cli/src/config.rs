//! Boundary description file for `tfigrid generate`.
//!
//! JSON layout (all fields but `curves` optional):
//! ```json
//! {
//!   "nx": 49, "ny": 19, "blend": "reference", "corner_tol": 1e-5,
//!   "curves": {
//!     "bottom": {"kind": "bump", "x0": -10, "x1": 5, "split": -3},
//!     "right":  {"kind": "vline", "x": 5, "y0": 0, "y1": 3},
//!     "top":    {"kind": "hline", "x0": -10, "x1": 5, "y": 3},
//!     "left":   {"kind": "vline", "x": -10, "y0": 0, "y1": 3}
//!   }
//! }
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tfigrid::cfg::CORNER_TOL;
use tfigrid::{Blend, Bump, Curve, GridCfg, HLine, VLine};

pub const DEFAULT_NX: u32 = 49;
pub const DEFAULT_NY: u32 = 19;

/// One boundary curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CurveSpec {
    HLine { x0: f64, x1: f64, y: f64 },
    VLine { x: f64, y0: f64, y1: f64 },
    Bump { x0: f64, x1: f64, split: f64 },
}

impl CurveSpec {
    pub fn build(&self) -> Box<dyn Curve> {
        match *self {
            CurveSpec::HLine { x0, x1, y } => Box::new(HLine::new(x0, x1, y)),
            CurveSpec::VLine { x, y0, y1 } => Box::new(VLine::new(x, y0, y1)),
            CurveSpec::Bump { x0, x1, split } => Box::new(Bump::new(x0, x1, split)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub bottom: CurveSpec,
    pub right: CurveSpec,
    pub top: CurveSpec,
    pub left: CurveSpec,
}

/// Blend selector shared by the config file and the `--blend` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BlendArg {
    Reference,
    Standard,
}

impl From<BlendArg> for Blend {
    fn from(b: BlendArg) -> Self {
        match b {
            BlendArg::Reference => Blend::Reference,
            BlendArg::Standard => Blend::Standard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nx: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ny: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend: Option<BlendArg>,
    #[serde(default = "default_corner_tol")]
    pub corner_tol: f64,
    pub curves: Sides,
}

fn default_corner_tol() -> f64 {
    CORNER_TOL
}

impl Default for BoundaryConfig {
    /// The reference channel: bumped floor from x=-10 to 5, lid at y=3.
    fn default() -> Self {
        Self {
            nx: None,
            ny: None,
            blend: None,
            corner_tol: CORNER_TOL,
            curves: Sides {
                bottom: CurveSpec::Bump {
                    x0: -10.0,
                    x1: 5.0,
                    split: -3.0,
                },
                right: CurveSpec::VLine {
                    x: 5.0,
                    y0: 0.0,
                    y1: 3.0,
                },
                top: CurveSpec::HLine {
                    x0: -10.0,
                    x1: 5.0,
                    y: 3.0,
                },
                left: CurveSpec::VLine {
                    x: -10.0,
                    y0: 0.0,
                    y1: 3.0,
                },
            },
        }
    }
}

impl BoundaryConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading boundary config {}", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing boundary config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.nx == Some(0) || self.ny == Some(0) {
            bail!(
                "grid sizes must be positive (nx={:?}, ny={:?})",
                self.nx,
                self.ny
            );
        }
        Ok(())
    }

    /// Library config; an explicit `--blend` wins over the file.
    pub fn grid_cfg(&self, blend: Option<BlendArg>) -> GridCfg {
        GridCfg {
            corner_tol: self.corner_tol,
            blend: blend.or(self.blend).map(Blend::from).unwrap_or_default(),
            ..GridCfg::default()
        }
    }

    /// Sizes with precedence flag > file > reference defaults.
    pub fn sizes(&self, nx: Option<u32>, ny: Option<u32>) -> (usize, usize) {
        (
            nx.or(self.nx).unwrap_or(DEFAULT_NX) as usize,
            ny.or(self.ny).unwrap_or(DEFAULT_NY) as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tfigrid::Domain;

    #[test]
    fn default_channel_closes() {
        let cfg = BoundaryConfig::default();
        let s = &cfg.curves;
        let (b, r, t, l) = (s.bottom.build(), s.right.build(), s.top.build(), s.left.build());
        let domain = Domain::with_cfg(b.as_ref(), r.as_ref(), t.as_ref(), l.as_ref(), cfg.grid_cfg(None));
        assert!(domain.is_ok());
        assert_eq!(cfg.sizes(None, None), (49, 19));
    }

    #[test]
    fn parses_tagged_curves() {
        let text = r#"{
            "nx": 8,
            "blend": "standard",
            "curves": {
                "bottom": {"kind": "hline", "x0": 0, "x1": 2, "y": 0},
                "right": {"kind": "vline", "x": 2, "y0": 0, "y1": 1},
                "top": {"kind": "hline", "x0": 0, "x1": 2, "y": 1},
                "left": {"kind": "vline", "x": 0, "y0": 0, "y1": 1}
            }
        }"#;
        let cfg: BoundaryConfig = serde_json::from_str(text).unwrap();
        assert_eq!(cfg.nx, Some(8));
        assert_eq!(cfg.ny, None);
        assert_eq!(cfg.corner_tol, CORNER_TOL);
        assert_eq!(
            cfg.curves.bottom,
            CurveSpec::HLine {
                x0: 0.0,
                x1: 2.0,
                y: 0.0
            }
        );
        assert_eq!(cfg.sizes(None, Some(3)), (8, 3));
        assert_eq!(cfg.sizes(Some(5), None), (5, DEFAULT_NY as usize));
        assert_eq!(cfg.grid_cfg(None).blend, Blend::Standard);
        assert_eq!(cfg.grid_cfg(Some(BlendArg::Reference)).blend, Blend::Reference);
    }

    #[test]
    fn load_rejects_zero_size_and_unknown_kind() {
        let dir = tempdir().unwrap();
        let zero = dir.path().join("zero.json");
        let mut cfg = BoundaryConfig::default();
        cfg.nx = Some(0);
        fs::write(&zero, serde_json::to_vec(&cfg).unwrap()).unwrap();
        assert!(BoundaryConfig::load(&zero).is_err());

        let unknown = dir.path().join("unknown.json");
        let text = serde_json::to_string(&BoundaryConfig::default())
            .unwrap()
            .replace("\"hline\"", "\"spline\"");
        fs::write(&unknown, text).unwrap();
        assert!(BoundaryConfig::load(&unknown).is_err());

        let ok = dir.path().join("ok.json");
        fs::write(&ok, serde_json::to_vec_pretty(&BoundaryConfig::default()).unwrap()).unwrap();
        assert_eq!(BoundaryConfig::load(&ok).unwrap(), BoundaryConfig::default());
    }
}
