//! Boundary curves consumed by `Domain`.
//!
//! A curve is any pure map `t ∈ [0,1] ↦ (x(t), y(t))`. The domain only ever
//! evaluates curves; it never mutates or owns them.
//!
//! Shapes
//! - `HLine`, `VLine`: axis-aligned segments traversed from the first to the
//!   second coordinate.
//! - `Bump`: the channel floor used by the reference run (two logistic flanks
//!   meeting at `split`).
//! - `Parametric`: anything else, from a pair of closures.

use nalgebra::Vector2;

/// Parametric curve over the normalized parameter `t ∈ [0,1]`.
pub trait Curve {
    fn x(&self, t: f64) -> f64;
    fn y(&self, t: f64) -> f64;

    #[inline]
    fn point(&self, t: f64) -> Vector2<f64> {
        Vector2::new(self.x(t), self.y(t))
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    #[inline]
    fn x(&self, t: f64) -> f64 {
        (**self).x(t)
    }
    #[inline]
    fn y(&self, t: f64) -> f64 {
        (**self).y(t)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    #[inline]
    fn x(&self, t: f64) -> f64 {
        (**self).x(t)
    }
    #[inline]
    fn y(&self, t: f64) -> f64 {
        (**self).y(t)
    }
}

/// Horizontal segment `y = const`, `x` running from `x0` (t=0) to `x1` (t=1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HLine {
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
}

impl HLine {
    #[inline]
    pub fn new(x0: f64, x1: f64, y: f64) -> Self {
        Self { x0, x1, y }
    }
}

impl Curve for HLine {
    #[inline]
    fn x(&self, t: f64) -> f64 {
        self.x0 + t * (self.x1 - self.x0)
    }
    #[inline]
    fn y(&self, _t: f64) -> f64 {
        self.y
    }
}

/// Vertical segment `x = const`, `y` running from `y0` (t=0) to `y1` (t=1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VLine {
    pub x: f64,
    pub y0: f64,
    pub y1: f64,
}

impl VLine {
    #[inline]
    pub fn new(x: f64, y0: f64, y1: f64) -> Self {
        Self { x, y0, y1 }
    }
}

impl Curve for VLine {
    #[inline]
    fn x(&self, _t: f64) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self, t: f64) -> f64 {
        self.y0 + t * (self.y1 - self.y0)
    }
}

/// Channel floor with a smooth bump: two logistic flanks joined at `split`.
///
/// `y = 0.5 / (1 + exp(-3 (x + 6)))` left of `split`, `0.5 / (1 + exp(3 x))`
/// right of it, with `x` linear in `t` between `x0` and `x1`. For the reference
/// run (`x0 = -10`, `x1 = 5`, `split = -3`) both ends sit within 1e-5 of `y = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bump {
    pub x0: f64,
    pub x1: f64,
    pub split: f64,
}

impl Bump {
    #[inline]
    pub fn new(x0: f64, x1: f64, split: f64) -> Self {
        Self { x0, x1, split }
    }

    /// Floor height at abscissa `x`.
    #[inline]
    pub fn height(&self, x: f64) -> f64 {
        if x < self.split {
            0.5 / (1.0 + (-3.0 * (x + 6.0)).exp())
        } else {
            0.5 / (1.0 + (3.0 * x).exp())
        }
    }
}

impl Curve for Bump {
    #[inline]
    fn x(&self, t: f64) -> f64 {
        self.x0 + t * (self.x1 - self.x0)
    }
    #[inline]
    fn y(&self, t: f64) -> f64 {
        self.height(self.x(t))
    }
}

type CoordFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// General curve from two coordinate closures.
pub struct Parametric {
    fx: CoordFn,
    fy: CoordFn,
}

impl Parametric {
    pub fn new<FX, FY>(fx: FX, fy: FY) -> Self
    where
        FX: Fn(f64) -> f64 + Send + Sync + 'static,
        FY: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            fx: Box::new(fx),
            fy: Box::new(fy),
        }
    }

    /// Straight segment from `a` (t=0) to `b` (t=1).
    pub fn segment(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self::new(move |t| a.x + t * (b.x - a.x), move |t| a.y + t * (b.y - a.y))
    }
}

impl Curve for Parametric {
    #[inline]
    fn x(&self, t: f64) -> f64 {
        (self.fx)(t)
    }
    #[inline]
    fn y(&self, t: f64) -> f64 {
        (self.fy)(t)
    }
}

impl std::fmt::Debug for Parametric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parametric").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn lines_hit_their_endpoints() {
        let h = HLine::new(-10.0, 5.0, 3.0);
        assert_eq!(h.point(0.0), vector![-10.0, 3.0]);
        assert_eq!(h.point(1.0), vector![5.0, 3.0]);
        assert!((h.x(0.5) + 2.5).abs() < 1e-12);

        let v = VLine::new(5.0, 0.0, 3.0);
        assert_eq!(v.point(0.0), vector![5.0, 0.0]);
        assert_eq!(v.point(1.0), vector![5.0, 3.0]);
    }

    #[test]
    fn bump_ends_are_nearly_flat() {
        let b = Bump::new(-10.0, 5.0, -3.0);
        assert_eq!(b.x(0.0), -10.0);
        assert_eq!(b.x(1.0), 5.0);
        assert!(b.y(0.0).abs() < 1e-5);
        assert!(b.y(1.0).abs() < 1e-5);
        // Both flanks meet near the crest, well above the floor.
        let crest = b.height(-3.0);
        assert!(crest > 0.49 && crest < 0.5);
        assert!((b.height(-3.0 - 1e-9) - crest).abs() < 1e-3);
    }

    #[test]
    fn parametric_and_references_delegate() {
        let p = Parametric::new(|t| 2.0 * t, |t| t * t);
        let by_ref: &dyn Curve = &p;
        assert!((by_ref.x(0.25) - 0.5).abs() < 1e-12);
        assert!((by_ref.y(0.5) - 0.25).abs() < 1e-12);

        let boxed: Box<dyn Curve> = Box::new(Parametric::segment(vector![1.0, 1.0], vector![3.0, -1.0]));
        assert_eq!(boxed.point(1.0), vector![3.0, -1.0]);
        assert_eq!(boxed.point(0.5), vector![2.0, 0.0]);
    }
}
