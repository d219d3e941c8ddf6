use nalgebra::Vector2;

/// Generated grid: `(nx+1) × (ny+1)` points stored row-major by `j`.
///
/// `x` and `y` always have the same length `(nx+1)(ny+1)`; index `(i, j)` lives
/// at `j (nx+1) + i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub(crate) nx: usize,
    pub(crate) ny: usize,
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
}

impl Grid {
    /// Zero-filled grid with `nx` × `ny` divisions.
    pub(crate) fn zeros(nx: usize, ny: usize) -> Self {
        let n = (nx + 1) * (ny + 1);
        Self {
            nx,
            ny,
            x: vec![0.0; n],
            y: vec![0.0; n],
        }
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= self.nx && j <= self.ny);
        j * (self.nx + 1) + i
    }

    #[inline]
    pub fn point(&self, i: usize, j: usize) -> Vector2<f64> {
        let k = self.idx(i, j);
        Vector2::new(self.x[k], self.y[k])
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.x
    }
    pub fn ys(&self) -> &[f64] {
        &self.y
    }

    /// Points in storage order (all `i` for `j = 0`, then `j = 1`, ...).
    pub fn points(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Vector2::new(x, y))
    }

    /// Axis-aligned bounds `(min, max)`.
    pub fn bounding_box(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut lo = Vector2::repeat(f64::INFINITY);
        let mut hi = Vector2::repeat(f64::NEG_INFINITY);
        for p in self.points() {
            lo = lo.inf(&p);
            hi = hi.sup(&p);
        }
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major_in_j() {
        let g = Grid::zeros(4, 2);
        assert_eq!(g.len(), 15);
        assert_eq!(g.idx(0, 0), 0);
        assert_eq!(g.idx(4, 0), 4);
        assert_eq!(g.idx(0, 1), 5);
        assert_eq!(g.idx(4, 2), 14);
        assert_eq!(g.xs().len(), g.ys().len());
    }

    #[test]
    fn bounding_box_spans_points() {
        let mut g = Grid::zeros(1, 1);
        g.x = vec![0.0, 2.0, -1.0, 1.0];
        g.y = vec![0.0, 0.5, 3.0, 1.0];
        let (lo, hi) = g.bounding_box();
        assert_eq!(lo, Vector2::new(-1.0, 0.0));
        assert_eq!(hi, Vector2::new(2.0, 3.0));
        assert_eq!(g.point(0, 1), Vector2::new(-1.0, 3.0));
    }
}
