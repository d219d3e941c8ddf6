//! Errors surfaced by domain construction, generation, and export.

use std::fmt;
use std::io;

/// Corner of the quadrilateral, in the order the consistency table checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    /// `left(0) == bottom(0)`
    LowerLeft,
    /// `bottom(1) == right(0)`
    LowerRight,
    /// `right(1) == top(1)`
    UpperRight,
    /// `top(0) == left(1)`
    UpperLeft,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Corner::LowerLeft => "lower-left",
            Corner::LowerRight => "lower-right",
            Corner::UpperRight => "upper-right",
            Corner::UpperLeft => "upper-left",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum DomainError {
    /// Two curve endpoints meeting at `corner` are farther apart than the tolerance.
    InconsistentBoundary { corner: Corner, gap: (f64, f64) },
    /// `nx` or `ny` is zero.
    InvalidGridSize { nx: usize, ny: usize },
    /// Export or query before any `generate`.
    NoGrid,
    InvalidConfig { reason: String },
    Io(io::Error),
    /// Malformed CSV input (1-based line number; 0 for whole-file problems).
    Parse { line: usize, reason: String },
}

impl DomainError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InconsistentBoundary { corner, gap } => write!(
                f,
                "no valid boundary curves: {corner} corner mismatch (dx={:e}, dy={:e})",
                gap.0, gap.1
            ),
            DomainError::InvalidGridSize { nx, ny } => {
                write!(f, "invalid grid size nx={nx}, ny={ny} (both must be > 0)")
            }
            DomainError::NoGrid => write!(f, "no grid has been generated"),
            DomainError::InvalidConfig { reason } => write!(f, "invalid grid config: {reason}"),
            DomainError::Io(e) => write!(f, "grid i/o failed: {e}"),
            DomainError::Parse { line, reason } => write!(f, "grid csv line {line}: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DomainError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DomainError {
    fn from(e: io::Error) -> Self {
        DomainError::Io(e)
    }
}
