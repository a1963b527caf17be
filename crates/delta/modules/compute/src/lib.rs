//! Pure delta computation over a breakpoint table.
//!
//! The delta is the dimensionless uniform scale factor mapping a baseline
//! breakpoint onto the current viewport without distortion, bounded by
//! whichever axis is more constraining. Computation is pure and
//! idempotent; publishing the value anywhere is the caller's concern.

#![forbid(unsafe_code)]

use delta_config::{Breakpoint, ConfigTable, Orientation};
use thiserror::Error;

/// Host viewport dimensions in pixels at the moment of computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Landscape iff strictly wider than tall; a square viewport is
    /// portrait.
    #[inline]
    pub const fn orientation(self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Rejected viewport dimensions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewportError {
    /// One or both dimensions were zero.
    #[error("viewport dimensions must be positive, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

/// Outcome of one delta computation: the scale factor plus the
/// orientation and breakpoint it was derived from. Transient, recomputed
/// on every invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeltaResult {
    pub delta: f64,
    pub orientation: Orientation,
    pub breakpoint: Breakpoint,
}

/// Compute the delta for a viewport against a breakpoint table.
///
/// The active breakpoint is the largest configured one whose width does
/// not exceed the viewport width; when the viewport is narrower than
/// every configured breakpoint, the smallest one is used instead.
///
/// # Errors
/// Returns [`ViewportError::InvalidViewport`] if either viewport
/// dimension is zero.
#[inline]
pub fn compute(viewport: Viewport, table: &ConfigTable) -> Result<DeltaResult, ViewportError> {
    if viewport.width == 0 || viewport.height == 0 {
        return Err(ViewportError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let orientation = viewport.orientation();
    let breakpoints = table.breakpoints_for(orientation);
    // Ascending width order makes the qualifying set a prefix of the list.
    let breakpoint = breakpoints
        .iter()
        .take_while(|candidate| candidate.width <= viewport.width)
        .last()
        .copied()
        .unwrap_or(breakpoints[0]);

    let delta = (f64::from(viewport.width) / f64::from(breakpoint.width))
        .min(f64::from(viewport.height) / f64::from(breakpoint.height));

    Ok(DeltaResult {
        delta,
        orientation,
        breakpoint,
    })
}
