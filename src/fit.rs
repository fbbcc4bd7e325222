//! Aspect-fit sizing of the canvas inside the page or the fullscreen screen.

use crate::error::{LedWallError, Result};
use crate::grid::GridSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    #[default]
    Windowed,
    Fullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRegion {
    width: f64,
    height: f64,
}

impl DisplayRegion {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LedWallError::InvalidRegion { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasDims {
    pub width: u32,
    pub height: u32,
}

/// Largest rectangle with the grid's aspect ratio that fits in `region`.
///
/// The region is snapped down to whole pixels first. The side that touches
/// the region edge takes that size; the other side is rounded and never drops
/// below one pixel. `mode` only decides where the region came from (see
/// [`select_region`]), the arithmetic is shared.
pub fn compute_fit(grid: GridSpec, region: DisplayRegion, _mode: FitMode) -> CanvasDims {
    let aspect = grid.aspect();
    let avail_w = region.width.floor().max(1.0);
    let avail_h = region.height.floor().max(1.0);
    let (width, height) = if aspect > avail_w / avail_h {
        (avail_w, (avail_w / aspect).round().min(avail_h))
    } else {
        ((avail_h * aspect).round().min(avail_w), avail_h)
    };
    CanvasDims {
        width: (width as u32).max(1),
        height: (height as u32).max(1),
    }
}

/// Raw box measurements the host reported for one recompute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    pub window: (f64, f64),
    /// Padding box of `.canvas-wrapper`, absent if the element is missing.
    pub wrapper: Option<(f64, f64)>,
    /// Available screen size.
    pub screen: (f64, f64),
}

/// Picks the region to fit into.
///
/// Fullscreen fits the screen (falling back to the window if the screen reports
/// nothing useful). Windowed mode prefers the wrapper's box and falls back to
/// the window when the wrapper is missing or not laid out yet.
pub fn select_region(mode: FitMode, m: &Measurements) -> Result<DisplayRegion> {
    let (w, h) = m.window;
    match mode {
        FitMode::Fullscreen => DisplayRegion::new(m.screen.0, m.screen.1)
            .or_else(|_| DisplayRegion::new(w, h)),
        FitMode::Windowed => match m.wrapper {
            Some((ww, wh)) if ww > 0.0 && wh > 0.0 => DisplayRegion::new(ww, wh),
            _ => DisplayRegion::new(w, h),
        },
    }
}

/// CSS the wrapper needs after a fit: flex centering plus the aspect hint.
pub fn wrapper_styles(grid: GridSpec) -> Vec<(&'static str, String)> {
    vec![
        ("--canvas-aspect", grid.aspect().to_string()),
        ("display", "flex".into()),
        ("justify-content", "center".into()),
        ("align-items", "center".into()),
    ]
}

/// CSS that pins the canvas container to exactly the fitted box so
/// surrounding content does not reflow while the canvas is resized.
pub fn container_styles(dims: CanvasDims) -> Vec<(&'static str, String)> {
    vec![
        ("width", format!("{}px", dims.width)),
        ("height", format!("{}px", dims.height)),
        ("flex", "0 0 auto".into()),
        ("display", "flex".into()),
        ("justify-content", "center".into()),
        ("align-items", "center".into()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_rejects_empty_and_nan() {
        assert!(DisplayRegion::new(0.0, 10.0).is_err());
        assert!(DisplayRegion::new(10.0, f64::NAN).is_err());
        assert!(DisplayRegion::new(10.0, 10.0).is_ok());
    }

    #[test]
    fn fractional_region_is_floored_before_fitting() {
        let dims = compute_fit(GridSpec::square(1), DisplayRegion::new(10.6, 10.6).unwrap(), FitMode::Windowed);
        assert_eq!(dims, CanvasDims { width: 10, height: 10 });
    }

    #[test]
    fn extreme_grid_never_yields_zero_height() {
        let grid = GridSpec::new(256, 8).unwrap();
        let region = DisplayRegion::new(10.0, 10.0).unwrap();
        let dims = compute_fit(grid, region, FitMode::Windowed);
        assert_eq!(dims, CanvasDims { width: 10, height: 1 });
    }
}
