//! Responsive sizing of the open book.
//!
//! The book shows a two-page spread, so each page gets half of the usable
//! width. The page keeps the document's aspect ratio and is made as tall as
//! the usable height allows, falling back to the width budget when the spread
//! would overflow horizontally.

use log::debug;
use serde::Serialize;

/// Portrait 3:4, used until page 1 has been measured.
pub const DEFAULT_ASPECT_RATIO: f64 = 3.0 / 4.0;

/// Horizontal space reserved around the spread.
pub const MARGIN_X: f64 = 40.0;
/// Vertical space reserved for the header and navigation bar.
pub const MARGIN_Y: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-page display size. Both sides are always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayDimensions {
    width: f64,
    height: f64,
}

impl DisplayDimensions {
    pub fn new(width: f64, height: f64) -> Option<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Width of the whole open spread.
    pub fn spread_width(&self) -> f64 {
        self.width * 2.0
    }
}

impl Default for DisplayDimensions {
    fn default() -> Self {
        Self {
            width: 450.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutConfig {
    pub margin_x: f64,
    pub margin_y: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_x: MARGIN_X,
            margin_y: MARGIN_Y,
            min_width: 200.0,
            max_width: 2000.0,
            min_height: 300.0,
            max_height: 2500.0,
        }
    }
}

impl LayoutConfig {
    /// Largest page size that keeps `aspect_ratio` and fits half the usable
    /// width by the full usable height.
    ///
    /// Returns `None` when the viewport leaves no usable area; callers keep
    /// their previous dimensions in that case. Results above the upper
    /// bounds are scaled down uniformly. The lower bounds are handed to the
    /// book widget as its minimum size and are not applied here, since
    /// growing the page would push it out of the viewport.
    pub fn compute(&self, viewport: Viewport, aspect_ratio: f64) -> Option<DisplayDimensions> {
        let ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            DEFAULT_ASPECT_RATIO
        };

        let available_width = viewport.width - self.margin_x;
        let available_height = viewport.height - self.margin_y;
        if !(available_width > 0.0 && available_height > 0.0) {
            return None;
        }

        let max_page_width = available_width / 2.0;

        let mut height = available_height;
        let mut width = height * ratio;
        if width > max_page_width {
            width = max_page_width;
            height = width / ratio;
        }

        let scale = (self.max_width / width).min(self.max_height / height).min(1.0);
        DisplayDimensions::new(width * scale, height * scale)
    }
}

/// Tracks the current page size across resizes and aspect-ratio updates,
/// holding on to the last good result when a measurement is degenerate.
#[derive(Debug, Clone)]
pub struct ResponsiveLayout {
    config: LayoutConfig,
    aspect_ratio: f64,
    viewport: Option<Viewport>,
    current: DisplayDimensions,
}

impl ResponsiveLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            viewport: None,
            current: DisplayDimensions::default(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn dimensions(&self) -> DisplayDimensions {
        self.current
    }

    /// Record a new viewport measurement and recompute.
    pub fn resize(&mut self, viewport: Viewport) -> DisplayDimensions {
        self.viewport = Some(viewport);
        self.recompute()
    }

    /// Record the document's intrinsic aspect ratio and recompute.
    /// Non-positive or non-finite ratios are ignored.
    pub fn set_aspect_ratio(&mut self, ratio: f64) -> DisplayDimensions {
        if ratio.is_finite() && ratio > 0.0 {
            self.aspect_ratio = ratio;
        } else {
            debug!("ignoring aspect ratio {ratio}");
        }
        self.recompute()
    }

    fn recompute(&mut self) -> DisplayDimensions {
        match self.viewport {
            Some(viewport) => match self.config.compute(viewport, self.aspect_ratio) {
                Some(dims) => self.current = dims,
                None => debug!(
                    "degenerate viewport {}x{}, keeping {}x{}",
                    viewport.width,
                    viewport.height,
                    self.current.width,
                    self.current.height
                ),
            },
            None => {
                // No viewport yet: keep the height, follow the ratio.
                let height = self.current.height;
                if let Some(dims) = DisplayDimensions::new(height * self.aspect_ratio, height) {
                    self.current = dims;
                }
            }
        }
        self.current
    }
}

impl Default for ResponsiveLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_a4_on_wide_screen_is_height_bound() {
        let dims = LayoutConfig::default()
            .compute(Viewport::new(1600.0, 900.0), 0.707)
            .unwrap();
        assert_relative_eq!(dims.width(), 565.6, epsilon = 1e-9);
        assert_relative_eq!(dims.height(), 800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_narrow_screen_is_width_bound() {
        // usable 760x800, per-page width budget 380
        let dims = LayoutConfig::default()
            .compute(Viewport::new(800.0, 900.0), 0.75)
            .unwrap();
        assert_relative_eq!(dims.width(), 380.0, epsilon = 1e-9);
        assert_relative_eq!(dims.height(), 380.0 / 0.75, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_viewport_is_rejected() {
        let cfg = LayoutConfig::default();
        assert!(cfg.compute(Viewport::new(0.0, 0.0), 0.75).is_none());
        assert!(cfg.compute(Viewport::new(40.0, 900.0), 0.75).is_none());
        assert!(cfg.compute(Viewport::new(1600.0, 100.0), 0.75).is_none());
        assert!(cfg.compute(Viewport::new(f64::NAN, 900.0), 0.75).is_none());
    }

    #[test]
    fn test_invalid_aspect_uses_default() {
        let cfg = LayoutConfig::default();
        let bad = cfg.compute(Viewport::new(1600.0, 900.0), 0.0).unwrap();
        let default = cfg
            .compute(Viewport::new(1600.0, 900.0), DEFAULT_ASPECT_RATIO)
            .unwrap();
        assert_eq!(bad, default);
    }

    #[test]
    fn test_huge_viewport_scaled_to_upper_bounds() {
        let dims = LayoutConfig::default()
            .compute(Viewport::new(10_000.0, 5_000.0), 1.0)
            .unwrap();
        assert_relative_eq!(dims.width(), 2000.0, epsilon = 1e-9);
        assert_relative_eq!(dims.height(), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_responsive_layout_keeps_last_good() {
        let mut layout = ResponsiveLayout::default();
        let good = layout.resize(Viewport::new(1600.0, 900.0));
        let after = layout.resize(Viewport::new(0.0, 0.0));
        assert_eq!(good, after);
        assert!(after.width() > 0.0 && after.height() > 0.0);
    }

    #[test]
    fn test_aspect_change_recomputes() {
        let mut layout = ResponsiveLayout::default();
        layout.resize(Viewport::new(1600.0, 900.0));
        let dims = layout.set_aspect_ratio(0.707);
        assert_relative_eq!(dims.aspect_ratio(), 0.707, epsilon = 1e-12);
        assert_relative_eq!(dims.height(), 800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_aspect_before_viewport_follows_ratio() {
        let mut layout = ResponsiveLayout::default();
        let dims = layout.set_aspect_ratio(0.5);
        assert_relative_eq!(dims.height(), 600.0);
        assert_relative_eq!(dims.width(), 300.0);
    }

    #[test]
    fn test_bad_aspect_ignored() {
        let mut layout = ResponsiveLayout::default();
        layout.set_aspect_ratio(-1.0);
        assert_relative_eq!(layout.aspect_ratio(), DEFAULT_ASPECT_RATIO);
    }

    proptest! {
        #[test]
        fn prop_aspect_ratio_preserved(
            aspect in 0.05f64..20.0,
            vw in 41.0f64..20_000.0,
            vh in 101.0f64..20_000.0,
        ) {
            let dims = LayoutConfig::default().compute(Viewport::new(vw, vh), aspect).unwrap();
            prop_assert!((dims.aspect_ratio() - aspect).abs() <= aspect * 1e-9);
        }

        #[test]
        fn prop_fits_inside_viewport(
            aspect in 0.05f64..20.0,
            vw in 41.0f64..20_000.0,
            vh in 101.0f64..20_000.0,
        ) {
            let dims = LayoutConfig::default().compute(Viewport::new(vw, vh), aspect).unwrap();
            let eps = 1e-9;
            prop_assert!(dims.width() <= (vw - MARGIN_X) / 2.0 + eps);
            prop_assert!(dims.height() <= vh - MARGIN_Y + eps);
            prop_assert!(dims.width() > 0.0 && dims.height() > 0.0);
        }
    }
}
