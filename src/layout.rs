//! Bar layout.
//!
//! Turns binned datasets into columns of bar heights, and columns into the
//! exact rectangles a [`Surface`](crate::surface::Surface) is asked to fill.
//! The walk is left to right: column `n` sits at `x = n * spacing` and the walk
//! stops at the first column that would start at or past the surface width, or
//! after the last bin, whichever comes first.

use crate::color::Rgba;
use crate::geometry::Rect;
use crate::range;

/// How a bar is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStyle {
    /// Three adjacent stripes at half, full and half opacity.
    ///
    /// Stripe `i` starts at a literal offset of `i` pixels from the column, with
    /// widths of a quarter, a half and a quarter of the bar width.
    #[default]
    Striped,
    /// One opaque rectangle of the full bar width.
    Solid,
}

/// `(x offset, fraction of bar width, opacity)` for each stripe of a [`BarStyle::Striped`] bar.
pub const STRIPES: [(f32, f32, f32); 3] = [(0.0, 0.25, 0.5), (1.0, 0.5, 1.0), (2.0, 0.25, 0.5)];

/// Inputs for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    /// Logical surface width.
    pub width: f32,
    /// Logical surface height.
    pub height: f32,
    /// Number of bins each dataset was binned into.
    pub bins: usize,
    /// Extra pixels added to the column spacing.
    pub spacing_pad: f32,
    /// Bar width in logical pixels.
    pub bar_width: f32,
    /// Color of the full-height tick bar drawn in every column.
    pub bar_color: Rgba,
}

/// One bin position.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Bin index.
    pub index: usize,
    /// Left edge in logical pixels.
    pub x: f32,
    /// Bar height per dataset, in insertion order. `None` when nothing is drawn.
    pub bars: Vec<Option<f32>>,
}

/// A rectangle fill request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    /// Geometry in logical pixels.
    pub rect: Rect,
    /// Fill color; `None` leaves the choice to the surface.
    pub fill: Option<Rgba>,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Horizontal distance between columns.
    pub spacing: f32,
    /// Largest binned value across all datasets; heights are relative to it.
    pub peak: f32,
    /// Columns, left to right.
    pub columns: Vec<Column>,
    spec: LayoutSpec,
    colors: Vec<Option<Rgba>>,
}

/// Column spacing: `floor(width / bins) + pad`, or `0` when there are no bins.
#[must_use]
pub fn spacing(width: f32, bins: usize, pad: f32) -> f32 {
    if bins == 0 {
        return 0.0;
    }
    (width / bins as f32).floor() + pad
}

/// Height of a bar for `value` relative to `peak` on a surface `height` tall.
///
/// `None` when the bar would be empty or its height is not a finite positive
/// number (zero values, a zero peak, missing bins).
#[must_use]
pub fn bar_height(height: f32, value: f32, peak: f32) -> Option<f32> {
    let h = height * (value / peak);
    (h.is_finite() && h > 0.0).then_some(h)
}

impl Layout {
    /// Lay out `binned` (one vector per dataset) with the matching dataset `colors`.
    #[must_use]
    pub fn compute(spec: LayoutSpec, binned: &[Vec<f32>], colors: &[Option<Rgba>]) -> Self {
        let spacing = spacing(spec.width, spec.bins, spec.spacing_pad);
        let peak = range::max_by(binned, |values| range::max(values));

        let mut columns = Vec::new();
        let mut n = 0;
        let mut x = 0.0;
        while n < spec.bins && x < spec.width {
            let bars = binned
                .iter()
                .map(|values| {
                    values
                        .get(n)
                        .and_then(|&v| bar_height(spec.height, v, peak))
                })
                .collect();
            columns.push(Column { index: n, x, bars });
            x += spacing;
            n += 1;
        }

        Self {
            spacing,
            peak,
            columns,
            spec,
            colors: colors.to_vec(),
        }
    }

    /// The inputs this layout was computed from.
    #[must_use]
    pub fn spec(&self) -> &LayoutSpec {
        &self.spec
    }

    /// Expand the columns into fill requests, in paint order.
    ///
    /// Each column paints its tick bar first, then one bar per dataset that has
    /// a height at that column.
    #[must_use]
    pub fn rects(&self, style: BarStyle) -> Vec<DrawRect> {
        let per_bar = match style {
            BarStyle::Striped => STRIPES.len(),
            BarStyle::Solid => 1,
        };
        let mut out = Vec::with_capacity(self.columns.len() * (1 + self.colors.len()) * per_bar);

        for column in &self.columns {
            self.push_bar(
                &mut out,
                style,
                column.x,
                self.spec.height,
                Some(self.spec.bar_color),
            );
            for (bar, color) in column.bars.iter().zip(&self.colors) {
                if let Some(h) = bar {
                    self.push_bar(&mut out, style, column.x, *h, *color);
                }
            }
        }
        out
    }

    fn push_bar(
        &self,
        out: &mut Vec<DrawRect>,
        style: BarStyle,
        x: f32,
        h: f32,
        fill: Option<Rgba>,
    ) {
        let bw = self.spec.bar_width;
        let surface_h = self.spec.height;
        match style {
            BarStyle::Striped => {
                out.extend(STRIPES.iter().map(|&(offset, frac, opacity)| DrawRect {
                    rect: Rect::bottom_anchored(x + offset, bw * frac, h, surface_h),
                    fill,
                    opacity,
                }));
            }
            BarStyle::Solid => out.push(DrawRect {
                rect: Rect::bottom_anchored(x, bw, h, surface_h),
                fill,
                opacity: 1.0,
            }),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// The walk terminates, never exceeds the bin count, and (without padding)
        /// spacing times column count fits in the width.
        #[test]
        fn prop_columns_fit_width(
            width in 0.0f32..2000.0,
            bins in 0usize..300
        ) {
            let layout = Layout::compute(spec_for(width, bins), &[], &[]);
            prop_assert!(layout.columns.len() <= bins);
            prop_assert!(layout.spacing * layout.columns.len() as f32 <= width);
            for c in &layout.columns {
                prop_assert!(c.x < width);
            }
        }

        /// Heights grow with the value and are linear in `value / peak`.
        #[test]
        fn prop_heights_monotonic_linear(
            values in prop::collection::vec(0.0f32..1000.0, 1..50)
        ) {
            let bins = values.len();
            let layout =
                Layout::compute(spec_for(bins as f32 * 10.0, bins), &[values.clone()], &[None]);
            let peak = layout.peak;
            let heights: Vec<f32> =
                layout.columns.iter().map(|c| c.bars[0].unwrap_or(0.0)).collect();

            for (i, &h) in heights.iter().enumerate() {
                let expected = 100.0 * values[i] / peak;
                if expected > 0.0 {
                    prop_assert!((h - expected).abs() <= 1e-3 * expected.max(1.0));
                }
                for (j, &other) in heights.iter().enumerate() {
                    if values[i] < values[j] {
                        prop_assert!(h <= other);
                    }
                }
            }
        }
    }

    fn spec_for(width: f32, bins: usize) -> LayoutSpec {
        LayoutSpec {
            width,
            height: 100.0,
            bins,
            spacing_pad: 0.0,
            bar_width: 3.0,
            bar_color: Rgba::MID_GRAY,
        }
    }
}
