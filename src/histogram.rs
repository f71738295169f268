//! The histogram component.
//!
//! A [`Histogram`] owns an ordered list of datasets and a drawing [`Surface`].
//! Each [`render`](Histogram::render) bins every dataset into a fresh copy, lays
//! the bins out left to right and paints one tick bar plus one bar per dataset
//! at each bin position. Stored samples are never modified, so rendering twice
//! produces the same picture.
//!
//! # Example
//!
//! ```
//! use trueno_hist::prelude::*;
//!
//! let data: Vec<f32> = (1..=10).map(|v| v as f32).collect();
//! let mut hist = Histogram::canvas()
//!     .add(&data, Rgba::RED)
//!     .bins(5)
//!     .size(100.0, 50.0);
//!
//! let surface = hist.render().unwrap();
//! assert_eq!(surface.device_size(), (100, 50));
//! ```

use crate::binning::{bin, Aggregation, BinOptions};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::layout::{BarStyle, Layout, LayoutSpec};
use crate::output::SvgEncoder;
use crate::range;
use crate::surface::{RasterSurface, Surface};
use tracing::debug;

/// Default number of bins.
pub const DEFAULT_BINS: usize = 10;
/// Default logical width, matching an unsized HTML canvas.
pub const DEFAULT_WIDTH: f32 = 300.0;
/// Default logical height, matching an unsized HTML canvas.
pub const DEFAULT_HEIGHT: f32 = 150.0;

/// Rendering flavor: which defaults and bar style the histogram uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// Raster output, striped 3px bars, each dataset binned over its own range.
    #[default]
    Canvas,
    /// Like [`Variant::Canvas`] on a high-density display: the surface is scaled by the
    /// device pixel ratio and the requested bin count is multiplied by it.
    ScaledCanvas,
    /// Vector output, solid 1.5px bars, one bin range shared by all datasets and
    /// one extra pixel of column spacing so adjacent rects do not leave gaps.
    Svg,
}

impl Variant {
    /// Default bar width in logical pixels.
    #[must_use]
    pub const fn default_bar_width(self) -> f32 {
        match self {
            Self::Canvas | Self::ScaledCanvas => 3.0,
            Self::Svg => 1.5,
        }
    }

    /// Pixels added to `floor(width / bins)` to get the column spacing.
    #[must_use]
    pub const fn spacing_pad(self) -> f32 {
        match self {
            Self::Canvas | Self::ScaledCanvas => 0.0,
            Self::Svg => 1.0,
        }
    }

    /// Whether all datasets are binned over the global `[min, max]`.
    #[must_use]
    pub const fn shared_domain(self) -> bool {
        matches!(self, Self::Svg)
    }

    /// How bars are painted.
    #[must_use]
    pub const fn bar_style(self) -> BarStyle {
        match self {
            Self::Canvas | Self::ScaledCanvas => BarStyle::Striped,
            Self::Svg => BarStyle::Solid,
        }
    }
}

/// Per-dataset display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetOptions {
    /// Bar color. `None` lets the surface pick its default fill.
    pub color: Option<Rgba>,
}

impl DatasetOptions {
    /// Options with no color set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bar color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Options with a color parsed from a CSS string (`"#ff0000"`, `"red"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the string is not a supported color.
    pub fn css(color: &str) -> Result<Self> {
        Ok(Self::new().color(color.parse()?))
    }
}

impl From<Rgba> for DatasetOptions {
    fn from(color: Rgba) -> Self {
        Self::new().color(color)
    }
}

impl From<Option<Rgba>> for DatasetOptions {
    fn from(color: Option<Rgba>) -> Self {
        Self { color }
    }
}

/// A sequence of raw samples with its display options.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    data: Vec<f32>,
    options: DatasetOptions,
}

impl Dataset {
    /// Raw samples, exactly as added.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Display options.
    #[must_use]
    pub fn options(&self) -> &DatasetOptions {
        &self.options
    }
}

/// Multi-dataset histogram drawing onto a surface `S`.
#[derive(Debug, Clone)]
pub struct Histogram<S> {
    datasets: Vec<Dataset>,
    max_bins: usize,
    bar_color: Rgba,
    bar_width: f32,
    width: f32,
    height: f32,
    variant: Variant,
    pixel_ratio: f32,
    aggregation: Aggregation,
    surface: S,
}

impl Histogram<RasterSurface> {
    /// A raster histogram with striped bars.
    #[must_use]
    pub fn canvas() -> Self {
        Self::with_surface(RasterSurface::new(), Variant::Canvas, 1.0)
    }

    /// A raster histogram for a display with `pixel_ratio` device pixels per logical pixel.
    ///
    /// A non-finite or non-positive ratio is treated as `1.0`.
    #[must_use]
    pub fn scaled_canvas(pixel_ratio: f32) -> Self {
        Self::with_surface(RasterSurface::new(), Variant::ScaledCanvas, pixel_ratio)
    }
}

impl Histogram<SvgEncoder> {
    /// A vector histogram with solid bars and a shared bin range.
    #[must_use]
    pub fn svg() -> Self {
        Self::with_surface(SvgEncoder::default(), Variant::Svg, 1.0)
    }
}

impl<S: Surface> Histogram<S> {
    /// A histogram drawing onto `surface` with the defaults of `variant`.
    ///
    /// The surface is sized to [`DEFAULT_WIDTH`] x [`DEFAULT_HEIGHT`] and the bin
    /// count set to [`DEFAULT_BINS`].
    #[must_use]
    pub fn with_surface(surface: S, variant: Variant, pixel_ratio: f32) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            datasets: Vec::new(),
            max_bins: 0,
            bar_color: Rgba::MID_GRAY,
            bar_width: variant.default_bar_width(),
            width: 0.0,
            height: 0.0,
            variant,
            pixel_ratio,
            aggregation: Aggregation::default(),
            surface,
        }
        .bins(DEFAULT_BINS)
        .size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Append a dataset.
    ///
    /// `options` accepts a [`DatasetOptions`], an [`Rgba`], or `None::<Rgba>`.
    #[must_use]
    pub fn add(mut self, data: &[f32], options: impl Into<DatasetOptions>) -> Self {
        self.datasets.push(Dataset {
            data: data.to_vec(),
            options: options.into(),
        });
        self
    }

    /// Set the number of bins.
    ///
    /// [`Variant::ScaledCanvas`] stores `round(n * pixel_ratio)`.
    #[must_use]
    pub fn bins(mut self, n: usize) -> Self {
        self.max_bins = match self.variant {
            Variant::ScaledCanvas => (n as f32 * self.pixel_ratio).round() as usize,
            Variant::Canvas | Variant::Svg => n,
        };
        self
    }

    /// Set the logical size and resize the surface.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let ratio = match self.variant {
            Variant::ScaledCanvas => self.pixel_ratio,
            Variant::Canvas | Variant::Svg => 1.0,
        };
        self.surface.resize(self.width, self.height, ratio);
        self
    }

    /// Set the tick bar color.
    #[must_use]
    pub fn bar_color(mut self, color: Rgba) -> Self {
        self.bar_color = color;
        self
    }

    /// Set the bar width in logical pixels.
    #[must_use]
    pub fn bar_width(mut self, width: f32) -> Self {
        self.bar_width = width.max(0.0);
        self
    }

    /// Set how samples in a bin are reduced (count by default).
    #[must_use]
    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Datasets in insertion order.
    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Stored bin count (after pixel-ratio scaling).
    #[must_use]
    pub fn max_bins(&self) -> usize {
        self.max_bins
    }

    /// Logical width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Logical height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Rendering flavor.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The surface as last rendered.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the histogram, keeping the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Largest sample across all datasets (`f32::NEG_INFINITY` when there are none).
    #[must_use]
    pub fn max(&self) -> f32 {
        range::max_by(&self.datasets, |set| range::max(&set.data))
    }

    /// Smallest sample across all datasets (`f32::INFINITY` when there are none).
    #[must_use]
    pub fn min(&self) -> f32 {
        range::min_by(&self.datasets, |set| range::min(&set.data))
    }

    /// Bin every dataset into `max_bins` values, leaving the stored samples untouched.
    ///
    /// Non-finite samples are left out of every bin and of the shared domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if datasets were added but none has samples.
    pub fn binned(&self) -> Result<Vec<Vec<f32>>> {
        if !self.datasets.is_empty() && self.datasets.iter().all(|set| set.data.is_empty()) {
            return Err(Error::EmptyData {
                datasets: self.datasets.len(),
            });
        }

        let opts = if self.variant.shared_domain() {
            let lo = range::min_by(&self.datasets, |set| range::finite_min(&set.data));
            let hi = range::max_by(&self.datasets, |set| range::finite_max(&set.data));
            BinOptions::domain(lo, hi)
        } else {
            BinOptions::default()
        }
        .aggregation(self.aggregation);

        Ok(self
            .datasets
            .iter()
            .map(|set| bin(&set.data, self.max_bins, opts))
            .collect())
    }

    /// Compute the geometry [`render`](Self::render) would draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if datasets were added but none has samples.
    pub fn layout(&self) -> Result<Layout> {
        let binned = self.binned()?;
        let colors: Vec<Option<Rgba>> = self.datasets.iter().map(|set| set.options.color).collect();
        let spec = LayoutSpec {
            width: self.width,
            height: self.height,
            bins: self.max_bins,
            spacing_pad: self.variant.spacing_pad(),
            bar_width: self.bar_width,
            bar_color: self.bar_color,
        };
        Ok(Layout::compute(spec, &binned, &colors))
    }

    /// Bin, lay out and paint onto the surface, returning it.
    ///
    /// The surface is reset first, so every call paints from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if datasets were added but none has samples;
    /// the surface is left untouched in that case.
    pub fn render(&mut self) -> Result<&S> {
        let layout = self.layout()?;
        let rects = layout.rects(self.variant.bar_style());

        self.surface.reset();
        for draw in &rects {
            self.surface.fill_rect(draw.rect, draw.fill, draw.opacity);
        }

        debug!(
            variant = ?self.variant,
            datasets = self.datasets.len(),
            bins = self.max_bins,
            columns = layout.columns.len(),
            peak = layout.peak,
            rects = rects.len(),
            "rendered histogram"
        );

        Ok(&self.surface)
    }
}
