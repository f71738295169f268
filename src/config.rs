//! YAML configuration for histogram styling.
//!
//! ```yaml
//! bins: 20
//! width: 640
//! height: 120
//! bar_color: "#333333"
//! aggregation: count
//! variant: scaled_canvas
//! pixel_ratio: 2.0
//! ```
//!
//! Every field is optional; missing fields take the same defaults as a freshly
//! constructed [`Histogram`].

use crate::binning::Aggregation;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::histogram::{Histogram, Variant, DEFAULT_BINS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::output::SvgEncoder;
use crate::surface::{RasterSurface, Surface};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Histogram settings loadable from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Requested bin count (before any pixel-ratio scaling).
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Logical width.
    #[serde(default = "default_width")]
    pub width: f32,

    /// Logical height.
    #[serde(default = "default_height")]
    pub height: f32,

    /// Tick bar color as a CSS string.
    #[serde(default = "default_bar_color")]
    pub bar_color: String,

    /// Bar width override; the variant's default when absent.
    #[serde(default)]
    pub bar_width: Option<f32>,

    /// Per-bin reduction.
    #[serde(default)]
    pub aggregation: Aggregation,

    /// Rendering flavor used by [`build`](Self::build).
    #[serde(default)]
    pub variant: Variant,

    /// Device pixels per logical pixel; only [`Variant::ScaledCanvas`] uses it.
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f32,
}

fn default_bins() -> usize {
    DEFAULT_BINS
}
fn default_width() -> f32 {
    DEFAULT_WIDTH
}
fn default_height() -> f32 {
    DEFAULT_HEIGHT
}
fn default_bar_color() -> String {
    "#555555".to_string()
}
fn default_pixel_ratio() -> f32 {
    1.0
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            width: default_width(),
            height: default_height(),
            bar_color: default_bar_color(),
            bar_width: None,
            aggregation: Aggregation::default(),
            variant: Variant::default(),
            pixel_ratio: default_pixel_ratio(),
        }
    }
}

impl HistogramConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] with the offending line if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| Error::Config {
            line: e.location().map_or(0, |l| l.line()),
            message: e.to_string(),
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// A histogram on `surface` with this config's variant, pixel ratio and styling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `bar_color` does not parse.
    pub fn build<S: Surface>(&self, surface: S) -> Result<Histogram<S>> {
        self.apply(Histogram::with_surface(surface, self.variant, self.pixel_ratio))
    }

    /// [`build`](Self::build) onto a fresh [`RasterSurface`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `bar_color` does not parse.
    pub fn raster(&self) -> Result<Histogram<RasterSurface>> {
        self.build(RasterSurface::new())
    }

    /// [`build`](Self::build) onto a fresh [`SvgEncoder`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `bar_color` does not parse.
    pub fn svg(&self) -> Result<Histogram<SvgEncoder>> {
        self.build(SvgEncoder::default())
    }

    /// Apply the size, bin and styling settings to `hist`, keeping its variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `bar_color` does not parse.
    pub fn apply<S: Surface>(&self, hist: Histogram<S>) -> Result<Histogram<S>> {
        let bar_color: Rgba = self.bar_color.parse()?;
        let hist = hist
            .bar_color(bar_color)
            .aggregation(self.aggregation)
            .bins(self.bins)
            .size(self.width, self.height);

        Ok(match self.bar_width {
            Some(w) => hist.bar_width(w),
            None => hist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = HistogramConfig::default();
        assert_eq!(config.bins, 10);
        assert_eq!(config.bar_color, "#555555");
        assert_eq!(config.aggregation, Aggregation::Count);
        assert!(config.bar_width.is_none());
        assert_eq!(config.variant, Variant::Canvas);
        assert_eq!(config.pixel_ratio, 1.0);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = HistogramConfig::parse("bins: 4").unwrap();
        assert_eq!(config.bins, 4);
        assert!((config.width - 300.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r##"
bins: 20
width: 640
height: 120
bar_color: "#333"
bar_width: 2.5
aggregation: mean
variant: svg
pixel_ratio: 1.5
"##;
        let config = HistogramConfig::parse(yaml).unwrap();
        assert_eq!(config.bins, 20);
        assert_eq!(config.bar_width, Some(2.5));
        assert_eq!(config.aggregation, Aggregation::Mean);
        assert_eq!(config.variant, Variant::Svg);
        assert_eq!(config.pixel_ratio, 1.5);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = "bins: 3\nwidth: 10\nheight: tall\n";
        let err = HistogramConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::Config { line: 3, .. }), "got {err}");
    }

    #[test]
    fn test_apply() {
        let config =
            HistogramConfig::parse("bins: 4\nwidth: 40\nheight: 8\nbar_color: red").unwrap();
        let hist = config.apply(Histogram::canvas()).unwrap();
        assert_eq!(hist.max_bins(), 4);
        assert_eq!(hist.surface().device_size(), (40, 8));
    }

    #[test]
    fn test_build_scaled_canvas() {
        let yaml = "bins: 5\nwidth: 100\nheight: 50\nvariant: scaled_canvas\npixel_ratio: 2.0";
        let config = HistogramConfig::parse(yaml).unwrap();
        let mut hist = config.raster().unwrap().add(&[1.0, 2.0, 3.0], Rgba::RED);

        assert_eq!(hist.variant(), Variant::ScaledCanvas);
        assert_eq!(hist.max_bins(), 10);
        assert_eq!(hist.render().unwrap().device_size(), (200, 100));
    }

    #[test]
    fn test_build_svg_keeps_variant_style() {
        let config = HistogramConfig::parse("variant: svg\nbins: 2\nwidth: 20").unwrap();
        let mut hist = config.svg().unwrap().add(&[0.0, 1.0], Rgba::BLUE);

        assert_eq!(hist.variant(), Variant::Svg);
        let svg = hist.render().unwrap().render();
        assert!(svg.contains(r#"width="1.5""#));
        assert!(svg.contains(r#"width="20px""#));
    }

    #[test]
    fn test_variant_round_trips_as_snake_case() {
        let config = HistogramConfig {
            variant: Variant::ScaledCanvas,
            ..HistogramConfig::default()
        };
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert!(yaml.contains("variant: scaled_canvas"));
        assert_eq!(HistogramConfig::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_apply_bad_color() {
        let config = HistogramConfig {
            bar_color: "#12".to_string(),
            ..HistogramConfig::default()
        };
        assert!(matches!(
            config.apply(Histogram::svg()),
            Err(Error::InvalidColor(_))
        ));
    }

    #[test]
    fn test_config_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bins: 7").unwrap();
        let config = HistogramConfig::load(file.path()).unwrap();
        assert_eq!(config.bins, 7);
    }

    #[test]
    fn test_config_load_or_default() {
        let config = HistogramConfig::load_or_default("/nonexistent/path.yaml");
        assert_eq!(config, HistogramConfig::default());
    }
}
