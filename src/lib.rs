//! # Trueno-Hist
//!
//! Multi-dataset histogram charts with raster and vector output.
//!
//! A [`Histogram`](histogram::Histogram) bins each dataset into a fixed number of
//! equal-width bins, normalises bar heights against the tallest bin, and paints
//! one full-height tick bar plus one bar per dataset at every bin position.
//! Painting goes through the [`Surface`](surface::Surface) trait, implemented by:
//!
//! - [`RasterSurface`](surface::RasterSurface): RGBA framebuffer with device pixel
//!   ratio support, exported as PNG.
//! - [`SvgEncoder`](output::SvgEncoder): SVG document, one `<rect>` per bar.
//!
//! ## Quick Start
//!
//! ```
//! use trueno_hist::prelude::*;
//!
//! let samples: Vec<f32> = (0..1000).map(|i| ((i * 37) % 101) as f32).collect();
//!
//! let mut hist = Histogram::svg()
//!     .add(&samples, Rgba::from_hex("#4682b4")?)
//!     .bins(20)
//!     .size(200.0, 60.0);
//!
//! let svg = hist.render()?.render();
//! assert!(svg.contains("<rect"));
//! # Ok::<(), trueno_hist::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML configuration ([`config::HistogramConfig`])
//! - `full`: All features enabled

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and CSS color parsing.
pub mod color;

/// RGBA pixel buffer.
pub mod framebuffer;

/// Rectangle geometry.
pub mod geometry;

/// Extrema over sample collections.
pub mod range;

/// Fixed-count binning.
pub mod binning;

// ============================================================================
// Chart Modules
// ============================================================================

/// Bar layout.
pub mod layout;

/// The histogram component.
pub mod histogram;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rendering surfaces.
pub mod surface;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-hist operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_hist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::binning::{bin, Aggregation, BinOptions};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Rect;
    pub use crate::histogram::{Dataset, DatasetOptions, Histogram, Variant};
    pub use crate::layout::{BarStyle, Layout};
    pub use crate::output::{PngEncoder, SvgEncoder};
    pub use crate::surface::{RasterSurface, Surface};

    #[cfg(feature = "config")]
    pub use crate::config::HistogramConfig;
}
