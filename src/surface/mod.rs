//! Rendering surfaces.
//!
//! The layout engine only needs two capabilities from a backend: size the
//! drawing area and fill an axis-aligned rectangle. Everything else (pixel
//! buffers, SVG documents, device pixel ratios) lives in the adapters.
//!
//! - [`RasterSurface`]: RGBA framebuffer, optionally scaled by a device pixel ratio.
//! - [`SvgEncoder`](crate::output::SvgEncoder): vector document, one `<rect>` per fill.

mod raster;
mod vector;

pub use raster::RasterSurface;

use crate::color::Rgba;
use crate::geometry::Rect;

/// Fill used when a draw call carries no color.
pub const DEFAULT_FILL: Rgba = Rgba::BLACK;

/// A drawing target the layout engine can paint rectangles onto.
///
/// Coordinates are logical pixels with the origin at the top-left corner.
pub trait Surface {
    /// Set the logical size of the drawing area.
    ///
    /// `pixel_ratio` is the number of device pixels per logical pixel; surfaces
    /// with a backing pixel buffer allocate `ceil(size * pixel_ratio)` pixels and
    /// scale every subsequent draw accordingly. Vector surfaces ignore it.
    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32);

    /// Discard everything drawn so far, keeping the size.
    fn reset(&mut self);

    /// Fill `rect` with `fill` (or [`DEFAULT_FILL`] when `None`) at `opacity` (`0.0..=1.0`).
    fn fill_rect(&mut self, rect: Rect, fill: Option<Rgba>, opacity: f32);
}

#[cfg(test)]
pub(crate) mod recording {
    //! A surface that records draw calls, for layout tests.

    use super::{Rect, Rgba, Surface};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Resize(f32, f32, f32),
        Reset,
        Fill(Rect, Option<Rgba>, f32),
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) calls: Vec<Call>,
    }

    impl RecordingSurface {
        pub(crate) fn fills(&self) -> Vec<(Rect, Option<Rgba>, f32)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Fill(r, f, o) => Some((*r, *f, *o)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
            self.calls.push(Call::Resize(width, height, pixel_ratio));
        }

        fn reset(&mut self) {
            self.calls.push(Call::Reset);
        }

        fn fill_rect(&mut self, rect: Rect, fill: Option<Rgba>, opacity: f32) {
            self.calls.push(Call::Fill(rect, fill, opacity));
        }
    }
}
