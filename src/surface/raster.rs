//! Framebuffer-backed surface with device pixel ratio support.

use super::{Surface, DEFAULT_FILL};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::output::{PngEncoder, SvgEncoder};
use std::path::Path;
use tracing::trace;

/// Raster drawing surface.
///
/// The logical size is what the histogram lays out against; the backing
/// framebuffer is `ceil(logical * pixel_ratio)` pixels on each side, so one
/// logical unit maps to `pixel_ratio` device pixels. A zero-area size leaves
/// the surface without a framebuffer; drawing onto it is a no-op.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: f32,
    height: f32,
    pixel_ratio: f32,
    framebuffer: Option<Framebuffer>,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterSurface {
    /// An empty surface (zero size, pixel ratio 1).
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
            framebuffer: None,
        }
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

    /// Device pixels per logical pixel.
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Size of the backing framebuffer in device pixels (`(0, 0)` when there is none).
    #[must_use]
    pub fn device_size(&self) -> (u32, u32) {
        self.framebuffer
            .as_ref()
            .map_or((0, 0), |fb| (fb.width(), fb.height()))
    }

    /// The backing framebuffer, if the surface has a non-zero area.
    #[must_use]
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    /// Encode the framebuffer as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSurface`] for a zero-area surface, or a PNG encoding error.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(self.require_framebuffer()?)
    }

    /// Write the framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSurface`] for a zero-area surface, or an I/O / encoding error.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(self.require_framebuffer()?, path)
    }

    /// Wrap the framebuffer in an SVG document as an embedded PNG image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSurface`] for a zero-area surface, or a PNG encoding error.
    pub fn to_svg(&self) -> Result<SvgEncoder> {
        SvgEncoder::from_framebuffer(self.require_framebuffer()?)
    }

    fn require_framebuffer(&self) -> Result<&Framebuffer> {
        self.framebuffer.as_ref().ok_or(Error::NoSurface {
            width: self.width,
            height: self.height,
        })
    }

    /// Logical rectangle to device pixel span `(x, y, w, h)`.
    fn device_rect(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let scaled = rect.scale(self.pixel_ratio);
        let x0 = scaled.x.round().max(0.0);
        let y0 = scaled.y.round().max(0.0);
        let x1 = scaled.right().round().max(0.0);
        let y1 = scaled.bottom().round().max(0.0);

        (x1 > x0 && y1 > y0).then(|| (x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

impl Surface for RasterSurface {
    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };

        let device_w = (self.width * self.pixel_ratio).ceil() as u32;
        let device_h = (self.height * self.pixel_ratio).ceil() as u32;
        // Framebuffer::new only fails on a zero side, which means "no buffer" here
        self.framebuffer = Framebuffer::new(device_w, device_h).ok();

        trace!(
            width = self.width,
            height = self.height,
            pixel_ratio = self.pixel_ratio,
            device_w,
            device_h,
            "resized raster surface"
        );
    }

    fn reset(&mut self) {
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.clear(Rgba::TRANSPARENT);
        }
    }

    fn fill_rect(&mut self, rect: Rect, fill: Option<Rgba>, opacity: f32) {
        if rect.is_empty() {
            return;
        }
        let Some((x, y, w, h)) = self.device_rect(rect) else {
            return;
        };
        let color = fill.unwrap_or(DEFAULT_FILL).scale_alpha(opacity);
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.blend_rect(x, y, w, h, color);
        }
    }
}
