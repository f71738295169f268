//! SVG output encoder.
//!
//! Vector output writes one `<rect>` per filled rectangle. Raster output wraps
//! a framebuffer as an embedded base64 PNG.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG document builder; also the vector [`Surface`](crate::surface::Surface).
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// Width in CSS pixels.
    pub(crate) width: f32,
    /// Height in CSS pixels.
    pub(crate) height: f32,
    /// SVG elements
    pub(crate) elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgba,
        /// `fill-opacity`, omitted from the output when `1.0`.
        opacity: f32,
    },
    /// Embedded raster image (base64 PNG data URI)
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        data: String,
    },
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(300.0, 150.0)
    }
}

impl SvgEncoder {
    /// Create an empty, transparent document of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Create from a framebuffer (embeds as raster image).
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn from_framebuffer(fb: &Framebuffer) -> Result<Self> {
        let mut encoder = Self::new(fb.width() as f32, fb.height() as f32);

        let png_bytes = super::PngEncoder::to_bytes(fb)?;
        let data_uri = format!("data:image/png;base64,{}", STANDARD.encode(&png_bytes));

        encoder.elements.push(SvgElement::Image {
            x: 0.0,
            y: 0.0,
            width: fb.width() as f32,
            height: fb.height() as f32,
            data: data_uri,
        });

        Ok(encoder)
    }

    /// Document width in CSS pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Document height in CSS pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(256 + self.elements.len() * 96);

        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             width=\"{w}px\" height=\"{h}px\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        );

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
            opacity,
        } => {
            let opacity_attr = if *opacity < 1.0 {
                format!(r#" fill-opacity="{opacity}""#)
            } else {
                String::new()
            };
            let fill = fill.to_css();
            format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" \
                 fill=\"{fill}\"{opacity_attr}/>"
            )
        }
        SvgElement::Image {
            x,
            y,
            width,
            height,
            data,
        } => {
            format!(
                r#"<image x="{x}" y="{y}" width="{width}" height="{height}" xlink:href="{data}"/>"#
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::surface::Surface;

    #[test]
    fn test_svg_encoder_new() {
        let svg = SvgEncoder::new(800.0, 600.0).render();

        assert!(svg.contains("width=\"800px\""));
        assert!(svg.contains("height=\"600px\""));
        assert!(svg.contains("viewBox=\"0 0 800 600\""));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_svg_rect() {
        let mut encoder = SvgEncoder::new(100.0, 100.0);
        encoder.fill_rect(Rect::new(10.0, 20.0, 1.5, 40.0), Some(Rgba::RED), 1.0);
        let svg = encoder.render();

        assert!(svg.contains("<rect"));
        assert!(svg.contains("x=\"10\""));
        assert!(svg.contains("y=\"20\""));
        assert!(svg.contains("width=\"1.5\""));
        assert!(svg.contains("height=\"40\""));
        assert!(svg.contains("rgb(255,0,0)"));
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn test_svg_rect_opacity() {
        let mut encoder = SvgEncoder::new(10.0, 10.0);
        encoder.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Some(Rgba::BLUE), 0.5);
        assert!(encoder.render().contains("fill-opacity=\"0.5\""));
    }

    #[test]
    fn test_transparent_by_default() {
        let svg = SvgEncoder::new(100.0, 100.0).render();
        assert_eq!(svg.matches("<rect").count(), 0);
    }

    #[test]
    fn test_svg_from_framebuffer() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::RED);

        let svg = SvgEncoder::from_framebuffer(&fb).unwrap().render();

        assert!(svg.contains("<image"));
        assert!(svg.contains("data:image/png;base64,"));
    }

    #[test]
    fn test_svg_write_to_file() {
        let mut encoder = SvgEncoder::new(100.0, 100.0);
        encoder.fill_rect(Rect::new(10.0, 10.0, 80.0, 80.0), Some(Rgba::BLUE), 1.0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.svg");
        encoder.write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("</svg>"));
    }

    #[test]
    fn test_svg_encoder_default() {
        let svg = SvgEncoder::default().render();
        assert!(svg.contains("width=\"300px\""));
        assert!(svg.contains("height=\"150px\""));
    }
}
