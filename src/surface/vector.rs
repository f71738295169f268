//! [`Surface`] implementation for SVG documents.

use super::{Surface, DEFAULT_FILL};
use crate::color::Rgba;
use crate::geometry::Rect;
use crate::output::{SvgElement, SvgEncoder};

impl Surface for SvgEncoder {
    fn resize(&mut self, width: f32, height: f32, _pixel_ratio: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    fn reset(&mut self) {
        self.elements.clear();
    }

    fn fill_rect(&mut self, rect: Rect, fill: Option<Rgba>, opacity: f32) {
        if rect.is_empty() {
            return;
        }
        self.elements.push(SvgElement::Rect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            fill: fill.unwrap_or(DEFAULT_FILL),
            opacity: opacity.clamp(0.0, 1.0),
        });
    }
}
