//! Text sprite layout
//!
//! Text labels are rasterized by the backend on a 2D canvas at `ITEM_RATIO`
//! times their nominal font size, then scaled back down on the sprite for
//! crisp glyphs. The arithmetic for canvas size, draw position and sprite
//! scale is pure and lives here; measurement and pixel work stay behind the
//! `WheelBackend` trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ITEM_RATIO;
use crate::item::TextStyle;

/// Measured extents of a text run, from the backend's 2D text measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Resolved layout for one text sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteLayout {
    /// Raster canvas size in pixels
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Baseline-relative draw position of the text on the canvas
    pub text_pos: Vec2,
    /// Sprite scale in scene units (canvas size divided by `ITEM_RATIO`)
    pub scale: Vec2,
    /// Full font specification at raster size
    pub font: String,
}

impl SpriteLayout {
    /// Font string at raster size, used both to measure and to draw
    pub fn raster_font(style: &TextStyle) -> String {
        format!("{}px {}", style.font_size() * ITEM_RATIO, style.font())
    }

    /// Compute the layout for a styled label from its measured extents.
    ///
    /// Explicit width/height override the measured extents for the box; the
    /// text is centered in whichever box applies, and padding grows the
    /// canvas on all sides.
    pub fn compute(style: &TextStyle, metrics: &TextMetrics) -> Self {
        let pad = style.padding();
        let canvas_width = style.width() + pad * 2.0;
        let canvas_height = style.height.unwrap_or(metrics.height) + pad * 2.0;

        let box_width = style.width();
        let box_height = style.height.unwrap_or(canvas_height);
        let text_pos = Vec2::new(
            box_width / 2.0 - metrics.width / 2.0,
            box_height / 2.0 + metrics.height / 2.0,
        );

        Self {
            canvas_width,
            canvas_height,
            text_pos,
            scale: Vec2::new(canvas_width, canvas_height) / ITEM_RATIO,
            font: Self::raster_font(style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_font_applies_ratio() {
        let style = TextStyle::new("go");
        assert_eq!(SpriteLayout::raster_font(&style), "80px Bold sans-serif");

        let mut big = TextStyle::new("go");
        big.font_size = Some(30.0);
        big.font = Some("monospace".into());
        assert_eq!(SpriteLayout::raster_font(&big), "120px monospace");
    }

    #[test]
    fn test_layout_with_defaults() {
        let style = TextStyle::new("start");
        let metrics = TextMetrics {
            width: 120.0,
            height: 60.0,
        };
        let layout = SpriteLayout::compute(&style, &metrics);

        // 300 default width + 10 padding each side
        assert_eq!(layout.canvas_width, 320.0);
        assert_eq!(layout.canvas_height, 80.0);
        // Text centered in the 300-wide box
        assert_eq!(layout.text_pos.x, 90.0);
        // No explicit height: centered against the full canvas height
        assert_eq!(layout.text_pos.y, 70.0);
        assert_eq!(layout.scale, Vec2::new(80.0, 20.0));
    }

    #[test]
    fn test_layout_with_explicit_box() {
        let mut style = TextStyle::new("start");
        style.width = Some(200.0);
        style.height = Some(100.0);
        style.padding = Some(0.0);
        let metrics = TextMetrics {
            width: 80.0,
            height: 40.0,
        };
        let layout = SpriteLayout::compute(&style, &metrics);

        assert_eq!(layout.canvas_width, 200.0);
        assert_eq!(layout.canvas_height, 100.0);
        assert_eq!(layout.text_pos, Vec2::new(60.0, 70.0));
        assert_eq!(layout.scale, Vec2::new(50.0, 25.0));
    }
}
