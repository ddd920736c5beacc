//! Caller-supplied item descriptors
//!
//! An item is either a styled text label, rasterized by the backend, or an
//! opaque handle to a surface the caller has already rendered. Descriptors are
//! immutable input; the controller keeps them so click/settle callbacks can
//! hand back caller-meaningful data instead of internal sprite ids.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Styling for a text label item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Label text; also the item's identity for selection matching
    pub name: String,
    /// Box width in scene units (default 300)
    #[serde(default)]
    pub width: Option<f32>,
    /// Box height (default: measured text height)
    #[serde(default)]
    pub height: Option<f32>,
    /// Text color
    #[serde(default)]
    pub color: Option<String>,
    /// Background fill color
    #[serde(default)]
    pub fill: Option<String>,
    /// Font family/style
    #[serde(default)]
    pub font: Option<String>,
    /// Font size before the rasterization ratio is applied
    #[serde(default)]
    pub font_size: Option<f32>,
    /// Padding around the box on all sides
    #[serde(default)]
    pub padding: Option<f32>,
}

impl TextStyle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: None,
            height: None,
            color: None,
            fill: None,
            font: None,
            font_size: None,
            padding: None,
        }
    }

    /// Box width with the default applied
    pub fn width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_TEXT_WIDTH)
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR)
    }

    pub fn fill(&self) -> &str {
        self.fill.as_deref().unwrap_or(DEFAULT_FILL)
    }

    pub fn font(&self) -> &str {
        self.font.as_deref().unwrap_or(DEFAULT_FONT)
    }

    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn padding(&self) -> f32 {
        self.padding.unwrap_or(DEFAULT_PADDING)
    }
}

/// Opaque handle to a caller-rendered surface (bitmap/canvas). Compares by
/// value, so two handles to the same surface are the same item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceHandle(pub u64);

/// One selectable item on the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WheelItem {
    Text(TextStyle),
    Surface(SurfaceHandle),
}

impl WheelItem {
    /// Convenience constructor for a default-styled text item
    pub fn text(name: impl Into<String>) -> Self {
        WheelItem::Text(TextStyle::new(name))
    }

    /// Identity match used for `initially_selected`: text items match by
    /// name, surface items by handle equality. A text item never matches a
    /// surface item.
    pub fn matches(&self, other: &WheelItem) -> bool {
        match (self, other) {
            (WheelItem::Text(a), WheelItem::Text(b)) => a.name == b.name,
            (WheelItem::Surface(a), WheelItem::Surface(b)) => a == b,
            _ => false,
        }
    }
}
