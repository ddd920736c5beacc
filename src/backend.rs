//! Graphics collaborator boundary
//!
//! The widget owns layout, selection and rotation state; everything that
//! touches the scene graph, the camera or pixels is delegated through
//! `WheelBackend`. Hosts implement this once for their 3D library of choice.

use std::fmt::Debug;
use std::hash::Hash;

use glam::{Vec2, Vec3};

use crate::item::{SurfaceHandle, TextStyle};
use crate::sprite::{SpriteLayout, TextMetrics};

/// Operations the widget needs from the host's 3D graphics library.
///
/// Sprites created here become children of the wrap node set up by
/// `init_wheel`, so the ring's static origin/tilt apply to all of them.
pub trait WheelBackend {
    /// Stable identifier for a created sprite
    type SpriteId: Copy + Eq + Hash + Debug;

    /// Create the wrap node at the ring's static origin and tilt and insert
    /// it into the scene. Called exactly once, during construction.
    fn init_wheel(&mut self, origin: Vec3, tilt: Vec3);

    /// Measure a text run with the 2D text facilities (`font` is a full
    /// raster-size specification, see [`SpriteLayout::raster_font`])
    fn measure_text(&mut self, text: &str, font: &str) -> TextMetrics;

    /// Rasterize a text label and wrap it in a sprite
    fn create_text_sprite(&mut self, style: &TextStyle, layout: &SpriteLayout) -> Self::SpriteId;

    /// Wrap a caller-rendered surface in a sprite
    fn create_surface_sprite(&mut self, surface: &SurfaceHandle) -> Self::SpriteId;

    /// Move a sprite on the ring plane (local to the wrap node)
    fn set_sprite_position(&mut self, id: Self::SpriteId, pos: Vec2);

    /// Bounding box of the input surface, for pointer-to-NDC mapping
    fn surface_size(&self) -> Vec2;

    /// Ray-cast hit test against the wheel's sprites; nearest hit wins
    fn pick(&self, ndc: Vec2) -> Option<Self::SpriteId>;
}

/// Map a pointer position (relative to the input surface's top-left) to
/// normalized device coordinates in [-1, 1], y up.
#[inline]
pub fn pointer_to_ndc(pointer: Vec2, surface: Vec2) -> Vec2 {
    Vec2::new(
        (pointer.x / surface.x) * 2.0 - 1.0,
        -(pointer.y / surface.y) * 2.0 + 1.0,
    )
}
