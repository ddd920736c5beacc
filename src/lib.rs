//! Wheel menu - a circular selection widget for 3D scene graphs
//!
//! A ring of selectable items (text labels or caller-rendered surfaces)
//! rotates to bring the chosen item to a fixed "front" direction in response
//! to pointer clicks and wheel scrolls. The widget owns layout, angle math
//! and the rotation state machine; rendering, camera projection and
//! hit-testing belong to the host, reached through [`WheelBackend`]. The host
//! drives animation by calling [`WheelMenu::tick`] once per rendered frame.
//!
//! Core modules:
//! - `angle`: pure angle utilities
//! - `item`: caller-supplied item descriptors
//! - `sprite`: text sprite layout math
//! - `backend`: graphics collaborator boundary
//! - `wheel`: selection/rotation state machine

pub mod angle;
pub mod backend;
pub mod item;
pub mod sprite;
pub mod wheel;

pub use backend::{WheelBackend, pointer_to_ndc};
pub use item::{SurfaceHandle, TextStyle, WheelItem};
pub use sprite::{SpriteLayout, TextMetrics};
pub use wheel::{WheelError, WheelMenu, WheelOptions};

/// Widget tuning constants
pub mod consts {
    /// Ring rotation per tick (radians); couples animation speed to the
    /// host's frame rate
    pub const ROTATION_STEP: f32 = 0.1;

    /// Open deadband (SNAP_MIN, SNAP_MAX) in which an angle-to-front reading
    /// snaps to exactly zero, absorbing float jitter near alignment
    pub const SNAP_MIN: f32 = 0.01;
    pub const SNAP_MAX: f32 = 0.1;

    /// Scroll deltas at or below this magnitude are treated as noise
    pub const SCROLL_DEADBAND: f32 = 20.0;

    /// Text raster ratio: fonts draw at this multiple and sprites scale back
    /// down by it
    pub const ITEM_RATIO: f32 = 4.0;

    /// Text item style defaults
    pub const DEFAULT_TEXT_WIDTH: f32 = 300.0;
    pub const DEFAULT_TEXT_COLOR: &str = "#000000";
    pub const DEFAULT_FILL: &str = "#ffffff";
    pub const DEFAULT_FONT: &str = "Bold sans-serif";
    pub const DEFAULT_FONT_SIZE: f32 = 20.0;
    pub const DEFAULT_PADDING: f32 = 10.0;
}
