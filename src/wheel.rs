//! Wheel controller: ring layout, selection state and rotation steering
//!
//! The controller owns one ring of sprites on the plane of the wrap node.
//! Item `i` starts in angular slot `i * (360/N)` degrees; a fixed front
//! vector, computed once at construction, defines what "selected" means.
//! Input (click hit or scroll step) picks a target item, `direction_sign`
//! fixes which way the ring turns, and each `tick` advances every sprite by
//! a fixed 0.1 rad step until the target lands inside the front deadband.

use std::collections::HashMap;

use glam::{Vec2, Vec3};
use thiserror::Error;

use crate::angle::{canonical_angle, degrees_to_radians};
use crate::backend::{WheelBackend, pointer_to_ndc};
use crate::consts::{ROTATION_STEP, SCROLL_DEADBAND, SNAP_MAX, SNAP_MIN};
use crate::item::WheelItem;
use crate::sprite::SpriteLayout;

/// Construction failures
#[derive(Debug, Error, PartialEq)]
pub enum WheelError {
    #[error("wheel needs at least one item")]
    NoItems,
    #[error("wheel radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}

/// Notification callback carrying the original descriptor and the sprite id
pub type ItemCallback<I> = Box<dyn FnMut(&WheelItem, I)>;

/// Configuration for [`WheelMenu::new`]
pub struct WheelOptions<I> {
    /// Selectable items, in ring order
    pub items: Vec<WheelItem>,
    /// Ring radius in scene units
    pub radius: f32,
    /// Static position of the wheel in the scene
    pub origin: Vec3,
    /// Static tilt of the wheel; also the default front-vector heuristic
    /// source when `front_rotation_degrees` is not set
    pub rotation: Vec3,
    /// Fired on every click hit, before the rotation request
    pub on_select: Option<ItemCallback<I>>,
    /// Fired once per completed rotation, after the commit
    pub on_settled: Option<ItemCallback<I>>,
    /// Item to start at the front (default: the first item)
    pub initially_selected: Option<WheelItem>,
    /// Rotate in the fixed configured direction instead of the shortest path
    pub bidirectional: bool,
    /// Negate the rotation direction
    pub reverse_direction: bool,
    /// Explicit front direction in degrees, overriding the tilt heuristic
    pub front_rotation_degrees: Option<f32>,
}

impl<I> WheelOptions<I> {
    pub fn new(items: Vec<WheelItem>, radius: f32) -> Self {
        Self {
            items,
            radius,
            origin: Vec3::ZERO,
            rotation: Vec3::ZERO,
            on_select: None,
            on_settled: None,
            initially_selected: None,
            bidirectional: false,
            reverse_direction: false,
            front_rotation_degrees: None,
        }
    }
}

/// Front-vector heuristic from the wheel's static tilt: the dominant of the
/// tilt's x/y components decides whether the front points along ±Y or ±X,
/// with a zero component falling back to the negative direction.
pub(crate) fn front_from_tilt(tilt: Vec3) -> Vec2 {
    if tilt.x.abs() > tilt.y.abs() {
        // x is nonzero here; positive x fronts +Y, anything else -Y
        let y = if tilt.x > 0.0 { 1.0 } else { -1.0 };
        Vec2::new(0.0, y)
    } else {
        let x = if tilt.y > 0.0 {
            -1.0
        } else if tilt.y < 0.0 {
            1.0
        } else {
            -1.0
        };
        Vec2::new(x, 0.0)
    }
}

/// Circular wheel selection widget over a host graphics backend
pub struct WheelMenu<B: WheelBackend> {
    backend: B,
    radius: f32,
    /// Fixed front-facing direction, unit length
    front: Vec2,
    items: Vec<WheelItem>,
    sprites: Vec<B::SpriteId>,
    /// Sprite positions on the ring plane, parallel to `sprites`
    positions: Vec<Vec2>,
    index_of: HashMap<B::SpriteId, usize>,
    current: usize,
    next: Option<usize>,
    rotating: bool,
    /// ±1, meaningful while rotating
    direction: f32,
    bidirectional: bool,
    reverse: bool,
    on_select: Option<ItemCallback<B::SpriteId>>,
    on_settled: Option<ItemCallback<B::SpriteId>>,
}

impl<B: WheelBackend> std::fmt::Debug for WheelMenu<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelMenu")
            .field("radius", &self.radius)
            .field("front", &self.front)
            .field("items", &self.items)
            .field("positions", &self.positions)
            .field("current", &self.current)
            .field("next", &self.next)
            .field("rotating", &self.rotating)
            .field("direction", &self.direction)
            .field("bidirectional", &self.bidirectional)
            .field("reverse", &self.reverse)
            .finish_non_exhaustive()
    }
}

impl<B: WheelBackend> WheelMenu<B> {
    /// Build the wheel: compute the front vector, lay items out in their
    /// angular slots, create one sprite per descriptor through the backend,
    /// and rotate the whole ring once (un-animated) so the initially selected
    /// item starts at the front.
    pub fn new(backend: B, options: WheelOptions<B::SpriteId>) -> Result<Self, WheelError> {
        let WheelOptions {
            items,
            radius,
            origin,
            rotation,
            on_select,
            on_settled,
            initially_selected,
            bidirectional,
            reverse_direction,
            front_rotation_degrees,
        } = options;

        if items.is_empty() {
            return Err(WheelError::NoItems);
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(WheelError::InvalidRadius(radius));
        }

        let front = match front_rotation_degrees {
            Some(deg) => {
                let rad = degrees_to_radians(deg);
                Vec2::new(rad.cos(), rad.sin())
            }
            None => front_from_tilt(rotation),
        };

        let selected = initially_selected.unwrap_or_else(|| items[0].clone());
        let count = items.len();
        let slot = degrees_to_radians(360.0 / count as f32);

        let mut wheel = Self {
            backend,
            radius,
            front,
            items: Vec::with_capacity(count),
            sprites: Vec::with_capacity(count),
            positions: Vec::with_capacity(count),
            index_of: HashMap::with_capacity(count),
            current: 0,
            next: None,
            rotating: false,
            direction: 1.0,
            bidirectional,
            reverse: reverse_direction,
            on_select,
            on_settled,
        };
        wheel.backend.init_wheel(origin, rotation);

        let mut align = 0.0;
        for (i, item) in items.into_iter().enumerate() {
            let theta = slot * i as f32;
            let pos = wheel.radius * Vec2::new(theta.cos(), theta.sin());

            let id = match &item {
                WheelItem::Text(style) => {
                    let font = SpriteLayout::raster_font(style);
                    let metrics = wheel.backend.measure_text(&style.name, &font);
                    let layout = SpriteLayout::compute(style, &metrics);
                    wheel.backend.create_text_sprite(style, &layout)
                }
                WheelItem::Surface(surface) => wheel.backend.create_surface_sprite(surface),
            };
            wheel.backend.set_sprite_position(id, pos);

            if item.matches(&selected) {
                align = wheel.angle_to_front(pos) * wheel.direction_sign(pos);
                wheel.current = i;
            }

            wheel.index_of.insert(id, i);
            wheel.sprites.push(id);
            wheel.positions.push(pos);
            wheel.items.push(item);
        }

        // One-time alignment, not an animated transition
        wheel.rotate_all(align);

        log::info!(
            "wheel menu: {count} items, radius {radius}, front ({:.2}, {:.2})",
            wheel.front.x,
            wheel.front.y
        );
        Ok(wheel)
    }

    /// Rotate every sprite by `delta` radians around the ring center. The
    /// only mutator of item positions; preserves x² + y² = radius².
    pub fn rotate_all(&mut self, delta: f32) {
        for (i, pos) in self.positions.iter_mut().enumerate() {
            let theta = pos.y.atan2(pos.x) + delta;
            *pos = self.radius * Vec2::new(theta.cos(), theta.sin());
            self.backend.set_sprite_position(self.sprites[i], *pos);
        }
    }

    /// Absolute angular distance from a direction to the front vector, with
    /// the (0.01, 0.1) deadband snapped to exactly 0 to absorb float jitter
    /// near alignment.
    pub fn angle_to_front(&self, v: Vec2) -> f32 {
        let v = v.normalize_or_zero();
        let rad = (canonical_angle(self.front) - canonical_angle(v)).abs();
        if rad > SNAP_MIN && rad < SNAP_MAX { 0.0 } else { rad }
    }

    /// Rotation sign (±1) that brings a direction to the front. Bidirectional
    /// wheels always turn the fixed configured way; otherwise the shortest
    /// path wins, comparing the direct angular gap against its 2π complement.
    pub fn direction_sign(&self, v: Vec2) -> f32 {
        let mut sign = 1.0;
        if !self.bidirectional {
            let front = canonical_angle(self.front);
            let target = canonical_angle(v.normalize_or_zero());
            let direct = (front - target).abs();
            let around = (std::f32::consts::TAU - direct).abs();
            if front > target {
                sign = if direct > around { -1.0 } else { 1.0 };
            } else if target > front {
                sign = if direct > around { 1.0 } else { -1.0 };
            }
        }
        if self.reverse { -sign } else { sign }
    }

    /// Aim the wheel at an item. Starts a rotation unless the wheel is
    /// already turning or the item is already current; re-requesting the
    /// in-flight target is idempotent, and a different target simply re-aims
    /// the in-flight rotation (the superseded target never settles).
    pub fn request_selection(&mut self, index: usize) {
        if index >= self.items.len() {
            log::warn!("selection request out of range: {index}");
            return;
        }
        self.next = Some(index);
        self.direction = self.direction_sign(self.positions[index]);
        if !self.rotating && index != self.current {
            self.rotating = true;
            log::debug!(
                "rotation start: item {index}, direction {:+.0}",
                self.direction
            );
        }
    }

    /// Advance an in-progress rotation by one fixed 0.1 rad step; commit the
    /// selection and fire `on_settled` once the target is inside the front
    /// deadband. Call once per rendered frame. No-op while idle.
    pub fn tick(&mut self) {
        if !self.rotating {
            return;
        }
        let Some(next) = self.next else { return };
        if self.angle_to_front(self.positions[next]) > ROTATION_STEP {
            self.rotate_all(ROTATION_STEP * self.direction);
        } else {
            self.rotating = false;
            self.current = next;
            log::debug!("rotation settled on item {next}");
            if let Some(on_settled) = self.on_settled.as_mut() {
                on_settled(&self.items[next], self.sprites[next]);
            }
        }
    }

    /// Handle a pointer click at surface-relative coordinates: hit-test
    /// through the backend, fire `on_select` on a hit, then request the
    /// rotation. A miss is a silent no-op.
    pub fn handle_click(&mut self, pointer: Vec2) {
        let ndc = pointer_to_ndc(pointer, self.backend.surface_size());
        let Some(id) = self.backend.pick(ndc) else {
            return;
        };
        let Some(&index) = self.index_of.get(&id) else {
            return;
        };
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(&self.items[index], id);
        }
        self.request_selection(index);
    }

    /// Handle a wheel-scroll delta: step the current item's index by one with
    /// wraparound (decrement for scroll down, increment for scroll up) and
    /// request that neighbor. Deltas at or below the noise deadband are
    /// ignored. Pure index step; takes no notice of ring geometry.
    pub fn handle_scroll(&mut self, delta_y: f32) {
        if delta_y.abs() <= SCROLL_DEADBAND {
            return;
        }
        let count = self.items.len();
        let index = if delta_y > 0.0 {
            if self.current == 0 {
                count - 1
            } else {
                self.current - 1
            }
        } else if self.current + 1 >= count {
            0
        } else {
            self.current + 1
        };
        self.request_selection(index);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction rejects empty item lists. Kept as the
    /// conventional `len` companion.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &WheelItem {
        &self.items[self.current]
    }

    /// Ring-plane position of an item's sprite
    pub fn item_position(&self, index: usize) -> Option<Vec2> {
        self.positions.get(index).copied()
    }

    /// Sprite id of an item, in input order
    pub fn sprite(&self, index: usize) -> Option<B::SpriteId> {
        self.sprites.get(index).copied()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
