//! Pointer repulsion for the decorative hero shapes.
//!
//! Pointer moves only set targets; [`ShapeField::frame`] eases every tracked
//! shape toward its target once per display frame.

use std::collections::HashMap;
use std::hash::Hash;

pub const ACTIVATION_RADIUS_PX: f64 = 200.0;
pub const MAX_DISPLACEMENT_PX: f64 = 15.0;
pub const LERP_FACTOR: f64 = 0.15;
pub const SETTLE_EPSILON_PX: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    fn is_settled(self) -> bool {
        self.x.abs() < SETTLE_EPSILON_PX && self.y.abs() < SETTLE_EPSILON_PX
    }
}

/// What the layer measured for one shape at pointer-move time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeProbe {
    pub center: Vec2,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShapeMotion {
    pub current: Vec2,
    pub target: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleUpdate {
    Apply(Vec2),
    Clear,
}

/// Displacement away from `pointer` for a shape centred at `center`, or
/// `None` when the pointer is outside the activation radius.
pub fn repulsion(pointer: Vec2, center: Vec2) -> Option<Vec2> {
    let delta = Vec2::new(pointer.x - center.x, pointer.y - center.y);
    let distance = delta.length();

    if distance >= ACTIVATION_RADIUS_PX {
        return None;
    }
    if distance <= f64::EPSILON {
        return Some(Vec2::ZERO);
    }

    let force = ((ACTIVATION_RADIUS_PX - distance) / ACTIVATION_RADIUS_PX).min(1.0);
    let scale = force * MAX_DISPLACEMENT_PX / distance;
    Some(Vec2::new(-delta.x * scale, -delta.y * scale))
}

/// Per-mount registry of shape positions keyed by whatever identifies a
/// shape on the page.
#[derive(Debug)]
pub struct ShapeField<K> {
    shapes: HashMap<K, ShapeMotion>,
}

impl<K> Default for ShapeField<K> {
    fn default() -> Self {
        Self {
            shapes: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> ShapeField<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Retargets shapes for a new pointer position. Invisible shapes keep
    /// whatever state they had.
    pub fn pointer_moved<I>(&mut self, pointer: Vec2, probes: I)
    where
        I: IntoIterator<Item = (K, ShapeProbe)>,
    {
        for (key, probe) in probes {
            if probe.opacity <= 0.0 {
                continue;
            }

            match repulsion(pointer, probe.center) {
                Some(push) => {
                    self.shapes.entry(key).or_default().target = push;
                }
                None => {
                    if let Some(motion) = self.shapes.get_mut(&key) {
                        motion.target = Vec2::ZERO;
                    }
                }
            }
        }
    }

    /// Advances every tracked shape one frame. Shapes that have returned to
    /// their origin are dropped and reported as `Clear`.
    pub fn frame(&mut self) -> Vec<(K, StyleUpdate)> {
        let mut updates = Vec::with_capacity(self.shapes.len());

        self.shapes.retain(|key, motion| {
            motion.current.x += (motion.target.x - motion.current.x) * LERP_FACTOR;
            motion.current.y += (motion.target.y - motion.current.y) * LERP_FACTOR;

            if motion.target == Vec2::ZERO && motion.current.is_settled() {
                updates.push((key.clone(), StyleUpdate::Clear));
                false
            } else {
                updates.push((key.clone(), StyleUpdate::Apply(motion.current)));
                true
            }
        });

        updates
    }
}
