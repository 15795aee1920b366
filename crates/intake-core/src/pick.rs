//! Pointer → normalized viewport → region resolution.

use crate::region::{Region, RegionRegistry};
use glam::Vec2;

/// Bounding client rect of the rendering surface, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map client coordinates into [0,1] viewport space. Points beyond the
    /// rect map outside [0,1] and are not clamped. Degenerate rects yield `None`.
    #[inline]
    pub fn normalize(&self, client_x: f32, client_y: f32) -> Option<Vec2> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let p = Vec2::new(
            (client_x - self.left) / self.width,
            (client_y - self.top) / self.height,
        );
        p.is_finite().then_some(p)
    }
}

/// Result of resolving a pointer against the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit<'a> {
    Region(&'a Region),
    Outside,
}

impl<'a> Hit<'a> {
    pub fn region(&self) -> Option<&'a Region> {
        match self {
            Hit::Region(r) => Some(r),
            Hit::Outside => None,
        }
    }
}

pub fn resolve_point(registry: &RegionRegistry, p: Vec2) -> Hit<'_> {
    match registry.hit_test(p) {
        Some(r) => Hit::Region(r),
        None => Hit::Outside,
    }
}

pub fn resolve_pointer(
    registry: &RegionRegistry,
    client_x: f32,
    client_y: f32,
    viewport: ViewportRect,
) -> Hit<'_> {
    match viewport.normalize(client_x, client_y) {
        Some(p) => resolve_point(registry, p),
        None => Hit::Outside,
    }
}
