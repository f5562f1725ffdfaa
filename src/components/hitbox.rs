use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned box in world space. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Move the box so its right edge sits exactly at `edge`.
    pub fn set_right(&mut self, edge: f32) {
        self.x = edge - self.w;
    }

    /// Move the box so its left edge sits exactly at `edge`.
    pub fn set_left(&mut self, edge: f32) {
        self.x = edge;
    }

    /// Move the box so its bottom edge sits exactly at `edge`.
    pub fn set_bottom(&mut self, edge: f32) {
        self.y = edge - self.h;
    }

    /// Move the box so its top edge sits exactly at `edge`.
    pub fn set_top(&mut self, edge: f32) {
        self.y = edge;
    }

    /// AABB vs AABB overlap test. Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Collision extents of an entity. The size is fixed at construction; the
/// world-space box is derived from the current
/// [`MapPosition`](super::mapposition::MapPosition) each pass.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// World-space box for a given entity position.
    pub fn aabb(&self, position: Vec2) -> Aabb {
        Aabb::new(position.x, position.y, self.size.x, self.size.y)
    }
}
