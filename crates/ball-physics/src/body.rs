//! Body types and per-body derived quantities

use glam::DVec2;
use std::fmt;

use crate::constants::DRAG_SCALE;

/// Stable handle to a body in a [`BodyRegistry`](crate::BodyRegistry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    /// Position of the body in creation order
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 8-bit sRGB color, purely cosmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Opaque RGBA with channels in [0, 1], still in sRGB space
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_hex())
    }
}

/// A simulated ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    radius: f64,
    color: Rgb,
    /// Center of the disc
    pub position: DVec2,
    /// Displacement per tick
    pub velocity: DVec2,
}

impl Body {
    pub(crate) fn new(radius: f64, position: DVec2, velocity: DVec2, color: Rgb) -> Self {
        Self {
            radius,
            color,
            position,
            velocity,
        }
    }

    /// Radius, fixed for the body's lifetime
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Top-left corner of the bounding box (screen coordinates, y grows down)
    pub fn min_corner(&self) -> DVec2 {
        self.position - DVec2::splat(self.radius)
    }

    /// Bottom-right corner of the bounding box
    pub fn max_corner(&self) -> DVec2 {
        self.position + DVec2::splat(self.radius)
    }

    /// Mass used for collision response: `r²`
    pub fn collision_mass(&self) -> f64 {
        self.radius * self.radius
    }

    /// Mass used for drag response: `r² / 1000`
    ///
    /// Not the same scale as [`Body::collision_mass`].
    pub fn drag_mass(&self) -> f64 {
        self.radius * self.radius / DRAG_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_round_trip() {
        let c = Rgb::from_hex(0xFF4325);
        assert_eq!(c, Rgb::new(0xFF, 0x43, 0x25));
        assert_eq!(c.to_hex(), 0xFF4325);
        assert_eq!(c.to_string(), "#FF4325");
    }

    #[test]
    fn test_bounding_box() {
        let body = Body::new(
            20.0,
            DVec2::new(100.0, 50.0),
            DVec2::ZERO,
            Rgb::new(0, 0, 0),
        );
        assert_eq!(body.min_corner(), DVec2::new(80.0, 30.0));
        assert_eq!(body.max_corner(), DVec2::new(120.0, 70.0));
    }

    #[test]
    fn test_mass_conventions_differ() {
        let body = Body::new(25.0, DVec2::splat(100.0), DVec2::ZERO, Rgb::new(0, 0, 0));
        assert_eq!(body.collision_mass(), 625.0);
        assert_eq!(body.drag_mass(), 0.625);
    }
}
