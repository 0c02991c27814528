use glam::Vec3;

use crate::config::Axis;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Cube of half size `half` around `center`
    pub fn around(center: Vec3, half: f32) -> Self {
        let half = Vec3::splat(half);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Extents touch or intersect on one axis
    pub fn overlaps_on(&self, other: &Aabb, axis: Axis) -> bool {
        axis.of(self.min) <= axis.of(other.max) && axis.of(self.max) >= axis.of(other.min)
    }

    /// Extents touch or intersect on every listed axis
    pub fn overlaps_on_all(&self, other: &Aabb, axes: &[Axis]) -> bool {
        axes.iter().all(|&axis| self.overlaps_on(other, axis))
    }
}
