use crate::camera::CameraPose;
use crate::error::RegionError;
use glam::{Vec2, Vec3};
use smallvec::{smallvec, SmallVec};

/// Axis-aligned rectangle in normalized viewport space (origin top-left, 0..1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormRect {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl NormRect {
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Inclusive on every edge.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }

    fn is_normalized(&self) -> bool {
        let unit = |v: f32| v.is_finite() && (0.0..=1.0).contains(&v);
        unit(self.x_min)
            && unit(self.x_max)
            && unit(self.y_min)
            && unit(self.y_max)
            && self.x_min <= self.x_max
            && self.y_min <= self.y_max
    }
}

/// A named body area with its hit rectangles and camera framing.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub name: String,
    pub rects: SmallVec<[NormRect; 2]>,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
}

impl Region {
    pub fn new(
        name: impl Into<String>,
        rects: impl IntoIterator<Item = NormRect>,
        camera_position: Vec3,
        camera_target: Vec3,
    ) -> Self {
        Self {
            name: name.into(),
            rects: rects.into_iter().collect(),
            camera_position,
            camera_target,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.rects.iter().any(|r| r.contains(p))
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.camera_position, self.camera_target)
    }
}

/// Ordered, immutable list of regions. Order is hit priority.
#[derive(Clone, Debug)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    pub fn new(regions: Vec<Region>) -> Result<Self, RegionError> {
        for (i, region) in regions.iter().enumerate() {
            if region.rects.is_empty() {
                return Err(RegionError::NoRects {
                    name: region.name.clone(),
                });
            }
            if let Some(index) = region.rects.iter().position(|r| !r.is_normalized()) {
                return Err(RegionError::InvalidRect {
                    name: region.name.clone(),
                    index,
                });
            }
            if regions[..i].iter().any(|r| r.name == region.name) {
                return Err(RegionError::DuplicateName(region.name.clone()));
            }
        }
        Ok(Self { regions })
    }

    /// The body map used by the viewer.
    pub fn builtin() -> Self {
        Self {
            regions: builtin_regions(),
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// First region in declaration order containing `p`.
    pub fn hit_test(&self, p: Vec2) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(p))
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_regions() -> Vec<Region> {
    let region = |name: &str, rect: NormRect, pos: [f32; 3], target: [f32; 3]| Region {
        name: name.to_string(),
        rects: smallvec![rect],
        camera_position: Vec3::from_array(pos),
        camera_target: Vec3::from_array(target),
    };
    vec![
        region(
            "Cabeça",
            NormRect::new(0.48, 0.52, 0.05, 0.2),
            [0.0, 2.5, 1.5],
            [0.0, 1.8, 0.0],
        ),
        region(
            "Tórax",
            NormRect::new(0.46, 0.54, 0.22, 0.35),
            [0.0, 1.6, 2.0],
            [0.0, 1.2, 0.0],
        ),
        region(
            "Braço Esquerdo",
            NormRect::new(0.35, 0.45, 0.40, 0.52),
            [-1.5, 1.4, 1.5],
            [-0.5, 1.2, 0.0],
        ),
        region(
            "Braço Direito",
            NormRect::new(0.55, 0.65, 0.40, 0.52),
            [1.5, 1.4, 1.5],
            [0.5, 1.2, 0.0],
        ),
        region(
            "Abdômen",
            NormRect::new(0.46, 0.54, 0.35, 0.5),
            [0.0, 1.0, 2.5],
            [0.0, 0.8, 0.0],
        ),
        region(
            "Pernas",
            NormRect::new(0.44, 0.56, 0.5, 0.95),
            [0.0, 0.2, 3.0],
            [0.0, 0.2, 0.0],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_rect_bounds() {
        assert!(NormRect::new(0.0, 1.0, 0.0, 1.0).is_normalized());
        assert!(NormRect::new(0.5, 0.5, 0.2, 0.2).is_normalized());
        assert!(!NormRect::new(0.6, 0.4, 0.0, 1.0).is_normalized());
        assert!(!NormRect::new(-0.1, 0.4, 0.0, 1.0).is_normalized());
        assert!(!NormRect::new(0.0, f32::NAN, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn builtin_table_passes_validation() {
        let registry = RegionRegistry::new(builtin_regions()).unwrap();
        assert_eq!(registry.len(), 6);
    }
}
