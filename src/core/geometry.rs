//! Pixel geometry primitives: 2D pairs and rotations.

use serde::{Deserialize, Serialize};

/// A horizontal/vertical pair of pixels.
///
/// Used both as a size (horizontal and vertical length) and as a
/// position (distance from the top-left corner of the card).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xy {
    /// Horizontal component.
    pub h: i32,
    /// Vertical component.
    pub v: i32,
}

impl Xy {
    #[must_use]
    pub const fn new(h: i32, v: i32) -> Self {
        Self { h, v }
    }
}

impl std::fmt::Display for Xy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.h, self.v)
    }
}

/// A quarter-turn rotation of the card image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Rot90,
    Rot180,
    Rot270,
}

impl Rotation {
    /// Rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Rotation::Rot90 => Rotation::Rot270,
            Rotation::Rot180 => Rotation::Rot180,
            Rotation::Rot270 => Rotation::Rot90,
        }
    }

    /// Counter-clockwise angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Rot90 => 90,
            Rotation::Rot180 => 180,
            Rotation::Rot270 => 270,
        }
    }
}

/// The rotation applied before drawing a face and the one applied after.
///
/// The renderer rotates the whole card image by `forward`, draws the face
/// as if it were upright, then rotates back by `inverse`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationPair {
    pub forward: Rotation,
    pub inverse: Rotation,
}

impl RotationPair {
    #[must_use]
    pub const fn new(forward: Rotation) -> Self {
        Self {
            forward,
            inverse: forward.inverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xy_display() {
        assert_eq!(Xy::new(750, 1050).to_string(), "(750, 1050)");
    }

    #[test]
    fn test_rotation_pair_inverse() {
        let split = RotationPair::new(Rotation::Rot90);
        assert_eq!(split.inverse, Rotation::Rot270);

        let flip = RotationPair::new(Rotation::Rot180);
        assert_eq!(flip.forward, flip.inverse);
        assert_eq!(flip.forward.degrees(), 180);
    }
}
