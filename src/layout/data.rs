//! The geometry record of one card face.
//!
//! All values are pixels in the (possibly rotated) coordinate space the
//! face is drawn in. Horizontal borders that only need their top edge
//! (`image`, `type_line`, `credits`) are single offsets.

use serde::{Deserialize, Serialize};

use crate::cards::LayoutType;
use crate::core::{RotationPair, Xy};

/// The four edges of a rectangular region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorderData {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl BorderData {
    #[must_use]
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Horizontal and vertical extent of a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeData {
    pub horiz: i32,
    pub vert: i32,
}

impl SizeData {
    #[must_use]
    pub const fn new(horiz: i32, vert: i32) -> Self {
        Self { horiz, vert }
    }
}

/// Region borders, top to bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Borders {
    pub card: BorderData,
    /// Top of the illustration band.
    pub image: i32,
    /// Top of the type line band.
    pub type_line: i32,
    pub rules: BorderData,
    pub bottom_box: BorderData,
    /// Top of the credits band.
    pub credits: i32,
    /// Fuse reminder strip below the rules box (fuse only).
    pub fuse: Option<BorderData>,
    /// Attraction number column right of the rules box (attraction only).
    pub attraction: Option<BorderData>,
}

/// Region sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sizes {
    pub card: SizeData,
    pub title: i32,
    pub image: i32,
    pub type_line: i32,
    pub rules: SizeData,
    pub bottom_box: SizeData,
    pub credits: i32,
    pub fuse: Option<SizeData>,
    pub attraction: Option<SizeData>,
}

/// Text anchor points derived from the regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchors {
    /// Center of the bottom stat box text.
    pub bottom_box: Xy,
    /// Vertical middle of the fuse strip.
    pub fuse_v: Option<i32>,
    /// Horizontal middle of the attraction column.
    pub attraction_h: Option<i32>,
    /// Center of the set icon, at the right end of the type line.
    pub icon_center: Xy,
    /// Top-left corner of the illustration backdrop (lands and emblems).
    pub image_position: Option<Xy>,
}

/// Fully resolved geometry of one face.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutData {
    pub layout: LayoutType,
    pub face_index: u8,
    /// Physical card pixel size (unrotated).
    pub card_size: Xy,
    pub rotation: Option<RotationPair>,
    pub border: Borders,
    pub size: Sizes,
    pub anchors: Anchors,
}

impl LayoutData {
    /// Sum of the stacked bands of one text stack:
    /// title, type line, rules box (including a carved fuse strip) and credits.
    #[must_use]
    pub fn text_stack_height(&self) -> i32 {
        let fuse = self.size.fuse.map_or(0, |fuse| fuse.vert);
        self.size.title + self.size.type_line + self.size.rules.vert + fuse + self.size.credits
    }

    /// Total height covered by the bands of this face.
    ///
    /// Flip cards stack two text stacks around one illustration band.
    #[must_use]
    pub fn stack_height(&self) -> i32 {
        let stacks = if self.layout == LayoutType::Flip { 2 } else { 1 };
        stacks * self.text_stack_height() + self.size.image
    }

    /// Whether the bands exactly fill the card region.
    #[must_use]
    pub fn stack_is_consistent(&self) -> bool {
        self.stack_height() == self.size.card.vert
    }

    /// Whether the rules box has room for text.
    #[must_use]
    pub fn has_rules_box(&self) -> bool {
        self.size.rules.vert > 0
    }
}
