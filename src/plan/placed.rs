//! Plan building blocks: positioned text and backdrops.

use serde::{Deserialize, Serialize};

use crate::core::Xy;
use crate::text::Font;

/// Which point of the text `PlacedText::position` refers to.
///
/// Horizontal part first (left, middle, right), vertical part second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAnchor {
    LeftBaseline,
    MiddleBaseline,
    RightBaseline,
    /// Left edge, top of the ascenders of the first line.
    LeftAscender,
    MiddleAscender,
    MiddleTop,
    /// Center of the text box in both directions.
    Middle,
}

/// What a placed text is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextRole {
    FaceSymbol,
    ManaCost,
    Name,
    /// Oracle name printed under a flavor name.
    OracleName,
    TypeLine,
    AttractionNumbers,
    Rules,
    BottomData,
    Credits,
    Fuse,
}

/// One text element with its fitted font and position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedText {
    pub role: TextRole,
    /// Text as drawn: symbols substituted, lines broken.
    pub text: String,
    pub font: Font,
    pub position: Xy,
    pub anchor: TextAnchor,
    /// Extra pixels between lines of multi-line text.
    pub line_spacing: Option<i32>,
}

impl PlacedText {
    #[must_use]
    pub fn new(role: TextRole, text: impl Into<String>, font: Font, position: Xy, anchor: TextAnchor) -> Self {
        Self {
            role,
            text: text.into(),
            font,
            position,
            anchor,
            line_spacing: None,
        }
    }

    #[must_use]
    pub fn with_line_spacing(mut self, spacing: i32) -> Self {
        self.line_spacing = Some(spacing);
        self
    }
}

/// Symbol pasted in the illustration band of lands and emblems.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackdropKind {
    /// Mana symbol of a basic land type ("Forest", "Wastes", ...).
    BasicLand(String),
    /// Planeswalker symbol.
    Emblem,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backdrop {
    pub kind: BackdropKind,
    /// Top-left corner of the backdrop image.
    pub position: Xy,
}
