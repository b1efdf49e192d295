//! Text measurement capability.
//!
//! The fitter and planner only need widths and heights of strings; the
//! font backend that provides them is pluggable.

use serde::{Deserialize, Serialize};

/// The two typefaces of a proxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontKind {
    /// Names, mana costs and type lines.
    Title,
    /// Rules text, stats and credits.
    Rules,
}

/// A typeface at a pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    pub kind: FontKind,
    pub size: u32,
}

impl Font {
    #[must_use]
    pub const fn new(kind: FontKind, size: u32) -> Self {
        Self { kind, size }
    }

    #[must_use]
    pub const fn title(size: u32) -> Self {
        Self::new(FontKind::Title, size)
    }

    #[must_use]
    pub const fn rules(size: u32) -> Self {
        Self::new(FontKind::Rules, size)
    }

    /// Same typeface at another size.
    #[must_use]
    pub const fn with_size(self, size: u32) -> Self {
        Self::new(self.kind, size)
    }
}

/// Ink extent of a string relative to its baseline.
///
/// `top` is negative for glyphs rising above the baseline; `bottom` is
/// positive for descenders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalExtent {
    pub top: i32,
    pub bottom: i32,
}

impl VerticalExtent {
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Font measurement backend.
pub trait TextMetrics: Send + Sync {
    /// Advance width of a single line of text, in pixels.
    fn measure(&self, text: &str, font: Font) -> i32;

    /// Height of one line of text, in pixels.
    fn line_height(&self, font: Font) -> i32;

    /// Ink extent of `text` around its baseline.
    ///
    /// Backends without glyph outlines can approximate this from the
    /// font size.
    fn vertical_extent(&self, text: &str, font: Font) -> VerticalExtent;

    /// Width of the widest line of a multi-line string.
    fn measure_block(&self, text: &str, font: Font) -> i32 {
        text.lines()
            .map(|line| self.measure(line, font))
            .max()
            .unwrap_or(0)
    }
}
