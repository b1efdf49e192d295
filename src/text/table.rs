//! Static em-width tables standing in for the proxy fonts.
//!
//! Widths are in em units at 1em and cover ASCII 0x20..=0x7E; index is
//! `(char as usize) - 32`. Symbol glyphs (U+0200..U+026F) are roughly
//! square and measured as `symbol_width`. Everything else falls back to
//! `average_char_width`. Good enough to plan a layout without a font
//! rasterizer; a real backend replaces this through `TextMetrics`.

use super::metrics::{Font, FontKind, TextMetrics, VerticalExtent};

/// Character widths of one typeface.
#[derive(Debug)]
pub struct WidthTable {
    pub kind: FontKind,
    widths: [f32; 95],
    pub average_char_width: f32,
    pub symbol_width: f32,
    /// Line height as a multiple of the font size.
    pub line_spacing: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl WidthTable {
    /// Width of `text` in em units.
    pub fn measure_em(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else if (0x200..0x270).contains(&code) {
                    self.symbol_width
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

/// Title typeface: bold display serif.
static TITLE_TABLE: WidthTable = WidthTable {
    kind: FontKind::Title,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.26, 0.32, 0.42, 0.60, 0.58, 0.92, 0.74, 0.24, 0.36, 0.36, 0.42, 0.60, 0.28, 0.36, 0.28, 0.34,
        // 0     1     2     3     4     5     6     7     8     9
        0.58, 0.58, 0.58, 0.58, 0.58, 0.58, 0.58, 0.58, 0.58, 0.58,
        // :     ;     <     =     >     ?     @
        0.30, 0.30, 0.60, 0.60, 0.60, 0.52, 0.98,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.72, 0.66, 0.66, 0.72, 0.62, 0.58, 0.72, 0.76, 0.36, 0.44, 0.70, 0.60, 0.88,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.74, 0.74, 0.62, 0.74, 0.68, 0.56, 0.62, 0.72, 0.70, 0.96, 0.70, 0.66, 0.62,
        // [     \     ]     ^     _     `
        0.34, 0.34, 0.34, 0.56, 0.50, 0.36,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.54, 0.58, 0.48, 0.58, 0.52, 0.36, 0.54, 0.60, 0.30, 0.30, 0.56, 0.30, 0.88,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.60, 0.56, 0.58, 0.58, 0.42, 0.44, 0.36, 0.60, 0.52, 0.78, 0.52, 0.52, 0.46,
        // {     |     }     ~
        0.38, 0.28, 0.38, 0.60,
    ],
    average_char_width: 0.56,
    symbol_width: 0.90,
    line_spacing: 1.15,
    ascent: 0.74,
    descent: 0.22,
};

/// Rules typeface: book serif.
static RULES_TABLE: WidthTable = WidthTable {
    kind: FontKind::Rules,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.22, 0.27, 0.34, 0.50, 0.50, 0.80, 0.70, 0.19, 0.31, 0.31, 0.41, 0.56, 0.23, 0.31, 0.23, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50,
        // :     ;     <     =     >     ?     @
        0.25, 0.25, 0.56, 0.56, 0.56, 0.42, 0.88,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.68, 0.60, 0.63, 0.70, 0.58, 0.53, 0.70, 0.72, 0.32, 0.37, 0.67, 0.57, 0.85,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.71, 0.72, 0.55, 0.72, 0.63, 0.50, 0.59, 0.70, 0.67, 0.93, 0.66, 0.63, 0.58,
        // [     \     ]     ^     _     `
        0.31, 0.28, 0.31, 0.46, 0.50, 0.31,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.44, 0.49, 0.41, 0.50, 0.43, 0.30, 0.46, 0.51, 0.26, 0.25, 0.48, 0.26, 0.77,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.51, 0.48, 0.50, 0.49, 0.35, 0.37, 0.29, 0.51, 0.46, 0.69, 0.46, 0.46, 0.41,
        // {     |     }     ~
        0.31, 0.21, 0.31, 0.54,
    ],
    average_char_width: 0.47,
    symbol_width: 0.86,
    line_spacing: 1.2,
    ascent: 0.70,
    descent: 0.24,
};

/// Static table for a typeface.
pub fn width_table(kind: FontKind) -> &'static WidthTable {
    match kind {
        FontKind::Title => &TITLE_TABLE,
        FontKind::Rules => &RULES_TABLE,
    }
}

/// `TextMetrics` backed by the static width tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct WidthTableMetrics;

impl WidthTableMetrics {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn px(em: f32, size: u32) -> i32 {
    (em * size as f32).round() as i32
}

impl TextMetrics for WidthTableMetrics {
    fn measure(&self, text: &str, font: Font) -> i32 {
        px(width_table(font.kind).measure_em(text), font.size)
    }

    fn line_height(&self, font: Font) -> i32 {
        px(width_table(font.kind).line_spacing, font.size)
    }

    fn vertical_extent(&self, text: &str, font: Font) -> VerticalExtent {
        let table = width_table(font.kind);
        let has_descender = text
            .chars()
            .any(|c| matches!(c, 'g' | 'j' | 'p' | 'q' | 'y' | ',' | ';' | '(' | ')'));
        let has_symbol = text.chars().any(|c| (0x200..0x270).contains(&(c as u32)));
        let top = if has_symbol {
            table.ascent + 0.06
        } else {
            table.ascent
        };
        let bottom = if has_descender || has_symbol {
            table.descent
        } else {
            0.0
        };
        VerticalExtent {
            top: -px(top, font.size),
            bottom: px(bottom, font.size),
        }
    }
}
