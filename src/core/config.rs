//! Render configuration.
//!
//! The core does not own these knobs: a front-end (CLI, GUI) builds a
//! `RenderConfig` and hands it to the card model and the planner.

use serde::{Deserialize, Serialize};

/// Which glyph wins when a face qualifies for both an orientation glyph
/// (transform, modal double-faced, flip) and the acorn glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphPrecedence {
    /// The acorn glyph replaces the orientation glyph.
    #[default]
    AcornFirst,
    /// The orientation glyph is kept; acorn only shows on faces without one.
    OrientationFirst,
}

/// Options that change how cards are classified and drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Render flip cards like transform cards and aftermath like split.
    pub alternative_frames: bool,

    /// Use the narrower playtest card size.
    pub playtest_size: bool,

    /// Replace `{...}` plaintext with symbol glyphs in rules text.
    pub use_text_symbols: bool,

    /// Draw the acorn glyph on non tournament-legal cards.
    pub use_acorn_symbol: bool,

    /// Leave the illustration band of lands and emblems empty.
    pub full_art_lands: bool,

    /// Acorn vs. orientation glyph precedence.
    pub glyph_precedence: GlyphPrecedence,

    /// Smallest font size the fitter may pick before giving up.
    pub min_font_size: u32,

    /// Text printed after the artist name in the credits line.
    pub credits_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alternative_frames: false,
            playtest_size: false,
            use_text_symbols: true,
            use_acorn_symbol: true,
            full_art_lands: false,
            glyph_precedence: GlyphPrecedence::AcornFirst,
            min_font_size: 6,
            credits_label: "bwproxy".to_string(),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_alternative_frames(mut self, enabled: bool) -> Self {
        self.alternative_frames = enabled;
        self
    }

    #[must_use]
    pub fn with_playtest_size(mut self, enabled: bool) -> Self {
        self.playtest_size = enabled;
        self
    }

    #[must_use]
    pub fn with_text_symbols(mut self, enabled: bool) -> Self {
        self.use_text_symbols = enabled;
        self
    }

    #[must_use]
    pub fn with_acorn_symbol(mut self, enabled: bool) -> Self {
        self.use_acorn_symbol = enabled;
        self
    }

    #[must_use]
    pub fn with_full_art_lands(mut self, enabled: bool) -> Self {
        self.full_art_lands = enabled;
        self
    }

    #[must_use]
    pub fn with_glyph_precedence(mut self, precedence: GlyphPrecedence) -> Self {
        self.glyph_precedence = precedence;
        self
    }

    /// Set the fitter's font size floor (clamped to at least 1).
    #[must_use]
    pub fn with_min_font_size(mut self, size: u32) -> Self {
        self.min_font_size = size.max(1);
        self
    }

    #[must_use]
    pub fn with_credits_label(mut self, label: impl Into<String>) -> Self {
        self.credits_label = label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(!config.alternative_frames);
        assert!(!config.playtest_size);
        assert!(config.use_text_symbols);
        assert_eq!(config.glyph_precedence, GlyphPrecedence::AcornFirst);
        assert_eq!(config.min_font_size, 6);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::default()
            .with_alternative_frames(true)
            .with_playtest_size(true)
            .with_min_font_size(0)
            .with_glyph_precedence(GlyphPrecedence::OrientationFirst);

        assert!(config.alternative_frames);
        assert!(config.playtest_size);
        assert_eq!(config.min_font_size, 1);
        assert_eq!(config.glyph_precedence, GlyphPrecedence::OrientationFirst);
    }

    #[test]
    fn test_serialization() {
        let config = RenderConfig::default().with_credits_label("proxies");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
