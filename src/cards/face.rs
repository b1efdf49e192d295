//! Card faces: the printable units of a card.
//!
//! A `CardFace` is either a whole single-part card or one half of a
//! two-part card. Faces are immutable once built; see `Card` for how they
//! are derived from a record.

use serde::{Deserialize, Serialize};

use super::color::{describe_colors, Colors, ManaColor};
use super::layout_type::LayoutType;
use crate::core::GlyphPrecedence;
use crate::error::{ProxyError, Result};

/// Yes/no properties of a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceFlags {
    pub token: bool,
    pub emblem: bool,
    pub basic_land: bool,
    /// Silver-border / acorn: not tournament legal.
    pub acorn: bool,
    pub attraction: bool,
}

/// The marker glyph printed left of a face's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceSymbol {
    /// Non tournament-legal marker.
    Acorn,
    /// Front/back marker of a double-faced or flip card.
    Orientation { layout: LayoutType, face: u8 },
}

impl FaceSymbol {
    /// Plaintext key of the glyph, e.g. `{transform0}` or `{ACORN}`.
    #[must_use]
    pub fn key(self) -> String {
        match self {
            FaceSymbol::Acorn => "{ACORN}".to_string(),
            FaceSymbol::Orientation { layout, face } => format!("{{{layout}{face}}}"),
        }
    }
}

/// A single printable unit of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub(crate) name: String,
    pub(crate) mana_cost: Option<String>,
    pub(crate) type_line: String,
    pub(crate) oracle_text: Option<String>,
    pub(crate) power: Option<String>,
    pub(crate) toughness: Option<String>,
    pub(crate) loyalty: Option<String>,
    pub(crate) defense: Option<String>,
    pub(crate) colors: Option<Colors>,
    pub(crate) color_indicator: Option<Colors>,
    pub(crate) artist: Option<String>,
    pub(crate) layout: LayoutType,
    pub(crate) face_index: Option<u8>,
    pub(crate) flags: FaceFlags,
    pub(crate) flavor_name: Option<String>,
    pub(crate) fuse_text: Option<String>,
}

impl CardFace {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flavor name when present, else the name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.flavor_name.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn flavor_name(&self) -> Option<&str> {
        self.flavor_name.as_deref()
    }

    #[must_use]
    pub fn type_line(&self) -> &str {
        &self.type_line
    }

    pub fn mana_cost(&self) -> Result<&str> {
        self.field(self.mana_cost.as_deref(), "mana_cost")
    }

    pub fn oracle_text(&self) -> Result<&str> {
        self.field(self.oracle_text.as_deref(), "oracle_text")
    }

    pub fn power(&self) -> Result<&str> {
        self.field(self.power.as_deref(), "power")
    }

    pub fn toughness(&self) -> Result<&str> {
        self.field(self.toughness.as_deref(), "toughness")
    }

    pub fn loyalty(&self) -> Result<&str> {
        self.field(self.loyalty.as_deref(), "loyalty")
    }

    pub fn defense(&self) -> Result<&str> {
        self.field(self.defense.as_deref(), "defense")
    }

    pub fn artist(&self) -> Result<&str> {
        self.field(self.artist.as_deref(), "artist")
    }

    pub fn colors(&self) -> Result<&[ManaColor]> {
        self.colors
            .as_deref()
            .ok_or_else(|| ProxyError::missing(&self.name, "colors"))
    }

    /// Color indicator pips; empty when the face has none.
    #[must_use]
    pub fn color_indicator(&self) -> &[ManaColor] {
        self.color_indicator.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn layout(&self) -> LayoutType {
        self.layout
    }

    #[must_use]
    pub fn flags(&self) -> FaceFlags {
        self.flags
    }

    /// The fuse reminder line, only set on faces of fuse cards.
    #[must_use]
    pub fn fuse_text(&self) -> Option<&str> {
        self.fuse_text.as_deref()
    }

    /// Position of this face in its card (0 or 1).
    ///
    /// Fails on faces that were not split from a two-part card.
    pub fn face_index(&self) -> Result<u8> {
        self.face_index.ok_or_else(|| {
            ProxyError::face_access(&self.name, "face index requested on a whole card")
        })
    }

    /// Index used for geometry lookup: the face index, or 0 for whole cards.
    #[must_use]
    pub fn geometry_index(&self) -> u8 {
        self.face_index.unwrap_or(0)
    }

    #[must_use]
    pub fn is_face(&self) -> bool {
        self.face_index.is_some()
    }

    #[must_use]
    pub fn is_token_or_emblem(&self) -> bool {
        self.flags.token || self.flags.emblem
    }

    #[must_use]
    pub fn is_acorn(&self) -> bool {
        self.flags.acorn
    }

    #[must_use]
    pub fn has_pt(&self) -> bool {
        self.power.is_some()
    }

    #[must_use]
    pub fn has_loyalty(&self) -> bool {
        self.loyalty.is_some()
    }

    #[must_use]
    pub fn has_defense(&self) -> bool {
        self.defense.is_some()
    }

    /// Text for the bottom stat box: "P/T", loyalty or defense.
    pub fn bottom_text(&self) -> Result<Option<String>> {
        if self.has_pt() {
            Ok(Some(format!("{}/{}", self.power()?, self.toughness()?)))
        } else if self.has_loyalty() {
            Ok(Some(self.loyalty()?.to_string()))
        } else if self.has_defense() {
            Ok(Some(self.defense()?.to_string()))
        } else {
            Ok(None)
        }
    }

    /// Glyph printed left of the name, if any.
    ///
    /// Orientation glyphs exist only on faces of double-faced and flip
    /// cards; acorn glyphs on any acorn face. `precedence` decides which
    /// one wins when both apply.
    #[must_use]
    pub fn face_symbol(&self, precedence: GlyphPrecedence) -> Option<FaceSymbol> {
        let orientation = match self.face_index {
            Some(face) if self.layout.has_orientation_glyph() => Some(FaceSymbol::Orientation {
                layout: self.layout,
                face,
            }),
            _ => None,
        };
        let acorn = self.flags.acorn.then_some(FaceSymbol::Acorn);

        match precedence {
            GlyphPrecedence::AcornFirst => acorn.or(orientation),
            GlyphPrecedence::OrientationFirst => orientation.or(acorn),
        }
    }

    /// Spelled-out color indicator, since pips do not survive black and
    /// white printing. Empty when the face has no color indicator.
    #[must_use]
    pub fn color_indicator_reminder_text(&self) -> String {
        let indicator = self.color_indicator();
        if indicator.is_empty() {
            return String::new();
        }
        let subject = if self.flags.token && self.type_line.contains(&self.name) {
            "This token"
        } else {
            self.name.as_str()
        };
        format!("({subject} is {}.)\n", describe_colors(indicator))
    }

    fn field<'a>(&self, value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
        value.ok_or_else(|| ProxyError::missing(&self.name, field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(layout: LayoutType) -> CardFace {
        CardFace {
            name: "Test".to_string(),
            mana_cost: Some("{1}{W}".to_string()),
            type_line: "Creature — Test".to_string(),
            oracle_text: Some(String::new()),
            power: None,
            toughness: None,
            loyalty: None,
            defense: None,
            colors: Some(Colors::from_slice(&[ManaColor::White])),
            color_indicator: None,
            artist: None,
            layout,
            face_index: None,
            flags: FaceFlags::default(),
            flavor_name: None,
            fuse_text: None,
        }
    }

    #[test]
    fn test_missing_field_names_card_and_field() {
        let face = face(LayoutType::Standard);
        let err = face.power().unwrap_err();
        assert!(matches!(
            err,
            ProxyError::MissingField { ref card, field: "power" } if card == "Test"
        ));
    }

    #[test]
    fn test_face_index_on_whole_card() {
        let face = face(LayoutType::Standard);
        assert!(matches!(
            face.face_index(),
            Err(ProxyError::InvalidFaceAccess { .. })
        ));
        assert_eq!(face.geometry_index(), 0);
    }

    #[test]
    fn test_bottom_text() {
        let mut creature = face(LayoutType::Standard);
        creature.power = Some("2".to_string());
        creature.toughness = Some("3".to_string());
        assert_eq!(creature.bottom_text().unwrap().as_deref(), Some("2/3"));

        let mut walker = face(LayoutType::Standard);
        walker.loyalty = Some("4".to_string());
        assert_eq!(walker.bottom_text().unwrap().as_deref(), Some("4"));

        assert_eq!(face(LayoutType::Standard).bottom_text().unwrap(), None);
    }

    #[test]
    fn test_face_symbol_precedence() {
        let mut dfc = face(LayoutType::Transform);
        dfc.face_index = Some(1);
        assert_eq!(dfc.face_symbol(GlyphPrecedence::AcornFirst).unwrap().key(), "{transform1}");

        dfc.flags.acorn = true;
        assert_eq!(dfc.face_symbol(GlyphPrecedence::AcornFirst), Some(FaceSymbol::Acorn));
        assert_eq!(
            dfc.face_symbol(GlyphPrecedence::OrientationFirst),
            Some(FaceSymbol::Orientation {
                layout: LayoutType::Transform,
                face: 1
            })
        );

        assert_eq!(face(LayoutType::Standard).face_symbol(GlyphPrecedence::AcornFirst), None);
    }

    #[test]
    fn test_color_indicator_reminder() {
        let mut token = face(LayoutType::Token);
        token.name = "Soldier".to_string();
        token.type_line = "Token Creature — Soldier".to_string();
        token.flags.token = true;
        token.color_indicator = Some(Colors::from_slice(&[ManaColor::White, ManaColor::Blue]));
        assert_eq!(
            token.color_indicator_reminder_text(),
            "(This token is white and blue.)\n"
        );

        assert_eq!(face(LayoutType::Standard).color_indicator_reminder_text(), "");
    }
}
