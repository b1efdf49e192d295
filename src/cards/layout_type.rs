//! The closed taxonomy of physical card layouts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ProxyError;

/// How a card is physically laid out when printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    Standard,
    Split,
    Fuse,
    Aftermath,
    Adventure,
    Flip,
    Land,
    VanillaToken,
    VanillaCreature,
    Token,
    Emblem,
    Transform,
    ModalDfc,
    Attraction,
}

impl LayoutType {
    /// Every layout, in declaration order.
    pub const ALL: [LayoutType; 14] = [
        LayoutType::Standard,
        LayoutType::Split,
        LayoutType::Fuse,
        LayoutType::Aftermath,
        LayoutType::Adventure,
        LayoutType::Flip,
        LayoutType::Land,
        LayoutType::VanillaToken,
        LayoutType::VanillaCreature,
        LayoutType::Token,
        LayoutType::Emblem,
        LayoutType::Transform,
        LayoutType::ModalDfc,
        LayoutType::Attraction,
    ];

    /// Key used in source records and glyph names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LayoutType::Standard => "standard",
            LayoutType::Split => "split",
            LayoutType::Fuse => "fuse",
            LayoutType::Aftermath => "aftermath",
            LayoutType::Adventure => "adventure",
            LayoutType::Flip => "flip",
            LayoutType::Land => "land",
            LayoutType::VanillaToken => "vanilla_token",
            LayoutType::VanillaCreature => "vanilla_creature",
            LayoutType::Token => "token",
            LayoutType::Emblem => "emblem",
            LayoutType::Transform => "transform",
            LayoutType::ModalDfc => "modal_dfc",
            LayoutType::Attraction => "attraction",
        }
    }

    /// Two printable parts on one physical side.
    #[must_use]
    pub const fn is_two_parts(self) -> bool {
        matches!(
            self,
            LayoutType::Split
                | LayoutType::Fuse
                | LayoutType::Aftermath
                | LayoutType::Adventure
                | LayoutType::Flip
        )
    }

    /// Two printable parts on two physical sides.
    #[must_use]
    pub const fn is_double_faced(self) -> bool {
        matches!(self, LayoutType::Transform | LayoutType::ModalDfc)
    }

    /// Split and its fuse/aftermath refinements.
    #[must_use]
    pub const fn is_split_family(self) -> bool {
        matches!(
            self,
            LayoutType::Split | LayoutType::Fuse | LayoutType::Aftermath
        )
    }

    /// Layouts whose faces carry a front/back orientation glyph.
    #[must_use]
    pub const fn has_orientation_glyph(self) -> bool {
        self.is_double_faced() || matches!(self, LayoutType::Flip)
    }

    /// Layouts printed with an empty (zero-height) rules box.
    #[must_use]
    pub const fn has_blank_rules_box(self) -> bool {
        matches!(
            self,
            LayoutType::Land | LayoutType::VanillaCreature | LayoutType::VanillaToken
        )
    }

    /// Number of geometry records this layout resolves to.
    #[must_use]
    pub const fn face_count(self) -> u8 {
        if self.is_two_parts() || self.is_double_faced() {
            2
        } else {
            1
        }
    }

    /// Layout drawn in place of this one when alternative frames are on.
    #[must_use]
    pub const fn with_alternative_frames(self) -> Self {
        match self {
            LayoutType::Flip => LayoutType::Transform,
            LayoutType::Aftermath => LayoutType::Split,
            other => other,
        }
    }
}

impl std::fmt::Display for LayoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutType {
    type Err = ProxyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        LayoutType::ALL
            .into_iter()
            .find(|layout| layout.as_str() == key)
            .ok_or_else(|| ProxyError::UnknownLayout(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_counts() {
        for layout in LayoutType::ALL {
            let expected = if layout.is_two_parts() || layout.is_double_faced() {
                2
            } else {
                1
            };
            assert_eq!(layout.face_count(), expected, "{layout}");
        }
        assert_eq!(LayoutType::Flip.face_count(), 2);
        assert_eq!(LayoutType::Token.face_count(), 1);
    }

    #[test]
    fn test_parse_round_trip_keys() {
        for layout in LayoutType::ALL {
            assert_eq!(layout.as_str().parse::<LayoutType>().unwrap(), layout);
        }
    }

    #[test]
    fn test_unknown_key_fails() {
        let err = "meld".parse::<LayoutType>().unwrap_err();
        assert!(matches!(err, ProxyError::UnknownLayout(key) if key == "meld"));
    }

    #[test]
    fn test_alternative_frames() {
        assert_eq!(LayoutType::Flip.with_alternative_frames(), LayoutType::Transform);
        assert_eq!(LayoutType::Aftermath.with_alternative_frames(), LayoutType::Split);
        assert_eq!(LayoutType::Fuse.with_alternative_frames(), LayoutType::Fuse);
    }

    #[test]
    fn test_serde_matches_keys() {
        let json = serde_json::to_string(&LayoutType::ModalDfc).unwrap();
        assert_eq!(json, "\"modal_dfc\"");
        let json = serde_json::to_string(&LayoutType::VanillaCreature).unwrap();
        assert_eq!(json, "\"vanilla_creature\"");
    }
}
