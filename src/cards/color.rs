//! The five mana colors and color-list helpers.
//!
//! Color lists are always kept in WUBRG order without duplicates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the five mana colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ManaColor {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

/// A WUBRG-ordered color list. Never more than five entries.
pub type Colors = SmallVec<[ManaColor; 5]>;

impl ManaColor {
    /// All colors in WUBRG order.
    pub const ALL: [ManaColor; 5] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
    ];

    /// One-letter symbol ("W", "U", ...).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            ManaColor::White => 'W',
            ManaColor::Blue => 'U',
            ManaColor::Black => 'B',
            ManaColor::Red => 'R',
            ManaColor::Green => 'G',
        }
    }

    /// Lowercase English name, as used in reminder text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ManaColor::White => "white",
            ManaColor::Blue => "blue",
            ManaColor::Black => "black",
            ManaColor::Red => "red",
            ManaColor::Green => "green",
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        ManaColor::ALL.into_iter().find(|c| c.symbol() == symbol)
    }
}

impl std::fmt::Display for ManaColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Sort and deduplicate colors into WUBRG order.
#[must_use]
pub fn normalize_colors(colors: &[ManaColor]) -> Colors {
    ManaColor::ALL
        .into_iter()
        .filter(|c| colors.contains(c))
        .collect()
}

/// Colors present in a mana cost, by presence only.
///
/// `{2}{W}{W}{U}` gives `[W, U]`; hybrid and phyrexian symbols count for
/// every color letter they contain.
#[must_use]
pub fn extract_colors(mana_cost: &str) -> Colors {
    let found: Colors = mana_cost.chars().filter_map(ManaColor::from_symbol).collect();
    normalize_colors(&found)
}

/// English description of a color list, e.g. "white, blue and red".
///
/// Five colors read as "all colors"; an empty list reads as "colorless".
#[must_use]
pub fn describe_colors(colors: &[ManaColor]) -> String {
    match colors {
        [] => "colorless".to_string(),
        [only] => only.name().to_string(),
        _ if colors.len() == ManaColor::ALL.len() => "all colors".to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|c| c.name()).collect();
            format!("{} and {}", head.join(", "), last.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_colors_presence_only() {
        let colors = extract_colors("{2}{W}{W}{U}");
        assert_eq!(colors.as_slice(), &[ManaColor::White, ManaColor::Blue]);
    }

    #[test]
    fn test_extract_colors_wubrg_order() {
        let colors = extract_colors("{G}{R/W}{B}");
        assert_eq!(
            colors.as_slice(),
            &[ManaColor::White, ManaColor::Black, ManaColor::Red, ManaColor::Green]
        );
        assert!(extract_colors("{3}").is_empty());
        assert!(extract_colors("").is_empty());
    }

    #[test]
    fn test_describe_colors() {
        assert_eq!(describe_colors(&[ManaColor::Red]), "red");
        assert_eq!(
            describe_colors(&[ManaColor::White, ManaColor::Blue]),
            "white and blue"
        );
        assert_eq!(
            describe_colors(&[ManaColor::White, ManaColor::Blue, ManaColor::Green]),
            "white, blue and green"
        );
        assert_eq!(describe_colors(&ManaColor::ALL), "all colors");
    }

    #[test]
    fn test_color_serde_symbols() {
        let json = serde_json::to_string(&[ManaColor::Blue, ManaColor::Green]).unwrap();
        assert_eq!(json, r#"["U","G"]"#);
        let parsed: Vec<ManaColor> = serde_json::from_str(r#"["W","B"]"#).unwrap();
        assert_eq!(parsed, vec![ManaColor::White, ManaColor::Black]);
    }
}
