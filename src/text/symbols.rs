//! Plaintext symbol keys and their glyphs in the proxy fonts.
//!
//! Card text writes symbols as `{…}` keys (`{T}`, `{2/W}`, `{G/U/P}`).
//! The proxy fonts carry a glyph for each of them in the private range
//! starting at U+0200.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::cards::{LayoutType, ManaColor};

/// Two-color hybrid pairs in glyph order.
pub const MANA_HYBRID: [&str; 10] = [
    "W/U", "U/B", "B/R", "R/G", "G/W", "W/B", "U/R", "B/G", "R/W", "G/U",
];

/// Key of the acorn (non tournament-legal) marker.
pub const ACORN_KEY: &str = "{ACORN}";

/// Key of the artist credit brush.
pub const PAINTBRUSH_KEY: &str = "{PAINTBRUSH}";

/// Glyph a vertical-extent measurement is taken from, so that every
/// string in a band shares one baseline.
pub const REFERENCE_GLYPH: char = '\u{224}';

/// Attraction numbers 1 to 6, circled, one per line.
pub const ATTRACTION_TEXT: &str = "\u{261}\n\u{262}\n\u{263}\n\u{264}\n\u{265}\n\u{266}";

fn glyph(code: u32) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn symbol_table() -> &'static FxHashMap<String, char> {
    static TABLE: OnceLock<FxHashMap<String, char>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = FxHashMap::default();
        for generic in 0..=20u32 {
            table.insert(format!("{{{generic}}}"), glyph(0x200 + generic));
        }
        for (i, color) in (0u32..).zip(ManaColor::ALL) {
            let symbol = color.symbol();
            table.insert(format!("{{{symbol}}}"), glyph(0x220 + i));
            table.insert(format!("{{2/{symbol}}}"), glyph(0x225 + i));
            table.insert(format!("{{{symbol}/P}}"), glyph(0x22A + i));
        }
        for (i, hybrid) in (0u32..).zip(MANA_HYBRID) {
            table.insert(format!("{{{hybrid}}}"), glyph(0x230 + i));
            table.insert(format!("{{{hybrid}/P}}"), glyph(0x240 + i));
        }

        let fixed: [(&str, u32); 10] = [
            ("{X}", 0x215),
            ("{Y}", 0x216),
            ("{Z}", 0x217),
            ("{T}", 0x218),
            ("{Q}", 0x219),
            ("{S}", 0x21E),
            ("{C}", 0x21F),
            ("{P}", 0x22F),
            ("{E}", 0x23A),
            ("{TK}", 0x23B),
        ];
        for (key, code) in fixed {
            table.insert(key.to_string(), glyph(code));
        }

        let faces: [(LayoutType, u32); 3] = [
            (LayoutType::ModalDfc, 0x21A),
            (LayoutType::Transform, 0x21C),
            (LayoutType::Flip, 0x218),
        ];
        for (layout, code) in faces {
            for face in 0..2u32 {
                // Face keys are matched uppercased.
                let key = format!("{{{layout}{face}}}").to_uppercase();
                table.insert(key, glyph(code + face));
            }
        }

        table.insert(ACORN_KEY.to_string(), glyph(0x23C));
        table.insert(PAINTBRUSH_KEY.to_string(), glyph(0x23F));
        table
    })
}

/// Glyph for one `{…}` key, matched case-insensitively.
#[must_use]
pub fn symbol_glyph(key: &str) -> Option<char> {
    symbol_table().get(&key.to_uppercase()).copied()
}

/// Replace every known `{…}` key in `text` with its glyph.
///
/// Unknown keys are kept (uppercased). U+2212 MINUS SIGN, used in
/// loyalty costs but missing from the fonts, becomes an ASCII hyphen.
#[must_use]
pub fn print_symbols(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];
        // Keys hold at least one character: "{}" is not a key.
        let close = candidate
            .char_indices()
            .skip(2)
            .find(|&(_, c)| c == '}')
            .map(|(index, _)| index);
        match close {
            Some(close) => {
                let key = candidate[..=close].to_uppercase();
                match symbol_table().get(&key) {
                    Some(&glyph) => out.push(glyph),
                    None => out.push_str(&key),
                }
                rest = &candidate[close + 1..];
            }
            None => {
                out.push_str(candidate);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out.replace('\u{2212}', "-")
}

/// Color indicator pips as glyphs, e.g. `{W}{U}` printed.
#[must_use]
pub fn color_indicator_glyphs(colors: &[ManaColor]) -> String {
    let keys: String = colors
        .iter()
        .map(|color| format!("{{{}}}", color.symbol()))
        .collect();
    print_symbols(&keys)
}
