//! Hand-written token specifications.
//!
//! A token is written as `;`-separated fields:
//!
//! ```text
//! [supertypes;] [power/toughness;] colors; [subtypes;] types; [rules lines...]
//! ```
//!
//! For example `2/2; G; Wolf; Creature` or
//! `Legendary; W; Artifact; When this token dies, draw a card.`
//! Subtypes, when present, double as the token's name.

use super::color::ManaColor;
use super::record::CardRecord;
use crate::error::{ProxyError, Result};

pub const CARD_SUPERTYPES: [&str; 7] = [
    "Basic",
    "Legendary",
    "Snow",
    "World",
    "Ongoing",
    "Elite",
    "Host",
];

pub const CARD_TYPES: [&str; 8] = [
    "Land",
    "Creature",
    "Artifact",
    "Enchantment",
    "Instant",
    "Sorcery",
    "Planeswalker",
    "Tribal",
];

/// Parse a token specification into a record.
///
/// `name` overrides the name derived from the subtypes; it is required
/// when the token has no subtypes.
pub fn parse_token_spec(spec: &str, name: Option<&str>) -> Result<CardRecord> {
    let mut fields: Vec<&str> = spec.split(';').map(str::trim).collect();
    fields.reverse();
    let invalid = |reason: &str| ProxyError::InvalidTokenSpec(format!("{reason}: {spec}"));

    let supertypes = match fields.last().copied() {
        Some(field) if is_word_set(field, &CARD_SUPERTYPES) => {
            fields.pop();
            format!("{} ", title_words(field).join(" "))
        }
        _ => String::new(),
    };

    let power_toughness = match fields.last().copied() {
        Some(field) if field.contains('/') => {
            fields.pop();
            let (power, toughness) = field.split_once('/').unwrap_or_default();
            Some((power.trim().to_string(), toughness.trim().to_string()))
        }
        _ => None,
    };

    let color_field = fields.pop().ok_or_else(|| invalid("missing colors"))?;
    let colors: Vec<ManaColor> = color_field
        .to_uppercase()
        .chars()
        .filter_map(ManaColor::from_symbol)
        .collect();

    let first = fields.pop().ok_or_else(|| invalid("missing types"))?;
    let first_words = title_words(first);

    let maybe_types = fields.last().copied().filter(|field| {
        let all: Vec<&str> = CARD_TYPES.iter().chain(CARD_SUPERTYPES.iter()).copied().collect();
        is_word_set(field, &all)
    });

    let (type_line, derived_name) = match maybe_types {
        Some(types) => {
            fields.pop();
            let subtypes = first_words.join(" ");
            let types = title_words(types).join(" ");
            (format!("Token {supertypes}{types} — {subtypes}"), Some(subtypes))
        }
        None => (format!("Token {supertypes}{}", first_words.join(" ")), None),
    };

    let name = name
        .map(str::to_string)
        .or(derived_name)
        .ok_or_else(|| invalid("missing name for token without subtypes"))?;

    let mut record = CardRecord::new(&name, type_line)
        .with_colors(&colors)
        .with_mana_cost("");

    let needs_pt = record
        .type_line
        .as_deref()
        .is_some_and(|line| line.contains("Creature") || line.contains("Vehicle"));
    if needs_pt {
        let (power, toughness) = power_toughness
            .ok_or_else(|| invalid(&format!("power/toughness missing for {name}")))?;
        record = record.with_power_toughness(power, toughness);
    }

    fields.reverse();
    let rules: Vec<&str> = fields.into_iter().filter(|line| !line.is_empty()).collect();
    Ok(record.with_oracle_text(rules.join("\n")))
}

/// "wOLF rider" -> ["Wolf", "Rider"]
fn title_words(field: &str) -> Vec<String> {
    field
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Whether the field is a non-empty set of words drawn from `allowed`.
fn is_word_set(field: &str, allowed: &[&str]) -> bool {
    let words = title_words(field);
    !words.is_empty() && words.iter().all(|word| allowed.contains(&word.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, LayoutType};

    #[test]
    fn test_creature_token_with_subtypes() {
        let record = parse_token_spec("2/2; g; wolf; creature", None).unwrap();
        assert_eq!(record.name.as_deref(), Some("Wolf"));
        assert_eq!(record.type_line.as_deref(), Some("Token Creature — Wolf"));
        assert_eq!(record.colors, Some(vec![ManaColor::Green]));
        assert_eq!(record.power.as_deref(), Some("2"));
        assert_eq!(record.toughness.as_deref(), Some("2"));
        assert_eq!(record.oracle_text.as_deref(), Some(""));

        let card = Card::from_record(record).unwrap();
        assert_eq!(card.layout(), LayoutType::VanillaToken);
        assert_eq!(card.as_face().color_indicator(), &[ManaColor::Green]);
    }

    #[test]
    fn test_supertypes_and_rules() {
        let record = parse_token_spec(
            "Legendary; 1/1; WU; Spirit Cleric; Creature; Flying; Vigilance",
            None,
        )
        .unwrap();
        assert_eq!(
            record.type_line.as_deref(),
            Some("Token Legendary Creature — Spirit Cleric")
        );
        assert_eq!(record.oracle_text.as_deref(), Some("Flying\nVigilance"));
        assert_eq!(record.colors, Some(vec![ManaColor::White, ManaColor::Blue]));
    }

    #[test]
    fn test_token_without_subtypes_needs_name() {
        let err = parse_token_spec("C; Artifact; {T}, Sacrifice this artifact: Add one mana.", None)
            .unwrap_err();
        assert!(matches!(err, ProxyError::InvalidTokenSpec(_)));

        let record = parse_token_spec(
            "C; Artifact; {T}, Sacrifice this artifact: Add one mana.",
            Some("Treasure"),
        )
        .unwrap();
        assert_eq!(record.type_line.as_deref(), Some("Token Artifact"));
        assert_eq!(record.name.as_deref(), Some("Treasure"));
    }

    #[test]
    fn test_creature_without_pt_fails() {
        let err = parse_token_spec("G; Saproling; Creature", None).unwrap_err();
        assert!(err.to_string().contains("power/toughness"));
    }
}
