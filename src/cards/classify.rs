//! Layout classification.
//!
//! A record's layout is resolved by an ordered list of rules; the first
//! rule whose predicate matches wins. When no rule matches, the record's own
//! `layout` field is used if it names a known layout, else `Standard`.
//! Split cards are then refined into fuse or aftermath by looking at the
//! second half's rules text.

use tracing::debug;

use super::layout_type::LayoutType;
use super::record::CardRecord;
use crate::error::{ProxyError, Result};

/// Basic land names, including snow-covered versions.
pub const BASIC_LANDS: [&str; 11] = [
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
    "Wastes",
    "Snow-Covered Plains",
    "Snow-Covered Island",
    "Snow-Covered Swamp",
    "Snow-Covered Mountain",
    "Snow-Covered Forest",
];

/// Whether `name` is a basic land.
#[must_use]
pub fn is_basic_land(name: &str) -> bool {
    BASIC_LANDS.contains(&name)
}

/// The facts about a record that the rules look at.
#[derive(Clone, Copy, Debug)]
struct Signals<'a> {
    name: &'a str,
    type_line: &'a str,
    has_rules_text: bool,
    is_two_parts: bool,
}

/// One classification rule: when `matches` holds, the card gets `layout`.
struct Rule {
    name: &'static str,
    matches: fn(&Signals<'_>) -> bool,
    layout: LayoutType,
}

fn is_emblem(s: &Signals<'_>) -> bool {
    s.type_line.contains("Emblem")
}

fn is_token_with_text(s: &Signals<'_>) -> bool {
    is_any_token(s) && s.has_rules_text
}

fn is_any_token(s: &Signals<'_>) -> bool {
    s.type_line.contains("Token")
}

fn is_basic(s: &Signals<'_>) -> bool {
    is_basic_land(s.name)
}

fn is_vanilla(s: &Signals<'_>) -> bool {
    !s.has_rules_text && !s.is_two_parts
}

fn is_attraction(s: &Signals<'_>) -> bool {
    s.type_line.contains("Attraction")
}

/// Evaluated top to bottom; order is significant.
const RULES: [Rule; 6] = [
    Rule { name: "emblem", matches: is_emblem, layout: LayoutType::Emblem },
    Rule { name: "token", matches: is_token_with_text, layout: LayoutType::Token },
    Rule { name: "vanilla token", matches: is_any_token, layout: LayoutType::VanillaToken },
    Rule { name: "basic land", matches: is_basic, layout: LayoutType::Land },
    Rule { name: "vanilla creature", matches: is_vanilla, layout: LayoutType::VanillaCreature },
    Rule { name: "attraction", matches: is_attraction, layout: LayoutType::Attraction },
];

/// Result of classifying a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub layout: LayoutType,
    /// The trailing "Fuse ..." line of a fuse card.
    pub fuse_text: Option<String>,
}

/// Resolve the layout of a whole card record.
pub fn classify(record: &CardRecord) -> Result<Classification> {
    let name = record
        .name
        .as_deref()
        .ok_or_else(|| ProxyError::missing(record.display_name(), "name"))?;
    let type_line = record
        .type_line
        .as_deref()
        .ok_or_else(|| ProxyError::missing(name, "type_line"))?;

    let signals = Signals {
        name,
        type_line,
        has_rules_text: record.has_rules_text(),
        is_two_parts: record.is_two_parts(),
    };

    if let Some(rule) = RULES.iter().find(|rule| (rule.matches)(&signals)) {
        debug!(card = name, rule = rule.name, layout = %rule.layout, "classified");
        return Ok(Classification {
            layout: rule.layout,
            fuse_text: None,
        });
    }

    let layout = record
        .layout
        .as_deref()
        .and_then(|key| key.parse::<LayoutType>().ok())
        .unwrap_or(LayoutType::Standard);

    if layout == LayoutType::Split {
        return refine_split(name, record);
    }

    Ok(Classification {
        layout,
        fuse_text: None,
    })
}

/// Split cards whose second half starts with "Aftermath" are aftermath
/// cards; those whose second half ends with a "Fuse" line are fuse cards.
fn refine_split(name: &str, record: &CardRecord) -> Result<Classification> {
    let split = Classification {
        layout: LayoutType::Split,
        fuse_text: None,
    };
    let Some(second) = record.card_faces.as_ref().and_then(|faces| faces.get(1)) else {
        return Ok(split);
    };
    let text = second
        .oracle_text
        .as_deref()
        .ok_or_else(|| ProxyError::missing(second.display_name(), "oracle_text"))?;

    let first_word = |line: &str| line.split(' ').next().unwrap_or_default().to_string();
    let mut lines = text.split('\n');

    if lines.next().map(first_word).as_deref() == Some("Aftermath") {
        debug!(card = name, "split card reclassified as aftermath");
        return Ok(Classification {
            layout: LayoutType::Aftermath,
            fuse_text: None,
        });
    }

    let last = text.rsplit('\n').next().unwrap_or_default();
    if first_word(last) == "Fuse" {
        debug!(card = name, "split card reclassified as fuse");
        return Ok(Classification {
            layout: LayoutType::Fuse,
            fuse_text: Some(last.to_string()),
        });
    }

    Ok(split)
}

/// Remove a trailing fuse line from one half's rules text.
#[must_use]
pub fn strip_fuse_text(oracle_text: &str, fuse_text: &str) -> String {
    let suffix = format!("\n{fuse_text}");
    match oracle_text.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None if oracle_text == fuse_text => String::new(),
        None => oracle_text.replace(&suffix, ""),
    }
}
