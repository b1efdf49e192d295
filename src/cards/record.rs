//! Source card records.
//!
//! `CardRecord` mirrors the fields the card-data collaborator provides
//! (Scryfall-shaped JSON). Every field is optional here: absence is only an
//! error when something actually asks for the field, and then it is
//! reported as `MissingField` with the card name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::color::ManaColor;
use crate::error::Result;

/// Raw card data, as received from the data source or built by hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    pub name: Option<String>,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub colors: Option<Vec<ManaColor>>,
    pub color_indicator: Option<Vec<ManaColor>>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub defense: Option<String>,
    pub layout: Option<String>,
    pub card_faces: Option<Vec<CardRecord>>,
    pub legalities: Option<BTreeMap<String, String>>,
    pub artist: Option<String>,
    pub flavor_name: Option<String>,
    pub border_color: Option<String>,
    pub security_stamp: Option<String>,
}

impl CardRecord {
    /// Start a hand-made record.
    #[must_use]
    pub fn new(name: impl Into<String>, type_line: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            type_line: Some(type_line.into()),
            ..Self::default()
        }
    }

    /// Parse a record from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// An emblem record, as printed for planeswalker emblems.
    #[must_use]
    pub fn emblem(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, "Emblem")
            .with_mana_cost("")
            .with_oracle_text(text)
            .with_colors(&[])
    }

    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>) -> Self {
        self.mana_cost = Some(cost.into());
        self
    }

    #[must_use]
    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: &[ManaColor]) -> Self {
        self.colors = Some(colors.to_vec());
        self
    }

    #[must_use]
    pub fn with_color_indicator(mut self, colors: &[ManaColor]) -> Self {
        self.color_indicator = Some(colors.to_vec());
        self
    }

    #[must_use]
    pub fn with_power_toughness(
        mut self,
        power: impl Into<String>,
        toughness: impl Into<String>,
    ) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    #[must_use]
    pub fn with_loyalty(mut self, loyalty: impl Into<String>) -> Self {
        self.loyalty = Some(loyalty.into());
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: impl Into<String>) -> Self {
        self.defense = Some(defense.into());
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    #[must_use]
    pub fn with_faces(mut self, front: CardRecord, back: CardRecord) -> Self {
        self.card_faces = Some(vec![front, back]);
        self
    }

    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn with_flavor_name(mut self, flavor_name: impl Into<String>) -> Self {
        self.flavor_name = Some(flavor_name.into());
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, border: impl Into<String>) -> Self {
        self.border_color = Some(border.into());
        self
    }

    #[must_use]
    pub fn with_security_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.security_stamp = Some(stamp.into());
        self
    }

    /// Name for error messages; never fails.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed card>")
    }

    /// Whether the record carries two sub-records.
    #[must_use]
    pub fn is_two_parts(&self) -> bool {
        self.card_faces.as_ref().is_some_and(|faces| !faces.is_empty())
    }

    /// Whether any part of the card has non-empty rules text.
    #[must_use]
    pub fn has_rules_text(&self) -> bool {
        let own = self
            .oracle_text
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty());
        own || self
            .card_faces
            .iter()
            .flatten()
            .any(CardRecord::has_rules_text)
    }

    /// Silver-bordered or acorn-stamped: not tournament legal.
    #[must_use]
    pub fn is_acorn(&self) -> bool {
        self.border_color.as_deref() == Some("silver")
            || self.security_stamp.as_deref() == Some("acorn")
    }
}
