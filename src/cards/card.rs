//! Classified cards and face derivation.
//!
//! `Card` wraps a source record with its resolved layout. Two-part cards
//! split into exactly two ordered `CardFace`s, with shared fields (acorn
//! flag, layout, artist) propagated and per-layout color corrections
//! applied; single cards expose themselves as one face.

use smallvec::SmallVec;
use tracing::debug;

use super::classify::{classify, is_basic_land, strip_fuse_text};
use super::color::{extract_colors, normalize_colors, Colors};
use super::face::{CardFace, FaceFlags};
use super::layout_type::LayoutType;
use super::record::CardRecord;
use crate::core::RenderConfig;
use crate::error::{ProxyError, Result};

/// Faces of one card: one or two.
pub type Faces = SmallVec<[CardFace; 2]>;

/// A classified card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    record: CardRecord,
    /// Layout as classified from the record.
    classified: LayoutType,
    /// Layout used for drawing (after alternative frames).
    layout: LayoutType,
    fuse_text: Option<String>,
    /// The card seen as a single face.
    whole: CardFace,
}

impl Card {
    /// Classify a record with default options.
    pub fn from_record(record: CardRecord) -> Result<Self> {
        Self::with_config(record, &RenderConfig::default())
    }

    /// Classify a record, applying alternative frames if requested.
    pub fn with_config(record: CardRecord, config: &RenderConfig) -> Result<Self> {
        let classification = classify(&record)?;
        let classified = classification.layout;
        let layout = if config.alternative_frames {
            classified.with_alternative_frames()
        } else {
            classified
        };
        if layout != classified {
            debug!(card = record.display_name(), from = %classified, to = %layout, "alternative frame");
        }

        let whole = whole_face(&record, layout, classification.fuse_text.clone())?;
        Ok(Self {
            record,
            classified,
            layout,
            fuse_text: classification.fuse_text,
            whole,
        })
    }

    /// Parse a JSON record and classify it.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_record(CardRecord::from_json(json)?)
    }

    /// Override the printed name with a flavor name.
    #[must_use]
    pub fn with_flavor_name(mut self, flavor_name: impl Into<String>) -> Self {
        let flavor_name = flavor_name.into();
        self.whole.flavor_name = (!flavor_name.is_empty()).then_some(flavor_name);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.whole.name()
    }

    /// Layout used for drawing.
    #[must_use]
    pub fn layout(&self) -> LayoutType {
        self.layout
    }

    /// Layout as classified, before alternative frames.
    #[must_use]
    pub fn classified_layout(&self) -> LayoutType {
        self.classified
    }

    #[must_use]
    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    /// The card viewed as one face.
    #[must_use]
    pub fn as_face(&self) -> &CardFace {
        &self.whole
    }

    /// The trailing fuse line, for fuse cards only.
    pub fn fuse_text(&self) -> Result<&str> {
        if self.layout != LayoutType::Fuse {
            return Err(ProxyError::missing(self.name(), "fuse_text"));
        }
        self.fuse_text
            .as_deref()
            .ok_or_else(|| ProxyError::missing(self.name(), "fuse_text"))
    }

    #[must_use]
    pub fn is_two_parts(&self) -> bool {
        self.record.is_two_parts()
    }

    /// The two faces of a two-part card.
    ///
    /// Fails on single cards and on records whose layout has one face.
    pub fn card_faces(&self) -> Result<Faces> {
        let name = self.name();
        if self.layout.face_count() != 2 {
            return Err(ProxyError::face_access(
                name,
                format!("layout {} has one face", self.layout),
            ));
        }
        let raw = self
            .record
            .card_faces
            .as_deref()
            .filter(|faces| !faces.is_empty())
            .ok_or_else(|| ProxyError::face_access(name, "faces requested on a single card"))?;
        let [front, back] = raw else {
            return Err(ProxyError::face_access(
                name,
                format!("expected 2 faces, record has {}", raw.len()),
            ));
        };

        let mut faces = Faces::new();
        for (index, raw_face) in [front, back].into_iter().enumerate() {
            faces.push(self.derive_face(raw_face, index as u8)?);
        }
        Ok(faces)
    }

    /// Every printable unit: both faces of a two-part card, or the card
    /// itself.
    pub fn printable_faces(&self) -> Result<Faces> {
        if self.is_two_parts() && self.layout.face_count() == 2 {
            self.card_faces()
        } else {
            let mut faces = Faces::new();
            faces.push(self.whole.clone());
            Ok(faces)
        }
    }

    fn derive_face(&self, raw: &CardRecord, index: u8) -> Result<CardFace> {
        let name = raw
            .name
            .clone()
            .ok_or_else(|| ProxyError::missing(self.name(), "name"))?;
        let type_line = raw
            .type_line
            .clone()
            .ok_or_else(|| ProxyError::missing(&name, "type_line"))?;

        let mut colors = raw.colors.as_deref().map(normalize_colors);
        let mut color_indicator = raw.color_indicator.as_deref().map(normalize_colors);
        let mut oracle_text = raw.oracle_text.clone();

        // Corrections follow the classified layout, not the drawn one.
        match self.classified {
            layout if layout.is_split_family() || layout == LayoutType::Adventure => {
                let cost = raw
                    .mana_cost
                    .as_deref()
                    .ok_or_else(|| ProxyError::missing(&name, "mana_cost"))?;
                colors = Some(extract_colors(cost));
            }
            LayoutType::Flip => {
                let parent = self.whole.colors()?;
                colors = Some(Colors::from_slice(parent));
                if index == 1 {
                    color_indicator = Some(Colors::from_slice(parent));
                }
            }
            _ => {}
        }

        if let (LayoutType::Fuse, Some(fuse)) = (self.classified, self.fuse_text.as_deref()) {
            oracle_text = oracle_text.map(|text| strip_fuse_text(&text, fuse));
        }

        let flags = FaceFlags {
            basic_land: is_basic_land(&name),
            attraction: type_line.contains("Attraction"),
            ..self.whole.flags
        };

        Ok(CardFace {
            mana_cost: raw.mana_cost.clone(),
            oracle_text,
            power: raw.power.clone(),
            toughness: raw.toughness.clone(),
            loyalty: raw.loyalty.clone(),
            defense: raw.defense.clone(),
            colors,
            color_indicator,
            artist: raw.artist.clone().or_else(|| self.record.artist.clone()),
            layout: self.layout,
            face_index: Some(index),
            flags,
            flavor_name: raw.flavor_name.clone().filter(|f| !f.is_empty()),
            fuse_text: self.fuse_text.clone(),
            name,
            type_line,
        })
    }
}

/// Build the whole-card view of a record.
fn whole_face(record: &CardRecord, layout: LayoutType, fuse_text: Option<String>) -> Result<CardFace> {
    let raw_name = record
        .name
        .clone()
        .ok_or_else(|| ProxyError::missing(record.display_name(), "name"))?;
    let raw_type = record
        .type_line
        .clone()
        .ok_or_else(|| ProxyError::missing(&raw_name, "type_line"))?;

    let emblem = raw_type.contains("Emblem");
    let token = !emblem && raw_type.contains("Token");

    let (name, type_line) = if emblem {
        (raw_name.replace(" Emblem", ""), "Emblem".to_string())
    } else {
        (raw_name, raw_type)
    };

    let colors = record.colors.as_deref().map(normalize_colors);
    let mut color_indicator = record.color_indicator.as_deref().map(normalize_colors);

    // Tokens show their colors as pips, not through a mana cost.
    if token && !record.is_two_parts() && color_indicator.is_none() {
        if let Some(printed) = colors.as_ref().filter(|c| !c.is_empty()) {
            color_indicator = Some(printed.clone());
        }
    }

    let flags = FaceFlags {
        token,
        emblem,
        basic_land: is_basic_land(&name),
        acorn: !token && !emblem && record.is_acorn(),
        attraction: type_line.contains("Attraction"),
    };

    Ok(CardFace {
        name,
        mana_cost: record.mana_cost.clone(),
        type_line,
        oracle_text: record.oracle_text.clone(),
        power: record.power.clone(),
        toughness: record.toughness.clone(),
        loyalty: record.loyalty.clone(),
        defense: record.defense.clone(),
        colors,
        color_indicator,
        artist: record.artist.clone(),
        layout,
        face_index: None,
        flags,
        flavor_name: record.flavor_name.clone().filter(|f| !f.is_empty()),
        fuse_text,
    })
}
