//! Per-card render planning.
//!
//! The planner walks the faces of a card, resolves their geometry and
//! fits every text element into its region. The result is a `CardPlan`
//! a rasterizer can draw without further measuring.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::placed::{Backdrop, BackdropKind, PlacedText, TextAnchor, TextRole};
use crate::cards::{Card, CardFace, CardRecord, FaceSymbol, LayoutType};
use crate::core::{GlyphPrecedence, RenderConfig, Xy, BORDER_CENTER_OFFSET, DRAW_SIZE};
use crate::error::Result;
use crate::layout::{layout_data, LayoutData};
use crate::text::{
    centered_baseline, color_indicator_glyphs, print_symbols, symbol_glyph, Font, TextFitter,
    TextMetrics, ATTRACTION_TEXT, PAINTBRUSH_KEY,
};

/// Drawing plan of one face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacePlan {
    pub name: String,
    pub layout: LayoutType,
    pub face_index: Option<u8>,
    pub geometry: Arc<LayoutData>,
    pub texts: Vec<PlacedText>,
    pub backdrop: Option<Backdrop>,
    /// Whether the type line leaves room for a set icon.
    pub set_icon: bool,
}

impl FacePlan {
    /// First text with the given role.
    #[must_use]
    pub fn text(&self, role: TextRole) -> Option<&PlacedText> {
        self.texts.iter().find(|text| text.role == role)
    }
}

/// Drawing plan of a whole card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlan {
    pub name: String,
    pub layout: LayoutType,
    pub playtest: bool,
    pub faces: SmallVec<[FacePlan; 2]>,
    /// Fuse reminder line spanning both halves (fuse cards only).
    pub fuse: Option<PlacedText>,
}

/// Plans cards with one metrics backend and one configuration.
pub struct Planner<'m, M: TextMetrics + ?Sized> {
    metrics: &'m M,
    config: RenderConfig,
}

impl<'m, M: TextMetrics + ?Sized> Planner<'m, M> {
    pub fn new(metrics: &'m M, config: RenderConfig) -> Self {
        Self { metrics, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn fitter(&self) -> TextFitter<'m, M> {
        TextFitter::new(self.metrics).with_min_size(self.config.min_font_size)
    }

    /// Plan every printable face of `card`, plus the fuse strip.
    pub fn plan_card(&self, card: &Card) -> Result<CardPlan> {
        let faces = card
            .printable_faces()?
            .iter()
            .map(|face| self.plan_face(face))
            .collect::<Result<SmallVec<[FacePlan; 2]>>>()?;

        let fuse = if card.layout() == LayoutType::Fuse {
            Some(self.plan_fuse(card)?)
        } else {
            None
        };

        debug!(card = card.name(), layout = %card.layout(), faces = faces.len(), "planned card");
        Ok(CardPlan {
            name: card.name().to_string(),
            layout: card.layout(),
            playtest: self.config.playtest_size,
            faces,
            fuse,
        })
    }

    /// Plan each card, logging and skipping the ones that fail.
    pub fn plan_deck<'c>(&self, cards: impl IntoIterator<Item = &'c Card>) -> Vec<CardPlan> {
        cards
            .into_iter()
            .filter_map(|card| match self.plan_card(card) {
                Ok(plan) => Some(plan),
                Err(err) => {
                    warn!(card = card.name(), error = %err, "skipping card");
                    None
                }
            })
            .collect()
    }

    /// Classify and plan source records, logging and skipping the ones
    /// that fail at either step.
    pub fn plan_records(&self, records: impl IntoIterator<Item = CardRecord>) -> Vec<CardPlan> {
        let mut cards = Vec::new();
        for record in records {
            let name = record.display_name().to_string();
            match Card::with_config(record, &self.config) {
                Ok(card) => cards.push(card),
                Err(err) => warn!(card = %name, error = %err, "skipping card"),
            }
        }
        self.plan_deck(&cards)
    }

    /// Plan one face.
    pub fn plan_face(&self, face: &CardFace) -> Result<FacePlan> {
        let geometry = layout_data(face.layout(), face.geometry_index(), self.config.playtest_size)?;
        let is_adventure_half = face.layout() == LayoutType::Adventure && face.face_index().ok() == Some(1);

        let mut texts = self.plan_title(face, &geometry)?;
        texts.push(self.plan_type_line(face, &geometry, !is_adventure_half)?);

        if face.layout() == LayoutType::Attraction {
            if let Some(h) = geometry.anchors.attraction_h {
                texts.push(
                    PlacedText::new(
                        TextRole::AttractionNumbers,
                        ATTRACTION_TEXT,
                        Font::rules(DRAW_SIZE.attraction),
                        Xy::new(h, geometry.border.rules.top + DRAW_SIZE.separator),
                        TextAnchor::MiddleAscender,
                    )
                    .with_line_spacing(DRAW_SIZE.attraction_interline),
                );
            }
        }

        if !face.layout().has_blank_rules_box() {
            texts.push(self.plan_rules(face, &geometry)?);
        }
        if let Some(bottom) = self.plan_bottom(face, &geometry)? {
            texts.push(bottom);
        }
        if !is_adventure_half {
            texts.push(self.plan_credits(face, &geometry)?);
        }

        Ok(FacePlan {
            name: face.display_name().to_string(),
            layout: face.layout(),
            face_index: face.face_index().ok(),
            backdrop: self.plan_backdrop(face, &geometry),
            geometry,
            texts,
            set_icon: !is_adventure_half,
        })
    }

    /// Face symbol, mana cost, name and oracle name.
    fn plan_title(&self, face: &CardFace, geometry: &LayoutData) -> Result<Vec<PlacedText>> {
        let fitter = self.fitter();
        let card = geometry.border.card;
        let card_width = geometry.size.card.horiz;
        let title_font = Font::title(DRAW_SIZE.title);
        let baseline = |font: Font| centered_baseline(self.metrics, font, card.top, geometry.size.title);

        if face.is_token_or_emblem() {
            let font = fitter.fit_single_line(
                face.name(),
                card_width - 2 * DRAW_SIZE.separator,
                title_font,
            )?;
            return Ok(vec![PlacedText::new(
                TextRole::Name,
                face.name(),
                font,
                Xy::new(card.left + card_width / 2, baseline(font)),
                TextAnchor::MiddleBaseline,
            )]);
        }

        let mut texts = Vec::new();

        let mana_cost = print_symbols(face.mana_cost()?);
        let mana_symbols = mana_cost.chars().count() as i32;
        let max_mana_width = (card_width / 2).max(card_width / 16 * mana_symbols);
        let mana_font = fitter.fit_single_line(&mana_cost, max_mana_width, title_font)?;
        let mana_right = card.right - DRAW_SIZE.separator;
        let mana_left = mana_right - self.metrics.measure(&mana_cost, mana_font);
        texts.push(PlacedText::new(
            TextRole::ManaCost,
            mana_cost,
            mana_font,
            Xy::new(mana_right, baseline(mana_font)),
            TextAnchor::RightBaseline,
        ));

        let mut name_left = card.left + DRAW_SIZE.separator;
        let mut max_name_width = mana_left - name_left - DRAW_SIZE.separator;

        if let Some(symbol) = self.face_symbol(face) {
            if let Some(glyph) = symbol_glyph(&symbol.key()) {
                let text = format!("{glyph} ");
                let space = self.metrics.measure(&text, title_font);
                texts.push(PlacedText::new(
                    TextRole::FaceSymbol,
                    text,
                    title_font,
                    Xy::new(name_left, baseline(title_font)),
                    TextAnchor::LeftBaseline,
                ));
                name_left += space;
                max_name_width -= space;
            }
        }

        let name = face.display_name();
        let name_font = fitter.fit_single_line(name, max_name_width, title_font)?;
        texts.push(PlacedText::new(
            TextRole::Name,
            name,
            name_font,
            Xy::new(name_left, baseline(name_font)),
            TextAnchor::LeftBaseline,
        ));

        let composite = matches!(
            face.layout(),
            LayoutType::Split | LayoutType::Fuse | LayoutType::Aftermath | LayoutType::Flip
        );
        if face.flavor_name().is_some() && !composite {
            texts.push(PlacedText::new(
                TextRole::OracleName,
                face.name(),
                Font::title(DRAW_SIZE.text),
                Xy::new(
                    (card.left + card.right) / 2,
                    geometry.border.image + DRAW_SIZE.separator,
                ),
                TextAnchor::MiddleTop,
            ));
        }

        Ok(texts)
    }

    /// Face glyph after applying the acorn switch and precedence.
    fn face_symbol(&self, face: &CardFace) -> Option<FaceSymbol> {
        match face.face_symbol(self.config.glyph_precedence) {
            Some(FaceSymbol::Acorn) if !self.config.use_acorn_symbol => face
                .face_symbol(GlyphPrecedence::OrientationFirst)
                .filter(|symbol| *symbol != FaceSymbol::Acorn),
            symbol => symbol,
        }
    }

    fn plan_type_line(&self, face: &CardFace, geometry: &LayoutData, set_icon: bool) -> Result<PlacedText> {
        let icon_margin = if set_icon {
            DRAW_SIZE.separator + DRAW_SIZE.icon
        } else {
            0
        };
        let max_width = geometry.size.card.horiz - 2 * DRAW_SIZE.separator - icon_margin;

        let indicator = face.color_indicator();
        let text = if indicator.is_empty() {
            face.type_line().to_string()
        } else {
            format!("{} ({})", face.type_line(), color_indicator_glyphs(indicator))
        };

        let font = self
            .fitter()
            .fit_single_line(&text, max_width, Font::title(DRAW_SIZE.type_line))?;
        let baseline = centered_baseline(
            self.metrics,
            font,
            geometry.border.type_line,
            geometry.size.type_line,
        ) - BORDER_CENTER_OFFSET;

        Ok(PlacedText::new(
            TextRole::TypeLine,
            text,
            font,
            Xy::new(geometry.border.card.left + DRAW_SIZE.separator, baseline),
            TextAnchor::LeftBaseline,
        ))
    }

    fn plan_rules(&self, face: &CardFace, geometry: &LayoutData) -> Result<PlacedText> {
        let rules = geometry.border.rules;
        let raw = format!("{}{}", face.color_indicator_reminder_text(), face.oracle_text()?);
        let raw = raw.trim();
        let text = if self.config.use_text_symbols {
            print_symbols(raw)
        } else {
            raw.to_string()
        };

        let fit = self.fitter().fit_multi_line(
            &text,
            geometry.size.rules.horiz - 2 * DRAW_SIZE.separator,
            geometry.size.rules.vert - DRAW_SIZE.separator,
            Font::rules(DRAW_SIZE.text),
        )?;

        Ok(PlacedText::new(
            TextRole::Rules,
            fit.text,
            fit.font,
            Xy::new(rules.left + DRAW_SIZE.separator, rules.top + DRAW_SIZE.separator),
            TextAnchor::LeftAscender,
        ))
    }

    fn plan_bottom(&self, face: &CardFace, geometry: &LayoutData) -> Result<Option<PlacedText>> {
        let Some(text) = face.bottom_text()? else {
            return Ok(None);
        };
        let font = self.fitter().fit_single_line(
            &text,
            geometry.size.bottom_box.horiz - 2 * DRAW_SIZE.separator,
            Font::rules(DRAW_SIZE.title),
        )?;
        Ok(Some(PlacedText::new(
            TextRole::BottomData,
            text,
            font,
            geometry.anchors.bottom_box,
            TextAnchor::Middle,
        )))
    }

    fn plan_credits(&self, face: &CardFace, geometry: &LayoutData) -> Result<PlacedText> {
        let size = if self.config.playtest_size {
            DRAW_SIZE.credits_playtest
        } else {
            DRAW_SIZE.credits
        };
        let label = format!("{} v{}", self.config.credits_label, env!("CARGO_PKG_VERSION"));
        // Hand-made tokens and emblems have no artist.
        let text = match face.artist() {
            Ok(artist) => format!("{} {artist} - {label}", print_symbols(PAINTBRUSH_KEY)),
            Err(_) => label,
        };

        let font = self.fitter().fit_single_line(
            &text,
            geometry.size.card.horiz - 2 * DRAW_SIZE.separator,
            Font::rules(size),
        )?;
        let baseline = centered_baseline(self.metrics, font, geometry.border.credits, geometry.size.credits);

        Ok(PlacedText::new(
            TextRole::Credits,
            text,
            font,
            Xy::new(geometry.border.card.left + DRAW_SIZE.separator, baseline),
            TextAnchor::LeftBaseline,
        ))
    }

    fn plan_backdrop(&self, face: &CardFace, geometry: &LayoutData) -> Option<Backdrop> {
        if self.config.full_art_lands {
            return None;
        }
        let kind = match face.layout() {
            LayoutType::Land => BackdropKind::BasicLand(face.name().split_whitespace().last()?.to_string()),
            LayoutType::Emblem => BackdropKind::Emblem,
            _ => return None,
        };
        Some(Backdrop {
            kind,
            position: geometry.anchors.image_position?,
        })
    }

    /// Fuse reminder line, drawn once across both halves.
    fn plan_fuse(&self, card: &Card) -> Result<PlacedText> {
        let text = card.fuse_text()?;
        let geometry = layout_data(LayoutType::Fuse, 0, self.config.playtest_size)?;
        let (top, height) = match (geometry.border.fuse, geometry.size.fuse) {
            (Some(border), Some(size)) => (border.top, size.vert),
            _ => (geometry.border.rules.bottom, 0),
        };

        let font = self.fitter().fit_single_line(
            text,
            geometry.card_size.v - 2 * DRAW_SIZE.separator,
            Font::rules(DRAW_SIZE.text),
        )?;
        Ok(PlacedText::new(
            TextRole::Fuse,
            text,
            font,
            Xy::new(DRAW_SIZE.separator, centered_baseline(self.metrics, font, top, height)),
            TextAnchor::LeftBaseline,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ManaColor;
    use crate::text::WidthTableMetrics;

    fn bear() -> Card {
        Card::from_record(
            CardRecord::new("Grizzly Bears", "Creature — Bear")
                .with_mana_cost("{1}{G}")
                .with_colors(&[ManaColor::Green])
                .with_oracle_text("")
                .with_power_toughness("2", "2")
                .with_artist("Jeff A. Menges"),
        )
        .unwrap()
    }

    #[test]
    fn test_vanilla_creature_has_no_rules_text() {
        let metrics = WidthTableMetrics::new();
        let planner = Planner::new(&metrics, RenderConfig::default());
        let plan = planner.plan_card(&bear()).unwrap();

        assert_eq!(plan.layout, LayoutType::VanillaCreature);
        let face = &plan.faces[0];
        assert!(face.text(TextRole::Rules).is_none());
        assert_eq!(face.text(TextRole::BottomData).unwrap().text, "2/2");
        assert_eq!(
            face.text(TextRole::BottomData).unwrap().position,
            face.geometry.anchors.bottom_box
        );
        assert_eq!(face.text(TextRole::ManaCost).unwrap().text, "\u{201}\u{224}");
        assert!(face.text(TextRole::Credits).unwrap().text.contains("Jeff A. Menges"));
        assert!(face.set_icon);
    }

    #[test]
    fn test_name_starts_after_face_symbol() {
        let metrics = WidthTableMetrics::new();
        let planner = Planner::new(&metrics, RenderConfig::default());
        let card = Card::from_record(
            CardRecord::new("Gleeful Demolition", "Sorcery")
                .with_mana_cost("{R}")
                .with_oracle_text("Destroy target artifact.")
                .with_border_color("silver")
                .with_artist("Someone"),
        )
        .unwrap();
        let plan = planner.plan_card(&card).unwrap();
        let face = &plan.faces[0];
        let symbol = face.text(TextRole::FaceSymbol).unwrap();
        assert!(symbol.text.starts_with('\u{23C}'));
        assert!(face.text(TextRole::Name).unwrap().position.h > symbol.position.h);

        let no_acorn = Planner::new(&metrics, RenderConfig::default().with_acorn_symbol(false));
        let plan = no_acorn.plan_card(&card).unwrap();
        assert!(plan.faces[0].text(TextRole::FaceSymbol).is_none());
    }
}
