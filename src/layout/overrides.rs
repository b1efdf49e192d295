//! Per-layout deviations from the standard template.
//!
//! An override only describes what differs; `derive_layout` turns the
//! template plus an override into a full `LayoutData`.

use super::data::{BorderData, LayoutData};
use crate::cards::LayoutType;
use crate::core::{Rotation, RotationPair, Xy, BORDER_START_OFFSET};

/// Rules box height of standard frames.
pub const RULES_STANDARD: i32 = 303;
/// Rules box height of each split half.
pub const RULES_SPLIT: i32 = 280;
/// Rules box height of the top half of an aftermath card.
pub const RULES_AFTERMATH: i32 = 175;
/// Rules box height of each flip half.
pub const RULES_FLIP: i32 = 200;
/// Rules box height of tokens and emblems, leaving room for a backdrop.
pub const RULES_TOKEN: i32 = 250;
/// Height of the fuse reminder strip.
pub const FUSE_STRIP: i32 = 50;
/// Width of the attraction number column.
pub const ATTRACTION_COLUMN: i32 = 100;

/// Where the illustration band sits in the vertical stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackOrder {
    /// Title, illustration, type line, rules, credits.
    #[default]
    ImageAfterTitle,
    /// Title, type line, rules, credits, illustration. The illustration
    /// is shared with a mirrored second stack (flip cards).
    ImageLast,
}

/// A region carved out of the rules box after the stack is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulesCarve {
    /// Keep only the right half of the rules box.
    RightHalf,
    /// Strip below the rules box spanning `width` pixels from the left edge.
    FuseStrip { height: i32, width: i32 },
    /// Column at the right edge of the rules box.
    AttractionColumn { width: i32 },
}

/// What a layout face changes relative to the template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutOverrides {
    pub rotation: Option<RotationPair>,
    pub card: BorderData,
    pub title: Option<i32>,
    pub rules_vert: i32,
    pub credits: Option<i32>,
    pub stack: StackOrder,
    pub carve: Option<RulesCarve>,
    /// Whether the face has an illustration backdrop.
    pub backdrop: bool,
}

impl LayoutOverrides {
    /// Upright full card with the standard rules box.
    #[must_use]
    pub const fn upright(card_size: Xy) -> Self {
        Self {
            rotation: None,
            card: BorderData::new(0, card_size.v, 0, card_size.h),
            title: None,
            rules_vert: RULES_STANDARD,
            credits: None,
            stack: StackOrder::ImageAfterTitle,
            carve: None,
            backdrop: false,
        }
    }

    #[must_use]
    pub const fn with_rules_vert(mut self, rules_vert: i32) -> Self {
        self.rules_vert = rules_vert;
        self
    }

    #[must_use]
    pub const fn with_carve(mut self, carve: RulesCarve) -> Self {
        self.carve = Some(carve);
        self
    }
}

/// Overrides for one face of a layout.
///
/// `template` is the standard face-0 geometry; adventure halves are
/// positioned inside its rules box.
#[must_use]
pub fn overrides_for(
    layout: LayoutType,
    face: u8,
    card_size: Xy,
    template: &LayoutData,
) -> LayoutOverrides {
    let base = LayoutOverrides::upright(card_size);

    match (layout, face) {
        (LayoutType::Split, _) | (LayoutType::Aftermath, 1) => split_half(base, face, card_size),
        (LayoutType::Fuse, _) => split_half(base, face, card_size).with_carve(RulesCarve::FuseStrip {
            height: FUSE_STRIP,
            width: card_size.v,
        }),
        (LayoutType::Aftermath, _) => LayoutOverrides {
            card: BorderData {
                bottom: card_size.v / 2,
                ..base.card
            },
            ..base.with_rules_vert(RULES_AFTERMATH)
        },
        (LayoutType::Adventure, 1) => LayoutOverrides {
            card: BorderData::new(
                template.border.rules.top - BORDER_START_OFFSET,
                template.border.rules.bottom,
                0,
                card_size.h / 2,
            ),
            title: Some(template.size.title + BORDER_START_OFFSET),
            rules_vert: template.size.rules.vert - template.size.title - template.size.type_line,
            credits: Some(0),
            ..base
        },
        (LayoutType::Adventure, _) => base.with_carve(RulesCarve::RightHalf),
        (LayoutType::Flip, _) => LayoutOverrides {
            rotation: (face == 1).then(|| RotationPair::new(Rotation::Rot180)),
            stack: StackOrder::ImageLast,
            ..base.with_rules_vert(RULES_FLIP)
        },
        (LayoutType::Land, _) => LayoutOverrides {
            backdrop: true,
            ..base.with_rules_vert(0)
        },
        (LayoutType::VanillaCreature | LayoutType::VanillaToken, _) => base.with_rules_vert(0),
        (LayoutType::Emblem, _) => LayoutOverrides {
            backdrop: true,
            ..base.with_rules_vert(RULES_TOKEN)
        },
        (LayoutType::Token, _) => base.with_rules_vert(RULES_TOKEN),
        (LayoutType::Attraction, _) => base.with_carve(RulesCarve::AttractionColumn {
            width: ATTRACTION_COLUMN,
        }),
        (LayoutType::Standard | LayoutType::Transform | LayoutType::ModalDfc, _) => base,
    }
}

/// Sideways half of a split card: the card is turned 90 degrees so its
/// long edge becomes the width, and each face takes one half of it.
fn split_half(base: LayoutOverrides, face: u8, card_size: Xy) -> LayoutOverrides {
    let middle = card_size.v / 2;
    let (left, right) = if face == 0 {
        (0, middle)
    } else {
        (middle, card_size.v)
    };
    LayoutOverrides {
        rotation: Some(RotationPair::new(Rotation::Rot90)),
        card: BorderData::new(0, card_size.h, left, right),
        ..base.with_rules_vert(RULES_SPLIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CARD_SIZE;
    use crate::layout::derive::template;

    #[test]
    fn test_split_halves() {
        let template = template();
        let left = overrides_for(LayoutType::Split, 0, CARD_SIZE, template);
        let right = overrides_for(LayoutType::Split, 1, CARD_SIZE, template);
        assert_eq!(left.card, BorderData::new(0, 750, 0, 525));
        assert_eq!(right.card, BorderData::new(0, 750, 525, 1050));
        assert_eq!(left.rotation.unwrap().forward, Rotation::Rot90);
        assert_eq!(left.rules_vert, RULES_SPLIT);
    }

    #[test]
    fn test_aftermath_second_half_is_split() {
        let template = template();
        assert_eq!(
            overrides_for(LayoutType::Aftermath, 1, CARD_SIZE, template),
            overrides_for(LayoutType::Split, 1, CARD_SIZE, template)
        );
        let top = overrides_for(LayoutType::Aftermath, 0, CARD_SIZE, template);
        assert_eq!(top.card.bottom, 525);
        assert_eq!(top.rotation, None);
    }

    #[test]
    fn test_adventure_half_inside_template_rules_box() {
        let template = template();
        let adventure = overrides_for(LayoutType::Adventure, 1, CARD_SIZE, template);
        assert_eq!(adventure.card, BorderData::new(688, 995, 0, 375));
        assert_eq!(adventure.title, Some(94));
        assert_eq!(adventure.rules_vert, 158);
        assert_eq!(adventure.credits, Some(0));
    }

    #[test]
    fn test_blank_rules_boxes() {
        let template = template();
        for layout in [
            LayoutType::Land,
            LayoutType::VanillaCreature,
            LayoutType::VanillaToken,
        ] {
            assert_eq!(overrides_for(layout, 0, CARD_SIZE, template).rules_vert, 0);
        }
    }
}
