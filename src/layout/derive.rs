//! Geometry derivation: template + overrides -> `LayoutData`.

use std::sync::OnceLock;

use tracing::debug;

use super::data::{Anchors, BorderData, Borders, LayoutData, SizeData, Sizes};
use super::overrides::{overrides_for, LayoutOverrides, RulesCarve, StackOrder};
use crate::cards::LayoutType;
use crate::core::{card_size, Xy, BORDER_CENTER_OFFSET, BORDER_START_OFFSET, CARD_SIZE, DRAW_SIZE};
use crate::error::{ProxyError, Result};

/// Height of the title band.
pub const TITLE_BAND: i32 = 90;
/// Height of the type line band.
pub const TYPE_BAND: i32 = 55;
/// Height of the credits band.
pub const CREDITS_BAND: i32 = 55;
/// Size of the power/toughness (or loyalty, defense) box.
pub const BOTTOM_BOX: SizeData = SizeData::new(160, 60);

fn seed() -> LayoutData {
    LayoutData {
        layout: LayoutType::Standard,
        face_index: 0,
        card_size: CARD_SIZE,
        rotation: None,
        border: Borders::default(),
        size: Sizes {
            title: TITLE_BAND,
            type_line: TYPE_BAND,
            bottom_box: BOTTOM_BOX,
            credits: CREDITS_BAND,
            ..Sizes::default()
        },
        anchors: Anchors::default(),
    }
}

/// Standard face-0 geometry, derived once from the band constants.
///
/// Every other layout is derived from this template.
pub fn template() -> &'static LayoutData {
    static TEMPLATE: OnceLock<LayoutData> = OnceLock::new();
    TEMPLATE.get_or_init(|| derive_layout(&seed(), &LayoutOverrides::upright(CARD_SIZE)))
}

/// Apply `overrides` to `base` and run the derivation pipeline.
///
/// Band sizes not named by the override (type line, bottom box and, unless
/// overridden, title and credits) come from `base`. Identity fields
/// (`layout`, `face_index`, `card_size`) are copied from `base`.
#[must_use]
pub fn derive_layout(base: &LayoutData, overrides: &LayoutOverrides) -> LayoutData {
    let card = overrides.card;
    let title = overrides.title.unwrap_or(base.size.title);
    let type_line = base.size.type_line;
    let credits = overrides.credits.unwrap_or(base.size.credits);
    let bottom_box_size = base.size.bottom_box;

    let card_size = SizeData::new(card.width(), card.height());
    let mut rules = BorderData {
        left: card.left,
        right: card.right,
        ..BorderData::default()
    };
    let mut rules_size = SizeData::new(rules.width(), overrides.rules_vert);

    let others = title + type_line + rules_size.vert + credits;
    let (image, image_border, type_border, credits_border) = match overrides.stack {
        StackOrder::ImageAfterTitle => {
            let image = card_size.vert - others;
            let image_border = card.top + title;
            let type_border = image_border + image;
            rules.top = type_border + type_line;
            rules.bottom = rules.top + rules_size.vert;
            (image, image_border, type_border, rules.bottom)
        }
        StackOrder::ImageLast => {
            let image = card_size.vert - 2 * others;
            let type_border = card.top + title;
            rules.top = type_border + type_line;
            rules.bottom = rules.top + rules_size.vert;
            (image, rules.bottom + credits, type_border, rules.bottom)
        }
    };

    let mut fuse = None;
    let mut attraction = None;
    let mut fuse_v = None;
    let mut attraction_h = None;
    match overrides.carve {
        Some(RulesCarve::RightHalf) => {
            rules_size.horiz /= 2;
            rules.left = rules.right - rules_size.horiz;
        }
        Some(RulesCarve::FuseStrip { height, width }) => {
            rules.bottom -= height;
            rules_size.vert -= height;
            let border = BorderData::new(rules.bottom, rules.bottom + height, 0, width);
            fuse_v = Some(border.top + height / 2);
            fuse = Some((border, SizeData::new(width, height)));
        }
        Some(RulesCarve::AttractionColumn { width }) => {
            rules.right -= width;
            rules_size.horiz -= width;
            let border = BorderData::new(
                rules.top - BORDER_START_OFFSET,
                rules.bottom,
                rules.right,
                card.right,
            );
            attraction_h = Some(border.left + width / 2);
            attraction = Some((border, SizeData::new(width, border.height())));
        }
        None => {}
    }

    let bottom_box_bottom = credits_border + credits;
    let bottom_box_right = rules.right - DRAW_SIZE.separator;
    let bottom_box = BorderData::new(
        bottom_box_bottom - bottom_box_size.vert,
        bottom_box_bottom,
        bottom_box_right - bottom_box_size.horiz,
        bottom_box_right,
    );

    let icon_center = Xy::new(
        card.right - DRAW_SIZE.separator - DRAW_SIZE.icon / 2,
        type_border + type_line / 2,
    );

    let image_position = overrides.backdrop.then(|| {
        Xy::new(
            card.left + (card_size.horiz - DRAW_SIZE.image).div_euclid(2),
            image_border + (image - DRAW_SIZE.image).div_euclid(2),
        )
    });

    LayoutData {
        layout: base.layout,
        face_index: base.face_index,
        card_size: base.card_size,
        rotation: overrides.rotation,
        border: Borders {
            card,
            image: image_border,
            type_line: type_border,
            rules,
            bottom_box,
            credits: credits_border,
            fuse: fuse.map(|(border, _)| border),
            attraction: attraction.map(|(border, _)| border),
        },
        size: Sizes {
            card: card_size,
            title,
            image,
            type_line,
            rules: rules_size,
            bottom_box: bottom_box_size,
            credits,
            fuse: fuse.map(|(_, size)| size),
            attraction: attraction.map(|(_, size)| size),
        },
        anchors: Anchors {
            bottom_box: Xy::new(
                bottom_box.left + bottom_box_size.horiz / 2,
                bottom_box.top + bottom_box_size.vert / 2 + BORDER_CENTER_OFFSET,
            ),
            fuse_v,
            attraction_h,
            icon_center,
            image_position,
        },
    }
}

/// Geometry of one face of a layout on a card of `card_size` pixels.
///
/// Fails with `InvalidFaceAccess` when `face` is not a face of `layout`.
pub fn resolve(layout: LayoutType, face: u8, card_size: Xy) -> Result<LayoutData> {
    if face >= layout.face_count() {
        return Err(ProxyError::face_access(
            layout.as_str(),
            format!("layout has {} face(s), face {face} requested", layout.face_count()),
        ));
    }

    Ok(resolve_unchecked(layout, face, card_size))
}

/// `resolve` for a face already known to belong to `layout`.
pub(crate) fn resolve_unchecked(layout: LayoutType, face: u8, card_size: Xy) -> LayoutData {
    let template = template();
    let overrides = overrides_for(layout, face, card_size, template);
    debug!(%layout, face, %card_size, "deriving layout geometry");

    LayoutData {
        layout,
        face_index: face,
        card_size,
        ..derive_layout(template, &overrides)
    }
}

/// Resolve a layout given by its string key (`"split"`, `"modal_dfc"`, ...).
///
/// Unknown keys fail with `UnknownLayout`; there is no fallback layout.
pub fn resolve_key(key: &str, face: u8, playtest: bool) -> Result<LayoutData> {
    let layout: LayoutType = key.parse()?;
    resolve(layout, face, card_size(playtest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rotation, CARD_SIZE_PLAYTEST};

    #[test]
    fn test_template_stack() {
        let template = template();
        assert_eq!(template.size.card, SizeData::new(750, 1050));
        assert_eq!(template.size.image, 547);
        assert_eq!(template.border.image, 90);
        assert_eq!(template.border.type_line, 637);
        assert_eq!(template.border.rules, BorderData::new(692, 995, 0, 750));
        assert_eq!(template.border.credits, 995);
        assert!(template.stack_is_consistent());
    }

    #[test]
    fn test_template_anchors() {
        let template = template();
        assert_eq!(template.border.bottom_box, BorderData::new(990, 1050, 575, 735));
        assert_eq!(template.anchors.bottom_box, Xy::new(655, 1022));
        assert_eq!(template.anchors.icon_center, Xy::new(715, 664));
        assert_eq!(template.anchors.image_position, None);
    }

    #[test]
    fn test_split_is_rotated_half() {
        let data = resolve(LayoutType::Split, 1, CARD_SIZE).unwrap();
        assert_eq!(data.rotation.unwrap().forward, Rotation::Rot90);
        assert_eq!(data.rotation.unwrap().inverse, Rotation::Rot270);
        assert_eq!(data.border.card, BorderData::new(0, 750, 525, 1050));
        assert_eq!(data.size.rules, SizeData::new(525, 280));
        assert_eq!(data.size.image, 270);
        assert!(data.stack_is_consistent());
    }

    #[test]
    fn test_fuse_strip_carved_from_rules() {
        let data = resolve(LayoutType::Fuse, 0, CARD_SIZE).unwrap();
        assert_eq!(data.size.rules.vert, 230);
        let fuse = data.border.fuse.unwrap();
        assert_eq!(fuse, BorderData::new(645, 695, 0, 1050));
        assert_eq!(data.border.rules.bottom, fuse.top);
        assert_eq!(data.anchors.fuse_v, Some(670));
        assert_eq!(data.size.fuse, Some(SizeData::new(1050, 50)));
        assert!(data.stack_is_consistent());
    }

    #[test]
    fn test_flip_doubles_stack() {
        let data = resolve(LayoutType::Flip, 1, CARD_SIZE).unwrap();
        assert_eq!(data.size.rules.vert, 200);
        assert_eq!(data.size.image, 250);
        assert_eq!(data.border.type_line, 90);
        assert_eq!(data.border.rules, BorderData::new(145, 345, 0, 750));
        assert_eq!(data.border.credits, 345);
        assert_eq!(data.border.image, 400);
        assert_eq!(data.rotation.unwrap().forward, Rotation::Rot180);
        assert!(data.stack_is_consistent());

        let front = resolve(LayoutType::Flip, 0, CARD_SIZE).unwrap();
        assert_eq!(front.rotation, None);
        assert_eq!(front.border, data.border);
    }

    #[test]
    fn test_adventure_faces() {
        let main = resolve(LayoutType::Adventure, 0, CARD_SIZE).unwrap();
        assert_eq!(main.border.rules, BorderData::new(692, 995, 375, 750));
        assert_eq!(main.size.rules.horiz, 375);

        let adventure = resolve(LayoutType::Adventure, 1, CARD_SIZE).unwrap();
        assert_eq!(adventure.border.card, BorderData::new(688, 995, 0, 375));
        assert_eq!(adventure.size.image, 0);
        assert_eq!(adventure.size.credits, 0);
        assert_eq!(adventure.border.type_line, 782);
        assert_eq!(adventure.border.rules, BorderData::new(837, 995, 0, 375));
        assert!(adventure.stack_is_consistent());
    }

    #[test]
    fn test_attraction_column() {
        let data = resolve(LayoutType::Attraction, 0, CARD_SIZE).unwrap();
        assert_eq!(data.border.rules.right, 650);
        assert_eq!(data.size.rules.horiz, 650);
        assert_eq!(data.border.attraction, Some(BorderData::new(688, 995, 650, 750)));
        assert_eq!(data.anchors.attraction_h, Some(700));
        // The stat box stays left of the number column.
        assert_eq!(data.border.bottom_box, BorderData::new(990, 1050, 475, 635));
    }

    #[test]
    fn test_backdrop_positions() {
        let land = resolve(LayoutType::Land, 0, CARD_SIZE).unwrap();
        assert_eq!(land.size.image, 850);
        assert_eq!(land.anchors.image_position, Some(Xy::new(75, 215)));

        let emblem = resolve(LayoutType::Emblem, 0, CARD_SIZE_PLAYTEST).unwrap();
        assert_eq!(emblem.size.image, 600);
        assert_eq!(emblem.anchors.image_position, Some(Xy::new(0, 90)));
    }

    #[test]
    fn test_face_out_of_range() {
        let err = resolve(LayoutType::Standard, 1, CARD_SIZE).unwrap_err();
        assert!(matches!(err, ProxyError::InvalidFaceAccess { .. }));
    }

    #[test]
    fn test_unknown_key_fails() {
        assert!(matches!(
            resolve_key("meld", 0, false),
            Err(ProxyError::UnknownLayout(_))
        ));
        let data = resolve_key("modal_dfc", 1, true).unwrap();
        assert_eq!(data.card_size, CARD_SIZE_PLAYTEST);
        assert_eq!(data.face_index, 1);
    }
}
