//! Geometry engine integration tests.
//!
//! These tests check the stacking invariant over the whole key space,
//! the blank rules boxes, memoization and the per-layout overrides as
//! seen through the public API.

use proptest::prelude::*;
use proxy_layout::layout::{
    derive_layout, layout_data, overrides_for, resolve, resolve_key, template, LayoutCache,
    LayoutKey,
};
use proxy_layout::{card_size, LayoutType, ProxyError, Rotation, CARD_SIZE, CARD_SIZE_PLAYTEST};

// =============================================================================
// Stacking Invariant
// =============================================================================

/// Every face of every layout fills its card region exactly.
#[test]
fn test_every_face_stacks_to_card_height() {
    for key in LayoutKey::all() {
        let data = resolve(key.layout, key.face_index, card_size(key.playtest)).unwrap();
        assert!(
            data.stack_is_consistent(),
            "{key:?}: stack {} != card {}",
            data.stack_height(),
            data.size.card.vert
        );
        assert!(data.size.image >= 0, "{key:?}: negative illustration band");
    }
}

/// Flip faces use half the card for each text stack.
#[test]
fn test_flip_stack_is_doubled() {
    let data = resolve(LayoutType::Flip, 0, CARD_SIZE).unwrap();
    assert_eq!(2 * data.text_stack_height() + data.size.image, 1050);
    assert_eq!(data.text_stack_height(), 400);
}

/// The fuse strip is carved from the rules box and still counts in the stack.
#[test]
fn test_fuse_strip_counts_in_stack() {
    let split = resolve(LayoutType::Split, 0, CARD_SIZE).unwrap();
    let fuse = resolve(LayoutType::Fuse, 0, CARD_SIZE).unwrap();
    let strip = fuse.size.fuse.unwrap().vert;
    assert_eq!(fuse.size.rules.vert + strip, split.size.rules.vert);
    assert_eq!(fuse.text_stack_height(), split.text_stack_height());
}

proptest! {
    /// Geometry is a pure function of its key.
    #[test]
    fn prop_resolve_is_deterministic(index in 0usize..64) {
        let keys: Vec<LayoutKey> = LayoutKey::all().collect();
        let key = keys[index % keys.len()];
        let size = card_size(key.playtest);
        let first = resolve(key.layout, key.face_index, size).unwrap();
        let second = resolve(key.layout, key.face_index, size).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.stack_is_consistent());
        prop_assert!(first.border.rules.left <= first.border.rules.right);
        prop_assert!(first.border.bottom_box.right <= first.border.card.right);
    }
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn test_blank_rules_box_layouts() {
    for layout in [
        LayoutType::Land,
        LayoutType::VanillaCreature,
        LayoutType::VanillaToken,
    ] {
        for playtest in [false, true] {
            let data = layout_data(layout, 0, playtest).unwrap();
            assert_eq!(data.size.rules.vert, 0, "{layout}");
            assert!(!data.has_rules_box());
        }
    }
}

#[test]
fn test_token_and_emblem_rules_box() {
    assert_eq!(resolve(LayoutType::Token, 0, CARD_SIZE).unwrap().size.rules.vert, 250);
    assert_eq!(resolve(LayoutType::Emblem, 0, CARD_SIZE).unwrap().size.rules.vert, 250);
    assert_eq!(resolve(LayoutType::Standard, 0, CARD_SIZE).unwrap().size.rules.vert, 303);
}

#[test]
fn test_aftermath_faces() {
    let top = resolve(LayoutType::Aftermath, 0, CARD_SIZE).unwrap();
    assert_eq!(top.border.card.bottom, 525);
    assert_eq!(top.size.rules.vert, 175);
    assert_eq!(top.rotation, None);

    let bottom = resolve(LayoutType::Aftermath, 1, CARD_SIZE).unwrap();
    let split = resolve(LayoutType::Split, 1, CARD_SIZE).unwrap();
    assert_eq!(bottom.border, split.border);
    assert_eq!(bottom.size, split.size);
    assert_eq!(bottom.rotation, split.rotation);
    assert_eq!(bottom.layout, LayoutType::Aftermath);
}

#[test]
fn test_split_rotation_pair() {
    let data = resolve(LayoutType::Split, 0, CARD_SIZE_PLAYTEST).unwrap();
    let rotation = data.rotation.unwrap();
    assert_eq!(rotation.forward, Rotation::Rot90);
    assert_eq!(rotation.inverse, Rotation::Rot270);
    // Sideways: width is the card's physical height.
    assert_eq!(data.size.card.horiz, 525);
    assert_eq!(data.size.card.vert, 600);
}

#[test]
fn test_adventure_half_has_no_credits_band() {
    let data = resolve(LayoutType::Adventure, 1, CARD_SIZE).unwrap();
    let standard = template();
    assert_eq!(data.size.credits, 0);
    assert_eq!(data.border.card.bottom, standard.border.rules.bottom);
    assert!(data.border.card.top < standard.border.rules.top);
}

#[test]
fn test_derive_layout_is_pure() {
    let base = template().clone();
    let overrides = overrides_for(LayoutType::Attraction, 0, CARD_SIZE, &base);
    let first = derive_layout(&base, &overrides);
    let second = derive_layout(&base, &overrides);
    assert_eq!(first, second);
    assert_eq!(&base, template());
    assert!(first.border.attraction.is_some());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unknown_layout_key() {
    let err = resolve_key("planar", 0, false).unwrap_err();
    assert!(matches!(err, ProxyError::UnknownLayout(ref key) if key == "planar"));
}

#[test]
fn test_face_outside_layout() {
    assert!(matches!(
        resolve(LayoutType::Token, 1, CARD_SIZE),
        Err(ProxyError::InvalidFaceAccess { .. })
    ));
    assert!(matches!(
        layout_data(LayoutType::Split, 2, false),
        Err(ProxyError::InvalidFaceAccess { .. })
    ));
}

// =============================================================================
// Memoization
// =============================================================================

#[test]
fn test_cache_computes_each_key_once() {
    let mut cache = LayoutCache::new();
    for _ in 0..3 {
        for key in LayoutKey::all() {
            cache.get_or_compute(key).unwrap();
        }
    }
    assert_eq!(cache.computations(), LayoutKey::all().count());
    assert_eq!(cache.len(), LayoutKey::all().count());
}

#[test]
fn test_cache_returns_identical_geometry() {
    let mut cache = LayoutCache::new();
    let key = LayoutKey::new(LayoutType::Adventure, 1, true);
    let first = cache.get_or_compute(key).unwrap();
    let second = cache.get_or_compute(key).unwrap();
    assert_eq!(*first, *second);
    assert_eq!(cache.computations(), 1);
    assert_eq!(cache.get(key), Some(first));
}
