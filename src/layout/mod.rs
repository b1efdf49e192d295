//! Layout geometry engine.
//!
//! Maps (layout, face, card pixel size) to the pixel geometry of a card
//! face: region borders, sizes, rotation and text anchors.
//!
//! ## Key Types
//!
//! - `LayoutData`: resolved geometry of one face
//! - `LayoutOverrides`: per-layout deviations from the standard template
//! - `LayoutCache` / `LayoutKey`: memoization by (layout, face, playtest)
//!
//! ## Derivation
//!
//! The standard face-0 geometry is derived once from fixed band heights.
//! Every other face is `derive_layout(template, overrides_for(..))`: the
//! override fixes the card region, rotation and rules box height, then the
//! pipeline stacks the bands top to bottom, carves fuse/attraction/adventure
//! regions, and places the bottom box, set icon and backdrop.

pub mod cache;
pub mod data;
pub mod derive;
pub mod overrides;

pub use cache::{layout_data, LayoutCache, LayoutKey};
pub use data::{Anchors, BorderData, Borders, LayoutData, SizeData, Sizes};
pub use derive::{derive_layout, resolve, resolve_key, template};
pub use overrides::{overrides_for, LayoutOverrides, RulesCarve, StackOrder};
