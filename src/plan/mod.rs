//! Render planning: fitted, positioned text for every face of a card.
//!
//! ## Key Types
//!
//! - `Planner`: plans cards and decks with one metrics backend and config
//! - `CardPlan` / `FacePlan`: geometry plus placed texts per face
//! - `PlacedText`: one fitted text element and its anchor point
//!
//! Planning errors are local to one card; `Planner::plan_deck` logs them
//! and carries on with the rest of the deck.

pub mod placed;
pub mod planner;

pub use placed::{Backdrop, BackdropKind, PlacedText, TextAnchor, TextRole};
pub use planner::{CardPlan, FacePlan, Planner};
