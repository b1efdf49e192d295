//! Card model: source records, layout classification and faces.
//!
//! ## Key Types
//!
//! - `CardRecord`: raw card data from the data source (or built by hand)
//! - `LayoutType`: closed taxonomy of physical layouts
//! - `Card`: a record with its resolved layout
//! - `CardFace`: one printable unit (a whole card or one half)
//! - `ManaColor` / `Colors`: WUBRG-ordered color lists
//!
//! ## Faces
//!
//! Split, fuse, aftermath, adventure and flip cards print two parts on one
//! side; transform and modal double-faced cards print one part per side.
//! Either way `Card::card_faces` yields exactly two faces, while
//! `Card::printable_faces` also accepts single cards.

pub mod card;
pub mod classify;
pub mod color;
pub mod face;
pub mod layout_type;
pub mod record;
pub mod token;

pub use card::{Card, Faces};
pub use classify::{classify, is_basic_land, Classification, BASIC_LANDS};
pub use color::{describe_colors, extract_colors, Colors, ManaColor};
pub use face::{CardFace, FaceFlags, FaceSymbol};
pub use layout_type::LayoutType;
pub use record::CardRecord;
pub use token::parse_token_spec;
