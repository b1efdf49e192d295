//! # bw-proxy-layout
//!
//! Layout core for black-and-white, printer-friendly card proxies.
//!
//! ## Design Principles
//!
//! 1. **Closed Layout Taxonomy**: every card resolves to one `LayoutType`.
//!    Heterogeneous source records are normalized into one or two
//!    `CardFace`s before anything is drawn.
//!
//! 2. **Geometry Is a Pure Function**: a face's pixel geometry depends only
//!    on (layout, face, playtest sizing), never on card text, and is
//!    memoized for the life of the process.
//!
//! 3. **Backend-Agnostic Text**: font sizes are fitted through the
//!    `TextMetrics` trait; pixel drawing is left to the caller.
//!
//! ## Modules
//!
//! - `core`: Pixel geometry primitives, physical dimensions, configuration
//! - `cards`: Source records, layout classification, faces, token specs
//! - `layout`: Geometry engine and cache
//! - `text`: Metrics, font size fitting, symbol glyphs
//! - `plan`: Per-card render plans combining geometry and fitted text
//! - `error`: Error type shared by every module

pub mod cards;
pub mod core;
pub mod error;
pub mod layout;
pub mod plan;
pub mod text;

// Re-export commonly used types
pub use crate::core::{
    card_size, GlyphPrecedence, RenderConfig, Rotation, RotationPair, Xy, CARD_SIZE,
    CARD_SIZE_PLAYTEST, DRAW_SIZE,
};

pub use crate::cards::{
    classify, extract_colors, parse_token_spec, Card, CardFace, CardRecord, Classification,
    FaceSymbol, LayoutType, ManaColor,
};

pub use crate::error::{ProxyError, Result};

pub use crate::layout::{layout_data, resolve, resolve_key, LayoutCache, LayoutData, LayoutKey};

pub use crate::text::{
    print_symbols, FitResult, Font, FontKind, TextFitter, TextMetrics, WidthTableMetrics,
};

pub use crate::plan::{CardPlan, FacePlan, PlacedText, Planner};
