//! Text measurement, fitting and symbol substitution.
//!
//! ## Key Types
//!
//! - `TextMetrics`: pluggable font measurement backend
//! - `WidthTableMetrics`: static em-width tables, no font files needed
//! - `TextFitter`: single and multi-line font size fitting
//! - `FitResult`: fitted size plus wrapped text
//!
//! Symbol keys such as `{T}` or `{2/W}` are turned into font glyphs by
//! `print_symbols` before measuring.

pub mod baseline;
pub mod fit;
pub mod metrics;
pub mod symbols;
pub mod table;

pub use baseline::centered_baseline;
pub use fit::{FitResult, TextFitter, DEFAULT_MIN_FONT_SIZE, SIZE_STEP};
pub use metrics::{Font, FontKind, TextMetrics, VerticalExtent};
pub use symbols::{
    color_indicator_glyphs, print_symbols, symbol_glyph, ACORN_KEY, ATTRACTION_TEXT,
    PAINTBRUSH_KEY, REFERENCE_GLYPH,
};
pub use table::{width_table, WidthTable, WidthTableMetrics};
