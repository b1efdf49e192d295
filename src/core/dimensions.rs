//! Physical dimensions of a printed proxy, in pixels at 300 DPI.

use super::geometry::Xy;

/// Print resolution.
pub const DPI: i32 = 300;

/// Standard card: 2.5" x 3.5".
pub const CARD_SIZE: Xy = Xy::new(DPI * 5 / 2, DPI * 7 / 2);

/// Playtest card: 2" x 3.5".
pub const CARD_SIZE_PLAYTEST: Xy = Xy::new(DPI * 2, DPI * 7 / 2);

/// Card pixel size for the requested sizing.
#[must_use]
pub const fn card_size(playtest: bool) -> Xy {
    if playtest {
        CARD_SIZE_PLAYTEST
    } else {
        CARD_SIZE
    }
}

/// Font and element sizes used when drawing a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawSize {
    pub title: u32,
    pub type_line: u32,
    pub text: u32,
    pub attraction: u32,
    pub attraction_interline: i32,
    pub credits: u32,
    pub credits_playtest: u32,
    /// Set icon display size.
    pub icon: i32,
    /// Illustration backdrop size for lands and emblems.
    pub image: i32,
    /// Border thickness.
    pub border: i32,
    /// Distance between elements of a card.
    pub separator: i32,
}

pub const DRAW_SIZE: DrawSize = DrawSize {
    title: 60,
    type_line: 50,
    text: 40,
    attraction: 80,
    attraction_interline: 15,
    credits: 30,
    credits_playtest: 23,
    icon: 40,
    image: 600,
    border: 5,
    separator: 15,
};

/// Borders are drawn inward from the line they sit on; this is how far
/// the first inked row is from the nominal border.
pub const BORDER_START_OFFSET: i32 = DRAW_SIZE.border - 1;

/// Offset from a nominal border to the middle of the inked stroke.
pub const BORDER_CENTER_OFFSET: i32 = DRAW_SIZE.border / 2;
