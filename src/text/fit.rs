//! Font size fitting.
//!
//! Both fitters start at a requested size and step down by `SIZE_STEP`
//! until the text fits. They never go below the configured floor: an
//! impossible fit is reported as `FitImpossible` instead of looping.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::metrics::{Font, TextMetrics};
use crate::error::{ProxyError, Result};

/// Font size decrement between attempts.
pub const SIZE_STEP: u32 = 3;

/// Smallest font size tried unless configured otherwise.
pub const DEFAULT_MIN_FONT_SIZE: u32 = 6;

/// Text laid out at a fitted size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitResult {
    pub font: Font,
    /// The text with explicit line breaks.
    pub text: String,
    /// Printed lines, including blank lines between paragraphs.
    pub lines: usize,
}

/// Fits text into boxes using a `TextMetrics` backend.
pub struct TextFitter<'m, M: TextMetrics + ?Sized> {
    metrics: &'m M,
    min_size: u32,
}

impl<M: TextMetrics + ?Sized> Clone for TextFitter<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: TextMetrics + ?Sized> Copy for TextFitter<'_, M> {}

impl<'m, M: TextMetrics + ?Sized> TextFitter<'m, M> {
    pub fn new(metrics: &'m M) -> Self {
        Self {
            metrics,
            min_size: DEFAULT_MIN_FONT_SIZE,
        }
    }

    /// Set the smallest font size the fitter may return.
    #[must_use]
    pub fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size.max(1);
        self
    }

    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    pub fn metrics(&self) -> &'m M {
        self.metrics
    }

    /// Largest font, from `start` down, at which `text` fits in one line
    /// of `max_width` pixels.
    pub fn fit_single_line(&self, text: &str, max_width: i32, start: Font) -> Result<Font> {
        if text.is_empty() {
            return Ok(start);
        }

        let mut font = start;
        loop {
            let width = self.metrics.measure(text, font);
            if width <= max_width {
                return Ok(font);
            }
            trace!(size = font.size, width, max_width, "single line overflows, shrinking");
            font = self.smaller(font).ok_or_else(|| self.impossible(text, max_width, 0))?;
        }
    }

    /// Largest font, from `start` down, at which `text` wrapped to
    /// `max_width` pixels fits in `max_height` pixels.
    ///
    /// Each `\n`-separated paragraph is wrapped on its own, and wrapped
    /// paragraphs are separated by a blank line.
    pub fn fit_multi_line(
        &self,
        text: &str,
        max_width: i32,
        max_height: i32,
        start: Font,
    ) -> Result<FitResult> {
        if text.is_empty() {
            return Ok(FitResult {
                font: start,
                text: String::new(),
                lines: 0,
            });
        }

        let mut font = start;
        loop {
            if let Some(lines) = self.wrap(text, max_width, font) {
                let height = self.metrics.line_height(font) * lines.len() as i32;
                if height <= max_height {
                    return Ok(FitResult {
                        font,
                        lines: lines.len(),
                        text: lines.join("\n"),
                    });
                }
                trace!(size = font.size, height, max_height, "rules text overflows, shrinking");
            } else {
                trace!(size = font.size, max_width, "word wider than box, shrinking");
            }
            font = self
                .smaller(font)
                .ok_or_else(|| self.impossible(text, max_width, max_height))?;
        }
    }

    /// Greedy word wrap of every paragraph of `text` at `font`.
    ///
    /// Returns the printed lines, with an empty line between paragraphs,
    /// or `None` when some single word is wider than `max_width`.
    pub fn wrap(&self, text: &str, max_width: i32, font: Font) -> Option<Vec<String>> {
        let mut lines = Vec::new();
        for (index, paragraph) in text.split('\n').enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            let mut line = String::new();
            for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
                if self.metrics.measure(word, font) > max_width {
                    return None;
                }
                let candidate = if line.is_empty() {
                    word.to_string()
                } else {
                    format!("{line} {word}")
                };
                if self.metrics.measure(&candidate, font) > max_width {
                    lines.push(std::mem::replace(&mut line, word.to_string()));
                } else {
                    line = candidate;
                }
            }
            lines.push(line);
        }
        Some(lines)
    }

    fn smaller(&self, font: Font) -> Option<Font> {
        font.size
            .checked_sub(SIZE_STEP)
            .filter(|&size| size >= self.min_size)
            .map(|size| font.with_size(size))
    }

    fn impossible(&self, text: &str, max_width: i32, max_height: i32) -> ProxyError {
        ProxyError::FitImpossible {
            text: text.to_string(),
            max_width,
            max_height,
            min_size: self.min_size,
        }
    }
}
