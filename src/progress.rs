//! Reading progress derivation.
//!
//! Pure helpers the reading UI calls continuously while rendering
//! progress bars and resume positions. No state, no failure conditions:
//! out-of-range inputs clamp through saturating guards instead.

use crate::config::{TARGET_WORDS_PER_PAGE, WORDS_PER_MINUTE};

/// Snapshot of how far through a book a reader is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ReadingProgress {
    /// Whole-percent completion, rounded to nearest.
    pub percentage: u32,
    /// Pages fully read. The current page counts as in progress, not read.
    pub pages_read: usize,
    /// Pages after the current one.
    pub pages_remaining: usize,
    /// Estimated minutes to finish the remaining pages.
    pub estimated_minutes_remaining: usize,
}

/// Derive progress from a 1-based current page and the total page count.
pub fn reading_progress(current_page: usize, total_pages: usize) -> ReadingProgress {
    let pages_read = current_page.saturating_sub(1);
    let percentage = if total_pages > 0 {
        (pages_read as f64 / total_pages as f64 * 100.0).round() as u32
    } else {
        0
    };
    let pages_remaining = total_pages.saturating_sub(current_page);
    let estimated_minutes_remaining =
        (pages_remaining * TARGET_WORDS_PER_PAGE).div_ceil(WORDS_PER_MINUTE);

    ReadingProgress {
        percentage,
        pages_read,
        pages_remaining,
        estimated_minutes_remaining,
    }
}
