//! Page sizing and reading speed constants.
//!
//! The assembler and the progress calculator share these so page packing
//! and time estimates stay consistent.

/// Soft target: flush the open page once it reaches this many words.
pub const TARGET_WORDS_PER_PAGE: usize = 250;

/// Advisory lower bound surfaced to reading UIs. The assembler never
/// consults it when deciding where to split; only the target and the
/// ceiling drive packing.
pub const MIN_WORDS_PER_PAGE: usize = 180;

/// Hard ceiling: a regular block that would push a non-empty page past
/// this forces a flush before the block is appended.
pub const MAX_WORDS_PER_PAGE: usize = 320;

/// Assumed reading speed for per-page and remaining-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Minimum trimmed text length for a non-heading element to become a
/// content block. Shorter elements are decorative wrappers.
pub const MIN_BLOCK_CHARS: usize = 10;
