//! Pagination report assembly.
//!
//! Wraps the assembler's output into the aggregate the reading UI
//! consumes: pages, chapter ranges, and word totals. Reports are
//! immutable values; callers memoize them per content string and only
//! recompute when the source content changes.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use log::debug;

use crate::assemble::{assemble, Chapter, Page};
use crate::error::Result;
use crate::extract::extract_blocks;

/// Aggregate result of paginating one content string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct PaginationReport {
    pub pages: Vec<Page>,
    pub total_pages: usize,
    pub total_words: usize,
    pub average_words_per_page: usize,
    pub chapters: Vec<Chapter>,
}

impl PaginationReport {
    /// The canonical empty report: zero totals, no pages, no chapters.
    pub fn empty() -> Self {
        Self {
            pages: Vec::new(),
            total_pages: 0,
            total_words: 0,
            average_words_per_page: 0,
            chapters: Vec::new(),
        }
    }

    /// Resolve a chapter title substring (case-insensitive) to its start
    /// page. Falls back to page 1 when nothing matches.
    pub fn chapter_start_page(&self, query: &str) -> usize {
        let query = query.to_lowercase();
        self.chapters
            .iter()
            .find(|c| c.title.to_lowercase().contains(&query))
            .map(|c| c.start_page)
            .unwrap_or(1)
    }
}

/// Split a book's HTML content into reader pages.
///
/// Deterministic: identical input produces an identical report. Empty or
/// whitespace-only input yields [`PaginationReport::empty`]; malformed
/// markup never fails.
pub fn paginate(html: &str) -> PaginationReport {
    let blocks = extract_blocks(html);
    if blocks.is_empty() {
        return PaginationReport::empty();
    }

    let (pages, chapters) = assemble(blocks);
    let total_pages = pages.len();
    let total_words: usize = pages.iter().map(|p| p.word_count).sum();
    let average_words_per_page = if total_pages == 0 {
        0
    } else {
        (total_words as f64 / total_pages as f64).round() as usize
    };

    debug!("paginated {total_words} words into {total_pages} pages");

    PaginationReport {
        pages,
        total_pages,
        total_words,
        average_words_per_page,
        chapters,
    }
}

/// Read a content file and paginate it.
///
/// Decoding is lenient: UTF-8 first, Windows-1252 as the fallback common
/// to legacy ebook exports.
pub fn paginate_file<P: AsRef<Path>>(path: P) -> Result<PaginationReport> {
    let bytes = fs::read(path)?;
    Ok(paginate(&decode_text(&bytes)))
}

/// Decode bytes to a string: UTF-8 (BOM-aware) first, Windows-1252 when
/// the input is malformed UTF-8.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
