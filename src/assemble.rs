//! Greedy page assembly.
//!
//! Packs the extracted block sequence into pages under a word target and
//! a hard ceiling, tracking chapter page ranges inline. Flushing on the
//! target rather than packing up to the ceiling favors consistent page
//! length over maximal packing.

use log::debug;

use crate::config::{MAX_WORDS_PER_PAGE, TARGET_WORDS_PER_PAGE, WORDS_PER_MINUTE};
use crate::extract::ContentBlock;

/// One screen's worth of content. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Page {
    /// 1-based position in the reading order.
    pub number: usize,
    /// Plain text of every block on the page.
    pub text: String,
    /// Cleaned markup wrapped for display.
    pub markup: String,
    /// Whitespace-separated word total.
    pub word_count: usize,
    /// Title of the chapter this page belongs to, if any.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Option::is_none"))]
    pub chapter_title: Option<String>,
    /// True when this is the first page of its chapter.
    pub chapter_start: bool,
    /// Estimated minutes to read this page.
    pub reading_minutes: usize,
}

/// A chapter's page range, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Chapter {
    pub title: String,
    pub start_page: usize,
    pub end_page: usize,
}

/// Chapter record still waiting for its end page.
struct OpenChapter {
    title: String,
    start_page: usize,
}

/// The page in progress.
#[derive(Default)]
struct PageBuffer {
    fragments: Vec<String>,
    texts: Vec<String>,
    words: usize,
}

impl PageBuffer {
    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn push(&mut self, block: ContentBlock) {
        self.words += block.word_count;
        self.fragments.push(block.markup);
        self.texts.push(block.text);
    }
}

/// Pack blocks into pages and record chapter page ranges.
///
/// Every chapter's end page is resolved before this returns: boundary
/// blocks close the previous chapter at the last emitted page, and the
/// final chapter closes at the total page count.
pub(crate) fn assemble(blocks: Vec<ContentBlock>) -> (Vec<Page>, Vec<Chapter>) {
    let mut pages = Vec::new();
    let mut chapters = Vec::new();
    let mut open: Option<OpenChapter> = None;
    let mut buffer = PageBuffer::default();

    for block in blocks {
        if block.chapter_boundary {
            // A new chapter closes out whatever page was in progress.
            if !buffer.is_empty() {
                flush(&mut buffer, &mut pages, open.as_ref());
            }
            if let Some(done) = open.take() {
                chapters.push(Chapter {
                    title: done.title,
                    start_page: done.start_page,
                    end_page: pages.len(),
                });
            }
            open = Some(OpenChapter {
                title: block.text.clone(),
                start_page: pages.len() + 1,
            });
            buffer.push(block);
        } else {
            if !buffer.is_empty() && buffer.words + block.word_count > MAX_WORDS_PER_PAGE {
                flush(&mut buffer, &mut pages, open.as_ref());
            }
            buffer.push(block);
        }

        if buffer.words >= TARGET_WORDS_PER_PAGE {
            flush(&mut buffer, &mut pages, open.as_ref());
        }
    }

    if !buffer.is_empty() {
        flush(&mut buffer, &mut pages, open.as_ref());
    }
    if let Some(done) = open.take() {
        chapters.push(Chapter {
            title: done.title,
            start_page: done.start_page,
            end_page: pages.len(),
        });
    }

    debug!(
        "assembled {} pages across {} chapters",
        pages.len(),
        chapters.len()
    );
    (pages, chapters)
}

/// Emit the buffered blocks as the next page.
fn flush(buffer: &mut PageBuffer, pages: &mut Vec<Page>, open: Option<&OpenChapter>) {
    let PageBuffer {
        fragments,
        texts,
        words,
    } = std::mem::take(buffer);

    let number = pages.len() + 1;
    pages.push(Page {
        number,
        text: texts.join(" "),
        markup: format!("<div class=\"reader-page\">{}</div>", fragments.join("\n")),
        word_count: words,
        chapter_title: open.map(|c| c.title.clone()),
        chapter_start: open.is_some_and(|c| c.start_page == number),
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    });
}
