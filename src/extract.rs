//! Content block extraction.
//!
//! Walks parsed reader content and yields the ordered sequence of
//! semantic blocks the page assembler packs into pages. Traversal keeps
//! DOM TreeWalker semantics: excluded subtrees are rejected outright,
//! content elements are yielded and then descended into, and everything
//! else is skipped while its children are still visited.

use log::debug;
use markup5ever_rcdom::{Handle, NodeData};

use crate::config::MIN_BLOCK_CHARS;
use crate::dom;

/// Tags that become content blocks.
const CONTENT_TAGS: &[&str] = &[
    "p",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "section",
    "article",
    "blockquote",
];

/// Tags whose subtrees never contribute content.
const EXCLUDED_TAGS: &[&str] = &["script", "style", "meta", "link", "title"];

/// Heading levels that open a new chapter.
const CHAPTER_TAGS: &[&str] = &["h1", "h2", "h3"];

/// Elements kept during cleaning even when they hold no text.
const KEEP_EMPTY_TAGS: &[&str] = &["img", "br", "hr"];

/// One semantic unit of source markup.
///
/// Ephemeral: created during extraction and consumed immediately by the
/// assembler, never retained.
#[derive(Debug, Clone)]
pub struct ContentBlock {
    /// Cleaned markup, ready for display.
    pub markup: String,
    /// Trimmed plain text with tags removed.
    pub text: String,
    /// Number of whitespace-separated words in `text`.
    pub word_count: usize,
    /// True when this block opens a new chapter (h1-h3).
    pub chapter_boundary: bool,
}

/// Extract the ordered block sequence from raw HTML.
///
/// Empty or whitespace-only input yields an empty sequence; malformed
/// markup is absorbed by html5ever's error recovery. This is a pure,
/// read-only transform over the parsed input.
pub fn extract_blocks(html: &str) -> Vec<ContentBlock> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let tree = dom::parse_fragment(html);
    let Some(body) = dom::find_first_element(&tree.document, "body") else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    for child in body.children.borrow().iter() {
        walk(child, &mut blocks);
    }

    debug!("extracted {} content blocks", blocks.len());
    blocks
}

fn walk(handle: &Handle, blocks: &mut Vec<ContentBlock>) {
    if let Some(name) = dom::element_name(handle) {
        if EXCLUDED_TAGS.contains(&name) {
            return;
        }
        if CONTENT_TAGS.contains(&name) {
            if let Some(block) = make_block(handle, name) {
                blocks.push(block);
            }
        }
    }

    for child in handle.children.borrow().iter() {
        walk(child, blocks);
    }
}

fn make_block(handle: &Handle, tag: &str) -> Option<ContentBlock> {
    let text = dom::text_content(handle);
    let trimmed = text.trim();
    let chapter_boundary = CHAPTER_TAGS.contains(&tag);

    // Headings open chapters even when shorter than the block threshold;
    // anything else this short is an empty or decorative wrapper.
    if !chapter_boundary && trimmed.chars().count() < MIN_BLOCK_CHARS {
        return None;
    }

    Some(ContentBlock {
        markup: clean_markup(handle),
        text: trimmed.to_string(),
        word_count: count_words(trimmed),
        chapter_boundary,
    })
}

/// Copy the subtree, strip presentation attributes, drop text-less
/// decorative descendants, and serialize the result.
///
/// The copy keeps the source tree intact: a pruned descendant may itself
/// be a content element the walk has yet to visit.
fn clean_markup(handle: &Handle) -> String {
    let copy = dom::deep_copy(handle);
    strip_presentation_attrs(&copy);
    prune_empty_descendants(&copy);
    dom::serialize_node(&copy)
}

fn strip_presentation_attrs(handle: &Handle) {
    if let NodeData::Element { attrs, .. } = &handle.data {
        attrs.borrow_mut().retain(|attr| {
            let name = attr.name.local.as_ref();
            name != "id" && name != "class" && name != "style" && !name.starts_with("on")
        });
    }

    for child in handle.children.borrow().iter() {
        strip_presentation_attrs(child);
    }
}

/// Remove child elements with no text content. Images, line breaks, and
/// horizontal rules stay: they carry visual meaning while holding no text.
fn prune_empty_descendants(handle: &Handle) {
    handle
        .children
        .borrow_mut()
        .retain(|child| match dom::element_name(child) {
            Some(name) if KEEP_EMPTY_TAGS.contains(&name) => true,
            Some(_) => !dom::text_content(child).trim().is_empty(),
            None => true,
        });

    for child in handle.children.borrow().iter() {
        prune_empty_descendants(child);
    }
}

/// Count whitespace-separated words.
pub(crate) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
