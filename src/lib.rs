//! # folio
//!
//! A deterministic paginator for page-by-page reading interfaces: splits
//! a book's HTML content into reflowable pages, tracks chapter
//! boundaries, and estimates reading time.
//!
//! ## Features
//!
//! - Greedy page packing under a word target (250) with a hard ceiling (320)
//! - Chapter tracking from heading elements (h1-h3)
//! - Per-page and remaining reading-time estimates at 200 words/minute
//! - Lenient HTML parsing: malformed markup never fails, empty input
//!   yields an empty report
//!
//! ## Quick Start
//!
//! ```
//! use folio::{paginate, reading_progress};
//!
//! let html = "<h1>Chapter One</h1>\
//!             <p>It was a dark and stormy night; the rain fell in torrents.</p>";
//! let report = paginate(html);
//! assert_eq!(report.total_pages, 1);
//! assert_eq!(report.chapters[0].title, "Chapter One");
//! assert!(report.pages[0].chapter_start);
//!
//! let progress = reading_progress(1, report.total_pages);
//! assert_eq!(progress.pages_read, 0);
//! ```
//!
//! Pagination is synchronous and pure: one call per distinct content
//! string produces an immutable [`PaginationReport`] the caller may
//! cache and index by page number.

pub mod assemble;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod progress;
pub mod report;

pub use assemble::{Chapter, Page};
pub use error::{Error, Result};
pub use extract::ContentBlock;
pub use progress::{reading_progress, ReadingProgress};
pub use report::{paginate, paginate_file, PaginationReport};
