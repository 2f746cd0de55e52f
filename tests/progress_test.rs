//! Reading progress tests against a real pagination report.
//!
//! The off-by-one between "current page" and "pages read" is load-bearing
//! for the reading UI: the page being displayed is in progress, not done.

use folio::{paginate, reading_progress};

fn sample_report_html() -> String {
    let mut html = String::new();
    for i in 1..=4 {
        html.push_str(&format!("<h2>Chapter Number {i}</h2>"));
        html.push_str(&format!("<p>{}</p>", "word ".repeat(260)));
    }
    html
}

#[test]
fn test_progress_through_a_paginated_book() {
    let report = paginate(&sample_report_html());
    assert_eq!(report.total_pages, 4);

    let opening = reading_progress(1, report.total_pages);
    assert_eq!(opening.percentage, 0);
    assert_eq!(opening.pages_read, 0);
    assert_eq!(opening.pages_remaining, 3);

    let midway = reading_progress(3, report.total_pages);
    assert_eq!(midway.percentage, 50);
    assert_eq!(midway.pages_read, 2);
    assert_eq!(midway.pages_remaining, 1);

    let finale = reading_progress(4, report.total_pages);
    assert_eq!(finale.percentage, 75);
    assert_eq!(finale.pages_remaining, 0);
    assert_eq!(finale.estimated_minutes_remaining, 0);
}

#[test]
fn test_current_page_is_not_counted_as_read() {
    // Page 10 of 10 reports 90%, never 100%: the last page is still open.
    let start = reading_progress(1, 10);
    assert_eq!(start.pages_read, 0);
    assert_eq!(start.percentage, 0);
    assert_eq!(start.pages_remaining, 9);

    let end = reading_progress(10, 10);
    assert_eq!(end.pages_read, 9);
    assert_eq!(end.percentage, 90);
    assert_eq!(end.pages_remaining, 0);
}

#[test]
fn test_remaining_time_uses_target_page_size() {
    // 9 pages at the 250-word target, read at 200 wpm: ceil(11.25) = 12.
    assert_eq!(reading_progress(1, 10).estimated_minutes_remaining, 12);
    // 5 remaining: ceil(6.25) = 7.
    assert_eq!(reading_progress(5, 10).estimated_minutes_remaining, 7);
}

#[test]
fn test_chapter_lookup_resolves_resume_position() {
    let report = paginate(&sample_report_html());

    assert_eq!(report.chapter_start_page("number 3"), 3);
    assert_eq!(report.chapter_start_page("CHAPTER NUMBER 1"), 1);
    // Unknown titles resume from the beginning.
    assert_eq!(report.chapter_start_page("epilogue"), 1);
}

#[test]
fn test_out_of_range_pages_are_clamped() {
    let under = reading_progress(0, 10);
    assert_eq!(under.pages_read, 0);
    assert_eq!(under.pages_remaining, 10);

    let over = reading_progress(15, 10);
    assert_eq!(over.pages_remaining, 0);
    assert_eq!(over.estimated_minutes_remaining, 0);
}
