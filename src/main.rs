//! folio - deterministic book paginator

use std::process::ExitCode;

use clap::Parser;

use folio::{paginate_file, reading_progress, PaginationReport};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Split book HTML into reader pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio book.html                  Show pagination summary
    folio book.html --json           Emit the full report as JSON
    folio book.html --page 3         Print page 3
    folio book.html --at 3           Show progress while on page 3
    folio book.html --chapter intro  Find a chapter's start page")]
struct Cli {
    /// Input HTML file (a book's full content)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Emit the full report as JSON
    #[arg(long)]
    json: bool,

    /// Print a single page's text
    #[arg(long, value_name = "N")]
    page: Option<usize>,

    /// Show reading progress for being on page N
    #[arg(long, value_name = "N")]
    at: Option<usize>,

    /// Resolve a chapter title substring to its start page
    #[arg(long, value_name = "TITLE")]
    chapter: Option<String>,

    /// Suppress the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let report = paginate_file(&cli.input).map_err(|e| e.to_string())?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    if let Some(number) = cli.page {
        return show_page(&report, number);
    }

    if let Some(current) = cli.at {
        show_progress(&report, current);
        return Ok(());
    }

    if let Some(ref query) = cli.chapter {
        println!("{}", report.chapter_start_page(query));
        return Ok(());
    }

    if !cli.quiet {
        show_summary(&cli.input, &report);
    }
    Ok(())
}

fn show_summary(path: &str, report: &PaginationReport) {
    println!("File: {path}");
    println!("Pages: {}", report.total_pages);
    println!("Words: {}", report.total_words);
    println!("Average words/page: {}", report.average_words_per_page);
    println!("Chapters: {}", report.chapters.len());
    for chapter in &report.chapters {
        println!(
            "  {} (pages {}-{})",
            chapter.title, chapter.start_page, chapter.end_page
        );
    }
}

fn show_page(report: &PaginationReport, number: usize) -> Result<(), String> {
    let page = report
        .pages
        .iter()
        .find(|p| p.number == number)
        .ok_or_else(|| format!("no page {number} (book has {} pages)", report.total_pages))?;

    if let Some(ref title) = page.chapter_title {
        println!("[{title}]");
    }
    println!("{}", page.text);
    println!();
    println!("{} words, ~{} min", page.word_count, page.reading_minutes);
    Ok(())
}

fn show_progress(report: &PaginationReport, current: usize) {
    let p = reading_progress(current, report.total_pages);
    println!("Page {current} of {}", report.total_pages);
    println!("Progress: {}%", p.percentage);
    println!("Pages read: {}", p.pages_read);
    println!("Pages remaining: {}", p.pages_remaining);
    println!("Time remaining: ~{} min", p.estimated_minutes_remaining);
}
