//! One-shot table renderer for dashboard datasets
//!
//! Loads a JSON array of records from a file, runs it through the tabular
//! presentation engine, and prints a single page. Stands in for the web
//! renderer when inspecting an exported dataset from the terminal.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mentordash_lib::TableView;
use mentordash_lib::error::SourceError;
use mentordash_lib::source::load_records;
use mentordash_lib::table::DEFAULT_PAGE_SIZE;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

/// Render a page of dashboard records as a table.
#[derive(Parser, Debug)]
#[command(name = "mentordash")]
#[command(about = "Render a page of dashboard records as a table", long_about = None)]
struct Args {
    /// Path to a JSON file containing an array of records
    #[arg(value_name = "RECORDS")]
    path: PathBuf,

    /// Table title
    #[arg(short, long, default_value = "Records")]
    title: String,

    /// Column to sort by (ascending)
    #[arg(short, long)]
    sort: Option<String>,

    /// Reverse the sort direction
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Page to display (1-based, clamped to the page count)
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SourceError> {
    let records = load_records(&args.path)?;
    log::debug!("Loaded {} records from {}", records.len(), args.path.display());

    let mut view = TableView::new(&args.title, args.page_size);
    view.set_records(&records);

    if let Some(field) = &args.sort {
        view.click_header(field);
        if args.desc {
            view.click_header(field);
        }
    }
    view.go_to_page(args.page);

    let snapshot = view.render();
    log::debug!(
        "Rendering page {}/{} with {} columns",
        snapshot.page,
        snapshot.total_pages,
        snapshot.headers.len()
    );

    print!("{}", render::render_table(&snapshot));
    Ok(())
}
