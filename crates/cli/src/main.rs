use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, Record, vocabulary};
use pipeline::{FilterCriteria, PageLimit, ResultPage, RuntimePreference, Statistic, filter, rank_and_page};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// ReelFinder - browse a movie catalog by genre, runtime and decade
#[derive(Parser)]
#[command(name = "reel-finder")]
#[command(about = "Find top-rated movies by genre, runtime and decade", long_about = None)]
struct Cli {
    /// Path to the movie CSV (IMDB Top 1000 layout)
    #[arg(short, long, env = "REEL_FINDER_DATA", default_value = "data/imdb_top_1000.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the genres and decades available for filtering
    Vocabulary,

    /// Show the top-rated movies matching the given filters
    Find {
        /// Genre to include (repeatable; a movie needs any one of them)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Decade to include, e.g. 1990 (repeatable)
        #[arg(long = "decade")]
        decades: Vec<i32>,

        /// Runtime preference: any, under-2h, or a maximum in minutes
        #[arg(long, default_value = "any")]
        runtime: RuntimePreference,

        /// Movies to display: 10, 25, 50, 100, all, or any positive number
        #[arg(long, default_value = "10")]
        limit: PageLimit,

        /// Print the result page as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// List fields that could not be parsed while loading
    Issues,
}

fn main() -> Result<()> {
    // Logs go to stderr so `find --json` output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = data_loader::load(&cli.data).with_context(|| {
        format!("Failed to load movie catalog from {}", cli.data.display())
    })?;
    info!("Catalog ready in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Vocabulary => handle_vocabulary(&catalog),
        Commands::Find {
            genres,
            decades,
            runtime,
            limit,
            json,
        } => handle_find(&catalog, genres, decades, runtime, limit, json)?,
        Commands::Issues => handle_issues(&catalog),
    }

    Ok(())
}

/// Handle the 'vocabulary' command
fn handle_vocabulary(catalog: &Catalog) {
    let vocab = vocabulary(catalog);

    println!("{}", "Genres:".bold().blue());
    for genre in &vocab.genres {
        println!("  {} {}", "•".green(), genre);
    }

    println!("{}", "Decades:".bold().blue());
    for decade in &vocab.decades {
        println!("  {} {}s", "•".green(), decade);
    }
}

/// Handle the 'find' command
fn handle_find(
    catalog: &Catalog,
    genres: Vec<String>,
    decades: Vec<i32>,
    runtime: RuntimePreference,
    limit: PageLimit,
    json: bool,
) -> Result<()> {
    for genre in genres.iter().filter(|g| !catalog.genres().contains(g.as_str())) {
        warn!("Genre {:?} does not appear in the catalog", genre);
    }

    let criteria = FilterCriteria::new()
        .with_genres(genres)
        .with_decades(decades)
        .with_runtime_preference(runtime);

    let matched = filter(catalog, &criteria).context("Invalid filter criteria")?;
    let page = rank_and_page(matched, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&page, runtime);
    }
    Ok(())
}

/// Handle the 'issues' command
fn handle_issues(catalog: &Catalog) {
    if catalog.issues().is_empty() && catalog.skipped_rows() == 0 {
        println!("{} No parse issues", "✓".green());
        return;
    }

    println!("{}", "Unparsable fields:".bold().yellow());
    for issue in catalog.issues() {
        println!("  {} {}", "•".yellow(), issue);
    }
    println!(
        "{} records kept without a runtime, {} rows skipped",
        catalog.records_without_runtime().count(),
        catalog.skipped_rows()
    );
}

/// Print the ranked movies followed by the summary statistics
fn print_page(page: &ResultPage<'_>, runtime: RuntimePreference) {
    println!(
        "{}",
        format!(
            "Found {} movies matching your criteria ({})",
            page.total_matched, runtime
        )
        .bold()
        .blue()
    );

    if page.is_empty() {
        println!(
            "{}",
            "No movies match your current filters. Try adjusting your criteria!".yellow()
        );
        return;
    }

    for (idx, record) in page.records.iter().enumerate() {
        print_record(idx + 1, record);
    }

    if page.is_truncated() {
        println!(
            "Showing {} of {} matches",
            page.records.len(),
            page.total_matched
        );
    }

    let stats = &page.statistics;
    let modal_decade = match stats.modal_decade {
        Statistic::Available(decade) => format!("{}s", decade),
        Statistic::Unavailable => "N/A".to_string(),
    };

    println!("{}", "Summary Statistics".bold().blue());
    println!("  Average Rating: {:.1}", stats.average_rating);
    println!("  Average Runtime: {:.0} min", stats.average_runtime);
    println!("  Most Common Decade: {}", modal_decade);
    println!("  Total Movies: {}", stats.total_count);
}

fn print_record(rank: usize, record: &Record) {
    println!("{}. {}", rank.to_string().green(), record.to_string().bold());

    let mut details = vec![
        format!("⭐ {:.1}", record.rating),
        record.runtime_raw.clone(),
    ];
    if let Some(metascore) = record.metascore {
        details.push(format!("Metacritic {:.0}", metascore));
    }
    if let Some(certificate) = &record.certificate {
        details.push(certificate.clone());
    }
    println!("   {}", details.join(" | "));

    println!("   Genre: {}", record.genres.join(", "));
    if !record.director.is_empty() {
        println!("   Director: {}", record.director);
    }
    if !record.cast.is_empty() {
        println!("   Cast: {}", record.cast.join(", "));
    }
    if let Some(overview) = &record.overview {
        println!("   Plot: {}", overview);
    }
    if let Some(votes) = record.vote_count {
        println!("   {} votes", format_count(votes).dimmed());
    }
    match &record.poster_url {
        Some(url) => println!("   Poster: {}", url.dimmed()),
        None => println!("   {}", "Poster not available".dimmed()),
    }
}

/// 2343110 -> "2,343,110"
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
