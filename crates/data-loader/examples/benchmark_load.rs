use data_loader::load;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/imdb_top_1000.csv".to_string());

    println!("Loading movie catalog from {}...\n", path);

    let start = Instant::now();
    let catalog = load(&path).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Records: {}", catalog.len());
    println!("Genres: {}", catalog.genres().len());
    println!("Decades: {}", catalog.decades().len());
    println!("Unparsable fields: {}", catalog.issues().len());
    println!("Skipped rows: {}", catalog.skipped_rows());
    println!("\nPerformance: {:.0} records/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
}
