use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{Movie, MovieDataset};
use pipeline::{SearchQuery, NO_RESULTS_MESSAGE};
use server::{MovieSearchService, SearchResults};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// movie-search - query the movie catalogue from the command line
#[derive(Parser)]
#[command(name = "movie-search")]
#[command(about = "Filter the movie catalogue by genre, country and average vote", long_about = None)]
struct Cli {
    /// Path to a JSON dataset (defaults to the bundled catalogue)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// The same three constraints the HTTP endpoint accepts.
#[derive(Args, Clone)]
struct QueryArgs {
    /// Genre substring (case-insensitive)
    #[arg(long)]
    genre: Option<String>,

    /// Country substring (case-insensitive)
    #[arg(long)]
    country: Option<String>,

    /// Minimum average vote (integer)
    #[arg(long)]
    avg_vote: Option<String>,
}

impl From<QueryArgs> for SearchQuery {
    fn from(args: QueryArgs) -> Self {
        SearchQuery {
            genre: args.genre,
            country: args.country,
            avg_vote: args.avg_vote,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalogue
    Search {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of searches to run
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Maximum number of searches in flight
        #[arg(long, default_value = "10")]
        concurrent: usize,

        #[command(flatten)]
        query: QueryArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let dataset = MovieDataset::load(cli.data_file.as_deref())
        .context("Failed to load movie dataset")?;
    tracing::info!("Loaded {} movies in {:?}", dataset.len(), start.elapsed());

    let service = MovieSearchService::new(Arc::new(dataset));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search { query } => handle_search(&service, query.into())?,
        Commands::Benchmark {
            requests,
            concurrent,
            query,
        } => handle_benchmark(service, requests, concurrent, query.into()).await?,
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(service: &MovieSearchService, query: SearchQuery) -> Result<()> {
    let results = service.search(&query)?;

    match results {
        SearchResults::Matches(movies) => print_movies(&movies),
        SearchResults::NoResults => println!("{}", NO_RESULTS_MESSAGE.yellow()),
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    service: MovieSearchService,
    requests: usize,
    concurrent: usize,
    query: SearchQuery,
) -> Result<()> {
    anyhow::ensure!(requests > 0, "--requests must be at least 1");
    anyhow::ensure!(concurrent > 0, "--concurrent must be at least 1");

    // Fail fast on an invalid query instead of timing N errors
    service.search(&query)?;

    let permits = Arc::new(Semaphore::new(concurrent));
    let query = Arc::new(query);
    let wall_clock = Instant::now();

    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let service = service.clone();
        let query = query.clone();
        let permits = permits.clone();
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            service.search(&query)?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    let mut timings = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await.context("Benchmark task panicked")??);
    }
    let total_time = wall_clock.elapsed();

    print_benchmark(&mut timings, total_time);
    Ok(())
}

/// Summarize latencies: mean, P50/P95/P99 and throughput.
fn print_benchmark(timings: &mut [Duration], total_time: Duration) {
    timings.sort();
    let percentile = |p: f64| {
        let index = ((timings.len() as f64 * p) as usize).min(timings.len() - 1);
        timings[index]
    };
    let busy: Duration = timings.iter().sum();
    let avg_latency = busy / timings.len() as u32;
    let throughput = timings.len() as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", timings.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} searches/second", throughput);
}

/// Helper function to format and print matching movies
fn print_movies(movies: &[Movie]) {
    println!("{}", format!("{} matching movies:", movies.len()).bold().blue());
    for (i, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}, {}] - Avg vote: {:.1}",
            (i + 1).to_string().green(),
            movie.film_title,
            movie.year,
            movie.genre,
            movie.country,
            movie.avg_vote
        );
    }
}
