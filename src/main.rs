//! trendscrape
//!
//! Collects the latest uploads of trending channels into per-country CSV files.
//!
//! # Usage
//!
//! ```bash
//! # Reads api_key.txt, country_codes.txt and trending/, writes output/
//! trendscrape
//!
//! # Custom locations and an older snapshot
//! trendscrape --key_path key.txt --output_dir csv/ --date 2024-01-31
//! ```

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use trendscrape::api::{HttpTransport, YouTubeClient};
use trendscrape::cli::CliInterface;
use trendscrape::error::Result;
use trendscrape::{Scraper, input, output};

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or run the scrape
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    run_scrape(&cli).await
}

/// Load the job, scrape every country and print the summary
async fn run_scrape(cli: &CliInterface) -> Result<()> {
    let config = cli.config();
    let date = cli.snapshot_date()?;
    let job = input::load_job(&config.input, date)?;
    debug!("Loaded {} countries for {}", job.countries.len(), date);

    let transport = HttpTransport::new(&config.api.base_url, config.request_timeout())?;
    let client = YouTubeClient::new(Box::new(transport), job.api_key, config.api.max_results);

    let cancel_token = CancellationToken::new();
    let ctrl_c_handle = spawn_ctrl_c_listener(cancel_token.clone());

    let scraper = Scraper::new(client, &config.output.output_dir, job.date)
        .with_cancel_token(cancel_token)
        .with_progress(cli.show_progress());

    let result = scraper.run(&job.countries).await;
    ctrl_c_handle.abort();

    let report = result?;
    if cli.show_summary() {
        println!("{}", output::render_summary(&report));
    }

    Ok(())
}

/// Cancel the run on Ctrl+C
fn spawn_ctrl_c_listener(token: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("Interrupted, stopping after the current request");
                token.cancel();
            }
            Err(err) => {
                eprintln!("Failed to listen for Ctrl+C: {}", err);
            }
        }
    })
}

/// Initialize logging system based on the effective log level
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
