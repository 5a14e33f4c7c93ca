//! meadow-cli: a native probe for the Location Source.
//!
//! Lets you exercise an object-finder endpoint without a browser: fetch a
//! single capture and inspect it, or watch the endpoint on the same cadence
//! the viewer polls at.

use std::time::Duration;

use clap::{Parser, Subcommand};

use capture::Capture;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] capture::CaptureError),
    #[error("detector reported an error: {0}")]
    Detector(String),
}

#[derive(Parser, Debug)]
#[command(name = "meadow-cli", about = "Location Source polling and inspection CLI")]
struct Cli {
    /// Base URL of the Location Source server.
    #[arg(long, env = "MEADOW_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Capture endpoint path on the server.
    #[arg(long, env = "MEADOW_CAPTURE_PATH", default_value = "/cgi-bin/object_finder.py")]
    path: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one capture and print it.
    Fetch {
        /// Print the decoded payload as JSON instead of a summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Poll the endpoint and print one summary line per capture.
    Watch {
        /// Milliseconds between polls.
        #[arg(long, default_value_t = 5000)]
        interval_ms: u64,

        /// Stop after this many polls.
        #[arg(long)]
        limit: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), cli.path);
    let client = reqwest::Client::new();

    match cli.command {
        Command::Fetch { json } => run_fetch(&client, &url, json).await,
        Command::Watch { interval_ms, limit } => {
            run_watch(&client, &url, interval_ms, limit).await
        }
    }
}

async fn fetch_capture(client: &reqwest::Client, url: &str) -> Result<Capture, CliError> {
    let text = client.get(url).send().await?.error_for_status()?.text().await?;
    Ok(capture::decode_capture(&text)?)
}

async fn run_fetch(client: &reqwest::Client, url: &str, json: bool) -> Result<(), CliError> {
    let cap = fetch_capture(client, url).await?;
    if let Some(message) = &cap.error {
        return Err(CliError::Detector(message.clone()));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&cap).unwrap_or_default());
        return Ok(());
    }

    println!("{}", summarize(&cap));
    if let Some(frame) = cap.frame() {
        for point in &frame.points {
            println!("  row {:>8.1}  col {:>8.1}", point.row, point.col);
        }
    }
    Ok(())
}

async fn run_watch(
    client: &reqwest::Client,
    url: &str,
    interval_ms: u64,
    limit: Option<u64>,
) -> Result<(), CliError> {
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    let mut polls: u64 = 0;

    loop {
        interval.tick().await;
        match fetch_capture(client, url).await {
            Ok(cap) => println!("{}", summarize(&cap)),
            // Keep watching through transient failures; the viewer would
            // retain its frame here too.
            Err(e) => println!("fetch failed: {e}"),
        }

        polls += 1;
        if limit.is_some_and(|n| polls >= n) {
            return Ok(());
        }
    }
}

/// One-line human summary of a capture payload.
fn summarize(cap: &Capture) -> String {
    if let Some(message) = &cap.error {
        return format!("detector error: {message}");
    }
    match cap.frame() {
        Some(frame) => format!(
            "{} point(s) in {:.0}x{:.0} capture",
            frame.points.len(),
            frame.width,
            frame.height
        ),
        None => "no data".to_owned(),
    }
}
