use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dataset::sample_dataset;
use recommender::{Engine, Method, Recommendation};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// CineRecs - dual-strategy movie recommender over the demo ratings table
#[derive(Parser)]
#[command(name = "cine-recs")]
#[command(about = "Movie recommendations via content-based or collaborative filtering", long_about = None)]
struct Cli {
    /// User id to recommend for (prompted interactively when omitted)
    #[arg(long)]
    user_id: Option<String>,

    /// Recommendation method, content-based or collaborative (prompted when omitted)
    #[arg(long)]
    method: Option<String>,

    /// Number of recommendations to return
    #[arg(long, default_value = "2")]
    top_k: usize,

    /// Emit the recommendation list as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Every run assembles the dataset and derived matrices from scratch
    let dataset = Arc::new(sample_dataset().context("Failed to build the demo dataset")?);
    let engine = Engine::new(dataset);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let user_id = match cli.user_id {
        Some(id) => id.trim().to_string(),
        None => prompt(&mut lines, "Enter User ID: ")?,
    };

    let method_input = match cli.method {
        Some(method) => method,
        None => prompt(
            &mut lines,
            "Choose recommendation method (content-based / collaborative): ",
        )?,
    };

    // An unrecognized selector is a user-facing message and a clean exit,
    // not a failure
    let method: Method = match method_input.parse() {
        Ok(method) => method,
        Err(_) => {
            println!("Invalid method selected!");
            return Ok(());
        }
    };

    let recommendations = engine
        .recommend(&user_id, method, cli.top_k)
        .with_context(|| format!("Could not compute {method} recommendations"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        print_recommendations(&user_id, method, &recommendations);
    }

    Ok(())
}

/// Print `text` as a prompt and read one trimmed line from stdin.
///
/// End of input is treated as an empty answer.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;

    let line = lines.next().unwrap_or_else(|| Ok(String::new()))?;
    Ok(line.trim().to_string())
}

/// Helper function to format and print recommendations
fn print_recommendations(user_id: &str, method: Method, recommendations: &[Recommendation]) {
    println!();
    println!(
        "{}",
        format!("Recommendations for User {user_id} using {method} filtering:")
            .bold()
            .blue()
    );

    if recommendations.is_empty() {
        println!("No recommendations available.");
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} - {:.2}",
            (rank + 1).to_string().green(),
            rec.title,
            rec.score
        );
    }
}
