//! `shorten` - terminal front-end for the url-shortener service.
//!
//! # Usage
//!
//! ```bash
//! # One-shot
//! shorten example.com
//!
//! # One-shot, open the short link in the browser
//! shorten --open example.com
//!
//! # Interactive mode
//! shorten
//! ```
//!
//! # Environment Variables
//!
//! - `API_DOMAIN` (required): base URL of the shortener service
//! - `BASE_URL`: public base for displaying short links

use url_shortener_cli::api::{ShortenBackend, ShortenerClient};
use url_shortener_cli::application::services::{ShortenOutcome, ShortenService};
use url_shortener_cli::config;
use url_shortener_cli::infrastructure::{browser, clipboard};
use url_shortener_cli::state::InputState;
use url_shortener_cli::ui::view::ResultView;
use url_shortener_cli::ui::{effects, render};

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Shorten URLs from the terminal.
#[derive(Parser)]
#[command(name = "shorten")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to shorten (omit for interactive mode)
    url: Option<String>,

    /// Open the short link in the default browser on success
    #[arg(long)]
    open: bool,

    /// Skip copying the short link to the clipboard
    #[arg(long)]
    no_copy: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let backend = Arc::new(ShortenerClient::new(&config.api_domain));
    let service = ShortenService::new(backend, &config.base_url);

    match cli.url {
        Some(ref url) => {
            shorten_once(&service, url.clone(), &cli).await;
        }
        None => {
            run_interactive(&service, &cli).await?;
        }
    }

    // A rejected URL is a rendered outcome, not a program error.
    Ok(())
}

/// Initializes the tracing subscriber; rendered UI goes to stdout, logs
/// to stderr.
fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Runs a single submission and applies the side effects.
async fn shorten_once<B: ShortenBackend>(service: &ShortenService<B>, url: String, cli: &Cli) {
    let mut state = InputState::with_value(url);
    let mut view = ResultView::default();

    render::render_loader();
    let outcome = service.handle_shorten(&mut state, &mut view).await;

    // The action hint reads "(copied to clipboard)"; only show it when
    // the copy actually happened.
    if let ShortenOutcome::Shortened { short_url } = &outcome {
        view.action_visible = !cli.no_copy
            && match clipboard::copy_to_clipboard(short_url) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("{e}");
                    false
                }
            };
    }

    render::render(&view);

    if let ShortenOutcome::Shortened { short_url } = outcome {
        effects::confetti_burst();

        if cli.open {
            if let Err(e) = browser::open_in_browser(&short_url) {
                tracing::warn!("{e}");
            }
        }
    }
}

/// Prompts for URLs until the user declines to continue.
async fn run_interactive<B: ShortenBackend>(service: &ShortenService<B>, cli: &Cli) -> Result<()> {
    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!();

    loop {
        let url: String = Input::new().with_prompt("URL to shorten").interact_text()?;

        shorten_once(service, url, cli).await;

        println!();
        let again = Confirm::new()
            .with_prompt("Shorten another URL?")
            .default(false)
            .interact()?;

        if !again {
            break;
        }
        println!();
    }

    Ok(())
}
