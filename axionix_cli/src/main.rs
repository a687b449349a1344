//! # axionix
//!
//! Command-line front end for the Axionix site.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html from the built-in content
//! axionix render
//!
//! # Check a content file before publishing it
//! axionix check --content content/site.toml
//!
//! # Push one contact request through the configured transport
//! axionix submit --name "Jane Doe" --email jane@example.com \
//!     --cargo-details "40ft container, port delay"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use axionix_site::config::{CONFIG_FILE_NAME, SiteConfig, TransportKind};
use axionix_site::contact::{
    ContactFormHandler, DiscardTransport, FormField, MailtoTransport, Receipt, SubmissionTransport,
};
use axionix_site::types::SiteContent;
use axionix_site::{ContentError, render_page};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "axionix")]
#[command(about = "Render and check the Axionix cargo-survey site")]
#[command(version)]
struct Args {
    /// Config file (defaults to ./axionix.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to <out>/index.html
    Render {
        /// Content file (TOML or JSON) replacing the built-in content
        #[arg(long)]
        content: Option<PathBuf>,
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Validate content and in-page links without rendering
    Check {
        /// Content file (TOML or JSON) replacing the built-in content
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Capture one contact request and hand it to a transport
    Submit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        cargo_details: String,
        /// Override the configured transport
        #[arg(long, value_enum)]
        transport: Option<TransportArg>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TransportArg {
    Discard,
    Mailto,
}

impl From<TransportArg> for TransportKind {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Discard => TransportKind::Discard,
            TransportArg::Mailto => TransportKind::Mailto,
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(path: Option<&Path>) -> SiteConfig {
    match path {
        Some(path) => {
            if !path.exists() {
                warn!("Config file {} not found, using defaults", path.display());
            }
            SiteConfig::load_from_path(path)
        }
        None => SiteConfig::load_from_path(Path::new(CONFIG_FILE_NAME)),
    }
}

/// Content from `--content`, then the config, then the built-in copy.
fn load_content(cli: Option<&Path>, config: &SiteConfig) -> Result<SiteContent, ContentError> {
    match cli.or(config.content.as_deref()) {
        Some(path) => {
            info!("Loading content from {}", path.display());
            SiteContent::load_from_path(path)
        }
        None => Ok(SiteContent::axionix()),
    }
}

fn validate_or_report(content: &SiteContent) -> Result<()> {
    if let Err(err) = content.validate() {
        if let ContentError::Invalid(problems) = &err {
            for problem in problems {
                eprintln!("error: {}", problem);
            }
        }
        return Err(err.into());
    }
    Ok(())
}

fn run_render(config: &SiteConfig, content: Option<&Path>, out: Option<PathBuf>) -> Result<()> {
    let content = load_content(content, config)?;
    validate_or_report(&content).context("Refusing to render invalid content")?;

    let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let html = render_page(&content, &config.assets);
    let target = out_dir.join("index.html");
    std::fs::write(&target, &html)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    info!("Rendered {} bytes", html.len());
    println!("Page written to: {}", target.display());
    Ok(())
}

fn run_check(config: &SiteConfig, content: Option<&Path>) -> Result<()> {
    let content = load_content(content, config)?;
    validate_or_report(&content)?;
    println!(
        "ok: {} nav links, {} services, {} steps",
        content.nav().len(),
        content.services().len(),
        content.steps().len()
    );
    Ok(())
}

async fn submit_with<T: SubmissionTransport>(
    handler: ContactFormHandler<T>,
    name: String,
    email: String,
    cargo_details: String,
) -> Result<()> {
    handler.set_field(FormField::Name, name);
    handler.set_field(FormField::Email, email);
    handler.set_field(FormField::CargoDetails, cargo_details);

    match handler.submit().await {
        Ok(outcome) => {
            match outcome.receipt {
                Receipt::Discarded => println!("Request captured (no delivery target configured)"),
                Receipt::MailtoDraft(uri) => println!("{}", uri),
                Receipt::Delivered(reference) => println!("Request delivered: {}", reference),
            }
            Ok(())
        }
        Err(axionix_site::SubmissionError::Invalid(errors)) => {
            for error in &errors {
                eprintln!("error: {}", error);
            }
            bail!("Contact request rejected: {} field(s) need attention", errors.len())
        }
        Err(err) if err.is_retryable() => bail!("Contact request not sent, try again: {}", err),
        Err(err) => Err(err.into()),
    }
}

async fn run_submit(
    config: &SiteConfig,
    name: String,
    email: String,
    cargo_details: String,
    transport: Option<TransportArg>,
) -> Result<()> {
    let timeout = config.contact.submit_timeout();
    let kind = transport.map(TransportKind::from).unwrap_or(config.contact.transport);

    match kind {
        TransportKind::Discard => {
            let handler = ContactFormHandler::with_timeout(DiscardTransport, timeout);
            submit_with(handler, name, email, cargo_details).await
        }
        TransportKind::Mailto => {
            let content = load_content(None, config)?;
            validate_or_report(&content).context("Refusing to draft from invalid content")?;
            let transport = MailtoTransport::new(content.contact_info().email.clone());
            let handler = ContactFormHandler::with_timeout(transport, timeout);
            submit_with(handler, name, email, cargo_details).await
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = load_config(args.config.as_deref());

    match args.command {
        Command::Render { content, out } => run_render(&config, content.as_deref(), out),
        Command::Check { content } => run_check(&config, content.as_deref()),
        Command::Submit {
            name,
            email,
            cargo_details,
            transport,
        } => run_submit(&config, name, email, cargo_details, transport).await,
    }
}
