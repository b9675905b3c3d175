//! typu CLI (made by FontLab https://www.fontlab.com/)

use std::env;
use std::io::{self, Write};

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::json;

use typu_core::output::{write_json_pretty, write_ndjson};
use typu_core::provider::{resolve_catalog, ReqwestHttpClient, ResolveOptions};
use typu_core::resolve::font_url;

/// CLI entrypoint for typu.
#[derive(Debug, Parser)]
#[command(
    name = "typu",
    about = "Google Fonts stylesheet URL resolver (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a family name to a css2 stylesheet URL
    Url(UrlArgs),
    /// List the families in the resolved catalog
    List(ListArgs),
}

#[derive(Debug, Args)]
struct UrlArgs {
    /// Font family to resolve (exact, case-sensitive)
    family: String,

    #[command(flatten)]
    source: SourceArgs,

    /// Emit a {family, url} JSON object instead of the bare URL
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Emit full records as a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit full records as newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Webfonts API key (falls back to GOOGLE_FONTS_API_KEY)
    #[arg(long = "api-key")]
    api_key: Option<String>,

    /// Stay on the bundled snapshot even when a key is available
    #[arg(long = "no-fetch", action = ArgAction::SetTrue)]
    no_fetch: bool,
}

impl SourceArgs {
    fn resolve_options(&self) -> ResolveOptions {
        let mut options = ResolveOptions::new().fetch_latest(!self.no_fetch);
        let key = self
            .api_key
            .clone()
            .or_else(|| env::var("GOOGLE_FONTS_API_KEY").ok());

        if let Some(key) = key {
            options = options.with_api_key(key);
        }

        options
    }
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    match cli.command {
        Command::Url(args) => runtime.block_on(run_url(args)),
        Command::List(args) => runtime.block_on(run_list(args)),
    }
}

async fn run_url(args: UrlArgs) -> Result<()> {
    let options = args.source.resolve_options();
    let url = font_url(&args.family, &options).await?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if args.json {
        let rendered = json!({ "family": args.family, "url": url });
        writeln!(handle, "{rendered}")?;
    } else {
        writeln!(handle, "{url}")?;
    }

    Ok(())
}

async fn run_list(args: ListArgs) -> Result<()> {
    let options = args.source.resolve_options();
    let catalog = resolve_catalog(&options, &ReqwestHttpClient).await?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if args.ndjson {
        write_ndjson(&catalog, &mut handle)?;
    } else if args.json {
        write_json_pretty(&catalog, &mut handle)?;
    } else {
        for record in catalog.iter() {
            writeln!(handle, "{}", record.family)?;
        }
    }

    Ok(())
}
