//! Render a roadmap timeline to SVG, HTML or JSON.
//!
//! Usage:
//!   render-timeline [options]
//!
//! Options:
//!   --input=<file.json>     Read a TimelineData snapshot (default source)
//!   --remote                Fetch from TIMELINE_ENDPOINTS (needs the `fetch` feature)
//!   --format=<fmt>          svg | html | json (default: svg)
//!   --variant=<v>           default | small | tiny (default: TIMELINE_VARIANT or default)
//!   --output=<file>         Write to a file instead of stdout
//!
//! Logging goes to stderr and is controlled by RUST_LOG.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roadmap_timeline::config::TimelineConfig;
use roadmap_timeline::render::{render_outcome, OutputFormat, SizeVariant};
use roadmap_timeline::source::{DataSource, JsonFileSource};
use roadmap_timeline::TimelineData;

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    remote: bool,
    format: OutputFormat,
    variant: Option<SizeVariant>,
    output: Option<PathBuf>,
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut args = Args::default();
    for arg in raw {
        if let Some(v) = arg.strip_prefix("--input=") {
            args.input = Some(PathBuf::from(v));
        } else if arg == "--remote" {
            args.remote = true;
        } else if let Some(v) = arg.strip_prefix("--format=") {
            args.format = v.parse()?;
        } else if let Some(v) = arg.strip_prefix("--variant=") {
            args.variant = Some(v.parse()?);
        } else if let Some(v) = arg.strip_prefix("--output=") {
            args.output = Some(PathBuf::from(v));
        } else {
            bail!("unknown argument: {arg}");
        }
    }
    if args.remote == args.input.is_some() {
        bail!("pass exactly one of --input=<file> or --remote");
    }
    Ok(args)
}

#[cfg(feature = "fetch")]
async fn fetch_remote(config: &TimelineConfig) -> roadmap_timeline::Result<TimelineData> {
    let source = roadmap_timeline::source::HttpSource::from_config(config)?;
    source.fetch().await
}

#[cfg(not(feature = "fetch"))]
async fn fetch_remote(_config: &TimelineConfig) -> roadmap_timeline::Result<TimelineData> {
    Err(roadmap_timeline::Error::MissingConfig(
        "remote fetching (rebuild with --features fetch)".to_string(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw)?;
    let config = TimelineConfig::from_env()?;
    let variant = args.variant.unwrap_or(config.variant);

    let fetched = match &args.input {
        Some(path) => JsonFileSource::new(path).fetch().await,
        None => fetch_remote(&config).await,
    };

    let rendered = render_outcome(
        fetched,
        args.format,
        variant,
        config.window_days,
        Utc::now(),
    );

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered.body)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = rendered.body.len(), "timeline written");
        }
        None => print!("{}", rendered.body),
    }

    if rendered.is_error {
        std::process::exit(1);
    }
    Ok(())
}
