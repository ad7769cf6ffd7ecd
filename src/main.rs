use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tagmend::{
    AudioMeta, ConfigError, FilenameMeta, MatchConfig, MetaSnapshot, SharedMeta, TitleEnhancer,
    TrackMetaBuilder, path_stem, split_filename,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// tagmend - recover full song titles from file names
#[derive(Parser)]
#[command(name = "tagmend")]
#[command(about = "Recover full song titles from file names")]
#[command(version)]
struct Cli {
    /// Selection threshold (defaults to TAGMEND_THRESHOLD or 0.3)
    #[arg(long, global = true, value_name = "SCORE")]
    threshold: Option<f64>,

    /// Containment bonus (defaults to TAGMEND_CONTAINMENT_BONUS or 0.5)
    #[arg(long, global = true, value_name = "SCORE")]
    bonus: Option<f64>,

    /// Log scoring details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Print the enhanced title for a file
    Enhance(EnhanceCommand),
    /// Print metadata guessed from a file name
    Parse(ParseCommand),
    /// Print the title candidates found in a file name
    Segments(SegmentsCommand),
    /// Show how every candidate scores against a title
    Explain(ExplainCommand),
}

/// Enhance a title
#[derive(Parser)]
struct EnhanceCommand {
    /// Audio file name or path
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Title from the file's tags; guessed from the file name if omitted
    #[arg(short, long)]
    title: Option<String>,

    /// Artist from the file's tags (repeatable)
    #[arg(short, long = "artist", value_name = "ARTIST")]
    artists: Vec<String>,

    /// Album from the file's tags
    #[arg(short = 'l', long)]
    album: Option<String>,

    /// Print JSON instead of the bare title
    #[arg(long)]
    json: bool,
}

/// Parse a file name
#[derive(Parser)]
struct ParseCommand {
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Segment a file name
#[derive(Parser)]
struct SegmentsCommand {
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Explain a selection
#[derive(Parser)]
struct ExplainCommand {
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Title to compare against
    #[arg(short, long)]
    title: String,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = build_config(&cli).and_then(|config| {
        let enhancer = TitleEnhancer::new(config);
        match &cli.command {
            Commands::Enhance(cmd) => execute_enhance(cmd, &enhancer),
            Commands::Parse(cmd) => execute_parse(cmd),
            Commands::Segments(cmd) => Ok(execute_segments(cmd)),
            Commands::Explain(cmd) => execute_explain(cmd, &enhancer),
        }
    });

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            // Determine exit code based on error type
            let exit_code = if is_user_error(&e) { 1 } else { 2 };
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tagmend=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Configuration problems are the user's to fix; everything else is internal.
fn is_user_error(error: &anyhow::Error) -> bool {
    error.downcast_ref::<ConfigError>().is_some()
}

fn build_config(cli: &Cli) -> Result<MatchConfig> {
    let mut builder = MatchConfig::builder();
    if let Some(threshold) = cli.threshold {
        builder = builder.threshold(threshold);
    }
    if let Some(bonus) = cli.bonus {
        builder = builder.containment_bonus(bonus);
    }
    let config = builder.build()?;
    info!(
        threshold = config.threshold(),
        bonus = config.containment_bonus(),
        "match configuration"
    );
    Ok(config)
}

/// Builds the original metadata from flags, or from the file name when no
/// title was given.
fn original_meta(cmd: &EnhanceCommand) -> SharedMeta {
    match &cmd.title {
        Some(title) => {
            let mut builder = TrackMetaBuilder::new()
                .title(title.as_str())
                .artists(cmd.artists.clone());
            if let Some(album) = &cmd.album {
                builder = builder.album(album.as_str());
            }
            Arc::new(builder.build())
        }
        None => Arc::new(FilenameMeta::parse(&cmd.file.to_string_lossy())),
    }
}

fn execute_enhance(cmd: &EnhanceCommand, enhancer: &TitleEnhancer) -> Result<String> {
    let original = original_meta(cmd);
    let result = enhancer
        .enhance_path(Some(Arc::clone(&original)), &cmd.file)
        .context("Enhancer dropped the metadata")?;

    if !cmd.json {
        return Ok(result.title().to_string());
    }

    let output = json!({
        "file": cmd.file.to_string_lossy(),
        "enhanced": !Arc::ptr_eq(&original, &result),
        "original": MetaSnapshot::of(original.as_ref()),
        "result": MetaSnapshot::of(result.as_ref()),
    });
    serde_json::to_string_pretty(&output).context("Failed to serialize result")
}

fn execute_parse(cmd: &ParseCommand) -> Result<String> {
    let meta = FilenameMeta::parse(&cmd.file.to_string_lossy());
    let snapshot = MetaSnapshot::of(&meta);

    if cmd.json {
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize metadata")
    } else {
        Ok(snapshot.to_string())
    }
}

fn execute_segments(cmd: &SegmentsCommand) -> String {
    split_filename(&path_stem(&cmd.file)).join("\n")
}

fn execute_explain(cmd: &ExplainCommand, enhancer: &TitleEnhancer) -> Result<String> {
    let explanation = enhancer.explain(&cmd.title, &cmd.file.to_string_lossy());

    if cmd.json {
        return serde_json::to_string_pretty(&explanation)
            .context("Failed to serialize explanation");
    }

    let mut lines = vec![format!(
        "title: {:?} (threshold > {})",
        explanation.normalized_title, explanation.threshold
    )];
    for (index, segment) in explanation.segments.iter().enumerate() {
        let marker = match &explanation.winner {
            Some(winner) if winner.index == index => "*",
            _ => " ",
        };
        lines.push(format!(
            "{marker} {:.3}  {}  ({:?})",
            segment.score, segment.segment, segment.normalized
        ));
    }
    if explanation.winner.is_none() {
        lines.push("no segment qualifies".to_string());
    }
    Ok(lines.join("\n"))
}
