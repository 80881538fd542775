use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lens",
    version,
    about = "Weighted movie rating scale: rate categories, get a score out of 10"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one movie
    Score(ScoreCommand),
    /// List the active categories
    Categories(CategoriesCommand),
    /// Validate the active catalog
    Check(CheckCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Ratings sheet (.toml or .json)
    pub ratings: Option<PathBuf>,

    /// Rate a category, overriding the sheet
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, i64)>,

    /// Mark a category as not applicable to this movie
    #[arg(long = "na", value_name = "NAME")]
    pub not_applicable: Vec<String>,

    /// Movie title shown in the report
    #[arg(long)]
    pub subject: Option<String>,

    /// Directory holding lens.toml
    #[arg(long, default_value = ".")]
    pub config: PathBuf,

    /// Clamp out-of-range ratings instead of rejecting them
    #[arg(long)]
    pub clamp: bool,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CategoriesCommand {
    #[arg(long, default_value = ".")]
    pub config: PathBuf,

    /// Include the per-rating descriptors
    #[arg(long)]
    pub guide: bool,
}

#[derive(Args)]
pub struct CheckCommand {
    #[arg(long, default_value = ".")]
    pub config: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_assignment(raw: &str) -> Result<(String, i64), String> {
    let (name, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing category name in '{}'", raw));
    }
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("rating for '{}' must be an integer, got '{}'", name, value))?;
    Ok((name.to_string(), value))
}
