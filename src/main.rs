mod cli;
mod config;
mod error;
mod report;
mod scoring;
mod types;

use crate::error::LensError;
use crate::types::catalog::Catalog;
use crate::types::config::RangePolicy;
use crate::types::rating::ScoreRequest;
use crate::types::report::Scorecard;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, LensError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = config::load_config(&cmd.config)?;
            let catalog = Catalog::from_config(&loaded)?;

            let mut request = match &cmd.ratings {
                Some(path) => ScoreRequest::load(path)?,
                None => ScoreRequest::default(),
            };
            if cmd.subject.is_some() {
                request.subject = cmd.subject.clone();
            }
            for (name, value) in &cmd.set {
                request.apply_override(name, *value);
            }
            for name in &cmd.not_applicable {
                request.mark_not_applicable(name);
            }

            let policy = if cmd.clamp {
                RangePolicy::Clamp
            } else {
                loaded.range_policy()
            };
            let ratings = request.resolve(&catalog, policy)?;
            let result = scoring::score(catalog.categories(), &ratings);
            let skipped = result.skipped_degenerate();

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let scorecard = Scorecard::new(request.subject, result);
            let rendered = report::render(&scorecard, output_format)?;
            println!("{rendered}");

            if skipped > 0 {
                tracing::warn!(skipped, "category(ies) could not be scored");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Categories(cmd) => {
            let loaded = config::load_config(&cmd.config)?;
            let catalog = Catalog::from_config(&loaded)?;
            print!("{}", report::render_catalog(&catalog, cmd.guide));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let loaded = config::load_config(&cmd.config)?;
            let catalog = Catalog::assemble(&loaded)?;
            let findings = catalog.findings();

            if findings.is_empty() {
                println!(
                    "check: {} categories, no findings",
                    catalog.categories().len()
                );
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::INVALID_INPUT)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
