//! Command-line interface for the Compass career recommendation engine.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod careers;
mod error;
mod profile;
mod recommend;
mod sources;
mod validate;

pub use error::CliError;

use careers::{CareersArgs, run_careers};
use profile::{ProfileArgs, run_profile};
use recommend::{RecommendArgs, run_recommend};
use validate::{ValidateArgs, run_validate};

const ARG_ANSWERS: &str = "answers";
const ARG_CATALOG: &str = "catalog";
const ARG_RULES: &str = "rules";
const ARG_QUIZ: &str = "quiz";
const ARG_TOP_N: &str = "top-n";
const ARG_PROFILE: &str = "profile";
const ARG_ACTION: &str = "action";
const ARG_CAREER: &str = "career";
const ARG_SEARCH: &str = "search";
const ARG_SAVED: &str = "saved";
const ARG_RECOMMENDED: &str = "recommended";
const ENV_RECOMMEND_ANSWERS: &str = "COMPASS_CMDS_RECOMMEND_ANSWERS";
const ENV_PROFILE_ACTION: &str = "COMPASS_CMDS_PROFILE_ACTION";
const ENV_PROFILE_CAREER: &str = "COMPASS_CMDS_PROFILE_CAREER";
const ENV_PROFILE_PATH: &str = "COMPASS_CMDS_PROFILE_PROFILE";
const ENV_CAREERS_PROFILE: &str = "COMPASS_CMDS_CAREERS_PROFILE";

/// Run the Compass CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration loading, or the
/// selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Validate(args) => run_validate(args),
        Command::Profile(args) => run_profile(args),
        Command::Careers(args) => run_careers(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "compass",
    about = "Career recommendations from interest quiz answers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank careers against a set of quiz answers.
    Recommend(RecommendArgs),
    /// Check affinity rules against the career catalog.
    Validate(ValidateArgs),
    /// Inspect a profile or manage its career bookmarks.
    Profile(ProfileArgs),
    /// Browse careers by text and by a profile's lists.
    Careers(CareersArgs),
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
