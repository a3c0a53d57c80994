//! Validate command: check that rules and catalog agree.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources;
use crate::{ARG_CATALOG, ARG_RULES, CliError};

/// CLI arguments for the `validate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Check an affinity rule table against a career catalog. \
                 Reports rules naming careers the catalog lacks and rules \
                 listed more than once. Without paths the built-in data is \
                 checked.",
    about = "Validate affinity rules against the career catalog"
)]
#[ortho_config(prefix = "COMPASS")]
pub(crate) struct ValidateArgs {
    /// Career catalog to check against.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Affinity rules to check.
    #[arg(long = ARG_RULES, value_name = "path")]
    #[serde(default)]
    pub(crate) rules: Option<Utf8PathBuf>,
}

pub(super) fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_validate_with(args, &mut stdout)
}

pub(super) fn run_validate_with(
    args: ValidateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let catalog = sources::career_catalog(merged.catalog.as_deref())?;
    let rules = sources::affinity_table(merged.rules.as_deref())?;
    rules.validate(&catalog)?;
    writeln!(writer, "ok").map_err(CliError::WriteOutput)
}
