//! Profile command: manage career bookmarks in a stored profile.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use compass_core::ProfileStore;
use compass_data::JsonProfileStore;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ACTION, ARG_CAREER, ARG_PROFILE, CliError, ENV_PROFILE_ACTION, ENV_PROFILE_CAREER,
    ENV_PROFILE_PATH, write_json,
};

/// What to do with the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ProfileAction {
    /// Bookmark a career.
    SaveCareer,
    /// Remove a career bookmark.
    UnsaveCareer,
    /// Print the stored profile as JSON.
    Show,
}

/// CLI arguments for the `profile` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Inspect a stored profile or add and remove career \
                 bookmarks. Bookmarks are kept once each, in the order they \
                 were saved.",
    about = "Manage a stored user profile"
)]
#[ortho_config(prefix = "COMPASS")]
pub(crate) struct ProfileArgs {
    /// Operation to perform.
    #[arg(value_enum, value_name = "action")]
    #[serde(default)]
    pub(crate) action: Option<ProfileAction>,
    /// Career identifier for bookmark operations.
    #[arg(value_name = "career")]
    #[serde(default)]
    pub(crate) career: Option<String>,
    /// Profile file to update.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
}

impl ProfileArgs {
    pub(crate) fn into_config(self) -> Result<ProfileConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ProfileConfig::try_from(merged)
    }
}

/// A resolved profile operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProfileOperation {
    SaveCareer(String),
    UnsaveCareer(String),
    Show,
}

/// Resolved `profile` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProfileConfig {
    pub(crate) operation: ProfileOperation,
    pub(crate) profile: Utf8PathBuf,
}

impl TryFrom<ProfileArgs> for ProfileConfig {
    type Error = CliError;

    fn try_from(args: ProfileArgs) -> Result<Self, Self::Error> {
        let action = args.action.ok_or(CliError::MissingArgument {
            field: ARG_ACTION,
            env: ENV_PROFILE_ACTION,
        })?;
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE,
            env: ENV_PROFILE_PATH,
        })?;
        let career = || {
            args.career.clone().ok_or(CliError::MissingArgument {
                field: ARG_CAREER,
                env: ENV_PROFILE_CAREER,
            })
        };
        let operation = match action {
            ProfileAction::SaveCareer => ProfileOperation::SaveCareer(career()?),
            ProfileAction::UnsaveCareer => ProfileOperation::UnsaveCareer(career()?),
            ProfileAction::Show => ProfileOperation::Show,
        };
        Ok(Self { operation, profile })
    }
}

pub(super) fn run_profile(args: ProfileArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_profile_with(args, &mut stdout)
}

pub(super) fn run_profile_with(args: ProfileArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = JsonProfileStore::new(config.profile);
    apply_operation(&store, &config.operation, writer)
}

/// Apply `operation` to the profile held by `store`.
pub(crate) fn apply_operation(
    store: &dyn ProfileStore,
    operation: &ProfileOperation,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut profile = store.load()?;
    let message = match operation {
        ProfileOperation::Show => return write_json(writer, &profile),
        ProfileOperation::SaveCareer(career) => {
            if profile.save_career(career) {
                format!("saved {career}")
            } else {
                format!("{career} is already saved")
            }
        }
        ProfileOperation::UnsaveCareer(career) => {
            if profile.unsave_career(career) {
                format!("removed {career}")
            } else {
                format!("{career} was not saved")
            }
        }
    };
    store.save(&profile)?;
    writeln!(writer, "{message}").map_err(CliError::WriteOutput)
}
