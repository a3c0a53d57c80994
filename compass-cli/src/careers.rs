//! Careers command: browse the catalog by text and by the user's lists.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use compass_core::{Career, CareerFilter, ProfileStore, UserProfile};
use compass_data::JsonProfileStore;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources;
use crate::{
    ARG_CATALOG, ARG_PROFILE, ARG_RECOMMENDED, ARG_SAVED, ARG_SEARCH, CliError,
    ENV_CAREERS_PROFILE, write_json,
};

/// CLI arguments for the `careers` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List careers from the catalog, optionally narrowed by a \
                 case-insensitive search over titles and descriptions and \
                 by the careers a profile has saved or been recommended. \
                 Results keep catalog order.",
    about = "Browse the career catalog"
)]
#[ortho_config(prefix = "COMPASS")]
pub(crate) struct CareersArgs {
    /// Text to look for in titles and descriptions.
    #[arg(long = ARG_SEARCH, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Only list careers saved in the profile.
    #[arg(
        long = ARG_SAVED,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) saved: Option<bool>,
    /// Only list careers recommended in the profile.
    #[arg(
        long = ARG_RECOMMENDED,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) recommended: Option<bool>,
    /// Replace the built-in career catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Profile whose saved and recommended careers are read.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
}

impl CareersArgs {
    pub(crate) fn into_config(self) -> Result<CareersConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CareersConfig::try_from(merged)
    }
}

/// Resolved `careers` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CareersConfig {
    pub(crate) filter: CareerFilter,
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) profile: Option<Utf8PathBuf>,
}

impl TryFrom<CareersArgs> for CareersConfig {
    type Error = CliError;

    fn try_from(args: CareersArgs) -> Result<Self, Self::Error> {
        let mut filter = CareerFilter::new();
        if let Some(search) = args.search {
            filter = filter.with_search(search);
        }
        if args.saved.unwrap_or(false) {
            filter = filter.saved_only();
        }
        if args.recommended.unwrap_or(false) {
            filter = filter.recommended_only();
        }
        if filter.needs_profile() && args.profile.is_none() {
            return Err(CliError::MissingArgument {
                field: ARG_PROFILE,
                env: ENV_CAREERS_PROFILE,
            });
        }
        Ok(Self {
            filter,
            catalog: args.catalog,
            profile: args.profile,
        })
    }
}

pub(super) fn run_careers(args: CareersArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_careers_with(args, &mut stdout)
}

pub(super) fn run_careers_with(args: CareersArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let careers = execute_careers(&config)?;
    write_json(writer, &careers)
}

/// Load the catalog and profile named by `config` and apply its filter.
pub(crate) fn execute_careers(config: &CareersConfig) -> Result<Vec<Career>, CliError> {
    let catalog = sources::career_catalog(config.catalog.as_deref())?;
    let profile = match &config.profile {
        Some(path) => JsonProfileStore::new(path.clone()).load()?,
        None => UserProfile::new(),
    };
    let found: Vec<Career> = catalog
        .search(&config.filter, &profile)
        .into_iter()
        .cloned()
        .collect();
    log::debug!("{} of {} careers match", found.len(), catalog.len());
    Ok(found)
}
