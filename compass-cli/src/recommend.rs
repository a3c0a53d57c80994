//! Recommend command implementation for the Compass CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use compass_core::{CareerScore, InterestScore, ProfileStore};
use compass_data::{JsonProfileStore, load_answers};
use compass_scorer::{DEFAULT_TOP_N, recommend, score_careers};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::{self, require_existing};
use crate::{
    ARG_ANSWERS, ARG_CATALOG, ARG_PROFILE, ARG_QUIZ, ARG_RULES, ARG_TOP_N, CliError,
    ENV_RECOMMEND_ANSWERS, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Tally quiz answers into interest scores and rank careers \
                 against them. Answers are a JSON object mapping question \
                 ids to option ids. The built-in quiz, careers and affinity \
                 rules are used unless replacement files are given.",
    about = "Recommend careers from quiz answers"
)]
#[ortho_config(prefix = "COMPASS")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file of quiz answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers: Option<Utf8PathBuf>,
    /// Replace the built-in career catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Replace the built-in affinity rules.
    #[arg(long = ARG_RULES, value_name = "path")]
    #[serde(default)]
    pub(crate) rules: Option<Utf8PathBuf>,
    /// Replace the built-in quiz.
    #[arg(long = ARG_QUIZ, value_name = "path")]
    #[serde(default)]
    pub(crate) quiz: Option<Utf8PathBuf>,
    /// Number of careers to recommend.
    #[arg(long = ARG_TOP_N, value_name = "n")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Record the result in this profile file.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) answers: Utf8PathBuf,
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) rules: Option<Utf8PathBuf>,
    pub(crate) quiz: Option<Utf8PathBuf>,
    pub(crate) top_n: usize,
    pub(crate) profile: Option<Utf8PathBuf>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let answers = args.answers.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_RECOMMEND_ANSWERS,
        })?;
        Ok(Self {
            answers,
            catalog: args.catalog,
            rules: args.rules,
            quiz: args.quiz,
            top_n: args.top_n.unwrap_or(DEFAULT_TOP_N),
            profile: args.profile,
        })
    }
}

/// JSON document printed by `compass recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RecommendResponse {
    /// Interests tallied from the answers.
    pub(crate) interests: InterestScore,
    /// Every career's score, in catalog order.
    pub(crate) scores: Vec<CareerScore>,
    /// Identifiers of the best careers, best first.
    pub(crate) recommended: Vec<String>,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let response = execute_recommend(&config)?;
    if let Some(path) = &config.profile {
        record_in_profile(&JsonProfileStore::new(path.clone()), &response)?;
    }
    write_json(writer, &response)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<RecommendResponse, CliError> {
    require_existing(&config.answers, ARG_ANSWERS)?;
    let quiz = sources::quiz(config.quiz.as_deref())?;
    let catalog = sources::career_catalog(config.catalog.as_deref())?;
    let rules = sources::affinity_table(config.rules.as_deref())?;
    let answers = load_answers(&config.answers)?;

    if !quiz.is_complete(&answers) {
        log::warn!(
            "{} of {} questions answered in {}",
            answers.len(),
            quiz.questions().len(),
            config.answers
        );
    }
    let interests = quiz
        .tally(&answers)
        .map_err(|source| CliError::InvalidAnswers {
            path: config.answers.clone(),
            source,
        })?;
    let scores = score_careers(&interests, &catalog, &rules);
    let recommended = recommend(&interests, &catalog, &rules, config.top_n);
    Ok(RecommendResponse {
        interests,
        scores,
        recommended,
    })
}

/// Fold a finished quiz into the stored profile.
pub(crate) fn record_in_profile(
    store: &dyn ProfileStore,
    response: &RecommendResponse,
) -> Result<(), CliError> {
    let mut profile = store.load()?;
    profile.complete_assessment(&response.interests, response.recommended.clone());
    store.save(&profile)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
