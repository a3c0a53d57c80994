//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{ANALYTICAL_ANSWERS, write_utf8};
use super::*;
use crate::recommend::RecommendResponse;
use camino::Utf8PathBuf;
use compass_core::{Category, ProfileStore};
use compass_data::JsonProfileStore;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct RecommendWorld {
    _tmp: TempDir,
    answers_path: Utf8PathBuf,
    profile_path: Utf8PathBuf,
    include_answers: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            _tmp: tmp,
            answers_path: root.join("answers.json"),
            profile_path: root.join("profile.json"),
            include_answers: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["compass".to_owned(), "recommend".to_owned()];
        if *self.include_answers.borrow() {
            argv.push(self.answers_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn response(&self) -> RecommendResponse {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON recommendation")
    }
}

#[fixture]
fn recommend_world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("an answer file favouring analytical options")]
fn analytical_answers_exist(#[from(recommend_world)] world: &RecommendWorld) {
    write_utf8(&world.answers_path, ANALYTICAL_ANSWERS.as_bytes());
}

#[given("I ask for {count} recommendation")]
fn ask_for_recommendations(#[from(recommend_world)] world: &RecommendWorld, count: String) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_TOP_N}"), count.trim_matches('"').to_owned()]);
}

#[given("I pass a profile path")]
fn pass_profile_path(#[from(recommend_world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PROFILE}"), world.profile_path.as_str().to_owned()]);
}

#[given("I omit the answer file path")]
fn omit_answer_path(#[from(recommend_world)] world: &RecommendWorld) {
    *world.include_answers.borrow_mut() = false;
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(recommend_world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            recommend::run_recommend_with(args, &mut *buffer)
        }
        other => panic!("expected recommend command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and recommends {career} first")]
fn recommends_first(#[from(recommend_world)] world: &RecommendWorld, career: String) {
    let response = world.response();
    assert_eq!(
        response.recommended.first().map(String::as_str),
        Some(career.trim_matches('"'))
    );
    assert_eq!(response.recommended.len(), 3);
}

#[then("exactly {count} career is recommended")]
fn exactly_n_recommended(#[from(recommend_world)] world: &RecommendWorld, count: String) {
    let expected: usize = count.trim_matches('"').parse().expect("numeric count");
    assert_eq!(world.response().recommended.len(), expected);
}

#[then("the profile marks the assessment as completed")]
fn profile_marks_assessment(#[from(recommend_world)] world: &RecommendWorld) {
    let response = world.response();
    let profile = JsonProfileStore::new(world.profile_path.clone())
        .load()
        .expect("profile should load");
    assert!(profile.assessment_completed());
    assert_eq!(profile.recommended_careers(), response.recommended.as_slice());
    assert_eq!(
        profile.interests().weight(Category::Analytical),
        response.interests.weight(Category::Analytical)
    );
}

#[then("the command fails because the answers path is missing")]
fn command_fails_missing_answers(#[from(recommend_world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_ANSWERS),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(recommend_world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_happy_path, "recommending careers from an answer file");
register_recommend_scenario!(recommend_top_n, "limiting the number of recommendations");
register_recommend_scenario!(recommend_records_profile, "recording the result in a profile");
register_recommend_scenario!(recommend_missing_answers, "rejecting missing answer paths");
