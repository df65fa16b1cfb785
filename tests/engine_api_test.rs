//! Integration tests for the library's public API.

use checkenv::check::{check_with_env, CheckOptions, FailureMode};
use checkenv::engine::{evaluate, Environment, MapEnv};
use checkenv::report::{Report, SectionKind};
use checkenv::spec::{load_spec_file, parse_spec, DefaultValue, Rule, Specification};
use checkenv::CheckenvError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_spec(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env.json");
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn public_api_is_accessible() {
    let _spec = Specification::new();
    let _env = MapEnv::new();
    let _options = CheckOptions::default();
    let _rule = Rule::with_default(DefaultValue::from("x"));
}

#[test]
fn full_check_workflow() {
    let (_temp, path) = write_spec(
        r#"{
            "DATABASE_URL": {"description": "Postgres connection"},
            "PORT": {"default": 3000},
            "LOG_LEVEL": {"default": "info", "required": false},
            "SENTRY_DSN": false
        }"#,
    );

    let mut env = MapEnv::new().with("DATABASE_URL", "postgres://db");
    let outcome = check_with_env(&CheckOptions::new(&path), &mut env).unwrap();

    assert!(!outcome.failed());
    assert_eq!(outcome.evaluation.missing, Vec::<String>::new());
    assert_eq!(
        outcome.evaluation.optional,
        vec!["PORT", "LOG_LEVEL", "SENTRY_DSN"]
    );
    assert_eq!(env.get("PORT"), Some("3000".to_string()));
    assert_eq!(env.get("LOG_LEVEL"), Some("info".to_string()));
    assert_eq!(env.get("SENTRY_DSN"), None);

    let injected = outcome.injected_defaults();
    assert_eq!(
        injected,
        vec![("PORT", "3000".to_string()), ("LOG_LEVEL", "info".to_string())]
    );
}

#[test]
fn report_matches_evaluation() {
    let spec = parse_spec(
        r#"{"A": {"description": "first"}, "B": {"default": 3000}, "C": false}"#,
        Path::new("env.json"),
    )
    .unwrap();
    let mut env = MapEnv::new();
    let evaluation = evaluate(&spec, &mut env);
    let report = Report::new(&evaluation, &spec);

    let kinds: Vec<SectionKind> = report.sections().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![SectionKind::Missing, SectionKind::Optional]);
    assert_eq!(
        report.missing().to_string(),
        "The following 1 environment variable is required\nA first"
    );
    assert_eq!(
        report.optional().to_string(),
        "The following 2 environment variables are missing (but optional)\nB (default=3000)\nC"
    );
}

#[test]
fn error_mode_surfaces_structured_failure() {
    let (_temp, path) = write_spec(r#"{"API_KEY": true, "REGION": false}"#);
    let options = CheckOptions::new(&path).failure_mode(FailureMode::Error);

    let err = check_with_env(&options, &mut MapEnv::new()).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        err.to_string(),
        "Missing required environment variables: API_KEY"
    );
    match err {
        CheckenvError::CheckFailed { missing, optional } => {
            assert_eq!(missing, vec!["API_KEY"]);
            assert_eq!(optional, vec!["REGION"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loader_errors_carry_exit_codes() {
    let err = load_spec_file(Path::new("/nonexistent/checkenv/env.json")).unwrap_err();
    assert!(matches!(err, CheckenvError::SpecNotFound { .. }));
    assert_eq!(err.exit_code(), 2);

    let (_temp, path) = write_spec("[1, 2, 3]");
    let err = load_spec_file(&path).unwrap_err();
    assert!(matches!(err, CheckenvError::SchemaValidation { .. }));
    assert_eq!(err.exit_code(), 3);

    let (_temp, path) = write_spec("{\"A\": tru");
    let err = load_spec_file(&path).unwrap_err();
    assert!(matches!(err, CheckenvError::SpecParseError { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn second_evaluation_sees_injected_defaults() {
    let spec = Specification::new()
        .with("PORT", Rule::with_default(8080_i64))
        .with("DEBUG", Rule::with_default(true));
    let mut env = MapEnv::new();

    let first = evaluate(&spec, &mut env);
    assert_eq!(first.optional, vec!["PORT", "DEBUG"]);
    assert_eq!(env.get("DEBUG"), Some("true".to_string()));

    let second = evaluate(&spec, &mut env);
    assert!(second.optional.is_empty());
    assert!(second.missing.is_empty());
}

#[test]
fn falsy_defaults_are_not_injected() {
    let spec = Specification::new()
        .with("EMPTY", Rule::with_default(""))
        .with("ZERO", Rule::with_default(0_i64))
        .with("OFF", Rule::with_default(false));
    let mut env = MapEnv::new();

    let evaluation = evaluate(&spec, &mut env);
    assert_eq!(evaluation.missing, vec!["EMPTY", "ZERO", "OFF"]);
    assert!(env.vars().is_empty());
}
