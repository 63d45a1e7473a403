use okprobe::args::{probe_command, selected_scenarios};
use okprobe::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use okprobe::scenarios::Scenario;
use okprobe::ProbeConfig;
use std::process::Command;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = ProbeConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert!(config.validate().is_ok());
}

#[test]
fn test_new_and_builders() {
    let config = ProbeConfig::new("KEY", "secret", "42")
        .with_base_url("http://localhost:8080/fb.do")
        .with_timeout(Duration::from_secs(2));
    assert_eq!(config.application_key, "KEY");
    assert_eq!(config.secret_key, "secret");
    assert_eq!(config.uid, "42");
    assert_eq!(config.base_url, "http://localhost:8080/fb.do");
    assert_eq!(config.timeout, Duration::from_secs(2));
}

#[test]
fn test_empty_credentials_are_valid() {
    assert!(ProbeConfig::new("", "", "").validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_base_url() {
    let config = ProbeConfig::default().with_base_url("  ");
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = ProbeConfig::default().with_timeout(Duration::ZERO);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn test_from_args_explicit_values() {
    let matches = probe_command()
        .try_get_matches_from([
            "okprobe",
            "--base-url",
            "http://127.0.0.1:9/fb.do",
            "-k",
            "KEY",
            "-s",
            "secret",
            "-u",
            "42",
            "-t",
            "5",
        ])
        .unwrap();
    let config = ProbeConfig::from_args(&matches).unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:9/fb.do");
    assert_eq!(config.application_key, "KEY");
    assert_eq!(config.secret_key, "secret");
    assert_eq!(config.uid, "42");
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
fn test_from_args_bad_timeout() {
    let matches = probe_command()
        .try_get_matches_from(["okprobe", "--base-url", "http://x/fb.do", "-t", "soon"])
        .unwrap();
    assert!(ProbeConfig::from_args(&matches).is_err());
}

#[test]
fn test_from_args_zero_timeout() {
    let matches = probe_command()
        .try_get_matches_from(["okprobe", "--base-url", "http://x/fb.do", "-t", "0"])
        .unwrap();
    assert!(ProbeConfig::from_args(&matches).is_err());
}

#[test]
fn test_selected_scenarios_default_is_all() {
    let matches = probe_command().try_get_matches_from(["okprobe"]).unwrap();
    assert_eq!(selected_scenarios(&matches), Scenario::ALL.to_vec());
}

#[test]
fn test_selected_scenarios_in_given_order() {
    let matches = probe_command()
        .try_get_matches_from([
            "okprobe",
            "--scenario",
            "correct-count",
            "--scenario",
            "incorrect-sig",
        ])
        .unwrap();
    assert_eq!(
        selected_scenarios(&matches),
        vec![Scenario::CorrectCount, Scenario::IncorrectSig]
    );
}

#[test]
fn test_unknown_scenario_is_rejected_by_parser() {
    let result = probe_command().try_get_matches_from(["okprobe", "--scenario", "bogus"]);
    assert!(result.is_err());
}

/// Set in the child process that checks the environment fallback
const CHILD_MARKER: &str = "OKPROBE_CONFIG_ENV_CHILD";

/// Re-run a single test of this binary with a controlled environment
fn run_isolated(test_name: &str, envs: &[(&str, &str)]) -> bool {
    let mut cmd = Command::new(std::env::current_exe().expect("test binary path"));
    cmd.args(["--exact", test_name, "--test-threads=1"])
        .env(CHILD_MARKER, "1")
        .env_remove("OK_BASE_URL")
        .env_remove("OK_APPLICATION_KEY")
        .env_remove("OK_SECRET_KEY")
        .env_remove("OK_UID");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.status().expect("Failed to re-run test binary").success()
}

#[test]
fn test_from_args_falls_back_to_environment() {
    if std::env::var_os(CHILD_MARKER).is_some() {
        let matches = probe_command().try_get_matches_from(["okprobe"]).unwrap();
        let config = ProbeConfig::from_args(&matches).unwrap();
        assert_eq!(config.uid, "573382458991123");
        assert_eq!(config.application_key, "ENVKEY");
        assert_eq!(config.secret_key, "envsecret");
        assert_eq!(config.base_url, "http://127.0.0.1:9/fb.do");
        return;
    }

    assert!(run_isolated(
        "test_from_args_falls_back_to_environment",
        &[
            ("OK_UID", "573382458991123"),
            ("OK_APPLICATION_KEY", "ENVKEY"),
            ("OK_SECRET_KEY", "envsecret"),
            ("OK_BASE_URL", "http://127.0.0.1:9/fb.do"),
        ],
    ));
}

#[test]
fn test_from_args_flag_beats_environment() {
    if std::env::var_os(CHILD_MARKER).is_some() {
        let matches = probe_command()
            .try_get_matches_from(["okprobe", "--uid", "42"])
            .unwrap();
        let config = ProbeConfig::from_args(&matches).unwrap();
        assert_eq!(config.uid, "42");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.secret_key, "");
        return;
    }

    assert!(run_isolated(
        "test_from_args_flag_beats_environment",
        &[("OK_UID", "573382458991123")],
    ));
}
