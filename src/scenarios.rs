//! Probe scenarios for `group.getUserGroupsV2`
//!
//! Each [`Scenario`] starts from a fresh base parameter set, applies one
//! mutation, sends a single request and checks the reply against an
//! [`Expectation`]. Scenarios share no state and run one after another.
//! A mismatch is reported as a [`ScenarioFailure`]; nothing is retried.

use log::{info, warn};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::client::{GroupsClient, ProbeResponse};
use crate::domain::{Direction, MAX_COUNT, MIN_COUNT};
use crate::error::ProbeError;
use crate::model::ApiReply;
use crate::params::ParamSet;
use crate::reporters::ScenarioReporter;

/// HTTP status the API uses for successes and application errors alike
pub const EXPECTED_STATUS: u16 = 200;

/// Application error codes asserted by the scenarios
pub const ERROR_PARAM: i64 = 100;
pub const ERROR_PARAM_SIGNATURE: i64 = 104;
pub const ERROR_PARAM_USER_ID: i64 = 110;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    AllGroups,
    InvalidUid,
    MissingParams,
    IncorrectSig,
    WrongAnchor,
    RightDirection,
    WrongDirection,
    IncorrectCount,
    CorrectCount,
}

impl Scenario {
    pub const ALL: [Scenario; 9] = [
        Scenario::AllGroups,
        Scenario::InvalidUid,
        Scenario::MissingParams,
        Scenario::IncorrectSig,
        Scenario::WrongAnchor,
        Scenario::RightDirection,
        Scenario::WrongDirection,
        Scenario::IncorrectCount,
        Scenario::CorrectCount,
    ];

    /// Stable identifier used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Scenario::AllGroups => "all-groups",
            Scenario::InvalidUid => "invalid-uid",
            Scenario::MissingParams => "missing-params",
            Scenario::IncorrectSig => "incorrect-sig",
            Scenario::WrongAnchor => "wrong-anchor",
            Scenario::RightDirection => "right-direction",
            Scenario::WrongDirection => "wrong-direction",
            Scenario::IncorrectCount => "incorrect-count",
            Scenario::CorrectCount => "correct-count",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::AllGroups => "get all user groups",
            Scenario::InvalidUid => "invalid uid",
            Scenario::MissingParams => "missing required parameters",
            Scenario::IncorrectSig => "incorrect sig parameter",
            Scenario::WrongAnchor => "wrong anchor parameter",
            Scenario::RightDirection => "right direction parameter",
            Scenario::WrongDirection => "wrong direction parameter",
            Scenario::IncorrectCount => "incorrect count",
            Scenario::CorrectCount => "correct count",
        }
    }

    /// Apply this scenario's mutation to a freshly built base parameter set
    pub fn prepare(&self, mut params: ParamSet) -> PreparedRequest {
        let mut sig = SigMode::Computed;
        match self {
            Scenario::AllGroups => {}
            Scenario::InvalidUid => {
                params.insert("uid", "invalid_uid");
            }
            Scenario::MissingParams => {
                params.remove("uid");
            }
            Scenario::IncorrectSig => sig = SigMode::Fixed("incorrect_sig"),
            Scenario::WrongAnchor => params.set_anchor("some_anchor_value"),
            Scenario::RightDirection => params.set_direction(Direction::Around),
            Scenario::WrongDirection => {
                params.insert("direction", "wrong");
            }
            Scenario::IncorrectCount => params.set_count(-1),
            Scenario::CorrectCount => params.set_count(5),
        }
        PreparedRequest { params, sig }
    }

    pub fn expectation(&self) -> Expectation {
        match self {
            Scenario::AllGroups | Scenario::RightDirection => Expectation::Groups {
                non_empty: true,
                max_len: None,
            },
            Scenario::CorrectCount => Expectation::Groups {
                non_empty: false,
                max_len: Some(5),
            },
            Scenario::InvalidUid => Expectation::api_error(ERROR_PARAM_USER_ID, "PARAM_USER_ID"),
            Scenario::MissingParams => Expectation::api_error(ERROR_PARAM, "PARAM"),
            Scenario::IncorrectSig => {
                Expectation::api_error(ERROR_PARAM_SIGNATURE, "PARAM_SIGNATURE")
            }
            Scenario::WrongAnchor => {
                Expectation::api_error(ERROR_PARAM, "PARAM : Invalid paging anchor")
            }
            Scenario::WrongDirection => Expectation::api_error(
                ERROR_PARAM,
                "PARAM : Invalid parameter direction value",
            ),
            Scenario::IncorrectCount => Expectation::api_error(
                ERROR_PARAM,
                format!(
                    "PARAM : Parameter 'count' should be in range : [{}..{}].",
                    MIN_COUNT, MAX_COUNT
                ),
            ),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Scenario {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.id() == s)
            .ok_or_else(|| ProbeError::UnknownScenario(s.to_string()))
    }
}

/// Which `sig` goes on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigMode {
    /// Signature computed from the parameters and the configured secret
    Computed,
    /// A fixed token sent as-is
    Fixed(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub params: ParamSet,
    pub sig: SigMode,
}

impl PreparedRequest {
    pub fn send(&self, client: &GroupsClient) -> Result<ProbeResponse, ProbeError> {
        match self.sig {
            SigMode::Computed => client.get_signed(&self.params),
            SigMode::Fixed(token) => client.get_with_sig(&self.params, token),
        }
    }
}

/// What a scenario requires of the response (always HTTP 200)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    Groups {
        non_empty: bool,
        max_len: Option<usize>,
    },
    ApiError {
        code: i64,
        message_prefix: String,
    },
}

impl Expectation {
    pub fn api_error(code: i64, message_prefix: impl Into<String>) -> Self {
        Expectation::ApiError {
            code,
            message_prefix: message_prefix.into(),
        }
    }

    pub fn check(&self, response: &ProbeResponse) -> Result<(), ScenarioFailure> {
        if response.status != EXPECTED_STATUS {
            return Err(ScenarioFailure::Status {
                expected: EXPECTED_STATUS,
                actual: response.status,
            });
        }

        let reply = response
            .reply()
            .map_err(|e| ScenarioFailure::UndecodableBody(e.to_string()))?;

        match (self, reply) {
            (Expectation::Groups { non_empty, max_len }, ApiReply::Groups(page)) => {
                if *non_empty && page.groups.is_empty() {
                    return Err(ScenarioFailure::EmptyGroups);
                }
                match max_len {
                    Some(max) if page.groups.len() > *max => Err(ScenarioFailure::TooManyGroups {
                        max: *max,
                        actual: page.groups.len(),
                    }),
                    _ => Ok(()),
                }
            }
            (Expectation::Groups { .. }, ApiReply::Error(err)) => {
                Err(ScenarioFailure::UnexpectedError {
                    code: err.error_code,
                    message: err.error_msg,
                })
            }
            (Expectation::ApiError { .. }, ApiReply::Groups(page)) => {
                Err(ScenarioFailure::UnexpectedGroups {
                    count: page.groups.len(),
                })
            }
            (
                Expectation::ApiError {
                    code,
                    message_prefix,
                },
                ApiReply::Error(err),
            ) => {
                if err.error_code != *code {
                    Err(ScenarioFailure::ErrorCode {
                        expected: *code,
                        actual: err.error_code,
                        message: err.error_msg,
                    })
                } else if !err.error_msg.starts_with(message_prefix.as_str()) {
                    Err(ScenarioFailure::ErrorMessage {
                        expected_prefix: message_prefix.clone(),
                        actual: err.error_msg,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Why a scenario did not pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioFailure {
    #[error("expected HTTP {expected}, got {actual}")]
    Status { expected: u16, actual: u16 },
    #[error("response body could not be decoded: {0}")]
    UndecodableBody(String),
    #[error("expected groups, got error {code}: {message}")]
    UnexpectedError { code: i64, message: String },
    #[error("expected an error reply, got {count} group(s)")]
    UnexpectedGroups { count: usize },
    #[error("expected error_code {expected}, got {actual}: {message}")]
    ErrorCode {
        expected: i64,
        actual: i64,
        message: String,
    },
    #[error("expected error_msg starting with {expected_prefix:?}, got {actual:?}")]
    ErrorMessage {
        expected_prefix: String,
        actual: String,
    },
    #[error("expected a non-empty list of groups")]
    EmptyGroups,
    #[error("expected at most {max} group(s), got {actual}")]
    TooManyGroups { max: usize, actual: usize },
    #[error("request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub result: Result<(), ScenarioFailure>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeSummary {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ProbeSummary {
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Scenario, &ScenarioFailure)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.scenario, e)))
    }
}

impl fmt::Display for ProbeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Probe Results:")?;
        writeln!(f, "==============")?;
        writeln!(
            f,
            "{} of {} scenario(s) passed.",
            self.passed_count(),
            self.outcomes.len()
        )?;
        for (scenario, failure) in self.failures() {
            writeln!(f, "FAILED {}: {}", scenario, failure)?;
        }
        Ok(())
    }
}

/// Run one scenario: prepare, send once, check
pub fn run_scenario<R: ScenarioReporter + ?Sized>(
    client: &GroupsClient,
    scenario: Scenario,
    reporter: &R,
) -> ScenarioOutcome {
    reporter.report_scenario_start(scenario);

    let prepared = scenario.prepare(client.base_params());
    let result = match prepared.send(client) {
        Ok(response) => scenario.expectation().check(&response),
        Err(e) => Err(ScenarioFailure::Transport(e.to_string())),
    };

    match &result {
        Ok(()) => {
            info!("scenario {} passed", scenario);
            reporter.report_scenario_passed(scenario);
        }
        Err(failure) => {
            warn!("scenario {} failed: {}", scenario, failure);
            reporter.report_scenario_failed(scenario, failure);
        }
    }

    ScenarioOutcome { scenario, result }
}

/// Run scenarios strictly in order and collect their outcomes
pub fn run_all<R: ScenarioReporter + ?Sized>(
    client: &GroupsClient,
    scenarios: &[Scenario],
    reporter: &R,
) -> ProbeSummary {
    reporter.report_run_start(scenarios.len(), &client.config().base_url);

    let outcomes = scenarios
        .iter()
        .map(|&scenario| run_scenario(client, scenario, reporter))
        .collect();
    let summary = ProbeSummary { outcomes };

    reporter.report_summary(&summary);
    summary
}
