//! Silent reporter for probe runs
//!
//! No-output implementation for tests or when quiet operation is desired.

use super::{Reporter, ScenarioReporter};
use crate::scenarios::{ProbeSummary, Scenario, ScenarioFailure};

#[derive(Default)]
pub struct SilentScenarioReporter;

impl SilentScenarioReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentScenarioReporter {
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl ScenarioReporter for SilentScenarioReporter {
    fn report_run_start(&self, _scenario_count: usize, _base_url: &str) {}
    fn report_scenario_start(&self, _scenario: Scenario) {}
    fn report_scenario_passed(&self, _scenario: Scenario) {}
    fn report_scenario_failed(&self, _scenario: Scenario, _failure: &ScenarioFailure) {}
    fn report_summary(&self, _summary: &ProbeSummary) {}
}
