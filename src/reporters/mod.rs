//! Progress and output reporting for probe runs
//!
//! Decouples the scenario runner from output formatting so the same run
//! can print to the console or stay quiet under test.

mod console;
mod silent;

pub use console::ConsoleScenarioReporter;
pub use silent::SilentScenarioReporter;

use crate::scenarios::{ProbeSummary, Scenario, ScenarioFailure};

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report an error that occurred outside any single scenario
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting scenario progress and results
pub trait ScenarioReporter: Reporter {
    /// Report the start of a run against `base_url`
    fn report_run_start(&self, scenario_count: usize, base_url: &str);

    fn report_scenario_start(&self, scenario: Scenario);

    fn report_scenario_passed(&self, scenario: Scenario);

    fn report_scenario_failed(&self, scenario: Scenario, failure: &ScenarioFailure);

    /// Report final results summary
    fn report_summary(&self, summary: &ProbeSummary);
}
