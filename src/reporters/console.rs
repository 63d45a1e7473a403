//! Console reporter for probe runs

use super::{Reporter, ScenarioReporter};
use crate::scenarios::{ProbeSummary, Scenario, ScenarioFailure};

#[derive(Default)]
pub struct ConsoleScenarioReporter;

impl ConsoleScenarioReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleScenarioReporter {
    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl ScenarioReporter for ConsoleScenarioReporter {
    fn report_run_start(&self, scenario_count: usize, base_url: &str) {
        println!("Running {} scenario(s) against {}", scenario_count, base_url);
    }

    fn report_scenario_start(&self, scenario: Scenario) {
        println!("Scenario: \"{}\" ({})", scenario.description(), scenario);
    }

    fn report_scenario_passed(&self, scenario: Scenario) {
        println!("  {} - ok.", scenario);
    }

    fn report_scenario_failed(&self, scenario: Scenario, failure: &ScenarioFailure) {
        println!("  {} - FAILED: {}", scenario, failure);
    }

    fn report_summary(&self, summary: &ProbeSummary) {
        println!();
        print!("{}", summary);
        if summary.all_passed() {
            self.report_complete("All scenarios passed.");
        }
    }
}
