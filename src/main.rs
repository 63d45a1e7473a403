//! okprobe - run the group.getUserGroupsV2 probe scenarios
//!
//! Every selected scenario sends one signed request to the live API and
//! checks the reply. Exits non-zero when any scenario fails, and with
//! status 2 when the config or HTTP client cannot be set up.

use std::process;

use anyhow::{bail, Result};

use okprobe::args::selected_scenarios;
use okprobe::reporters::{
    ConsoleScenarioReporter, Reporter, ScenarioReporter, SilentScenarioReporter,
};
use okprobe::scenarios::run_all;
use okprobe::{GroupsClient, ProbeConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = okprobe::parse_args();
    let quiet = matches.get_flag("quiet");
    let reporter: Box<dyn ScenarioReporter> = if quiet {
        Box::new(SilentScenarioReporter::new())
    } else {
        Box::new(ConsoleScenarioReporter::new())
    };
    // Setup errors are always shown, even in quiet mode
    let console = ConsoleScenarioReporter::new();

    let client = match ProbeConfig::from_args(&matches).and_then(GroupsClient::new) {
        Ok(client) => client,
        Err(e) => {
            console.report_error(&e.to_string());
            process::exit(2);
        }
    };

    let scenarios = selected_scenarios(&matches);
    let summary = run_all(&client, &scenarios, reporter.as_ref());
    if quiet {
        print!("{}", summary);
    }

    if !summary.all_passed() {
        bail!(
            "{} of {} scenario(s) failed",
            summary.failed_count(),
            summary.outcomes.len()
        );
    }
    Ok(())
}
