use clap::{Arg, ArgAction, Command};

use crate::config::{ENV_APPLICATION_KEY, ENV_BASE_URL, ENV_SECRET_KEY, ENV_UID};
use crate::scenarios::Scenario;

/// Command definition for the `okprobe` binary
pub fn probe_command() -> Command {
    Command::new("okprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Probe group.getUserGroupsV2 with signed requests and check the replies")
        .arg(
            Arg::new("base_url")
                .long("base-url")
                .value_name("URL")
                .help(format!("API endpoint (falls back to ${})", ENV_BASE_URL)),
        )
        .arg(
            Arg::new("application_key")
                .short('k')
                .long("application-key")
                .value_name("KEY")
                .help(format!("Application key (falls back to ${})", ENV_APPLICATION_KEY)),
        )
        .arg(
            Arg::new("secret")
                .short('s')
                .long("secret")
                .value_name("SECRET")
                .help(format!("Signing secret (falls back to ${})", ENV_SECRET_KEY)),
        )
        .arg(
            Arg::new("uid")
                .short('u')
                .long("uid")
                .value_name("UID")
                .help(format!("User id whose groups are listed (falls back to ${})", ENV_UID)),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECS")
                .help("Request timeout in seconds (default: 30)"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .value_name("ID")
                .action(ArgAction::Append)
                .value_parser(|id: &str| {
                    id.parse::<Scenario>()
                        .map(|scenario| scenario.id().to_string())
                        .map_err(|e| e.to_string())
                })
                .help("Scenario to run (repeatable, default: all)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only report the final summary"),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    probe_command().get_matches()
}

/// Scenarios selected on the command line, in the order given
pub fn selected_scenarios(matches: &clap::ArgMatches) -> Vec<Scenario> {
    match matches.get_many::<String>("scenario") {
        Some(ids) => ids.filter_map(|id| id.parse().ok()).collect(),
        None => Scenario::ALL.to_vec(),
    }
}
