//! Sign an arbitrary parameter set from the command line
//!
//! ```text
//! oksig --secret S application_key=K method=group.getUserGroupsV2 uid=1
//! ```

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::debug;

use okprobe::config::ENV_SECRET_KEY;
use okprobe::signature::{canonical_string, sign};
use okprobe::ParamSet;

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = Command::new("oksig")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute the request signature for a set of key=value parameters")
        .arg(
            Arg::new("secret")
                .short('s')
                .long("secret")
                .value_name("SECRET")
                .help(format!("Signing secret (falls back to ${})", ENV_SECRET_KEY)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Also print the canonical string that is hashed"),
        )
        .arg(
            Arg::new("params")
                .help("Parameters as key=value")
                .num_args(0..)
                .value_parser(parse_pair)
                .index(1),
        )
        .get_matches();

    // An empty secret is valid, same as the probe config
    let secret = matches
        .get_one::<String>("secret")
        .cloned()
        .or_else(|| std::env::var(ENV_SECRET_KEY).ok())
        .unwrap_or_default();

    let params: ParamSet = matches
        .get_many::<(String, String)>("params")
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    debug!("signing {} parameter(s)", params.len());

    if matches.get_flag("verbose") {
        println!("{}", canonical_string(&params, &secret));
    }
    println!("{}", sign(&params, &secret));
    Ok(())
}
