pub mod args;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod model;
pub mod params;
pub mod reporters;
pub mod scenarios;
pub mod signature;

pub use args::parse_args;
pub use client::{GroupsClient, ProbeResponse};
pub use config::ProbeConfig;
pub use domain::{Direction, Signature};
pub use error::{ProbeError, ProbeResult};
pub use model::{ApiError, ApiReply, GroupRecord, GroupsPage, Role};
pub use params::ParamSet;
pub use signature::sign;
