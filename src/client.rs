//! Blocking client for `group.getUserGroupsV2`
//!
//! Each call performs exactly one signed GET against the configured
//! endpoint. There is no retry: a transport failure is returned to the
//! caller as [`crate::error::ProbeError::Http`].

use log::debug;

use crate::config::ProbeConfig;
use crate::domain::{Signature, METHOD_GET_USER_GROUPS_V2};
use crate::error::ProbeResult;
use crate::model::ApiReply;
use crate::params::ParamSet;
use crate::signature;

/// Raw outcome of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

impl ProbeResponse {
    pub fn reply(&self) -> ProbeResult<ApiReply> {
        ApiReply::from_json(&self.body)
    }

    pub fn json(&self) -> ProbeResult<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub struct GroupsClient {
    config: ProbeConfig,
    http: reqwest::blocking::Client,
}

impl GroupsClient {
    pub fn new(config: ProbeConfig) -> ProbeResult<Self> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Fresh parameter set with the three required parameters
    pub fn base_params(&self) -> ParamSet {
        ParamSet::new()
            .with("application_key", self.config.application_key.as_str())
            .with("method", METHOD_GET_USER_GROUPS_V2)
            .with("uid", self.config.uid.as_str())
    }

    pub fn sign(&self, params: &ParamSet) -> Signature {
        signature::sign(params, &self.config.secret_key)
    }

    /// Sign `params` with the configured secret and send them
    pub fn get_signed(&self, params: &ParamSet) -> ProbeResult<ProbeResponse> {
        let sig = self.sign(params);
        self.send_query(params, params.to_query_pairs(&sig))
    }

    /// Send `params` with an arbitrary `sig` token
    pub fn get_with_sig(&self, params: &ParamSet, sig: &str) -> ProbeResult<ProbeResponse> {
        self.send_query(params, params.to_query_pairs_raw(sig))
    }

    fn send_query(
        &self,
        params: &ParamSet,
        query: Vec<(String, String)>,
    ) -> ProbeResult<ProbeResponse> {
        debug!(
            "GET {} method={} params={}",
            self.config.base_url,
            params.get("method").unwrap_or("-"),
            params.len()
        );

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&query)
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!("<- status={} body_len={}", status, body.len());
        debug!("<- body: {}", body);

        Ok(ProbeResponse { status, body })
    }

    /// Convenience: signed request decoded into an [`ApiReply`]
    pub fn get_user_groups(&self, params: &ParamSet) -> ProbeResult<ApiReply> {
        self.get_signed(params)?.reply()
    }
}
