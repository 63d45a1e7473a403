//! Core domain types for signed API requests
//!
//! Type-safe wrappers for the values that travel on the wire next to the
//! parameter set: the request signature and the enumerated `direction`
//! parameter. Kept in a separate module so that `signature`, `params` and
//! `client` can share them without depending on each other.

use std::fmt;
use std::str::FromStr;

use crate::error::ProbeError;

/// Value of the `method` query parameter for the group listing call
pub const METHOD_GET_USER_GROUPS_V2: &str = "group.getUserGroupsV2";

/// Inclusive bounds the remote API accepts for the `count` parameter
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 100;

/// Request signature (raw MD5 digest)
///
/// Rendered on the wire as 32 lowercase hex characters. Wrapping the bytes
/// keeps signatures from being confused with arbitrary strings such as the
/// deliberately wrong `sig` some scenarios send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; 16]);

impl Signature {
    pub fn new(bytes: [u8; 16]) -> Self {
        Signature(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Lowercase hex, two digits per byte
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 32-character hex token
    pub fn from_hex(token: &str) -> Result<Self, ProbeError> {
        if token.len() != 32 {
            return Err(ProbeError::InvalidSignature(format!(
                "expected 32 hex characters, got {}",
                token.len()
            )));
        }
        let mut bytes = [0u8; 16];
        hex::decode_to_slice(token, &mut bytes)
            .map_err(|e| ProbeError::InvalidSignature(e.to_string()))?;
        Ok(Signature(bytes))
    }
}

impl From<[u8; 16]> for Signature {
    fn from(bytes: [u8; 16]) -> Self {
        Signature::new(bytes)
    }
}

impl AsRef<[u8; 16]> for Signature {
    fn as_ref(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Signature {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::from_hex(s)
    }
}

/// Paging direction relative to the `anchor` cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Around,
    Forward,
    Backward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Around => "AROUND",
            Direction::Forward => "FORWARD",
            Direction::Backward => "BACKWARD",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AROUND" => Ok(Direction::Around),
            "FORWARD" => Ok(Direction::Forward),
            "BACKWARD" => Ok(Direction::Backward),
            other => Err(ProbeError::InvalidParam(format!(
                "unknown direction: {}",
                other
            ))),
        }
    }
}
