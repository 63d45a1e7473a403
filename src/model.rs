//! Response bodies of `group.getUserGroupsV2`
//!
//! The API answers HTTP 200 for both outcomes: a page of group records, or
//! an application error carrying `error_code`/`error_msg`. [`ApiReply`]
//! tells the two apart.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ProbeResult;

/// Membership role of the user in a group
///
/// The set is closed: an unrecognised tag fails deserialization instead of
/// being carried around as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Moderator,
    Editor,
    Analyst,
    Member,
    SuperModerator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "ADMIN",
            Role::Moderator => "MODERATOR",
            Role::Editor => "EDITOR",
            Role::Analyst => "ANALYST",
            Role::Member => "MEMBER",
            Role::SuperModerator => "SUPER_MODERATOR",
        };
        f.write_str(name)
    }
}

/// One entry of the `groups` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    #[serde(default)]
    pub block_reason: Option<String>,
    #[serde(rename = "groupId")]
    pub group_id: String,
    pub role: Role,
    pub status: String,
    #[serde(default)]
    pub unblock_date_ms: Option<i64>,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Successful reply: a page of records plus the cursor for the next page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsPage {
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
    #[serde(default)]
    pub anchor: Option<String>,
}

/// Application-level error reported in a 200 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error_code: i64,
    #[serde(default)]
    pub error_msg: String,
    #[serde(default)]
    pub error_data: Option<serde_json::Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error_code {}: {}", self.error_code, self.error_msg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    Groups(GroupsPage),
    Error(ApiError),
}

impl ApiReply {
    /// Decode a response body; any body with `error_code` is an error reply
    pub fn from_json(body: &str) -> ProbeResult<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> ProbeResult<Self> {
        if value.get("error_code").is_some() {
            Ok(ApiReply::Error(serde_json::from_value(value)?))
        } else {
            Ok(ApiReply::Groups(serde_json::from_value(value)?))
        }
    }

    pub fn groups(&self) -> Option<&[GroupRecord]> {
        match self {
            ApiReply::Groups(page) => Some(&page.groups),
            ApiReply::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiReply::Error(err) => Some(err),
            ApiReply::Groups(_) => None,
        }
    }
}
