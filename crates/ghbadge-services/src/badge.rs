//! Badge payload returned by every service

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Named colors understood by the badge renderer
pub mod colors {
    pub const BLUE: &str = "blue";
    pub const RED: &str = "red";
    pub const LIGHTGRAY: &str = "lightgray";
}

const BADGE_SCHEMA_VERSION: u8 = 1;

const fn default_schema_version() -> u8 {
    BADGE_SCHEMA_VERSION
}

/// Label, message and color of a rendered badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Badge JSON schema version, always `1`
    #[serde(default = "default_schema_version")]
    #[schema(example = 1)]
    pub schema_version: u8,
    /// Left-hand text
    #[schema(example = "goto language:javascript NOT is:fork NOT is:archived counter")]
    pub label: String,
    /// Right-hand text
    #[schema(example = "1.2k")]
    pub message: String,
    /// Right-hand background color
    #[schema(example = "blue")]
    pub color: String,
    /// Set when the badge reports a failure instead of a value
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl Badge {
    pub fn new(
        label: impl Into<String>,
        message: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: BADGE_SCHEMA_VERSION,
            label: label.into(),
            message: message.into(),
            color: color.into(),
            is_error: false,
        }
    }

    /// Badge describing a failure; the message is shown to users as-is
    pub fn error(
        label: impl Into<String>,
        message: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            is_error: true,
            ..Self::new(label, message, color)
        }
    }
}
