use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::delivery_status::DeliveryStatus;

/// Payload handed to a waitlist sink. Built per submission and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSubmission {
    pub email: String,
    /// ISO 8601 UTC with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`.
    pub timestamp: String,
}

impl WaitlistSubmission {
    pub fn new(email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Outcome reported to whoever asked for the submission.
///
/// Exactly one of `message` / `error` is set, depending on `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryStatus>,
}

impl WaitlistResponse {
    pub fn ok(message: impl Into<String>, delivery: DeliveryStatus) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
            delivery: Some(delivery),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            delivery: None,
        }
    }
}
