use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// What the service actually knows about a waitlist delivery.
///
/// `success: true` on a response only means the submission was handed off;
/// this tells the caller how far that hand-off can be trusted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DeliveryStatus {
    /// No endpoint configured; nothing left the process.
    Simulated,
    /// Request dispatched, remote outcome unknown.
    Attempted,
    /// Endpoint answered with a 2xx status.
    Confirmed,
}
