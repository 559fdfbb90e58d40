use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use url::Url;

/// How much the remote sink is asked to prove.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DeliveryPolicy {
    /// Fire and forget: only a failed dispatch counts as failure.
    #[default]
    Opaque,
    /// The endpoint must answer with a 2xx status.
    Confirmed,
}

/// Where waitlist submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkMode {
    /// No endpoint configured. Submissions are logged and acknowledged locally.
    Simulated,
    Remote {
        endpoint: Url,
        delivery: DeliveryPolicy,
    },
}

impl SinkMode {
    /// Builds the mode from raw settings. A missing or blank endpoint means `Simulated`.
    pub fn from_raw(endpoint: Option<&str>, delivery: Option<&str>) -> Result<Self, String> {
        let delivery = match delivery.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse::<DeliveryPolicy>().map_err(|_| {
                format!(
                    "Invalid waitlist delivery policy: {}. Must be 'opaque' or 'confirmed'",
                    raw
                )
            })?,
            None => DeliveryPolicy::default(),
        };

        let Some(raw) = endpoint.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(SinkMode::Simulated);
        };

        let endpoint =
            Url::parse(raw).map_err(|e| format!("Invalid waitlist endpoint {}: {}", raw, e))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(format!(
                "Waitlist endpoint must be http or https, got {}",
                endpoint.scheme()
            ));
        }

        Ok(SinkMode::Remote { endpoint, delivery })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SinkMode::Simulated => "simulated",
            SinkMode::Remote { .. } => "remote",
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, SinkMode::Simulated)
    }
}

impl std::fmt::Display for SinkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
