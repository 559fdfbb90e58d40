use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::waitlist_sink::WaitlistSink,
    domain::entities::{
        delivery_status::DeliveryStatus, sink_mode::DeliveryPolicy, waitlist::WaitlistSubmission,
    },
};

/// Posts submissions as JSON to a spreadsheet-backed form-intake script.
#[derive(Clone)]
pub struct AppsScriptSink {
    client: Client,
    endpoint: Url,
    delivery: DeliveryPolicy,
}

impl AppsScriptSink {
    pub fn new(client: Client, endpoint: Url, delivery: DeliveryPolicy) -> Self {
        Self {
            client,
            endpoint,
            delivery,
        }
    }
}

#[async_trait]
impl WaitlistSink for AppsScriptSink {
    #[instrument(skip_all, fields(delivery = %self.delivery))]
    async fn deliver(&self, submission: &WaitlistSubmission) -> AppResult<DeliveryStatus> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("Failed to reach waitlist endpoint: {e}")))?;

        match self.delivery {
            // The response is deliberately left unread.
            DeliveryPolicy::Opaque => Ok(DeliveryStatus::Attempted),
            DeliveryPolicy::Confirmed => {
                let status = response.status();
                response
                    .error_for_status()
                    .map_err(|e| AppError::Delivery(format!("Waitlist endpoint error: {e}")))?;
                debug!(%status, "Waitlist endpoint accepted submission");
                Ok(DeliveryStatus::Confirmed)
            }
        }
    }
}
