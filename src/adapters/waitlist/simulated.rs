use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    app_error::AppResult,
    application::ports::{clock::Clock, waitlist_sink::WaitlistSink},
    domain::entities::{delivery_status::DeliveryStatus, waitlist::WaitlistSubmission},
};

/// Artificial latency so local runs feel like a real round trip.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// Development sink used when no endpoint is configured. Stores nothing.
pub struct SimulatedSink {
    clock: Arc<dyn Clock>,
}

impl SimulatedSink {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl WaitlistSink for SimulatedSink {
    async fn deliver(&self, submission: &WaitlistSubmission) -> AppResult<DeliveryStatus> {
        warn!("Waitlist endpoint not configured, simulating success");
        info!(email = %submission.email, "Email submitted");

        self.clock.sleep(SIMULATED_LATENCY).await;

        Ok(DeliveryStatus::Simulated)
    }
}
