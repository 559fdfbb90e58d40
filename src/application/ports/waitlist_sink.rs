use async_trait::async_trait;

use crate::{
    app_error::AppResult,
    domain::entities::{delivery_status::DeliveryStatus, waitlist::WaitlistSubmission},
};

/// Destination for waitlist submissions.
///
/// Implementations report how much they know about the outcome rather than a
/// bare success flag. Transport failures come back as `AppError::Delivery`.
#[async_trait]
pub trait WaitlistSink: Send + Sync {
    async fn deliver(&self, submission: &WaitlistSubmission) -> AppResult<DeliveryStatus>;
}
