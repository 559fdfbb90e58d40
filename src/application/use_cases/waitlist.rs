use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::{
        dictionaries::t,
        language::UserLanguage,
        ports::{clock::Clock, waitlist_sink::WaitlistSink},
        validators::is_valid_email,
    },
    domain::entities::{
        delivery_status::DeliveryStatus,
        waitlist::{WaitlistResponse, WaitlistSubmission},
    },
};

#[derive(Clone)]
pub struct WaitlistUseCases {
    sink: Arc<dyn WaitlistSink>,
    clock: Arc<dyn Clock>,
}

impl WaitlistUseCases {
    pub fn new(sink: Arc<dyn WaitlistSink>, clock: Arc<dyn Clock>) -> Self {
        Self { sink, clock }
    }

    /// Validates and delivers `email`, folding every failure into the response.
    ///
    /// Never returns an error: callers render `message` or `error` as-is.
    #[instrument(skip(self))]
    pub async fn submit(&self, email: &str, lang: UserLanguage) -> WaitlistResponse {
        match self.try_submit(email).await {
            Ok(delivery) => submitted_response(lang, delivery),
            Err(err) => failure_response(&err, lang),
        }
    }

    /// Same as [`submit`](Self::submit) but keeps the error kind, for callers
    /// that need to tell a bad address from a failed delivery.
    #[instrument(skip(self))]
    pub async fn try_submit(&self, email: &str) -> AppResult<DeliveryStatus> {
        if !is_valid_email(email) {
            debug!("Rejected malformed waitlist email");
            return Err(AppError::InvalidEmail);
        }

        let submission = WaitlistSubmission::new(email, self.clock.now());

        match self.sink.deliver(&submission).await {
            Ok(delivery) => {
                info!(%delivery, "Waitlist submission handed off");
                Ok(delivery)
            }
            Err(err) => {
                error!(error = ?err, "Waitlist submission failed");
                Err(err)
            }
        }
    }
}

pub fn submitted_response(lang: UserLanguage, delivery: DeliveryStatus) -> WaitlistResponse {
    WaitlistResponse::ok(t(lang, "waitlist.submitted"), delivery)
}

pub fn failure_response(err: &AppError, lang: UserLanguage) -> WaitlistResponse {
    match err {
        AppError::InvalidEmail => WaitlistResponse::failed(t(lang, "waitlist.invalidEmail")),
        _ => WaitlistResponse::failed(t(lang, "waitlist.failed")),
    }
}
