//! Builder for `AppState` backed by test doubles.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    application::ports::{reply_picker::ReplyPicker, waitlist_sink::WaitlistSink},
    domain::entities::sink_mode::SinkMode,
    infra::{config::AppConfig, random::ThreadRngPicker, setup::assemble_app_state},
    use_cases::waitlist::WaitlistUseCases,
};

use super::ManualClock;

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origin: HeaderValue::from_static("http://localhost:5173"),
        sink_mode: SinkMode::Simulated,
        chat_reply_delay: Duration::from_millis(500),
        chat_bubble_ttl: Duration::from_millis(3000),
    }
}

/// Builds an `AppState` on a [`ManualClock`]. Without a sink override the
/// configured `SinkMode` decides, which defaults to `Simulated`.
pub struct TestAppStateBuilder {
    config: AppConfig,
    sink: Option<Arc<dyn WaitlistSink>>,
    picker: Arc<dyn ReplyPicker>,
    clock: Arc<ManualClock>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            config: test_config(),
            sink: None,
            picker: Arc::new(ThreadRngPicker),
            clock: Arc::new(ManualClock::new()),
        }
    }

    pub fn with_config(mut self, f: impl FnOnce(&mut AppConfig)) -> Self {
        f(&mut self.config);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn WaitlistSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_picker(mut self, picker: Arc<dyn ReplyPicker>) -> Self {
        self.picker = picker;
        self
    }

    /// Returns the state and the clock driving it.
    pub fn build(self) -> (AppState, Arc<ManualClock>) {
        let clock = self.clock;
        let mut app_state = assemble_app_state(self.config, clock.clone(), self.picker);

        if let Some(sink) = self.sink {
            app_state.waitlist_use_cases = Arc::new(WaitlistUseCases::new(sink, clock.clone()));
        }

        (app_state, clock)
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
