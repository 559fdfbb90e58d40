pub mod apps_script;
pub mod simulated;

use std::sync::Arc;

use crate::{
    application::ports::{clock::Clock, waitlist_sink::WaitlistSink},
    domain::entities::sink_mode::SinkMode,
    infra::http_client,
};

use self::{apps_script::AppsScriptSink, simulated::SimulatedSink};

/// Picks the sink implementation for the configured mode.
pub fn sink_for(mode: &SinkMode, clock: Arc<dyn Clock>) -> Arc<dyn WaitlistSink> {
    match mode {
        SinkMode::Simulated => Arc::new(SimulatedSink::new(clock)),
        SinkMode::Remote { endpoint, delivery } => Arc::new(AppsScriptSink::new(
            http_client::build_client(),
            endpoint.clone(),
            *delivery,
        )),
    }
}
