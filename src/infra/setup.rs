use crate::{
    adapters::{http::app_state::AppState, waitlist::sink_for},
    application::ports::{clock::Clock, reply_picker::ReplyPicker},
    infra::{clock::SystemClock, config::AppConfig, random::ThreadRngPicker},
    use_cases::{chat::ChatUseCases, waitlist::WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let picker: Arc<dyn ReplyPicker> = Arc::new(ThreadRngPicker);

    Ok(assemble_app_state(config, clock, picker))
}

/// Wires use cases from an already-loaded config.
pub fn assemble_app_state(
    config: AppConfig,
    clock: Arc<dyn Clock>,
    picker: Arc<dyn ReplyPicker>,
) -> AppState {
    if config.sink_mode.is_simulated() {
        warn!("GOOGLE_SCRIPT_URL not set, waitlist submissions will be simulated");
    }
    info!(waitlist_mode = %config.sink_mode, "Waitlist sink selected");

    let sink = sink_for(&config.sink_mode, clock.clone());
    let waitlist_use_cases = WaitlistUseCases::new(sink, clock.clone());
    let chat_use_cases = ChatUseCases::new(picker, clock)
        .with_timing(config.chat_reply_delay, config.chat_bubble_ttl);

    AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        chat_use_cases: Arc::new(chat_use_cases),
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cyberfarm=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped if the file can't be created.
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
