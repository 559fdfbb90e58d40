use std::{net::SocketAddr, time::Duration};

use axum::http::HeaderValue;
use env_helpers::get_env_default;

use crate::domain::entities::sink_mode::SinkMode;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Waitlist destination. Unset `GOOGLE_SCRIPT_URL` runs the simulated sink.
    pub sink_mode: SinkMode,
    pub chat_reply_delay: Duration,
    pub chat_bubble_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:5173"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let sink_mode = SinkMode::from_raw(
            std::env::var("GOOGLE_SCRIPT_URL").ok().as_deref(),
            std::env::var("WAITLIST_DELIVERY").ok().as_deref(),
        )
        .unwrap_or_else(|e| panic!("Invalid waitlist configuration: {e}"));

        let chat_reply_delay_ms: u64 = get_env_default("CHAT_REPLY_DELAY_MS", 500);
        let chat_bubble_ttl_ms: u64 = get_env_default("CHAT_BUBBLE_TTL_MS", 3000);

        Self {
            bind_addr,
            cors_origin,
            sink_mode,
            chat_reply_delay: Duration::from_millis(chat_reply_delay_ms),
            chat_bubble_ttl: Duration::from_millis(chat_bubble_ttl_ms),
        }
    }
}
