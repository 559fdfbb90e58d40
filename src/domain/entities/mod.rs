pub mod chat_message;
pub mod delivery_status;
pub mod sink_mode;
pub mod waitlist;
