pub mod clock;
pub mod reply_picker;
pub mod waitlist_sink;
