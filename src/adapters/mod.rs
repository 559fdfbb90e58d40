pub mod http;
pub mod waitlist;
