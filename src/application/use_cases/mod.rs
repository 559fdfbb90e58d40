pub mod chat;
pub mod waitlist;
