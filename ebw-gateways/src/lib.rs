#[macro_use]
extern crate log;

pub mod email;
pub mod geocode;
pub mod notify;
pub mod sendmail;
pub mod user_communication;
