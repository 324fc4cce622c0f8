pub mod models;
pub mod collector;

pub use models::{parse_who_output, SessionSnapshot};
pub use collector::{local_hostname, ActiveUsersCollector, WhoCommand};
