pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod traits;

pub use error::*;
pub use traits::*;
