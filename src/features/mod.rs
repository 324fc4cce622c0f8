pub mod exporter;
pub mod sessions;
