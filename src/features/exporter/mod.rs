mod publisher;

pub use publisher::Exporter;
