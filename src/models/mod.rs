pub mod config;
pub mod og;

pub use config::{AppConfig, TruncateConfig};
pub use og::{OgData, Platform, PreviewColors};
