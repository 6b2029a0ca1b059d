//! HTTP configuration

pub mod defaults;
pub mod http_config;

pub use defaults::HttpDefaults;
pub use http_config::*;
