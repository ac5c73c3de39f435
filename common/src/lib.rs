pub mod env_config;
pub mod error;
pub mod flash;
pub mod http;
pub mod money;
pub mod session;
