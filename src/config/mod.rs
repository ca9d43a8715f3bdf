// src/config/mod.rs
pub mod app;

pub use app::{AppConfig, ClientConfig, ServiceConfig, DEFAULT_CONFIG_PATH, ENV_API_BASE, ENV_CONFIG_PATH};
