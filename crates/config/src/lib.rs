//! catalog-config - 配置加载库
//!
//! 配置来源按优先级从低到高合并：
//! `default.toml` < `{APP_ENV}.toml` < `APP_` 前缀环境变量（嵌套字段用 `__` 分隔，
//! 例如 `APP_DATABASE__URL`）

use std::net::SocketAddr;
use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

const ENV_VAR: &str = "APP_ENV";
const DEFAULT_ENV: &str = "development";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid server address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

// 生产环境默认更大的连接池
fn default_max_connections() -> u32 {
    if current_env() == "production" { 50 } else { 10 }
}

fn default_min_connections() -> u32 {
    1
}

/// HTTP 监听配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 解析监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|source| ConfigError::InvalidAddress { addr, source })
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// 按当前 `APP_ENV` 加载配置
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::figment(config_dir.as_ref(), &current_env()).extract()?;
        Ok(config)
    }

    /// 构建合并后的配置源，`app_env` 由参数注入
    pub fn figment(config_dir: &Path, app_env: &str) -> Figment {
        Figment::from(Serialized::default("app_env", app_env))
            .merge(Toml::file(config_dir.join("default.toml")))
            .merge(Toml::file(config_dir.join(format!("{}.toml", app_env))))
            .merge(Env::prefixed("APP_").split("__").ignore(&["env"]))
    }
}

fn current_env() -> String {
    std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV.to_string())
}

#[cfg(test)]
mod tests;
