use crate::config::config::AppConfig;
use crate::error::Result;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "HABITSIM_";

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "HABITSIM_CONFIG";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 优先级（后者覆盖前者）：
    /// 1. 内置默认值
    /// 2. `HABITSIM_CONFIG` 指定的文件，默认 ./habitsim.toml
    /// 3. `HABITSIM_` 前缀的环境变量，嵌套字段用 `__` 分隔
    pub fn load() -> Result<AppConfig> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());
        Self::load_from(&path)
    }

    /// 从指定路径加载配置
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        let config: AppConfig = Self::figment(path).extract()?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG"]).split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> std::result::Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.server.request_timeout == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if config.logging.level.trim().is_empty() {
            return Err(ConfigValidationError::MissingLogLevel);
        }

        if let Some(dir) = &config.logging.log_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigValidationError::InvalidPath("logging.log_dir".to_string()));
            }
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("请求超时无效，必须大于 0 秒")]
    InvalidTimeout,

    #[error("日志级别未配置")]
    MissingLogLevel,

    #[error("配置路径无效: {0}")]
    InvalidPath(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("habitsim.toml")
}
