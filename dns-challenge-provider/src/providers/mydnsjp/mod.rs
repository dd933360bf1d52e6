//! MyDNS.JP DNS Provider
//!
//! 通过 `directedit.html` 接口（Basic 认证 + 表单）注册和删除 DNS-01 TXT 记录。
//! 参考: <https://www.mydns.jp/>

mod config;
mod error;
mod http;
mod provider;


pub use config::{
    Config, DEFAULT_HTTP_TIMEOUT, DEFAULT_POLLING_INTERVAL, DEFAULT_PROPAGATION_TIMEOUT,
    ENV_DNS_RESOLVERS, ENV_HTTP_TIMEOUT, ENV_MASTER_ID, ENV_NAMESPACE, ENV_PASSWORD,
    ENV_POLLING_INTERVAL, ENV_PROPAGATION_TIMEOUT,
};

use crate::env::{EnvSource, ProcessEnv};
use crate::error::{ProviderError, Result};
use crate::types::{ProviderMetadata, ProviderType};

use config::{OPTIONAL_ENV, REQUIRED_ENV};
use http::MyDnsJpClient;

pub(crate) const PROVIDER_NAME: &str = "mydnsjp";
pub(crate) const MYDNSJP_API_URL: &str = "https://www.mydns.jp/directedit.html";

/// MyDNS.JP Provider
///
/// 构造后只持有不可变配置和 HTTP 客户端，可通过 `Arc` 在多个任务间共享。
pub struct MyDnsJpProvider {
    pub(crate) config: Config,
    pub(crate) client: MyDnsJpClient,
}

impl MyDnsJpProvider {
    /// 从进程环境变量构造
    pub fn new() -> Result<Self> {
        Self::from_env_source(&ProcessEnv)
    }

    /// 从指定来源读取配置并构造
    pub fn from_env_source(env: &dyn EnvSource) -> Result<Self> {
        Self::from_config(Config::from_env_source(env)?)
    }

    /// 使用已构造好的配置
    ///
    /// 传入 `None` 返回 [`ProviderError::NilConfig`]；
    /// 凭证不完整返回 [`ProviderError::MissingCredentials`]（不列出具体字段）。
    pub fn from_config(config: impl Into<Option<Config>>) -> Result<Self> {
        let Some(config) = config.into() else {
            return Err(ProviderError::NilConfig {
                provider: PROVIDER_NAME.to_string(),
            });
        };

        if !config.has_credentials() {
            return Err(ProviderError::MissingCredentials {
                provider: PROVIDER_NAME.to_string(),
                keys: Vec::new(),
            });
        }

        let client = MyDnsJpClient::new(
            MYDNSJP_API_URL,
            &config.master_id,
            &config.password,
            config.http_timeout,
        )?;

        log::debug!("[{PROVIDER_NAME}] provider 已创建: {config:?}");

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Mydnsjp,
            name: "MyDNS.JP".to_string(),
            description: "MyDNS.JP DirectEdit API".to_string(),
            required_env: REQUIRED_ENV.iter().map(ToString::to_string).collect(),
            optional_env: OPTIONAL_ENV.iter().map(ToString::to_string).collect(),
        }
    }
}
