//! MyDNS.JP 配置

use std::fmt;
use std::time::Duration;

use crate::env::{self, EnvSource, ProcessEnv};
use crate::error::{ProviderError, Result};

use super::PROVIDER_NAME;

pub const ENV_NAMESPACE: &str = "MYDNSJP_";

pub const ENV_MASTER_ID: &str = "MYDNSJP_MASTER_ID";
pub const ENV_PASSWORD: &str = "MYDNSJP_PASSWORD";

pub const ENV_HTTP_TIMEOUT: &str = "MYDNSJP_HTTP_TIMEOUT";
pub const ENV_PROPAGATION_TIMEOUT: &str = "MYDNSJP_PROPAGATION_TIMEOUT";
pub const ENV_POLLING_INTERVAL: &str = "MYDNSJP_POLLING_INTERVAL";
pub const ENV_DNS_RESOLVERS: &str = "MYDNSJP_DNS_RESOLVERS";

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_PROPAGATION_TIMEOUT: Duration = Duration::from_secs(2 * 60);
pub const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_secs(2);

/// 必填 key，顺序即错误消息中的顺序
pub(crate) const REQUIRED_ENV: &[&str] = &[ENV_MASTER_ID, ENV_PASSWORD];
pub(crate) const OPTIONAL_ENV: &[&str] = &[
    ENV_HTTP_TIMEOUT,
    ENV_PROPAGATION_TIMEOUT,
    ENV_POLLING_INTERVAL,
    ENV_DNS_RESOLVERS,
];

/// MyDNS.JP Provider 配置
///
/// 交给 Provider 后不再修改。直接构造时不做校验，
/// 校验推迟到 [`MyDnsJpProvider::from_config`](super::MyDnsJpProvider::from_config)。
#[derive(Clone)]
pub struct Config {
    /// 账号 Master ID
    pub master_id: String,
    /// 账号密码
    pub password: String,
    /// 单次请求超时，为零时不限制
    pub http_timeout: Duration,
    pub propagation_timeout: Duration,
    pub polling_interval: Duration,
    /// 传播检查使用的 DNS 服务器，为空时由调用方决定
    pub dns_resolvers: Vec<String>,
}

impl Config {
    /// 从进程环境变量读取
    pub fn from_env() -> Result<Self> {
        Self::from_env_source(&ProcessEnv)
    }

    /// 从指定来源读取
    ///
    /// 必填 key 缺失时返回 [`ProviderError::MissingCredentials`]，列出所有缺失的 key。
    pub fn from_env_source(env: &dyn EnvSource) -> Result<Self> {
        let mut values =
            env::get_required(env, REQUIRED_ENV).map_err(|keys| {
                ProviderError::MissingCredentials {
                    provider: PROVIDER_NAME.to_string(),
                    keys,
                }
            })?;

        Ok(Self {
            master_id: values.remove(ENV_MASTER_ID).unwrap_or_default(),
            password: values.remove(ENV_PASSWORD).unwrap_or_default(),
            http_timeout: env::get_or_default_secs(env, ENV_HTTP_TIMEOUT, DEFAULT_HTTP_TIMEOUT),
            propagation_timeout: env::get_or_default_secs(
                env,
                ENV_PROPAGATION_TIMEOUT,
                DEFAULT_PROPAGATION_TIMEOUT,
            ),
            polling_interval: env::get_or_default_secs(
                env,
                ENV_POLLING_INTERVAL,
                DEFAULT_POLLING_INTERVAL,
            ),
            dns_resolvers: env::get_list(env, ENV_DNS_RESOLVERS),
        })
    }

    /// 两个凭证字段都非空
    pub fn has_credentials(&self) -> bool {
        !self.master_id.is_empty() && !self.password.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_id: String::new(),
            password: String::new(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            propagation_timeout: DEFAULT_PROPAGATION_TIMEOUT,
            polling_interval: DEFAULT_POLLING_INTERVAL,
            dns_resolvers: Vec::new(),
        }
    }
}

// 密码不进日志
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("master_id", &self.master_id)
            .field("password", &"***")
            .field("http_timeout", &self.http_timeout)
            .field("propagation_timeout", &self.propagation_timeout)
            .field("polling_interval", &self.polling_interval)
            .field("dns_resolvers", &self.dns_resolvers)
            .finish()
    }
}
