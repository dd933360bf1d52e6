//! DNS-01 Challenge Provider Library
//!
//! 通过第三方 DNS 服务商的 API 创建 / 删除 `_acme-challenge.<domain>` TXT 记录，
//! 供 ACME 客户端完成域名所有权验证。
//!
//! - 配置从环境变量（或任意 [`EnvSource`]）读取，也可以直接构造
//! - `present` / `cleanup` 均为幂等操作
//! - 传播等待、重试由调用方负责，provider 只暴露 [`ProviderTimeout`]
//!
//! ```ignore
//! use dns_challenge_provider::{ChallengeProvider, MyDnsJpProvider};
//!
//! let provider = MyDnsJpProvider::new()?;
//! provider.present("example.com", token, key_auth).await?;
//! // ... 等待传播并完成验证 ...
//! provider.cleanup("example.com", token, key_auth).await?;
//! ```

pub mod dns01;
pub mod env;
mod error;
mod factory;
pub mod http_client;
pub mod providers;
mod traits;
mod types;

#[cfg(test)]
mod test_utils;

// Re-export 常用类型
pub use env::{EnvSource, ProcessEnv};
pub use error::{ProviderError, Result};
pub use factory::{
    create_provider, create_provider_by_name, get_all_provider_metadata, get_provider_metadata,
};
pub use traits::{
    ChallengeProvider, ErrorContext, ProviderErrorMapper, ProviderTimeout, RawApiError,
};
pub use types::{ProviderMetadata, ProviderType};

#[cfg(feature = "mydnsjp")]
pub use providers::mydnsjp::{Config as MyDnsJpConfig, MyDnsJpProvider};
