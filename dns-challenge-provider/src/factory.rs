//! Provider 工厂
//!
//! 按 [`ProviderType`] 创建 provider 实例，未启用对应 feature 时返回
//! [`ProviderError::UnsupportedProvider`]。

use std::sync::Arc;

use crate::env::EnvSource;
use crate::error::{ProviderError, Result};
use crate::traits::ChallengeProvider;
use crate::types::{ProviderMetadata, ProviderType};

#[cfg(feature = "mydnsjp")]
use crate::providers::MyDnsJpProvider;

/// 创建 provider，配置从 `env` 读取
pub fn create_provider(
    provider_type: ProviderType,
    env: &dyn EnvSource,
) -> Result<Arc<dyn ChallengeProvider>> {
    match provider_type {
        #[cfg(feature = "mydnsjp")]
        ProviderType::Mydnsjp => Ok(Arc::new(MyDnsJpProvider::from_env_source(env)?)),
        #[allow(unreachable_patterns)]
        _ => {
            let _ = env;
            Err(ProviderError::UnsupportedProvider(provider_type.to_string()))
        }
    }
}

/// 按名称创建 provider
pub fn create_provider_by_name(
    name: &str,
    env: &dyn EnvSource,
) -> Result<Arc<dyn ChallengeProvider>> {
    create_provider(name.parse()?, env)
}

/// 所有已启用 provider 的元数据
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    ProviderType::ALL
        .iter()
        .filter_map(|t| get_provider_metadata(*t))
        .collect()
}

/// 单个 provider 的元数据，未启用时返回 `None`
pub fn get_provider_metadata(provider_type: ProviderType) -> Option<ProviderMetadata> {
    match provider_type {
        #[cfg(feature = "mydnsjp")]
        ProviderType::Mydnsjp => Some(MyDnsJpProvider::metadata()),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}
