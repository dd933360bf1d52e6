//! Provider trait 定义
//!
//! - [`ChallengeProvider`]: DNS-01 挑战生命周期（present / cleanup）
//! - [`ProviderTimeout`]: 可选扩展，告诉外部轮询方需要等待多久
//! - [`ProviderErrorMapper`]: 将各家 API 的原始错误映射为 [`ProviderError`]

use std::fmt::Display;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};

/// DNS-01 挑战 Provider
///
/// 实现必须是无状态的：每次调用都是一次独立的远端请求，
/// 同一个实例可以被多个调用方并发使用。
#[async_trait]
pub trait ChallengeProvider: Send + Sync {
    /// Provider 标识（同时用作错误前缀）
    fn provider_name(&self) -> &'static str;

    /// 创建 `_acme-challenge.<domain>` TXT 记录
    ///
    /// 幂等：重复调用不会报错，也不会产生冲突记录。
    async fn present(&self, domain: &str, token: &str, key_auth: &str) -> Result<()>;

    /// 删除 `_acme-challenge.<domain>` TXT 记录
    ///
    /// 幂等：记录不存在时视为成功。
    async fn cleanup(&self, domain: &str, token: &str, key_auth: &str) -> Result<()>;

    /// 传播超时配置（如果 provider 提供）
    fn as_timeout(&self) -> Option<&dyn ProviderTimeout> {
        None
    }
}

/// 记录传播不是即时生效的 provider 实现此 trait
pub trait ProviderTimeout {
    /// 返回 `(propagation_timeout, polling_interval)`
    fn timeout(&self) -> (Duration, Duration);
}

/// 原始 API 错误
#[derive(Debug, Clone, Default)]
pub struct RawApiError {
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文，用于填充映射后的错误字段
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub record_name: Option<String>,
}

impl ErrorContext {
    pub fn for_record(record_name: &str) -> Self {
        Self {
            record_name: Some(record_name.to_string()),
        }
    }
}

/// Provider 错误映射
pub trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn network_error(&self, detail: impl Display) -> ProviderError {
        ProviderError::NetworkError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::ApiError {
            provider: self.provider_name().to_string(),
            code: raw.code,
            raw_message: raw.message,
        }
    }
}
