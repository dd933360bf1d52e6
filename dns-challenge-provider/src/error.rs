//! Provider 错误类型
//!
//! 所有错误都携带 provider 名称作为前缀，便于多 provider 部署时区分来源。

use thiserror::Error;

/// Provider 统一错误
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 必填凭证缺失
    ///
    /// `keys` 为空时只提示凭证不完整（直接构造 Config 的路径）；
    /// 从环境变量读取时会列出所有缺失的 key。
    #[error("{provider}: some credentials information are missing{}", format_missing_keys(.keys))]
    MissingCredentials { provider: String, keys: Vec<String> },

    /// 传入的配置为空
    #[error("{provider}: the configuration of the DNS provider is nil")]
    NilConfig { provider: String },

    /// 网络错误（连接失败、超时、读取响应失败）
    #[error("{provider}: error querying API: {detail}")]
    NetworkError { provider: String, detail: String },

    /// 凭证被远端拒绝
    #[error("{provider}: invalid credentials{}", format_raw(.raw_message.as_deref()))]
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// 记录已存在
    #[error("{provider}: record already exists: {record_name}{}", format_raw(.raw_message.as_deref()))]
    RecordExists {
        provider: String,
        record_name: String,
        raw_message: Option<String>,
    },

    /// 记录不存在
    #[error("{provider}: record not found: {record_name}{}", format_raw(.raw_message.as_deref()))]
    RecordNotFound {
        provider: String,
        record_name: String,
        raw_message: Option<String>,
    },

    /// 远端返回的其他错误
    #[error("{provider}: request failed [status code {}]: {raw_message}", format_code(.code.as_deref()))]
    ApiError {
        provider: String,
        code: Option<String>,
        raw_message: String,
    },

    /// 未知或未启用的 provider
    #[error("unsupported DNS provider: {0}")]
    UnsupportedProvider(String),
}

impl ProviderError {
    /// 错误所属的 provider 名称
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::MissingCredentials { provider, .. }
            | Self::NilConfig { provider }
            | Self::NetworkError { provider, .. }
            | Self::InvalidCredentials { provider, .. }
            | Self::RecordExists { provider, .. }
            | Self::RecordNotFound { provider, .. }
            | Self::ApiError { provider, .. } => Some(provider),
            Self::UnsupportedProvider(_) => None,
        }
    }
}

fn format_missing_keys(keys: &[String]) -> String {
    if keys.is_empty() {
        String::new()
    } else {
        format!(": {}", keys.join(","))
    }
}

fn format_code(code: Option<&str>) -> &str {
    code.unwrap_or("unknown")
}

fn format_raw(raw: Option<&str>) -> String {
    raw.filter(|m| !m.is_empty())
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

/// Provider 结果类型
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_message() {
        let err = ProviderError::MissingCredentials {
            provider: "mydnsjp".to_string(),
            keys: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "mydnsjp: some credentials information are missing: A,B"
        );

        let err = ProviderError::MissingCredentials {
            provider: "mydnsjp".to_string(),
            keys: vec![],
        };
        assert_eq!(
            err.to_string(),
            "mydnsjp: some credentials information are missing"
        );
    }

    #[test]
    fn test_api_error_message() {
        let err = ProviderError::ApiError {
            provider: "mydnsjp".to_string(),
            code: Some("500".to_string()),
            raw_message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "mydnsjp: request failed [status code 500]: boom");
        assert_eq!(err.provider(), Some("mydnsjp"));
    }

    #[test]
    fn test_raw_message_suffix() {
        let err = ProviderError::InvalidCredentials {
            provider: "mydnsjp".to_string(),
            raw_message: Some("401".to_string()),
        };
        assert_eq!(err.to_string(), "mydnsjp: invalid credentials (401)");

        let err = ProviderError::RecordExists {
            provider: "mydnsjp".to_string(),
            record_name: "_acme-challenge.example.com.".to_string(),
            raw_message: Some(String::new()),
        };
        assert_eq!(
            err.to_string(),
            "mydnsjp: record already exists: _acme-challenge.example.com."
        );

        let err = ProviderError::ApiError {
            provider: "mydnsjp".to_string(),
            code: None,
            raw_message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "mydnsjp: request failed [status code unknown]: boom"
        );
    }

    #[test]
    fn test_unsupported_provider_has_no_provider_name() {
        let err = ProviderError::UnsupportedProvider("nope".to_string());
        assert_eq!(err.provider(), None);
        assert_eq!(err.to_string(), "unsupported DNS provider: nope");
    }
}
