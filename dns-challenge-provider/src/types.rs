//! Provider 类型与元数据

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// 支持的 DNS Provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// MyDNS.JP
    Mydnsjp,
}

impl ProviderType {
    /// 所有已知 provider
    pub const ALL: &'static [Self] = &[Self::Mydnsjp];

    /// Provider 标识
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mydnsjp => "mydnsjp",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mydnsjp" | "mydns" | "mydns.jp" => Ok(Self::Mydnsjp),
            _ => Err(ProviderError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// Provider 元数据（供上层展示与校验配置）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    pub id: ProviderType,
    pub name: String,
    pub description: String,
    /// 必填环境变量
    pub required_env: Vec<String>,
    /// 可选环境变量
    pub optional_env: Vec<String>,
}
