//! DNS-01 挑战记录计算

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// 挑战记录前缀
pub const ACME_CHALLENGE_LABEL: &str = "_acme-challenge";

/// 挑战记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeInfo {
    /// 记录全名，例如 `_acme-challenge.example.com.`
    pub fqdn: String,
    /// TXT 记录值，`base64url(sha256(key_auth))`，无 padding
    pub value: String,
}

/// 根据域名和 key authorization 计算挑战记录
pub fn get_challenge_info(domain: &str, key_auth: &str) -> ChallengeInfo {
    let digest = Sha256::digest(key_auth.as_bytes());

    ChallengeInfo {
        fqdn: format!("{ACME_CHALLENGE_LABEL}.{}", to_fqdn(domain)),
        value: URL_SAFE_NO_PAD.encode(digest),
    }
}

/// 补全末尾的点
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// 去掉末尾的点
pub fn un_fqdn(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
