//! 环境变量读取
//!
//! 通过 [`EnvSource`] 抽象读取来源，生产环境使用 [`ProcessEnv`]，
//! 测试使用 `HashMap<String, String>` 替身，不修改真实进程环境。
//! 配置只在构造时读取一次，之后不再监听变化。

use std::collections::HashMap;
use std::time::Duration;

/// 键值来源
pub trait EnvSource: Send + Sync {
    /// 读取一个 key，不存在时返回 `None`
    fn get(&self, key: &str) -> Option<String>;
}

/// 真实进程环境
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// 读取所有必填 key
///
/// 空字符串视为缺失。若 `KEY` 为空，则尝试读取 `KEY_FILE` 指向的文件内容。
/// 失败时按声明顺序返回所有缺失的 key。
pub fn get_required(
    env: &dyn EnvSource,
    keys: &[&str],
) -> Result<HashMap<String, String>, Vec<String>> {
    let mut values = HashMap::with_capacity(keys.len());
    let mut missing = Vec::new();

    for key in keys {
        match get_or_file(env, key) {
            Some(value) => {
                values.insert((*key).to_string(), value);
            }
            None => missing.push((*key).to_string()),
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(missing)
    }
}

/// 读取 key，为空时回退到 `KEY_FILE`
pub fn get_or_file(env: &dyn EnvSource, key: &str) -> Option<String> {
    if let Some(value) = env.get(key).filter(|v| !v.is_empty()) {
        return Some(value);
    }

    let file_key = format!("{key}_FILE");
    let path = env.get(&file_key).filter(|p| !p.is_empty())?;

    match std::fs::read_to_string(&path) {
        Ok(content) => Some(content.trim().to_string()).filter(|v| !v.is_empty()),
        Err(e) => {
            log::warn!("无法读取 {file_key} ({path}): {e}");
            None
        }
    }
}

/// 读取以秒为单位的时长，缺失或无法解析时使用默认值
pub fn get_or_default_secs(env: &dyn EnvSource, key: &str, default: Duration) -> Duration {
    let Some(raw) = env.get(key).filter(|v| !v.trim().is_empty()) else {
        return default;
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(e) => {
            log::warn!("{key}={raw} 不是有效的秒数 ({e})，使用默认值 {default:?}");
            default
        }
    }
}

/// 读取逗号分隔的列表，忽略空项
pub fn get_list(env: &dyn EnvSource, key: &str) -> Vec<String> {
    env.get(key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_get_required_reports_missing_in_order() {
        let env = env_of(&[("B", ""), ("C", "c")]);
        let missing = get_required(&env, &["A", "B", "C"]).unwrap_err();
        assert_eq!(missing, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_get_required_success() {
        let env = env_of(&[("A", "a"), ("B", "b")]);
        let values = get_required(&env, &["A", "B"]).unwrap();
        assert_eq!(values["A"], "a");
        assert_eq!(values["B"], "b");
    }

    #[test]
    fn test_get_or_file_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "dns-challenge-provider-env-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "secret-from-file\n").unwrap();

        let env = env_of(&[("PASSWORD", ""), ("PASSWORD_FILE", path.to_str().unwrap())]);
        assert_eq!(
            get_or_file(&env, "PASSWORD").as_deref(),
            Some("secret-from-file")
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_get_or_file_unreadable_file_is_missing() {
        let env = env_of(&[("PASSWORD_FILE", "/definitely/not/here")]);
        assert_eq!(get_or_file(&env, "PASSWORD"), None);
    }

    #[test]
    fn test_get_or_default_secs() {
        let env = env_of(&[("T1", "45"), ("T2", "abc"), ("T3", " ")]);
        let default = Duration::from_secs(7);
        assert_eq!(get_or_default_secs(&env, "T1", default), Duration::from_secs(45));
        assert_eq!(get_or_default_secs(&env, "T2", default), default);
        assert_eq!(get_or_default_secs(&env, "T3", default), default);
        assert_eq!(get_or_default_secs(&env, "T4", default), default);
    }

    #[test]
    fn test_get_list() {
        let env = env_of(&[("L", "1.1.1.1:53, 8.8.8.8:53,,")]);
        assert_eq!(get_list(&env, "L"), vec!["1.1.1.1:53", "8.8.8.8:53"]);
        assert!(get_list(&env, "MISSING").is_empty());
    }
}
