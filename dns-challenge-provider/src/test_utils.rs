//! 测试工具
//!
//! [`EnvTest`] 在构造时快照真实环境中的相关 key，
//! 测试在内存副本上清空、覆盖，不修改进程环境，因此测试可以并行执行。

use std::collections::HashMap;

use crate::env::{EnvSource, ProcessEnv};

pub struct EnvTest {
    keys: Vec<String>,
    domain_key: Option<String>,
    live: HashMap<String, String>,
    values: HashMap<String, String>,
}

impl EnvTest {
    pub fn new(keys: &[&str]) -> Self {
        let keys: Vec<String> = keys.iter().map(ToString::to_string).collect();
        let live = snapshot(&keys);

        Self {
            values: live.clone(),
            keys,
            domain_key: None,
            live,
        }
    }

    /// 额外记录一个保存测试域名的 key
    pub fn with_domain(mut self, key: &str) -> Self {
        if let Some(value) = ProcessEnv.get(key) {
            self.live.insert(key.to_string(), value.clone());
            self.values.insert(key.to_string(), value);
        }
        self.domain_key = Some(key.to_string());
        self
    }

    pub fn clear_env(&mut self) {
        self.values.clear();
    }

    pub fn apply(&mut self, vars: &[(&str, &str)]) {
        for (key, value) in vars {
            self.values.insert((*key).to_string(), (*value).to_string());
        }
    }

    pub fn restore_env(&mut self) {
        self.values = self.live.clone();
    }

    /// 当前（可能被修改过的）环境
    pub fn env(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// 真实环境中所有 key 和测试域名都已设置
    pub fn is_live_test(&self) -> bool {
        let has = |key: &str| self.live.get(key).is_some_and(|v| !v.is_empty());
        self.keys.iter().all(|k| has(k.as_str())) && self.domain_key.as_deref().is_some_and(has)
    }

    pub fn domain(&self) -> &str {
        self.domain_key
            .as_deref()
            .and_then(|k| self.live.get(k))
            .map_or("", String::as_str)
    }
}

fn snapshot(keys: &[String]) -> HashMap<String, String> {
    keys.iter()
        .filter_map(|k| ProcessEnv.get(k).map(|v| (k.clone(), v)))
        .collect()
}
