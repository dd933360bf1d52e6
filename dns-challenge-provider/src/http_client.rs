//! 通用 HTTP 客户端工具
//!
//! 提供可复用的 HTTP 请求处理逻辑，减少各 Provider 的重复代码。
//! 各 Provider 自己构造 RequestBuilder（认证方式、编码格式各不相同），
//! 这里只统一发送请求、日志记录、读取响应。

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::{ProviderError, Result};
use crate::traits::ProviderErrorMapper;

/// 创建 HTTP 客户端
///
/// `timeout` 为零表示不限制请求时长。
pub fn create_http_client(provider_name: &str, timeout: Duration) -> Result<Client> {
    let mut builder = Client::builder();
    if !timeout.is_zero() {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("创建 HTTP 客户端失败: {e}"),
        })
}

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// 执行 HTTP 请求并返回响应文本
    ///
    /// # Arguments
    /// * `request_builder` - 已配置好的请求构造器（包含 URL、headers、body 等）
    /// * `mapper` - Provider 错误映射（用于日志和网络错误）
    /// * `method_name` - 请求方法名（如 "GET", "POST"，用于日志）
    /// * `url_or_action` - URL 或 Action 名称（用于日志）
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - 无论状态码如何，只要拿到响应就返回
    /// * `Err(ProviderError::NetworkError)` - 网络错误
    pub async fn execute_request(
        request_builder: RequestBuilder,
        mapper: &impl ProviderErrorMapper,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String)> {
        let provider_name = mapper.provider_name();
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| mapper.network_error(e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| mapper.network_error(format!("读取响应失败: {e}")))?;

        log::debug!("[{provider_name}] Response Body: {response_text}");

        Ok((status_code, response_text))
    }
}
