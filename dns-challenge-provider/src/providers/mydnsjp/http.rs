//! MyDNS.JP HTTP 请求方法

use std::fmt;
use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::PROVIDER_NAME;

/// DirectEdit 命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditCommand {
    Regist,
    Delete,
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regist => f.write_str("REGIST"),
            Self::Delete => f.write_str("DELETE"),
        }
    }
}

/// MyDNS.JP API 客户端
///
/// 每个操作一次请求，不做重试。
pub(crate) struct MyDnsJpClient {
    client: Client,
    base_url: String,
    master_id: String,
    password: String,
}

impl MyDnsJpClient {
    pub(crate) fn new(
        base_url: &str,
        master_id: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PROVIDER_NAME, timeout)?,
            base_url: base_url.to_string(),
            master_id: master_id.to_string(),
            password: password.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// 注册 TXT 记录
    pub(crate) async fn create_record(
        &self,
        domain: &str,
        value: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        self.edit(EditCommand::Regist, domain, value, ctx).await
    }

    /// 删除 TXT 记录
    pub(crate) async fn delete_record(
        &self,
        domain: &str,
        value: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        self.edit(EditCommand::Delete, domain, value, ctx).await
    }

    async fn edit(
        &self,
        command: EditCommand,
        domain: &str,
        value: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        let command_name = command.to_string();
        let form = [
            ("CERTBOT_DOMAIN", domain),
            ("CERTBOT_VALIDATION", value),
            ("EDIT_CMD", command_name.as_str()),
        ];

        let request = self
            .client
            .post(&self.base_url)
            .basic_auth(&self.master_id, Some(&self.password))
            .form(&form);

        let (status, body) = HttpUtils::execute_request(
            request,
            self,
            "POST",
            &format!("{} EDIT_CMD={command_name}", self.base_url),
        )
        .await?;

        if status >= 400 {
            log::error!("[{PROVIDER_NAME}] API 错误: {status} - {body}");
            return Err(self.map_error(RawApiError::with_code(status.to_string(), body.trim()), ctx));
        }

        Ok(())
    }
}
