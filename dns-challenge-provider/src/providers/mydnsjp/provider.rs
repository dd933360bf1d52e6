//! MyDNS.JP ChallengeProvider 实现

use std::time::Duration;

use async_trait::async_trait;

use crate::dns01::{get_challenge_info, un_fqdn};
use crate::error::{ProviderError, Result};
use crate::traits::{ChallengeProvider, ErrorContext, ProviderTimeout};

use super::{MyDnsJpProvider, PROVIDER_NAME};

#[async_trait]
impl ChallengeProvider for MyDnsJpProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn present(&self, domain: &str, _token: &str, key_auth: &str) -> Result<()> {
        let info = get_challenge_info(domain, key_auth);
        let ctx = ErrorContext::for_record(&info.fqdn);

        match self
            .client
            .create_record(un_fqdn(domain), &info.value, ctx)
            .await
        {
            Ok(()) => {
                log::info!("[{PROVIDER_NAME}] TXT 记录已创建: {}", info.fqdn);
                Ok(())
            }
            Err(ProviderError::RecordExists { record_name, .. }) => {
                log::warn!("[{PROVIDER_NAME}] TXT 记录已存在，视为成功: {record_name}");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn cleanup(&self, domain: &str, _token: &str, key_auth: &str) -> Result<()> {
        let info = get_challenge_info(domain, key_auth);
        let ctx = ErrorContext::for_record(&info.fqdn);

        match self
            .client
            .delete_record(un_fqdn(domain), &info.value, ctx)
            .await
        {
            Ok(()) => {
                log::info!("[{PROVIDER_NAME}] TXT 记录已删除: {}", info.fqdn);
                Ok(())
            }
            Err(ProviderError::RecordNotFound { record_name, .. }) => {
                log::warn!("[{PROVIDER_NAME}] TXT 记录不存在，视为成功: {record_name}");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn as_timeout(&self) -> Option<&dyn ProviderTimeout> {
        Some(self)
    }
}

impl ProviderTimeout for MyDnsJpProvider {
    fn timeout(&self) -> (Duration, Duration) {
        (
            self.config.propagation_timeout,
            self.config.polling_interval,
        )
    }
}
