use std::sync::Arc;

use crate::{
    config::Config,
    service::{
        address_ledger::TracingLedger, processor::ProcessorClient,
        wallet_address_service::WalletAddressRequester,
    },
};

/// 应用状态
/// 启动时构建一次，所有请求只读共享
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub requester: Arc<WalletAddressRequester>,
}

impl AppState {
    /// 使用真实的处理商客户端创建应用状态
    pub fn new(config: Arc<Config>) -> anyhow::Result<Self> {
        let client = Arc::new(ProcessorClient::new(&config.processor)?);
        let requester = WalletAddressRequester::new(client).with_ledger(Arc::new(TracingLedger));
        tracing::info!("✅ Processor client initialized: {}", config.processor.api_url);

        Ok(Self::with_requester(config, Arc::new(requester)))
    }

    /// 注入自定义 requester（测试或替换处理商时使用）
    pub fn with_requester(config: Arc<Config>, requester: Arc<WalletAddressRequester>) -> Self {
        Self { config, requester }
    }
}
