//! # エンドポイントテスト用共通ヘルパー
//!
//! upload, downloadテストとルーターテストで共有するモック群。

use std::sync::Arc;

use stow_types::SigningRequest;

use crate::config::GatewayState;
use crate::error::GatewayError;
use crate::storage::ObjectStore;

/// テスト用のモックObjectStore。
/// ストアへの接続なしで、署名リクエストの内容を埋め込んだダミーURLを返す。
pub struct MockObjectStore;

#[async_trait::async_trait]
impl ObjectStore for MockObjectStore {
    async fn presign(&self, req: &SigningRequest) -> Result<String, GatewayError> {
        Ok(format!(
            "http://mock-storage/testing/{}?verb={}&contentType={}&expires={}&sig=test",
            req.key,
            req.verb,
            req.content_type.clone().unwrap_or_default(),
            req.expiry_secs,
        ))
    }
}

/// 常に署名失敗を返すモック。
pub struct FailingObjectStore;

#[async_trait::async_trait]
impl ObjectStore for FailingObjectStore {
    async fn presign(&self, _req: &SigningRequest) -> Result<String, GatewayError> {
        Err(GatewayError::Signing(
            "mock signing failure detail".to_string(),
        ))
    }
}

/// テスト用GatewayStateを構築するヘルパー
pub fn test_state(store: Box<dyn ObjectStore>) -> Arc<GatewayState> {
    Arc::new(GatewayState {
        store,
        presign_expiry_secs: 3600,
    })
}
