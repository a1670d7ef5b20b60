//! # Gateway エラー型
//!
//! 全エンドポイントで共通のエラー型。
//! エラーレスポンスのボディもJSON（`{"error": ...}`）で返す。

use axum::http::StatusCode;
use axum::Json;
use stow_types::ErrorBody;

/// Gatewayエラー型。
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// 不正なリクエスト（必須パラメータの欠落・空文字等）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),
    /// 署名付きURLの生成に失敗
    #[error("署名付きURLの生成に失敗: {0}")]
    Signing(String),
    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GatewayError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // 5xx系の詳細はサーバー側のログにのみ残す。
            // クライアントへは固定メッセージを返す。
            GatewayError::Signing(detail) => {
                tracing::error!(detail = %detail, "署名付きURLの生成に失敗");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "署名付きURLの生成に失敗しました".to_string(),
                )
            }
            GatewayError::Internal(detail) => {
                tracing::error!(detail = %detail, "内部エラー");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "内部エラーが発生しました".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
