//! # GET /download
//!
//! ダウンロード用署名付きURL発行。

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use stow_types::{SignedUrlResponse, SigningRequest};

use crate::config::GatewayState;
use crate::error::GatewayError;

/// /download のクエリパラメータ。
#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    /// ダウンロード対象のオブジェクトキー
    pub filename: Option<String>,
}

/// GET /download — ダウンロード用署名付きURL発行。
///
/// `filename` のオブジェクトに対するGET用の署名付きURLを発行する。
/// Content-Typeの制約は付かない。
pub async fn handle_download(
    State(state): State<Arc<GatewayState>>,
    Query(params): Query<DownloadParams>,
) -> Result<Json<SignedUrlResponse>, GatewayError> {
    let filename = params
        .filename
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GatewayError::BadRequest("filename は必須です".to_string()))?;

    let req = SigningRequest::get(filename, state.presign_expiry_secs);
    let url = state.store.presign(&req).await?;

    Ok(Json(SignedUrlResponse { url }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_helpers::{test_state, MockObjectStore};

    /// 正常なリクエストでGET用の署名付きURLが返ることを確認
    #[tokio::test]
    async fn test_download_url_issued() {
        let state = test_state(Box::new(MockObjectStore));

        let result = handle_download(
            State(state),
            Query(DownloadParams {
                filename: Some("test.png".to_string()),
            }),
        )
        .await;

        let response = result.unwrap().0;
        assert!(response.url.contains("/testing/test.png"));
        assert!(response.url.contains("verb=GET"));
        // ダウンロードURLにContent-Typeの制約は付かない
        assert!(response.url.contains("contentType=&"));
    }

    /// filename欠落 → BadRequest
    #[tokio::test]
    async fn test_download_missing_filename() {
        let state = test_state(Box::new(MockObjectStore));

        let result = handle_download(State(state), Query(DownloadParams { filename: None })).await;

        assert!(matches!(result, Err(GatewayError::BadRequest(_))));
    }

    /// 空文字のfilenameも拒否する
    #[tokio::test]
    async fn test_download_empty_filename_rejected() {
        let state = test_state(Box::new(MockObjectStore));

        let result = handle_download(
            State(state),
            Query(DownloadParams {
                filename: Some(String::new()),
            }),
        )
        .await;

        assert!(matches!(result, Err(GatewayError::BadRequest(_))));
    }
}
