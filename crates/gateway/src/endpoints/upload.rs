//! # GET /upload
//!
//! アップロード用署名付きURL発行。

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use stow_types::{SignedUrlResponse, SigningRequest};

use crate::config::GatewayState;
use crate::error::GatewayError;

/// /upload のクエリパラメータ。
///
/// 必須チェックは署名処理に入る前にハンドラ内で行い、
/// 欠落時は即座に400を返す。
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// オブジェクトキーとして使用するファイル名
    pub filename: Option<String>,
    /// アップロード時に要求するContent-Type
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
}

/// GET /upload — アップロード用署名付きURL発行。
///
/// `filename` をそのままオブジェクトキーとしてPUT用の署名付きURLを発行する。
/// Content-Typeは署名に含まれ、アップロード時に完全一致が要求される。
/// 同名キーへの再アップロードはストア側の上書きセマンティクスに従う。
pub async fn handle_upload(
    State(state): State<Arc<GatewayState>>,
    Query(params): Query<UploadParams>,
) -> Result<Json<SignedUrlResponse>, GatewayError> {
    let filename = params.filename.filter(|s| !s.is_empty()).ok_or_else(|| {
        GatewayError::BadRequest("filename と contentType は必須です".to_string())
    })?;
    let content_type = params.content_type.filter(|s| !s.is_empty()).ok_or_else(|| {
        GatewayError::BadRequest("filename と contentType は必須です".to_string())
    })?;

    let req = SigningRequest::put(filename, content_type, state.presign_expiry_secs);
    let url = state.store.presign(&req).await?;

    Ok(Json(SignedUrlResponse { url }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_helpers::{test_state, MockObjectStore};

    /// 正常なリクエストでPUT用の署名付きURLが返ることを確認
    #[tokio::test]
    async fn test_upload_url_issued() {
        let state = test_state(Box::new(MockObjectStore));

        let result = handle_upload(
            State(state),
            Query(UploadParams {
                filename: Some("test.png".to_string()),
                content_type: Some("image/png".to_string()),
            }),
        )
        .await;

        let response = result.unwrap().0;
        assert!(response.url.contains("/testing/test.png"));
        assert!(response.url.contains("verb=PUT"));
        assert!(response.url.contains("contentType=image/png"));
        assert!(response.url.contains("expires=3600"));
    }

    /// filename欠落 → BadRequest
    #[tokio::test]
    async fn test_upload_missing_filename() {
        let state = test_state(Box::new(MockObjectStore));

        let result = handle_upload(
            State(state),
            Query(UploadParams {
                filename: None,
                content_type: Some("image/png".to_string()),
            }),
        )
        .await;

        assert!(matches!(result, Err(GatewayError::BadRequest(_))));
    }

    /// contentType欠落 → BadRequest
    #[tokio::test]
    async fn test_upload_missing_content_type() {
        let state = test_state(Box::new(MockObjectStore));

        let result = handle_upload(
            State(state),
            Query(UploadParams {
                filename: Some("test.png".to_string()),
                content_type: None,
            }),
        )
        .await;

        assert!(matches!(result, Err(GatewayError::BadRequest(_))));
    }

    /// 空文字は欠落と同様に扱う
    #[tokio::test]
    async fn test_upload_empty_params_rejected() {
        let state = test_state(Box::new(MockObjectStore));

        let result = handle_upload(
            State(state),
            Query(UploadParams {
                filename: Some(String::new()),
                content_type: Some("image/png".to_string()),
            }),
        )
        .await;

        assert!(matches!(result, Err(GatewayError::BadRequest(_))));
    }

    /// 同じfilenameで2回リクエストしても、それぞれ独立にURLが発行される
    /// （重複排除や冪等キーは存在しない）
    #[tokio::test]
    async fn test_upload_no_dedup() {
        let state = test_state(Box::new(MockObjectStore));

        for _ in 0..2 {
            let result = handle_upload(
                State(state.clone()),
                Query(UploadParams {
                    filename: Some("test.png".to_string()),
                    content_type: Some("image/png".to_string()),
                }),
            )
            .await;
            assert!(result.is_ok());
        }
    }
}
