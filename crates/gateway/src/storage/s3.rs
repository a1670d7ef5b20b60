//! # S3互換オブジェクトストレージ実装
//!
//! AWS S3, MinIO, Cloudflare R2 等のS3互換APIを使用する
//! [`ObjectStore`] 実装。

use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use stow_types::{SigningRequest, Verb};

use super::ObjectStore;
use crate::error::GatewayError;

/// S3互換ストレージによる[`ObjectStore`]実装。
///
/// 資格情報は起動時に一度だけ読み込み、以後は署名計算にのみ使用する。
pub struct S3ObjectStore {
    /// 署名付きURL生成用バケット
    bucket: s3::Bucket,
}

/// エンドポイントURLからSigV4リージョンを推定する。
///
/// - `*.r2.cloudflarestorage.com` は `auto`（R2の規約）
/// - `s3.<region>.amazonaws.com` からリージョンを抽出
/// - それ以外は `us-east-1`
fn detect_region(endpoint: &str) -> String {
    if endpoint.contains(".r2.cloudflarestorage.com") {
        return "auto".to_string();
    }
    if let Some(start) = endpoint.find("s3.") {
        let rest = &endpoint[start + 3..];
        if let Some(end) = rest.find(".amazonaws.com") {
            return rest[..end].to_string();
        }
    }
    "us-east-1".to_string()
}

impl S3ObjectStore {
    /// S3互換バケットから構築する。
    pub fn new(bucket: s3::Bucket) -> Self {
        Self { bucket }
    }

    /// エンドポイント・リージョン・資格情報からバケットを初期化する。
    pub fn init_bucket(
        endpoint: &str,
        region: &str,
        access_key: &str,
        secret_key: &str,
        bucket_name: &str,
    ) -> anyhow::Result<s3::Bucket> {
        let region = s3::Region::Custom {
            region: region.to_string(),
            endpoint: endpoint.to_string(),
        };

        let credentials = s3::creds::Credentials::new(
            Some(access_key),
            Some(secret_key),
            None,
            None,
            None,
        )?;

        let bucket = s3::Bucket::new(bucket_name, region, credentials)?.with_path_style();

        Ok(*bucket)
    }

    /// 環境変数から構築する。
    ///
    /// 必須: `S3_ACCESS_KEY`, `S3_SECRET_KEY`, および `S3_ENDPOINT` または
    /// `S3_ACCOUNT_ID`（Cloudflare R2のアカウントID）のいずれか。
    /// 資格情報・エンドポイントが欠落している場合はエラーを返し、
    /// 呼び出し側はプロセスの起動を中止する。
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = match std::env::var("S3_ENDPOINT") {
            Ok(ep) => ep,
            // Cloudflare R2: アカウントIDからエンドポイントを導出
            Err(_) => {
                let account_id = std::env::var("S3_ACCOUNT_ID").map_err(|_| {
                    anyhow::anyhow!("S3_ENDPOINT または S3_ACCOUNT_ID を設定してください")
                })?;
                format!("https://{account_id}.r2.cloudflarestorage.com")
            }
        };

        let access_key = std::env::var("S3_ACCESS_KEY")
            .map_err(|_| anyhow::anyhow!("S3_ACCESS_KEY を設定してください"))?;
        let secret_key = std::env::var("S3_SECRET_KEY")
            .map_err(|_| anyhow::anyhow!("S3_SECRET_KEY を設定してください"))?;
        let bucket_name = std::env::var("S3_BUCKET").unwrap_or_else(|_| "testing".to_string());

        let region = std::env::var("S3_REGION").unwrap_or_else(|_| detect_region(&endpoint));

        tracing::info!(
            s3_endpoint = %endpoint,
            s3_region = %region,
            s3_bucket = %bucket_name,
            "S3互換ストレージを初期化"
        );

        let bucket =
            Self::init_bucket(&endpoint, &region, &access_key, &secret_key, &bucket_name)?;

        Ok(Self::new(bucket))
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3ObjectStore {
    async fn presign(&self, req: &SigningRequest) -> Result<String, GatewayError> {
        match req.verb {
            Verb::Put => {
                // Content-Typeは署名対象ヘッダに含める。
                // 実際のPUTのContent-Typeが一致しない場合、ストアは署名不一致で拒否する。
                let custom_headers = match &req.content_type {
                    Some(ct) => {
                        let value = HeaderValue::from_str(ct).map_err(|e| {
                            GatewayError::BadRequest(format!("不正なContent-Type: {e}"))
                        })?;
                        let mut headers = HeaderMap::new();
                        headers.insert(CONTENT_TYPE, value);
                        Some(headers)
                    }
                    None => None,
                };

                self.bucket
                    .presign_put(&req.key, req.expiry_secs, custom_headers, None)
                    .await
                    .map_err(|e| GatewayError::Signing(format!("PUT署名の生成に失敗: {e}")))
            }
            Verb::Get => self
                .bucket
                .presign_get(&req.key, req.expiry_secs, None)
                .await
                .map_err(|e| GatewayError::Signing(format!("GET署名の生成に失敗: {e}"))),
        }
    }
}
