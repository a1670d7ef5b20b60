//! # Stow 共有型定義
//!
//! Gatewayとストレージ層で共有するデータ構造をRust構造体として提供する。
//!
//! ## ワイヤ形式
//! - レスポンスはすべてJSON
//! - クエリパラメータはcamelCase（`contentType`）

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// 署名リクエスト
// ---------------------------------------------------------------------------

/// 署名対象のHTTP動詞。
/// 署名付きURLはここで指定した動詞に対してのみ有効になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    /// オブジェクトのアップロード
    Put,
    /// オブジェクトのダウンロード
    Get,
}

impl Verb {
    /// HTTPメソッド表記を返す。
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Put => "PUT",
            Verb::Get => "GET",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 署名付きURLの生成指示。
///
/// 単一のオブジェクトキー・単一の動詞に対してHTTPリクエストごとに
/// 新しく構築する。永続化せず、リクエストをまたいで再利用しない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningRequest {
    /// 署名対象の動詞
    pub verb: Verb,
    /// バケット内のオブジェクトキー（呼び出し元の指定をそのまま使用）
    pub key: String,
    /// PUT時に署名へ含めるContent-Type（GETでは常にNone）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// URL有効期限（秒）
    pub expiry_secs: u32,
}

impl SigningRequest {
    /// アップロード（PUT）用の署名リクエストを構築する。
    pub fn put(
        key: impl Into<String>,
        content_type: impl Into<String>,
        expiry_secs: u32,
    ) -> Self {
        Self {
            verb: Verb::Put,
            key: key.into(),
            content_type: Some(content_type.into()),
            expiry_secs,
        }
    }

    /// ダウンロード（GET）用の署名リクエストを構築する。
    pub fn get(key: impl Into<String>, expiry_secs: u32) -> Self {
        Self {
            verb: Verb::Get,
            key: key.into(),
            content_type: None,
            expiry_secs,
        }
    }
}

// ---------------------------------------------------------------------------
// レスポンス型
// ---------------------------------------------------------------------------

/// /upload・/download 共通の成功レスポンス。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedUrlResponse {
    /// 発行された署名付きURL
    pub url: String,
}

/// エラーレスポンスのボディ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// エラーメッセージ
    pub error: String,
}
