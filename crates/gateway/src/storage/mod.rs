//! # オブジェクトストレージ抽象
//!
//! ストアの資格情報を保持し、署名付きURLを生成するストレージ層の
//! 抽象インターフェース。S3互換ストレージ実装は `s3` サブモジュールを参照。

pub mod s3;

pub use s3::S3ObjectStore;

use stow_types::SigningRequest;

use crate::error::GatewayError;

/// オブジェクトストレージの抽象インターフェース。
///
/// S3互換ストレージ（MinIO, AWS S3, Cloudflare R2等）を実装として
/// 選択できる。実装はプロセス全体で1つだけ構築し、全リクエストで共有する。
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// 署名リクエストに対応する署名付きURLを生成する。
    ///
    /// 返されるURLは `req.verb` と `req.key` の組み合わせに対してのみ有効で、
    /// 発行から `req.expiry_secs` 秒の経過後は無効になる。
    /// 署名の計算はネットワークI/Oを伴わない。
    async fn presign(&self, req: &SigningRequest) -> Result<String, GatewayError>;
}
