//! # Stow Gateway
//!
//! オブジェクトストアへの直接アップロード/ダウンロードを仲介するGateway。
//! オブジェクトのバイト列は中継せず、単一キー・単一動詞にスコープされた
//! 時限付き署名URLのみを発行する。発行後のデータ転送はクライアントと
//! ストアの間で直接行われ、Gatewayを経由しない。
//!
//! ## API エンドポイント
//! - `GET /upload` — アップロード用（PUT）署名付きURL発行
//! - `GET /download` — ダウンロード用（GET）署名付きURL発行
//!
//! どちらも発行のみでステートレス。発行済みURLの記録は持たず、
//! 有効性はURL内の署名とタイムスタンプで自己完結する。

mod config;
mod endpoints;
mod error;
mod storage;

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};

use crate::config::GatewayState;
use crate::storage::S3ObjectStore;

/// axumルーターを構築する。
///
/// ブラウザオリジンのクライアントから読み取れるよう、全ルートの
/// 全レスポンス（エラーレスポンスを含む）に許可的なCORSヘッダを付与する。
fn build_router(state: Arc<GatewayState>) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route("/upload", axum::routing::get(endpoints::handle_upload))
        .route("/download", axum::routing::get(endpoints::handle_download))
        .with_state(state)
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // ストレージ初期化。資格情報が欠落・不正な場合はここで起動を中止する。
    let store = S3ObjectStore::from_env()?;
    let presign_expiry_secs = config::presign_expiry_from_env()?;

    let state = Arc::new(GatewayState {
        store: Box::new(store),
        presign_expiry_secs,
    });

    let app = build_router(state);

    let addr = config::listen_addr_from_env();
    tracing::info!("Gatewayを {} で起動します", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// ルーターテスト
// ---------------------------------------------------------------------------
