//! # Gateway設定・共有状態
//!
//! 環境変数からの設定読み込みとGatewayの共有状態の定義。

use crate::storage::ObjectStore;

/// 署名付きURLのデフォルト有効期限（秒）
pub const DEFAULT_PRESIGN_EXPIRY_SECS: u32 = 3600;

/// デフォルトのリッスンアドレス
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Gatewayの共有状態。
///
/// 起動時に一度だけ構築し、以後は読み取り専用。
/// リクエストごとの状態は一切持たない。
pub struct GatewayState {
    /// オブジェクトストレージ（S3互換等、トレイトで抽象化）
    pub store: Box<dyn ObjectStore>,
    /// 署名付きURLの有効期限（秒）
    pub presign_expiry_secs: u32,
}

/// 環境変数から署名付きURLの有効期限を読み込む。
///
/// `PRESIGN_EXPIRY_SECS` 未設定時は3600秒。0や数値以外は設定エラー。
pub fn presign_expiry_from_env() -> anyhow::Result<u32> {
    match std::env::var("PRESIGN_EXPIRY_SECS") {
        Ok(v) => {
            let secs: u32 = v.parse().map_err(|_| {
                anyhow::anyhow!("PRESIGN_EXPIRY_SECS は正の整数で指定してください: {v}")
            })?;
            if secs == 0 {
                anyhow::bail!("PRESIGN_EXPIRY_SECS は1以上である必要があります");
            }
            Ok(secs)
        }
        Err(_) => Ok(DEFAULT_PRESIGN_EXPIRY_SECS),
    }
}

/// 環境変数からリッスンアドレスを読み込む。
/// `GATEWAY_ADDR` 未設定時は `0.0.0.0:3000`。
pub fn listen_addr_from_env() -> String {
    std::env::var("GATEWAY_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
}
