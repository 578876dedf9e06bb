//! tracing subscriber の初期化

use tracing_subscriber::EnvFilter;

/// RUST_LOG を尊重し、未設定なら "info"
///
/// 二重初期化はエラーにせず無視する
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
