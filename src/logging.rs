use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// `-v`の回数に対応する既定フィルタ
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "mini_library=warn",
        1 => "mini_library=info",
        _ => "mini_library=debug",
    }
}

/// グローバルsubscriberを設定する
///
/// 出力先は標準エラー。`RUST_LOG`が設定されていれば`-v`より優先する。
pub fn init(verbose: u8) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
