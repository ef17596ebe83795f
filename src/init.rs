use env_logger::Env;

/// 初始化日誌，預設只輸出警告以上，可用 `RUST_LOG` 調整
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();
}
