//! 日志初始化：库代码只依赖 `log` 门面，由可执行程序在启动时调用一次 `init_logging`。

/// 初始化 env_logger；`RUST_LOG` 优先，否则使用 `default_filter`（如 "info"）。
/// 重复调用是安全的（第二次起静默忽略）。
pub fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init();
}
