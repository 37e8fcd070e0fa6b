//! 日志初始化
//!
//! 宿主在启动阶段调用一次 [`init`]；默认级别 `info`，可通过 `RUST_LOG` 覆盖。
//! 重复调用不会报错（宿主可能已安装自己的 logger）。

/// 安装 `env_logger`，已安装时静默跳过。
pub fn init() {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    match result {
        Ok(()) => log::debug!("logging: env_logger installed"),
        Err(_) => log::debug!("logging: logger already installed, skipping"),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        log::info!("logging initialized twice without panic");
    }
}
