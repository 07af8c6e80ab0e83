// 日志工具模块
//
// 按 `[log]` 配置启动 flexi_logger，启动后记录一次生效的权限模型配置，
// 退出前需要调用 shutdown 确保异步日志 flush

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use parking_lot::Mutex;

use crate::config::Config;
use crate::core::error::{LimitError, LimitResult};

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 日志级别字符串非法、或日志系统已经启动时返回 `LimitError::Logging`。
///
/// # Examples
/// ```no_run
/// use route_limit::config::Config;
/// use route_limit::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &Config) -> LimitResult<()> {
    let log = &config.log;
    let spec = LogSpecification::parse(&log.level)?;

    let mut guard = LOGGER_HANDLE.lock();
    if guard.is_some() {
        return Err(LimitError::Logging("日志系统已经初始化".to_string()));
    }

    let write_mode = if log.async_write {
        WriteMode::Async
    } else {
        WriteMode::Direct
    };

    let handle = Logger::with(spec)
        .log_to_file(FileSpec::default().basename(&log.file).directory(&log.dir))
        .rotate(
            Criterion::Size(log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(log.max_files),
        )
        .write_mode(write_mode)
        .append()
        .start()?;
    *guard = Some(handle);

    log::info!("日志系统初始化完成: {}/{}", log.dir, log.file);
    log::info!(
        "权限模型配置: route_limit_key={}, str_delimiter={}, limit_icon={}, route_icon={}",
        config.limit.route_limit_key,
        config.limit.str_delimiter,
        config.limit.limit_icon,
        config.limit.route_icon
    );
    Ok(())
}

/// 刷新并关闭日志系统
pub fn shutdown() {
    if let Some(handle) = LOGGER_HANDLE.lock().take() {
        handle.flush();
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE.lock().is_some()
}
