use log::{info, LevelFilter};
use std::env;

pub const UI_NAMESPACE: &str = "circle_progress::ui";
pub const WIDGET_NAMESPACE: &str = "circle_progress::widget";
pub const PROGRESS_NAMESPACE: &str = "circle_progress::progress";

pub fn init_logging() {
    // Set default log level if not specified in environment
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "info");
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp_millis()
        .format_module_path(true)
        .format_target(true)
        .filter(Some(UI_NAMESPACE), LevelFilter::Debug)
        .filter(Some(WIDGET_NAMESPACE), LevelFilter::Debug)
        .filter(Some(PROGRESS_NAMESPACE), LevelFilter::Debug)
        .init();

    info!("Logging initialized");
}

// Convenience macros for each namespace
#[macro_export]
macro_rules! ui_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::UI_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! widget_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::WIDGET_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! progress_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::PROGRESS_NAMESPACE, $($arg)*)
    };
}
