use circle_progress::logging;
use circle_progress::progress::{self, ProgressState, command};
use circle_progress::ui::{self, style::ProgressStyle};
use circle_progress::ui_log;
use log::Level::Error;
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Mutex;
use winit::event_loop::EventLoop;

const DEFAULT_STYLE_PATH: &str = "assets/styles/circle_progress.yml";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    logging::init_logging();

    let style_path = env::var("CIRCLE_PROGRESS_STYLE").unwrap_or_else(|_| DEFAULT_STYLE_PATH.to_string());
    let style = match ProgressStyle::load_or_default(&style_path) {
        Ok(style) => style,
        Err(e) => {
            ui_log!(Error, "Invalid style {}: {}", style_path, e);
            return ExitCode::FAILURE;
        }
    };

    let progress_state = Arc::new(Mutex::new(ProgressState::from_style(&style)));

    // Start mock progress if enabled
    progress::maybe_start_mock_progress(progress_state.clone()).await;

    // Start the command listener (in a background thread)
    command::start_command_listener(progress_state.clone());

    let event_loop = EventLoop::new();
    if let Err(e) = ui::run_ui(event_loop, style, progress_state) {
        ui_log!(Error, "UI setup failed: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
