use std::sync::Arc;
use tokio::sync::Mutex;
use crate::ui::style::ProgressStyle;
use crate::ui::widgets::CircleProgressView;
use crate::ui::widgets::circle_progress::{DEFAULT_PROGRESS, DEFAULT_PROGRESS_MAX};

pub mod command;

/// Values the host pushes into the progress view every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    pub progress: i32,
    pub max: i32,
    pub show_text: bool,
    pub fill_background: bool,
}

impl ProgressState {
    /// Seed the host state from the same style the view is built from.
    pub fn from_style(style: &ProgressStyle) -> Self {
        Self {
            progress: style.progress.unwrap_or(DEFAULT_PROGRESS),
            max: style.max.unwrap_or(DEFAULT_PROGRESS_MAX),
            show_text: style.show_text.unwrap_or(false),
            fill_background: style.fill_background.unwrap_or(false),
        }
    }

    /// Push the state through the view's setters; unchanged values are no-ops.
    pub fn apply_to(&self, view: &mut CircleProgressView) {
        view.set_max(self.max);
        view.set_progress(self.progress);
        view.set_show_text(self.show_text);
        view.set_fill_background(self.fill_background);
    }

    /// Advance progress by `step`, wrapping back to zero past `max`.
    pub fn advance(&mut self, step: i32) {
        if self.max <= 0 {
            return;
        }
        // Widened so `max == i32::MAX` or progress near the bounds cannot overflow;
        // the remainder's magnitude is at most `max`, so it fits back in i32.
        let next = (i64::from(self.progress) + i64::from(step)) % (i64::from(self.max) + 1);
        self.progress = next as i32;
    }
}

pub type SharedProgressState = Arc<Mutex<ProgressState>>;

#[cfg(feature = "mock_progress")]
pub mod mock;

#[cfg(feature = "mock_progress")]
pub async fn maybe_start_mock_progress(progress_state: SharedProgressState) {
    mock::start_mock_progress(progress_state).await;
}

#[cfg(not(feature = "mock_progress"))]
pub async fn maybe_start_mock_progress(_progress_state: SharedProgressState) {
    // No-op without the mock feed
}
