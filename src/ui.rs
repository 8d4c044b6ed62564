mod window;
mod render;
pub mod canvas;
pub mod style;
pub mod widgets;

pub use window::UiError;

use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use crate::progress::SharedProgressState;
use crate::ui::canvas::{FontRegistry, load_fallback_fonts};
use crate::ui::style::ProgressStyle;
use crate::ui::widgets::{CircleProgressView, DisplayMetrics};
use glutin::surface::GlSurface;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use crate::logging::UI_NAMESPACE;
use log::{debug, info, warn};

/// Build the window, load fonts and the view, then run the event loop.
///
/// Only returns on a setup failure; a missing typeface asset is one of them.
pub fn run_ui(
    event_loop: EventLoop<()>,
    style: ProgressStyle,
    progress_state: SharedProgressState,
) -> Result<(), UiError> {
    let app_window = window::AppWindow::new(&event_loop, "Circle Progress")?;
    let mut femto_ctx = window::create_femtovg_context(&app_window)?;

    let metrics = DisplayMetrics::from_scale_factor(app_window.window.scale_factor());
    info!(target: UI_NAMESPACE, "Display density: {} dpi", metrics.density_dpi);
    let mut view = CircleProgressView::from_style(&style, metrics);

    let mut fonts = FontRegistry::new();
    if let Some(typeface) = view.typeface() {
        fonts.load(&mut femto_ctx.canvas, typeface)?;
    }
    load_fallback_fonts(&mut femto_ctx.canvas);

    let mut last_frame = Instant::now();
    let frame_interval = Duration::from_millis(16); // ~60 FPS

    info!(target: UI_NAMESPACE, "Starting event loop...");
    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!(target: UI_NAMESPACE, "Window close requested");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    debug!(target: UI_NAMESPACE, "Window resized: {}x{}", size.width, size.height);
                    let width = NonZeroU32::new(size.width.max(1)).unwrap_or(NonZeroU32::MIN);
                    let height = NonZeroU32::new(size.height.max(1)).unwrap_or(NonZeroU32::MIN);
                    femto_ctx.surface.resize(&femto_ctx.gl_context, width, height);
                    femto_ctx.canvas.set_size(width.get(), height.get(), app_window.window.scale_factor() as f32);
                    app_window.window.request_redraw();
                }
                _ => (),
            },
            Event::RedrawRequested(_) => {
                view.take_redraw_request();
                render::render_ui(&mut femto_ctx.canvas, &fonts, &mut view);

                if let Err(e) = femto_ctx.surface.swap_buffers(&femto_ctx.gl_context) {
                    warn!(target: UI_NAMESPACE, "Failed to swap buffers: {:?}", e);
                }
                last_frame = Instant::now();
            }
            Event::MainEventsCleared => {
                // Skip this tick if a writer holds the lock
                if let Ok(state) = progress_state.try_lock() {
                    state.apply_to(&mut view);
                }

                let now = Instant::now();
                if view.needs_redraw() && now.duration_since(last_frame) >= frame_interval {
                    app_window.window.request_redraw();
                }
                *control_flow = ControlFlow::WaitUntil(now + frame_interval);
            }
            _ => (),
        }
    });
}
