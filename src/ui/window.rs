use std::sync::Arc;
use winit::{
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder},
    dpi::PhysicalSize,
};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasRawWindowHandle;
use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextAttributesBuilder, PossiblyCurrentContext},
    display::GetGlDisplay,
    prelude::*,
    surface::{SurfaceAttributesBuilder, WindowSurface},
};
use femtovg::{renderer::OpenGl, Canvas};
use std::num::NonZeroU32;
use std::ffi::CString;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use crate::logging::UI_NAMESPACE;
use log::{debug, error, info};

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    #[error("Failed to set up GL context: {0}")]
    GlContext(#[from] glutin::error::Error),

    #[error("Failed to create renderer: {0}")]
    Renderer(String),

    #[error("Display offered no GL configs matching the template")]
    NoGlConfig,

    #[error("Failed to load font asset {path}: {reason}")]
    FontLoad { path: String, reason: String },
}

// Unwinds out of the config picker, which must return a config.
struct NoGlConfig;

/// Picks the entry with the most multisampling; the first one wins ties.
fn most_samples<C>(configs: impl Iterator<Item = C>, samples: impl Fn(&C) -> u8) -> Option<C> {
    configs.reduce(|best, config| if samples(&config) > samples(&best) { config } else { best })
}

pub struct AppWindow {
    pub window: Arc<Window>,
    pub gl_config: glutin::config::Config,
}

impl AppWindow {
    pub fn new(event_loop: &EventLoopWindowTarget<()>, title: &str) -> Result<Self, UiError> {
        info!(target: UI_NAMESPACE, "Creating window builder...");
        let window_builder = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(480, 480))
            .with_resizable(true)
            .with_visible(true)
            .with_decorations(true);

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_stencil_size(8)
            .with_depth_size(24)
            .with_transparency(true);

        info!(target: UI_NAMESPACE, "Building display...");
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let built = panic::catch_unwind(AssertUnwindSafe(|| {
            display_builder.build(event_loop, template, |configs| {
                // Prefer the config with the most multisampling for smooth rings
                match most_samples(configs, |config| config.num_samples()) {
                    Some(config) => config,
                    None => panic::resume_unwind(Box::new(NoGlConfig)),
                }
            })
        }));
        let (window, gl_config) = match built {
            Ok(result) => result.map_err(|e| UiError::WindowCreation(e.to_string()))?,
            Err(payload) if payload.is::<NoGlConfig>() => {
                error!(target: UI_NAMESPACE, "No GL config matches the requested template");
                return Err(UiError::NoGlConfig);
            }
            Err(payload) => panic::resume_unwind(payload),
        };

        let window = window.ok_or_else(|| UiError::WindowCreation("no window returned".to_string()))?;
        info!(target: UI_NAMESPACE, "Window created with size: {}x{}", window.inner_size().width, window.inner_size().height);

        Ok(Self {
            window: Arc::new(window),
            gl_config,
        })
    }
}

pub struct FemtovgContext {
    pub canvas: Canvas<OpenGl>,
    pub surface: glutin::surface::Surface<WindowSurface>,
    pub gl_context: PossiblyCurrentContext,
}

pub fn create_femtovg_context(app_window: &AppWindow) -> Result<FemtovgContext, UiError> {
    info!(target: UI_NAMESPACE, "Creating OpenGL context...");

    let raw_window_handle = app_window.window.raw_window_handle();

    let context_attributes = ContextAttributesBuilder::new()
        .with_profile(glutin::context::GlProfile::Core)
        .with_context_api(glutin::context::ContextApi::OpenGl(Some(glutin::context::Version::new(3, 3))))
        .build(Some(raw_window_handle));

    let not_current_context = unsafe {
        app_window.gl_config.display()
            .create_context(&app_window.gl_config, &context_attributes)?
    };

    let size = app_window.window.inner_size();
    debug!(target: UI_NAMESPACE, "Window size for surface: {}x{}", size.width, size.height);
    let width = NonZeroU32::new(size.width.max(1)).unwrap_or(NonZeroU32::MIN);
    let height = NonZeroU32::new(size.height.max(1)).unwrap_or(NonZeroU32::MIN);
    let attrs = SurfaceAttributesBuilder::<WindowSurface>::new()
        .with_srgb(Some(true))
        .build(raw_window_handle, width, height);

    info!(target: UI_NAMESPACE, "Creating surface...");
    let surface = unsafe {
        app_window.gl_config.display()
            .create_window_surface(&app_window.gl_config, &attrs)?
    };

    let gl_context = not_current_context.make_current(&surface)?;

    info!(target: UI_NAMESPACE, "Loading GL functions...");
    unsafe {
        gl::load_with(|s| match CString::new(s) {
            Ok(cstr) => app_window.gl_config.display().get_proc_address(&cstr).cast(),
            Err(_) => std::ptr::null(),
        });
        gl::Viewport(0, 0, size.width as i32, size.height as i32);
    }

    info!(target: UI_NAMESPACE, "Creating renderer...");
    let renderer = unsafe {
        OpenGl::new_from_function_cstr(|s| app_window.gl_config.display().get_proc_address(s).cast())
            .map_err(|e| UiError::Renderer(format!("{:?}", e)))?
    };

    let mut canvas = Canvas::new(renderer).map_err(|e| UiError::Renderer(format!("{:?}", e)))?;
    canvas.set_size(size.width, size.height, app_window.window.scale_factor() as f32);

    info!(target: UI_NAMESPACE, "Femtovg context created successfully!");

    Ok(FemtovgContext {
        canvas,
        surface,
        gl_context,
    })
}
