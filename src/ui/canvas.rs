use crate::logging::UI_NAMESPACE;
use crate::ui::widgets::{DrawContext, Rect, ShapePaint, StrokeCap, TextPaint};
use crate::ui::window::UiError;
use femtovg::{Align, Baseline, Canvas, FontId, LineCap, Paint, Path, Solidity, renderer::Renderer};
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path as FsPath, PathBuf};

// Angular step used when flattening elliptical arcs.
const ELLIPSE_SEGMENT_DEG: f32 = 2.0;

/// Fonts registered with a canvas, keyed by asset path.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: HashMap<String, FontId>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a font asset into the canvas. Loading the same path twice is a lookup.
    pub fn load<R: Renderer>(&mut self, canvas: &mut Canvas<R>, path: &str) -> Result<FontId, UiError> {
        if let Some(id) = self.fonts.get(path) {
            return Ok(*id);
        }
        let id = canvas.add_font(resolve_asset(path)).map_err(|e| UiError::FontLoad {
            path: path.to_string(),
            reason: format!("{:?}", e),
        })?;
        info!(target: UI_NAMESPACE, "Loaded font asset {}", path);
        self.fonts.insert(path.to_string(), id);
        Ok(id)
    }

    pub fn get(&self, path: &str) -> Option<FontId> {
        self.fonts.get(path).copied()
    }
}

/// Relative asset paths are tried against the working directory first, then the crate root.
pub fn resolve_asset(path: &str) -> PathBuf {
    let given = PathBuf::from(path);
    if given.is_relative() && !given.exists() {
        let bundled = FsPath::new(env!("CARGO_MANIFEST_DIR")).join(&given);
        if bundled.exists() {
            return bundled;
        }
    }
    given
}

/// Try system fonts so text without an explicit typeface has something to render with.
pub fn load_fallback_fonts<R: Renderer>(canvas: &mut Canvas<R>) -> bool {
    let font_paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "C:\\Windows\\Fonts\\segoe.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    for path in font_paths.iter() {
        if let Ok(font_data) = std::fs::read(path) {
            if canvas.add_font_mem(&font_data).is_ok() {
                info!(target: UI_NAMESPACE, "Successfully loaded font from: {}", path);
                return true;
            }
        }
    }

    warn!(target: UI_NAMESPACE, "No system fonts could be loaded. Text rendering may not work correctly.");
    false
}

/// femtovg-backed `DrawContext`, scissored to one widget's bounds while it lives.
pub struct FemtovgSurface<'a, R: Renderer> {
    canvas: &'a mut Canvas<R>,
    fonts: &'a FontRegistry,
    clip: Rect,
}

impl<'a, R: Renderer> FemtovgSurface<'a, R> {
    pub fn new(canvas: &'a mut Canvas<R>, fonts: &'a FontRegistry, clip: Rect) -> Self {
        canvas.save();
        canvas.scissor(clip.left, clip.top, clip.width(), clip.height());
        Self { canvas, fonts, clip }
    }

    fn shape_paint(paint: &ShapePaint) -> Paint {
        let mut femto = Paint::color(paint.color);
        femto.set_line_width(paint.stroke_width);
        femto.set_line_cap(match paint.cap {
            StrokeCap::Butt => LineCap::Butt,
            StrokeCap::Round => LineCap::Round,
            StrokeCap::Square => LineCap::Square,
        });
        femto.set_anti_alias(paint.anti_alias);
        femto
    }

    fn text_paint(&self, paint: &TextPaint) -> Paint {
        let mut femto = Paint::color(paint.color);
        femto.set_font_size(paint.size);
        femto.set_text_align(Align::Left);
        femto.set_text_baseline(Baseline::Alphabetic);
        femto.set_anti_alias(paint.anti_alias);
        if let Some(typeface) = &paint.typeface {
            match self.fonts.get(typeface) {
                Some(id) => femto.set_font(&[id]),
                None => warn!(target: UI_NAMESPACE, "Typeface {} not loaded, using default font", typeface),
            }
        }
        femto
    }

    fn paint_path(&mut self, path: &Path, paint: &ShapePaint) {
        let femto = Self::shape_paint(paint);
        if paint.fills() {
            self.canvas.fill_path(path, &femto);
        }
        if paint.strokes() {
            self.canvas.stroke_path(path, &femto);
        }
    }
}

impl<R: Renderer> Drop for FemtovgSurface<'_, R> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

/// Builds an arc path. Angles are degrees, positive sweep runs clockwise on screen.
pub fn arc_path(rect: Rect, start_angle: f32, sweep_angle: f32, use_center: bool) -> Path {
    let cx = rect.center_x();
    let cy = rect.center_y();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let sweep = sweep_angle.clamp(-360.0, 360.0);

    let mut path = Path::new();
    if use_center {
        path.move_to(cx, cy);
    }

    if rx == ry {
        let a0 = start_angle.to_radians();
        let a1 = (start_angle + sweep).to_radians();
        // Screen y grows downward, so a clockwise winding sweeps positive angles.
        let dir = if sweep >= 0.0 { Solidity::Hole } else { Solidity::Solid };
        path.arc(cx, cy, rx, a0, a1, dir);
    } else {
        let steps = ((sweep.abs() / ELLIPSE_SEGMENT_DEG).ceil() as usize).max(1);
        for i in 0..=steps {
            let angle = (start_angle + sweep * i as f32 / steps as f32).to_radians();
            let x = cx + rx * angle.cos();
            let y = cy + ry * angle.sin();
            if i == 0 && !use_center {
                path.move_to(x, y);
            } else {
                path.line_to(x, y);
            }
        }
    }

    if use_center {
        path.close();
    }
    path
}

impl<R: Renderer> DrawContext for FemtovgSurface<'_, R> {
    fn clip_bounds(&self) -> Rect {
        self.clip
    }

    fn draw_oval(&mut self, rect: Rect, paint: &ShapePaint) {
        let mut path = Path::new();
        path.ellipse(rect.center_x(), rect.center_y(), rect.width() / 2.0, rect.height() / 2.0);
        self.paint_path(&path, paint);
    }

    fn draw_arc(&mut self, rect: Rect, start_angle: f32, sweep_angle: f32, use_center: bool, paint: &ShapePaint) {
        let path = arc_path(rect, start_angle, sweep_angle, use_center);
        self.paint_path(&path, paint);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &TextPaint) {
        let femto = self.text_paint(paint);
        if let Err(e) = self.canvas.fill_text(x, y, text, &femto) {
            warn!(target: UI_NAMESPACE, "Failed to draw text {:?}: {:?}", text, e);
        }
    }

    fn text_bounds(&mut self, text: &str, paint: &TextPaint) -> Rect {
        let femto = self.text_paint(paint);
        match self.canvas.measure_text(0.0, 0.0, text, &femto) {
            Ok(metrics) => Rect::new(
                metrics.x,
                metrics.y,
                metrics.x + metrics.width(),
                metrics.y + metrics.height(),
            ),
            Err(e) => {
                warn!(target: UI_NAMESPACE, "Failed to measure text {:?}: {:?}", text, e);
                Rect::default()
            }
        }
    }
}
