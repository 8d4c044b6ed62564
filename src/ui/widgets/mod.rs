pub mod circle_progress;
pub mod paint;

pub use circle_progress::CircleProgressView;
pub use paint::{PaintStyle, ShapePaint, StrokeCap, TextPaint};

/// Defines the position and size of a widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WidgetGeometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Edge-based rectangle, used for layout rects and text bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Shrinks the rectangle by `d` on every side.
    pub fn inset(&self, d: f32) -> Self {
        Self::new(self.left + d, self.top + d, self.right - d, self.bottom - d)
    }
}

/// How a parent constrains one axis of a child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The child must be exactly this size.
    Exactly(f32),
    /// The child may be as large as this, but no larger.
    AtMost(f32),
    /// The parent imposes nothing.
    Unspecified,
}

impl MeasureSpec {
    /// Resolves this spec against the size the widget would like to have.
    pub fn resolve(self, preferred: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => size.min(preferred),
            MeasureSpec::Unspecified => preferred,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub width: MeasureSpec,
    pub height: MeasureSpec,
}

impl Constraints {
    pub fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Display density, passed explicitly instead of queried from the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub density_dpi: f32,
}

impl DisplayMetrics {
    /// Baseline density where one density-independent unit is one pixel.
    pub const BASELINE_DPI: f32 = 160.0;

    pub fn new(density_dpi: f32) -> Self {
        Self { density_dpi }
    }

    /// Derives metrics from a windowing system scale factor (1.0 == 160 dpi).
    pub fn from_scale_factor(scale_factor: f64) -> Self {
        Self::new(Self::BASELINE_DPI * scale_factor as f32)
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * (self.density_dpi / Self::BASELINE_DPI)
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(Self::BASELINE_DPI)
    }
}

/// Immediate-mode 2D drawing surface a widget renders onto.
///
/// Angles are in degrees, 0 at 3 o'clock, positive sweeps run clockwise on screen.
/// Text coordinates are the alphabetic baseline origin, and `text_bounds` is
/// reported relative to that origin (so `top` is usually negative).
pub trait DrawContext {
    fn clip_bounds(&self) -> Rect;

    fn draw_oval(&mut self, rect: Rect, paint: &ShapePaint);

    fn draw_arc(
        &mut self,
        rect: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: &ShapePaint,
    );

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &TextPaint);

    fn text_bounds(&mut self, text: &str, paint: &TextPaint) -> Rect;
}

/// Base trait for all widgets a host can lay out and paint.
pub trait Widget {
    /// Resolves the widget's size under the parent's constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Render the widget inside the given rectangle.
    fn draw<C: DrawContext>(&mut self, ctx: &mut C, bounds: WidgetGeometry);
}
