use crate::ui::style::{ProgressStyle, SYSTEM_TYPEFACE};
use crate::ui::widgets::paint::{PaintStyle, ShapePaint, StrokeCap, TextPaint};
use crate::ui::widgets::{
    Constraints, DisplayMetrics, DrawContext, Rect, Size, Widget, WidgetGeometry,
};
use crate::widget_log;
use femtovg::Color;
use log::Level::{Debug, Warn};

pub const PERCENT: &str = "%";

pub const DEFAULT_BACKGROUND_COLOR: Color = Color { r: 0.8, g: 0.8, b: 0.8, a: 1.0 }; // #CCCCCC
pub const DEFAULT_FOREGROUND_COLOR: Color = Color { r: 0.26666668, g: 0.26666668, b: 0.26666668, a: 1.0 }; // #444444
pub const DEFAULT_PROGRESS: i32 = 30;
pub const DEFAULT_PROGRESS_MAX: i32 = 100;
pub const DEFAULT_STROKE_WIDTH_DP: f32 = 4.0;
pub const DEFAULT_TEXT_SIZE: f32 = 30.0;
pub const DEFAULT_TYPEFACE: &str = "assets/fonts/DejaVuSans-ExtraLight.ttf";

// Preferred side length when the parent does not impose one.
const DEFAULT_SIZE: f32 = 100.0;
// Arc origin: 12 o'clock.
const START_ANGLE: f32 = -90.0;
// Baseline offset of the percent glyph below the label's vertical center.
const PERCENT_OFFSET_DP: f32 = 20.0;

/// Circular progress indicator: a background ring, a foreground arc covering
/// `progress / max` of the circle, and an optional centered "NN%" label.
///
/// Every setter is a no-op when the value is unchanged; otherwise it updates
/// the owned paints in place and leaves a redraw request for the host.
#[derive(Debug, Clone)]
pub struct CircleProgressView {
    foreground_color: Color,
    background_color: Color,
    text_color: Color,
    percent_color: Color,
    stroke_width: f32,
    text_size: f32,
    progress: i32,
    max: i32,
    show_text: bool,
    fill_background: bool,
    metrics: DisplayMetrics,

    background_paint: ShapePaint,
    foreground_paint: ShapePaint,
    text_paint: TextPaint,
    percent_paint: TextPaint,

    layout_rect: Rect,
    redraw_requested: bool,
}

impl CircleProgressView {
    /// Create a view with every attribute at its default.
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self::from_style(&ProgressStyle::default(), metrics)
    }

    /// Create a view from style attributes; `stroke_width` is read as density-independent units.
    pub fn from_style(style: &ProgressStyle, metrics: DisplayMetrics) -> Self {
        let background_color = style.background_color.map(Color::from).unwrap_or(DEFAULT_BACKGROUND_COLOR);
        let foreground_color = style.foreground_color.map(Color::from).unwrap_or(DEFAULT_FOREGROUND_COLOR);
        let text_color = style.text_color.map(Color::from).unwrap_or(foreground_color);
        let percent_color = style.percent_color.map(Color::from).unwrap_or(text_color);
        let stroke_width_dp = style.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH_DP);
        let stroke_width = metrics.dp_to_px(stroke_width_dp);
        widget_log!(
            Debug,
            "Stroke width {}dp -> {}px at {} dpi",
            stroke_width_dp,
            stroke_width,
            metrics.density_dpi
        );
        let text_size = style.text_size.unwrap_or(DEFAULT_TEXT_SIZE);
        let fill_background = style.fill_background.unwrap_or(false);
        let typeface = match style.typeface.as_deref() {
            None => Some(DEFAULT_TYPEFACE.to_string()),
            Some(SYSTEM_TYPEFACE) => None,
            Some(path) => Some(path.to_string()),
        };

        let mut background_paint = ShapePaint::new(background_color);
        background_paint.cap = StrokeCap::Round;
        background_paint.stroke_width = stroke_width;
        background_paint.style = Self::ring_style(fill_background);

        let mut foreground_paint = ShapePaint::new(foreground_color);
        foreground_paint.style = PaintStyle::Stroke;
        foreground_paint.cap = StrokeCap::Round;
        foreground_paint.stroke_width = stroke_width;

        let mut text_paint = TextPaint::new(text_color, text_size);
        text_paint.typeface = typeface;

        let percent_paint = TextPaint::new(percent_color, text_size / 3.0);

        Self {
            foreground_color,
            background_color,
            text_color,
            percent_color,
            stroke_width,
            text_size,
            progress: style.progress.unwrap_or(DEFAULT_PROGRESS),
            max: style.max.unwrap_or(DEFAULT_PROGRESS_MAX),
            show_text: style.show_text.unwrap_or(false),
            fill_background,
            metrics,
            background_paint,
            foreground_paint,
            text_paint,
            percent_paint,
            layout_rect: Rect::default(),
            // Never drawn yet
            redraw_requested: true,
        }
    }

    fn ring_style(fill_background: bool) -> PaintStyle {
        if fill_background {
            PaintStyle::FillAndStroke
        } else {
            PaintStyle::Stroke
        }
    }

    /// Degrees of arc for the current progress.
    ///
    /// Not guarded: `max == 0` yields an infinite (or NaN, for zero progress)
    /// angle. `draw` skips the arc in that case.
    pub fn sweep_angle(&self) -> f32 {
        360.0 * self.progress as f32 / self.max as f32
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Returns whether a redraw was requested since the last call, and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }

    /// Rect the ring and arc were last drawn in.
    pub fn layout_rect(&self) -> Rect {
        self.layout_rect
    }

    pub fn display_metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    /// Font asset used by the progress label, `None` for the host default.
    pub fn typeface(&self) -> Option<&str> {
        self.text_paint.typeface.as_deref()
    }

    pub fn foreground_color(&self) -> Color {
        self.foreground_color
    }

    pub fn set_foreground_color(&mut self, color: Color) {
        if self.foreground_color == color {
            return;
        }
        self.foreground_color = color;
        self.foreground_paint.color = color;
        self.invalidate();
    }

    /// Color of the ring track behind the arc. This is not a widget background fill.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        if self.background_color == color {
            return;
        }
        self.background_color = color;
        self.background_paint.color = color;
        self.invalidate();
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        if self.text_color == color {
            return;
        }
        self.text_color = color;
        self.text_paint.color = color;
        self.invalidate();
    }

    pub fn percent_color(&self) -> Color {
        self.percent_color
    }

    pub fn set_percent_color(&mut self, color: Color) {
        if self.percent_color == color {
            return;
        }
        self.percent_color = color;
        self.percent_paint.color = color;
        self.invalidate();
    }

    /// Stroke width in device pixels.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Sets the stroke width in device pixels (no density scaling).
    pub fn set_stroke_width(&mut self, stroke_width: f32) {
        if self.stroke_width == stroke_width {
            return;
        }
        self.stroke_width = stroke_width;
        self.background_paint.stroke_width = stroke_width;
        self.foreground_paint.stroke_width = stroke_width;
        self.invalidate();
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn set_text_size(&mut self, text_size: f32) {
        if self.text_size == text_size {
            return;
        }
        self.text_size = text_size;
        self.text_paint.size = text_size;
        self.percent_paint.size = text_size / 3.0;
        self.invalidate();
    }

    pub fn progress(&self) -> i32 {
        self.progress
    }

    pub fn set_progress(&mut self, progress: i32) {
        if self.progress == progress {
            return;
        }
        widget_log!(log::Level::Trace, "Progress {} -> {}", self.progress, progress);
        self.progress = progress;
        self.invalidate();
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn set_max(&mut self, max: i32) {
        if self.max == max {
            return;
        }
        self.max = max;
        self.invalidate();
    }

    pub fn show_text(&self) -> bool {
        self.show_text
    }

    pub fn set_show_text(&mut self, show_text: bool) {
        if self.show_text == show_text {
            return;
        }
        self.show_text = show_text;
        self.invalidate();
    }

    pub fn fill_background(&self) -> bool {
        self.fill_background
    }

    pub fn set_fill_background(&mut self, fill_background: bool) {
        if self.fill_background == fill_background {
            return;
        }
        self.fill_background = fill_background;
        self.background_paint.style = Self::ring_style(fill_background);
        self.invalidate();
    }

    fn draw_text<C: DrawContext>(&self, ctx: &mut C, text: &str) {
        let clip = ctx.clip_bounds();
        let cx = clip.center_x();
        let cy = clip.center_y();

        let bounds = ctx.text_bounds(text, &self.text_paint);
        let x = cx - bounds.width() / 2.0 - bounds.left;
        let text_height = bounds.height();
        let y = cy + text_height / 2.0 - bounds.bottom;
        ctx.draw_text(text, x, y, &self.text_paint);

        let bounds = ctx.text_bounds(PERCENT, &self.percent_paint);
        let x = cx - bounds.width() / 2.0 - bounds.left;
        let y = cy + text_height / 2.0 + self.metrics.dp_to_px(PERCENT_OFFSET_DP);
        ctx.draw_text(PERCENT, x, y, &self.percent_paint);
    }
}

impl Widget for CircleProgressView {
    fn measure(&self, constraints: Constraints) -> Size {
        let width = constraints.width.resolve(DEFAULT_SIZE);
        let height = constraints.height.resolve(DEFAULT_SIZE);
        let size = width.min(height);
        Size { width: size, height: size }
    }

    fn draw<C: DrawContext>(&mut self, ctx: &mut C, bounds: WidgetGeometry) {
        let middle_stroke = self.background_paint.stroke_width / 2.0;
        self.layout_rect = bounds.to_rect().inset(middle_stroke);
        ctx.draw_oval(self.layout_rect, &self.background_paint);

        let angle = self.sweep_angle();
        if !angle.is_finite() {
            widget_log!(
                Warn,
                "Skipping progress arc: sweep angle {} (progress {}, max {})",
                angle,
                self.progress,
                self.max
            );
        } else if angle != 0.0 {
            // A zero sweep would still leave a round-capped dot at 12 o'clock
            ctx.draw_arc(self.layout_rect, START_ANGLE, angle, false, &self.foreground_paint);
        }

        if self.show_text {
            let label = self.progress.to_string();
            self.draw_text(ctx, &label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::ColorValue;
    use crate::ui::widgets::MeasureSpec;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Oval(Rect, ShapePaint),
        Arc { rect: Rect, start: f32, sweep: f32, use_center: bool, paint: ShapePaint },
        Text { text: String, x: f32, y: f32, paint: TextPaint },
    }

    /// Records draw calls. Every glyph is 10px wide, spanning 0.7em above the baseline and 0.2em below.
    struct RecordingContext {
        clip: Rect,
        ops: Vec<Op>,
    }

    impl RecordingContext {
        fn new(clip: Rect) -> Self {
            Self { clip, ops: Vec::new() }
        }

        fn texts(&self) -> Vec<&Op> {
            self.ops.iter().filter(|op| matches!(op, Op::Text { .. })).collect()
        }

        fn arcs(&self) -> Vec<&Op> {
            self.ops.iter().filter(|op| matches!(op, Op::Arc { .. })).collect()
        }
    }

    impl DrawContext for RecordingContext {
        fn clip_bounds(&self) -> Rect {
            self.clip
        }

        fn draw_oval(&mut self, rect: Rect, paint: &ShapePaint) {
            self.ops.push(Op::Oval(rect, paint.clone()));
        }

        fn draw_arc(&mut self, rect: Rect, start: f32, sweep: f32, use_center: bool, paint: &ShapePaint) {
            self.ops.push(Op::Arc { rect, start, sweep, use_center, paint: paint.clone() });
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &TextPaint) {
            self.ops.push(Op::Text { text: text.to_string(), x, y, paint: paint.clone() });
        }

        fn text_bounds(&mut self, text: &str, paint: &TextPaint) -> Rect {
            let width = 10.0 * text.chars().count() as f32;
            Rect::new(1.0, -0.7 * paint.size, 1.0 + width, 0.2 * paint.size)
        }
    }

    fn draw_at(view: &mut CircleProgressView, size: f32) -> RecordingContext {
        let bounds = WidgetGeometry::new(0.0, 0.0, size, size);
        let mut ctx = RecordingContext::new(bounds.to_rect());
        view.draw(&mut ctx, bounds);
        ctx
    }

    #[test]
    fn test_defaults() {
        let view = CircleProgressView::new(DisplayMetrics::default());
        assert_eq!(view.progress(), 30);
        assert_eq!(view.max(), 100);
        assert_eq!(view.text_size(), 30.0);
        assert_eq!(view.stroke_width(), 4.0);
        assert!(!view.show_text());
        assert!(!view.fill_background());
        assert_eq!(view.background_color(), DEFAULT_BACKGROUND_COLOR);
        assert_eq!(view.foreground_color(), DEFAULT_FOREGROUND_COLOR);
        assert_eq!(view.text_color(), DEFAULT_FOREGROUND_COLOR);
        assert_eq!(view.percent_color(), DEFAULT_FOREGROUND_COLOR);
        assert_eq!(view.typeface(), Some(DEFAULT_TYPEFACE));
        assert_eq!(view.sweep_angle(), 108.0);
    }

    #[test]
    fn test_color_defaults_chain() {
        let style = ProgressStyle {
            foreground_color: Some(ColorValue::Rgb([255, 0, 0])),
            ..Default::default()
        };
        let view = CircleProgressView::from_style(&style, DisplayMetrics::default());
        assert_eq!(view.text_color(), Color::rgb(255, 0, 0));
        assert_eq!(view.percent_color(), Color::rgb(255, 0, 0));

        let style = ProgressStyle {
            foreground_color: Some(ColorValue::Rgb([255, 0, 0])),
            text_color: Some(ColorValue::Rgb([0, 255, 0])),
            ..Default::default()
        };
        let view = CircleProgressView::from_style(&style, DisplayMetrics::default());
        assert_eq!(view.text_color(), Color::rgb(0, 255, 0));
        assert_eq!(view.percent_color(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_stroke_width_is_scaled_by_density() {
        let style = ProgressStyle {
            stroke_width: Some(6.0),
            ..Default::default()
        };
        let view = CircleProgressView::from_style(&style, DisplayMetrics::new(320.0));
        assert_eq!(view.stroke_width(), 12.0);

        let view = CircleProgressView::new(DisplayMetrics::new(480.0));
        assert_eq!(view.stroke_width(), 12.0);
    }

    #[test]
    fn test_system_typeface() {
        let style = ProgressStyle {
            typeface: Some(SYSTEM_TYPEFACE.to_string()),
            ..Default::default()
        };
        let view = CircleProgressView::from_style(&style, DisplayMetrics::default());
        assert_eq!(view.typeface(), None);
    }

    #[test]
    fn test_measure_is_square_of_smaller_side() {
        let view = CircleProgressView::new(DisplayMetrics::default());
        let cases = vec![
            (MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(200.0), 200.0),
            (MeasureSpec::Exactly(300.0), MeasureSpec::Unspecified, 100.0),
            (MeasureSpec::AtMost(300.0), MeasureSpec::AtMost(400.0), 100.0),
            (MeasureSpec::AtMost(60.0), MeasureSpec::Exactly(400.0), 60.0),
            (MeasureSpec::Unspecified, MeasureSpec::Unspecified, 100.0),
            (MeasureSpec::Exactly(50.0), MeasureSpec::AtMost(80.0), 50.0),
        ];

        for (width, height, expected) in cases {
            let size = view.measure(Constraints::new(width, height));
            assert_eq!(size, Size { width: expected, height: expected }, "{width:?} x {height:?}");
        }
    }

    #[test]
    fn test_draw_ring_and_arc() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        let ctx = draw_at(&mut view, 200.0);

        let expected_rect = Rect::new(2.0, 2.0, 198.0, 198.0);
        assert_eq!(view.layout_rect(), expected_rect);
        assert_eq!(ctx.ops.len(), 2);

        match &ctx.ops[0] {
            Op::Oval(rect, paint) => {
                assert_eq!(*rect, expected_rect);
                assert_eq!(paint.style, PaintStyle::Stroke);
                assert_eq!(paint.cap, StrokeCap::Round);
                assert_eq!(paint.color, DEFAULT_BACKGROUND_COLOR);
                assert_eq!(paint.stroke_width, 4.0);
            }
            op => panic!("expected oval, got {op:?}"),
        }
        match &ctx.ops[1] {
            Op::Arc { rect, start, sweep, use_center, paint } => {
                assert_eq!(*rect, expected_rect);
                assert_eq!(*start, -90.0);
                assert_eq!(*sweep, 108.0);
                assert!(!use_center);
                assert_eq!(paint.style, PaintStyle::Stroke);
                assert_eq!(paint.cap, StrokeCap::Round);
                assert_eq!(paint.color, DEFAULT_FOREGROUND_COLOR);
            }
            op => panic!("expected arc, got {op:?}"),
        }
    }

    #[test]
    fn test_layout_rect_follows_bounds_offset() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        view.set_stroke_width(10.0);
        let bounds = WidgetGeometry::new(50.0, 20.0, 120.0, 120.0);
        let mut ctx = RecordingContext::new(bounds.to_rect());
        view.draw(&mut ctx, bounds);
        assert_eq!(view.layout_rect(), Rect::new(55.0, 25.0, 165.0, 135.0));
    }

    #[test]
    fn test_sweep_angle_is_proportional() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        let cases = vec![(0, 100, 0.0), (50, 100, 180.0), (100, 100, 360.0), (150, 100, 540.0), (-25, 100, -90.0), (1, 3, 120.0)];
        for (progress, max, expected) in cases {
            view.set_max(max);
            view.set_progress(progress);
            assert!((view.sweep_angle() - expected).abs() < 1e-4, "{progress}/{max}");

            let ctx = draw_at(&mut view, 100.0);
            match ctx.arcs()[..] {
                [] => assert_eq!(expected, 0.0, "{progress}/{max}"),
                [Op::Arc { start, sweep, .. }] => {
                    assert_eq!(*start, -90.0);
                    assert!((sweep - expected).abs() < 1e-4);
                }
                _ => panic!("expected at most one arc for {progress}/{max}"),
            }
        }
    }

    #[test]
    fn test_zero_progress_draws_ring_only() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        view.set_progress(0);
        view.set_show_text(true);
        let ctx = draw_at(&mut view, 100.0);

        assert!(ctx.arcs().is_empty());
        assert!(matches!(ctx.ops[0], Op::Oval(..)));
        // The label still reads "0"
        assert!(matches!(ctx.texts()[0], Op::Text { text, .. } if text == "0"));
    }

    #[test]
    fn test_zero_max_reproduces_unguarded_division() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        view.set_max(0);
        view.set_progress(10);
        assert!(view.sweep_angle().is_infinite());

        view.set_progress(0);
        assert!(view.sweep_angle().is_nan());

        // The ring is still drawn; the undefined arc is not handed to the surface.
        let ctx = draw_at(&mut view, 100.0);
        assert!(ctx.arcs().is_empty());
        assert!(matches!(ctx.ops[0], Op::Oval(..)));
    }

    #[test]
    fn test_setter_with_same_value_requests_no_redraw() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        assert!(view.take_redraw_request());
        assert!(!view.needs_redraw());

        view.set_progress(50);
        assert!(view.take_redraw_request());
        view.set_progress(50);
        assert!(!view.take_redraw_request());

        view.set_max(100);
        view.set_text_size(30.0);
        view.set_stroke_width(4.0);
        view.set_foreground_color(DEFAULT_FOREGROUND_COLOR);
        view.set_background_color(DEFAULT_BACKGROUND_COLOR);
        view.set_text_color(DEFAULT_FOREGROUND_COLOR);
        view.set_percent_color(DEFAULT_FOREGROUND_COLOR);
        view.set_show_text(false);
        view.set_fill_background(false);
        assert!(!view.needs_redraw());
    }

    #[test]
    fn test_getters_return_last_set_value() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        view.set_foreground_color(Color::rgb(1, 2, 3));
        view.set_background_color(Color::rgb(4, 5, 6));
        view.set_text_color(Color::rgb(7, 8, 9));
        view.set_percent_color(Color::rgb(10, 11, 12));
        view.set_stroke_width(-3.0);
        view.set_text_size(64.0);
        view.set_progress(-7);
        view.set_max(0);
        view.set_show_text(true);
        view.set_fill_background(true);

        assert_eq!(view.foreground_color(), Color::rgb(1, 2, 3));
        assert_eq!(view.background_color(), Color::rgb(4, 5, 6));
        assert_eq!(view.text_color(), Color::rgb(7, 8, 9));
        assert_eq!(view.percent_color(), Color::rgb(10, 11, 12));
        assert_eq!(view.stroke_width(), -3.0);
        assert_eq!(view.text_size(), 64.0);
        assert_eq!(view.progress(), -7);
        assert_eq!(view.max(), 0);
        assert!(view.show_text());
        assert!(view.fill_background());
        assert!(view.needs_redraw());
    }

    #[test]
    fn test_paints_follow_setters() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        view.set_show_text(true);
        view.set_fill_background(true);
        view.set_background_color(Color::rgb(10, 10, 10));
        view.set_foreground_color(Color::rgb(20, 20, 20));
        view.set_text_color(Color::rgb(30, 30, 30));
        view.set_percent_color(Color::rgb(40, 40, 40));
        view.set_stroke_width(8.0);
        view.set_text_size(60.0);

        let ctx = draw_at(&mut view, 200.0);
        match &ctx.ops[0] {
            Op::Oval(rect, paint) => {
                assert_eq!(*rect, Rect::new(4.0, 4.0, 196.0, 196.0));
                assert_eq!(paint.style, PaintStyle::FillAndStroke);
                assert_eq!(paint.color, Color::rgb(10, 10, 10));
                assert_eq!(paint.stroke_width, 8.0);
            }
            op => panic!("expected oval, got {op:?}"),
        }
        match ctx.arcs()[0] {
            Op::Arc { paint, .. } => {
                assert_eq!(paint.color, Color::rgb(20, 20, 20));
                assert_eq!(paint.stroke_width, 8.0);
            }
            _ => unreachable!(),
        }
        match ctx.texts()[..] {
            [Op::Text { paint: label, .. }, Op::Text { paint: percent, .. }] => {
                assert_eq!(label.color, Color::rgb(30, 30, 30));
                assert_eq!(label.size, 60.0);
                assert_eq!(label.typeface.as_deref(), Some(DEFAULT_TYPEFACE));
                assert_eq!(percent.color, Color::rgb(40, 40, 40));
                assert_eq!(percent.size, 20.0);
                assert_eq!(percent.typeface, None);
            }
            _ => panic!("expected label and percent glyph"),
        }
    }

    #[test]
    fn test_text_hidden_by_default() {
        let mut view = CircleProgressView::new(DisplayMetrics::default());
        let ctx = draw_at(&mut view, 100.0);
        assert!(ctx.texts().is_empty());
    }

    #[test]
    fn test_label_is_centered_in_clip_bounds() {
        let mut view = CircleProgressView::new(DisplayMetrics::new(320.0));
        view.set_show_text(true);
        view.set_progress(42);
        let ctx = draw_at(&mut view, 200.0);

        match ctx.texts()[..] {
            [Op::Text { text: label, x: lx, y: ly, .. }, Op::Text { text: percent, x: px, y: py, .. }] => {
                assert_eq!(label, "42");
                assert_eq!(percent, "%");

                // Label bounds at 30px: left 1, width 20, top -21, bottom 6 (height 27).
                assert!((lx - (100.0 - 10.0 - 1.0)).abs() < 1e-4);
                assert!((ly - (100.0 + 13.5 - 6.0)).abs() < 1e-4);

                // Percent bounds: width 10; baseline 20dp (40px at 320 dpi) under the label center.
                assert!((px - (100.0 - 5.0 - 1.0)).abs() < 1e-4);
                assert!((py - (100.0 + 13.5 + 40.0)).abs() < 1e-4);
            }
            _ => panic!("expected label and percent glyph"),
        }
    }
}
