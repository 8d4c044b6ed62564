use femtovg::{Canvas, renderer::Renderer, Color};
use crate::ui::canvas::{FemtovgSurface, FontRegistry};
use crate::ui::widgets::{Constraints, MeasureSpec, Widget, WidgetGeometry};

// Window clear color. The widget's own background color only tints its ring.
const CLEAR_COLOR: Color = Color { r: 0.96, g: 0.96, b: 0.96, a: 1.0 };

/// Lays out `widget` centered in the canvas, within the largest square that fits.
pub fn layout_centered<W: Widget>(widget: &W, canvas_width: f32, canvas_height: f32) -> WidgetGeometry {
    let size = widget.measure(Constraints::new(
        MeasureSpec::Exactly(canvas_width),
        MeasureSpec::Exactly(canvas_height),
    ));
    WidgetGeometry::new(
        (canvas_width - size.width) / 2.0,
        (canvas_height - size.height) / 2.0,
        size.width,
        size.height,
    )
}

pub fn render_ui<R: Renderer, W: Widget>(canvas: &mut Canvas<R>, fonts: &FontRegistry, widget: &mut W) {
    canvas.clear_rect(0, 0, canvas.width() as u32, canvas.height() as u32, CLEAR_COLOR);

    let geometry = layout_centered(widget, canvas.width() as f32, canvas.height() as f32);
    {
        let mut surface = FemtovgSurface::new(canvas, fonts, geometry.to_rect());
        widget.draw(&mut surface, geometry);
    }

    canvas.flush();
}
