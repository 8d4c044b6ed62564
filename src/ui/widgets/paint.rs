use femtovg::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
    FillAndStroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    Butt,
    Round,
    Square,
}

/// Style for ovals and arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePaint {
    pub color: Color,
    pub stroke_width: f32,
    pub style: PaintStyle,
    pub cap: StrokeCap,
    pub anti_alias: bool,
}

impl ShapePaint {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            stroke_width: 1.0,
            style: PaintStyle::Fill,
            cap: StrokeCap::Butt,
            anti_alias: true,
        }
    }

    pub fn fills(&self) -> bool {
        matches!(self.style, PaintStyle::Fill | PaintStyle::FillAndStroke)
    }

    pub fn strokes(&self) -> bool {
        matches!(self.style, PaintStyle::Stroke | PaintStyle::FillAndStroke)
    }
}

/// Style for text runs. `typeface` is a font asset path, `None` means the host default font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    pub size: f32,
    pub typeface: Option<String>,
    pub anti_alias: bool,
}

impl TextPaint {
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            color,
            size,
            typeface: None,
            anti_alias: true,
        }
    }
}
