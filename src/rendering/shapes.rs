use glam::Vec2;
use tiny_skia::*;

pub fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

pub fn stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        ..Default::default()
    }
}

pub fn dashed(width: f32, on: f32, off: f32) -> Stroke {
    let mut stroke = stroke(width);
    stroke.line_cap = LineCap::Butt;
    stroke.dash = StrokeDash::new(vec![on, off], 0.0);
    stroke
}

pub fn polygon_path(points: &[Vec2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

pub fn polyline_path<I>(points: I) -> Option<Path>
where
    I: IntoIterator<Item = Vec2>,
{
    let mut pb = PathBuilder::new();
    let mut started = false;
    for p in points {
        if started {
            pb.line_to(p.x, p.y);
        } else {
            pb.move_to(p.x, p.y);
            started = true;
        }
    }
    pb.finish()
}

pub fn fill_polygon(canvas: &mut Pixmap, points: &[Vec2], color: Color, transform: Transform) {
    if let Some(path) = polygon_path(points) {
        canvas.fill_path(&path, &solid(color), FillRule::Winding, transform, None);
    }
}

pub fn line(canvas: &mut Pixmap, from: Vec2, to: Vec2, color: Color, stroke: &Stroke, transform: Transform) {
    if let Some(path) = polyline_path([from, to]) {
        canvas.stroke_path(&path, &solid(color), stroke, transform, None);
    }
}

pub fn fill_circle(canvas: &mut Pixmap, center: Vec2, radius: f32, color: Color, transform: Transform) {
    if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
        canvas.fill_path(&path, &solid(color), FillRule::Winding, transform, None);
    }
}

pub fn fill_rect(canvas: &mut Pixmap, x: f32, y: f32, w: f32, h: f32, color: Color, transform: Transform) {
    if let Some(rect) = Rect::from_xywh(x, y, w, h) {
        canvas.fill_rect(rect, &solid(color), transform, None);
    }
}

pub fn stroke_rect(
    canvas: &mut Pixmap,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: Color,
    stroke: &Stroke,
) {
    if let Some(rect) = Rect::from_xywh(x, y, w, h) {
        let path = PathBuilder::from_rect(rect);
        canvas.stroke_path(&path, &solid(color), stroke, Transform::identity(), None);
    }
}

/// Covers the whole canvas with `color` at `alpha`. No-op when fully transparent.
pub fn overlay(canvas: &mut Pixmap, color: Color, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let mut color = color;
    color.set_alpha(alpha.min(1.0));
    fill_rect(
        canvas,
        0.0,
        0.0,
        canvas.width() as f32,
        canvas.height() as f32,
        color,
        Transform::identity(),
    );
}

/// Vertical two-stop gradient over a rectangle.
pub fn vertical_gradient(canvas: &mut Pixmap, rect: Rect, top: Color, bottom: Color) {
    let shader = LinearGradient::new(
        Point::from_xy(rect.x(), rect.top()),
        Point::from_xy(rect.x(), rect.bottom()),
        vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
        SpreadMode::Pad,
        Transform::identity(),
    );
    let mut paint = Paint::default();
    match shader {
        Some(shader) => paint.shader = shader,
        None => paint.set_color(top),
    }
    canvas.fill_rect(rect, &paint, Transform::identity(), None);
}
