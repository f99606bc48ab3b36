use glam::{DVec2, Vec2};
use tiny_skia::{Color, Pixmap, Transform};

use crate::rendering::shapes::{
    dashed, fill_circle, fill_polygon, fill_rect, line, overlay, polyline_path, solid, stroke,
};
use crate::rendering::sprite::AircraftSprite;
use crate::rendering::terrain::{visible_features, FeatureKind, TerrainFeature};
use crate::rendering::text::PixelFont;
use crate::rendering::types::{hex, rgba, Palette};
use crate::session::SimulationSession;
use crate::utils::bearing_vector;

const GRID_SPACING: f32 = 150.0;
const RADIAL_STEP_DEG: usize = 20;
const RADIAL_LENGTH: f64 = 30_000.0;
const RADIAL_LABEL_DISTANCE: f64 = 400.0;
const STATION_CAPTION_DROP: f32 = 25.0;
const STATION_RADIUS: f32 = 12.0;
const TERRAIN_RANGE: f64 = 1000.0;
const HOMING_STATION_RANGE: f64 = 1500.0;

/// World to screen for the north-up map, aircraft pinned at the centre.
#[derive(Debug, Clone, Copy)]
pub struct MapView {
    pub origin: DVec2,
    pub center: Vec2,
    pub scale: f32,
}

impl MapView {
    pub fn to_screen(&self, world: DVec2) -> Vec2 {
        let offset = (world - self.origin).as_vec2();
        self.center + offset * self.scale
    }
}

/// Top-down moving map.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    terrain: Vec<TerrainFeature>,
    sprite: AircraftSprite,
}

impl MapRenderer {
    pub fn new(terrain: Vec<TerrainFeature>, sprite: AircraftSprite) -> Self {
        Self { terrain, sprite }
    }

    pub fn terrain(&self) -> &[TerrainFeature] {
        &self.terrain
    }

    pub fn render(&self, canvas: &mut Pixmap, session: &SimulationSession, scale: f32) {
        let palette = Palette::new(session.environment().time_of_day, session.archetype());
        let aircraft = session.aircraft();
        let view = MapView {
            origin: aircraft.position,
            center: Vec2::new(canvas.width() as f32 / 2.0, canvas.height() as f32 / 2.0),
            scale,
        };

        canvas.fill(palette.map_background());

        if palette.chart_style {
            self.draw_radials(canvas, &view, session.station().position);
        } else {
            self.draw_grid(canvas, &view, palette.grid());
        }

        if palette.homing {
            self.draw_terrain(canvas, &view);
        }

        self.draw_trail(canvas, &view, session);

        let station = session.station().position;
        let hidden = palette.homing && aircraft.position.distance(station) > HOMING_STATION_RANGE;
        if !hidden {
            draw_station(canvas, view.to_screen(station), palette.chart_style);
        }

        self.sprite.draw(canvas, view.center, aircraft.heading as f32);

        overlay(canvas, palette.map_fog(), session.environment().fog_alpha() as f32);
    }

    fn draw_radials(&self, canvas: &mut Pixmap, view: &MapView, station: DVec2) {
        let from = view.to_screen(station);
        let radial_stroke = stroke(1.0);
        let labels = PixelFont::new(10.0, hex(0x3b82f6));
        for bearing in (0..360).step_by(RADIAL_STEP_DEG) {
            let direction = bearing_vector(bearing as f64);
            line(
                canvas,
                from,
                view.to_screen(station + direction * RADIAL_LENGTH),
                hex(0x3b82f6),
                &radial_stroke,
                Transform::identity(),
            );
            let label_at = view.to_screen(station + direction * RADIAL_LABEL_DISTANCE);
            labels.draw_centered(canvas, &radial_label(bearing), label_at);
        }
    }

    fn draw_grid(&self, canvas: &mut Pixmap, view: &MapView, color: Color) {
        let spacing = GRID_SPACING * view.scale;
        if spacing < 2.0 {
            return;
        }
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let origin = view.to_screen(DVec2::ZERO);
        let start_x = origin.x.rem_euclid(spacing);
        let start_y = origin.y.rem_euclid(spacing);
        let grid_stroke = stroke(1.0);

        let mut x = start_x;
        while x <= width {
            line(canvas, Vec2::new(x, 0.0), Vec2::new(x, height), color, &grid_stroke, Transform::identity());
            x += spacing;
        }
        let mut y = start_y;
        while y <= height {
            line(canvas, Vec2::new(0.0, y), Vec2::new(width, y), color, &grid_stroke, Transform::identity());
            y += spacing;
        }
    }

    fn draw_terrain(&self, canvas: &mut Pixmap, view: &MapView) {
        for feature in visible_features(&self.terrain, view.origin, TERRAIN_RANGE) {
            let at = view.to_screen(feature.position);
            let size = feature.size as f32 * view.scale;
            match feature.kind {
                FeatureKind::Tree | FeatureKind::Bush => {
                    let color = if feature.kind == FeatureKind::Tree {
                        hex(0x1e3314)
                    } else {
                        hex(0x3a5a2b)
                    };
                    fill_circle(canvas, at, size, color, Transform::identity());
                }
                FeatureKind::Dirt => {
                    let transform = Transform::from_translate(at.x, at.y)
                        .pre_rotate((feature.rotation as f32).to_degrees());
                    fill_rect(canvas, -size / 2.0, -size / 4.0, size, size / 2.0, hex(0x4a3c2a), transform);
                }
            }
        }
    }

    fn draw_trail(&self, canvas: &mut Pixmap, view: &MapView, session: &SimulationSession) {
        if session.trail().len() < 2 {
            return;
        }
        let points = session
            .trail()
            .points()
            .map(|p| view.to_screen(*p))
            .chain(std::iter::once(view.center));
        if let Some(path) = polyline_path(points) {
            canvas.stroke_path(
                &path,
                &solid(hex(0xef4444)),
                &dashed(2.5, 8.0, 6.0),
                Transform::identity(),
                None,
            );
        }
    }
}

/// Three-digit radial label, `000` through `340`.
pub fn radial_label(bearing: usize) -> String {
    format!("{:03}", bearing % 360)
}

fn draw_station(canvas: &mut Pixmap, at: Vec2, chart_style: bool) {
    let hexagon: Vec<Vec2> = (0..6)
        .map(|i| {
            let angle = ((i * 60) as f32 - 30.0).to_radians();
            at + Vec2::new(angle.cos(), angle.sin()) * STATION_RADIUS
        })
        .collect();

    let (fill, outline) = if chart_style {
        (hex(0x3b82f6), hex(0x000000))
    } else {
        (hex(0x1d4ed8), hex(0x3b82f6))
    };
    fill_polygon(canvas, &hexagon, fill, Transform::identity());

    let mut closed = hexagon.clone();
    closed.push(hexagon[0]);
    if let Some(path) = polyline_path(closed) {
        canvas.stroke_path(&path, &solid(outline), &stroke(2.0), Transform::identity(), None);
    }
    fill_circle(canvas, at, 2.0, rgba(0xffffff, 0xcc), Transform::identity());

    let caption = if chart_style { hex(0x000000) } else { hex(0xffffff) };
    PixelFont::new(12.0, caption).draw_centered(
        canvas,
        "VOR STATION",
        at + Vec2::new(0.0, STATION_CAPTION_DROP),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{EnvironmentPatch, SimConfig, TimeOfDay};

    fn share_of(canvas: &Pixmap, rgb: [u8; 3]) -> f32 {
        let matching = canvas
            .pixels()
            .iter()
            .filter(|px| [px.red(), px.green(), px.blue()] == rgb && px.alpha() == 255)
            .count();
        matching as f32 / canvas.pixels().len() as f32
    }

    fn render(mission_id: &str) -> Pixmap {
        let session = SimulationSession::new(SimConfig::default(), mission_id);
        let renderer = MapRenderer::new(Vec::new(), AircraftSprite::vector());
        let mut canvas = Pixmap::new(200, 120).unwrap();
        renderer.render(&mut canvas, &session, 1.0);
        canvas
    }

    #[test]
    fn test_view_pins_aircraft_to_center() {
        let view = MapView {
            origin: DVec2::new(100.0, -200.0),
            center: Vec2::new(50.0, 40.0),
            scale: 2.0,
        };
        assert_eq!(view.to_screen(DVec2::new(100.0, -200.0)), Vec2::new(50.0, 40.0));
        assert_eq!(view.to_screen(DVec2::new(110.0, -190.0)), Vec2::new(70.0, 60.0));
    }

    #[test]
    fn test_chart_background_is_white() {
        assert!(share_of(&render("f-outbound"), [255, 255, 255]) > 0.5);
    }

    #[test]
    fn test_homing_background_is_green() {
        assert!(share_of(&render("f-homing"), [0x2d, 0x4c, 0x1e]) > 0.5);
    }

    #[test]
    fn test_terrain_is_culled_around_aircraft() {
        let far = TerrainFeature {
            kind: FeatureKind::Tree,
            position: DVec2::new(1.0e6, 1.0e6),
            size: 30.0,
            rotation: 0.0,
        };
        let renderer = MapRenderer::new(vec![far], AircraftSprite::vector());
        assert_eq!(visible_features(renderer.terrain(), DVec2::ZERO, TERRAIN_RANGE).len(), 0);
    }

    #[test]
    fn test_radial_labels_are_zero_padded() {
        assert_eq!(radial_label(0), "000");
        assert_eq!(radial_label(20), "020");
        assert_eq!(radial_label(340), "340");
    }

    #[test]
    fn test_fog_covers_the_aircraft() {
        let mut session = SimulationSession::new(SimConfig::default(), "");
        session.set_environment(EnvironmentPatch {
            visibility: Some(0.1),
            time_of_day: Some(TimeOfDay::Night),
            ..Default::default()
        });
        let renderer = MapRenderer::new(Vec::new(), AircraftSprite::vector());
        let mut canvas = Pixmap::new(200, 120).unwrap();
        renderer.render(&mut canvas, &session, 1.0);

        let center = canvas.pixel(100, 60).unwrap();
        assert!(center.red() < 64, "aircraft shows through fog: {:?}", center);
    }
}
