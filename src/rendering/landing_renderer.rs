use glam::Vec2;
use nalgebra::Vector3;
use tiny_skia::{Color, Pixmap, Rect, Transform};

use crate::components::AircraftState;
use crate::rendering::digits::SevenSegment;
use crate::rendering::particles::ParticleBurst;
use crate::rendering::projection::LandingCamera;
use crate::rendering::shapes::{
    dashed, fill_circle, fill_polygon, fill_rect, line, overlay, polygon_path, solid, stroke,
    vertical_gradient,
};
use crate::rendering::text::PixelFont;
use crate::rendering::types::{hex, rgba, Palette};
use crate::resources::EnvironmentConfig;
use crate::utils::{RUNWAY_HALF_WIDTH, RUNWAY_LENGTH};

pub const HORIZON_PX_PER_DEGREE: f32 = 15.0;
const LIGHT_SPACING: f64 = 400.0;
const LIGHT_OFFSET: f64 = 105.0;
const GRID_SPACING: f64 = 500.0;
const GRID_HALF_WIDTH: f64 = 10_000.0;
const MODEL_DROP: f32 = 80.0;
const MODEL_SCALE: f32 = 3.0;
const MODEL_FOCAL: f32 = 400.0;
const VISIBILITY_FOR_LIGHTS: f64 = 5.0;

/// Screen row of the horizon for a given pitch.
pub fn horizon_y(height: f32, pitch: f64) -> f32 {
    height / 2.0 + pitch as f32 * HORIZON_PX_PER_DEGREE
}

/// Runway lights show at dusk, at night, or in reduced visibility.
pub fn runway_lights_visible(environment: &EnvironmentConfig) -> bool {
    !environment.is_day() || environment.visibility < VISIBILITY_FOR_LIGHTS
}

/// Depths of the crossing grid lines around the approach.
pub fn grid_depths(distance_to_threshold: f64, camera_z: f64) -> Vec<f64> {
    let base = -(distance_to_threshold / GRID_SPACING).floor() * GRID_SPACING;
    (-5..=20)
        .map(|i| base + i as f64 * GRID_SPACING)
        .filter(|z| *z < camera_z)
        .collect()
}

// Vertices of the chase-view aircraft, x right, y up, z forward.
const MODEL_VERTICES: [[f32; 3]; 10] = [
    [0.0, 0.0, 50.0],
    [0.0, 12.0, 10.0],
    [8.0, -5.0, 10.0],
    [-8.0, -5.0, 10.0],
    [0.0, 0.0, -50.0],
    [70.0, 2.0, 5.0],
    [-70.0, 2.0, 5.0],
    [0.0, 30.0, -45.0],
    [25.0, 2.0, -45.0],
    [-25.0, 2.0, -45.0],
];

// Back to front.
const MODEL_FACES: [(&[usize], u32); 5] = [
    (&[9, 4, 8], 0x64748b),
    (&[4, 7, 4], 0xef4444),
    (&[6, 0, 5, 4], 0xcbd5e1),
    (&[0, 2, 4, 3], 0x94a3b8),
    (&[1, 2, 3], 0x38bdf8),
];

fn project_model_vertex(vertex: [f32; 3], pitch_deg: f32) -> Vec2 {
    let [x, y, z] = vertex;
    let (sp, cp) = pitch_deg.to_radians().sin_cos();
    let y1 = y * cp - z * sp;
    let z1 = y * sp + z * cp;
    let scale = MODEL_FOCAL / (MODEL_FOCAL + z1 + 50.0) * MODEL_SCALE;
    Vec2::new(x * scale, -y1 * scale)
}

const FEET_PER_NM: f64 = 6076.0;
const HUD_LEFT: f32 = 20.0;
const HUD_TOP: f32 = 18.0;
const HUD_LINE: f32 = 20.0;

/// How the approach has ended so far, which decides what sits on top of the scene.
#[derive(Debug, Clone, Copy)]
pub enum LandingOutcome<'a> {
    Flying,
    Landed,
    Crashed(&'a ParticleBurst),
}

/// Approach readouts in the top-left corner.
pub fn hud_lines(aircraft: &AircraftState) -> [String; 4] {
    let offset = aircraft.landing.lateral_offset;
    [
        format!("ALT: {:.0} FT", aircraft.altitude),
        format!(
            "DST: {:.1} NM",
            aircraft.landing.distance_to_threshold / FEET_PER_NM
        ),
        format!(
            "OFFSET: {:.0} FT {}",
            offset.abs(),
            if offset > 0.0 { 'R' } else { 'L' }
        ),
        format!("VS: {:.0} FPM", aircraft.vertical_speed),
    ]
}

/// Pseudo-3D view down runway 36.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingRenderer;

impl LandingRenderer {
    pub fn render(
        &self,
        canvas: &mut Pixmap,
        aircraft: &AircraftState,
        environment: &EnvironmentConfig,
        palette: &Palette,
        outcome: LandingOutcome<'_>,
    ) {
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let horizon = horizon_y(height, aircraft.pitch).clamp(0.0, height);
        let geometry = aircraft.landing;

        let (sky_top, sky_bottom) = palette.sky();
        if let Some(sky) = Rect::from_xywh(0.0, 0.0, width, horizon.max(1.0)) {
            vertical_gradient(canvas, sky, sky_top, sky_bottom);
        }
        fill_rect(canvas, 0.0, horizon, width, height - horizon, palette.ground(), Transform::identity());

        let camera = LandingCamera::chase(
            geometry.lateral_offset,
            aircraft.altitude,
            geometry.distance_to_threshold,
            geometry.yaw,
            aircraft.pitch,
            Vec2::new(width / 2.0, height / 2.0),
        );

        self.draw_grid(canvas, &camera, geometry.distance_to_threshold, geometry.lateral_offset);
        self.draw_runway(canvas, &camera, environment);
        self.draw_shadow(canvas, &camera, aircraft);

        overlay(canvas, palette.landing_fog(), environment.fog_alpha() as f32);

        let model_center = Vec2::new(width / 2.0, height / 2.0 + MODEL_DROP);
        match outcome {
            LandingOutcome::Crashed(burst) => {
                draw_particles(canvas, burst, model_center);
                draw_crash_caption(canvas);
            }
            LandingOutcome::Landed => draw_model(canvas, aircraft, model_center),
            LandingOutcome::Flying => {
                draw_model(canvas, aircraft, model_center);
                draw_hud(canvas, aircraft);
            }
        }
    }

    fn draw_grid(&self, canvas: &mut Pixmap, camera: &LandingCamera, distance: f64, offset: f64) {
        let color = rgba(0xffffff, 0x1a);
        let grid_stroke = stroke(1.0);
        let center_x = (offset / GRID_SPACING).round() * GRID_SPACING;
        for z in grid_depths(distance, camera.position.z) {
            let from = camera.project(Vector3::new(center_x - GRID_HALF_WIDTH, 0.0, z));
            let to = camera.project(Vector3::new(center_x + GRID_HALF_WIDTH, 0.0, z));
            if let (Some(from), Some(to)) = (from, to) {
                line(canvas, from.point, to.point, color, &grid_stroke, Transform::identity());
            }
        }
    }

    fn draw_runway(&self, canvas: &mut Pixmap, camera: &LandingCamera, environment: &EnvironmentConfig) {
        // Clip the near edge in front of the camera once past the threshold
        let near = (camera.position.z - 50.0).min(0.0);
        let far = -RUNWAY_LENGTH;
        if near <= far {
            return;
        }

        let corners = [
            Vector3::new(-RUNWAY_HALF_WIDTH, 0.0, near),
            Vector3::new(RUNWAY_HALF_WIDTH, 0.0, near),
            Vector3::new(RUNWAY_HALF_WIDTH, 0.0, far),
            Vector3::new(-RUNWAY_HALF_WIDTH, 0.0, far),
        ];
        let projected: Option<Vec<Vec2>> = corners
            .iter()
            .map(|corner| camera.project(*corner).map(|p| p.point))
            .collect();
        let Some(quad) = projected else {
            return;
        };
        fill_polygon(canvas, &quad, hex(0x333333), Transform::identity());

        if let (Some(from), Some(to)) = (
            camera.project(Vector3::new(0.0, 0.0, near)),
            camera.project(Vector3::new(0.0, 0.0, far)),
        ) {
            line(canvas, from.point, to.point, Color::WHITE, &dashed(2.0, 30.0, 30.0), Transform::identity());
        }

        if runway_lights_visible(environment) {
            let count = (RUNWAY_LENGTH / LIGHT_SPACING) as i64;
            for i in 0..=count {
                let z = -(i as f64) * LIGHT_SPACING;
                if z > near {
                    continue;
                }
                for x in [-LIGHT_OFFSET, LIGHT_OFFSET] {
                    if let Some(light) = camera.project(Vector3::new(x, 2.0, z)) {
                        fill_rect(
                            canvas,
                            light.point.x - 1.0,
                            light.point.y - 1.0,
                            2.0,
                            2.0,
                            Color::WHITE,
                            Transform::identity(),
                        );
                    }
                }
            }
        }

        if let Some(designator) = camera.project(Vector3::new(-10.0, 0.0, -100.0)) {
            let size = 40.0 * designator.scale;
            if size >= 2.0 {
                SevenSegment::new(size, Color::WHITE).draw_centered(
                    canvas,
                    "36",
                    designator.point,
                    Transform::identity(),
                );
            }
        }
    }

    fn draw_shadow(&self, canvas: &mut Pixmap, camera: &LandingCamera, aircraft: &AircraftState) {
        let geometry = aircraft.landing;
        let Some(spot) = camera.project(Vector3::new(
            geometry.lateral_offset,
            0.0,
            geometry.distance_to_threshold,
        )) else {
            return;
        };
        let s = spot.scale;
        let transform = Transform::from_translate(spot.point.x, spot.point.y)
            .pre_rotate(geometry.yaw as f32)
            .pre_scale(s * 3.0, s * 1.5);
        let outline = [
            Vec2::new(0.0, -40.0),
            Vec2::new(60.0, 2.0),
            Vec2::new(0.0, 35.0),
            Vec2::new(-60.0, 2.0),
        ];
        fill_polygon(canvas, &outline, rgba(0x000000, 0x4d), transform);
    }
}

fn draw_model(canvas: &mut Pixmap, aircraft: &AircraftState, center: Vec2) {
    let transform = Transform::from_translate(center.x, center.y)
        .pre_rotate((aircraft.roll + aircraft.landing.yaw * 0.1) as f32);
    let points: Vec<Vec2> = MODEL_VERTICES
        .iter()
        .map(|v| project_model_vertex(*v, aircraft.pitch as f32))
        .collect();

    let edge = stroke(2.0);
    for (indices, color) in MODEL_FACES {
        let face: Vec<Vec2> = indices.iter().map(|i| points[*i]).collect();
        // Edge-on faces collapse to slivers from behind, so outline them too
        if let Some(path) = polygon_path(&face) {
            let paint = solid(hex(color));
            canvas.fill_path(&path, &paint, tiny_skia::FillRule::Winding, transform, None);
            canvas.stroke_path(&path, &paint, &edge, transform, None);
        }
    }
}

fn draw_hud(canvas: &mut Pixmap, aircraft: &AircraftState) {
    let font = PixelFont::new(12.0, hex(0x00ff00));
    for (i, text) in hud_lines(aircraft).iter().enumerate() {
        font.draw(canvas, text, Vec2::new(HUD_LEFT, HUD_TOP + i as f32 * HUD_LINE));
    }
}

fn draw_crash_caption(canvas: &mut Pixmap) {
    let center = Vec2::new(canvas.width() as f32 / 2.0, canvas.height() as f32 / 2.0);
    PixelFont::new(35.0, hex(0xff0000)).draw_centered(canvas, "CRITICAL FAILURE", center);
    PixelFont::new(18.0, hex(0xffffff)).draw_centered(
        canvas,
        "IMPACT WITH TERRAIN",
        center + Vec2::new(0.0, 40.0),
    );
}

fn draw_particles(canvas: &mut Pixmap, burst: &ParticleBurst, center: Vec2) {
    for particle in burst.particles() {
        fill_circle(
            canvas,
            center + particle.offset,
            particle.radius,
            particle.color(),
            Transform::identity(),
        );
    }
}
