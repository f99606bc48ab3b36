use glam::Vec2;
use tiny_skia::{Color, Pixmap, Rect, Transform};

use crate::components::NavigationReadout;
use crate::rendering::digits::SevenSegment;
use crate::rendering::shapes::{fill_circle, fill_polygon, fill_rect, line, stroke, stroke_rect};
use crate::rendering::types::{hex, rgba};
use crate::session::SimulationSession;

pub const SPEED_TICK_STEP: i64 = 20;
pub const SPEED_TICK_SPAN: i64 = 80;
pub const SPEED_PX_PER_KT: f32 = 2.5;
pub const ALTITUDE_TICK_STEP: i64 = 100;
pub const ALTITUDE_TICK_SPAN: i64 = 500;
pub const ALTITUDE_PX_PER_FT: f32 = 0.5;
pub const PITCH_PX_PER_DEGREE: f32 = 8.0;
pub const VSI_MAX_PX: f32 = 40.0;
pub const DEVIATION_PX: f32 = 40.0;

const TAPE_WIDTH: f32 = 80.0;
const VSI_WIDTH: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapeTick {
    pub value: i64,
    /// Pixels above the readout box (negative is below).
    pub offset: f32,
}

fn tape(current: f64, step: i64, span: i64, px_per_unit: f32) -> Vec<TapeTick> {
    let current = current.round() as i64;
    let base = ((current as f64 / step as f64).round() as i64) * step;
    (-span..=span)
        .step_by(step as usize)
        .map(|off| base + off)
        .filter(|value| *value >= 0)
        .map(|value| TapeTick {
            value,
            offset: (value - current) as f32 * px_per_unit,
        })
        .collect()
}

pub fn speed_tape(airspeed_kt: f64) -> Vec<TapeTick> {
    tape(airspeed_kt, SPEED_TICK_STEP, SPEED_TICK_SPAN, SPEED_PX_PER_KT)
}

pub fn altitude_tape(altitude_ft: f64) -> Vec<TapeTick> {
    tape(altitude_ft, ALTITUDE_TICK_STEP, ALTITUDE_TICK_SPAN, ALTITUDE_PX_PER_FT)
}

/// Value shown in a tape's boxed digital readout.
pub fn boxed_readout(value: f64) -> i64 {
    value.round() as i64
}

/// Lateral offset of the deviation bar, hidden inside the station cone.
pub fn deviation_bar_offset(readout: &NavigationReadout) -> Option<f32> {
    (!readout.is_off).then(|| readout.cdi_deflection as f32 * DEVIATION_PX)
}

pub fn vsi_bar_length(vertical_speed: f64) -> f32 {
    ((vertical_speed.abs() / 10.0) as f32).min(VSI_MAX_PX)
}

/// Horizon transform: rolled opposite to the aircraft and shifted by pitch.
pub fn attitude_transform(pitch: f64, roll: f64, center: Vec2) -> Transform {
    Transform::from_translate(center.x, center.y)
        .pre_rotate(-roll as f32)
        .pre_translate(0.0, pitch as f32 * PITCH_PX_PER_DEGREE)
}

/// Instrument values sampled from the session for one frame.
#[derive(Debug, Clone, Copy)]
pub struct EfisInputs {
    pub airspeed: f64,
    pub altitude: f64,
    pub vertical_speed: f64,
    pub pitch: f64,
    pub roll: f64,
    pub heading: f64,
    pub obs: f64,
    pub heading_bug: f64,
    pub readout: NavigationReadout,
}

impl EfisInputs {
    pub fn from_session(session: &SimulationSession) -> Self {
        let aircraft = session.aircraft();
        Self {
            airspeed: aircraft.airspeed_knots(),
            altitude: aircraft.altitude,
            vertical_speed: aircraft.vertical_speed,
            pitch: aircraft.pitch,
            roll: aircraft.roll,
            heading: aircraft.heading,
            obs: session.obs(),
            heading_bug: session.heading_bug(),
            readout: *session.readout(),
        }
    }
}

/// Paints the primary flight display and HSI strip.
#[derive(Debug, Clone, Copy, Default)]
pub struct EfisPanel;

impl EfisPanel {
    pub fn draw(&self, canvas: &mut Pixmap, inputs: &EfisInputs) {
        canvas.fill(hex(0x050505));
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let adi_width = (width * 0.45 - 2.0 * TAPE_WIDTH - VSI_WIDTH).max(60.0);
        let speed_x = 0.0;
        let adi_x = speed_x + TAPE_WIDTH;
        let alt_x = adi_x + adi_width;
        let vsi_x = alt_x + TAPE_WIDTH;
        let hsi_x = vsi_x + VSI_WIDTH;

        self.draw_attitude(canvas, inputs, Rect::from_xywh(adi_x, 0.0, adi_width, height));
        self.draw_tape(
            canvas,
            speed_x,
            height,
            &speed_tape(inputs.airspeed),
            boxed_readout(inputs.airspeed),
            hex(0x00ff00),
        );
        self.draw_tape(
            canvas,
            alt_x,
            height,
            &altitude_tape(inputs.altitude),
            boxed_readout(inputs.altitude),
            hex(0x00ffff),
        );
        self.draw_vsi(canvas, vsi_x, height, inputs.vertical_speed);

        let hsi_center = Vec2::new((hsi_x + width) / 2.0, height / 2.0);
        let radius = ((width - hsi_x) / 2.0).min(height / 2.0) - 16.0;
        if radius > 20.0 {
            self.draw_hsi(canvas, inputs, hsi_center, radius);
        }
    }

    fn draw_tape(
        &self,
        canvas: &mut Pixmap,
        x: f32,
        height: f32,
        ticks: &[TapeTick],
        readout: i64,
        readout_color: Color,
    ) {
        fill_rect(canvas, x, 0.0, TAPE_WIDTH, height, hex(0x111111), Transform::identity());
        let center_y = height / 2.0;
        let labels = SevenSegment::new(8.0, rgba(0xffffff, 0x80));
        let tick_stroke = stroke(1.0);

        for tick in ticks {
            let y = center_y - tick.offset;
            if !(0.0..=height).contains(&y) {
                continue;
            }
            line(
                canvas,
                Vec2::new(x + TAPE_WIDTH - 10.0, y),
                Vec2::new(x + TAPE_WIDTH - 2.0, y),
                rgba(0xffffff, 0x4d),
                &tick_stroke,
                Transform::identity(),
            );
            labels.draw(
                canvas,
                &tick.value.to_string(),
                Vec2::new(x + 6.0, y - 4.0),
                Transform::identity(),
            );
        }

        let box_height = 28.0;
        fill_rect(
            canvas,
            x + 4.0,
            center_y - box_height / 2.0,
            TAPE_WIDTH - 8.0,
            box_height,
            Color::BLACK,
            Transform::identity(),
        );
        stroke_rect(
            canvas,
            x + 4.0,
            center_y - box_height / 2.0,
            TAPE_WIDTH - 8.0,
            box_height,
            Color::WHITE,
            &stroke(1.0),
        );
        SevenSegment::new(16.0, readout_color).draw_centered(
            canvas,
            &readout.to_string(),
            Vec2::new(x + TAPE_WIDTH / 2.0, center_y),
            Transform::identity(),
        );
    }

    fn draw_attitude(&self, canvas: &mut Pixmap, inputs: &EfisInputs, area: Option<Rect>) {
        let Some(area) = area else {
            return;
        };
        let center = Vec2::new(area.x() + area.width() / 2.0, area.y() + area.height() / 2.0);

        // Horizon drawn on its own layer so the rotated sky/ground stays inside the ADI
        let Some(mut layer) = Pixmap::new(area.width() as u32, area.height() as u32) else {
            return;
        };
        let local_center = Vec2::new(area.width() / 2.0, area.height() / 2.0);
        let transform = attitude_transform(inputs.pitch, inputs.roll, local_center);
        let extent = area.width().max(area.height()) * 2.0;

        fill_rect(&mut layer, -extent, -extent, extent * 2.0, extent, hex(0x0ea5e9), transform);
        fill_rect(&mut layer, -extent, 0.0, extent * 2.0, extent, hex(0x78350f), transform);
        line(
            &mut layer,
            Vec2::new(-extent, 0.0),
            Vec2::new(extent, 0.0),
            Color::WHITE,
            &stroke(1.5),
            transform,
        );
        let ladder = rgba(0xffffff, 0x99);
        for (pitch, half_width) in [(-10.0, 40.0), (-5.0, 24.0), (5.0, 24.0), (10.0, 40.0)] {
            let y = -pitch * PITCH_PX_PER_DEGREE;
            line(
                &mut layer,
                Vec2::new(-half_width, y),
                Vec2::new(half_width, y),
                ladder,
                &stroke(1.0),
                transform,
            );
        }

        canvas.draw_pixmap(
            area.x() as i32,
            area.y() as i32,
            layer.as_ref(),
            &Default::default(),
            Transform::identity(),
            None,
        );

        // Fixed aircraft symbol
        let amber = hex(0xf59e0b);
        fill_rect(canvas, center.x - 64.0, center.y - 2.0, 40.0, 4.0, amber, Transform::identity());
        fill_rect(canvas, center.x + 24.0, center.y - 2.0, 40.0, 4.0, amber, Transform::identity());
        fill_circle(canvas, center, 3.0, Color::BLACK, Transform::identity());
        fill_polygon(
            canvas,
            &[
                Vec2::new(center.x, area.y() + 16.0),
                Vec2::new(center.x + 10.0, area.y() + 31.0),
                Vec2::new(center.x - 10.0, area.y() + 31.0),
            ],
            Color::WHITE,
            Transform::identity(),
        );
    }

    fn draw_vsi(&self, canvas: &mut Pixmap, x: f32, height: f32, vertical_speed: f64) {
        let center_x = x + VSI_WIDTH / 2.0;
        let center_y = height / 2.0;
        fill_rect(canvas, center_x - 0.5, height * 0.1, 1.0, height * 0.8, hex(0x27272a), Transform::identity());

        let length = vsi_bar_length(vertical_speed);
        if length > 0.0 {
            let top = if vertical_speed < 0.0 {
                center_y
            } else {
                center_y - length
            };
            fill_rect(canvas, center_x - 4.0, top, 8.0, length, hex(0x10b981), Transform::identity());
        }
    }

    fn draw_hsi(&self, canvas: &mut Pixmap, inputs: &EfisInputs, center: Vec2, radius: f32) {
        fill_circle(canvas, center, radius, hex(0x0a0a0a), Transform::identity());

        // Rose turns opposite to the heading so the lubber line reads up
        let rose = Transform::from_translate(center.x, center.y).pre_rotate(-inputs.heading as f32);
        let tick_stroke = stroke(1.5);
        let labels = SevenSegment::new(10.0, Color::WHITE);
        for deg in (0..360).step_by(10) {
            let long = deg % 30 == 0;
            let inner = if long { radius - 14.0 } else { radius - 8.0 };
            let rotated = rose.pre_rotate(deg as f32);
            line(
                canvas,
                Vec2::new(0.0, -radius),
                Vec2::new(0.0, -inner),
                Color::WHITE,
                &tick_stroke,
                rotated,
            );
            if long {
                labels.draw_centered(
                    canvas,
                    &(deg / 10).to_string(),
                    Vec2::new(0.0, -radius + 26.0),
                    rotated,
                );
            }
        }

        // Heading bug
        let bug = rose.pre_rotate(inputs.heading_bug as f32);
        fill_polygon(
            canvas,
            &[
                Vec2::new(-7.0, -radius - 2.0),
                Vec2::new(7.0, -radius - 2.0),
                Vec2::new(7.0, -radius + 6.0),
                Vec2::new(0.0, -radius + 1.0),
                Vec2::new(-7.0, -radius + 6.0),
            ],
            hex(0x22d3ee),
            bug,
        );

        // Course needle with TO/FROM flag and deviation bar
        let course = rose.pre_rotate(inputs.obs as f32);
        let magenta = hex(0xd946ef);
        let needle_stroke = stroke(3.0);
        line(canvas, Vec2::new(0.0, -radius + 30.0), Vec2::new(0.0, -radius * 0.45), magenta, &needle_stroke, course);
        line(canvas, Vec2::new(0.0, radius * 0.45), Vec2::new(0.0, radius - 30.0), magenta, &needle_stroke, course);
        fill_polygon(
            canvas,
            &[
                Vec2::new(0.0, -radius + 22.0),
                Vec2::new(7.0, -radius + 34.0),
                Vec2::new(-7.0, -radius + 34.0),
            ],
            magenta,
            course,
        );

        for dot in [-2.0, -1.0, 1.0, 2.0] {
            fill_circle(canvas, Vec2::new(dot * DEVIATION_PX / 2.0, 0.0), 3.0, Color::WHITE, course);
        }
        if let Some(offset) = deviation_bar_offset(&inputs.readout) {
            line(
                canvas,
                Vec2::new(offset, -radius * 0.4),
                Vec2::new(offset, radius * 0.4),
                magenta,
                &needle_stroke,
                course,
            );

            let flag_y = if inputs.readout.is_to {
                -radius * 0.25
            } else {
                radius * 0.25
            };
            let tip = if inputs.readout.is_to { -10.0 } else { 10.0 };
            fill_polygon(
                canvas,
                &[
                    Vec2::new(radius * 0.3, flag_y + tip),
                    Vec2::new(radius * 0.3 + 8.0, flag_y),
                    Vec2::new(radius * 0.3 - 8.0, flag_y),
                ],
                Color::WHITE,
                course,
            );
        }

        // Fixed lubber line and own-ship symbol
        fill_polygon(
            canvas,
            &[
                Vec2::new(center.x, center.y - radius - 4.0),
                Vec2::new(center.x + 6.0, center.y - radius - 14.0),
                Vec2::new(center.x - 6.0, center.y - radius - 14.0),
            ],
            hex(0xf59e0b),
            Transform::identity(),
        );
        fill_polygon(
            canvas,
            &[
                Vec2::new(center.x, center.y - 12.0),
                Vec2::new(center.x + 10.0, center.y + 8.0),
                Vec2::new(center.x, center.y + 3.0),
                Vec2::new(center.x - 10.0, center.y + 8.0),
            ],
            Color::WHITE,
            Transform::identity(),
        );

        // Heading, course and DME readouts
        let readouts = SevenSegment::new(12.0, hex(0x00ff00));
        let heading = format!("{:03}", boxed_readout(inputs.heading) % 360);
        readouts.draw_centered(
            canvas,
            &heading,
            Vec2::new(center.x, center.y - radius - 6.0 - 14.0),
            Transform::identity(),
        );
        let course = format!("{:03}", boxed_readout(inputs.obs) % 360);
        readouts.draw(canvas, &course, Vec2::new(center.x - radius - 10.0, 6.0), Transform::identity());
        let dme = format!("{:.1}", inputs.readout.dme);
        SevenSegment::new(12.0, hex(0x22d3ee)).draw(
            canvas,
            &dme,
            Vec2::new(center.x + radius - 30.0, 6.0),
            Transform::identity(),
        );

    }
}
