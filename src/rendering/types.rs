use tiny_skia::Color;

use crate::components::LessonArchetype;
use crate::resources::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderType {
    /// Top-down moving map.
    Map,
    /// Pseudo-3D view down the runway.
    Landing,
}

impl RenderType {
    pub fn for_archetype(archetype: LessonArchetype) -> Self {
        if archetype.is_landing() {
            RenderType::Landing
        } else {
            RenderType::Map
        }
    }
}

/// `0xRRGGBB` to an opaque colour.
pub fn hex(rgb: u32) -> Color {
    rgba(rgb, 255)
}

pub fn rgba(rgb: u32, alpha: u8) -> Color {
    Color::from_rgba8(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
        alpha,
    )
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    let mut color = color;
    color.set_alpha(alpha.clamp(0.0, 1.0));
    color
}

/// Colours that change with the time of day and the lesson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub time_of_day: TimeOfDay,
    /// White aeronautical-chart look with drawn radials.
    pub chart_style: bool,
    pub homing: bool,
}

impl Palette {
    pub fn new(time_of_day: TimeOfDay, archetype: LessonArchetype) -> Self {
        let homing = archetype == LessonArchetype::Homing;
        let chart_archetype = matches!(
            archetype,
            LessonArchetype::FreeFlight
                | LessonArchetype::OutboundTracking
                | LessonArchetype::VorTracking
                | LessonArchetype::InboundIntercept
                | LessonArchetype::ProcedurePractice
        );
        Self {
            time_of_day,
            chart_style: chart_archetype && time_of_day == TimeOfDay::Day,
            homing,
        }
    }

    pub fn map_background(&self) -> Color {
        match self.time_of_day {
            TimeOfDay::Day if self.chart_style => hex(0xffffff),
            TimeOfDay::Day if self.homing => hex(0x2d4c1e),
            TimeOfDay::Dusk if self.homing => hex(0x1e293b),
            TimeOfDay::Day | TimeOfDay::Dusk => hex(0x050505),
            TimeOfDay::Night => hex(0x020617),
        }
    }

    pub fn map_fog(&self) -> Color {
        match self.time_of_day {
            TimeOfDay::Day => hex(0xffffff),
            TimeOfDay::Dusk | TimeOfDay::Night => hex(0x0f172a),
        }
    }

    pub fn grid(&self) -> Color {
        if self.homing {
            rgba(0xffffff, 0x04)
        } else {
            rgba(0xffffff, 0x06)
        }
    }

    /// Top and bottom of the landing sky gradient.
    pub fn sky(&self) -> (Color, Color) {
        match self.time_of_day {
            TimeOfDay::Day => (hex(0x0f172a), hex(0x60a5fa)),
            TimeOfDay::Dusk => (hex(0x1e1b4b), hex(0xf97316)),
            TimeOfDay::Night => (hex(0x020617), hex(0x1e293b)),
        }
    }

    pub fn ground(&self) -> Color {
        match self.time_of_day {
            TimeOfDay::Night => hex(0x0a0a0a),
            TimeOfDay::Day | TimeOfDay::Dusk => hex(0x1e293b),
        }
    }

    pub fn landing_fog(&self) -> Color {
        match self.time_of_day {
            TimeOfDay::Day => hex(0xc8c8c8),
            TimeOfDay::Dusk | TimeOfDay::Night => hex(0x1e1e28),
        }
    }
}
