use serde::{Deserialize, Serialize};

/// Transient prompts and banners shown over the simulator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonAlerts {
    /// New course assigned mid-lesson, waiting for acknowledgement.
    pub course_change: bool,
    /// Waiting for the pilot to pick a procedure-turn side.
    pub procedure_turn_choice: bool,
    /// Remaining procedure-turn outbound time, whole seconds.
    pub procedure_turn_countdown: Option<u32>,
    pub turn_inbound: bool,
    /// Seconds of host time the "established" banner stays up.
    pub established_remaining: Option<f64>,
    pub station_passage: bool,
    pub engine_failure: bool,
}

impl LessonAlerts {
    /// Overlays that stop the simulation until the pilot responds.
    pub fn is_blocking(&self) -> bool {
        self.course_change || self.procedure_turn_choice || self.station_passage
    }

    pub fn show_established(&mut self, seconds: f64) {
        self.established_remaining = Some(seconds);
    }

    pub fn is_established_visible(&self) -> bool {
        self.established_remaining.is_some()
    }

    /// Counts banners down by `elapsed` seconds of host time.
    pub fn advance(&mut self, elapsed: f64) {
        if let Some(remaining) = self.established_remaining {
            let remaining = remaining - elapsed;
            self.established_remaining = (remaining > 0.0).then_some(remaining);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
