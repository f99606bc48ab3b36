use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{HEADING_PULSE, OBS_PULSE, PITCH_PULSE};

/// A single pilot control pulse.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlCommand {
    /// Heading change in degrees (positive = right).
    Heading(f64),
    /// Pitch change (positive = nose up).
    Pitch(f64),
    /// OBS course change in degrees.
    Obs(f64),
}

impl ControlCommand {
    pub fn turn_left() -> Self {
        Self::Heading(-HEADING_PULSE)
    }

    pub fn turn_right() -> Self {
        Self::Heading(HEADING_PULSE)
    }

    pub fn pitch_up() -> Self {
        Self::Pitch(PITCH_PULSE)
    }

    pub fn pitch_down() -> Self {
        Self::Pitch(-PITCH_PULSE)
    }

    pub fn obs_decrement() -> Self {
        Self::Obs(-OBS_PULSE)
    }

    pub fn obs_increment() -> Self {
        Self::Obs(OBS_PULSE)
    }
}

/// Side chosen for the procedure-turn outbound leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    Left,
    Right,
}
