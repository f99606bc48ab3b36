use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::utils::{STATION_X, STATION_Y};

/// The single VOR/DME station of the training area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationState {
    pub position: DVec2,
}

impl Default for StationState {
    fn default() -> Self {
        Self {
            position: DVec2::new(STATION_X, STATION_Y),
        }
    }
}
