use glam::DVec2;

use crate::components::NavigationReadout;
use crate::utils::{
    bearing_of, normalize_signed_degrees, CDI_FULL_SCALE_DEG, STATION_CONE_DME, WORLD_UNITS_PER_NM,
};

/// Computes the VOR/DME readout for an aircraft position and OBS setting.
pub fn compute_readout(aircraft: DVec2, station: DVec2, obs: f64) -> NavigationReadout {
    let offset = aircraft - station;
    let radial = bearing_of(offset);
    let dme = offset.length() / WORLD_UNITS_PER_NM;

    let diff = normalize_signed_degrees(obs - radial);
    let is_to = diff.abs() > 90.0;

    // On the TO side the needle reads against the reciprocal course
    let course_error = if is_to {
        if diff > 0.0 {
            -(diff - 180.0)
        } else {
            -(diff + 180.0)
        }
    } else {
        diff
    };

    NavigationReadout {
        radial,
        dme,
        is_to,
        cdi_deflection: course_error.clamp(-CDI_FULL_SCALE_DEG, CDI_FULL_SCALE_DEG)
            / CDI_FULL_SCALE_DEG,
        is_off: dme < STATION_CONE_DME,
        course_error,
    }
}
