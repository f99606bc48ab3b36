use glam::DVec2;

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in degrees into `(-180, 180]`.
#[inline]
pub fn normalize_signed_degrees(deg: f64) -> f64 {
    let mut diff = normalize_degrees(deg);
    if diff > 180.0 {
        diff -= 360.0;
    }
    diff
}

/// Smallest absolute angle between two bearings, in `[0, 180]`.
#[inline]
pub fn heading_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Unit vector for a compass bearing in screen space (+x east, +y south).
#[inline]
pub fn bearing_vector(bearing_deg: f64) -> DVec2 {
    let rad = (bearing_deg - 90.0).to_radians();
    DVec2::new(rad.cos(), rad.sin())
}

/// Compass bearing of a screen-space offset (inverse of [`bearing_vector`]).
#[inline]
pub fn bearing_of(offset: DVec2) -> f64 {
    normalize_degrees(offset.y.atan2(offset.x).to_degrees() + 90.0)
}
