use glam::Vec2;
use nalgebra::{Matrix3, Vector3};

/// Pinhole camera trailing the aircraft on final.
///
/// Runway space: x right of the centreline, y up, z along the approach
/// with the threshold at 0 and the runway extending towards -z.
#[derive(Debug, Clone, Copy)]
pub struct LandingCamera {
    pub position: Vector3<f64>,
    rotation: Matrix3<f64>,
    pub fov: f64,
    pub center: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub point: Vec2,
    /// Pixels per runway unit at this depth.
    pub scale: f32,
}

impl LandingCamera {
    pub const FOV: f64 = 600.0;
    const HEIGHT_ABOVE_AIRCRAFT: f64 = 80.0;
    const DISTANCE_BEHIND: f64 = 250.0;

    pub fn new(position: Vector3<f64>, yaw_deg: f64, pitch_deg: f64, center: Vec2) -> Self {
        let yaw = (-yaw_deg).to_radians();
        let pitch = (-pitch_deg).to_radians();
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();

        #[rustfmt::skip]
        let yaw_matrix = Matrix3::new(
            cy,  0.0, -sy,
            0.0, 1.0, 0.0,
            sy,  0.0, cy,
        );
        #[rustfmt::skip]
        let pitch_matrix = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, cp,  -sp,
            0.0, sp,  cp,
        );

        Self {
            position,
            rotation: pitch_matrix * yaw_matrix,
            fov: Self::FOV,
            center,
        }
    }

    /// Camera behind and above the aircraft at its runway-relative position.
    pub fn chase(
        lateral_offset: f64,
        altitude: f64,
        distance_to_threshold: f64,
        yaw_deg: f64,
        pitch_deg: f64,
        center: Vec2,
    ) -> Self {
        Self::new(
            Vector3::new(
                lateral_offset,
                altitude + Self::HEIGHT_ABOVE_AIRCRAFT,
                distance_to_threshold + Self::DISTANCE_BEHIND,
            ),
            yaw_deg,
            pitch_deg,
            center,
        )
    }

    /// Screen position of a runway-space point, `None` when it is behind the camera.
    pub fn project(&self, point: Vector3<f64>) -> Option<Projected> {
        let view = self.rotation * (point - self.position);
        if view.z >= 0.0 {
            return None;
        }
        let scale = self.fov / view.z.abs();
        Some(Projected {
            point: Vec2::new(
                self.center.x + (view.x * scale) as f32,
                self.center.y - (view.y * scale) as f32,
            ),
            scale: scale as f32,
        })
    }
}
