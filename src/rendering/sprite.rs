use bevy::log::{info, warn};
use glam::Vec2;
use std::path::Path;
use tiny_skia::{Color, FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::rendering::shapes::fill_polygon;
use crate::utils::SimError;

const SPRITE_SIZE: f32 = 48.0;

/// Top-down aircraft symbol: a PNG when one is available, otherwise a
/// vector arrowhead.
#[derive(Debug, Clone, Default)]
pub struct AircraftSprite {
    image: Option<Pixmap>,
}

impl AircraftSprite {
    pub fn vector() -> Self {
        Self { image: None }
    }

    pub fn try_load(path: &Path) -> Result<Self, SimError> {
        let image = Pixmap::load_png(path).map_err(|err| {
            SimError::AssetError(format!(
                "Failed to load aircraft sprite {}: {}",
                path.display(),
                err
            ))
        })?;
        Ok(Self { image: Some(image) })
    }

    /// Loads the sprite, falling back to the vector symbol on any failure.
    pub fn load_or_vector(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::vector();
        };
        match Self::try_load(path) {
            Ok(sprite) => {
                info!("Loaded aircraft sprite {}", path.display());
                sprite
            }
            Err(err) => {
                warn!("{}; using vector aircraft", err);
                Self::vector()
            }
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Draws the aircraft centred on `center`, nose along `heading_deg`.
    pub fn draw(&self, canvas: &mut Pixmap, center: Vec2, heading_deg: f32) {
        let transform = Transform::from_translate(center.x, center.y).pre_rotate(heading_deg);

        match &self.image {
            Some(image) => {
                let sx = SPRITE_SIZE / image.width().max(1) as f32;
                let sy = SPRITE_SIZE / image.height().max(1) as f32;
                let transform = transform
                    .pre_translate(-SPRITE_SIZE / 2.0, -SPRITE_SIZE / 2.0)
                    .pre_scale(sx, sy);
                let paint = PixmapPaint {
                    quality: FilterQuality::Bilinear,
                    ..Default::default()
                };
                canvas.draw_pixmap(0, 0, image.as_ref(), &paint, transform, None);
            }
            None => {
                let arrow = [
                    Vec2::new(0.0, -20.0),
                    Vec2::new(15.0, 20.0),
                    Vec2::new(0.0, 10.0),
                    Vec2::new(-15.0, 20.0),
                ];
                fill_polygon(canvas, &arrow, Color::WHITE, transform);
            }
        }
    }
}
