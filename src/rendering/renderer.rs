use bevy::log::info;
use bevy::prelude::Resource;
use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::rendering::efis::{EfisInputs, EfisPanel};
use crate::rendering::landing_renderer::{LandingOutcome, LandingRenderer};
use crate::rendering::map_renderer::MapRenderer;
use crate::rendering::sprite::AircraftSprite;
use crate::rendering::terrain::generate_terrain;
use crate::rendering::types::{Palette, RenderType};
use crate::resources::RenderConfig;
use crate::session::SimulationSession;
use crate::utils::{RngManager, SimError};

/// Draws a whole frame: the scene on top and the EFIS panel underneath.
#[derive(Resource, Debug, Clone)]
pub struct FrameRenderer {
    config: RenderConfig,
    map: MapRenderer,
    landing: LandingRenderer,
    efis: EfisPanel,
}

impl FrameRenderer {
    pub fn new(config: &RenderConfig, rng: &RngManager) -> Self {
        let terrain = generate_terrain(rng);
        let sprite = AircraftSprite::load_or_vector(config.aircraft_sprite.as_deref());
        info!(
            "Frame renderer ready: {}x{} ({} terrain features)",
            config.width,
            config.total_height(),
            terrain.len()
        );

        Self {
            config: config.clone(),
            map: MapRenderer::new(terrain, sprite),
            landing: LandingRenderer,
            efis: EfisPanel,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, session: &SimulationSession) -> Result<Pixmap, SimError> {
        let mut frame = create_canvas(self.config.width, self.config.total_height())?;
        let scene = self.render_scene(session)?;
        let panel = self.render_panel(session)?;

        let paint = PixmapPaint::default();
        frame.draw_pixmap(0, 0, scene.as_ref(), &paint, Transform::identity(), None);
        frame.draw_pixmap(
            0,
            self.config.viewport_height as i32,
            panel.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );

        Ok(frame)
    }

    pub fn render_scene(&self, session: &SimulationSession) -> Result<Pixmap, SimError> {
        let mut canvas = create_canvas(self.config.width, self.config.viewport_height)?;

        match RenderType::for_archetype(session.archetype()) {
            RenderType::Map => self.map.render(&mut canvas, session, self.config.map_scale),
            RenderType::Landing => {
                let palette = Palette::new(session.environment().time_of_day, session.archetype());
                let outcome = if session.is_crashed() {
                    LandingOutcome::Crashed(session.particles())
                } else if session.is_completed() {
                    LandingOutcome::Landed
                } else {
                    LandingOutcome::Flying
                };
                self.landing.render(
                    &mut canvas,
                    session.aircraft(),
                    session.environment(),
                    &palette,
                    outcome,
                );
            }
        }

        Ok(canvas)
    }

    pub fn render_panel(&self, session: &SimulationSession) -> Result<Pixmap, SimError> {
        let mut canvas = create_canvas(self.config.width, self.config.panel_height)?;
        self.efis.draw(&mut canvas, &EfisInputs::from_session(session));
        Ok(canvas)
    }
}

fn create_canvas(width: u32, height: u32) -> Result<Pixmap, SimError> {
    Pixmap::new(width, height).ok_or_else(|| {
        SimError::RenderError(format!("Failed to create {}x{} canvas", width, height))
    })
}
