use bevy::prelude::*;

use crate::plugins::LatestFrame;
use crate::rendering::FrameRenderer;
use crate::session::SimulationSession;

/// Renders the session into `LatestFrame` as premultiplied RGBA bytes.
pub fn render_frame_system(
    session: Res<SimulationSession>,
    renderer: Res<FrameRenderer>,
    mut latest_frame: ResMut<LatestFrame>,
) {
    match renderer.render(&session) {
        Ok(pixmap) => {
            latest_frame.width = pixmap.width();
            latest_frame.height = pixmap.height();
            latest_frame.update(pixmap.take());
        }
        Err(e) => error!("Frame render failed: {}", e),
    }
}
