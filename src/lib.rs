pub mod components;
pub mod plugins;
pub mod rendering;
pub mod resources;
pub mod session;
pub mod systems;
pub mod utils;

pub use plugins::{LatestFrame, VorSimulatorPlugin};
pub use rendering::FrameRenderer;
pub use resources::SimConfig;
pub use session::SimulationSession;
