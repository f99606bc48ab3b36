mod frame;
mod simulator;

pub use frame::LatestFrame;
pub use simulator::VorSimulatorPlugin;
