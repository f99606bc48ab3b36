mod clock;
#[allow(clippy::module_inception)]
mod session;

pub use clock::FixedStepClock;
pub use session::{ExitHandler, SimulationSession};
