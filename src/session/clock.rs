/// Turns variable host frame times into whole fixed simulation steps.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f64,
    max_substeps: u32,
    accumulator: f64,
}

impl FixedStepClock {
    pub fn new(step: f64, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Adds `elapsed` seconds and returns how many steps are due.
    ///
    /// Backlog beyond `max_substeps` is dropped so a long stall does not
    /// fast-forward the aircraft.
    pub fn accumulate(&mut self, elapsed: f64) -> u32 {
        if !(elapsed.is_finite() && elapsed > 0.0) {
            return 0;
        }
        self.accumulator += elapsed;

        let due = (self.accumulator / self.step).floor();
        if due >= self.max_substeps as f64 {
            self.accumulator = 0.0;
            self.max_substeps
        } else {
            self.accumulator -= due * self.step;
            due as u32
        }
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    pub fn pending(&self) -> f64 {
        self.accumulator
    }
}
