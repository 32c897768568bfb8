use crate::types::{Cylinder, DEFAULT_REQUEST_COUNT, DEFAULT_SCENARIO_COUNT};

/// How many scenarios to simulate and where their requests come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub scenarios: usize,
    /// Random requests drawn per scenario
    pub requests: usize,
    /// Seed for the request generator, drawn from the OS when absent
    pub seed: Option<u64>,
    /// Fixed request list replacing random generation, first entry is the head
    pub cylinders: Option<Vec<Cylinder>>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scenarios: DEFAULT_SCENARIO_COUNT,
            requests: DEFAULT_REQUEST_COUNT,
            seed: None,
            cylinders: None,
        }
    }
}

impl SimulationConfig {
    /// Scenarios that will actually run. An explicit request list always gives exactly one.
    pub fn scenario_count(&self) -> usize {
        match self.cylinders {
            Some(_) => 1,
            None => self.scenarios,
        }
    }
}
