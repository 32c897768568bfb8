//! # disk_scheduling
//!
//! Simulates three classical disk scheduling algorithms, SSTF, SCAN and C-LOOK,
//! over a batch of cylinder requests known up front.
//!
//! Requests live in a circular doubly linked ring ([`CylinderRing`]). A
//! [`Scenario`] sorts the ring, puts the head back on the cylinder it started
//! on and lets every algorithm walk the ring, reporting the total head
//! movement each one needs to service all requests.
//!
//! ```
//! use disk_scheduling::{Algorithm, Scenario};
//!
//! let mut scenario = Scenario::from_requests(&[40, 60, 20]);
//! let report = scenario.run().unwrap();
//! assert_eq!(report.head_movement(Algorithm::Scan), Some(1938));
//! ```

pub mod config;
pub mod input;
pub mod output;
pub mod ring;
pub mod scenario;
pub mod scheduling_blocks;
pub mod types;
pub mod visualize;

#[cfg(test)]
mod testing;

pub use config::SimulationConfig;
pub use input::{fill_ring, parse_requests, random_cylinder};
pub use output::render_report;
pub use ring::CylinderRing;
pub use scenario::{Scenario, ScenarioReport};
pub use scheduling_blocks::schedule::{Schedule, Step};
pub use scheduling_blocks::{c_look::c_look, scan::scan, sstf::sstf};
pub use types::{Algorithm, Cylinder, MAX_CYLINDER, MIN_CYLINDER, SchedulingError};
pub use visualize::draw_schedule;
