pub mod c_look;
pub mod scan;
pub mod schedule;
pub mod sstf;

use crate::ring::CylinderRing;
use crate::types::{Algorithm, SchedulingError};
use schedule::Schedule;

/// Runs `algorithm` over a sorted ring, starting at node `head`.
pub fn run(
    algorithm: Algorithm,
    ring: &CylinderRing,
    head: usize,
) -> Result<Schedule, SchedulingError> {
    let schedule = match algorithm {
        Algorithm::Sstf => sstf::sstf(ring, head)?,
        Algorithm::Scan => scan::scan(ring, head)?,
        Algorithm::CLook => c_look::c_look(ring, head)?,
    };
    log::debug!(
        "{}: {} requests serviced, total head movement {}",
        algorithm,
        schedule.steps.len(),
        schedule.head_movement
    );
    Ok(schedule)
}

/// Half of the span between the smallest and largest request.
///
/// SCAN and C-LOOK pick their initial direction by comparing the head against it.
pub(crate) fn midpoint(ring: &CylinderRing, first: usize, last: usize) -> usize {
    ring.value(last).saturating_sub(ring.value(first)) / 2
}
