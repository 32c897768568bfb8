use crate::ring::CylinderRing;
use crate::scheduling_blocks::schedule::Schedule;
use crate::types::{Algorithm, SchedulingError};

/// Shortest Seek Time First.
///
/// The arm keeps the nearest pending request on either side of the serviced
/// stretch (`low` walking `prev` links, `high` walking `next` links) and always
/// moves to the closer one. Ties go to `high`.
///
/// The pointers wrap around the ring, so once one side runs past `first` or
/// `last` it reaches for requests on the far end of the disk.
pub fn sstf(ring: &CylinderRing, head: usize) -> Result<Schedule, SchedulingError> {
    ring.check_schedulable(head)?;

    let mut schedule = Schedule::new(Algorithm::Sstf, head, ring.len());
    let mut current = head;
    let mut low = ring.prev(head);
    let mut high = ring.next(head);

    for _ in 1..ring.len() {
        let left = ring.distance(current, low);
        let right = ring.distance(current, high);

        if left < right {
            current = low;
            low = ring.prev(current);
            schedule.service(current, left);
        } else {
            current = high;
            high = ring.next(current);
            schedule.service(current, right);
        }
    }

    Ok(schedule)
}
