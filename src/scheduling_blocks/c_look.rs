use crate::ring::CylinderRing;
use crate::scheduling_blocks::midpoint;
use crate::scheduling_blocks::schedule::Schedule;
use crate::types::{Algorithm, SchedulingError};

/// C-LOOK.
///
/// Above the midpoint of the requested span the arm walks `next` links from
/// the head up to `last`, jumps to `first` for free and keeps climbing until it
/// reaches the request just below the head. Otherwise it walks `prev` links
/// down to `first`, jumps to `last` for free and keeps descending.
pub fn c_look(ring: &CylinderRing, head: usize) -> Result<Schedule, SchedulingError> {
    ring.check_schedulable(head)?;
    let (first, last) = ring.bounds()?;

    let mut schedule = Schedule::new(Algorithm::CLook, head, ring.len());

    let upwards = ring.value(head) > midpoint(ring, first, last);
    let jump_from = if upwards { last } else { first };
    let step = |idx| if upwards { ring.next(idx) } else { ring.prev(idx) };

    let mut current = head;
    while step(current) != head {
        let following = step(current);
        let distance = if current == jump_from {
            0
        } else {
            ring.distance(current, following)
        };
        current = following;
        schedule.service(current, distance);
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_rings::{random_sorted_ring, sorted_ring_with_head};

    fn served_cylinders(ring: &CylinderRing, schedule: &Schedule) -> Vec<usize> {
        schedule.path().iter().map(|&idx| ring.value(idx)).collect()
    }

    #[test]
    fn test_c_look_jump_is_free() {
        // midpoint (75 - 15) / 2 = 30, head 75 is above it: walk up
        let (ring, head) = sorted_ring_with_head(&[15, 45, 75], 75);
        let schedule = c_look(&ring, head).unwrap();

        assert_eq!(served_cylinders(&ring, &schedule), vec![75, 15, 45]);
        assert_eq!(schedule.steps[0].distance, 0);
        assert_eq!(schedule.head_movement, 30);
    }

    #[test]
    fn test_c_look_upwards_from_middle() {
        let (ring, head) = sorted_ring_with_head(&[10, 45, 75, 90], 45);
        let schedule = c_look(&ring, head).unwrap();

        assert_eq!(served_cylinders(&ring, &schedule), vec![45, 75, 90, 10]);
        assert_eq!(schedule.head_movement, 30 + 15);
    }

    #[test]
    fn test_c_look_downwards() {
        // midpoint 30, head 15 is not above it: walk down
        let (ring, head) = sorted_ring_with_head(&[15, 45, 75], 15);
        let schedule = c_look(&ring, head).unwrap();

        assert_eq!(served_cylinders(&ring, &schedule), vec![15, 75, 45]);
        assert_eq!(schedule.head_movement, 30);
    }

    #[test]
    fn test_c_look_downwards_from_middle() {
        // midpoint (800 - 0) / 2 = 400, head 300 walks down
        let (ring, head) = sorted_ring_with_head(&[0, 100, 300, 700, 800], 300);
        let schedule = c_look(&ring, head).unwrap();

        assert_eq!(served_cylinders(&ring, &schedule), vec![300, 100, 0, 800, 700]);
        assert_eq!(schedule.head_movement, 200 + 100 + 100);
    }

    #[test]
    fn test_c_look_services_everything_once() {
        for seed in 0..100 {
            let (ring, head) = random_sorted_ring(2 + (seed as usize % 30), seed);
            let schedule = c_look(&ring, head).unwrap();

            assert_eq!(schedule.serviced_count(), ring.len() - 1);
            assert!((0..ring.len()).all(|idx| schedule.is_serviced(idx)));
            // never more than the span travelled twice
            let span = ring.value(ring.last().unwrap()) - ring.value(ring.first().unwrap());
            assert!(schedule.head_movement <= 2 * span);
        }
    }
}
