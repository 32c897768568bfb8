use crate::ring::CylinderRing;
use crate::scheduling_blocks::midpoint;
use crate::scheduling_blocks::schedule::Schedule;
use crate::types::{Algorithm, Cylinder, MAX_CYLINDER, MIN_CYLINDER, SchedulingError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Direction {
    /// Towards cylinder 0
    Low,
    /// Towards cylinder 999
    High,
}

/// SCAN, the elevator algorithm.
///
/// The arm starts towards the low edge when the head is below the midpoint of
/// the requested span, towards the high edge otherwise. It services requests in
/// that direction until it stands on `first` (or `last`). If requests are still
/// pending, it travels to the physical edge of the disk and back to the nearest
/// pending request on the other side, which costs
/// `(first - 0) + (high - 0)` resp. `(999 - last) + (999 - low)`.
///
/// Once every request has been serviced the arm stops, it never sweeps to an
/// edge for nothing.
pub fn scan(ring: &CylinderRing, head: usize) -> Result<Schedule, SchedulingError> {
    ring.check_schedulable(head)?;
    let (first, last) = ring.bounds()?;

    let mut direction = if ring.value(head) < midpoint(ring, first, last) {
        Direction::Low
    } else {
        Direction::High
    };

    let mut schedule = Schedule::new(Algorithm::Scan, head, ring.len());
    let mut current = head;
    let mut low = ring.prev(head);
    let mut high = ring.next(head);

    while schedule.serviced_count() < ring.len() - 1 {
        match direction {
            Direction::Low if current == first => {
                let distance = sweep_via_edge(MIN_CYLINDER, ring.value(first), ring.value(high));
                current = high;
                high = ring.next(current);
                direction = Direction::High;
                schedule.service(current, distance);
            }
            Direction::Low => {
                let distance = ring.distance(current, low);
                current = low;
                low = ring.prev(current);
                schedule.service(current, distance);
            }
            Direction::High if current == last => {
                let distance = sweep_via_edge(MAX_CYLINDER, ring.value(last), ring.value(low));
                current = low;
                low = ring.prev(current);
                direction = Direction::Low;
                schedule.service(current, distance);
            }
            Direction::High => {
                let distance = ring.distance(current, high);
                current = high;
                high = ring.next(current);
                schedule.service(current, distance);
            }
        }
    }

    Ok(schedule)
}

/// Distance travelled going from `from` out to the disk `edge` and back to `to`.
fn sweep_via_edge(edge: Cylinder, from: Cylinder, to: Cylinder) -> usize {
    from.abs_diff(edge) + edge.abs_diff(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_rings::{random_sorted_ring, sorted_ring_with_head};

    fn served_cylinders(ring: &CylinderRing, schedule: &Schedule) -> Vec<usize> {
        schedule.path().iter().map(|&idx| ring.value(idx)).collect()
    }

    #[test]
    fn test_scan_sweeps_to_high_edge() {
        // midpoint (60 - 20) / 2 = 20, head 40 is not below it: start high
        let (ring, head) = sorted_ring_with_head(&[20, 40, 60], 40);
        let schedule = scan(&ring, head).unwrap();

        assert_eq!(served_cylinders(&ring, &schedule), vec![40, 60, 20]);
        assert_eq!(schedule.head_movement, 20 + (999 - 60) + (999 - 20));
        assert_eq!(schedule.head_movement, 1938);
    }

    #[test]
    fn test_scan_sweeps_to_low_edge() {
        // midpoint (900 - 50) / 2 = 425, head 100 is below it: start low
        let (ring, head) = sorted_ring_with_head(&[50, 100, 300, 900], 100);
        let schedule = scan(&ring, head).unwrap();

        assert_eq!(served_cylinders(&ring, &schedule), vec![100, 50, 300, 900]);
        assert_eq!(schedule.head_movement, 50 + (50 + 300) + 600);
    }

    #[test]
    fn test_scan_reverses_immediately_at_first() {
        let (ring, head) = sorted_ring_with_head(&[100, 200, 900], 100);
        let schedule = scan(&ring, head).unwrap();

        assert_eq!(served_cylinders(&ring, &schedule), vec![100, 200, 900]);
        assert_eq!(schedule.head_movement, (100 + 200) + 700);
    }

    #[test]
    fn test_scan_reverses_immediately_at_last() {
        let (ring, head) = sorted_ring_with_head(&[10, 20, 30], 30);
        let schedule = scan(&ring, head).unwrap();

        assert_eq!(served_cylinders(&ring, &schedule), vec![30, 20, 10]);
        assert_eq!(schedule.head_movement, (999 - 30) + (999 - 20) + 10);
    }

    #[test]
    fn test_scan_no_edge_trip_when_done() {
        // midpoint 20, head 10 is below it but sits on first: sweep low edge once, then climb
        let (ring, head) = sorted_ring_with_head(&[10, 30, 50], 10);
        let schedule = scan(&ring, head).unwrap();
        assert_eq!(schedule.head_movement, (10 + 30) + 20);

        // starting high from first never needs a reversal
        let (ring, head) = sorted_ring_with_head(&[300, 400, 500], 300);
        let schedule = scan(&ring, head).unwrap();
        assert_eq!(schedule.head_movement, 200);
    }

    #[test]
    fn test_scan_all_equal_is_free() {
        let (ring, head) = sorted_ring_with_head(&[7, 7, 7], 7);
        assert_eq!(scan(&ring, head).unwrap().head_movement, 0);
    }

    #[test]
    fn test_scan_services_everything_once() {
        for seed in 0..100 {
            let (ring, head) = random_sorted_ring(2 + (seed as usize % 30), seed);
            let schedule = scan(&ring, head).unwrap();

            assert_eq!(schedule.serviced_count(), ring.len() - 1);
            assert!((0..ring.len()).all(|idx| schedule.is_serviced(idx)));
        }
    }

    #[test]
    fn test_scan_needs_a_ring() {
        let ring = CylinderRing::new();
        assert_eq!(scan(&ring, 0).unwrap_err(), SchedulingError::EmptyRing);
    }
}
