use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::input::random_cylinder;
use crate::ring::CylinderRing;

/// Unsorted ring of `n` random cylinders, reproducible from `seed`.
#[allow(dead_code)]
pub fn random_ring(n: usize, seed: u64) -> CylinderRing {
    let mut rng = StdRng::seed_from_u64(seed);
    CylinderRing::from_cylinders((0..n).map(|_| random_cylinder(&mut rng)))
}

/// Sorted ring of `n` random cylinders with the head already relocated.
#[allow(dead_code)]
pub fn random_sorted_ring(n: usize, seed: u64) -> (CylinderRing, usize) {
    let mut ring = random_ring(n, seed);
    let starting = ring.sort().expect("ring should not be empty");
    let head = ring.relocate_head(starting).expect("starting cylinder should be in the ring");
    (ring, head)
}

/// Sorted ring built from already ascending `cylinders`, head placed on `head_cylinder`.
#[allow(dead_code)]
pub fn sorted_ring_with_head(cylinders: &[usize], head_cylinder: usize) -> (CylinderRing, usize) {
    let mut ring = CylinderRing::from_cylinders(cylinders.iter().copied());
    ring.sort().expect("ring should not be empty");
    let head = ring
        .relocate_head(head_cylinder)
        .expect("head cylinder should be one of the requests");
    (ring, head)
}
