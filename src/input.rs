use rand::Rng;

use crate::ring::CylinderRing;
use crate::types::{Cylinder, MAX_CYLINDER, MIN_CYLINDER, SchedulingError};

/// Draws one request uniformly from the whole disk.
pub fn random_cylinder<R: Rng>(rng: &mut R) -> Cylinder {
    rng.random_range(MIN_CYLINDER..=MAX_CYLINDER)
}

/// Inserts `count` random requests into `ring`.
///
/// Duplicates are kept, every draw becomes its own node.
pub fn fill_ring<R: Rng>(ring: &mut CylinderRing, rng: &mut R, count: usize) {
    for _ in 0..count {
        ring.insert(random_cylinder(rng));
    }
}

/// Parses an explicit request list.
///
/// Input format:
/// - cylinders separated by commas (whitespace around them is ignored),
/// - every cylinder within `0..=999`,
/// - the first cylinder is where the head starts.
///
/// Example input:
/// ```text
/// 53, 98, 183, 37, 122, 14, 124, 65, 67
/// ```
pub fn parse_requests(input: &str) -> Result<Vec<Cylinder>, SchedulingError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let cylinder: Cylinder = part
                .parse()
                .map_err(|_| SchedulingError::InvalidRequest(part.to_string()))?;
            if cylinder > MAX_CYLINDER {
                return Err(SchedulingError::CylinderOutOfRange { cylinder });
            }
            Ok(cylinder)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_requests() {
        let requests = parse_requests("53, 98,183 ,37\n").unwrap();
        assert_eq!(requests, vec![53, 98, 183, 37]);
    }

    #[test]
    fn test_parse_skips_empty_parts() {
        assert_eq!(parse_requests("1,,2,").unwrap(), vec![1, 2]);
        assert!(parse_requests("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_requests("1,x,3"),
            Err(SchedulingError::InvalidRequest("x".to_string()))
        );
        assert_eq!(
            parse_requests("-4"),
            Err(SchedulingError::InvalidRequest("-4".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            parse_requests("999,1000"),
            Err(SchedulingError::CylinderOutOfRange { cylinder: 1000 })
        );
    }

    #[test]
    fn test_fill_ring_stays_on_disk() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ring = CylinderRing::new();
        fill_ring(&mut ring, &mut rng, 500);

        assert_eq!(ring.len(), 500);
        assert!(ring.cylinders().iter().all(|&c| c <= MAX_CYLINDER));
    }

    #[test]
    fn test_same_seed_same_requests() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ring = CylinderRing::new();
            fill_ring(&mut ring, &mut rng, 20);
            ring.cylinders()
        };
        assert_eq!(draw(3), draw(3));
    }
}
