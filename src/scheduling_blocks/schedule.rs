use fixedbitset::FixedBitSet;

use crate::types::Algorithm;

/// One move of the disk arm: the node it serviced and the distance charged for getting there.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub node: usize,
    pub distance: usize,
}

/// Outcome of running one algorithm over a sorted ring.
#[derive(Clone, Debug)]
pub struct Schedule {
    pub algorithm: Algorithm,
    /// Node the arm started on
    pub head: usize,
    /// Requests in the order they were serviced, head excluded
    pub steps: Vec<Step>,
    /// Sum of the distances of all steps
    pub head_movement: usize,
    serviced: FixedBitSet,
}

impl Schedule {
    pub(crate) fn new(algorithm: Algorithm, head: usize, ring_len: usize) -> Self {
        let mut serviced = FixedBitSet::with_capacity(ring_len);
        serviced.insert(head);
        Self {
            algorithm,
            head,
            steps: Vec::with_capacity(ring_len.saturating_sub(1)),
            head_movement: 0,
            serviced,
        }
    }

    /// Records that the arm moved to `node`, charging `distance`.
    pub(crate) fn service(&mut self, node: usize, distance: usize) {
        debug_assert!(!self.serviced.contains(node), "node {} serviced twice", node);
        log::trace!("{}: -> node {} (+{})", self.algorithm, node, distance);
        self.serviced.insert(node);
        self.steps.push(Step { node, distance });
        self.head_movement += distance;
    }

    /// Number of requests serviced so far, not counting the one under the head at start.
    pub fn serviced_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_serviced(&self, node: usize) -> bool {
        self.serviced.contains(node)
    }

    /// Head followed by every serviced node, in service order.
    pub fn path(&self) -> Vec<usize> {
        std::iter::once(self.head)
            .chain(self.steps.iter().map(|step| step.node))
            .collect()
    }
}
