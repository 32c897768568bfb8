use log::debug;

use crate::types::{Cylinder, SchedulingError};

/// Circular doubly linked ring of cylinder requests.
///
/// Nodes live in an arena, `prev`/`next` hold arena indices. The ring never
/// relinks nodes once inserted: sorting swaps the values carried by adjacent
/// nodes, so a node index is stable for the lifetime of a scenario.
///
/// `head` is the entry point of the ring. New requests are inserted right
/// before it, at the "end" of the ring.
#[derive(Debug, Clone, Default)]
pub struct CylinderRing {
    prev: Vec<usize>,
    next: Vec<usize>,
    /// Maps node index to the cylinder it requests
    vals: Vec<Cylinder>,
    head: Option<usize>,
    first: Option<usize>,
    last: Option<usize>,
}

impl CylinderRing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            prev: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
            head: None,
            first: None,
            last: None,
        }
    }

    /// Builds a ring by inserting `cylinders` in order. The first one ends up as head.
    pub fn from_cylinders<I: IntoIterator<Item = Cylinder>>(cylinders: I) -> Self {
        let mut ring = Self::new();
        for cylinder in cylinders {
            ring.insert(cylinder);
        }
        ring
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Inserts a new request just before the head and returns its node index.
    ///
    /// The new node becomes `last`. Into an empty ring it becomes the only node,
    /// linked to itself, and is `head`, `first` and `last` at once.
    pub fn insert(&mut self, cylinder: Cylinder) -> usize {
        let idx = self.vals.len();
        self.vals.push(cylinder);
        self.prev.push(idx);
        self.next.push(idx);

        match self.head {
            None => {
                self.head = Some(idx);
                self.first = Some(idx);
            }
            Some(head) => {
                let tail = self.prev[head];
                self.link(tail, idx);
                self.link(idx, head);
            }
        }
        self.last = Some(idx);
        idx
    }

    /// Drops every node and forgets `head`, `first` and `last`.
    pub fn clear(&mut self) {
        self.prev.clear();
        self.next.clear();
        self.vals.clear();
        self.head = None;
        self.first = None;
        self.last = None;
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Node holding the smallest cylinder once the ring is sorted.
    pub fn first(&self) -> Option<usize> {
        self.first
    }

    /// Node holding the largest cylinder once the ring is sorted.
    pub fn last(&self) -> Option<usize> {
        self.last
    }

    pub fn next(&self, idx: usize) -> usize {
        self.next[idx]
    }

    pub fn prev(&self, idx: usize) -> usize {
        self.prev[idx]
    }

    pub fn value(&self, idx: usize) -> Cylinder {
        self.vals[idx]
    }

    /// Seek distance between the cylinders of two nodes.
    pub fn distance(&self, a: usize, b: usize) -> usize {
        self.vals[a].abs_diff(self.vals[b])
    }

    pub fn contains(&self, idx: usize) -> bool {
        idx < self.vals.len()
    }

    /// Node indices visited walking `next` links once around the ring from `start`.
    pub fn walk_from(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        let mut idx = start;
        (0..self.len()).map(move |_| {
            let current = idx;
            idx = self.next[idx];
            current
        })
    }

    /// Cylinders in ring order, starting at `first`.
    pub fn cylinders(&self) -> Vec<Cylinder> {
        match self.first {
            Some(first) => self.walk_from(first).map(|idx| self.vals[idx]).collect(),
            None => Vec::new(),
        }
    }

    /// Sorts the ring ascending, starting from the head, by swapping adjacent values.
    ///
    /// Returns the cylinder the head held before sorting. The head node keeps its
    /// position in the ring but may carry a different value afterwards, so the head
    /// has to be found again with [`CylinderRing::relocate_head`].
    ///
    /// Equal neighbours are never swapped.
    pub fn sort(&mut self) -> Result<Cylinder, SchedulingError> {
        let head = self.head.ok_or(SchedulingError::EmptyRing)?;
        let starting_cylinder = self.vals[head];

        let mut swapped = true;
        while swapped {
            swapped = false;
            let mut idx = head;
            while self.next[idx] != head {
                let succ = self.next[idx];
                if self.vals[idx] > self.vals[succ] {
                    self.vals.swap(idx, succ);
                    swapped = true;
                }
                idx = succ;
            }
        }

        self.first = Some(head);
        self.last = Some(self.prev[head]);
        Ok(starting_cylinder)
    }

    /// Moves the head to the first node, walking forward from the current head,
    /// that carries `starting_cylinder`.
    pub fn relocate_head(&mut self, starting_cylinder: Cylinder) -> Result<usize, SchedulingError> {
        let head = self.head.ok_or(SchedulingError::EmptyRing)?;
        let found = self
            .walk_from(head)
            .find(|&idx| self.vals[idx] == starting_cylinder)
            .ok_or(SchedulingError::HeadNotFound {
                cylinder: starting_cylinder,
            })?;

        debug!("head relocated from node {} to node {} (cylinder {})", head, found, starting_cylinder);
        self.head = Some(found);
        Ok(found)
    }

    /// Checks that `head` names a node and that there is something to schedule.
    pub(crate) fn check_schedulable(&self, head: usize) -> Result<(), SchedulingError> {
        if self.is_empty() {
            return Err(SchedulingError::EmptyRing);
        }
        if self.len() < 2 {
            return Err(SchedulingError::TooFewRequests { len: self.len() });
        }
        if !self.contains(head) {
            return Err(SchedulingError::InvalidHead { index: head });
        }
        Ok(())
    }

    /// `first` and `last` of a non-empty ring.
    pub(crate) fn bounds(&self) -> Result<(usize, usize), SchedulingError> {
        match (self.first, self.last) {
            (Some(first), Some(last)) => Ok((first, last)),
            _ => Err(SchedulingError::EmptyRing),
        }
    }

    fn link(&mut self, u_idx: usize, v_idx: usize) {
        self.next[u_idx] = v_idx;
        self.prev[v_idx] = u_idx;
    }
}
