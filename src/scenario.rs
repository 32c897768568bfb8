use log::info;
use rand::Rng;

use crate::input::fill_ring;
use crate::ring::CylinderRing;
use crate::scheduling_blocks::{self, schedule::Schedule};
use crate::types::{Algorithm, Cylinder, SchedulingError};

/// One simulation run: a ring of requests and the head it starts from.
///
/// A scenario goes through build, sort, head relocation and then the three
/// algorithms, each of which only reads the ring. [`Scenario::reset`] drops
/// the requests so the same value can host the next run.
#[derive(Debug, Default)]
pub struct Scenario {
    ring: CylinderRing,
    starting_cylinder: Option<Cylinder>,
    head: Option<usize>,
}

/// Everything a scenario reports.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Sorted cylinders, starting at the smallest one
    pub cylinders: Vec<Cylinder>,
    pub head: usize,
    pub head_cylinder: Cylinder,
    pub schedules: Vec<Schedule>,
}

impl ScenarioReport {
    /// Total head movement `algorithm` reported, if it ran.
    pub fn head_movement(&self, algorithm: Algorithm) -> Option<usize> {
        self.schedules
            .iter()
            .find(|schedule| schedule.algorithm == algorithm)
            .map(|schedule| schedule.head_movement)
    }
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scenario over explicit requests. The first request is where the head starts.
    pub fn from_requests(requests: &[Cylinder]) -> Self {
        Self {
            ring: CylinderRing::from_cylinders(requests.iter().copied()),
            starting_cylinder: None,
            head: None,
        }
    }

    /// Scenario over `count` random requests.
    pub fn random<R: Rng>(rng: &mut R, count: usize) -> Self {
        let mut scenario = Self::new();
        scenario.populate(rng, count);
        scenario
    }

    /// Drops the current requests and draws `count` fresh random ones.
    pub fn populate<R: Rng>(&mut self, rng: &mut R, count: usize) {
        self.reset();
        fill_ring(&mut self.ring, rng, count);
    }

    pub fn ring(&self) -> &CylinderRing {
        &self.ring
    }

    /// Head node once [`Scenario::prepare`] ran.
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Cylinder the head started on, captured when the ring was sorted.
    pub fn starting_cylinder(&self) -> Option<Cylinder> {
        self.starting_cylinder
    }

    /// Sorts the ring and puts the head back on the cylinder it started on.
    pub fn prepare(&mut self) -> Result<usize, SchedulingError> {
        let starting_cylinder = self.ring.sort()?;
        let head = self.ring.relocate_head(starting_cylinder)?;
        self.starting_cylinder = Some(starting_cylinder);
        self.head = Some(head);
        Ok(head)
    }

    /// Runs one algorithm over the prepared ring.
    pub fn schedule(&self, algorithm: Algorithm) -> Result<Schedule, SchedulingError> {
        let head = self.head.ok_or(SchedulingError::NotPrepared)?;
        scheduling_blocks::run(algorithm, &self.ring, head)
    }

    /// Prepares the ring if needed and runs SSTF, SCAN and C-LOOK in turn.
    pub fn run(&mut self) -> Result<ScenarioReport, SchedulingError> {
        let head = match self.head {
            Some(head) => head,
            None => self.prepare()?,
        };
        info!(
            "scenario with {} requests, head on cylinder {}",
            self.ring.len(),
            self.ring.value(head)
        );

        let schedules = Algorithm::ALL
            .iter()
            .map(|&algorithm| self.schedule(algorithm))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScenarioReport {
            cylinders: self.ring.cylinders(),
            head,
            head_cylinder: self.ring.value(head),
            schedules,
        })
    }

    /// Frees every request so the next scenario starts from an empty ring.
    pub fn reset(&mut self) {
        self.ring.clear();
        self.starting_cylinder = None;
        self.head = None;
    }
}
