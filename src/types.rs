/// Cylinder number on the simulated disk surface.
pub type Cylinder = usize;

/// Lowest addressable cylinder, the low physical edge of the disk.
pub const MIN_CYLINDER: Cylinder = 0;

/// Highest addressable cylinder, the high physical edge of the disk.
pub const MAX_CYLINDER: Cylinder = 999;

/// Number of requests generated per scenario when nothing else is asked for.
pub const DEFAULT_REQUEST_COUNT: usize = 20;

/// Number of independent scenarios the driver runs by default.
pub const DEFAULT_SCENARIO_COUNT: usize = 5;

/// Enum representing the scheduling strategy that produced a schedule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Algorithm {
    Sstf,
    Scan,
    CLook,
}

impl Algorithm {
    /// All algorithms, in the order a scenario runs them.
    pub const ALL: [Algorithm; 3] = [Algorithm::Sstf, Algorithm::Scan, Algorithm::CLook];

    /// Lowercase name, usable in file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Algorithm::Sstf => "sstf",
            Algorithm::Scan => "scan",
            Algorithm::CLook => "c_look",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Sstf => write!(f, "SSTF"),
            Algorithm::Scan => write!(f, "SCAN"),
            Algorithm::CLook => write!(f, "C-LOOK"),
        }
    }
}

/// Contract violations and malformed input reported by the library.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SchedulingError {
    /// The ring holds no request at all.
    EmptyRing,
    /// Scheduling needs a head plus at least one other request.
    TooFewRequests { len: usize },
    /// No node carries the cylinder captured before sorting.
    HeadNotFound { cylinder: Cylinder },
    /// The head index does not name a node of the ring.
    InvalidHead { index: usize },
    /// Scheduling was asked for before the ring was sorted and its head relocated.
    NotPrepared,
    CylinderOutOfRange { cylinder: Cylinder },
    InvalidRequest(String),
}

impl std::fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingError::EmptyRing => write!(f, "ring holds no requests"),
            SchedulingError::TooFewRequests { len } => {
                write!(f, "scheduling needs at least 2 requests, ring holds {}", len)
            }
            SchedulingError::HeadNotFound { cylinder } => {
                write!(f, "no request at starting cylinder {}", cylinder)
            }
            SchedulingError::InvalidHead { index } => {
                write!(f, "head index {} is not a ring node", index)
            }
            SchedulingError::NotPrepared => write!(f, "ring has not been sorted yet"),
            SchedulingError::CylinderOutOfRange { cylinder } => write!(
                f,
                "cylinder {} outside of disk range {}..={}",
                cylinder, MIN_CYLINDER, MAX_CYLINDER
            ),
            SchedulingError::InvalidRequest(raw) => {
                write!(f, "request {:?} is not a cylinder number", raw)
            }
        }
    }
}

impl std::error::Error for SchedulingError {}
