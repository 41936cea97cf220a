use serde::Serialize;

/// Duration recorded for a run the harness gave up on.
pub const TIMEOUT_SECS: f64 = 300.0;

/// One executed benchmark run, as printed by the load-test harness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRecord {
    pub map_type: String,
    pub shards: u64,
    pub prior_writes: u64,
    pub writes_per_second: u64,
    pub reads_per_second: u64,
    pub duration: Option<f64>,
    pub cpu_time: Option<f64>,
}

impl TestRecord {
    pub const FIELDS: [&'static str; 7] = [
        "map_type",
        "shards",
        "prior_writes",
        "writes_per_second",
        "reads_per_second",
        "duration",
        "cpu_time",
    ];

    /// The load configuration this run exercised.
    pub fn key(&self) -> (u64, u64, u64) {
        (self.prior_writes, self.writes_per_second, self.reads_per_second)
    }

    pub fn variant(&self) -> Option<MapVariant> {
        MapVariant::from_identity(&self.map_type, self.shards)
    }
}

/// Map implementations under test, identified in the log by their
/// `(map_type, shards)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapVariant {
    Hashmap,
    Dashmap4,
    Dashmap8,
}

impl MapVariant {
    pub fn from_identity(map_type: &str, shards: u64) -> Option<Self> {
        match (map_type, shards) {
            ("Hashmap", 1) => Some(MapVariant::Hashmap),
            ("Dashmap", 4) => Some(MapVariant::Dashmap4),
            ("Dashmap", 8) => Some(MapVariant::Dashmap8),
            _ => None,
        }
    }
}

/// Which measurement the grouper reads off a [`TestRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationKind {
    Wall,
    Cpu,
}

impl DurationKind {
    pub fn select(self, record: &TestRecord) -> Option<f64> {
        match self {
            DurationKind::Wall => record.duration,
            DurationKind::Cpu => record.cpu_time,
        }
    }
}
