use std::ops::Range;

use crate::grouper::GroupedRecord;

/// The three load-configuration variables a report can isolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadVariable {
    PriorWrites,
    WritesPerSecond,
    ReadsPerSecond,
}

impl LoadVariable {
    pub const ALL: [LoadVariable; 3] = [
        LoadVariable::PriorWrites,
        LoadVariable::WritesPerSecond,
        LoadVariable::ReadsPerSecond,
    ];

    /// Field name as it appears in grouped CSV headers and report file
    /// names.
    pub fn name(self) -> &'static str {
        match self {
            LoadVariable::PriorWrites => "prior_writes",
            LoadVariable::WritesPerSecond => "writes_per_second",
            LoadVariable::ReadsPerSecond => "reads_per_second",
        }
    }

    pub fn of(self, row: &GroupedRecord) -> u64 {
        match self {
            LoadVariable::PriorWrites => row.prior_writes,
            LoadVariable::WritesPerSecond => row.writes_per_second,
            LoadVariable::ReadsPerSecond => row.reads_per_second,
        }
    }

    /// The two variables that stay pinned while this one is isolated.
    pub fn others(self) -> [LoadVariable; 2] {
        match self {
            LoadVariable::PriorWrites => {
                [LoadVariable::WritesPerSecond, LoadVariable::ReadsPerSecond]
            }
            LoadVariable::WritesPerSecond => {
                [LoadVariable::PriorWrites, LoadVariable::ReadsPerSecond]
            }
            LoadVariable::ReadsPerSecond => {
                [LoadVariable::PriorWrites, LoadVariable::WritesPerSecond]
            }
        }
    }
}

/// A named filter over the three load variables. Each range is half-open:
/// inclusive lower bound, exclusive upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadProfile {
    pub prior_writes: Range<u64>,
    pub writes_per_second: Range<u64>,
    pub reads_per_second: Range<u64>,
}

impl LoadProfile {
    /// Load that may be encountered for the most popular index entries.
    pub fn reasonable() -> Self {
        LoadProfile {
            prior_writes: 1_000..1_000_001,
            writes_per_second: 1_000..100_001,
            reads_per_second: 1_000..1_000_001,
        }
    }

    /// Load that may be typical for some popular entries but is likely
    /// less than the most popular entries.
    pub fn light() -> Self {
        LoadProfile {
            prior_writes: 10..1_001,
            writes_per_second: 1..1_001,
            reads_per_second: 1..1_001,
        }
    }

    /// Load that may exceed the typical amount for any index.
    pub fn heavy() -> Self {
        LoadProfile {
            prior_writes: 100_000..u64::MAX,
            writes_per_second: 100_000..u64::MAX,
            reads_per_second: 100_000..u64::MAX,
        }
    }

    /// Write-only scenarios: reads pinned to zero, prior writes held in a
    /// named band, write rate left free for isolation.
    fn no_reads(prior_writes: Range<u64>) -> Self {
        LoadProfile {
            prior_writes,
            writes_per_second: 0..u64::MAX,
            reads_per_second: 0..1,
        }
    }

    pub fn no_reads_little_prior() -> Self {
        Self::no_reads(0..1_000)
    }

    pub fn no_reads_some_prior() -> Self {
        Self::no_reads(1_000..100_000)
    }

    pub fn no_reads_many_prior() -> Self {
        Self::no_reads(100_000..u64::MAX)
    }

    pub fn range(&self, variable: LoadVariable) -> &Range<u64> {
        match variable {
            LoadVariable::PriorWrites => &self.prior_writes,
            LoadVariable::WritesPerSecond => &self.writes_per_second,
            LoadVariable::ReadsPerSecond => &self.reads_per_second,
        }
    }

    /// Whether `row` falls inside this profile for every pinned variable.
    pub fn admits(&self, row: &GroupedRecord, pinned: &[LoadVariable]) -> bool {
        pinned
            .iter()
            .all(|&variable| self.range(variable).contains(&variable.of(row)))
    }
}
