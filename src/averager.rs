use std::collections::HashMap;

use serde::Serialize;

use crate::grouper::GroupedRecord;
use crate::profiles::{LoadProfile, LoadVariable};

/// Mean duration per variant across all rows sharing one value of the
/// isolated variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AveragedRecord {
    pub bucket: u64,
    pub hashmap_duration: Option<f64>,
    pub dashmap4_duration: Option<f64>,
    pub dashmap8_duration: Option<f64>,
}

impl AveragedRecord {
    pub const FIELDS: [&'static str; 4] = [
        "bucket",
        "hashmap_duration",
        "dashmap4_duration",
        "dashmap8_duration",
    ];

    /// Header name the bucket column carries in emitted reports.
    pub const BUCKET_HEADER: &'static str = "x";
}

#[derive(Default)]
struct Samples {
    hashmap: Vec<f64>,
    dashmap4: Vec<f64>,
    dashmap8: Vec<f64>,
}

/// Buckets rows by the value of `isolate`, keeping only rows whose other
/// two variables fall inside `profile`, and averages each variant's
/// non-null durations per bucket. Buckets come out in first-seen order; a
/// variant with no samples in a bucket averages to `None`.
pub fn average_by(
    rows: &[GroupedRecord],
    profile: &LoadProfile,
    isolate: LoadVariable,
) -> Vec<AveragedRecord> {
    let pinned = isolate.others();
    let mut order: Vec<u64> = Vec::new();
    let mut buckets: HashMap<u64, Samples> = HashMap::new();
    for row in rows {
        if !profile.admits(row, &pinned) {
            continue;
        }
        let value = isolate.of(row);
        let samples = buckets.entry(value).or_insert_with(|| {
            order.push(value);
            Samples::default()
        });
        if let Some(duration) = row.hashmap_duration {
            samples.hashmap.push(duration);
        }
        if let Some(duration) = row.dashmap4_duration {
            samples.dashmap4.push(duration);
        }
        if let Some(duration) = row.dashmap8_duration {
            samples.dashmap8.push(duration);
        }
    }
    order
        .into_iter()
        .map(|value| {
            let samples = &buckets[&value];
            AveragedRecord {
                bucket: value,
                hashmap_duration: mean(&samples.hashmap),
                dashmap4_duration: mean(&samples.dashmap4),
                dashmap8_duration: mean(&samples.dashmap8),
            }
        })
        .collect()
}

fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}
