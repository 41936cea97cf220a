use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::record::{DurationKind, MapVariant, TestRecord};

/// One row per distinct load configuration, holding the measured duration
/// for every known map variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedRecord {
    pub prior_writes: u64,
    pub writes_per_second: u64,
    pub reads_per_second: u64,
    pub hashmap_duration: Option<f64>,
    pub dashmap4_duration: Option<f64>,
    pub dashmap8_duration: Option<f64>,
}

impl GroupedRecord {
    pub const FIELDS: [&'static str; 6] = [
        "prior_writes",
        "writes_per_second",
        "reads_per_second",
        "hashmap_duration",
        "dashmap4_duration",
        "dashmap8_duration",
    ];

    fn new(key: (u64, u64, u64)) -> Self {
        GroupedRecord {
            prior_writes: key.0,
            writes_per_second: key.1,
            reads_per_second: key.2,
            hashmap_duration: None,
            dashmap4_duration: None,
            dashmap8_duration: None,
        }
    }

    pub fn duration(&self, variant: MapVariant) -> Option<f64> {
        match variant {
            MapVariant::Hashmap => self.hashmap_duration,
            MapVariant::Dashmap4 => self.dashmap4_duration,
            MapVariant::Dashmap8 => self.dashmap8_duration,
        }
    }

    fn duration_mut(&mut self, variant: MapVariant) -> &mut Option<f64> {
        match variant {
            MapVariant::Hashmap => &mut self.hashmap_duration,
            MapVariant::Dashmap4 => &mut self.dashmap4_duration,
            MapVariant::Dashmap8 => &mut self.dashmap8_duration,
        }
    }
}

/// Folds records into one row per load configuration, in first-seen key
/// order, routing the selected measurement into the field for each
/// record's variant.
///
/// A later record for the same (key, variant) pair overwrites the earlier
/// one. Records with an unrecognized variant identity are logged and left
/// out of grouping, but still reserve their row.
pub fn group_records(records: &[TestRecord], kind: DurationKind) -> Vec<GroupedRecord> {
    let mut rows: Vec<GroupedRecord> = Vec::new();
    let mut index: HashMap<(u64, u64, u64), usize> = HashMap::new();
    for record in records {
        let key = record.key();
        let slot = *index.entry(key).or_insert_with(|| {
            rows.push(GroupedRecord::new(key));
            rows.len() - 1
        });
        match record.variant() {
            Some(variant) => *rows[slot].duration_mut(variant) = kind.select(record),
            None => warn!(
                map_type = %record.map_type,
                shards = record.shards,
                "unknown map variant, dropping record from grouping"
            ),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(map_type: &str, shards: u64, key: (u64, u64, u64), duration: f64) -> TestRecord {
        TestRecord {
            map_type: map_type.to_string(),
            shards,
            prior_writes: key.0,
            writes_per_second: key.1,
            reads_per_second: key.2,
            duration: Some(duration),
            cpu_time: Some(duration * 2.0),
        }
    }

    #[test]
    fn test_variants_share_one_row() {
        let key = (1000, 10000, 5000);
        let records = vec![
            record("Hashmap", 1, key, 2.0),
            record("Dashmap", 4, key, 1.0),
            record("Dashmap", 8, key, 0.5),
        ];
        let rows = group_records(&records, DurationKind::Wall);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].prior_writes, 1000);
        assert_eq!(rows[0].writes_per_second, 10000);
        assert_eq!(rows[0].reads_per_second, 5000);
        assert_eq!(rows[0].hashmap_duration, Some(2.0));
        assert_eq!(rows[0].dashmap4_duration, Some(1.0));
        assert_eq!(rows[0].dashmap8_duration, Some(0.5));
    }

    #[test]
    fn test_first_seen_key_order() {
        let records = vec![
            record("Hashmap", 1, (10, 1, 1), 1.0),
            record("Hashmap", 1, (20, 1, 1), 2.0),
            record("Dashmap", 4, (10, 1, 1), 0.5),
        ];
        let rows = group_records(&records, DurationKind::Wall);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].prior_writes, 10);
        assert_eq!(rows[1].prior_writes, 20);
        assert_eq!(rows[0].dashmap4_duration, Some(0.5));
    }

    #[test]
    fn test_reordering_gives_same_rows_without_duplicates() {
        let key = (1000, 10000, 5000);
        let mut records = vec![
            record("Hashmap", 1, key, 2.0),
            record("Dashmap", 4, key, 1.0),
            record("Dashmap", 8, key, 0.5),
        ];
        let forward = group_records(&records, DurationKind::Wall);
        records.reverse();
        let backward = group_records(&records, DurationKind::Wall);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_duplicate_pair_overwrites() {
        let key = (1000, 10000, 5000);
        let records = vec![
            record("Hashmap", 1, key, 2.0),
            record("Hashmap", 1, key, 3.0),
        ];
        let rows = group_records(&records, DurationKind::Wall);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hashmap_duration, Some(3.0));
    }

    #[test]
    fn test_unknown_variant_dropped_but_row_reserved() {
        let records = vec![record("Dashmap", 16, (1, 2, 3), 1.0)];
        let rows = group_records(&records, DurationKind::Wall);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hashmap_duration, None);
        assert_eq!(rows[0].dashmap4_duration, None);
        assert_eq!(rows[0].dashmap8_duration, None);
    }

    #[test]
    fn test_cpu_kind_selects_cpu_time() {
        let records = vec![record("Hashmap", 1, (1, 2, 3), 2.0)];
        let rows = group_records(&records, DurationKind::Cpu);
        assert_eq!(rows[0].hashmap_duration, Some(4.0));
    }
}
