use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::averager::{average_by, AveragedRecord};
use crate::csv_report::write_records;
use crate::grouper::{group_records, GroupedRecord};
use crate::profiles::{LoadProfile, LoadVariable};
use crate::record::{DurationKind, TestRecord};
use crate::record_parser::parse_record;
use crate::segmenter::segment_runs;

/// Parses every run group in `text`. Groups that fail to parse are logged
/// with their raw lines and skipped; partial success is the expected
/// steady state for hand-formatted logs.
pub fn parse_raw_output(text: &str) -> Vec<TestRecord> {
    let mut records = Vec::new();
    for group in segment_runs(text) {
        match parse_record(&group) {
            Ok(record) => records.push(record),
            Err(err) => warn!("failed to parse {group:?}: {err:#}"),
        }
    }
    records
}

/// Profiles swept over all three load variables.
fn swept_profiles() -> [(&'static str, LoadProfile); 3] {
    [
        ("reasonable_load", LoadProfile::reasonable()),
        ("light_load", LoadProfile::light()),
        ("heavy_load", LoadProfile::heavy()),
    ]
}

/// Write-only profiles, swept over the write rate only.
fn write_band_profiles() -> [(&'static str, LoadProfile); 3] {
    [
        ("no_reads_little_prior", LoadProfile::no_reads_little_prior()),
        ("no_reads_some_prior", LoadProfile::no_reads_some_prior()),
        ("no_reads_many_prior", LoadProfile::no_reads_many_prior()),
    ]
}

/// Runs the whole pipeline for one captured log: reads `<prefix>.txt` and
/// writes the raw, grouped, and averaged CSV reports next to it.
pub fn run_report(prefix: &str) -> Result<()> {
    let input = format!("{prefix}.txt");
    let text = fs::read_to_string(&input).with_context(|| format!("failed to read {input}"))?;

    let tests = parse_raw_output(&text);
    info!(runs = tests.len(), "parsed {input}");

    let grouped = group_records(&tests, DurationKind::Wall);
    let grouped_cpu = group_records(&tests, DurationKind::Cpu);

    write_records(format!("{prefix}.csv"), &TestRecord::FIELDS, None, &tests)?;
    write_records(
        format!("{prefix}_grouped.csv"),
        &GroupedRecord::FIELDS,
        None,
        &grouped,
    )?;
    write_records(
        format!("{prefix}_grouped_cpu.csv"),
        &GroupedRecord::FIELDS,
        None,
        &grouped_cpu,
    )?;

    for (label, profile) in swept_profiles() {
        for variable in LoadVariable::ALL {
            write_averages(prefix, &grouped, &profile, variable, label)?;
        }
    }
    for (label, profile) in write_band_profiles() {
        write_averages(prefix, &grouped, &profile, LoadVariable::WritesPerSecond, label)?;
    }
    Ok(())
}

fn write_averages(
    prefix: &str,
    rows: &[GroupedRecord],
    profile: &LoadProfile,
    variable: LoadVariable,
    label: &str,
) -> Result<()> {
    let averages = average_by(rows, profile, variable);
    let path = format!("{prefix}.{}.{label}.csv", variable.name());
    write_records(
        path,
        &AveragedRecord::FIELDS,
        Some(("bucket", AveragedRecord::BUCKET_HEADER)),
        &averages,
    )
}
