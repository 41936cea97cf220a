use anyhow::{bail, Context, Result};

use crate::record::{TestRecord, TIMEOUT_SECS};

// Field extraction is positional. The harness prints its clap `Args` with
// `{:#?}` followed by the timing lines, so after stripping blanks every
// field sits at a fixed offset within the group. These offsets are the
// format contract with the harness; a change to its output breaks them.
const LINE_MAP_TYPE: usize = 1; //      map: Dashmap,
const LINE_SHARDS: usize = 3; //        4,              (inside shards: Some(..))
const LINE_PRIOR_WRITES: usize = 8; //  prior_writes: 1000,
const LINE_WRITES_PER_SECOND: usize = 9;
const LINE_READS_PER_SECOND: usize = 10;
const LINE_DURATION: usize = 14; //     Contention test duration: 2.005s
const LINE_CPU_BREAKDOWN: usize = 15; // 2.01 real 7.80 user 0.12 sys (optional)

const DURATION_PREFIX: &str = "Contention test duration: ";
const TIMEOUT_MARKER: &str = "TIMEOUT";

/// Parses one segmented line group into a [`TestRecord`].
///
/// Any missing line or failed numeric conversion is an error for this
/// record only; callers log it and move on to the next group.
pub fn parse_record(lines: &[&str]) -> Result<TestRecord> {
    let duration = parse_duration(line_at(lines, LINE_DURATION)?)?;
    let cpu_time = match lines.get(LINE_CPU_BREAKDOWN) {
        Some(line) => parse_cpu_time(duration, line)?,
        None => None,
    };
    Ok(TestRecord {
        map_type: parse_map_type(line_at(lines, LINE_MAP_TYPE)?)?,
        shards: parse_leading_int(line_at(lines, LINE_SHARDS)?)?,
        prior_writes: parse_trailing_int(line_at(lines, LINE_PRIOR_WRITES)?)?,
        writes_per_second: parse_trailing_int(line_at(lines, LINE_WRITES_PER_SECOND)?)?,
        reads_per_second: parse_trailing_int(line_at(lines, LINE_READS_PER_SECOND)?)?,
        duration: Some(duration),
        cpu_time,
    })
}

fn line_at<'a>(lines: &[&'a str], index: usize) -> Result<&'a str> {
    lines
        .get(index)
        .copied()
        .with_context(|| format!("line {index} missing from group of {} lines", lines.len()))
}

/// `map: Dashmap,` → `Dashmap`
fn parse_map_type(line: &str) -> Result<String> {
    let token = line
        .split_whitespace()
        .nth(1)
        .with_context(|| format!("no map type token in {line:?}"))?;
    Ok(token.trim_end_matches(',').to_string())
}

/// `4,` → 4
fn parse_leading_int(line: &str) -> Result<u64> {
    line.trim_end_matches(',')
        .parse()
        .with_context(|| format!("bad shard count in {line:?}"))
}

/// `prior_writes: 1000,` → 1000
fn parse_trailing_int(line: &str) -> Result<u64> {
    let token = line
        .split_whitespace()
        .last()
        .with_context(|| format!("no value token in {line:?}"))?;
    token
        .trim_end_matches(',')
        .parse()
        .with_context(|| format!("bad integer in {line:?}"))
}

/// `Contention test duration: 2.005s` → 2.005; a TIMEOUT line yields the
/// sentinel instead.
fn parse_duration(line: &str) -> Result<f64> {
    if line.contains(DURATION_PREFIX) {
        let token = line
            .split_whitespace()
            .last()
            .with_context(|| format!("no duration token in {line:?}"))?;
        return token
            .trim_end_matches('s')
            .parse()
            .with_context(|| format!("bad duration in {line:?}"));
    }
    if line.contains(TIMEOUT_MARKER) {
        return Ok(TIMEOUT_SECS);
    }
    bail!("expected duration or TIMEOUT, got {line:?}")
}

/// Derives cpu time from a `/usr/bin/time`-style breakdown line,
/// `<real> real <user> user <sys> sys`. A line that is not a breakdown
/// (or a zero wall time) yields `None`; a breakdown with unparseable
/// numbers is an error.
fn parse_cpu_time(duration: f64, line: &str) -> Result<Option<f64>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 6 || tokens[1] != "real" || tokens[3] != "user" || tokens[5] != "sys" {
        return Ok(None);
    }
    let real: f64 = tokens[0]
        .parse()
        .with_context(|| format!("bad real time in {line:?}"))?;
    let user: f64 = tokens[2]
        .parse()
        .with_context(|| format!("bad user time in {line:?}"))?;
    let sys: f64 = tokens[4]
        .parse()
        .with_context(|| format!("bad sys time in {line:?}"))?;
    if real == 0.0 {
        return Ok(None);
    }
    Ok(Some(duration * (user + sys) / real))
}
