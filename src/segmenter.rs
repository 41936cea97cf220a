/// Marker line the harness prints at the start of every run.
pub const RUN_MARKER: &str = "running load test: Args {";

/// Splits raw log text into per-run line groups.
///
/// A stripped line equal to [`RUN_MARKER`] starts a new group and becomes
/// that group's first line; the group accumulated so far is yielded first.
/// Blank lines are dropped. Non-marker content before the first marker
/// comes out as its own group so the parser can report it.
pub fn segment_runs(text: &str) -> RunSegments<'_> {
    RunSegments {
        lines: text.lines(),
        current: Vec::new(),
        done: false,
    }
}

/// Lazy, single-pass iterator over run groups.
pub struct RunSegments<'a> {
    lines: std::str::Lines<'a>,
    current: Vec<&'a str>,
    done: bool,
}

impl<'a> Iterator for RunSegments<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for line in self.lines.by_ref() {
            let line = line.trim();
            if line == RUN_MARKER && !self.current.is_empty() {
                let group = std::mem::take(&mut self.current);
                self.current.push(line);
                return Some(group);
            }
            if !line.is_empty() {
                self.current.push(line);
            }
        }
        self.done = true;
        if self.current.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.current))
        }
    }
}
