//! Latency statistics for codec benchmarks.
//!
//! Tracks minimum, maximum, average and a coarse histogram of per-word
//! decode+encode times.

/// Width of one histogram bucket in nanoseconds.
pub const BUCKET_NS: u64 = 50;

/// Number of histogram buckets. The last one collects everything slower.
pub const NUM_BUCKETS: usize = 20;

/// Accumulates latency samples with constant memory.
pub struct LatencyStats {
    pub min: u64,
    pub max: u64,
    pub sum: u64,
    pub count: u64,
    pub buckets: [u64; NUM_BUCKETS],
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self::new()
    }
}

impl LatencyStats {
    pub fn new() -> Self {
        Self {
            min: u64::MAX,
            max: 0,
            sum: 0,
            count: 0,
            buckets: [0; NUM_BUCKETS],
        }
    }

    /// Records one sample in nanoseconds.
    pub fn update(&mut self, nanos: u64) {
        self.min = self.min.min(nanos);
        self.max = self.max.max(nanos);
        self.sum += nanos;
        self.count += 1;

        let idx = ((nanos / BUCKET_NS) as usize).min(NUM_BUCKETS - 1);
        self.buckets[idx] += 1;
    }

    /// Average latency in nanoseconds, 0.0 when empty.
    pub fn avg(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// Formats the summary and the non-empty histogram buckets.
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![
            "Latency Metrics (decode + encode per word)".to_string(),
            format!("Count: {}", self.count),
        ];
        if self.count == 0 {
            return lines;
        }

        lines.push(format!("Min:   {:.2} ns", self.min as f64));
        lines.push(format!("Avg:   {:.2} ns", self.avg()));
        lines.push(format!("Max:   {:.2} ns", self.max as f64));
        lines.push(format!("Distribution ({BUCKET_NS}ns buckets):"));

        for (i, &count) in self.buckets.iter().enumerate() {
            if count > 0 {
                let lower = i as u64 * BUCKET_NS;
                let upper = lower + BUCKET_NS;
                let open = if i == NUM_BUCKETS - 1 { ">" } else { "" };
                lines.push(format!("[{lower:4}-{upper:4}{open} ns]: {count}"));
            }
        }
        lines
    }

    pub fn print_report(&self) {
        println!();
        for line in self.report() {
            println!("{line}");
        }
    }
}
