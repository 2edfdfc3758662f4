/// Counters reported by a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Bytes read from the source buffer.
    pub bytes_in: usize,
    /// Bytes written to the sink.
    pub bytes_out: usize,
    /// Deepest brace nesting reached.
    pub max_depth: isize,
    /// Brace depth when the scan stopped; non-zero for unbalanced input.
    pub final_depth: isize,
    /// Offset of the first byte after `%%`, when a purify scan found one.
    pub rules_offset: Option<usize>,
}

impl ScanSummary {
    /// Folds the summary of a follow-on pass into this one.
    pub(crate) fn chain(self, next: ScanSummary) -> Self {
        Self {
            bytes_in: self.bytes_in + next.bytes_in,
            bytes_out: self.bytes_out + next.bytes_out,
            max_depth: self.max_depth.max(next.max_depth),
            final_depth: next.final_depth,
            rules_offset: self.rules_offset.or(next.rules_offset),
        }
    }
}
