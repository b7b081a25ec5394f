use std::ops::Range;

/// Splits [start, end) into exactly `parts` contiguous, disjoint ranges.
///
/// Every part gets `span / parts` values; the last part absorbs the
/// remainder, so the concatenation of all parts is exactly [start, end)
/// with no gaps and no overlaps. When the span is smaller than `parts`,
/// leading parts come back empty.
pub(crate) fn split_range(start: u64, end: u64, parts: usize) -> Vec<Range<u64>> {
    let parts = parts.max(1);
    let span = end.saturating_sub(start);
    let step = span / parts as u64;

    let mut ranges = Vec::with_capacity(parts);
    let mut cursor = start;
    for _ in 0..parts - 1 {
        ranges.push(cursor..cursor + step);
        cursor += step;
    }
    ranges.push(cursor..end.max(start));

    ranges
}
