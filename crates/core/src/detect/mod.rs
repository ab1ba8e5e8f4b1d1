use crate::scan::SourceFile;
use crate::types::{ScanOptions, ScanStats};

mod expand;
mod windows;


pub(crate) use expand::MatchSpan;

pub(crate) fn detect_duplicate_blocks(
    corpus: &[SourceFile],
    options: &ScanOptions,
    stats: &mut ScanStats,
) -> Vec<MatchSpan> {
    let min_lines = options.min_lines.max(1);

    let buckets = windows::build_digest_buckets(corpus, min_lines, options.min_significant);
    let mut spans = expand::expand_buckets(corpus, buckets, min_lines, options, stats);

    // Longest first; the full tuple as secondary key keeps the order stable
    // across runs regardless of bucket iteration order.
    spans.sort_by(|a, b| {
        b.len.cmp(&a.len).then_with(|| {
            (a.file_a, a.start_a, a.file_b, a.start_b).cmp(&(
                b.file_a,
                b.start_a,
                b.file_b,
                b.start_b,
            ))
        })
    });
    spans
}
