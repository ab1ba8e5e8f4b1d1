use std::collections::HashSet;

use crate::scan::SourceFile;
use crate::types::{ScanOptions, ScanStats};

use super::windows::{DigestBuckets, WindowOcc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchSpan {
    pub(crate) len: usize,
    pub(crate) file_a: usize,
    pub(crate) start_a: usize,
    pub(crate) file_b: usize,
    pub(crate) start_b: usize,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
struct MatchKey {
    file_a: usize,
    start_a: usize,
    file_b: usize,
    start_b: usize,
    len: usize,
}

pub(crate) fn expand_buckets(
    corpus: &[SourceFile],
    buckets: DigestBuckets,
    min_lines: usize,
    options: &ScanOptions,
    stats: &mut ScanStats,
) -> Vec<MatchSpan> {
    let max_pairs_per_hash = options.max_pairs_per_hash.max(1);

    let mut seen: HashSet<MatchKey> = HashSet::new();
    let mut out = Vec::new();

    for mut occs in buckets.into_values() {
        if occs.len() < 2 {
            continue;
        }
        if occs.len() > max_pairs_per_hash {
            // Occurrences are in (file, start) discovery order; keep the head.
            occs.truncate(max_pairs_per_hash);
            stats.skipped_bucket_truncated = stats.skipped_bucket_truncated.saturating_add(1);
        }

        for i in 0..occs.len() {
            for j in (i + 1)..occs.len() {
                let a = occs[i];
                let b = occs[j];
                if a.file == b.file {
                    if !options.include_same_file {
                        continue;
                    }
                    // A window overlapping its own tail is not a second location.
                    if a.start.abs_diff(b.start) < min_lines {
                        continue;
                    }
                }

                let span = expand_pair(corpus, a, b, min_lines);
                let key = MatchKey {
                    file_a: span.file_a,
                    start_a: span.start_a,
                    file_b: span.file_b,
                    start_b: span.start_b,
                    len: span.len,
                };
                if !seen.insert(key) {
                    continue;
                }
                out.push(span);
            }
        }
    }

    out
}

// Two-pointer growth from an already-equal window: one line at a time in each
// direction, both sides in lockstep. The windows are confirmed equal before we
// get here, so no general longest-common-substring machinery is needed.
fn expand_pair(corpus: &[SourceFile], a: WindowOcc, b: WindowOcc, min_lines: usize) -> MatchSpan {
    let lines_a = &corpus[a.file].lines;
    let lines_b = &corpus[b.file].lines;

    let mut start_a = a.start;
    let mut start_b = b.start;
    while start_a > 0 && start_b > 0 && lines_a[start_a - 1] == lines_b[start_b - 1] {
        start_a -= 1;
        start_b -= 1;
    }

    let mut end_a = a.start + min_lines;
    let mut end_b = b.start + min_lines;
    while end_a < lines_a.len() && end_b < lines_b.len() && lines_a[end_a] == lines_b[end_b] {
        end_a += 1;
        end_b += 1;
    }

    let len = end_a - start_a;
    let (file_a, file_b, start_a, start_b) = canonicalize(a.file, b.file, start_a, start_b);
    MatchSpan {
        len,
        file_a,
        start_a,
        file_b,
        start_b,
    }
}

fn canonicalize(
    file_a: usize,
    file_b: usize,
    start_a: usize,
    start_b: usize,
) -> (usize, usize, usize, usize) {
    if (file_a, start_a) <= (file_b, start_b) {
        (file_a, file_b, start_a, start_b)
    } else {
        (file_b, file_a, start_b, start_a)
    }
}
