use std::io;
use std::path::Path;

use crate::detect;
use crate::scan::{self, SourceFile};
use crate::types::{BlockLocation, DuplicateBlock, ScanOptions, ScanOutcome, ScanStats};

pub fn find_duplicate_blocks(
    root: &Path,
    options: &ScanOptions,
) -> io::Result<Vec<DuplicateBlock>> {
    Ok(find_duplicate_blocks_with_stats(root, options)?.result)
}

pub fn find_duplicate_blocks_with_stats(
    root: &Path,
    options: &ScanOptions,
) -> io::Result<ScanOutcome<Vec<DuplicateBlock>>> {
    scan::validate_root(root)?;

    let mut stats = ScanStats::default();
    let corpus = scan::load_corpus(root, options, &mut stats)?;
    let spans = detect::detect_duplicate_blocks(&corpus, options, &mut stats);

    let result = spans
        .into_iter()
        .map(|span| DuplicateBlock {
            len: span.len,
            a: block_location(&corpus, span.file_a, span.start_a, span.len),
            b: block_location(&corpus, span.file_b, span.start_b, span.len),
        })
        .collect();

    Ok(ScanOutcome { result, stats })
}

fn block_location(corpus: &[SourceFile], file: usize, start: usize, len: usize) -> BlockLocation {
    BlockLocation {
        file,
        path: corpus[file].path.clone(),
        start_line: to_line_number(start + 1),
        end_line: to_line_number(start + len),
    }
}

fn to_line_number(line: usize) -> u32 {
    u32::try_from(line).unwrap_or(u32::MAX)
}
