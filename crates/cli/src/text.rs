use dup_block_scan_core::ScanStats;

use crate::json::{JsonDuplicateBlock, JsonSummary};

pub(crate) fn has_fatal_skips(stats: &ScanStats) -> bool {
    stats.skipped_permission_denied > 0 || stats.skipped_walk_errors > 0
}

pub(crate) fn format_summary(summary: &JsonSummary) -> String {
    format!(
        "Scanned {} files. Found {} duplicate blocks (>= {} lines).\n",
        summary.files_scanned, summary.blocks_found, summary.min_lines
    )
}

pub(crate) fn format_text_blocks(blocks: &[JsonDuplicateBlock], top: usize) -> String {
    let mut out = String::new();
    if blocks.is_empty() || top == 0 {
        return out;
    }
    out.push_str("Top duplicates:\n");
    for block in blocks.iter().take(top) {
        out.push_str(&format!(
            "- {} lines: {}:{} <-> {}:{}\n",
            block.len, block.a.path, block.a.start_line, block.b.path, block.b.start_line
        ));
    }
    out
}

pub(crate) fn format_scan_stats(stats: &ScanStats) -> String {
    let mut out = String::new();
    out.push_str("== scan stats ==\n");
    out.push_str(&format!(
        "candidates={} scanned={} bytes={}\n",
        stats.candidate_files, stats.scanned_files, stats.scanned_bytes
    ));

    let mut skips: Vec<(&str, u64)> = vec![
        ("not_found", stats.skipped_not_found),
        ("permission_denied", stats.skipped_permission_denied),
        ("too_large", stats.skipped_too_large),
        ("binary", stats.skipped_binary),
        ("walk_errors", stats.skipped_walk_errors),
        ("bucket_truncated", stats.skipped_bucket_truncated),
    ];
    skips.retain(|(_, v)| *v > 0);
    if !skips.is_empty() {
        out.push_str("skipped:\n");
        for (k, v) in skips {
            out.push_str(&format!("- {k}={v}\n"));
        }
    }
    out.push('\n');
    out
}
